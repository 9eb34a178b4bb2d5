use super::VectorField;

use vectorfield_core::{
    schema::{app, db},
    stmt,
};

/// A field as declared, before model ids are assigned. Relations name
/// their target model and fields.
#[derive(Debug, Clone)]
pub struct Field {
    /// The field name
    pub name: String,

    /// Column name, if different from the field name
    pub storage_name: Option<String>,

    pub ty: FieldTy,

    /// True if the field can be nullable (`None` in Rust).
    pub nullable: bool,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive(app::FieldPrimitive),
    BelongsTo(BelongsTo),
    HasOne(HasOne),
    Vector(VectorField),
}

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Name of the target model
    pub target: String,

    pub foreign_key: Vec<ForeignKeyField>,
}

#[derive(Debug, Clone)]
pub struct ForeignKeyField {
    /// Field on this model storing the key
    pub source: String,

    /// Primary key field of the target model
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Name of the target model
    pub target: String,

    /// `BelongsTo` field on the target pointing back
    pub pair: String,
}

impl Field {
    fn new(name: impl Into<String>, ty: FieldTy) -> Field {
        Field {
            name: name.into(),
            storage_name: None,
            ty,
            nullable: false,
        }
    }

    pub fn primitive(name: impl Into<String>, ty: stmt::Type) -> Field {
        Field::new(name, FieldTy::Primitive(app::FieldPrimitive::new(ty)))
    }

    /// A relation stored in `source`, referencing the target's `id`.
    pub fn belongs_to(
        name: impl Into<String>,
        target: impl Into<String>,
        source: impl Into<String>,
    ) -> Field {
        Field::belongs_to_key(name, target, [(source, "id")])
    }

    /// A relation with an explicit `(source, target)` key mapping.
    pub fn belongs_to_key<S, T>(
        name: impl Into<String>,
        target: impl Into<String>,
        key: impl IntoIterator<Item = (S, T)>,
    ) -> Field
    where
        S: Into<String>,
        T: Into<String>,
    {
        Field::new(
            name,
            FieldTy::BelongsTo(BelongsTo {
                target: target.into(),
                foreign_key: key
                    .into_iter()
                    .map(|(source, target)| ForeignKeyField {
                        source: source.into(),
                        target: target.into(),
                    })
                    .collect(),
            }),
        )
    }

    pub fn has_one(
        name: impl Into<String>,
        target: impl Into<String>,
        pair: impl Into<String>,
    ) -> Field {
        Field {
            nullable: true,
            ..Field::new(
                name,
                FieldTy::HasOne(HasOne {
                    target: target.into(),
                    pair: pair.into(),
                }),
            )
        }
    }

    /// A derived text-search column. Always nullable.
    pub fn vector(name: impl Into<String>, field: VectorField) -> Field {
        Field {
            nullable: true,
            ..Field::new(name, FieldTy::Vector(field))
        }
    }

    pub fn nullable(mut self) -> Field {
        self.nullable = true;
        self
    }

    pub fn storage_name(mut self, name: impl Into<String>) -> Field {
        self.storage_name = Some(name.into());
        self
    }

    /// Overrides the column type of a primitive field.
    pub fn storage_ty(mut self, storage_ty: db::Type) -> Field {
        if let FieldTy::Primitive(primitive) = &mut self.ty {
            primitive.storage_ty = Some(storage_ty);
        }
        self
    }
}
