mod primitive;
pub use primitive::FieldPrimitive;

mod vector;
pub use vector::FieldVector;

use super::{BelongsTo, HasOne, ModelId, Schema};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Primitive, relation, or derived vector
    pub ty: FieldTy,

    /// True if the field can be nullable (`None` in Rust).
    pub nullable: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn new(app_name: impl Into<String>) -> Self {
        FieldName {
            app_name: app_name.into(),
            storage_name: None,
        }
    }

    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

#[derive(Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    BelongsTo(BelongsTo),
    HasOne(HasOne),
    Vector(FieldVector),
}

impl Field {
    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let model = schema.model(self.id.model);
        format!("{}::{}", model.name.upper_camel_case(), self.name.app_name)
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Self::BelongsTo(belongs_to) => Some(belongs_to),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_belongs_to(&self) -> &BelongsTo {
        match self {
            Self::BelongsTo(belongs_to) => belongs_to,
            _ => panic!("expected field to be `BelongsTo`, but was {self:?}"),
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(..))
    }

    pub fn as_vector(&self) -> Option<&FieldVector> {
        match self {
            Self::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_vector(&self) -> &FieldVector {
        match self {
            Self::Vector(vector) => vector,
            _ => panic!("expected vector field, but was {self:?}"),
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::BelongsTo(ty) => ty.fmt(fmt),
            Self::HasOne(ty) => ty.fmt(fmt),
            Self::Vector(ty) => ty.fmt(fmt),
        }
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
