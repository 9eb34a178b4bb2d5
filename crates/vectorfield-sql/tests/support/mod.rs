#![allow(dead_code)]

use vectorfield_core::schema::app::{self, *};
use vectorfield_core::schema::Name;
use vectorfield_core::stmt::{self, TextSearchConfig, VectorQuery};
use vectorfield_core::Schema;

pub const CATEGORY: ModelId = ModelId(0);
pub const PRODUCT: ModelId = ModelId(1);
pub const SECTION: ModelId = ModelId(2);

pub const FULLTEXT: FieldId = PRODUCT.field(6);

fn field(model: ModelId, index: usize, name: &str, ty: FieldTy) -> Field {
    Field {
        id: model.field(index),
        name: FieldName::new(name),
        ty,
        nullable: false,
    }
}

fn prim(ty: stmt::Type) -> FieldTy {
    FieldTy::Primitive(FieldPrimitive::new(ty))
}

fn belongs_to(model: ModelId, target: ModelId, fk: usize) -> FieldTy {
    FieldTy::BelongsTo(BelongsTo {
        target,
        foreign_key: ForeignKey {
            fields: vec![ForeignKeyField {
                source: model.field(fk),
                target: target.field(0),
            }],
        },
    })
}

fn model(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
    Model {
        id,
        name: Name::new(name),
        fields,
        primary_key: PrimaryKey {
            fields: vec![id.field(0)],
        },
        table_name: None,
    }
}

/// Schema:
///   Category { id, label, section_id, section: BelongsTo<Section> }
///   Product { id, name, description, stock, category_id,
///             category: BelongsTo<Category>, fulltext }
///   Section { id, title }
///
/// `Product::fulltext` holds `content` with the `english` configuration.
pub fn schema(content: VectorQuery) -> Schema {
    let config = TextSearchConfig::name("english");
    let content = content.attach(PRODUCT, &config).expect("content attaches");

    let app = app::Schema::from_models([
        model(
            CATEGORY,
            "Category",
            vec![
                field(CATEGORY, 0, "id", prim(stmt::Type::I64)),
                field(CATEGORY, 1, "label", prim(stmt::Type::String)),
                field(CATEGORY, 2, "section_id", prim(stmt::Type::I64)),
                field(CATEGORY, 3, "section", belongs_to(CATEGORY, SECTION, 2)),
            ],
        ),
        model(
            PRODUCT,
            "Product",
            vec![
                field(PRODUCT, 0, "id", prim(stmt::Type::I64)),
                field(PRODUCT, 1, "name", prim(stmt::Type::String)),
                field(PRODUCT, 2, "description", prim(stmt::Type::String)),
                field(PRODUCT, 3, "stock", prim(stmt::Type::I32)),
                field(PRODUCT, 4, "category_id", prim(stmt::Type::I64)),
                field(PRODUCT, 5, "category", belongs_to(PRODUCT, CATEGORY, 4)),
                Field {
                    nullable: true,
                    ..field(
                        PRODUCT,
                        6,
                        "fulltext",
                        FieldTy::Vector(FieldVector { content, config }),
                    )
                },
            ],
        ),
        model(
            SECTION,
            "Section",
            vec![
                field(SECTION, 0, "id", prim(stmt::Type::I64)),
                field(SECTION, 1, "title", prim(stmt::Type::String)),
            ],
        ),
    ])
    .expect("model ids are positional");

    Schema::builder().build(app).expect("schema builds")
}
