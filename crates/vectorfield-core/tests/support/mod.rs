#![allow(dead_code)]

use vectorfield_core::schema::app::{self, *};
use vectorfield_core::schema::Name;
use vectorfield_core::stmt::{self, TextSearchConfig, VectorQuery};
use vectorfield_core::{Result, Schema};

pub const CATEGORY: ModelId = ModelId(0);
pub const PRODUCT: ModelId = ModelId(1);
pub const MARKET: ModelId = ModelId(2);
pub const DETAIL: ModelId = ModelId(3);

/// Index of `Product::fulltext`
pub const FULLTEXT: usize = 7;

pub fn prim(model: ModelId, index: usize, name: &str, ty: stmt::Type) -> Field {
    Field {
        id: model.field(index),
        name: FieldName::new(name),
        ty: FieldTy::Primitive(FieldPrimitive::new(ty)),
        nullable: false,
    }
}

pub fn belongs_to(model: ModelId, index: usize, name: &str, target: ModelId, fk: usize) -> Field {
    Field {
        id: model.field(index),
        name: FieldName::new(name),
        ty: FieldTy::BelongsTo(BelongsTo {
            target,
            foreign_key: ForeignKey {
                fields: vec![ForeignKeyField {
                    source: model.field(fk),
                    target: target.field(0),
                }],
            },
        }),
        nullable: false,
    }
}

pub fn has_one(model: ModelId, index: usize, name: &str, target: ModelId, pair: usize) -> Field {
    Field {
        id: model.field(index),
        name: FieldName::new(name),
        ty: FieldTy::HasOne(HasOne {
            target,
            pair: target.field(pair),
        }),
        nullable: true,
    }
}

pub fn vector(model: ModelId, index: usize, name: &str, content: VectorQuery) -> Field {
    let config = TextSearchConfig::name("english");

    Field {
        id: model.field(index),
        name: FieldName::new(name),
        ty: FieldTy::Vector(FieldVector {
            content: content
                .attach(model, &config)
                .expect("content attaches"),
            config,
        }),
        nullable: true,
    }
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
///   Category { id, label, market_id, market: BelongsTo<Market> }
///   Product { id, name, description, price, category_id,
///             category: BelongsTo<Category>, detail: HasOne<Detail>, fulltext }
///   Market { id, language }
///   Detail { id, product_id, product: BelongsTo<Product>, summary }
pub fn app_schema(content: VectorQuery) -> app::Schema {
    app::Schema::from_models([
        model(
            CATEGORY,
            "Category",
            vec![
                prim(CATEGORY, 0, "id", stmt::Type::I64),
                prim(CATEGORY, 1, "label", stmt::Type::String),
                prim(CATEGORY, 2, "market_id", stmt::Type::I64),
                belongs_to(CATEGORY, 3, "market", MARKET, 2),
            ],
        ),
        model(
            PRODUCT,
            "Product",
            vec![
                prim(PRODUCT, 0, "id", stmt::Type::I64),
                prim(PRODUCT, 1, "name", stmt::Type::String),
                prim(PRODUCT, 2, "description", stmt::Type::String),
                prim(PRODUCT, 3, "price", stmt::Type::F64),
                prim(PRODUCT, 4, "category_id", stmt::Type::I64),
                belongs_to(PRODUCT, 5, "category", CATEGORY, 4),
                has_one(PRODUCT, 6, "detail", DETAIL, 2),
                vector(PRODUCT, FULLTEXT, "fulltext", content),
            ],
        ),
        model(
            MARKET,
            "Market",
            vec![
                prim(MARKET, 0, "id", stmt::Type::I64),
                prim(MARKET, 1, "language", stmt::Type::String),
            ],
        ),
        model(
            DETAIL,
            "Detail",
            vec![
                prim(DETAIL, 0, "id", stmt::Type::I64),
                prim(DETAIL, 1, "product_id", stmt::Type::I64),
                belongs_to(DETAIL, 2, "product", PRODUCT, 1),
                prim(DETAIL, 3, "summary", stmt::Type::String),
            ],
        ),
    ])
    .expect("model ids are positional")
}

pub fn schema(content: VectorQuery) -> Result<Schema> {
    Schema::builder().build(app_schema(content))
}
