#![allow(dead_code)]

use vectorfield::schema::{Field, Model};
use vectorfield::stmt::{Type, VectorQuery};
use vectorfield::VectorField;

pub fn category() -> Model {
    Model::new("Category")
        .field(Field::primitive("id", Type::I64))
        .field(Field::primitive("label", Type::String))
}

pub fn product(fulltext: VectorField) -> Model {
    Model::new("Product")
        .field(Field::primitive("id", Type::I64))
        .field(Field::primitive("name", Type::String))
        .field(Field::primitive("description", Type::String).nullable())
        .field(Field::primitive("category_id", Type::I64))
        .field(Field::belongs_to("category", "Category", "category_id"))
        .field(Field::has_one("detail", "Detail", "product"))
        .field(Field::vector("fulltext", fulltext))
}

pub fn detail() -> Model {
    Model::new("Detail")
        .field(Field::primitive("id", Type::I64))
        .field(Field::primitive("product_id", Type::I64))
        .field(Field::belongs_to("product", "Product", "product_id"))
        .field(Field::primitive("summary", Type::String))
}

pub fn db(content: VectorQuery) -> vectorfield::Db {
    vectorfield::Db::builder()
        .register(category())
        .register(product(VectorField::new(content).config("english")))
        .register(detail())
        .build()
        .expect("schema builds")
}
