mod support;

use pretty_assertions::assert_eq;
use support::*;
use vectorfield_core::schema::db::{IndexMethod, Type};
use vectorfield_core::stmt::{Value, VQ};
use vectorfield_core::Schema;

#[test]
fn tables_are_named_after_models() {
    let schema = schema(VQ::new(["name"])).unwrap();
    let names: Vec<_> = schema.db.tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["category", "product", "market", "detail"]);
}

#[test]
fn table_name_prefix() {
    let schema = Schema::builder()
        .table_name_prefix("shop_")
        .build(app_schema(VQ::new(["name"])))
        .unwrap();

    assert_eq!(schema.table_for(PRODUCT).name, "shop_product");
}

#[test]
fn vector_column() {
    let schema = schema(VQ::new(["name"])).unwrap();
    let column = schema.column_for(PRODUCT.field(FULLTEXT)).unwrap();

    assert_eq!(column.name, "fulltext");
    assert_eq!(column.storage_ty, Type::TsVector);
    assert!(column.nullable);
    assert!(column.computed);
    assert_eq!(column.default, Some(Value::String(String::new())));
}

#[test]
fn relations_have_no_column() {
    let schema = schema(VQ::new(["name"])).unwrap();
    assert!(schema.column_for(PRODUCT.field(5)).is_none());
    assert!(schema.column_for(PRODUCT.field(6)).is_none());
}

#[test]
fn primitive_types_map_to_storage() {
    let schema = schema(VQ::new(["name"])).unwrap();
    let table = schema.table_for(PRODUCT);

    let columns: Vec<_> = table
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.storage_ty.clone()))
        .collect();

    assert_eq!(
        columns,
        [
            ("id", Type::Integer(8)),
            ("name", Type::Text),
            ("description", Type::Text),
            ("price", Type::Double),
            ("category_id", Type::Integer(8)),
            ("fulltext", Type::TsVector),
        ]
    );

    let pk: Vec<_> = table.primary_key_columns().map(|c| c.name.as_str()).collect();
    assert_eq!(pk, ["id"]);
}

#[test]
fn indices() {
    let schema = schema(VQ::new(["name"])).unwrap();
    let table = schema.table_for(PRODUCT);

    let indices: Vec<_> = table
        .indices
        .iter()
        .map(|index| (index.name.as_str(), index.method))
        .collect();

    assert_eq!(
        indices,
        [
            ("index_product_by_fulltext", IndexMethod::Gin),
            ("index_product_by_category_id", IndexMethod::BTree),
        ]
    );
}

#[test]
fn has_one_pair_index_is_unique() {
    let schema = schema(VQ::new(["name"])).unwrap();

    let unique = |model: vectorfield_core::schema::app::ModelId| {
        schema
            .table_for(model)
            .indices
            .iter()
            .filter(|index| index.method == IndexMethod::BTree)
            .map(|index| (index.name.clone(), index.unique))
            .collect::<Vec<_>>()
    };

    // `Product::detail` pairs with `Detail::product`
    assert_eq!(unique(DETAIL), [("index_detail_by_product_id".to_string(), true)]);
    assert_eq!(unique(PRODUCT), [("index_product_by_category_id".to_string(), false)]);
    assert_eq!(unique(CATEGORY), [("index_category_by_market_id".to_string(), false)]);
}

#[test]
fn duplicate_table_name_is_rejected() {
    let mut app = app_schema(VQ::new(["name"]));
    app.models[MARKET.0].table_name = Some("category".to_string());

    let err = Schema::builder().build(app).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn missing_primary_key_is_rejected() {
    let mut app = app_schema(VQ::new(["name"]));
    app.models[MARKET.0].primary_key.fields.clear();

    let err = Schema::builder().build(app).unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(err.to_string(), "invalid schema: model `Market` has no primary key");
}

#[test]
fn unattached_content_is_rejected() {
    let mut app = app_schema(VQ::new(["name"]));
    let field = &mut app.models[PRODUCT.0].fields[FULLTEXT];
    if let vectorfield_core::schema::app::FieldTy::Vector(vector) = &mut field.ty {
        vector.content = VQ::new(["name"]);
    }

    let err = Schema::builder().build(app).unwrap_err();
    assert!(err.is_unattached_model());
}

#[test]
fn empty_content_is_rejected() {
    let err = schema(VQ::default()).unwrap_err();
    assert!(err.is_invalid_schema());
}
