mod support;

use pretty_assertions::assert_eq;
use support::*;
use vectorfield_core::stmt::{Vector, Weight, VQ};
use vectorfield_core::vq;
use vectorfield_sql::Serializer;

fn render(content: VQ) -> vectorfield_core::Result<String> {
    let schema = schema(content);
    Serializer::postgresql(&schema).serialize_field(FULLTEXT)
}

#[test]
fn single_leaf() {
    assert_eq!(
        render(VQ::new(["name"])).unwrap(),
        r#"setweight(to_tsvector('english', coalesce("product"."name", '')), 'D')"#
    );
}

#[test]
fn or_of_two_leaves() {
    assert_eq!(
        render(VQ::new(["name"]) | VQ::weighted([("description", Weight::B)])).unwrap(),
        r#"(setweight(to_tsvector('english', coalesce("product"."name", '')), 'D') || setweight(to_tsvector('english', coalesce("product"."description", '')), 'B'))"#
    );
}

#[test]
fn and_connector() {
    assert_eq!(
        render(VQ::new(["name"]) & VQ::new(["description"])).unwrap(),
        r#"(setweight(to_tsvector('english', coalesce("product"."name", '')), 'D') && setweight(to_tsvector('english', coalesce("product"."description", '')), 'D'))"#
    );
}

#[test]
fn related_column() {
    assert_eq!(
        render(vq!(category__label = A)).unwrap(),
        r#"setweight(to_tsvector('english', coalesce("category"."label", '')), 'A')"#
    );
}

#[test]
fn nested_tree() {
    let content = VQ::new(["name"]) | (VQ::new(["description"]) & vq!(category__section__title = C));

    assert_eq!(
        render(content).unwrap(),
        concat!(
            r#"(setweight(to_tsvector('english', coalesce("product"."name", '')), 'D') || "#,
            r#"(setweight(to_tsvector('english', coalesce("product"."description", '')), 'D') && "#,
            r#"setweight(to_tsvector('english', coalesce("section"."title", '')), 'C')))"#,
        )
    );
}

#[test]
fn non_text_column_is_cast() {
    assert_eq!(
        render(VQ::new(["stock"])).unwrap(),
        r#"setweight(to_tsvector('english', coalesce("product"."stock"::text, '')), 'D')"#
    );
}

#[test]
fn leaf_config_is_escaped() {
    let content = VQ::from_vectors([Vector::new("name").config("it's")]);

    assert_eq!(
        render(content).unwrap(),
        r#"setweight(to_tsvector('it''s', coalesce("product"."name", '')), 'D')"#
    );
}

#[test]
fn rendering_is_idempotent() {
    let schema = schema(vq!("name", description = B));
    let serializer = Serializer::postgresql(&schema);

    assert_eq!(
        serializer.serialize_field(FULLTEXT).unwrap(),
        serializer.serialize_field(FULLTEXT).unwrap()
    );
}

#[test]
fn negated_tree_is_rejected() {
    let err = render(!VQ::new(["name"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "rendering `Product::fulltext`: unsupported feature: cannot render negated vector \
         expression `!! (||: name:D)`; tsvector has no negation operator"
    );
}

#[test]
fn unknown_lookup_names_the_field() {
    let err = render(VQ::new(["nme"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "rendering `Product::fulltext`: unknown field: `Product` has no field `nme`"
    );
}

#[test]
fn non_vector_field_is_rejected() {
    let schema = schema(VQ::new(["name"]));
    let err = Serializer::postgresql(&schema)
        .serialize_field(PRODUCT.field(1))
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn other_flavors_have_no_text_search() {
    let schema = schema(VQ::new(["name"]));

    for (serializer, name) in [
        (Serializer::sqlite(&schema), "SQLite"),
        (Serializer::mysql(&schema), "MySQL"),
    ] {
        let err = serializer.serialize_field(FULLTEXT).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "rendering `Product::fulltext`: unsupported feature: text search is not supported by {name}"
            )
        );
    }
}

#[test]
fn unattached_tree_is_rejected() {
    let schema = schema(VQ::new(["name"]));
    let err = Serializer::postgresql(&schema)
        .serialize_vector(&VQ::new(["name"]))
        .unwrap_err();

    assert!(err.is_unattached_model());
}
