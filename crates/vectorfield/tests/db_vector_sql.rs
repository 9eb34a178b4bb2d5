mod support;

use pretty_assertions::assert_eq;
use support::*;
use vectorfield::stmt::{Vector, Weight, VQ};
use vectorfield::{vq, Db, VectorField};

#[test]
fn single_field() {
    let db = db(VQ::new(["name"]));

    assert_eq!(
        db.vector_sql("Product", "fulltext").unwrap(),
        r#"setweight(to_tsvector('english', coalesce("product"."name", '')), 'D')"#
    );
}

#[test]
fn weighted_or() {
    let db = db(VQ::new(["name"]) | VQ::weighted([("description", Weight::B)]));

    assert_eq!(
        db.vector_sql("Product", "fulltext").unwrap(),
        concat!(
            r#"(setweight(to_tsvector('english', coalesce("product"."name", '')), 'D') || "#,
            r#"setweight(to_tsvector('english', coalesce("product"."description", '')), 'B'))"#,
        )
    );
}

#[test]
fn related_fields() {
    let db = db(vq!(category__label = A, detail__summary = C));

    assert_eq!(
        db.vector_sql("Product", "fulltext").unwrap(),
        concat!(
            r#"(setweight(to_tsvector('english', coalesce("category"."label", '')), 'A') || "#,
            r#"setweight(to_tsvector('english', coalesce("detail"."summary", '')), 'C'))"#,
        )
    );
}

#[test]
fn field_config_fills_unset_leaves() {
    let db = Db::builder()
        .register(category())
        .register(product(
            VectorField::new(VQ::from_vectors([
                Vector::new("name"),
                Vector::new("description").config("simple"),
            ]))
            .config("pg_catalog.english"),
        ))
        .register(detail())
        .build()
        .unwrap();

    assert_eq!(
        db.vector_sql("Product", "fulltext").unwrap(),
        concat!(
            r#"(setweight(to_tsvector('pg_catalog.english', coalesce("product"."name", '')), 'D') || "#,
            r#"setweight(to_tsvector('simple', coalesce("product"."description", '')), 'D'))"#,
        )
    );
}

#[test]
fn builder_default_config() {
    let db = Db::builder()
        .default_config("pg_catalog.french")
        .register(category())
        .register(product(VectorField::new(VQ::new(["name"]))))
        .register(detail())
        .build()
        .unwrap();

    assert_eq!(
        db.vector_sql("Product", "fulltext").unwrap(),
        r#"setweight(to_tsvector('pg_catalog.french', coalesce("product"."name", '')), 'D')"#
    );
}

#[test]
fn default_config_is_english() {
    let db = Db::builder()
        .register(category())
        .register(product(VectorField::new(VQ::new(["name"]))))
        .register(detail())
        .build()
        .unwrap();

    assert_eq!(
        db.vector_sql("Product", "fulltext").unwrap(),
        r#"setweight(to_tsvector('pg_catalog.english', coalesce("product"."name", '')), 'D')"#
    );
}

#[test]
fn declared_tree_is_untouched_by_build() {
    let content = vq!("name", description = B);
    let db = db(content.clone());

    assert!(content.vectors().iter().all(|vector| !vector.is_attached()));
    assert!(db.vector_sql("Product", "fulltext").is_ok());
}

#[test]
fn unknown_lookup() {
    let db = db(VQ::new(["category__title"]));
    let err = db.vector_sql("Product", "fulltext").unwrap_err();

    assert_eq!(
        err.to_string(),
        "rendering `Product::fulltext`: unknown field: `Category` has no field `title`"
    );
}

#[test]
fn scalar_is_not_traversable() {
    let db = db(VQ::new(["name__label"]));
    let err = db.vector_sql("Product", "fulltext").unwrap_err();

    assert_eq!(
        err.to_string(),
        "rendering `Product::fulltext`: non-traversable field: `Product::name` is not a relation \
         (lookup `name__label`)"
    );
}

#[test]
fn negation_is_rejected_when_rendering() {
    // Building succeeds: the tree is only checked once SQL is requested
    let db = db(!VQ::new(["name"]));
    let err = db.vector_sql("Product", "fulltext").unwrap_err();

    assert!(err.to_string().contains("unsupported feature"), "err={err}");
}

#[test]
fn unknown_vector_field() {
    let db = db(VQ::new(["name"]));

    assert!(db.vector_sql("Product", "body").unwrap_err().is_unknown_field());
    assert!(db.vector_sql("Product", "name").unwrap_err().is_invalid_schema());
    assert!(db.vector_sql("Order", "fulltext").unwrap_err().is_invalid_schema());
}
