mod support;

use pretty_assertions::assert_eq;
use support::*;
use vectorfield_core::stmt::{Value, VQ};
use vectorfield_sql::{stmt::QueryParser, stmt::Search, Serializer, Statement};

#[test]
fn plain_search() {
    let schema = schema(VQ::new(["name"]));
    let mut params = Vec::<Value>::new();

    let sql = Serializer::postgresql(&schema)
        .serialize(&Statement::search(FULLTEXT, "red shoes"), &mut params)
        .unwrap();

    assert_eq!(
        sql,
        r#"SELECT "product"."id" FROM "product" WHERE "product"."fulltext" @@ plainto_tsquery('english', $1);"#
    );
    assert_eq!(params, [Value::from("red shoes")]);
}

#[test]
fn ranked_and_limited() {
    let schema = schema(VQ::new(["name"]));
    let mut params = Vec::<Value>::new();

    let stmt = Search::new(FULLTEXT, "\"red shoes\" -boots")
        .parser(QueryParser::Websearch)
        .config("simple")
        .rank(true)
        .limit(10);

    let sql = Serializer::postgresql(&schema)
        .serialize(&stmt.into(), &mut params)
        .unwrap();

    assert_eq!(
        sql,
        concat!(
            r#"SELECT "product"."id" FROM "product" "#,
            r#"WHERE "product"."fulltext" @@ websearch_to_tsquery('simple', $1) "#,
            r#"ORDER BY ts_rank("product"."fulltext", websearch_to_tsquery('simple', $1)) DESC "#,
            r#"LIMIT $2;"#,
        )
    );
    assert_eq!(
        params,
        [Value::from("\"red shoes\" -boots"), Value::I64(10)]
    );
}

#[test]
fn parser_functions() {
    let names: Vec<_> = [
        QueryParser::Plain,
        QueryParser::Phrase,
        QueryParser::Websearch,
        QueryParser::Raw,
    ]
    .into_iter()
    .map(QueryParser::function_name)
    .collect();

    assert_eq!(
        names,
        [
            "plainto_tsquery",
            "phraseto_tsquery",
            "websearch_to_tsquery",
            "to_tsquery"
        ]
    );
}

#[test]
fn search_needs_a_vector_field() {
    let schema = schema(VQ::new(["name"]));
    let err = Serializer::postgresql(&schema)
        .serialize(&Statement::search(PRODUCT.field(1), "red"), &mut Vec::<Value>::new())
        .unwrap_err();

    assert!(err.is_invalid_schema());
}
