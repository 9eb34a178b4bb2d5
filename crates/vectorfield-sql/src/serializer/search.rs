use super::{Comma, ColumnRef, Ident, Literal, Params, Placeholder, Serializer, ToSql};

use crate::stmt::{QueryParser, Search};
use vectorfield_core::{
    schema::db::{Column, Table},
    stmt::Value,
    Error, Result,
};

pub(super) struct PreparedSearch<'a> {
    table: &'a Table,
    vector: &'a Column,
    config: String,
    query: &'a str,
    parser: QueryParser,
    rank: bool,
    limit: Option<i64>,
}

#[derive(Clone, Copy)]
struct TsQuery<'a> {
    parser: QueryParser,
    config: &'a str,
    query: Placeholder,
}

impl<'a> Serializer<'a> {
    pub(super) fn prepare_search<'s>(&self, stmt: &'s Search) -> Result<PreparedSearch<'s>>
    where
        'a: 's,
    {
        let field = self.schema.app.field(stmt.field);

        let Some(vector) = field.ty.as_vector() else {
            return Err(Error::invalid_schema(format!(
                "cannot search `{}`: not a vector field",
                field.full_name(&self.schema.app)
            )));
        };

        let Some(column) = self.schema.column_for(stmt.field) else {
            return Err(Error::invalid_schema(format!(
                "vector field `{}` has no column",
                field.full_name(&self.schema.app)
            )));
        };

        let config = match &stmt.config {
            Some(config) => config.clone(),
            None => vector
                .config
                .resolve(self.schema.app.model(stmt.field.model)),
        };

        Ok(PreparedSearch {
            table: self.table(column.id.table),
            vector: column,
            config,
            query: &stmt.query,
            parser: stmt.parser,
            rank: stmt.rank,
            limit: stmt.limit,
        })
    }
}

impl ToSql for TsQuery<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            self.parser.function_name(),
            "(",
            Literal(self.config),
            ", ",
            self.query,
            ")"
        );
    }
}

impl ToSql for &PreparedSearch<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table.name;
        let pk = Comma(
            self.table
                .primary_key_columns()
                .map(|column| ColumnRef::new(table, &column.name)),
        );
        let vector = ColumnRef::new(table, &self.vector.name);
        let tsquery = TsQuery {
            parser: self.parser,
            config: &self.config,
            query: f.params.push(&Value::String(self.query.to_string())),
        };

        fmt!(
            f,
            "SELECT ",
            pk,
            " FROM ",
            Ident(table),
            " WHERE ",
            vector,
            " @@ ",
            tsquery
        );

        if self.rank {
            fmt!(f, " ORDER BY ts_rank(", vector, ", ", tsquery, ") DESC");
        }

        if let Some(limit) = self.limit {
            let limit = f.params.push(&Value::I64(limit));
            fmt!(f, " LIMIT ", limit);
        }
    }
}
