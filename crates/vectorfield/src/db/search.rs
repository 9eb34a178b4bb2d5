use super::Db;

use vectorfield_core::{schema::app::FieldId, stmt::Value, Result};
use vectorfield_sql::stmt::{self, QueryParser};

/// A search against one vector field, rendered with [`Search::to_sql`].
#[derive(Debug)]
pub struct Search<'a> {
    db: &'a Db,
    stmt: stmt::Search,
}

impl<'a> Search<'a> {
    pub(super) fn new(db: &'a Db, field: FieldId, query: String) -> Search<'a> {
        Search {
            db,
            stmt: stmt::Search::new(field, query),
        }
    }

    pub fn parser(mut self, parser: QueryParser) -> Self {
        self.stmt = self.stmt.parser(parser);
        self
    }

    /// Overrides the field's text-search configuration
    pub fn config(mut self, config: impl Into<String>) -> Self {
        self.stmt = self.stmt.config(config);
        self
    }

    /// Orders matches by `ts_rank`, best first
    pub fn ranked(mut self) -> Self {
        self.stmt = self.stmt.rank(true);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.stmt = self.stmt.limit(limit);
        self
    }

    /// The SQL text and its parameters.
    pub fn to_sql(&self) -> Result<(String, Vec<Value>)> {
        let mut params = Vec::<Value>::new();
        let sql = self
            .db
            .serializer()
            .serialize(&self.stmt.clone().into(), &mut params)?;

        Ok((sql, params))
    }
}
