use super::Serializer;

use vectorfield_core::Schema;

use std::fmt;

/// SQL dialect targeted by the serializer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    #[default]
    Postgresql,
    Sqlite,
    Mysql,
}

impl Flavor {
    pub(super) fn identifier_quote(self) -> char {
        match self {
            Flavor::Postgresql | Flavor::Sqlite => '"',
            Flavor::Mysql => '`',
        }
    }

    /// Only PostgreSQL has `tsvector`.
    pub fn supports_text_search(self) -> bool {
        matches!(self, Flavor::Postgresql)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flavor::Postgresql => "PostgreSQL",
            Flavor::Sqlite => "SQLite",
            Flavor::Mysql => "MySQL",
        })
    }
}

impl<'a> Serializer<'a> {
    pub fn sqlite(schema: &'a Schema) -> Serializer<'a> {
        Serializer::new(schema, Flavor::Sqlite)
    }

    pub fn postgresql(schema: &'a Schema) -> Serializer<'a> {
        Serializer::new(schema, Flavor::Postgresql)
    }

    pub fn mysql(schema: &'a Schema) -> Serializer<'a> {
        Serializer::new(schema, Flavor::Mysql)
    }
}
