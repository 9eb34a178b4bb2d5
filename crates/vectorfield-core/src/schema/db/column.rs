use super::{TableId, Type};
use crate::stmt;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub storage_ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Value used when a row is inserted without one
    pub default: Option<stmt::Value>,

    /// True when the value is computed by the database and never written by
    /// the application (vector fields).
    pub computed: bool,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
