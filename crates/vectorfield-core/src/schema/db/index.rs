use super::{ColumnId, TableId};

use std::fmt;

#[derive(Debug, Clone)]
pub struct Index {
    /// Uniquely identifies the index within the schema
    pub id: IndexId,

    /// Index name is unique within the schema
    pub name: String,

    /// The table being indexed
    pub on: TableId,

    /// Columns included in the index.
    pub columns: Vec<ColumnId>,

    /// When `true`, indexed entries are unique
    pub unique: bool,

    /// Access method of the index
    pub method: IndexMethod,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct IndexId {
    pub table: TableId,
    pub index: usize,
}

/// Index access method.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IndexMethod {
    /// The database's default ordered index
    #[default]
    BTree,

    /// Generalized inverted index, used for `tsvector` columns
    Gin,
}

impl fmt::Debug for IndexId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "IndexId({}/{})", self.table.0, self.index)
    }
}
