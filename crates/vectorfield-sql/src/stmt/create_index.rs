use super::{Name, Statement};

use vectorfield_core::schema::db::{ColumnId, Index, IndexMethod, TableId};

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: TableId,

    /// The columns to index
    pub columns: Vec<ColumnId>,

    /// When true, the index is unique
    pub unique: bool,

    /// Access method; `Gin` renders `USING GIN`
    pub method: IndexMethod,
}

impl Statement {
    pub fn create_index(index: &Index) -> Self {
        CreateIndex {
            name: Name::from(&index.name[..]),
            on: index.on,
            columns: index.columns.clone(),
            unique: index.unique,
            method: index.method,
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
