mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod name;
pub use name::Name;

mod refresh_vector;
pub use refresh_vector::RefreshVector;

mod search;
pub use search::{QueryParser, Search};

pub use vectorfield_core::stmt::*;

use vectorfield_core::schema::db::IndexMethod;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    RefreshVector(RefreshVector),
    Search(Search),
}

impl Statement {
    /// True if rendering the statement needs PostgreSQL's text-search
    /// support.
    pub fn uses_text_search(&self) -> bool {
        match self {
            Statement::CreateIndex(stmt) => stmt.method == IndexMethod::Gin,
            Statement::CreateTable(stmt) => {
                stmt.columns.iter().any(|column| column.ty.is_text_search())
            }
            Statement::RefreshVector(_) | Statement::Search(_) => true,
        }
    }
}
