//! Database-level schema

mod column;
pub use column::{Column, ColumnId};

mod index;
pub use index::{Index, IndexId, IndexMethod};

mod pk;
pub use pk::PrimaryKey;

mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;
