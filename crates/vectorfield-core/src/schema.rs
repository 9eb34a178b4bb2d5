pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

pub mod mapping;
use mapping::Mapping;

mod name;
pub use name::Name;

mod verify;

use app::{FieldId, ModelId};
use db::{Column, Table, TableId};
use std::sync::Arc;

#[derive(Debug)]
pub struct Schema {
    /// Application-level schema
    pub app: app::Schema,

    /// Database-level schema
    pub db: Arc<db::Schema>,

    /// Maps the app-level schema to the db-level schema
    pub mapping: Mapping,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn table_for(&self, id: impl Into<ModelId>) -> &Table {
        self.db.table(self.table_id_for(id))
    }

    pub fn table_id_for(&self, id: impl Into<ModelId>) -> TableId {
        self.mapping.model(id).table
    }

    /// Returns the column storing `field`, or `None` for fields without
    /// storage (relations).
    pub fn column_for(&self, field: FieldId) -> Option<&Column> {
        let mapping = self.mapping.model(field.model);
        let column = mapping.fields.get(field.index)?.as_ref()?.column;
        Some(self.db.column(column))
    }
}
