mod table;

use super::{app, db, mapping, Mapping, Schema};
use crate::{Error, Result};

use db::{Table, TableId};
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    /// Maps table names to identifiers. The identifiers are reserved before the
    /// table objects are actually created.
    table_lookup: IndexMap<String, TableId>,

    /// Tables as they are built
    tables: Vec<Table>,

    /// App-level to db-level schema mapping
    mapping: Mapping,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Lowers the application schema to tables and builds the mapping
    /// between them.
    pub fn build(&self, app: app::Schema) -> Result<Schema> {
        app.verify()?;

        let mut builder = BuildSchema {
            builder: self,
            table_lookup: IndexMap::new(),
            tables: vec![],
            mapping: Mapping::default(),
        };

        for model in app.models() {
            let table = builder.build_table_stub_for_model(model)?;

            builder.mapping.models.insert(
                model.id,
                mapping::Model {
                    id: model.id,
                    table,
                    fields: vec![None; model.fields.len()],
                },
            );
        }

        builder.build_tables_from_models(&app);

        let schema = Schema {
            app,
            db: Arc::new(db::Schema {
                tables: builder.tables,
            }),
            mapping: builder.mapping,
        };

        schema.verify()?;

        tracing::debug!(
            models = schema.app.models.len(),
            tables = schema.db.tables.len(),
            "built schema"
        );

        Ok(schema)
    }
}

impl BuildSchema<'_> {
    fn register_table(&mut self, name: &str) -> Result<TableId> {
        if self.table_lookup.contains_key(name) {
            return Err(Error::invalid_schema(format!(
                "more than one model is stored in table `{name}`"
            )));
        }

        let id = TableId(self.table_lookup.len());
        self.table_lookup.insert(name.to_string(), id);
        Ok(id)
    }
}
