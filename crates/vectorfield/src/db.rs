mod builder;
pub use builder::Builder;

mod search;
pub use search::Search;

use vectorfield_core::{
    schema::app::{FieldId, Model},
    stmt::Value,
    Error, Result, Schema,
};
use vectorfield_sql::{Flavor, Serializer, Statement};

use std::sync::Arc;

/// Owns a built schema and produces the SQL of its vector fields.
///
/// Nothing is executed: every operation returns SQL text.
#[derive(Debug, Clone)]
pub struct Db {
    schema: Arc<Schema>,
    flavor: Flavor,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.schema, self.flavor)
    }

    /// `CREATE TABLE` and `CREATE INDEX` statements for every table.
    pub fn create_tables(&self) -> Result<Vec<String>> {
        let serializer = self.serializer();
        let mut params = Vec::<Value>::new();
        let mut ret = vec![];

        for table in &self.schema.db.tables {
            ret.push(serializer.serialize(&Statement::create_table(table), &mut params)?);

            for index in &table.indices {
                ret.push(serializer.serialize(&Statement::create_index(index), &mut params)?);
            }
        }

        Ok(ret)
    }

    /// The `tsvector` expression of `model.field`.
    pub fn vector_sql(&self, model: &str, field: &str) -> Result<String> {
        let field = self.vector_field(model, field)?;
        self.serializer().serialize_field(field)
    }

    /// Statement storing the document of `model.field` in every row.
    pub fn refresh(&self, model: &str, field: &str) -> Result<String> {
        let field = self.vector_field(model, field)?;
        self.serializer()
            .serialize(&Statement::refresh_vector(field), &mut Vec::<Value>::new())
    }

    /// Refresh statements for every vector field of every model.
    pub fn refresh_all(&self) -> Result<Vec<String>> {
        let serializer = self.serializer();

        self.schema
            .app
            .models()
            .flat_map(Model::vector_fields)
            .map(|(field, _)| {
                let stmt = Statement::refresh_vector(field.id);
                serializer.serialize(&stmt, &mut Vec::<Value>::new())
            })
            .collect()
    }

    /// Starts a search of `model.field` for `query`.
    pub fn search(
        &self,
        model: &str,
        field: &str,
        query: impl Into<String>,
    ) -> Result<Search<'_>> {
        let field = self.vector_field(model, field)?;
        Ok(Search::new(self, field, query.into()))
    }

    /// Looks up a vector field by model and field name.
    pub fn vector_field(&self, model: &str, field: &str) -> Result<FieldId> {
        let app = &self.schema.app;

        let Some(model) = app.model_by_name(model) else {
            return Err(Error::invalid_schema(format!("unknown model `{model}`")));
        };

        let Some(field) = model.field_by_name(field) else {
            return Err(Error::unknown_field(model.name.upper_camel_case(), field));
        };

        if !field.ty.is_vector() {
            return Err(Error::invalid_schema(format!(
                "`{}` is not a vector field",
                field.full_name(app)
            )));
        }

        Ok(field.id)
    }
}
