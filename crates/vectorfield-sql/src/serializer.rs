#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{ColumnRef, Equals};

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod create_index;
mod create_table;
mod name;
mod refresh;
mod search;
mod ty;
mod vector;

use crate::stmt::Statement;

use vectorfield_core::{
    schema::{app::FieldId, db},
    stmt::{Value, VectorQuery},
    Error, Result, Schema,
};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,

    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema, flavor: Flavor) -> Serializer<'a> {
        Serializer { schema, flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Serializes a full statement, terminated with `;`.
    ///
    /// Vector content is bound here, so lookups are resolved against the
    /// schema only once SQL text is requested.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        if stmt.uses_text_search() {
            self.check_text_search()?;
        }

        let mut ret = String::new();

        match stmt {
            Statement::CreateIndex(stmt) => self.write(&mut ret, params, stmt),
            Statement::CreateTable(stmt) => self.write(&mut ret, params, stmt),
            Statement::RefreshVector(stmt) => {
                let prepared = self.prepare_refresh(stmt)?;
                self.write(&mut ret, params, &prepared);
            }
            Statement::Search(stmt) => {
                let prepared = self.prepare_search(stmt)?;
                self.write(&mut ret, params, &prepared);
            }
        }

        ret.push(';');

        tracing::debug!(flavor = %self.flavor, sql = %ret, "serialized statement");
        Ok(ret)
    }

    /// Serializes the `tsvector` expression of an attached vector tree.
    pub fn serialize_vector(&self, content: &VectorQuery) -> Result<String> {
        self.check_text_search()?;

        let bound = content.bind(self.schema)?;

        let mut ret = String::new();
        self.write(&mut ret, &mut Vec::<Value>::new(), &bound);

        tracing::debug!(content = %content, sql = %ret, "serialized vector expression");
        Ok(ret)
    }

    /// Serializes the `tsvector` expression of a vector field.
    pub fn serialize_field(&self, field: FieldId) -> Result<String> {
        let field = self.schema.app.field(field);

        let Some(vector) = field.ty.as_vector() else {
            return Err(Error::invalid_schema(format!(
                "`{}` is not a vector field",
                field.full_name(&self.schema.app)
            )));
        };

        self.serialize_vector(&vector.content).map_err(|err| {
            err.context(format!("rendering `{}`", field.full_name(&self.schema.app)))
        })
    }

    fn write<T: Params>(&self, dst: &mut String, params: &mut T, fragment: impl ToSql) {
        let mut fmt = Formatter {
            serializer: self,
            dst,
            params,
        };

        fragment.to_sql(&mut fmt);
    }

    fn check_text_search(&self) -> Result<()> {
        if self.flavor.supports_text_search() {
            Ok(())
        } else {
            Err(Error::unsupported_feature(format!(
                "text search is not supported by {}",
                self.flavor
            )))
        }
    }

    fn table(&self, id: impl Into<db::TableId>) -> &'a db::Table {
        self.schema.db.table(id.into())
    }

    fn table_name(&self, id: impl Into<db::TableId>) -> Ident<&'a str> {
        Ident(&self.table(id).name)
    }

    fn column_name(&self, id: impl Into<db::ColumnId>) -> Ident<&'a str> {
        let column = self.schema.db.column(id.into());
        Ident(&column.name)
    }
}
