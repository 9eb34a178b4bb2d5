use super::Field;

use vectorfield_core::schema::Name;

/// A model as declared: fields reference each other by name.
///
/// ```
/// use vectorfield::schema::{Field, Model};
/// use vectorfield::stmt::Type;
///
/// let category = Model::new("Category")
///     .field(Field::primitive("id", Type::I64))
///     .field(Field::primitive("label", Type::String));
///
/// assert_eq!(category.primary_key, ["id"]);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the model
    pub name: Name,

    pub fields: Vec<Field>,

    /// Names of the primary key fields. Defaults to `id`.
    pub primary_key: Vec<String>,

    /// If the schema specifies a table to map the model to, this is set.
    pub table_name: Option<String>,
}

impl Model {
    pub fn new(name: &str) -> Model {
        Model {
            name: Name::new(name),
            fields: vec![],
            primary_key: vec!["id".to_string()],
            table_name: None,
        }
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }

    pub fn primary_key<I>(mut self, fields: I) -> Model
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.primary_key = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn table_name(mut self, name: impl Into<String>) -> Model {
        self.table_name = Some(name.into());
        self
    }

    /// Find a field by name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}
