use super::{FieldId, Schema};
use crate::schema::app::Field;

#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub fields: Vec<ForeignKeyField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyField {
    /// The field on the source model that is acting as the foreign key
    pub source: FieldId,

    /// The field on the target model that this FK field maps to
    pub target: FieldId,
}

impl ForeignKey {
    /// Returns the single source field if the key has exactly one column.
    pub fn single_source<'a>(&self, schema: &'a Schema) -> Option<&'a Field> {
        match &self.fields[..] {
            [field] => Some(schema.field(field.source)),
            _ => None,
        }
    }
}

impl ForeignKeyField {
    pub fn source<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.source)
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.target)
    }
}
