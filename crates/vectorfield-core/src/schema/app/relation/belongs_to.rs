use super::*;

/// The owning side of a relation: this model stores a foreign key to the
/// target's primary key.
#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model the relation points to
    pub target: ModelId,

    /// The foreign key is a set of primitive fields that match the target's
    /// primary key.
    pub foreign_key: ForeignKey,
}

impl BelongsTo {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}

impl From<BelongsTo> for FieldTy {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
