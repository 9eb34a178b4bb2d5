use super::*;

/// The inverse side of a one-to-one relation. The foreign key lives on the
/// target model, in the `BelongsTo` field named by `pair`.
#[derive(Debug, Clone)]
pub struct HasOne {
    /// Model the relation points to
    pub target: ModelId,

    /// The `BelongsTo` field on the target model pointing back here
    pub pair: FieldId,
}

impl HasOne {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }

    /// The foreign key stored on the target model.
    #[track_caller]
    pub fn foreign_key<'a>(&self, schema: &'a Schema) -> &'a ForeignKey {
        &schema.field(self.pair).ty.expect_belongs_to().foreign_key
    }
}

impl From<HasOne> for FieldTy {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
