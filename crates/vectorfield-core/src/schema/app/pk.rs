use super::FieldId;

#[derive(Debug, Clone, Default)]
pub struct PrimaryKey {
    /// Fields composing the primary key, in key order
    pub fields: Vec<FieldId>,
}
