use super::Statement;

use vectorfield_core::schema::app::FieldId;

/// Stores the derived document of a vector field for every row of its
/// table.
///
/// The field's content is bound against the schema when the statement is
/// serialized, not when it is built.
#[derive(Debug, Clone)]
pub struct RefreshVector {
    /// The vector field to refresh
    pub field: FieldId,
}

impl Statement {
    pub fn refresh_vector(field: FieldId) -> Self {
        RefreshVector { field }.into()
    }
}

impl From<RefreshVector> for Statement {
    fn from(value: RefreshVector) -> Self {
        Self::RefreshVector(value)
    }
}
