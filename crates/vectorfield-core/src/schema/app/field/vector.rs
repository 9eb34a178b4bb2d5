use crate::{
    schema::db,
    stmt::{TextSearchConfig, Value, VectorQuery},
};

/// A derived text-search column: the database stores the weighted
/// `tsvector` of `content`.
///
/// The column is never written by the application. It is nullable, defaults
/// to the empty vector, and is indexed.
#[derive(Debug, Clone)]
pub struct FieldVector {
    /// The expression tree. Every term is attached to the owning model.
    pub content: VectorQuery,

    /// Default configuration of the field, used by lookups against it.
    pub config: TextSearchConfig,
}

impl FieldVector {
    /// The column type is always `TSVECTOR`.
    pub fn storage_ty(&self) -> db::Type {
        db::Type::TsVector
    }

    /// Values are computed by the database; nothing to convert.
    pub fn prepare_value(&self, value: Value) -> Value {
        value
    }

    /// The column default: an empty vector.
    pub fn default_value(&self) -> Value {
        Value::String(String::new())
    }
}
