use crate::stmt;

/// Database-level storage types.
///
/// `db::Type` is the type written in `CREATE TABLE`, as opposed to
/// [`stmt::Type`], the application's view of a primitive field.
///
/// ```text
/// stmt::Type::String  →  db::Type::Text
/// stmt::Type::I64     →  db::Type::Integer(8)
/// stmt::Type::I32     →  db::Type::Integer(4)
/// stmt::Type::Bool    →  db::Type::Boolean
/// ```
///
/// Vector fields are always stored as [`Type::TsVector`].
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// An 8-byte floating point number
    Double,

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// PostgreSQL's text-search document type
    TsVector,
}

impl Type {
    /// Maps an application-level type to a database-level storage type.
    pub fn from_app(ty: &stmt::Type, hint: Option<&Type>) -> Type {
        match hint {
            Some(ty) => ty.clone(),
            None => match ty {
                stmt::Type::Bool => Type::Boolean,
                stmt::Type::I32 => Type::Integer(4),
                stmt::Type::I64 => Type::Integer(8),
                stmt::Type::F64 => Type::Double,
                stmt::Type::String => Type::Text,
            },
        }
    }

    /// True for types `to_tsvector` accepts without a cast.
    pub fn is_textual(&self) -> bool {
        matches!(self, Type::Text | Type::VarChar(_))
    }

    pub fn is_text_search(&self) -> bool {
        matches!(self, Type::TsVector)
    }
}
