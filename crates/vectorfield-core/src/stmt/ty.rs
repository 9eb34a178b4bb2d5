use std::fmt;

/// Application-level type of a primitive field.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
}

impl fmt::Debug for Type {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(fmt, "Bool"),
            Type::I32 => write!(fmt, "I32"),
            Type::I64 => write!(fmt, "I64"),
            Type::F64 => write!(fmt, "F64"),
            Type::String => write!(fmt, "String"),
        }
    }
}
