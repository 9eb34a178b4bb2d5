use crate::{schema::db, stmt};

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// The field's type
    pub ty: stmt::Type,

    /// Optional database storage type, overriding the default mapping
    pub storage_ty: Option<db::Type>,
}

impl FieldPrimitive {
    pub fn new(ty: stmt::Type) -> FieldPrimitive {
        FieldPrimitive {
            ty,
            storage_ty: None,
        }
    }
}
