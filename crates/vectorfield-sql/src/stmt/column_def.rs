use vectorfield_core::{
    schema::db::{self, Column},
    stmt::Value,
};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,
    pub nullable: bool,
    pub default: Option<Value>,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.storage_ty.clone(),
            nullable: column.nullable,
            default: column.default.clone(),
        }
    }
}
