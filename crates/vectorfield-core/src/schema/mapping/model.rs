use crate::schema::{app::ModelId, db::ColumnId, db::TableId};

/// Maps one model to its table.
#[derive(Debug, Clone)]
pub struct Model {
    pub id: ModelId,

    /// Table the model is stored in
    pub table: TableId,

    /// Per field, in field order. `None` for fields without a column.
    pub fields: Vec<Option<Field>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Column storing the field
    pub column: ColumnId,
}
