use super::ColumnId;

#[derive(Debug, Clone, Default)]
pub struct PrimaryKey {
    pub columns: Vec<ColumnId>,
}
