use super::{Ident, Params, Period, ToSql};

use vectorfield_core::stmt::ResolvedColumn;

/// A table-qualified column reference: `"table"."column"`
#[derive(Debug, Clone, Copy)]
pub(super) struct ColumnRef<'a> {
    pub(super) table: &'a str,
    pub(super) column: &'a str,
}

/// `lhs = rhs`
#[derive(Debug, Clone, Copy)]
pub(super) struct Equals<'a>(pub(super) ColumnRef<'a>, pub(super) ColumnRef<'a>);

impl<'a> ColumnRef<'a> {
    pub(super) fn new(table: &'a str, column: &'a str) -> ColumnRef<'a> {
        ColumnRef { table, column }
    }
}

impl<'a> From<&'a ResolvedColumn> for ColumnRef<'a> {
    fn from(value: &'a ResolvedColumn) -> Self {
        ColumnRef::new(&value.table_name, &value.column_name)
    }
}

impl ToSql for ColumnRef<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Period([Ident(self.table), Ident(self.column)]));
    }
}

impl ToSql for Equals<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.0, " = ", self.1);
    }
}
