use super::{Comma, Ident, Params, ToSql};

use crate::stmt;

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        for (index, column) in self.0.columns.iter().enumerate() {
            fmt!(f, "\n    ", column);
            if index < self.0.columns.len() - 1 {
                fmt!(f, ",");
            }
        }

        if self.0.primary_key.is_empty() {
            fmt!(f, "\n");
        } else {
            let pk = Comma(self.0.primary_key.iter().map(Ident));
            fmt!(f, ",\n    PRIMARY KEY (", pk, ")\n");
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE ", &self.name, " (", columns, ")");
    }
}
