use super::{Comma, Params, ToSql};

use crate::stmt;
use vectorfield_core::schema::db::IndexMethod;

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let serializer = f.serializer;
        let table_name = serializer.table_name(self.on);
        let columns = Comma(self.columns.iter().map(|id| serializer.column_name(*id)));
        let unique = if self.unique { "UNIQUE " } else { "" };
        let method = match self.method {
            IndexMethod::BTree => "",
            IndexMethod::Gin => "USING GIN ",
        };

        fmt!(
            f, "CREATE ", unique, "INDEX ", &self.name, " ON ", table_name, " ", method, "(", columns, ")"
        );
    }
}
