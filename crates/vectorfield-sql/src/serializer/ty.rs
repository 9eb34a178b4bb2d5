use super::{Flavor, Params, ToSql};

use vectorfield_core::schema::db::Type;

impl ToSql for &Type {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let flavor = f.serializer.flavor;

        match self {
            Type::Boolean => fmt!(f, "BOOLEAN"),
            Type::Integer(1 | 2) => fmt!(f, "SMALLINT"),
            Type::Integer(n) if *n <= 4 || flavor == Flavor::Sqlite => fmt!(f, "INTEGER"),
            Type::Integer(_) => fmt!(f, "BIGINT"),
            Type::Double => fmt!(
                f,
                match flavor {
                    Flavor::Postgresql => "DOUBLE PRECISION",
                    Flavor::Sqlite => "REAL",
                    Flavor::Mysql => "DOUBLE",
                }
            ),
            Type::Text => fmt!(f, "TEXT"),
            Type::VarChar(size) => fmt!(f, "VARCHAR(", *size as usize, ")"),
            Type::TsVector => fmt!(f, "TSVECTOR"),
        }
    }
}
