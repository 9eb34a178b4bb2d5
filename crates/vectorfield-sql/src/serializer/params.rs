use super::{Flavor, Formatter, ToSql};

use vectorfield_core::stmt;

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// Position of a parameter, starting at 1. A placeholder may be written more
/// than once to reuse the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => fmt!(f, "$", self.0),
            Flavor::Sqlite => fmt!(f, "?", self.0),
        }
    }
}
