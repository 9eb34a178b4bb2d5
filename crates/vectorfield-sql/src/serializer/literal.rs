use super::{Formatter, Params, ToSql};

use vectorfield_core::stmt::Value;

/// A single-quoted SQL string literal.
#[derive(Debug, Clone, Copy)]
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('\'');
        for c in self.0.as_ref().chars() {
            if c == '\'' {
                f.dst.push('\'');
            }
            f.dst.push(c);
        }
        f.dst.push('\'');
    }
}

/// Values inlined in DDL, where parameters are not accepted.
impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Value::I64(value) => f.dst.push_str(&value.to_string()),
            Value::String(value) => fmt!(f, Literal(value)),
        }
    }
}
