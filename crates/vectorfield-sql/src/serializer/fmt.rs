use super::{Formatter, Params};

macro_rules! fmt {
    ($f:expr, $( $fragment:expr ),* $(,)?) => {{
        $(
            $fragment.to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>);
}

impl ToSql for &str {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self);
    }
}

impl ToSql for usize {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(&self.to_string());
    }
}

impl<T: ToSql> ToSql for Option<T> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(fragment) = self {
            fragment.to_sql(f);
        }
    }
}
