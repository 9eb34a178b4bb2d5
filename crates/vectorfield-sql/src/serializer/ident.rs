use super::{Formatter, Params, ToSql};

/// A quoted identifier. Quote characters inside the name are doubled.
#[derive(Debug, Clone, Copy)]
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let quote = f.serializer.flavor.identifier_quote();

        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}
