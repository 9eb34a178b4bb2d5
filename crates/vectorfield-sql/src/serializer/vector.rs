use super::{ColumnRef, Delimited, Literal, Params, ToSql};

use vectorfield_core::stmt::{BoundNode, BoundVector, BoundVectorQuery, Connector};

impl ToSql for &BoundVector {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = ColumnRef::from(&self.column);

        // `to_tsvector` only takes text
        let cast = if self.column.textual { "" } else { "::text" };

        fmt!(
            f,
            "setweight(to_tsvector(",
            Literal(&self.config),
            ", coalesce(",
            column,
            cast,
            ", '')), ",
            Literal(self.weight.as_str()),
            ")"
        );
    }
}

impl ToSql for &BoundNode {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            BoundNode::Vector(vector) => vector.to_sql(f),
            BoundNode::Query(query) => query.to_sql(f),
        }
    }
}

impl ToSql for &BoundVectorQuery {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if let [child] = &self.children[..] {
            return child.to_sql(f);
        }

        let operator = match self.connector {
            Connector::Or => " || ",
            Connector::And => " && ",
        };

        fmt!(f, "(", Delimited(&self.children, operator), ")");
    }
}
