use super::{Connector, Weight};
use crate::schema::{app::FieldId, db::ColumnId};

/// The table and column a lookup resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub id: ColumnId,
    pub table_name: String,
    pub column_name: String,

    /// True when the column stores text. Other columns are cast before
    /// being passed to `to_tsvector`.
    pub textual: bool,
}

/// A [`Vector`](super::Vector) resolved against a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundVector {
    pub column: ResolvedColumn,

    /// Resolved text-search configuration name
    pub config: String,

    pub weight: Weight,

    /// Relation fields traversed from the owning model, in order. Empty when
    /// the column belongs to the owning model's table.
    pub route: Vec<FieldId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundNode {
    Vector(BoundVector),
    Query(BoundVectorQuery),
}

/// A [`VectorQuery`](super::VectorQuery) with every term resolved. Never
/// empty and never negated.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundVectorQuery {
    pub connector: Connector,
    pub children: Vec<BoundNode>,
}

impl BoundVectorQuery {
    /// All terms, depth first.
    pub fn vectors(&self) -> Vec<&BoundVector> {
        let mut ret = vec![];
        self.collect_vectors(&mut ret);
        ret
    }

    fn collect_vectors<'a>(&'a self, dst: &mut Vec<&'a BoundVector>) {
        for child in &self.children {
            match child {
                BoundNode::Vector(vector) => dst.push(vector),
                BoundNode::Query(nested) => nested.collect_vectors(dst),
            }
        }
    }

    /// True if some term is reached through a relation.
    pub fn has_relations(&self) -> bool {
        self.vectors().iter().any(|vector| !vector.route.is_empty())
    }
}
