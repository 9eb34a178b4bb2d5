use super::{Vector, VectorQuery};

use std::fmt;

/// A child of a [`VectorQuery`]: either a single term or a nested tree.
#[derive(Debug, Clone)]
pub enum VectorNode {
    Vector(Vector),
    Query(VectorQuery),
}

impl VectorNode {
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            VectorNode::Vector(vector) => Some(vector),
            VectorNode::Query(_) => None,
        }
    }

    #[track_caller]
    pub fn expect_vector(&self) -> &Vector {
        match self {
            VectorNode::Vector(vector) => vector,
            _ => panic!("expected vector; actual={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_query(&self) -> &VectorQuery {
        match self {
            VectorNode::Query(query) => query,
            _ => panic!("expected vector query; actual={self:#?}"),
        }
    }
}

impl From<Vector> for VectorNode {
    fn from(value: Vector) -> Self {
        VectorNode::Vector(value)
    }
}

impl From<VectorQuery> for VectorNode {
    fn from(value: VectorQuery) -> Self {
        VectorNode::Query(value)
    }
}

impl fmt::Display for VectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorNode::Vector(vector) => vector.fmt(f),
            VectorNode::Query(query) => query.fmt(f),
        }
    }
}
