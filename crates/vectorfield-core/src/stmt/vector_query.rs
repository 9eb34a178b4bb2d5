use super::{
    BoundNode, BoundVectorQuery, Connector, Path, TextSearchConfig, Vector, VectorNode, Weight,
};
use crate::{schema::app::ModelId, Error, Result, Schema};

use std::{fmt, ops};

/// Short alias used when declaring vector field content.
pub type VQ = VectorQuery;

/// A boolean combination of weighted [`Vector`] terms and nested trees.
///
/// Trees are combined with `|`, `&` and `!`. Combining never mutates an
/// operand; it always returns a new tree.
///
/// ```
/// use vectorfield_core::stmt::{Connector, Weight, VQ};
///
/// let content = VQ::new(["name"]) | VQ::weighted([("description", Weight::B)]);
/// assert_eq!(content.connector(), Connector::Or);
/// assert_eq!(content.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VectorQuery {
    children: Vec<VectorNode>,
    connector: Connector,
    negated: bool,
}

impl VectorQuery {
    /// One child per lookup, each with the default weight.
    pub fn new<I>(lookups: I) -> VectorQuery
    where
        I: IntoIterator,
        I::Item: Into<Path>,
    {
        VectorQuery::from_vectors(lookups.into_iter().map(Vector::new))
    }

    /// One child per `(lookup, weight)` pair.
    pub fn weighted<I, P>(pairs: I) -> VectorQuery
    where
        I: IntoIterator<Item = (P, Weight)>,
        P: Into<Path>,
    {
        VectorQuery::from_vectors(
            pairs
                .into_iter()
                .map(|(lookup, weight)| Vector::with_weight(lookup, weight)),
        )
    }

    pub fn from_vectors(vectors: impl IntoIterator<Item = Vector>) -> VectorQuery {
        VectorQuery {
            children: vectors.into_iter().map(VectorNode::Vector).collect(),
            ..VectorQuery::default()
        }
    }

    /// Builds a tree with an explicit connector.
    pub fn with_connector(
        connector: Connector,
        children: impl IntoIterator<Item = VectorNode>,
    ) -> VectorQuery {
        VectorQuery {
            children: children.into_iter().collect(),
            connector,
            negated: false,
        }
    }

    pub fn children(&self) -> &[VectorNode] {
        &self.children
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All terms of the tree, depth first.
    pub fn vectors(&self) -> Vec<&Vector> {
        let mut ret = vec![];
        self.collect_vectors(&mut ret);
        ret
    }

    fn collect_vectors<'a>(&'a self, dst: &mut Vec<&'a Vector>) {
        for child in &self.children {
            match child {
                VectorNode::Vector(vector) => dst.push(vector),
                VectorNode::Query(nested) => nested.collect_vectors(dst),
            }
        }
    }

    pub fn and(&self, other: &VectorQuery) -> VectorQuery {
        self.combine(other, Connector::And)
    }

    pub fn or(&self, other: &VectorQuery) -> VectorQuery {
        self.combine(other, Connector::Or)
    }

    /// Returns a copy with the negation flag toggled.
    pub fn negate(&self) -> VectorQuery {
        VectorQuery {
            negated: !self.negated,
            ..self.clone()
        }
    }

    fn combine(&self, other: &VectorQuery, connector: Connector) -> VectorQuery {
        // A negated empty tree still has to reach `bind`, which rejects it
        if other.is_empty() && !other.negated {
            return self.clone();
        }

        if self.is_empty() && !self.negated {
            return other.clone();
        }

        let mut ret = VectorQuery {
            children: Vec::with_capacity(self.len() + other.len()),
            connector,
            negated: false,
        };

        ret.push_operand(self);
        ret.push_operand(other);
        ret
    }

    fn push_operand(&mut self, operand: &VectorQuery) {
        // A single child has no connector semantics of its own, so it is
        // spliced in regardless of the operand's connector.
        let squash =
            !operand.negated && (operand.connector == self.connector || operand.len() == 1);

        if squash {
            self.children.extend(operand.children.iter().cloned());
        } else {
            self.children.push(VectorNode::Query(operand.clone()));
        }
    }

    /// Returns a copy of the tree with every term attached to `model`.
    ///
    /// Terms without a configuration get `default_config`.
    pub fn attach(
        &self,
        model: ModelId,
        default_config: &TextSearchConfig,
    ) -> Result<VectorQuery> {
        let children = self
            .children
            .iter()
            .map(|child| match child {
                VectorNode::Vector(vector) => vector
                    .attach(model, default_config)
                    .map(VectorNode::Vector),
                VectorNode::Query(query) => {
                    query.attach(model, default_config).map(VectorNode::Query)
                }
            })
            .collect::<Result<_>>()?;

        Ok(VectorQuery {
            children,
            connector: self.connector,
            negated: self.negated,
        })
    }

    /// Resolves every term against `schema`.
    ///
    /// Fails if any node is negated: a `tsvector` has no negation operator,
    /// so there is no SQL to render for it.
    pub fn bind(&self, schema: &Schema) -> Result<BoundVectorQuery> {
        if self.negated {
            return Err(Error::unsupported_feature(format!(
                "cannot render negated vector expression `{self}`; tsvector has no negation operator"
            )));
        }

        if self.is_empty() {
            return Err(Error::invalid_schema("vector expression has no terms"));
        }

        let children = self
            .children
            .iter()
            .map(|child| match child {
                VectorNode::Vector(vector) => vector.bind(schema).map(BoundNode::Vector),
                VectorNode::Query(query) => query.bind(schema).map(BoundNode::Query),
            })
            .collect::<Result<_>>()?;

        Ok(BoundVectorQuery {
            connector: self.connector,
            children,
        })
    }
}

impl ops::BitOr for VectorQuery {
    type Output = VectorQuery;

    fn bitor(self, rhs: VectorQuery) -> VectorQuery {
        self.or(&rhs)
    }
}

impl ops::BitAnd for VectorQuery {
    type Output = VectorQuery;

    fn bitand(self, rhs: VectorQuery) -> VectorQuery {
        self.and(&rhs)
    }
}

impl ops::Not for VectorQuery {
    type Output = VectorQuery;

    fn not(self) -> VectorQuery {
        self.negate()
    }
}

impl From<Vector> for VectorQuery {
    fn from(value: Vector) -> Self {
        VectorQuery::from_vectors([value])
    }
}

/// Debug rendering: `(||: name:D, description:B)`, prefixed with `!! ` when
/// negated. This is not SQL.
impl fmt::Display for VectorQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!! ")?;
        }

        write!(f, "({}: ", self.connector)?;

        let mut s = "";
        for child in &self.children {
            write!(f, "{s}{child}")?;
            s = ", ";
        }

        f.write_str(")")
    }
}
