//! Text-search vector expressions
//!
//! A [`VectorQuery`] (aliased [`VQ`]) is a boolean tree of weighted
//! [`Vector`] terms. Trees are built standalone, attached to a model when the
//! owning vector field is contributed to it, and finally bound against a
//! [`Schema`](crate::Schema) to produce a [`BoundVectorQuery`] the SQL
//! serializer renders.

mod bound;
pub use bound::{BoundNode, BoundVector, BoundVectorQuery, ResolvedColumn};

mod config;
pub use config::{TextSearchConfig, DEFAULT_CONFIG};

mod connector;
pub use connector::Connector;

mod node;
pub use node::VectorNode;

mod path;
pub use path::Path;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod vector;
pub use vector::Vector;

mod vector_query;
pub use vector_query::{VectorQuery, VQ};

mod weight;
pub use weight::Weight;
