pub mod serializer;
pub use serializer::{Flavor, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
