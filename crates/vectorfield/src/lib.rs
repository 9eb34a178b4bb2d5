pub mod db;
pub use db::Db;

pub mod schema;
pub use schema::VectorField;

pub mod stmt {
    pub use vectorfield_core::stmt::{
        Connector, Path, TextSearchConfig, Type, Value, Vector, VectorQuery, Weight,
        DEFAULT_CONFIG, VQ,
    };
    pub use vectorfield_sql::stmt::QueryParser;
}

pub use vectorfield_core::{vq, Error, Result};
pub use vectorfield_sql::Flavor;
