//! Application-level schema

mod field;
pub use field::{Field, FieldId, FieldName, FieldPrimitive, FieldTy, FieldVector};

mod fk;
pub use fk::{ForeignKey, ForeignKeyField};

mod model;
pub use model::{Model, ModelId};

mod pk;
pub use pk::PrimaryKey;

mod relation;
pub use relation::{BelongsTo, HasOne};

mod schema;
pub use schema::{Resolved, Schema};

use super::Name;
