mod field;
pub use field::{BelongsTo, Field, FieldTy, ForeignKeyField, HasOne};

mod model;
pub use model::Model;

mod vector_field;
pub use vector_field::VectorField;

pub use vectorfield_core::schema::{app, db, Name};
