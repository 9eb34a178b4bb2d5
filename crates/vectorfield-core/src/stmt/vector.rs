use super::{BoundVector, Path, ResolvedColumn, TextSearchConfig, Weight};
use crate::{
    schema::app::{self, ModelId, Resolved},
    Error, Result, Schema,
};

use std::fmt;

/// A single weighted text-search term: the `to_tsvector` projection of one
/// column, reached from the owning model through `lookup`.
#[derive(Debug, Clone)]
pub struct Vector {
    /// Relationship path from the owning model to the indexed column.
    pub lookup: Path,

    /// Text-search configuration. Back-filled with the owning field's default
    /// when the term is attached.
    pub config: Option<TextSearchConfig>,

    /// Rank label of the term.
    pub weight: Weight,

    /// Owning model, set once when the vector field is contributed to it.
    model: Option<ModelId>,
}

impl Vector {
    pub fn new(lookup: impl Into<Path>) -> Vector {
        Vector::with_weight(lookup, Weight::default())
    }

    pub fn with_weight(lookup: impl Into<Path>, weight: Weight) -> Vector {
        Vector {
            lookup: lookup.into(),
            config: None,
            weight,
            model: None,
        }
    }

    pub fn config(mut self, config: impl Into<TextSearchConfig>) -> Vector {
        self.config = Some(config.into());
        self
    }

    pub fn weight(mut self, weight: Weight) -> Vector {
        self.weight = weight;
        self
    }

    /// The model this term was attached to, if any.
    pub fn model(&self) -> Option<ModelId> {
        self.model
    }

    pub fn is_attached(&self) -> bool {
        self.model.is_some()
    }

    /// Returns a copy of this term owned by `model`, with `default_config`
    /// filling in a missing configuration.
    ///
    /// A term is attached once. Attaching it again to the same model is a
    /// no-op; attaching it to another model fails.
    pub fn attach(&self, model: ModelId, default_config: &TextSearchConfig) -> Result<Vector> {
        match self.model {
            Some(current) if current != model => {
                return Err(Error::invalid_schema(format!(
                    "vector `{}` is already attached to {current:?}",
                    self.lookup
                )));
            }
            _ => {}
        }

        Ok(Vector {
            lookup: self.lookup.clone(),
            config: Some(
                self.config
                    .clone()
                    .unwrap_or_else(|| default_config.clone()),
            ),
            weight: self.weight,
            model: Some(model),
        })
    }

    /// Resolves the lookup to the field it names. The lookup is walked on
    /// every call.
    pub fn field<'a>(&self, schema: &'a app::Schema) -> Result<&'a app::Field> {
        Ok(self.resolve(schema)?.field)
    }

    pub fn resolve<'a>(&self, schema: &'a app::Schema) -> Result<Resolved<'a>> {
        let model = self
            .model
            .ok_or_else(|| Error::unattached_model(self.lookup.to_string()))?;

        schema.resolve_lookup(model, &self.lookup)
    }

    /// Resolves the term against `schema`, producing its table and column.
    pub fn bind(&self, schema: &Schema) -> Result<BoundVector> {
        let resolved = self.resolve(&schema.app)?;

        let Some(column) = schema.column_for(resolved.field.id) else {
            return Err(Error::invalid_schema(format!(
                "field `{}` has no column",
                resolved.field.name.app_name
            )));
        };
        let table = schema.db.table(column.id.table);

        // `resolve` already checked the model is set
        let Some(owner) = self.model.map(|id| schema.app.model(id)) else {
            return Err(Error::unattached_model(self.lookup.to_string()));
        };

        let Some(config) = &self.config else {
            return Err(Error::invalid_schema(format!(
                "vector `{}` has no text search configuration",
                self.lookup
            )));
        };

        tracing::trace!(
            lookup = %self.lookup,
            table = %table.name,
            column = %column.name,
            "bound vector lookup"
        );

        Ok(BoundVector {
            column: ResolvedColumn {
                id: column.id,
                table_name: table.name.clone(),
                column_name: column.name.clone(),
                textual: column.storage_ty.is_textual(),
            },
            config: config.resolve(owner),
            weight: self.weight,
            route: resolved.route,
        })
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lookup, self.weight)
    }
}
