use vectorfield_core::{
    schema::app::{FieldVector, ModelId},
    stmt::{TextSearchConfig, VectorQuery},
    Result,
};

/// A derived column holding the weighted `tsvector` of other fields.
///
/// ```
/// use vectorfield::{vq, VectorField};
///
/// let fulltext = VectorField::new(vq!("name", description = B)).config("pg_catalog.simple");
/// assert_eq!(fulltext.content().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VectorField {
    content: VectorQuery,
    config: Option<TextSearchConfig>,
}

impl VectorField {
    pub fn new(content: impl Into<VectorQuery>) -> VectorField {
        VectorField {
            content: content.into(),
            config: None,
        }
    }

    /// Sets the field's default text-search configuration, used by terms
    /// that do not set one.
    pub fn config(mut self, config: impl Into<TextSearchConfig>) -> VectorField {
        self.config = Some(config.into());
        self
    }

    pub fn content(&self) -> &VectorQuery {
        &self.content
    }

    /// Attaches the content to `model`. The field's configuration wins over
    /// `default_config`.
    pub(crate) fn contribute(
        &self,
        model: ModelId,
        default_config: &TextSearchConfig,
    ) -> Result<FieldVector> {
        let config = self
            .config
            .clone()
            .unwrap_or_else(|| default_config.clone());

        Ok(FieldVector {
            content: self.content.attach(model, &config)?,
            config,
        })
    }
}
