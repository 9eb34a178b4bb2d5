use super::Error;

/// Error when a lookup continues past a field that is not a relation.
///
/// For example, `name__label` where `name` is a text column: there is no
/// model behind `name` to look `label` up on.
#[derive(Debug)]
pub(super) struct NonTraversableField {
    model: Box<str>,
    field: Box<str>,
    lookup: Box<str>,
}

impl std::error::Error for NonTraversableField {}

impl core::fmt::Display for NonTraversableField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "non-traversable field: `{}::{}` is not a relation (lookup `{}`)",
            self.model, self.field, self.lookup
        )
    }
}

impl Error {
    /// Creates a non-traversable field error.
    pub fn non_traversable_field(
        model: impl Into<String>,
        field: impl Into<String>,
        lookup: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::NonTraversableField(NonTraversableField {
            model: model.into().into(),
            field: field.into().into(),
            lookup: lookup.into().into(),
        }))
    }

    /// Returns `true` if this error is a non-traversable field error.
    pub fn is_non_traversable_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NonTraversableField(_))
    }
}
