use super::Error;

/// Error when a vector lookup is resolved before a model has been applied to
/// it.
///
/// Leaves of a vector expression only learn their owning model when the
/// vector field is contributed to a model. Binding or resolving a leaf that
/// was never contributed fails with this error.
#[derive(Debug)]
pub(super) struct UnattachedModel {
    lookup: Box<str>,
}

impl std::error::Error for UnattachedModel {}

impl core::fmt::Display for UnattachedModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no model applied yet: lookup `{}` is not attached to a model",
            self.lookup
        )
    }
}

impl Error {
    /// Creates an unattached model error for the given lookup.
    pub fn unattached_model(lookup: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnattachedModel(UnattachedModel {
            lookup: lookup.into().into(),
        }))
    }

    /// Returns `true` if this error is an unattached model error.
    pub fn is_unattached_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnattachedModel(_))
    }
}
