use super::Error;

/// Error when a lookup is malformed or does not end on a storage column.
///
/// This occurs when:
/// - The lookup has an empty segment (`category____label`, `""`) or an odd
///   underscore run (`category___label`)
/// - The lookup ends on a relation that owns no column on the current table
/// - The lookup ends on another vector field
#[derive(Debug)]
pub(super) struct InvalidLookup {
    message: Box<str>,
}

impl std::error::Error for InvalidLookup {}

impl core::fmt::Display for InvalidLookup {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid lookup: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid lookup error.
    pub fn invalid_lookup(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidLookup(InvalidLookup {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid lookup error.
    pub fn is_invalid_lookup(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidLookup(_))
    }
}
