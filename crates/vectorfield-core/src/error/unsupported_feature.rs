use super::Error;

/// Error when the requested SQL cannot be expressed.
///
/// This occurs when:
/// - A vector expression is negated (`tsvector` has no negation operator)
/// - Text search SQL is requested for a database other than PostgreSQL
/// - A refresh statement would have to join the same table twice
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFeature(_))
    }
}
