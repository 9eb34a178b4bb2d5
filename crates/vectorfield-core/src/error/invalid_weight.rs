use super::Error;

/// Error when a weight label is not one of `A`, `B`, `C`, `D`.
#[derive(Debug)]
pub(super) struct InvalidWeight {
    value: Box<str>,
}

impl std::error::Error for InvalidWeight {}

impl core::fmt::Display for InvalidWeight {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid weight `{}`: expected one of A, B, C, D",
            self.value
        )
    }
}

impl Error {
    /// Creates an invalid weight error.
    pub fn invalid_weight(value: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidWeight(InvalidWeight {
            value: value.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid weight error.
    pub fn is_invalid_weight(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidWeight(_))
    }
}
