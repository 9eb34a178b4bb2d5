mod adhoc;
mod invalid_connection_url;
mod invalid_lookup;
mod invalid_schema;
mod invalid_weight;
mod non_traversable_field;
mod unattached_model;
mod unknown_field;
mod unsupported_feature;

use adhoc::AdhocError;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_lookup::InvalidLookup;
use invalid_schema::InvalidSchema;
use invalid_weight::InvalidWeight;
use non_traversable_field::NonTraversableField;
use std::sync::Arc;
use unattached_model::UnattachedModel;
use unknown_field::UnknownField;
use unsupported_feature::UnsupportedFeature;

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while declaring, binding, or rendering vector
/// fields.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    /// Creates an ad-hoc error from format arguments. Prefer the [`err!`]
    /// macro.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(args)))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err
            .inner
            .as_mut()
            .and_then(Arc::get_mut)
            .expect("consequent error must not be shared");
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidLookup(InvalidLookup),
    InvalidSchema(InvalidSchema),
    InvalidWeight(InvalidWeight),
    NonTraversableField(NonTraversableField),
    UnattachedModel(UnattachedModel),
    UnknownField(UnknownField),
    UnsupportedFeature(UnsupportedFeature),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidLookup(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidWeight(err) => core::fmt::Display::fmt(err, f),
            NonTraversableField(err) => core::fmt::Display::fmt(err, f),
            UnattachedModel(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown vectorfield error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        err!("{self}")
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        err!("{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_size() {
        let expected_size = size_of::<usize>();
        assert_eq!(expected_size, size_of::<Error>());
    }

    #[test]
    fn adhoc_error() {
        let err = err!("vector field `{}` missing", "fulltext");
        assert_eq!(err.to_string(), "vector field `fulltext` missing");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_from_str() {
        let err = Error::unknown_field("Product", "nme").context("rendering `Product::fulltext`");
        assert_eq!(
            err.to_string(),
            "rendering `Product::fulltext`: unknown field: `Product` has no field `nme`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn unattached_model_error() {
        let err = Error::unattached_model("category__label");
        assert!(err.is_unattached_model());
        assert_eq!(
            err.to_string(),
            "no model applied yet: lookup `category__label` is not attached to a model"
        );
    }

    #[test]
    fn non_traversable_field_error() {
        let err = Error::non_traversable_field("Product", "name", "name__label");
        assert!(err.is_non_traversable_field());
        assert!(!err.is_unknown_field());
        assert_eq!(
            err.to_string(),
            "non-traversable field: `Product::name` is not a relation (lookup `name__label`)"
        );
    }

    #[test]
    fn invalid_weight_error() {
        let err = Error::invalid_weight("E");
        assert!(err.is_invalid_weight());
        assert_eq!(
            err.to_string(),
            "invalid weight `E`: expected one of A, B, C, D"
        );
    }

    #[test]
    fn unsupported_feature_with_context() {
        let err = Error::unsupported_feature("negated vector expression")
            .context(err!("refreshing `Product::fulltext`"));
        assert_eq!(
            err.to_string(),
            "refreshing `Product::fulltext`: unsupported feature: negated vector expression"
        );
    }

    #[test]
    fn kinds_are_distinct() {
        let err = Error::invalid_schema("duplicate table `product`");
        assert!(err.is_invalid_schema());
        assert!(!err.is_unsupported_feature());
        assert!(!err.is_invalid_lookup());
        assert!(!err.is_invalid_connection_url());
    }
}
