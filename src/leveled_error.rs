use alloc::borrow::Cow;
use core::{any::Any, fmt};

use crate::ErrorLevel;

/// The capability every error stored in an [`ErrorHolder`] must provide.
///
/// Implementations describe themselves with a type name, a human readable
/// message and a severity. Errors are immutable once constructed; the holder
/// only ever reads them.
///
/// The trait is object safe. A `&dyn LeveledError` can be turned back into
/// the concrete kind with `downcast_ref`, which is how owners handle specific
/// kinds after collecting them.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use error_holder::{ErrorLevel, LeveledError};
///
/// #[derive(Clone, Debug)]
/// struct DeviceError {
///     device: String,
/// }
///
/// impl LeveledError for DeviceError {
///     fn type_name(&self) -> &str {
///         "DeviceError"
///     }
///
///     fn message(&self) -> Cow<'_, str> {
///         format!("cannot open {}", self.device).into()
///     }
///
///     fn level(&self) -> ErrorLevel {
///         ErrorLevel::Error
///     }
/// }
///
/// let error = DeviceError {
///     device: "/dev/sda".to_string(),
/// };
/// let erased: &dyn LeveledError = &error;
/// assert_eq!(erased.message(), "cannot open /dev/sda");
/// assert_eq!(erased.downcast_ref::<DeviceError>().unwrap().device, "/dev/sda");
/// ```
///
/// [`ErrorHolder`]: crate::ErrorHolder
pub trait LeveledError: Any + fmt::Debug {
    /// A short identifier of the kind of error, such as `"DeviceError"`.
    fn type_name(&self) -> &str;

    /// The human readable description of this particular error.
    fn message(&self) -> Cow<'_, str>;

    /// The severity of this error.
    fn level(&self) -> ErrorLevel;
}

impl dyn LeveledError {
    /// Returns `true` if the concrete kind behind this trait object is `E`.
    pub fn is<E: LeveledError>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<E>()
    }

    /// Returns the concrete error if it is of kind `E`.
    pub fn downcast_ref<E: LeveledError>(&self) -> Option<&E> {
        let any: &dyn Any = self;
        any.downcast_ref::<E>()
    }
}

/// Formats an error as `"<type_name>: <message>"`.
///
/// This is the text the default dispatcher emits, before the channel prefix
/// is prepended.
///
/// ```
/// # use std::borrow::Cow;
/// use error_holder::{ErrorLevel, LeveledError, format_diagnostic};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl LeveledError for Timeout {
///     fn type_name(&self) -> &str {
///         "Timeout"
///     }
///
///     fn message(&self) -> Cow<'_, str> {
///         "no answer after 30s".into()
///     }
///
///     fn level(&self) -> ErrorLevel {
///         ErrorLevel::Warn
///     }
/// }
///
/// assert_eq!(format_diagnostic(&Timeout), "Timeout: no answer after 30s");
/// ```
pub fn format_diagnostic(error: &dyn LeveledError) -> alloc::string::String {
    alloc::format!("{}: {}", error.type_name(), error.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe(u8);

    impl LeveledError for Probe {
        fn type_name(&self) -> &str {
            "Probe"
        }

        fn message(&self) -> Cow<'_, str> {
            Cow::Owned(alloc::format!("probe {}", self.0))
        }

        fn level(&self) -> ErrorLevel {
            ErrorLevel::Info
        }
    }

    #[derive(Debug)]
    struct Other;

    impl LeveledError for Other {
        fn type_name(&self) -> &str {
            "Other"
        }

        fn message(&self) -> Cow<'_, str> {
            Cow::Borrowed("other")
        }

        fn level(&self) -> ErrorLevel {
            ErrorLevel::None
        }
    }

    #[test]
    fn test_downcast() {
        let probe = Probe(7);
        let erased: &dyn LeveledError = &probe;
        assert!(erased.is::<Probe>());
        assert!(!erased.is::<Other>());
        assert_eq!(erased.downcast_ref::<Probe>().map(|p| p.0), Some(7));
        assert!(erased.downcast_ref::<Other>().is_none());
    }

    #[test]
    fn test_format_diagnostic() {
        assert_eq!(format_diagnostic(&Probe(3)), "Probe: probe 3");
        assert_eq!(format_diagnostic(&Other), "Other: other");
    }
}
