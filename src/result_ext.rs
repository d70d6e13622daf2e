use crate::{
    ErrorHolder, LeveledError,
    markers::{self, ObjectMarkerFor},
};

/// Extension methods for routing the error of a `Result` into an
/// [`ErrorHolder`] instead of returning it.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use error_holder::{ErrorHolder, ErrorLevel, LeveledError, ResultExt};
///
/// #[derive(Clone, Debug)]
/// struct BadNumber(String);
///
/// impl LeveledError for BadNumber {
///     fn type_name(&self) -> &str {
///         "BadNumber"
///     }
///     fn message(&self) -> Cow<'_, str> {
///         format!("{:?} is not a number", self.0).into()
///     }
///     fn level(&self) -> ErrorLevel {
///         ErrorLevel::Warn
///     }
/// }
///
/// let mut holder: ErrorHolder = ErrorHolder::new();
/// let numbers: Vec<u32> = ["1", "two", "3"]
///     .into_iter()
///     .filter_map(|s| {
///         s.parse::<u32>()
///             .map_err(|_| BadNumber(s.to_string()))
///             .hold_err(&mut holder)
///     })
///     .collect();
///
/// assert_eq!(numbers, [1, 3]);
/// assert_eq!(holder.len(), 1);
/// ```
pub trait ResultExt<A, E> {
    /// Pushes the error into `holder` and returns `None`, or returns the
    /// success value.
    fn hold_err<T>(self, holder: &mut ErrorHolder<T>) -> Option<A>
    where
        T: markers::ThreadSafetyMarker,
        E: LeveledError + Clone + ObjectMarkerFor<T>;
}

impl<A, E> ResultExt<A, E> for Result<A, E> {
    fn hold_err<T>(self, holder: &mut ErrorHolder<T>) -> Option<A>
    where
        T: markers::ThreadSafetyMarker,
        E: LeveledError + Clone + ObjectMarkerFor<T>,
    {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                holder.push_error(&error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use super::*;
    use crate::ErrorLevel;

    #[derive(Clone, Debug)]
    struct Refused;

    impl LeveledError for Refused {
        fn type_name(&self) -> &str {
            "Refused"
        }

        fn message(&self) -> Cow<'_, str> {
            Cow::Borrowed("connection refused")
        }

        fn level(&self) -> ErrorLevel {
            ErrorLevel::Error
        }
    }

    #[test]
    fn test_hold_err() {
        let dispatcher: fn(&dyn LeveledError) = |_| ();
        let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(dispatcher);

        let ok: Result<u8, Refused> = Ok(4);
        assert_eq!(ok.hold_err(&mut holder), Some(4));
        assert!(!holder.has_errors());

        let err: Result<u8, Refused> = Err(Refused);
        assert_eq!(err.hold_err(&mut holder), None);
        assert!(holder.errors()[0].is::<Refused>());
    }
}
