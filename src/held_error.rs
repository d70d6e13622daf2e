use core::{any::TypeId, fmt, marker::PhantomData, ops::Deref};

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{
    LeveledError,
    markers::{self, Local, ObjectMarkerFor, SendSync},
};

/// A shared handle to an error stored in an [`ErrorHolder`].
///
/// Handles are what [`ErrorHolder::get_errors`] returns. Cloning a handle is
/// cheap (it bumps a reference count), and a handle stays valid after the
/// holder it came from has been cleared or dropped.
///
/// The handle dereferences to `dyn LeveledError`, and the concrete kind of
/// the stored error can be recovered with [`downcast_ref`](Self::downcast_ref).
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use error_holder::{ErrorHolder, ErrorLevel, LeveledError};
///
/// #[derive(Clone, Debug)]
/// struct ParseError {
///     line: usize,
/// }
///
/// impl LeveledError for ParseError {
///     fn type_name(&self) -> &str {
///         "ParseError"
///     }
///     fn message(&self) -> Cow<'_, str> {
///         format!("unexpected token on line {}", self.line).into()
///     }
///     fn level(&self) -> ErrorLevel {
///         ErrorLevel::None
///     }
/// }
///
/// let mut holder: ErrorHolder = ErrorHolder::new();
/// holder.push_error(&ParseError { line: 12 });
///
/// let errors = holder.get_errors();
/// holder.clear_errors();
///
/// // The handles outlive the reset
/// assert_eq!(errors[0].downcast_ref::<ParseError>().unwrap().line, 12);
/// assert_eq!(errors[0].type_name(), "ParseError");
/// ```
///
/// [`ErrorHolder`]: crate::ErrorHolder
/// [`ErrorHolder::get_errors`]: crate::ErrorHolder::get_errors
pub struct HeldError<ThreadSafety = Local>
where
    ThreadSafety: markers::ThreadSafetyMarker,
{
    inner: Arc<dyn LeveledError>,
    _thread_safety: PhantomData<ThreadSafety>,
}

// SAFETY: A `HeldError<SendSync>` can only be created by `HeldError::new`
// with an error satisfying `ObjectMarkerFor<SendSync>`, which requires the
// error to be `Send + Sync`. The handle never gives out mutable access.
unsafe impl Send for HeldError<SendSync> {}

// SAFETY: See the `Send` implementation above.
unsafe impl Sync for HeldError<SendSync> {}

impl<T> HeldError<T>
where
    T: markers::ThreadSafetyMarker,
{
    /// Moves `error` into a fresh allocation, keeping its concrete type.
    pub(crate) fn new<E>(error: E) -> Self
    where
        E: LeveledError + ObjectMarkerFor<T>,
    {
        let inner = Arc::new(error).unsize(unsize::Coercion!(to dyn LeveledError));
        Self {
            inner,
            _thread_safety: PhantomData,
        }
    }

    /// Returns the stored error as a trait object.
    pub fn as_dyn(&self) -> &dyn LeveledError {
        &*self.inner
    }

    /// Returns the [`TypeId`] of the concrete error kind.
    pub fn error_type_id(&self) -> TypeId {
        let any: &dyn core::any::Any = self.as_dyn();
        any.type_id()
    }

    /// Returns `true` if the stored error is of kind `E`.
    pub fn is<E: LeveledError>(&self) -> bool {
        self.as_dyn().is::<E>()
    }

    /// Returns the stored error if it is of kind `E`.
    pub fn downcast_ref<E: LeveledError>(&self) -> Option<&E> {
        self.as_dyn().downcast_ref::<E>()
    }

    /// Returns `true` if both handles point at the same stored error.
    ///
    /// Two handles obtained from separate calls to
    /// [`get_errors`](crate::ErrorHolder::get_errors) for the same entry
    /// compare equal here, while a second push of an equal value does not.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of live handles to the stored error, including the
    /// one held by the holder if it still contains the entry.
    pub fn strong_count(&self) -> usize {
        Arc::count(&self.inner)
    }
}

impl HeldError<SendSync> {
    /// Forgets that the stored error is `Send + Sync`.
    pub fn into_local(self) -> HeldError<Local> {
        HeldError {
            inner: self.inner,
            _thread_safety: PhantomData,
        }
    }
}

impl From<HeldError<SendSync>> for HeldError<Local> {
    fn from(error: HeldError<SendSync>) -> Self {
        error.into_local()
    }
}

impl<T> Deref for HeldError<T>
where
    T: markers::ThreadSafetyMarker,
{
    type Target = dyn LeveledError;

    fn deref(&self) -> &Self::Target {
        self.as_dyn()
    }
}

impl<T> Clone for HeldError<T>
where
    T: markers::ThreadSafetyMarker,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _thread_safety: PhantomData,
        }
    }
}

impl<T> fmt::Debug for HeldError<T>
where
    T: markers::ThreadSafetyMarker,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_dyn(), f)
    }
}

impl<T> fmt::Display for HeldError<T>
where
    T: markers::ThreadSafetyMarker,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name(), self.message())
    }
}
