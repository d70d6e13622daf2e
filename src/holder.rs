use alloc::{boxed::Box, vec::Vec};
use core::{fmt, marker::PhantomData};

use crate::{
    ErrorLevel, HeldError, LeveledError,
    dispatch::{Dispatcher, LevelRouter},
    markers::{self, Local, ObjectMarkerFor, SendSync},
};

/// An ordered, append-only collection of errors with a diagnostic hook.
///
/// An owning subsystem embeds an `ErrorHolder` to get "keep going and
/// accumulate" semantics instead of failing fast. Each call to
/// [`push_error`](Self::push_error) clones the error into the holder and
/// immediately runs the holder's [`Dispatcher`] on the stored copy. Later the
/// owner inspects what was collected with [`has_errors`](Self::has_errors)
/// and [`get_errors`](Self::get_errors), and starts over with
/// [`clear_errors`](Self::clear_errors).
///
/// The holder implements neither `Clone` nor `Copy`: there is always exactly
/// one owner of a given diagnostic stream.
///
/// The type parameter is a thread-safety marker, see [`markers`](crate::markers).
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use error_holder::{ErrorHolder, ErrorLevel, LeveledError};
///
/// #[derive(Clone, Debug)]
/// struct DeviceError {
///     message: String,
///     level: ErrorLevel,
/// }
///
/// impl LeveledError for DeviceError {
///     fn type_name(&self) -> &str {
///         "DeviceError"
///     }
///     fn message(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.message)
///     }
///     fn level(&self) -> ErrorLevel {
///         self.level
///     }
/// }
///
/// struct Scanner {
///     errors: ErrorHolder,
/// }
///
/// impl Scanner {
///     fn scan(&mut self) {
///         for device in ["sda", "sdb"] {
///             self.errors.push_error(&DeviceError {
///                 message: format!("cannot open {device}"),
///                 level: ErrorLevel::Warn,
///             });
///         }
///     }
/// }
///
/// let mut scanner = Scanner {
///     errors: ErrorHolder::new(),
/// };
/// scanner.scan();
///
/// assert!(scanner.errors.has_errors());
/// let messages: Vec<_> = scanner.errors.iter().map(|e| e.message().into_owned()).collect();
/// assert_eq!(messages, ["cannot open sda", "cannot open sdb"]);
/// ```
pub struct ErrorHolder<ThreadSafety = Local>
where
    ThreadSafety: markers::ThreadSafetyMarker,
{
    errors: Vec<HeldError<ThreadSafety>>,
    dispatcher: Box<dyn Dispatcher>,
    _thread_safety: PhantomData<ThreadSafety>,
}

// SAFETY: An `ErrorHolder<SendSync>` only ever contains `HeldError<SendSync>`
// handles, which are `Send + Sync`, and a dispatcher that had to satisfy
// `ObjectMarkerFor<SendSync>` (and is thus `Send + Sync`) when the holder was
// constructed. The dispatcher is only called through `&self` from `&mut self`
// methods.
unsafe impl Send for ErrorHolder<SendSync> {}

// SAFETY: See the `Send` implementation above. Shared access never calls the
// dispatcher or mutates the sequence.
unsafe impl Sync for ErrorHolder<SendSync> {}

impl<T> ErrorHolder<T>
where
    T: markers::ThreadSafetyMarker,
{
    /// Creates an empty holder with its own default dispatcher, a
    /// [`LevelRouter`] writing to a
    /// [`TracingSink`](crate::dispatch::TracingSink).
    pub fn new() -> Self {
        Self::from_boxed(Box::new(LevelRouter::default()))
    }

    /// Creates an empty holder that runs `dispatcher` on every pushed error.
    pub fn with_dispatcher<D>(dispatcher: D) -> Self
    where
        D: Dispatcher + ObjectMarkerFor<T>,
    {
        Self::from_boxed(Box::new(dispatcher))
    }

    fn from_boxed(dispatcher: Box<dyn Dispatcher>) -> Self {
        Self {
            errors: Vec::new(),
            dispatcher,
            _thread_safety: PhantomData,
        }
    }

    /// Stores a copy of `error` and dispatches it.
    ///
    /// The copy keeps the concrete type `E`, so it can later be recovered with
    /// [`HeldError::downcast_ref`]. The dispatcher runs on the stored copy
    /// before this method returns.
    pub fn push_error<E>(&mut self, error: &E)
    where
        E: LeveledError + Clone + ObjectMarkerFor<T>,
    {
        let held = HeldError::new(error.clone());
        self.errors.push(held);
        if let Some(held) = self.errors.last() {
            self.dispatcher.dispatch(held.as_dyn());
        }
    }

    /// Returns `true` if at least one error has been pushed since the holder
    /// was created or last cleared.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns handles to all stored errors, oldest first.
    ///
    /// The handles share the stored copies: they stay valid after
    /// [`clear_errors`](Self::clear_errors), and two calls without a reset in
    /// between return handles to the same entries.
    pub fn get_errors(&self) -> Vec<HeldError<T>> {
        self.errors.clone()
    }

    /// Removes all stored errors.
    ///
    /// Handles previously returned by [`get_errors`](Self::get_errors) are
    /// unaffected.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Removes all stored errors and returns them, oldest first.
    pub fn take_errors(&mut self) -> Vec<HeldError<T>> {
        core::mem::take(&mut self.errors)
    }

    /// Borrows the stored errors, oldest first.
    pub fn errors(&self) -> &[HeldError<T>] {
        &self.errors
    }

    /// Iterates over the stored errors, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, HeldError<T>> {
        self.errors.iter()
    }

    /// The number of stored errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no errors are stored. The inverse of
    /// [`has_errors`](Self::has_errors).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The most recently pushed error, if any.
    pub fn last_error(&self) -> Option<&HeldError<T>> {
        self.errors.last()
    }

    /// The highest level among the stored errors.
    ///
    /// This is the usual way for an owner to decide whether collected errors
    /// should end the current operation.
    pub fn max_level(&self) -> Option<ErrorLevel> {
        self.errors.iter().map(|error| error.level()).max()
    }
}

impl<T> Default for ErrorHolder<T>
where
    T: markers::ThreadSafetyMarker,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ErrorHolder<T>
where
    T: markers::ThreadSafetyMarker,
{
    type IntoIter = core::slice::Iter<'a, HeldError<T>>;
    type Item = &'a HeldError<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for ErrorHolder<T>
where
    T: markers::ThreadSafetyMarker,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorHolder")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
