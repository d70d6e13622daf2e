//! Marker types and traits for the thread-safety of holders and handles.
//!
//! An [`ErrorHolder<T>`](crate::ErrorHolder) and the
//! [`HeldError<T>`](crate::HeldError) handles it hands out carry a
//! thread-safety marker `T`:
//!
//! - [`Local`] (the default): the holder is meant to be used from one
//!   execution context. It accepts any error kind and any dispatcher,
//!   including ones built on `Rc` or `RefCell`, and is neither `Send` nor
//!   `Sync`.
//! - [`SendSync`]: every pushed error and the dispatcher must be
//!   `Send + Sync`, and in return the holder and its handles are
//!   `Send + Sync` too. This is what an owner needs to put a holder behind
//!   its own lock.
//!
//! The holder itself never synchronizes anything. The marker only decides
//! which values may enter it.
//!
//! # Enforcement at Construction
//!
//! The constraints are checked when values enter the holder, through the
//! [`ObjectMarkerFor`] bound. It is impossible to push a non-thread-safe error
//! into a `SendSync` holder:
//!
//! ```compile_fail
//! use std::{borrow::Cow, rc::Rc};
//!
//! use error_holder::{ErrorHolder, ErrorLevel, LeveledError, markers::SendSync};
//!
//! #[derive(Clone, Debug)]
//! struct Shared(Rc<str>);
//!
//! impl LeveledError for Shared {
//!     fn type_name(&self) -> &str {
//!         "Shared"
//!     }
//!     fn message(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(&self.0)
//!     }
//!     fn level(&self) -> ErrorLevel {
//!         ErrorLevel::Info
//!     }
//! }
//!
//! let mut holder: ErrorHolder<SendSync> = ErrorHolder::new();
//! holder.push_error(&Shared(Rc::from("nope")));
//! ```

/// Marker type for holders and handles that can cross thread boundaries.
///
/// See the [module documentation](self) for details.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct SendSync;

/// Marker type for holders and handles confined to a single thread.
///
/// This is the default marker. It places no thread-safety requirements on
/// stored errors or dispatchers.
///
/// See the [module documentation](self) for details.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Local;

mod sealed_thread_safety_marker {
    use super::*;

    pub trait Sealed: 'static {}

    impl Sealed for SendSync {}
    impl Sealed for Local {}
}

/// Marker trait implemented by [`SendSync`] and [`Local`].
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait ThreadSafetyMarker: sealed_thread_safety_marker::Sealed {}

impl ThreadSafetyMarker for SendSync {}
impl ThreadSafetyMarker for Local {}

/// Marker trait for values allowed inside a holder with thread-safety marker
/// `T`.
///
/// # Implementations
///
/// - For `T = Local`: implemented for all `Sized + 'static` types.
/// - For `T = SendSync`: implemented for `Sized + 'static` types that are
///   also `Send + Sync`.
///
/// It bounds both the errors passed to
/// [`push_error`](crate::ErrorHolder::push_error) and the dispatcher passed to
/// [`with_dispatcher`](crate::ErrorHolder::with_dispatcher).
pub trait ObjectMarkerFor<T: ThreadSafetyMarker>: Sized + 'static {}

impl<O: Sized + 'static> ObjectMarkerFor<Local> for O {}

impl<O: Sized + 'static> ObjectMarkerFor<SendSync> for O where O: Send + Sync {}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use super::*;

    #[test]
    fn test_object_marker_for() {
        static_assertions::assert_impl_all!(Rc<()>: ObjectMarkerFor<Local>);
        static_assertions::assert_not_impl_any!(Rc<()>: ObjectMarkerFor<SendSync>);
        static_assertions::assert_impl_all!(
            alloc::string::String: ObjectMarkerFor<Local>,
            ObjectMarkerFor<SendSync>
        );
    }
}
