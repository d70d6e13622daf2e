//! Diagnostic dispatch for newly recorded errors.
//!
//! Every [`ErrorHolder`](crate::ErrorHolder) owns exactly one [`Dispatcher`].
//! It is invoked once for each pushed error, synchronously, after the error
//! has been stored and before [`push_error`](crate::ErrorHolder::push_error)
//! returns.
//!
//! # Default Routing
//!
//! Unless the owner picks something else, holders use a [`LevelRouter`]
//! writing to a [`TracingSink`]. The router formats each error as
//! `"<type_name>: <message>"` and routes it by level:
//!
//! | Level   | Channel          | Text                                |
//! |---------|------------------|-------------------------------------|
//! | `none`  | *(suppressed)*   |                                     |
//! | `dump`  | [`Channel::Dump`]  | `<type_name>: <message>`          |
//! | `info`  | [`Channel::Info`]  | `<type_name>: <message>`          |
//! | `warn`  | [`Channel::Warn`]  | `Warning: <type_name>: <message>` |
//! | `error` | [`Channel::Error`] | `Error: <type_name>: <message>`   |
//! | `fatal` | [`Channel::Fatal`] | `Fatal: <type_name>: <message>`   |
//!
//! # Substituting the Dispatcher
//!
//! The dispatcher is chosen when the holder is constructed, with
//! [`ErrorHolder::with_dispatcher`](crate::ErrorHolder::with_dispatcher), and
//! belongs to that holder alone.
//! A router can keep the level routing while sending the text somewhere else
//! by swapping its [`ChannelSink`]:
//!
//! ```
//! use std::{borrow::Cow, cell::RefCell, rc::Rc};
//!
//! use error_holder::{
//!     Channel, ErrorHolder, ErrorLevel, LeveledError, dispatch::LevelRouter,
//! };
//!
//! #[derive(Clone, Debug)]
//! struct DeviceError;
//!
//! impl LeveledError for DeviceError {
//!     fn type_name(&self) -> &str {
//!         "DeviceError"
//!     }
//!     fn message(&self) -> Cow<'_, str> {
//!         "disk read failed".into()
//!     }
//!     fn level(&self) -> ErrorLevel {
//!         ErrorLevel::Error
//!     }
//! }
//!
//! let lines = Rc::new(RefCell::new(Vec::new()));
//! let sink = {
//!     let lines = lines.clone();
//!     move |channel: Channel, text: &str| lines.borrow_mut().push((channel, text.to_string()))
//! };
//!
//! let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(LevelRouter::new(sink));
//! holder.push_error(&DeviceError);
//!
//! assert_eq!(
//!     lines.borrow().as_slice(),
//!     &[(Channel::Error, "Error: DeviceError: disk read failed".to_string())]
//! );
//! ```

mod router;
mod tracing_sink;

pub use self::{router::LevelRouter, tracing_sink::TracingSink};
use crate::{Channel, LeveledError};

/// A routine invoked once for every error pushed into a holder.
///
/// Dispatchers only observe errors. They receive a reference to the copy
/// stored in the holder, and nothing they do can change what the holder
/// stores.
///
/// Closures taking `&dyn LeveledError` are dispatchers.
///
/// # Examples
///
/// ```
/// use std::{borrow::Cow, cell::Cell, rc::Rc};
///
/// use error_holder::{ErrorHolder, ErrorLevel, LeveledError};
///
/// #[derive(Clone, Debug)]
/// struct Hiccup;
///
/// impl LeveledError for Hiccup {
///     fn type_name(&self) -> &str {
///         "Hiccup"
///     }
///     fn message(&self) -> Cow<'_, str> {
///         "hic".into()
///     }
///     fn level(&self) -> ErrorLevel {
///         ErrorLevel::Info
///     }
/// }
///
/// let seen = Rc::new(Cell::new(0));
/// let counter = {
///     let seen = seen.clone();
///     move |_: &dyn LeveledError| seen.set(seen.get() + 1)
/// };
///
/// let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(counter);
/// holder.push_error(&Hiccup);
/// holder.push_error(&Hiccup);
/// assert_eq!(seen.get(), 2);
/// ```
pub trait Dispatcher: 'static {
    /// Called with the freshly stored copy of a pushed error.
    fn dispatch(&self, error: &dyn LeveledError);
}

impl<F> Dispatcher for F
where
    F: Fn(&dyn LeveledError) + 'static,
{
    fn dispatch(&self, error: &dyn LeveledError) {
        self(error)
    }
}

/// A destination for formatted diagnostic text.
///
/// A [`LevelRouter`] decides *which* channel a message goes to and what it
/// looks like. The sink decides where each channel ends up: a log, the
/// console, a user interface or a test probe.
///
/// Closures taking `(Channel, &str)` are sinks.
pub trait ChannelSink: 'static {
    /// Delivers one fully formatted message, prefix included.
    fn emit(&self, channel: Channel, text: &str);
}

impl<F> ChannelSink for F
where
    F: Fn(Channel, &str) + 'static,
{
    fn emit(&self, channel: Channel, text: &str) {
        self(channel, text)
    }
}
