#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Collect-and-continue error accumulation with severity-routed diagnostics.
//!
//! ## Overview
//!
//! Many subsystems (a device scanner, a parser, a configuration loader)
//! would rather keep going when something goes wrong and report everything
//! at the end than stop at the first failure. This crate provides the
//! building block for that: an [`ErrorHolder`] that
//!
//! - keeps an ordered, append-only list of every error pushed into it, each
//!   stored as an independent copy that still knows its concrete type, and
//! - reports each error the moment it is pushed, through a [`Dispatcher`]
//!   that routes it to a channel matching its [`ErrorLevel`].
//!
//! ## Quick Example
//!
//! ```
//! use std::borrow::Cow;
//!
//! use error_holder::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct DeviceError {
//!     message: String,
//! }
//!
//! impl LeveledError for DeviceError {
//!     fn type_name(&self) -> &str {
//!         "DeviceError"
//!     }
//!     fn message(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(&self.message)
//!     }
//!     fn level(&self) -> ErrorLevel {
//!         ErrorLevel::Error
//!     }
//! }
//!
//! let mut holder: ErrorHolder = ErrorHolder::new();
//!
//! // Emits "Error: DeviceError: disk read failed" as a tracing event
//! holder.push_error(&DeviceError {
//!     message: "disk read failed".to_string(),
//! });
//!
//! assert!(holder.has_errors());
//! let errors = holder.get_errors();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors[0].downcast_ref::<DeviceError>().unwrap().message,
//!     "disk read failed"
//! );
//! ```
//!
//! For complete programs, see the `demos/` directory in the repository.
//!
//! ## Core Concepts
//!
//! - **[`LeveledError`]** is the capability every stored error provides: a
//!   type name, a message and an [`ErrorLevel`]. The crate defines no
//!   concrete error kinds; owners bring their own.
//! - **[`ErrorHolder`]** owns the list and one dispatcher. It cannot be
//!   cloned, so each diagnostic stream has exactly one owner.
//! - **[`HeldError`]** is a shared handle to one stored error. Handles
//!   returned by [`ErrorHolder::get_errors`] survive
//!   [`ErrorHolder::clear_errors`].
//! - **[`Dispatcher`]** runs once per push, synchronously. The default,
//!   [`LevelRouter`](dispatch::LevelRouter), formats `"<type>: <message>"`,
//!   prefixes warnings, errors and fatal errors, and hands the text to a
//!   [`ChannelSink`](dispatch::ChannelSink), by default
//!   [`TracingSink`](dispatch::TracingSink).
//!
//! Levels only classify. A [`Fatal`](ErrorLevel::Fatal) error is reported on
//! the fatal channel and nothing else happens: what to do with collected
//! errors is always the owner's decision.
//!
//! ## Thread Safety
//!
//! Holders are single-threaded by contract and do no locking. The default
//! [`ErrorHolder<Local>`](markers::Local) accepts any error and dispatcher;
//! [`ErrorHolder<SendSync>`](markers::SendSync) requires `Send + Sync` values
//! and can then be moved between threads or put behind a lock by its owner.
//!
//! ## Features
//!
//! - `std` (default): reads the `ERROR_HOLDER` environment variable (see
//!   [`options`]). Without it the crate is `no_std` and the defaults apply.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod dispatch;
pub mod markers;
pub mod options;
pub mod prelude;

mod held_error;
mod holder;
mod level;
mod leveled_error;
mod result_ext;

pub use self::{
    dispatch::Dispatcher,
    held_error::HeldError,
    holder::ErrorHolder,
    level::{Channel, ErrorLevel, ParseErrorLevelError},
    leveled_error::{LeveledError, format_diagnostic},
    result_ext::ResultExt,
};
