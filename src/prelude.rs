//! Commonly used items for convenient importing.
//!
//! ```rust
//! use error_holder::prelude::*;
//!
//! let holder: ErrorHolder = ErrorHolder::new();
//! assert!(!holder.has_errors());
//! ```
//!
//! The prelude includes [`ErrorHolder`], [`HeldError`], the
//! [`LeveledError`] trait with its [`ErrorLevel`], the [`ResultExt`]
//! extension trait and the [`markers`] module.

pub use crate::{ErrorHolder, ErrorLevel, HeldError, LeveledError, ResultExt, markers};
