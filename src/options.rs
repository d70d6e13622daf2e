//! Environment configuration for the default dispatcher.
//!
//! [`LevelRouter::new`](crate::dispatch::LevelRouter::new) reads its settings
//! from the `ERROR_HOLDER` environment variable. The variable is read once per
//! process and cached.
//!
//! # Environment Variables
//!
//! - `ERROR_HOLDER` - Comma-separated options:
//!   - `level=<name>` - Only emit errors at or above this level (`none`,
//!     `dump`, `info`, `warn`, `error` or `fatal`)
//!   - `quiet` - Do not emit anything
//!
//! Unknown options and unparsable levels are ignored. Without the `std`
//! feature the environment is not consulted and the defaults apply.

use crate::ErrorLevel;

/// Settings applied by [`LevelRouter::new`](crate::dispatch::LevelRouter::new).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DispatchOptions {
    /// The lowest level that produces output.
    pub min_level: ErrorLevel,
    /// Suppress all output.
    pub quiet: bool,
}

impl DispatchOptions {
    /// The name of the environment variable holding the options.
    pub const ENV_VAR: &'static str = "ERROR_HOLDER";

    /// Returns the process-wide options.
    #[cfg(feature = "std")]
    pub fn get() -> Self {
        static ERROR_HOLDER_OPTIONS: std::sync::OnceLock<DispatchOptions> =
            std::sync::OnceLock::new();

        *ERROR_HOLDER_OPTIONS.get_or_init(|| match std::env::var_os(Self::ENV_VAR) {
            Some(var) => Self::parse(&var.to_string_lossy()),
            None => Self::default(),
        })
    }

    /// Returns the process-wide options.
    #[cfg(not(feature = "std"))]
    pub fn get() -> Self {
        Self::default()
    }

    /// Parses a comma-separated option string, as found in `ERROR_HOLDER`.
    ///
    /// ```
    /// use error_holder::{ErrorLevel, options::DispatchOptions};
    ///
    /// let options = DispatchOptions::parse("level=warn");
    /// assert_eq!(options.min_level, ErrorLevel::Warn);
    /// assert!(!options.quiet);
    /// ```
    pub fn parse(value: &str) -> Self {
        let mut options = Self::default();
        for option in value.split(',').map(str::trim) {
            if option.eq_ignore_ascii_case("quiet") {
                options.quiet = true;
            } else if let Some((key, level)) = option.split_once('=')
                && key.trim().eq_ignore_ascii_case("level")
                && let Ok(level) = level.parse::<ErrorLevel>()
            {
                options.min_level = level;
            }
        }
        options
    }
}
