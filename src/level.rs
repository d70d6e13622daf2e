//! Severity levels and the diagnostic channels they route to.
//!
//! Every [`LeveledError`](crate::LeveledError) carries an [`ErrorLevel`]. The
//! level is purely classificatory: it decides which [`Channel`] the default
//! dispatcher writes to, but a [`Fatal`](ErrorLevel::Fatal) error never aborts
//! or unwinds anything by itself. What happens after an error has been
//! recorded is up to the owner of the holder.
//!
//! # Examples
//!
//! ```
//! use error_holder::{Channel, ErrorLevel};
//!
//! assert!(ErrorLevel::Warn < ErrorLevel::Error);
//! assert_eq!(ErrorLevel::None.channel(), None);
//! assert_eq!(ErrorLevel::Fatal.channel(), Some(Channel::Fatal));
//! assert_eq!("warning".parse::<ErrorLevel>(), Ok(ErrorLevel::Warn));
//! ```

use core::{fmt, str::FromStr};

/// Ordered severity of a recorded error.
///
/// The ordering is `None < Dump < Info < Warn < Error < Fatal`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub enum ErrorLevel {
    /// Recorded, but never produces diagnostic output.
    #[default]
    None,
    /// Verbose dump output.
    Dump,
    /// Informational.
    Info,
    /// Something looks wrong, but work can continue normally.
    Warn,
    /// An operation failed.
    Error,
    /// An operation failed in a way the owner will most likely not recover
    /// from. Only affects routing.
    Fatal,
}

impl ErrorLevel {
    /// All levels, lowest first.
    pub const ALL: [ErrorLevel; 6] = [
        ErrorLevel::None,
        ErrorLevel::Dump,
        ErrorLevel::Info,
        ErrorLevel::Warn,
        ErrorLevel::Error,
        ErrorLevel::Fatal,
    ];

    /// Returns the lowercase name of the level.
    ///
    /// ```
    /// use error_holder::ErrorLevel;
    ///
    /// assert_eq!(ErrorLevel::Dump.as_str(), "dump");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorLevel::None => "none",
            ErrorLevel::Dump => "dump",
            ErrorLevel::Info => "info",
            ErrorLevel::Warn => "warn",
            ErrorLevel::Error => "error",
            ErrorLevel::Fatal => "fatal",
        }
    }

    /// Returns the channel errors of this level are routed to, or `None` if
    /// they are suppressed.
    pub const fn channel(self) -> Option<Channel> {
        match self {
            ErrorLevel::None => None,
            ErrorLevel::Dump => Some(Channel::Dump),
            ErrorLevel::Info => Some(Channel::Info),
            ErrorLevel::Warn => Some(Channel::Warn),
            ErrorLevel::Error => Some(Channel::Error),
            ErrorLevel::Fatal => Some(Channel::Fatal),
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorLevel {
    type Err = ParseErrorLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ErrorLevel::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.as_str()))
            .or_else(|| s.eq_ignore_ascii_case("warning").then_some(ErrorLevel::Warn))
            .ok_or(ParseErrorLevelError(()))
    }
}

/// Error returned when parsing an [`ErrorLevel`] from an unknown name.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ParseErrorLevelError(());

impl fmt::Debug for ParseErrorLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseErrorLevelError").finish()
    }
}

impl fmt::Display for ParseErrorLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown error level, expected one of none, dump, info, warn, error, fatal"
        )
    }
}

impl core::error::Error for ParseErrorLevelError {}

/// A diagnostic output channel.
///
/// There is one channel per [`ErrorLevel`] except
/// [`ErrorLevel::None`], whose errors are never emitted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Channel {
    /// Verbose output.
    Dump,
    /// Informational output.
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
    /// Fatal errors.
    Fatal,
}

impl Channel {
    /// The text prepended to every message written to this channel.
    ///
    /// ```
    /// use error_holder::Channel;
    ///
    /// assert_eq!(Channel::Info.prefix(), "");
    /// assert_eq!(Channel::Warn.prefix(), "Warning: ");
    /// ```
    pub const fn prefix(self) -> &'static str {
        match self {
            Channel::Dump | Channel::Info => "",
            Channel::Warn => "Warning: ",
            Channel::Error => "Error: ",
            Channel::Fatal => "Fatal: ",
        }
    }

    /// The level whose errors are routed here.
    pub const fn level(self) -> ErrorLevel {
        match self {
            Channel::Dump => ErrorLevel::Dump,
            Channel::Info => ErrorLevel::Info,
            Channel::Warn => ErrorLevel::Warn,
            Channel::Error => ErrorLevel::Error,
            Channel::Fatal => ErrorLevel::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_level_ordering() {
        for pair in ErrorLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(ErrorLevel::ALL.iter().max(), Some(&ErrorLevel::Fatal));
        assert_eq!(ErrorLevel::default(), ErrorLevel::None);
    }

    #[test]
    fn test_level_parse_and_display() {
        for level in ErrorLevel::ALL {
            assert_eq!(level.to_string().parse::<ErrorLevel>(), Ok(level));
        }
        assert_eq!(" ERROR ".parse::<ErrorLevel>(), Ok(ErrorLevel::Error));
        assert_eq!("Warning".parse::<ErrorLevel>(), Ok(ErrorLevel::Warn));
        assert!("loud".parse::<ErrorLevel>().is_err());
        assert!(
            "loud"
                .parse::<ErrorLevel>()
                .unwrap_err()
                .to_string()
                .starts_with("unknown error level")
        );
    }

    #[test]
    fn test_channel_round_trip() {
        for level in ErrorLevel::ALL {
            match level.channel() {
                Some(channel) => assert_eq!(channel.level(), level),
                None => assert_eq!(level, ErrorLevel::None),
            }
        }
        assert_eq!(Channel::Dump.prefix(), "");
        assert_eq!(Channel::Error.prefix(), "Error: ");
        assert_eq!(Channel::Fatal.prefix(), "Fatal: ");
    }
}
