use alloc::borrow::Cow;

use crate::{Channel, dispatch::ChannelSink};

/// A [`ChannelSink`] emitting every message as a [`tracing`] event.
///
/// Channels map to tracing levels as follows:
///
/// - [`Channel::Dump`] → `TRACE`
/// - [`Channel::Info`] → `INFO`
/// - [`Channel::Warn`] → `WARN`
/// - [`Channel::Error`] → `ERROR`
/// - [`Channel::Fatal`] → `ERROR`, with the field `fatal = true`
///
/// Every event carries a `domain` field naming the subsystem that owns the
/// holder, so subscribers can tell holders apart. The default domain is
/// `"error_holder"`.
///
/// # Examples
///
/// ```
/// use error_holder::{ErrorHolder, dispatch::{LevelRouter, TracingSink}};
///
/// let holder: ErrorHolder =
///     ErrorHolder::with_dispatcher(LevelRouter::new(TracingSink::new("storage")));
/// assert!(!holder.has_errors());
/// ```
#[derive(Clone, Debug)]
pub struct TracingSink {
    domain: Cow<'static, str>,
}

impl TracingSink {
    /// The domain used by [`TracingSink::default`].
    pub const DEFAULT_DOMAIN: &'static str = "error_holder";

    /// Creates a sink tagging its events with `domain`.
    pub fn new(domain: impl Into<Cow<'static, str>>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    /// The domain attached to every event.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DOMAIN)
    }
}

impl ChannelSink for TracingSink {
    fn emit(&self, channel: Channel, text: &str) {
        let domain: &str = &self.domain;
        match channel {
            Channel::Dump => tracing::trace!(domain, "{text}"),
            Channel::Info => tracing::info!(domain, "{text}"),
            Channel::Warn => tracing::warn!(domain, "{text}"),
            Channel::Error => tracing::error!(domain, "{text}"),
            Channel::Fatal => tracing::error!(domain, fatal = true, "{text}"),
        }
    }
}
