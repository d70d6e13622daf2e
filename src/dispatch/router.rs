use alloc::string::String;

use crate::{
    ErrorLevel, LeveledError, format_diagnostic,
    dispatch::{ChannelSink, Dispatcher, TracingSink},
    options::DispatchOptions,
};

/// The default dispatcher: formats each error and routes it to the channel
/// matching its level.
///
/// See the [module documentation](crate::dispatch) for the routing table.
///
/// On top of the routing table, a router has a minimum level. Errors below
/// it are not emitted at all. [`LevelRouter::new`] takes the minimum from the
/// `ERROR_HOLDER` environment variable (see [`DispatchOptions`]) and emits
/// everything routable when it is unset.
///
/// # Examples
///
/// ```
/// use std::{borrow::Cow, cell::RefCell, rc::Rc};
///
/// use error_holder::{Channel, ErrorLevel, LeveledError, dispatch::{Dispatcher, LevelRouter}};
///
/// #[derive(Debug)]
/// struct Noise(ErrorLevel);
///
/// impl LeveledError for Noise {
///     fn type_name(&self) -> &str {
///         "Noise"
///     }
///     fn message(&self) -> Cow<'_, str> {
///         "bzzt".into()
///     }
///     fn level(&self) -> ErrorLevel {
///         self.0
///     }
/// }
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = {
///     let seen = seen.clone();
///     move |channel: Channel, _: &str| seen.borrow_mut().push(channel)
/// };
/// let router = LevelRouter::new(sink).with_min_level(ErrorLevel::Warn);
///
/// for level in ErrorLevel::ALL {
///     router.dispatch(&Noise(level));
/// }
/// assert_eq!(*seen.borrow(), [Channel::Warn, Channel::Error, Channel::Fatal]);
/// ```
///
/// [`DispatchOptions`]: crate::options::DispatchOptions
pub struct LevelRouter<S = TracingSink> {
    sink: S,
    min_level: ErrorLevel,
    quiet: bool,
}

impl<S> LevelRouter<S>
where
    S: ChannelSink,
{
    /// Creates a router writing to `sink`, configured from the environment.
    pub fn new(sink: S) -> Self {
        let options = DispatchOptions::get();
        Self {
            sink,
            min_level: options.min_level,
            quiet: options.quiet,
        }
    }

    /// Creates a router writing to `sink` that ignores the environment and
    /// emits every routable error.
    pub fn unconfigured(sink: S) -> Self {
        Self {
            sink,
            min_level: ErrorLevel::None,
            quiet: false,
        }
    }

    /// Only emit errors at or above `level`.
    #[must_use]
    pub fn with_min_level(mut self, level: ErrorLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Suppress all output, or re-enable it.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The lowest level this router emits.
    pub fn min_level(&self) -> ErrorLevel {
        self.min_level
    }

    /// Returns the sink this router writes to.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl Default for LevelRouter<TracingSink> {
    fn default() -> Self {
        Self::new(TracingSink::default())
    }
}

impl<S> Dispatcher for LevelRouter<S>
where
    S: ChannelSink,
{
    fn dispatch(&self, error: &dyn LeveledError) {
        let level = error.level();
        if self.quiet || level < self.min_level {
            return;
        }
        let Some(channel) = level.channel() else {
            return;
        };

        let mut text = String::from(channel.prefix());
        text.push_str(&format_diagnostic(error));
        self.sink.emit(channel, &text);
    }
}

impl<S> core::fmt::Debug for LevelRouter<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LevelRouter")
            .field("min_level", &self.min_level)
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}
