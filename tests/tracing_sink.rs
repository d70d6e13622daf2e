//! The default routing through `TracingSink`, observed with a recording
//! `tracing-subscriber` layer.

use std::{
    borrow::Cow,
    fmt,
    sync::{Arc, Mutex},
};

use error_holder::{
    ErrorHolder, ErrorLevel, LeveledError,
    dispatch::{LevelRouter, TracingSink},
    markers::SendSync,
};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry,
};

#[derive(Clone, Debug, thiserror::Error)]
#[error("{0}")]
struct ScanError(&'static str, ErrorLevel);

impl LeveledError for ScanError {
    fn type_name(&self) -> &str {
        "ScanError"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0)
    }

    fn level(&self) -> ErrorLevel {
        self.1
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Recorded {
    level: Option<Level>,
    message: String,
    domain: String,
    fatal: bool,
}

impl Visit for Recorded {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "domain" {
            self.domain = value.to_string();
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "fatal" {
            self.fatal = value;
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl<S: Subscriber> tracing_subscriber::Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorded = Recorded {
            level: Some(*event.metadata().level()),
            ..Recorded::default()
        };
        event.record(&mut recorded);
        self.0.lock().unwrap().push(recorded);
    }
}

fn record(f: impl FnOnce()) -> Vec<Recorded> {
    let recorder = Recorder::default();
    let subscriber = registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    recorder.0.lock().unwrap().clone()
}

#[test]
fn test_new_holders_report_through_their_own_tracing_route() {
    let events = record(|| {
        let mut first: ErrorHolder = ErrorHolder::new();
        let mut second: ErrorHolder<SendSync> = ErrorHolder::default();
        first.push_error(&ScanError("disk read failed", ErrorLevel::Error));
        second.push_error(&ScanError("controller gone", ErrorLevel::Fatal));
    });

    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Error: ScanError: disk read failed",
            "Fatal: ScanError: controller gone",
        ]
    );
    assert!(events.iter().all(|e| e.domain == "error_holder"));
}

#[test]
fn test_levels_map_to_tracing_levels() {
    let events = record(|| {
        let mut holder: ErrorHolder =
            ErrorHolder::with_dispatcher(LevelRouter::unconfigured(TracingSink::default()));
        for level in ErrorLevel::ALL {
            holder.push_error(&ScanError("ping", level));
        }
    });

    let levels: Vec<Option<Level>> = events.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        [
            Some(Level::TRACE),
            Some(Level::INFO),
            Some(Level::WARN),
            Some(Level::ERROR),
            Some(Level::ERROR),
        ]
    );
    let fatal: Vec<bool> = events.iter().map(|e| e.fatal).collect();
    assert_eq!(fatal, [false, false, false, false, true]);
    assert!(events.iter().all(|e| e.domain == "error_holder"));
}

#[test]
fn test_event_text_carries_prefix_and_type() {
    let events = record(|| {
        let mut holder: ErrorHolder =
            ErrorHolder::with_dispatcher(LevelRouter::unconfigured(TracingSink::new("storage")));
        holder.push_error(&ScanError("disk read failed", ErrorLevel::Error));
        holder.push_error(&ScanError("slow seek", ErrorLevel::Warn));
        holder.push_error(&ScanError("found 3 disks", ErrorLevel::Info));
    });

    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Error: ScanError: disk read failed",
            "Warning: ScanError: slow seek",
            "ScanError: found 3 disks",
        ]
    );
    assert!(events.iter().all(|e| e.domain == "storage"));
}

#[test]
fn test_min_level_and_quiet() {
    let events = record(|| {
        let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(
            LevelRouter::unconfigured(TracingSink::default()).with_min_level(ErrorLevel::Warn),
        );
        holder.push_error(&ScanError("hidden", ErrorLevel::Info));
        holder.push_error(&ScanError("shown", ErrorLevel::Warn));

        let mut muted: ErrorHolder = ErrorHolder::with_dispatcher(
            LevelRouter::unconfigured(TracingSink::default()).quiet(true),
        );
        muted.push_error(&ScanError("muted", ErrorLevel::Fatal));
        assert!(muted.has_errors());
        assert_eq!(holder.len(), 2);
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "Warning: ScanError: shown");
}
