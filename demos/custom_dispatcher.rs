//! Replacing the default tracing route.
//!
//! This example shows:
//! 1. A closure as a dispatcher
//! 2. A custom `ChannelSink` behind the built-in `LevelRouter`
//! 3. A `SendSync` holder shared between worker threads
//!
//! # Running this Example
//!
//! ```bash
//! cargo run --example custom_dispatcher
//! ```

use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

use error_holder::{
    Channel,
    dispatch::{ChannelSink, LevelRouter},
    format_diagnostic,
    markers::SendSync,
    prelude::*,
};

#[derive(Clone, Debug)]
struct LoadError {
    file: &'static str,
    reason: &'static str,
    level: ErrorLevel,
}

impl LeveledError for LoadError {
    fn type_name(&self) -> &str {
        "LoadError"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}: {}", self.file, self.reason))
    }

    fn level(&self) -> ErrorLevel {
        self.level
    }
}

fn load_errors() -> [LoadError; 3] {
    [
        LoadError {
            file: "app.toml",
            reason: "unknown key `colour`",
            level: ErrorLevel::Warn,
        },
        LoadError {
            file: "db.toml",
            reason: "port out of range",
            level: ErrorLevel::Error,
        },
        LoadError {
            file: "cache.toml",
            reason: "using defaults",
            level: ErrorLevel::Info,
        },
    ]
}

// ============================================================================
// Example 1: A closure dispatcher
// ============================================================================

fn closure_dispatcher() {
    let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(|error: &dyn LeveledError| {
        println!("<{}> {}", error.level(), format_diagnostic(error));
    });
    for error in load_errors() {
        holder.push_error(&error);
    }
}

// ============================================================================
// Example 2: Terminal output by channel
// ============================================================================

/// Writes warnings and worse to stderr, everything else to stdout.
struct Terminal;

impl ChannelSink for Terminal {
    fn emit(&self, channel: Channel, text: &str) {
        match channel {
            Channel::Dump | Channel::Info => println!("{text}"),
            Channel::Warn | Channel::Error | Channel::Fatal => eprintln!("{text}"),
        }
    }
}

fn terminal_sink() {
    let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(LevelRouter::new(Terminal));
    for error in load_errors() {
        holder.push_error(&error);
    }

    let mut strict: ErrorHolder =
        ErrorHolder::with_dispatcher(LevelRouter::new(Terminal).with_min_level(ErrorLevel::Error));
    for error in load_errors() {
        strict.push_error(&error);
    }
    println!("strict holder kept all {} errors", strict.len());
}

// ============================================================================
// Example 3: Sharing a holder between threads
// ============================================================================

fn shared_between_threads() {
    let holder: ErrorHolder<SendSync> =
        ErrorHolder::with_dispatcher(LevelRouter::new(|channel: Channel, text: &str| {
            println!("[{}] {text}", channel.level());
        }));
    let holder = Arc::new(Mutex::new(holder));

    let workers: Vec<_> = load_errors()
        .into_iter()
        .map(|error| {
            let holder = holder.clone();
            std::thread::spawn(move || {
                if let Ok(mut holder) = holder.lock() {
                    holder.push_error(&error);
                }
            })
        })
        .collect();
    for worker in workers {
        let _ = worker.join();
    }

    if let Ok(holder) = holder.lock() {
        println!("workers reported {} errors", holder.len());
    }
}

fn main() {
    println!("Example 1: Closure dispatcher\n");
    closure_dispatcher();

    println!("\nExample 2: Terminal sink\n");
    terminal_sink();

    println!("\nExample 3: Shared between threads\n");
    shared_between_threads();
}
