//! A device scanner that keeps going when individual devices fail.
//!
//! This example shows:
//! 1. Defining error kinds with `thiserror` and implementing `LeveledError`
//! 2. Embedding an `ErrorHolder` in a subsystem
//! 3. Immediate diagnostics through the default tracing route
//! 4. Inspecting and recovering the collected errors afterwards
//!
//! # Running this Example
//!
//! ```bash
//! cargo run --example collect_and_continue
//! ```
//!
//! Set `ERROR_HOLDER=level=warn` to hide the informational messages.

use std::borrow::Cow;

use error_holder::prelude::*;

#[derive(Clone, Debug, thiserror::Error)]
enum ScanError {
    #[error("device {0} is not responding")]
    NotResponding(String),
    #[error("device {0} reports {1} reallocated sectors")]
    Degraded(String, u32),
    #[error("device {0} is a loop device, skipped")]
    Skipped(String),
}

impl LeveledError for ScanError {
    fn type_name(&self) -> &str {
        "ScanError"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn level(&self) -> ErrorLevel {
        match self {
            ScanError::NotResponding(_) => ErrorLevel::Error,
            ScanError::Degraded(_, _) => ErrorLevel::Warn,
            ScanError::Skipped(_) => ErrorLevel::Info,
        }
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("scan table is missing, no devices can be enumerated")]
struct MissingTable;

impl LeveledError for MissingTable {
    fn type_name(&self) -> &str {
        "MissingTable"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn level(&self) -> ErrorLevel {
        ErrorLevel::Fatal
    }
}

struct Scanner {
    errors: ErrorHolder,
}

impl Scanner {
    fn new() -> Self {
        Self {
            errors: ErrorHolder::new(),
        }
    }

    fn probe(device: &str) -> Result<String, ScanError> {
        match device {
            d if d.starts_with("loop") => Err(ScanError::Skipped(d.to_string())),
            "sdc" => Err(ScanError::NotResponding(device.to_string())),
            "sdd" => Err(ScanError::Degraded(device.to_string(), 112)),
            _ => Ok(format!("/dev/{device}")),
        }
    }

    fn scan(&mut self, table: Option<&[&str]>) -> Vec<String> {
        let Some(devices) = table else {
            self.errors.push_error(&MissingTable);
            return Vec::new();
        };

        devices
            .iter()
            .copied()
            .filter_map(|device| Self::probe(device).hold_err(&mut self.errors))
            .collect()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let mut scanner = Scanner::new();

    println!("Example 1: Scan with some failing devices\n");
    let table: &[&str] = &["sda", "sdb", "sdc", "sdd", "loop0"];
    let found = scanner.scan(Some(table));
    println!("\nFound: {found:?}");
    println!("Collected {} errors:", scanner.errors.len());
    for error in &scanner.errors {
        println!("  [{}] {error}", error.level());
    }

    let unresponsive: Vec<&ScanError> = scanner
        .errors
        .iter()
        .filter_map(|error| error.downcast_ref::<ScanError>())
        .filter(|error| matches!(error, ScanError::NotResponding(_)))
        .collect();
    println!("Unresponsive devices: {unresponsive:?}");

    if scanner.errors.max_level() >= Some(ErrorLevel::Error) {
        println!("At least one device needs attention");
    }

    println!("\nExample 2: Reset and scan without a device table\n");
    let report = scanner.errors.get_errors();
    scanner.errors.clear_errors();
    scanner.scan(None);
    println!(
        "\nNow holding {} error(s), the earlier report still has {}",
        scanner.errors.len(),
        report.len()
    );
    // Fatal only classifies; deciding to stop is up to the owner
    if scanner.errors.max_level() == Some(ErrorLevel::Fatal) {
        println!("Giving up on this scan");
    }
}
