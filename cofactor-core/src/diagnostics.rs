//! Diagnostics port
//!
//! The matrix core reports recoverable conditions (clamped dimensions,
//! near-zero divisors, jagged input) and failures through this trait. It
//! never reads anything back from the sink, so a no-op implementation is
//! always valid.

use std::fmt;
use std::sync::{Arc, Mutex};
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        write!(f, "{}", s)
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

/// Leveled logging sink
pub trait Diagnostics: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Shared handle carried by every matrix
pub type SharedDiagnostics = Arc<dyn Diagnostics>;

/// Sink used when the caller does not provide one
pub fn default_diagnostics() -> SharedDiagnostics {
    Arc::new(TracingDiagnostics)
}

/// Forwards to the `tracing` macros; the installed subscriber decides
/// where messages go.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!(target: "cofactor", "{}", message),
            Level::Info => tracing::info!(target: "cofactor", "{}", message),
            Level::Warn => tracing::warn!(target: "cofactor", "{}", message),
            Level::Error => tracing::error!(target: "cofactor", "{}", message),
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Single captured message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Keeps every message in memory, for assertions in tests
#[derive(Debug, Default)]
pub struct CapturingDiagnostics {
    records: Mutex<Vec<Record>>,
}

impl CapturingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<Record> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages logged at exactly `level`
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    pub fn count(&self, level: Level) -> usize {
        self.records().iter().filter(|r| r.level == level).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn clear(&self) {
        match self.records.lock() {
            Ok(mut records) => records.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Diagnostics for CapturingDiagnostics {
    fn log(&self, level: Level, message: &str) {
        let record = Record { level, message: message.to_string() };
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
