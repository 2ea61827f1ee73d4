//! Destinations for rendered reports and reporting errors

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// Where reports and reporting errors are written
pub trait LogSink {
    /// Emit a rendered report
    fn output(&self, text: &str);

    /// Record an error raised while producing a report
    fn error(&self, err: &dyn Display);
}

/// Writes reports to stdout and errors through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLogSink;

impl LogSink for StdLogSink {
    fn output(&self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", text) {
            log::error!("failed to write report to stdout: {}", e);
        }
    }

    fn error(&self, err: &dyn Display) {
        log::error!("{}", err);
    }
}

/// Keeps everything written to it in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    outputs: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports written so far
    pub fn outputs(&self) -> Vec<String> {
        lock(&self.outputs).clone()
    }

    /// Errors written so far, rendered with `Display`
    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }
}

impl LogSink for MemorySink {
    fn output(&self, text: &str) {
        lock(&self.outputs).push(text.to_string());
    }

    fn error(&self, err: &dyn Display) {
        lock(&self.errors).push(err.to_string());
    }
}

// A poisoned buffer still holds every complete push.
fn lock(buf: &Mutex<Vec<String>>) -> MutexGuard<'_, Vec<String>> {
    buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
