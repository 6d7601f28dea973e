use std::io::{self, Write};

use crate::log::log_level::LogLevel;

/// Destination for finished, newline-terminated log lines.
///
/// Writes are best-effort: implementations swallow I/O errors so that a
/// closed or redirected stream never turns a log call into a failure.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, line: &str);
}

/// Writes lines to the process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&self, _level: LogLevel, line: &str) {
        // The stdout lock keeps one line in one piece across threads.
        let mut out = io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

/// Writes lines to the process standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn log(&self, _level: LogLevel, line: &str) {
        let mut err = io::stderr().lock();
        let _ = err.write_all(line.as_bytes());
    }
}

/// In-memory sink used by unit tests to observe what a stream received.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    lines: std::sync::Mutex<Vec<(LogLevel, String)>>,
}

#[cfg(test)]
impl MemorySink {
    pub(crate) fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn text(&self) -> String {
        self.lines().into_iter().map(|(_, line)| line).collect()
    }

    pub(crate) fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((level, line.to_owned()));
    }
}
