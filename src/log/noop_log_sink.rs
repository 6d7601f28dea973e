use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Discard sink: accepts every line and produces no observable effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level: LogLevel, _line: &str) {}
}
