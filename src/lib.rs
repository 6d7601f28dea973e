//! levlog is a process-wide leveled logger.
//!
//! Every line has one of six severities, from [`LogLevel::Fatal`] down to
//! [`LogLevel::Trace`]. A single threshold, set with [`configure`] and
//! changeable at any time, decides where each level goes:
//!
//! - Error and Fatal always go to standard error.
//! - Warn, Info, Debug and Trace go to standard output when they are no more
//!   verbose than the threshold, and are discarded otherwise.
//!
//! The threshold starts at Trace. Lines look like
//! `[WARN ] 2024/03/09 07:05:01 main.rs:12: low disk`.
//!
//! ```
//! levlog::configure(3); // Warn
//! levlog::info(&[&"hidden"]);
//! levlog::warn(&[&"low disk:", &"92%"]);
//! levlog::errorf(format_args!("request {} failed", 17));
//! levlog::info!("also hidden, {} bytes", 4096);
//! ```

/// Settings file reader.
pub mod config;
/// Level routing, sinks and the global entry points.
pub mod log;

pub use config::{Config, ConfigError};
pub use log::{
    channel_set::{Channel, ChannelSet},
    global::{
        completed, configure, configure_from, configure_level, debug, debugf, emit_error,
        enabled, error, errorf, exit_error, exit_errorf, fatal, fatalf, info, infof, level,
        logger, mark, markf, print, printf, println, started, trace, tracef, warn, warnf,
    },
    log_level::{LogLevel, ParseLevelError},
    log_sink::{LogSink, StderrSink, StdoutSink},
    logger::{FATAL_EXIT_CODE, Logger},
    noop_log_sink::NoopLogSink,
};
