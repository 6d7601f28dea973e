//! The process-wide [`Logger`] and the free functions that write through it.
//!
//! The global logger is created on first use with the threshold at
//! [`LogLevel::Trace`] and stays alive for the whole process. [`configure`] is
//! the only way to change it.

use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use crate::{
    config::Config,
    log::{caller, log_level::LogLevel, log_msg::sprint, logger::Logger},
};

static LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The process-wide logger.
#[must_use]
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Sets the global threshold, clamped into `[Fatal, Trace]`. Can be called
/// again at any time; returns the level applied.
pub fn configure(level: i64) -> LogLevel {
    LOGGER.configure(level)
}

pub fn configure_level(level: LogLevel) -> LogLevel {
    LOGGER.configure_level(level)
}

/// Applies `[Logging] level` from a configuration file.
pub fn configure_from(config: &Config) -> LogLevel {
    LOGGER.configure_from(config)
}

#[must_use]
pub fn level() -> LogLevel {
    LOGGER.level()
}

#[must_use]
pub fn enabled(level: LogLevel) -> bool {
    LOGGER.enabled(level)
}

macro_rules! level_fns {
    ($($(#[$doc:meta])* $level:ident: $values:ident, $fmt:ident;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $values(values: &[&dyn Display]) {
                LOGGER.$values(values);
            }

            #[doc = concat!("Format-string form of [`", stringify!($values), "`].")]
            #[track_caller]
            pub fn $fmt(args: fmt::Arguments<'_>) {
                LOGGER.$fmt(args);
            }
        )*
    };
}

level_fns! {
    /// Most detail in printing.
    Trace: trace, tracef;
    /// For troubleshooting, without flooding the output.
    Debug: debug, debugf;
    Info: info, infof;
    Warn: warn, warnf;
    Error: error, errorf;
}

/// Writes at Fatal level and exits the process. Never returns.
#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> ! {
    LOGGER.fatal(values)
}

/// Format-string form of [`fatal`]. Never returns.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    LOGGER.fatalf(args)
}

/// Writes the error of a failed outcome at Error level; `Ok` is ignored.
///
/// ```
/// let outcome: Result<(), std::io::Error> = std::fs::remove_file("/no/such/file");
/// levlog::emit_error(&outcome);
/// ```
#[track_caller]
pub fn emit_error<T, E: Display>(outcome: &Result<T, E>) {
    LOGGER.emit_error(outcome);
}

// The stack is only walked once the line is known to reach a live channel.
// A caller inlined by the optimizer is reported as its parent; the
// `started!`/`mark!`/`exit_error!` macros name the enclosing function exactly.

/// Trace line marking the start of the calling function.
#[track_caller]
#[inline(never)]
pub fn started() {
    if LOGGER.enabled(LogLevel::Trace) {
        LOGGER.started_as(&caller::resolve());
    }
}

/// Trace line marking the end of the calling function.
#[track_caller]
#[inline(never)]
pub fn completed() {
    if LOGGER.enabled(LogLevel::Trace) {
        LOGGER.completed_as(&caller::resolve());
    }
}

/// Leaves a footprint: a Trace line with the calling function and the values.
#[track_caller]
#[inline(never)]
pub fn mark(values: &[&dyn Display]) {
    if LOGGER.enabled(LogLevel::Trace) {
        let caller = caller::resolve();
        LOGGER.mark_as(&caller, format_args!("{}", sprint(values)));
    }
}

#[track_caller]
#[inline(never)]
pub fn markf(args: fmt::Arguments<'_>) {
    if LOGGER.enabled(LogLevel::Trace) {
        LOGGER.mark_as(&caller::resolve(), args);
    }
}

/// Error line `[<caller>] Exit error: ...`. Despite the wording it only
/// logs; use [`fatal`] to stop the process.
#[track_caller]
#[inline(never)]
pub fn exit_error(values: &[&dyn Display]) {
    if LOGGER.enabled(LogLevel::Error) {
        let caller = caller::resolve();
        LOGGER.exit_error_as(&caller, format_args!("{}", sprint(values)));
    }
}

#[track_caller]
#[inline(never)]
pub fn exit_errorf(args: fmt::Arguments<'_>) {
    if LOGGER.enabled(LogLevel::Error) {
        LOGGER.exit_error_as(&caller::resolve(), args);
    }
}

#[doc(hidden)]
#[track_caller]
pub fn started_as(caller: &str) {
    LOGGER.started_as(caller);
}

#[doc(hidden)]
#[track_caller]
pub fn completed_as(caller: &str) {
    LOGGER.completed_as(caller);
}

#[doc(hidden)]
#[track_caller]
pub fn mark_as(caller: &str, args: fmt::Arguments<'_>) {
    LOGGER.mark_as(caller, args);
}

#[doc(hidden)]
#[track_caller]
pub fn exit_error_as(caller: &str, args: fmt::Arguments<'_>) {
    LOGGER.exit_error_as(caller, args);
}

// Kept so code written against a plain print interface keeps working. All
// three go through the Info channel.

#[track_caller]
pub fn print(values: &[&dyn Display]) {
    LOGGER.print(values);
}

#[track_caller]
pub fn println(values: &[&dyn Display]) {
    LOGGER.println(values);
}

#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    LOGGER.printf(args);
}
