use crate::{
    config::Config,
    log::{
        caller,
        channel_set::{Channel, ChannelSet},
        log_level::LogLevel,
        log_msg::{LogMsg, sprint},
        log_sink::{LogSink, StderrSink, StdoutSink},
        noop_log_sink::NoopLogSink,
    },
};

use std::{
    fmt::{self, Display},
    panic::Location,
    process,
    sync::{Arc, PoisonError, RwLock},
};

/// Exit status used by the Fatal operations.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled router that sends each line to stdout, stderr or nowhere.
///
/// The threshold and the six per-level bindings live together in one
/// [`ChannelSet`] behind a single lock. [`configure`](Self::configure) builds a
/// fresh set and stores it whole; every log call copies the current set once,
/// so a concurrent reconfiguration is observed either entirely or not at all.
///
/// Most programs use the process-wide instance through the free functions in
/// [`crate::log::global`]. A private `Logger` built with
/// [`with_sinks`](Self::with_sinks) is handy for capturing output.
///
/// # Example
///
/// ```
/// use levlog::{LogLevel, Logger};
///
/// let logger = Logger::new();
/// assert_eq!(logger.configure(42), LogLevel::Trace);
/// logger.infof(format_args!("listening on {}", 8080));
/// ```
pub struct Logger {
    routing: RwLock<ChannelSet>,
    out: Arc<dyn LogSink>,
    err: Arc<dyn LogSink>,
    discard: NoopLogSink,
}

macro_rules! level_methods {
    ($($level:ident: $values:ident, $fmt:ident;)*) => {
        $(
            #[doc = concat!("Writes the values, space separated, at ", stringify!($level), " level.")]
            #[track_caller]
            pub fn $values(&self, values: &[&dyn Display]) {
                self.log_values(LogLevel::$level, values);
            }

            #[doc = concat!("Writes pre-formatted arguments at ", stringify!($level), " level.")]
            #[track_caller]
            pub fn $fmt(&self, args: fmt::Arguments<'_>) {
                self.log_fmt(LogLevel::$level, args);
            }
        )*
    };
}

impl Logger {
    /// Routes to the process stdout and stderr, fully verbose.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(Arc::new(StdoutSink), Arc::new(StderrSink))
    }

    /// Routes the live levels to `out` and `err` instead of the process
    /// streams. Starts fully verbose.
    #[must_use]
    pub fn with_sinks(out: Arc<dyn LogSink>, err: Arc<dyn LogSink>) -> Self {
        Self {
            routing: RwLock::new(ChannelSet::default()),
            out,
            err,
            discard: NoopLogSink,
        }
    }

    /// Sets the threshold from an arbitrary integer, clamped into
    /// `[Fatal, Trace]`, and rebuilds all six channels.
    ///
    /// Returns the level actually applied.
    pub fn configure(&self, raw: i64) -> LogLevel {
        self.configure_level(LogLevel::clamped(raw))
    }

    /// Sets the threshold and rebuilds all six channels.
    pub fn configure_level(&self, level: LogLevel) -> LogLevel {
        let next = ChannelSet::for_threshold(level);
        *self.routing.write().unwrap_or_else(PoisonError::into_inner) = next;
        level
    }

    /// Applies `[Logging] level` (or a global `level` key) from `config`.
    ///
    /// A missing key keeps the current threshold. An unparsable value is
    /// reported at Warn level and also keeps the current threshold.
    pub fn configure_from(&self, config: &Config) -> LogLevel {
        let raw = config.get_or_default("Logging", "level", "");
        if raw.is_empty() {
            return self.level();
        }
        match raw.parse::<LogLevel>() {
            Ok(level) => self.configure_level(level),
            Err(e) => {
                self.warnf(format_args!("ignoring configured level: {e}"));
                self.level()
            }
        }
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.channels().threshold()
    }

    /// Snapshot of the current bindings.
    #[must_use]
    pub fn channels(&self) -> ChannelSet {
        *self.routing.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Channel currently bound to `level`.
    #[must_use]
    pub fn channel(&self, level: LogLevel) -> Channel {
        self.channels().channel(level)
    }

    /// Whether a line at `level` would reach a live stream.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.channel(level) != Channel::Discard
    }

    /// Writes an already formatted message at `level`, annotated with the
    /// location of the caller.
    #[track_caller]
    pub fn emit(&self, level: LogLevel, text: &str) {
        self.emit_at(level, text, Location::caller());
    }

    /// Writes an already formatted message at `level`, annotated with an
    /// explicit source location.
    pub fn emit_at(&self, level: LogLevel, text: &str, location: &'static Location<'static>) {
        self.emit_with(level, location, || text.to_owned());
    }

    level_methods! {
        Trace: trace, tracef;
        Debug: debug, debugf;
        Info: info, infof;
        Warn: warn, warnf;
        Error: error, errorf;
    }

    /// Writes the values at Fatal level, then exits the process with
    /// [`FATAL_EXIT_CODE`]. Never returns.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.log_values(LogLevel::Fatal, values);
        process::exit(FATAL_EXIT_CODE)
    }

    /// Writes pre-formatted arguments at Fatal level, then exits the process
    /// with [`FATAL_EXIT_CODE`]. Never returns.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_fmt(LogLevel::Fatal, args);
        process::exit(FATAL_EXIT_CODE)
    }

    /// Writes the error of a failed outcome at Error level. Does nothing for
    /// `Ok`.
    #[track_caller]
    pub fn emit_error<T, E: Display>(&self, outcome: &Result<T, E>) {
        if let Err(e) = outcome {
            self.log_fmt(LogLevel::Error, format_args!("{e}"));
        }
    }

    /// Info-level alias of a plain print.
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.emit_with(LogLevel::Info, Location::caller(), || sprint(values));
    }

    /// Info-level alias of a plain print with a trailing newline.
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) {
        self.log_values(LogLevel::Info, values);
    }

    /// Info-level alias of a formatted print.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    // The helpers below name their caller by walking the stack, which is
    // only done once the channel is known to be live. The name is that of the
    // nearest frame the optimizer kept: a caller inlined into its own parent
    // is reported as the parent. The macros (`started!`, `mark!`...) name the
    // enclosing function exactly in every build.

    /// Trace line `[<caller>] Started.` naming the calling function.
    #[track_caller]
    #[inline(never)]
    pub fn started(&self) {
        if self.enabled(LogLevel::Trace) {
            self.started_as(&caller::resolve());
        }
    }

    /// Trace line `[<caller>] Completed.` naming the calling function.
    #[track_caller]
    #[inline(never)]
    pub fn completed(&self) {
        if self.enabled(LogLevel::Trace) {
            self.completed_as(&caller::resolve());
        }
    }

    /// Trace line `[<caller>] <values>`: a footprint naming the calling function.
    #[track_caller]
    #[inline(never)]
    pub fn mark(&self, values: &[&dyn Display]) {
        if self.enabled(LogLevel::Trace) {
            let caller = caller::resolve();
            self.mark_as(&caller, format_args!("{}", sprint(values)));
        }
    }

    /// Formatted form of [`mark`](Self::mark).
    #[track_caller]
    #[inline(never)]
    pub fn markf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Trace) {
            self.mark_as(&caller::resolve(), args);
        }
    }

    /// Error line `[<caller>] Exit error: <values>`. Does not terminate.
    #[track_caller]
    #[inline(never)]
    pub fn exit_error(&self, values: &[&dyn Display]) {
        if self.enabled(LogLevel::Error) {
            let caller = caller::resolve();
            self.exit_error_as(&caller, format_args!("{}", sprint(values)));
        }
    }

    /// Formatted form of [`exit_error`](Self::exit_error). Does not terminate.
    #[track_caller]
    #[inline(never)]
    pub fn exit_errorf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Error) {
            self.exit_error_as(&caller::resolve(), args);
        }
    }

    /// [`started`](Self::started) with an explicit caller identity.
    #[track_caller]
    pub fn started_as(&self, caller: &str) {
        self.log_fmt(LogLevel::Trace, format_args!("[{caller}] Started."));
    }

    /// [`completed`](Self::completed) with an explicit caller identity.
    #[track_caller]
    pub fn completed_as(&self, caller: &str) {
        self.log_fmt(LogLevel::Trace, format_args!("[{caller}] Completed."));
    }

    /// [`markf`](Self::markf) with an explicit caller identity.
    #[track_caller]
    pub fn mark_as(&self, caller: &str, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Trace, format_args!("[{caller}] {args}"));
    }

    /// [`exit_errorf`](Self::exit_errorf) with an explicit caller identity.
    #[track_caller]
    pub fn exit_error_as(&self, caller: &str, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, format_args!("[{caller}] Exit error: {args}"));
    }

    #[track_caller]
    fn log_values(&self, level: LogLevel, values: &[&dyn Display]) {
        self.emit_with(level, Location::caller(), || {
            let mut text = sprint(values);
            text.push('\n');
            text
        });
    }

    #[track_caller]
    fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit_with(level, Location::caller(), || format!("{args}\n"));
    }

    /// Reads the bindings once and formats only when the channel is live.
    fn emit_with(
        &self,
        level: LogLevel,
        location: &'static Location<'static>,
        text: impl FnOnce() -> String,
    ) {
        let channel = self.channel(level);
        if channel == Channel::Discard {
            return;
        }
        self.write(channel, LogMsg::new(level, text(), location));
    }

    fn write(&self, channel: Channel, msg: LogMsg) {
        let sink: &dyn LogSink = match channel {
            Channel::Discard => &self.discard,
            Channel::Stdout => self.out.as_ref(),
            Channel::Stderr => self.err.as_ref(),
        };
        sink.log(msg.level, &msg.render());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
