use std::{fmt, str::FromStr};

/// Defines the severity levels for log messages.
///
/// Discriminants run from the most severe (`Fatal = 1`) to the most verbose
/// (`Trace = 6`). The numeric order is only used to compare a level against
/// the configured threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Severe problem. The process terminates after the line is written.
    Fatal = 1,
    /// Designates error events, for example a crashed request or an unexpected failure.
    Error = 2,
    /// Designates incorrect behavior the application can continue from.
    Warn = 3,
    /// Designates normal behavior worth reporting (mail sent, profile updated...).
    Info = 4,
    /// Designates troubleshooting detail (queries executed, session expired...).
    Debug = 5,
    /// Designates very fine-grained events such as entering and leaving a function.
    Trace = 6,
}

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Clamps an arbitrary integer into `[Fatal, Trace]`.
    ///
    /// Values below `1` become [`LogLevel::Fatal`], values above `6` become
    /// [`LogLevel::Trace`].
    #[must_use]
    pub const fn clamped(raw: i64) -> Self {
        match raw {
            i64::MIN..=1 => LogLevel::Fatal,
            2 => LogLevel::Error,
            3 => LogLevel::Warn,
            4 => LogLevel::Info,
            5 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Numeric value of the level (`1` for Fatal up to `6` for Trace).
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self as i64
    }

    /// Fixed-width tag printed between brackets at the start of each line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN ",
            LogLevel::Info => "INFO ",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Position of the level inside [`LogLevel::ALL`].
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim_end())
    }
}

/// Returned when a string names neither a level nor an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Accepts level names in any case (`warning` is an alias of `warn`) or an
    /// integer, which is clamped like [`LogLevel::clamped`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(LogLevel::clamped(n));
        }
        match s.to_ascii_lowercase().as_str() {
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn clamped_keeps_values_in_range() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::clamped(level.as_i64()), level);
        }
    }

    #[test]
    fn clamped_saturates_out_of_range_values() {
        assert_eq!(LogLevel::clamped(0), LogLevel::Fatal);
        assert_eq!(LogLevel::clamped(-42), LogLevel::Fatal);
        assert_eq!(LogLevel::clamped(i64::MIN), LogLevel::Fatal);
        assert_eq!(LogLevel::clamped(7), LogLevel::Trace);
        assert_eq!(LogLevel::clamped(i64::MAX), LogLevel::Trace);
    }

    #[test]
    fn tags_share_one_width() {
        for level in LogLevel::ALL {
            assert_eq!(level.tag().len(), 5, "{level:?}");
        }
        assert_eq!(LogLevel::Warn.tag(), "WARN ");
        assert_eq!(LogLevel::Info.tag(), "INFO ");
    }

    #[test]
    fn ordering_runs_from_fatal_to_trace() {
        assert!(LogLevel::Fatal < LogLevel::Error);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert_eq!(LogLevel::ALL.iter().max(), Some(&LogLevel::Trace));
    }

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("4".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("99".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLevelError("loud".into()));
        assert!(err.to_string().contains("loud"));
    }
}
