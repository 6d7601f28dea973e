use std::{fmt, panic::Location, path::Path};

use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// Represents a single log line before it is rendered.
///
/// Carries the severity, the local time the call was made, the source
/// location of the original caller and the message text.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the line.
    pub level: LogLevel,
    /// Local wall-clock time of the call.
    pub time: DateTime<Local>,
    /// Source file of the caller, as given by `file!()` or `Location::file`.
    pub file: &'static str,
    /// Source line of the caller.
    pub line: u32,
    /// The message content.
    pub text: String,
}

impl LogMsg {
    /// Creates a message stamped with the current local time.
    pub fn new(level: LogLevel, text: impl Into<String>, location: &Location<'static>) -> Self {
        Self {
            level,
            time: Local::now(),
            file: location.file(),
            line: location.line(),
            text: text.into(),
        }
    }

    /// Renders `[<TAG>] <YYYY/MM/DD> <HH:MM:SS> <file>:<line>: <text>`.
    ///
    /// The file is reduced to its base name, and a newline is appended when
    /// the text does not already end with one.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = format!(
            "[{}] {} {}:{}: {}",
            self.level.tag(),
            self.time.format("%Y/%m/%d %H:%M:%S"),
            short_file(self.file),
            self.line,
            self.text
        );
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

/// Base name of a source path (`src/bin/main.rs` -> `main.rs`).
fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Joins values with a single space, the way a plain print of several
/// arguments reads.
///
/// Every pair of values is separated, strings included. Print conventions
/// that only space two non-string operands cannot be followed here: a
/// `&dyn Display` list does not tell strings apart.
#[must_use]
pub fn sprint(values: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }
    out
}
