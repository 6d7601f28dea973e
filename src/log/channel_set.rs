use crate::log::log_level::LogLevel;

/// Where the lines of one level go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Discard,
    Stdout,
    Stderr,
}

/// The six per-level bindings derived from one threshold.
///
/// A `ChannelSet` is an immutable value: reconfiguring builds a new one and
/// swaps it in whole, so a reader never sees half of an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSet {
    threshold: LogLevel,
    routes: [Channel; 6],
}

impl ChannelSet {
    /// Builds the routing table for `threshold`.
    ///
    /// Error and Fatal always go to stderr. Warn, Info, Debug and Trace go to
    /// stdout when they are no more verbose than the threshold, and are
    /// discarded otherwise.
    #[must_use]
    pub fn for_threshold(threshold: LogLevel) -> Self {
        let mut routes = [Channel::Discard; 6];
        for level in LogLevel::ALL {
            routes[level.index()] = match level {
                LogLevel::Fatal | LogLevel::Error => Channel::Stderr,
                _ if level <= threshold => Channel::Stdout,
                _ => Channel::Discard,
            };
        }
        Self { threshold, routes }
    }

    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    #[must_use]
    pub fn channel(&self, level: LogLevel) -> Channel {
        self.routes[level.index()]
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::for_threshold(LogLevel::Trace)
    }
}
