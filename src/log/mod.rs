pub mod caller;
pub mod channel_set;
pub mod global;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub use noop_log_sink::NoopLogSink;
