//! Logging configuration

use sierra_error::ErrorCode;

use crate::env::env_get_str;
use crate::kprint::LogLevel;
use crate::status::Status;
use crate::sys::Sink;

/// Log level override, e.g. `SRR_LOG_LEVEL=debug`
pub const ENV_LOG_LEVEL: &str = "SRR_LOG_LEVEL";

/// Log destination override, `out` or `err`
pub const ENV_LOG_SINK: &str = "SRR_LOG_SINK";

/// Configuration for the `kprint` macros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level that is still printed (default: Warn)
    pub level: LogLevel,

    /// Where log lines go (default: stderr)
    pub sink: Sink,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            sink: Sink::ConsoleErr,
        }
    }
}

impl LogConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by `SRR_LOG_LEVEL` and `SRR_LOG_SINK`.
    ///
    /// Unrecognised values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let level = LogLevel::parse(&env_get_str(ENV_LOG_LEVEL, ""));
        if level.ok() {
            config.level = level.into_value();
        }

        match env_get_str(ENV_LOG_SINK, "").trim().to_ascii_lowercase().as_str() {
            "out" | "stdout" => config.sink = Sink::ConsoleOut,
            "err" | "stderr" => config.sink = Sink::ConsoleErr,
            _ => {}
        }

        config
    }

    /// Set log level
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set output sink
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Status {
        if self.sink == Sink::ConsoleIn {
            return Status::new(ErrorCode::InvalidArgument);
        }
        Status::OK
    }
}
