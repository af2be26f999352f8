//! Kernel-style print macros
//!
//! Leveled, line-atomic debug output written through the raw [`Sys`] sink.
//!
//! # Environment Variables
//!
//! - `SRR_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0-5)
//! - `SRR_LOG_SINK=<sink>` - `err` (default) or `out`
//!
//! The configuration is fixed the first time it is needed: either by an
//! explicit [`init`], or from the environment on the first log call. It is
//! never changed afterwards.
//!
//! # Usage
//!
//! ```ignore
//! use sierra_core::{kdebug, kerror, kinfo, kprintln, kwarn};
//!
//! kprintln!("Simple message");
//! kdebug!("open {}: {}", path, code);
//! kwarn!("Unexpected state: {:?}", state);
//! ```

use std::fmt::Write as _;
use std::sync::OnceLock;

use sierra_error::ErrorCode;

use crate::config::LogConfig;
use crate::result::Res;
use crate::status::Status;
use crate::sys::Sys;

/// Log levels (matches common conventions)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Parse a level name or number, case-insensitive.
    ///
    /// Unknown text fails with `DfParseFailed`.
    pub fn parse(text: &str) -> Res<LogLevel> {
        let level = match text.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => LogLevel::Off,
            "error" | "1" => LogLevel::Error,
            "warn" | "2" => LogLevel::Warn,
            "info" | "3" => LogLevel::Info,
            "debug" | "4" => LogLevel::Debug,
            "trace" | "5" => LogLevel::Trace,
            _ => return ErrorCode::DfParseFailed.into(),
        };
        Res::new(level)
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

static CONFIG: OnceLock<LogConfig> = OnceLock::new();

/// Fix the logging configuration.
///
/// Fails with `InvalidArgument` for an invalid config and with
/// `AlreadyInitialized` if a configuration is already in place.
///
/// Every log macro reads the configuration to check its level, even when that
/// level turns out to be disabled, and the first read fixes it from the
/// environment. A single `kdebug!` before this call (for instance from a
/// failed `fsys` open) is enough to make it fail, so call it first thing in
/// `main` and check the returned status.
pub fn init(config: LogConfig) -> Status {
    let status = config.validate();
    if status.failed() {
        return status;
    }

    match CONFIG.set(config) {
        Ok(()) => Status::OK,
        Err(_) => Status::new(ErrorCode::AlreadyInitialized),
    }
}

/// Active configuration, read from the environment if `init` was never called.
#[inline]
pub fn config() -> &'static LogConfig {
    CONFIG.get_or_init(LogConfig::from_env)
}

/// Get current log level
#[inline]
pub fn log_level() -> LogLevel {
    config().level
}

/// Check if a log level is enabled
#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

fn emit(line: &str) {
    Sys::write_str(config().sink, line);
}

/// Internal: Write without newline
#[doc(hidden)]
pub fn _kprint_impl(args: std::fmt::Arguments<'_>) {
    let mut line = String::new();
    let _ = line.write_fmt(args);
    emit(&line);
}

/// Internal: Write with newline
#[doc(hidden)]
pub fn _kprintln_impl(args: std::fmt::Arguments<'_>) {
    let mut line = String::new();
    let _ = line.write_fmt(args);
    line.push('\n');
    emit(&line);
}

/// Internal: Leveled print
///
/// The whole line is formatted first and handed to the sink in one write.
#[doc(hidden)]
pub fn _klog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let mut line = String::new();
    let _ = write!(line, "{} ", level.prefix());
    let _ = line.write_fmt(args);
    line.push('\n');
    emit(&line);
}

// ============================================================================
// Public Macros
// ============================================================================

/// Print to the log sink (no newline)
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {{
        $crate::kprint::_kprint_impl(format_args!($($arg)*));
    }};
}

/// Print to the log sink with newline
#[macro_export]
macro_rules! kprintln {
    () => {{
        $crate::kprint::_kprintln_impl(format_args!(""));
    }};
    ($($arg:tt)*) => {{
        $crate::kprint::_kprintln_impl(format_args!($($arg)*));
    }};
}

/// Error level log (always shown unless logging is off)
#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl(
            $crate::kprint::LogLevel::Error,
            format_args!($($arg)*)
        );
    }};
}

/// Warning level log
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl(
            $crate::kprint::LogLevel::Warn,
            format_args!($($arg)*)
        );
    }};
}

/// Info level log
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl(
            $crate::kprint::LogLevel::Info,
            format_args!($($arg)*)
        );
    }};
}

/// Debug level log
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl(
            $crate::kprint::LogLevel::Debug,
            format_args!($($arg)*)
        );
    }};
}

/// Trace level log (most verbose)
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl(
            $crate::kprint::LogLevel::Trace,
            format_args!($($arg)*)
        );
    }};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::Sink;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(LogLevel::from_u8(0), LogLevel::Off);
        assert_eq!(LogLevel::from_u8(1), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(4), LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Trace);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(*LogLevel::parse("DEBUG").value(), LogLevel::Debug);
        assert_eq!(*LogLevel::parse(" 2 ").value(), LogLevel::Warn);
        assert_eq!(LogLevel::parse("loud").code(), ErrorCode::DfParseFailed);
        assert!(LogLevel::parse("").failed());
    }

    #[test]
    fn test_off_never_enabled() {
        assert!(!level_enabled(LogLevel::Off));
    }

    #[test]
    fn test_init_is_write_once() {
        let _ = init(LogConfig::new().level(LogLevel::Error));
        let again = init(LogConfig::new());
        assert_eq!(again.code(), ErrorCode::AlreadyInitialized);
    }

    #[test]
    fn test_init_after_disabled_log_call_is_rejected() {
        ktrace!("fixes the configuration even if trace is off");
        let status = init(LogConfig::new().level(LogLevel::Trace));
        assert_eq!(status.code(), ErrorCode::AlreadyInitialized);
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let status = init(LogConfig::new().sink(Sink::ConsoleIn));
        assert_eq!(status.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_macros_compile() {
        kprint!("");
        kerror!("error {}", "msg");
        kwarn!("warn");
        kinfo!("info");
        kdebug!("debug");
        ktrace!("trace {}", 42);
    }
}
