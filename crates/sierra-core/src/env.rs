//! Environment variable helpers.
//!
//! Values are read fresh on every call; nothing is cached here.
//!
//! # Usage
//!
//! ```ignore
//! use sierra_core::env::{env_get, env_get_bool, env_parse};
//!
//! let depth: usize = env_get("SRR_MAX_DEPTH", 8);
//! let verbose = env_get_bool("SRR_VERBOSE", false);
//!
//! let budget = env_parse::<u32>("SRR_BUDGET");
//! if budget.failed() {
//!     // unset: InvalidArgument, malformed: DfParseFailed
//! }
//! ```

use std::str::FromStr;

use sierra_error::ErrorCode;

use crate::result::Res;

/// Parse `key` as `T`.
///
/// Fails with `InvalidArgument` when the variable is unset or not unicode,
/// and with `DfParseFailed` when its text does not parse.
pub fn env_parse<T>(key: &str) -> Res<T>
where
    T: FromStr,
{
    let raw = match std::env::var(key) {
        Ok(raw) => raw,
        Err(_) => return ErrorCode::InvalidArgument.into(),
    };

    match raw.trim().parse() {
        Ok(value) => Res::new(value),
        Err(_) => ErrorCode::DfParseFailed.into(),
    }
}

/// Parse `key` as `T`, falling back to `default` when unset or malformed.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    let parsed = env_parse(key);
    if parsed.ok() {
        parsed.into_value()
    } else {
        default
    }
}

/// Parse `key` as `T`, `None` when unset or malformed.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env_parse(key).into_result().ok()
}

/// Read `key` as a flag.
///
/// `1`, `true`, `yes`, `on` are true and `0`, `false`, `no`, `off` are false
/// (case-insensitive). Anything else, including unset, yields `default`.
pub fn env_get_bool(key: &str, default: bool) -> bool {
    let Ok(val) = std::env::var(key) else {
        return default;
    };

    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Read `key` as text, or `default` when unset.
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Check if environment variable is set (regardless of value)
#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}
