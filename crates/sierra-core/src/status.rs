//! Zero-payload result: success, or an error code.

use core::fmt;

use sierra_error::{lookup, render, ErrorCode};

/// Outcome of an operation with no meaningful success value.
///
/// Unlike [`Container`](crate::Container), every accessor is total: a
/// successful status reports `ErrorCode::Ok` and the message `"Ok"`.
#[must_use = "a status must be checked with `ok()` or `failed()`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    code: ErrorCode,
}

impl Status {
    /// Successful status.
    pub const OK: Status = Status { code: ErrorCode::Ok };

    #[inline]
    pub const fn new(code: ErrorCode) -> Self {
        Self { code }
    }

    #[inline]
    pub const fn ok(&self) -> bool {
        self.code.is_ok()
    }

    #[inline]
    pub const fn failed(&self) -> bool {
        !self.code.is_ok()
    }

    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Rendered catalog message, `"Ok"` on success.
    pub fn message(&self) -> String {
        render(self.code)
    }

    /// Base message without classification tags.
    #[inline]
    pub const fn base_message(&self) -> &'static str {
        lookup(self.code).message
    }

    /// Explicit bridge to `std::result::Result`, for use with `?`.
    #[inline]
    pub fn into_result(self) -> Result<(), ErrorCode> {
        if self.ok() {
            Ok(())
        } else {
            Err(self.code)
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::OK
    }
}

impl From<ErrorCode> for Status {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        Status::new(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code, f)
    }
}
