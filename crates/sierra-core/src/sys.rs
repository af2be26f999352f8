//! Raw byte sink over the process's standard descriptors.
//!
//! Writes go straight to the file descriptor with no buffering and no error
//! reporting. Callers that need to know whether bytes landed should use the
//! `fsys` layer instead.

use crate::target::{Fd, STD_ERR, STD_IN, STD_OUT};

/// Destination of a raw write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    ConsoleIn,
    ConsoleOut,
    ConsoleErr,
}

impl Sink {
    #[inline]
    pub const fn fd(self) -> Fd {
        match self {
            Sink::ConsoleIn => STD_IN,
            Sink::ConsoleOut => STD_OUT,
            Sink::ConsoleErr => STD_ERR,
        }
    }
}

/// Namespace for raw system writes.
pub struct Sys;

impl Sys {
    /// Write all of `buf` to `sink`, fire-and-forget.
    ///
    /// Partial writes are continued and `EINTR` is retried. Any other failure
    /// stops the write silently.
    pub fn write(sink: Sink, buf: &[u8]) {
        let fd = sink.fd();
        let mut rest = buf;

        while !rest.is_empty() {
            let ret = unsafe { libc::write(fd, rest.as_ptr() as *const libc::c_void, rest.len()) };

            if ret < 0 {
                if std::io::Error::last_os_error().kind() == std::io::ErrorKind::Interrupted {
                    continue;
                }
                return;
            }
            if ret == 0 {
                return;
            }
            rest = &rest[ret as usize..];
        }
    }

    /// Write a string to `sink`.
    #[inline]
    pub fn write_str(sink: Sink, text: &str) {
        Self::write(sink, text.as_bytes());
    }
}
