//! The closed set of error codes.
//!
//! # Code Ranges
//!
//! Discriminants are dense and start at zero so the catalog can be indexed
//! directly. They are grouped by domain:
//!
//! | Range     | Purpose                                   |
//! |-----------|-------------------------------------------|
//! | `0`       | `Ok`, meaningful for `Status` only        |
//! | `1 - 5`   | General (unclassified or access)          |
//! | `6 - 14`  | Filesystem (`Fs*`)                        |
//! | `15 - 18` | Data format (`Df*`)                       |
//!
//! New codes are appended at the end of their group; the catalog refuses to
//! build if a variant is missing from `ALL` or has no message.

/// Identifier for a specific failure condition.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ErrorCode {
    /// No error. Only a `Status` may carry this as a live state.
    #[default]
    Ok = 0,
    Failure,
    NotImplemented,
    AlreadyInitialized,
    InvalidArgument,
    IndexOutOfRange,

    // ── Filesystem ────────────────────────────────────────────────
    FsNoSuchPath,
    FsNoSuchFile,
    FsNoSuchDir,
    FsNoSuchParent,
    FsAlreadyExists,
    FsFailedToOpen,
    FsFailedToRead,
    FsFailedToWrite,
    FsFailedToCreate,

    // ── Data format ───────────────────────────────────────────────
    DfInvalidCast,
    DfParseFailed,
    DfInvalidEncoding,
    DfInvalidSyntax,
}

impl ErrorCode {
    /// Every code, in discriminant order.
    pub const ALL: [ErrorCode; 19] = [
        ErrorCode::Ok,
        ErrorCode::Failure,
        ErrorCode::NotImplemented,
        ErrorCode::AlreadyInitialized,
        ErrorCode::InvalidArgument,
        ErrorCode::IndexOutOfRange,
        ErrorCode::FsNoSuchPath,
        ErrorCode::FsNoSuchFile,
        ErrorCode::FsNoSuchDir,
        ErrorCode::FsNoSuchParent,
        ErrorCode::FsAlreadyExists,
        ErrorCode::FsFailedToOpen,
        ErrorCode::FsFailedToRead,
        ErrorCode::FsFailedToWrite,
        ErrorCode::FsFailedToCreate,
        ErrorCode::DfInvalidCast,
        ErrorCode::DfParseFailed,
        ErrorCode::DfInvalidEncoding,
        ErrorCode::DfInvalidSyntax,
    ];

    /// Number of declared codes.
    pub const COUNT: usize = Self::ALL.len();

    /// Raw discriminant.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Look up a code by its raw discriminant.
    ///
    /// Returns `None` for values outside the declared set.
    #[inline]
    pub const fn from_u8(raw: u8) -> Option<ErrorCode> {
        if (raw as usize) < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Check if this is the `Ok` sentinel
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, ErrorCode::Ok)
    }
}

impl From<ErrorCode> for u8 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code as u8
    }
}

// `ALL` must stay dense and ordered, and must end at the last variant.
const _: () = {
    let mut i = 0;
    while i < ErrorCode::COUNT {
        assert!(ErrorCode::ALL[i] as usize == i, "ErrorCode::ALL out of order");
        i += 1;
    }
    assert!(
        ErrorCode::DfInvalidSyntax as usize + 1 == ErrorCode::COUNT,
        "ErrorCode::ALL is missing a variant"
    );
};
