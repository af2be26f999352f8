//! Static catalog mapping each `ErrorCode` to its message and classification.
//!
//! The mapping is an exhaustive `match`, so a new variant without an entry
//! does not compile. A `const` block below additionally rejects empty
//! messages at build time.

use core::fmt::{self, Write};

use crate::category::{Category, Subcategory};
use crate::code::ErrorCode;

/// Immutable description of an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorInfo {
    pub message: &'static str,
    pub category: Category,
    pub subcategory: Subcategory,
}

impl ErrorInfo {
    /// Returned by [`lookup_raw`] for values outside the declared set.
    pub const UNKNOWN: ErrorInfo = ErrorInfo::plain("Unknown Error");

    const fn plain(message: &'static str) -> Self {
        Self::new(message, Category::None, Subcategory::None)
    }

    const fn new(message: &'static str, category: Category, subcategory: Subcategory) -> Self {
        Self {
            message,
            category,
            subcategory,
        }
    }

    /// Tags first, then the base message.
    ///
    /// `[cat][sub] message`; a `None` classification contributes nothing,
    /// and the separating space only appears after at least one tag.
    fn write_rendered<W: Write>(&self, out: &mut W) -> fmt::Result {
        let cat = self.category.tag();
        let sub = self.subcategory.tag();

        if !cat.is_empty() {
            write!(out, "[{}]", cat)?;
        }
        if !sub.is_empty() {
            write!(out, "[{}]", sub)?;
        }
        if !cat.is_empty() || !sub.is_empty() {
            out.write_char(' ')?;
        }
        out.write_str(self.message)
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rendered(f)
    }
}

const fn entry(code: ErrorCode) -> ErrorInfo {
    use Category as C;
    use Subcategory as S;

    match code {
        ErrorCode::Ok => ErrorInfo::plain("Ok"),
        ErrorCode::Failure => ErrorInfo::plain("Failure"),
        ErrorCode::NotImplemented => ErrorInfo::plain("Not implemented"),
        ErrorCode::AlreadyInitialized => ErrorInfo::plain("Already initialized"),
        ErrorCode::InvalidArgument => ErrorInfo::plain("Invalid argument"),
        ErrorCode::IndexOutOfRange => ErrorInfo::new("Index out of range", C::None, S::Access),

        ErrorCode::FsNoSuchPath => ErrorInfo::new("No such path", C::Filesystem, S::Access),
        ErrorCode::FsNoSuchFile => ErrorInfo::new("No such file", C::Filesystem, S::Access),
        ErrorCode::FsNoSuchDir => ErrorInfo::new("No such directory", C::Filesystem, S::Access),
        ErrorCode::FsNoSuchParent => {
            ErrorInfo::new("No such parent directory", C::Filesystem, S::Access)
        }
        ErrorCode::FsAlreadyExists => ErrorInfo::new("Already exists", C::Filesystem, S::Access),
        ErrorCode::FsFailedToOpen => ErrorInfo::new("Failed to open", C::Filesystem, S::Access),
        ErrorCode::FsFailedToRead => ErrorInfo::new("Failed to read", C::Filesystem, S::Access),
        ErrorCode::FsFailedToWrite => ErrorInfo::new("Failed to write", C::Filesystem, S::Access),
        ErrorCode::FsFailedToCreate => ErrorInfo::new("Failed to create", C::Filesystem, S::Access),

        ErrorCode::DfInvalidCast => ErrorInfo::new("Invalid cast", C::DataFormat, S::Cast),
        ErrorCode::DfParseFailed => ErrorInfo::new("Parse failed", C::DataFormat, S::Parse),
        ErrorCode::DfInvalidEncoding => ErrorInfo::new("Invalid encoding", C::DataFormat, S::Parse),
        ErrorCode::DfInvalidSyntax => ErrorInfo::new("Invalid syntax", C::DataFormat, S::Syntax),
    }
}

// Every declared code needs a message.
const _: () = {
    let mut i = 0;
    while i < ErrorCode::COUNT {
        assert!(!entry(ErrorCode::ALL[i]).message.is_empty(), "Missing error message");
        i += 1;
    }
};

/// Message and classification of `code`.
#[inline]
pub const fn lookup(code: ErrorCode) -> ErrorInfo {
    entry(code)
}

/// Like [`lookup`], for a raw discriminant that may not name a declared code.
///
/// Unknown values map to [`ErrorInfo::UNKNOWN`].
pub const fn lookup_raw(raw: u8) -> ErrorInfo {
    match ErrorCode::from_u8(raw) {
        Some(code) => entry(code),
        None => ErrorInfo::UNKNOWN,
    }
}

/// `true` iff `code` belongs to `category`.
#[inline]
pub fn classify(code: ErrorCode, category: Category) -> bool {
    lookup(code).category == category
}

/// `true` iff `code` belongs to both `category` and `subcategory`.
#[inline]
pub fn classify_sub(code: ErrorCode, category: Category, subcategory: Subcategory) -> bool {
    let info = lookup(code);
    info.category == category && info.subcategory == subcategory
}

/// Display text for `code`, e.g. `"[fsys][access] No such file"`.
pub fn render(code: ErrorCode) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = lookup(code).write_rendered(&mut out);
    out
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        lookup(*self).write_rendered(f)
    }
}

impl std::error::Error for ErrorCode {}
