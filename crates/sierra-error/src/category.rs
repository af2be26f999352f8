//! Two-level classification attached to every error code.
//!
//! `Category` names the domain an error belongs to, `Subcategory` the kind of
//! failure. The two are independent: `IndexOutOfRange` has no domain but is an
//! access failure.

use core::fmt;

/// Error domain.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    #[default]
    None,
    Filesystem,
    DataFormat,
}

impl Category {
    /// Short tag used when rendering, without brackets.
    ///
    /// Empty for `None`.
    pub const fn tag(self) -> &'static str {
        match self {
            Category::None => "",
            Category::Filesystem => "fsys",
            Category::DataFormat => "fmt",
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Category::None)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.tag())
        }
    }
}

/// Failure kind.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Subcategory {
    #[default]
    None,
    Access,
    Cast,
    Parse,
    Syntax,
}

impl Subcategory {
    /// Short tag used when rendering, without brackets.
    ///
    /// Empty for `None`.
    pub const fn tag(self) -> &'static str {
        match self {
            Subcategory::None => "",
            Subcategory::Access => "access",
            Subcategory::Cast => "cast",
            Subcategory::Parse => "parse",
            Subcategory::Syntax => "syntax",
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Subcategory::None)
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.tag())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_empty_tag() {
        assert_eq!(Category::None.tag(), "");
        assert_eq!(Subcategory::None.tag(), "");
        assert!(Category::default().is_none());
        assert!(Subcategory::default().is_none());
    }

    #[test]
    fn tags() {
        assert_eq!(Category::Filesystem.tag(), "fsys");
        assert_eq!(Category::DataFormat.tag(), "fmt");
        assert_eq!(Subcategory::Access.tag(), "access");
        assert_eq!(Subcategory::Syntax.tag(), "syntax");
    }

    #[test]
    fn display_names_none() {
        assert_eq!(format!("{}", Category::None), "none");
        assert_eq!(format!("{}", Subcategory::Cast), "cast");
    }
}
