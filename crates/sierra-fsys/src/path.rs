//! Immutable filesystem path.

use std::fmt;
use std::path::PathBuf;

/// A filesystem location.
///
/// Queries hit the filesystem on every call; nothing is cached. Once built a
/// `Path` is never changed, only cloned or consumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    inner: PathBuf,
}

impl Path {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { inner: path.into() }
    }

    #[inline]
    pub fn get(&self) -> &std::path::Path {
        &self.inner
    }

    /// Something exists at this location.
    #[inline]
    pub fn is_path(&self) -> bool {
        self.inner.exists()
    }

    /// A regular file (following symlinks) exists here.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.inner.is_file()
    }

    /// A directory (following symlinks) exists here.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.inner.is_dir()
    }

    /// Enclosing directory.
    ///
    /// A bare file name has the current directory as parent; the root is its
    /// own parent.
    pub fn parent(&self) -> Path {
        match self.inner.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => Path::new(p),
            None => self.clone(),
        }
    }

    pub(crate) fn join(&self, name: impl AsRef<std::path::Path>) -> Path {
        Path::new(self.inner.join(name))
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path::new(path)
    }
}

impl From<PathBuf> for Path {
    fn from(path: PathBuf) -> Self {
        Path { inner: path }
    }
}

impl From<&std::path::Path> for Path {
    fn from(path: &std::path::Path) -> Self {
        Path::new(path)
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        &self.inner
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_on_temp_dir() {
        let tmp = Path::new(std::env::temp_dir());
        assert!(tmp.is_path());
        assert!(tmp.is_dir());
        assert!(!tmp.is_file());
    }

    #[test]
    fn test_missing() {
        let missing = Path::from("/definitely/not/here/sierra");
        assert!(!missing.is_path());
        assert!(!missing.is_file());
        assert!(!missing.is_dir());
    }

    #[test]
    fn test_parent() {
        assert_eq!(Path::from("/a/b/c.txt").parent(), Path::from("/a/b"));
        assert_eq!(Path::from("c.txt").parent(), Path::from("."));
        assert_eq!(Path::from("/").parent(), Path::from("/"));
    }

    #[test]
    fn test_display_and_get() {
        let path = Path::from("some/file.txt");
        assert_eq!(path.to_string(), "some/file.txt");
        assert_eq!(path.get(), std::path::Path::new("some/file.txt"));
    }
}
