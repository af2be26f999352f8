//! Directories.

use std::fs;

use sierra_core::Res;
use sierra_error::ErrorCode;

use crate::file::fail;
use crate::path::Path;

/// A directory known to exist when the handle was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir {
    path: Path,
}

impl Dir {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries directly inside the directory, sorted by path.
    ///
    /// `.` and `..` are not included. Fails with `FsFailedToRead` if the
    /// listing cannot be read.
    pub fn entries(&self) -> Res<Vec<Path>> {
        let listing = match fs::read_dir(self.path.get()) {
            Ok(listing) => listing,
            Err(_) => return fail(ErrorCode::FsFailedToRead, &self.path),
        };

        let mut entries = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) => entries.push(self.path.join(entry.file_name())),
                Err(_) => return fail(ErrorCode::FsFailedToRead, &self.path),
            }
        }
        entries.sort();

        Res::new(entries)
    }
}

/// Handle to an existing directory.
///
/// Fails with `FsNoSuchPath` when nothing exists at `path` and with
/// `FsNoSuchDir` when something does but it is not a directory.
pub fn open_dir(path: impl Into<Path>) -> Res<Dir> {
    let path = path.into();

    if !path.is_path() {
        return fail(ErrorCode::FsNoSuchPath, &path);
    }
    if !path.is_dir() {
        return fail(ErrorCode::FsNoSuchDir, &path);
    }

    Res::new(Dir { path })
}
