//! Regular files.
//!
//! A [`File`] is a checked handle to a path, not an open descriptor. Each
//! [`File::read`] opens a fresh [`FileRead`]; each [`File::write`] opens,
//! truncates and closes.

use std::fs;
use std::io::{Read, Write};

use sierra_core::{kdebug, Res, Status};
use sierra_error::{render, ErrorCode};

use crate::path::Path;

/// Log a failure on `path` and hand back the failed result.
#[track_caller]
pub(crate) fn fail<T>(code: ErrorCode, path: &Path) -> Res<T> {
    kdebug!("fsys {}: {}", path, render(code));
    code.into()
}

fn fail_status(code: ErrorCode, path: &Path) -> Status {
    kdebug!("fsys {}: {}", path, render(code));
    Status::new(code)
}

/// An open read stream. Closed on drop.
#[derive(Debug)]
pub struct FileRead {
    path: Path,
    stream: fs::File,
}

impl FileRead {
    /// Read the rest of the stream as UTF-8 text.
    ///
    /// Fails with `FsFailedToRead` on an I/O error and `DfInvalidEncoding`
    /// when the bytes are not UTF-8.
    pub fn dump(&mut self) -> Res<String> {
        let bytes = self.dump_bytes();
        if bytes.failed() {
            return bytes.code().into();
        }

        match String::from_utf8(bytes.into_value()) {
            Ok(text) => Res::new(text),
            Err(_) => fail(ErrorCode::DfInvalidEncoding, &self.path),
        }
    }

    /// Read the rest of the stream as raw bytes.
    pub fn dump_bytes(&mut self) -> Res<Vec<u8>> {
        let mut buf = Vec::new();
        match self.stream.read_to_end(&mut buf) {
            Ok(_) => Res::new(buf),
            Err(_) => fail(ErrorCode::FsFailedToRead, &self.path),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A regular file known to exist when the handle was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: Path,
}

impl File {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file for reading.
    ///
    /// The path is checked again first, so a file removed since the handle
    /// was made fails with `FsNoSuchPath` rather than `FsFailedToOpen`.
    pub fn read(&self) -> Res<FileRead> {
        if !self.path.is_path() {
            return fail(ErrorCode::FsNoSuchPath, &self.path);
        }
        if !self.path.is_file() {
            return fail(ErrorCode::FsNoSuchFile, &self.path);
        }

        match fs::File::open(self.path.get()) {
            Ok(stream) => Res::new(FileRead {
                path: self.path.clone(),
                stream,
            }),
            Err(_) => fail(ErrorCode::FsFailedToOpen, &self.path),
        }
    }

    /// Replace the file's contents with `bytes`.
    pub fn write(&self, bytes: &[u8]) -> Status {
        let opened = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(self.path.get());

        let mut stream = match opened {
            Ok(stream) => stream,
            Err(_) => return fail_status(ErrorCode::FsFailedToOpen, &self.path),
        };

        if stream.write_all(bytes).and_then(|()| stream.flush()).is_err() {
            return fail_status(ErrorCode::FsFailedToWrite, &self.path);
        }
        Status::OK
    }
}

/// Handle to an existing regular file.
///
/// Fails with `FsNoSuchPath` when nothing exists at `path` and with
/// `FsNoSuchFile` when something does but it is not a regular file.
pub fn open_file(path: impl Into<Path>) -> Res<File> {
    let path = path.into();

    if !path.is_path() {
        return fail(ErrorCode::FsNoSuchPath, &path);
    }
    if !path.is_file() {
        return fail(ErrorCode::FsNoSuchFile, &path);
    }

    Res::new(File { path })
}

/// Create a new, empty regular file.
///
/// Fails with `FsAlreadyExists` if anything is already at `path`,
/// `FsNoSuchParent` if the enclosing directory is missing and
/// `FsFailedToCreate` if the create call itself fails.
pub fn make_file(path: impl Into<Path>) -> Res<File> {
    let path = path.into();

    if path.is_path() {
        return fail(ErrorCode::FsAlreadyExists, &path);
    }
    if !path.parent().is_dir() {
        return fail(ErrorCode::FsNoSuchParent, &path);
    }

    match fs::OpenOptions::new().write(true).create_new(true).open(path.get()) {
        Ok(_) => Res::new(File { path }),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fail(ErrorCode::FsAlreadyExists, &path)
        }
        Err(_) => fail(ErrorCode::FsFailedToCreate, &path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sierra-fsys-file-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_open_missing() {
        let dir = scratch("open_missing");
        let res = open_file(dir.join("nope.txt"));
        assert_eq!(res.code(), ErrorCode::FsNoSuchPath);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_directory() {
        let dir = scratch("open_directory");
        let res = open_file(dir.clone());
        assert_eq!(res.code(), ErrorCode::FsNoSuchFile);
        assert_eq!(res.message(), "[fsys][access] No such file");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_make_write_read() {
        let dir = scratch("make_write_read");
        let target = dir.join("data.txt");

        let file = make_file(target.clone()).into_value();
        assert!(target.is_file());
        assert_eq!(file.read().into_value().dump().into_value(), "");

        assert!(file.write(b"hello sierra\n").ok());
        let mut reader = file.read().into_value();
        assert_eq!(reader.dump().into_value(), "hello sierra\n");

        // Truncates.
        assert!(file.write(b"x").ok());
        assert_eq!(file.read().into_value().dump_bytes().into_value(), b"x");

        let reopened = open_file(target.clone());
        assert_eq!(reopened.value().path(), file.path());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_make_existing() {
        let dir = scratch("make_existing");
        let target = dir.join("data.txt");
        fs::write(&target, b"keep").unwrap();

        assert_eq!(make_file(target.clone()).code(), ErrorCode::FsAlreadyExists);
        assert_eq!(make_file(dir.clone()).code(), ErrorCode::FsAlreadyExists);
        assert_eq!(fs::read(&target).unwrap(), b"keep");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_make_missing_parent() {
        let dir = scratch("make_missing_parent");
        let res = make_file(dir.join("missing").join("data.txt"));
        assert_eq!(res.code(), ErrorCode::FsNoSuchParent);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_after_removal() {
        let dir = scratch("read_after_removal");
        let target = dir.join("gone.txt");
        let file = make_file(target.clone()).into_value();

        fs::remove_file(&target).unwrap();
        assert_eq!(file.read().code(), ErrorCode::FsNoSuchPath);
        assert_eq!(file.write(b"late").code(), ErrorCode::FsFailedToOpen);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_dump_invalid_utf8() {
        let dir = scratch("dump_invalid_utf8");
        let target = dir.join("bin.dat");
        fs::write(&target, [0xffu8, 0xfe, 0x00]).unwrap();

        let file = open_file(target).into_value();
        assert_eq!(file.read().into_value().dump().code(), ErrorCode::DfInvalidEncoding);
        assert_eq!(
            file.read().into_value().dump_bytes().into_value(),
            vec![0xff, 0xfe, 0x00]
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
