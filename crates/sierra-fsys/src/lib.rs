//! # sierra-fsys
//!
//! Filesystem access in terms of sierra result containers. Every fallible
//! operation returns a [`Res`](sierra_core::Res) or a
//! [`Status`](sierra_core::Status) carrying a `Fs*` / `Df*` error code, and
//! logs the failure at debug level.
//!
//! ## Example
//!
//! ```no_run
//! use sierra_fsys::{make_file, open_file};
//!
//! let file = make_file("/tmp/notes.txt");
//! if file.ok() {
//!     let _ = file.value().write(b"first line\n");
//! }
//!
//! let opened = open_file("/tmp/notes.txt");
//! if opened.failed() {
//!     eprintln!("{}", opened.message());
//! }
//! ```

mod dir;
mod file;
mod path;

pub use dir::{open_dir, Dir};
pub use file::{make_file, open_file, File, FileRead};
pub use path::Path;
