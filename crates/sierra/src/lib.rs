//! # sierra - engine primitives
//!
//! Exception-free building blocks for the Echo Engine: failures travel as
//! values, every failure has exactly one catalog entry, and nothing here
//! allocates shared ownership or mutable global state.
//!
//! ## Features
//!
//! - **Error catalog**: closed [`ErrorCode`] set with categories and rendered messages
//! - **Result container**: [`Res`] owns a payload, [`ResRef`] / [`ResMut`] alias one
//! - **Status**: payload-free success or code
//! - **Filesystem**: paths, files and directories returning containers
//! - **Logging**: `kprint`-style macros over a raw console sink
//!
//! ## Quick Start
//!
//! ```no_run
//! use sierra::prelude::*;
//!
//! let file = open_file("config.txt");
//! if file.failed() {
//!     kerror!("{}", file.message());
//!     return;
//! }
//!
//! let mut reader = file.value().read().into_value();
//! let text = reader.dump();
//! if text.ok() {
//!     Sys::write_str(Sink::ConsoleOut, text.value());
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   sierra-fsys   Path, File, Dir
//!        │
//!        ▼
//!   sierra-core   Container, Status, storage, kprint, Sys
//!        │
//!        ▼
//!   sierra-error  ErrorCode, catalog, render
//! ```

// Re-export the catalog
pub use sierra_error::{
    classify, classify_sub, lookup, lookup_raw, render, Category, ErrorCode, ErrorInfo,
    Subcategory,
};

// Re-export core types
pub use sierra_core::{
    Borrowed, BorrowedMut, Container, Owned, Res, ResMut, ResRef, Status, Storage, StorageMut,
};
pub use sierra_core::{capability, prims, target, utils};
pub use sierra_core::{Sink, Sys, Target};

// Re-export kprint macros for debug logging
pub use sierra_core::{kdebug, kerror, kinfo, kprint, kprintln, ktrace, kwarn};

/// Fix the logging configuration; see [`sierra_core::kprint::init`].
///
/// Any earlier log macro, including a disabled `kdebug!` from a failed file
/// operation, has already fixed the configuration from the environment, and
/// this then returns `AlreadyInitialized`.
pub use sierra_core::kprint::init as init_logging;
pub use sierra_core::kprint::{level_enabled, log_level, LogLevel};
pub use sierra_core::LogConfig;

// Re-export env utilities
pub use sierra_core::{env_get, env_get_bool, env_get_opt, env_get_str, env_is_set, env_parse};

/// Filesystem access
pub mod fsys {
    pub use sierra_fsys::*;
}

/// Everything most callers need in one import.
pub mod prelude {
    pub use crate::fsys::{make_file, open_dir, open_file, Dir, File, FileRead, Path};
    pub use crate::{render, ErrorCode, Res, ResMut, ResRef, Sink, Status, Sys};
    pub use crate::{kdebug, kerror, kinfo, kprintln, kwarn};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_common_flow() {
        let res = open_file("/definitely/not/here/sierra.txt");
        assert_eq!(res.code(), ErrorCode::FsNoSuchPath);
        assert_eq!(res.message(), render(ErrorCode::FsNoSuchPath));
        assert!(res.status().failed());
    }

    #[test]
    fn test_reexported_logging_init() {
        let status = super::init_logging(super::LogConfig::new().sink(Sink::ConsoleIn));
        assert_eq!(status.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_logging_fixed_by_failed_file_op() {
        assert!(open_file("/definitely/not/here/sierra-log.txt").failed());
        let status = super::init_logging(super::LogConfig::new());
        assert_eq!(status.code(), ErrorCode::AlreadyInitialized);
    }
}
