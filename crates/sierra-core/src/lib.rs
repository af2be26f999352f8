//! # sierra-core
//!
//! Core primitives shared by every sierra crate: a result container that
//! carries either a payload or an [`ErrorCode`], a payload-free [`Status`],
//! and the thin system layer the rest of the workspace prints through.
//!
//! Only Unix-like targets are supported; building anywhere else is a
//! compile error (see [`target`]).
//!
//! ## Modules
//!
//! - `capability` - Compile-time payload requirements
//! - `storage` - Owned / borrowed payload storage policies
//! - `result` - `Container` and the `Res` / `ResRef` / `ResMut` aliases
//! - `status` - Success-or-code outcome without a payload
//! - `prims` - Numeric limits, bases and checked casts
//! - `target` - Build target detection and standard descriptors
//! - `sys` - Raw console sinks
//! - `env` - Environment variable utilities
//! - `config` - Logging configuration
//! - `kprint` - Kernel-style debug printing macros
//! - `utils` - Character classes, float reading, checked indexing
//!
//! ## Example
//!
//! ```
//! use sierra_core::{ErrorCode, Res, Status};
//!
//! fn halve(v: u32) -> Res<u32> {
//!     if v % 2 == 1 {
//!         return ErrorCode::InvalidArgument.into();
//!     }
//!     Res::new(v / 2)
//! }
//!
//! assert_eq!(*halve(8).value(), 4);
//! assert_eq!(halve(3).message(), "Invalid argument");
//!
//! let status: Status = halve(3).status();
//! assert!(status.failed());
//! ```

pub mod capability;
pub mod storage;
pub mod result;
pub mod status;
pub mod prims;
pub mod target;
pub mod sys;
pub mod env;
pub mod config;
pub mod kprint;
pub mod utils;

// Re-exports for convenience
pub use sierra_error::{
    classify, classify_sub, lookup, lookup_raw, render, Category, ErrorCode, ErrorInfo,
    Subcategory,
};

pub use capability::{ResultStorable, SafeCopy, SafeDestructible, SafeMove};
pub use storage::{Borrowed, BorrowedMut, Owned, Storage, StorageMut};
pub use result::{Container, Res, ResMut, ResRef};
pub use status::Status;
pub use prims::{cast, Limits};
pub use target::{Fd, Target};
pub use sys::{Sink, Sys};
pub use env::{env_get, env_get_bool, env_get_opt, env_get_str, env_is_set, env_parse};
pub use config::LogConfig;
pub use kprint::LogLevel;
