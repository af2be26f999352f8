//! # sierra-error - error catalog
//!
//! A zero-dependency, closed set of error codes with a static catalog that
//! classifies and renders them.
//!
//! ## Design
//!
//! Every [`ErrorCode`] maps to exactly one [`ErrorInfo`]: a base message plus
//! a two-level classification ([`Category`] for the domain, [`Subcategory`]
//! for the failure kind). The table is checked at build time: a missing
//! entry or an empty message is a compile error, never a runtime surprise.
//!
//! ## Quick Start
//!
//! ```rust
//! use sierra_error::{classify, lookup, render, Category, ErrorCode};
//!
//! let code = ErrorCode::FsNoSuchFile;
//! assert!(classify(code, Category::Filesystem));
//! assert_eq!(lookup(code).message, "No such file");
//! assert_eq!(render(code), "[fsys][access] No such file");
//! assert_eq!(render(ErrorCode::NotImplemented), "Not implemented");
//! ```
//!
//! ## Dependencies
//!
//! None.

mod category;
mod catalog;
mod code;

// ── Public API ────────────────────────────────────────────────────

pub use category::{Category, Subcategory};
pub use catalog::{classify, classify_sub, lookup, lookup_raw, render, ErrorInfo};
pub use code::ErrorCode;
