//! Compile-time requirements on result payloads.
//!
//! A payload may live in a result container only if it can be released
//! without failing, moved without failing, and either copied without failing
//! or not copied at all. In Rust, moves are bitwise and infallible and drop
//! glue has no failure channel, so the first two reduce to "has a size known
//! at compile time". Copying is opt-in through `Clone`.
//!
//! The traits are blanket-implemented; they exist to name the requirement in
//! bounds. Anything that does not satisfy them is rejected by the compiler:
//!
//! ```compile_fail
//! use sierra_core::capability::ResultStorable;
//!
//! fn store<T: ResultStorable>() {}
//! store::<str>();
//! ```

/// Can be released without a failure path.
pub trait SafeDestructible {}

impl<T: ?Sized> SafeDestructible for T {}

/// Can be moved by value.
pub trait SafeMove: Sized {}

impl<T> SafeMove for T {}

/// Can be duplicated. Only required where a container is copied.
pub trait SafeCopy: Clone {}

impl<T: Clone> SafeCopy for T {}

/// Everything a slot in a result container needs.
pub trait ResultStorable: SafeDestructible + SafeMove {}

impl<T: SafeDestructible + SafeMove> ResultStorable for T {}

/// `true` if dropping a `T` runs any code.
///
/// Containers holding such payloads release them on drop; the rest need
/// no release step at all.
#[inline]
pub const fn needs_release<T>() -> bool {
    core::mem::needs_drop::<T>()
}
