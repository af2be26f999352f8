//! Result container: a live payload or an error code, never both.
//!
//! [`Container`] is generic over its [`Storage`] policy. Most code names one
//! of the aliases instead:
//!
//! - [`Res<T>`] owns its payload.
//! - [`ResRef<'a, T>`] / [`ResMut<'a, T>`] alias a payload owned elsewhere.
//!
//! # Ownership
//!
//! A container is built once, from a value or from an [`ErrorCode`], and then
//! consumed: moved, cloned (only when the storage is `Clone`), unpacked with
//! [`Container::into_value`] / [`Container::into_result`], or dropped. There
//! is no API to overwrite a container in place; rebind instead.
//!
//! Copying needs a copyable payload:
//!
//! ```compile_fail
//! use sierra_core::Res;
//!
//! struct Handle;
//! let res = Res::new(Handle);
//! let copy = res.clone();
//! ```
//!
//! # Usage
//!
//! ```
//! use sierra_core::{ErrorCode, Res};
//!
//! fn pick(items: &[u32], idx: usize) -> Res<u32> {
//!     match items.get(idx) {
//!         Some(v) => Res::new(*v),
//!         None => ErrorCode::IndexOutOfRange.into(),
//!     }
//! }
//!
//! let hit = pick(&[4, 5], 1);
//! assert!(hit.ok());
//! assert_eq!(*hit.value(), 5);
//!
//! let miss = pick(&[4, 5], 9);
//! assert!(miss.failed());
//! assert_eq!(miss.message(), "[access] Index out of range");
//! ```

use core::fmt;

use sierra_error::{render, ErrorCode};

use crate::capability::{ResultStorable, SafeCopy};
use crate::status::Status;
use crate::storage::{Borrowed, BorrowedMut, Owned, Storage, StorageMut};

/// Result owning its payload.
pub type Res<T> = Container<Owned<T>>;

/// Result aliasing a shared payload.
pub type ResRef<'a, T> = Container<Borrowed<'a, T>>;

/// Result aliasing an exclusive payload.
pub type ResMut<'a, T> = Container<BorrowedMut<'a, T>>;

/// Discriminated union of a stored payload and an error code.
#[must_use = "a result must be checked with `ok()` or `failed()`"]
#[derive(PartialEq)]
pub struct Container<S: Storage> {
    repr: Repr<S>,
}

#[derive(PartialEq)]
enum Repr<S> {
    Success(S),
    Failure(ErrorCode),
}

// Copying is only offered when the storage, and so the payload, can be copied.
impl<S: SafeCopy> Clone for Repr<S> {
    fn clone(&self) -> Self {
        match self {
            Repr::Success(slot) => Repr::Success(slot.clone()),
            Repr::Failure(code) => Repr::Failure(*code),
        }
    }
}

impl<S: Storage + SafeCopy> Clone for Container<S> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }
}

// ── Constructors ──────────────────────────────────────────────────

impl<S: Storage> Container<S> {
    /// Successful result built from the storage's input.
    #[inline]
    pub fn construct(input: S::Input) -> Self {
        Self {
            repr: Repr::Success(S::construct(input)),
        }
    }

    /// Failed result carrying `code`.
    ///
    /// `ErrorCode::Ok` is not a failure; passing it is a caller bug. Debug
    /// builds assert, release builds log a warning and keep the failed state.
    #[track_caller]
    pub fn from_code(code: ErrorCode) -> Self {
        if code.is_ok() {
            crate::kwarn!("result built from ErrorCode::Ok; it will read as a failure");
        }
        debug_assert!(!code.is_ok(), "ErrorCode::Ok does not describe a failure");

        Self {
            repr: Repr::Failure(code),
        }
    }
}

impl<T: ResultStorable> Container<Owned<T>> {
    /// Successful result owning `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::construct(value)
    }
}

impl<'a, T: ?Sized> Container<Borrowed<'a, T>> {
    /// Successful result aliasing `value`.
    #[inline]
    pub fn new(value: &'a T) -> Self {
        Self::construct(value)
    }
}

impl<'a, T: ?Sized> Container<BorrowedMut<'a, T>> {
    /// Successful result aliasing `value` exclusively.
    #[inline]
    pub fn new(value: &'a mut T) -> Self {
        Self::construct(value)
    }
}

impl<S: Storage> From<ErrorCode> for Container<S> {
    #[track_caller]
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl<S: Storage> Container<S> {
    #[inline]
    pub fn ok(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    #[inline]
    pub fn failed(&self) -> bool {
        matches!(self.repr, Repr::Failure(_))
    }

    /// Whether dropping this container runs the payload's release.
    ///
    /// Never for a failure, never for borrowed storage, and for owned storage
    /// only when the payload has drop glue.
    #[inline]
    pub fn releases_on_drop(&self) -> bool {
        S::NEEDS_RELEASE && self.ok()
    }

    /// The live payload.
    ///
    /// # Panics
    ///
    /// If the result failed. Check [`ok`](Self::ok) first.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &S::Value {
        match &self.repr {
            Repr::Success(slot) => slot.access(),
            Repr::Failure(code) => panic!("value() on a failed result: {}", code),
        }
    }

    /// Consume the result and hand back the payload.
    ///
    /// # Panics
    ///
    /// If the result failed.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> S::Input {
        match self.repr {
            Repr::Success(slot) => slot.release(),
            Repr::Failure(code) => panic!("into_value() on a failed result: {}", code),
        }
    }

    /// The failure code.
    ///
    /// # Panics
    ///
    /// If the result succeeded. Check [`failed`](Self::failed) first.
    #[inline]
    #[track_caller]
    pub fn code(&self) -> ErrorCode {
        match &self.repr {
            Repr::Failure(code) => *code,
            Repr::Success(_) => panic!("code() on a successful result"),
        }
    }

    /// Rendered catalog message for the failure code.
    ///
    /// # Panics
    ///
    /// If the result succeeded.
    #[track_caller]
    pub fn message(&self) -> String {
        render(self.code())
    }

    /// The payload, or `None` if the result failed.
    #[inline]
    pub fn try_value(&self) -> Option<&S::Value> {
        match &self.repr {
            Repr::Success(slot) => Some(slot.access()),
            Repr::Failure(_) => None,
        }
    }

    /// The failure code, or `None` if the result succeeded.
    #[inline]
    pub fn try_code(&self) -> Option<ErrorCode> {
        match &self.repr {
            Repr::Failure(code) => Some(*code),
            Repr::Success(_) => None,
        }
    }

    /// Outcome without the payload.
    #[inline]
    pub fn status(&self) -> Status {
        match &self.repr {
            Repr::Success(_) => Status::OK,
            Repr::Failure(code) => Status::new(*code),
        }
    }

    /// Explicit bridge to `std::result::Result`, for use with `?`.
    #[inline]
    pub fn into_result(self) -> Result<S::Input, ErrorCode> {
        match self.repr {
            Repr::Success(slot) => Ok(slot.release()),
            Repr::Failure(code) => Err(code),
        }
    }

    /// Transform the payload of a successful result; failures pass through.
    pub fn map<U, F>(self, f: F) -> Res<U>
    where
        U: ResultStorable,
        F: FnOnce(S::Input) -> U,
    {
        match self.repr {
            Repr::Success(slot) => Res::new(f(slot.release())),
            Repr::Failure(code) => Container {
                repr: Repr::Failure(code),
            },
        }
    }
}

impl<S: StorageMut> Container<S> {
    /// The live payload, mutably.
    ///
    /// # Panics
    ///
    /// If the result failed.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut S::Value {
        match &mut self.repr {
            Repr::Success(slot) => slot.access_mut(),
            Repr::Failure(code) => panic!("value_mut() on a failed result: {}", code),
        }
    }
}

// ── Debug ─────────────────────────────────────────────────────────

impl<S: Storage + fmt::Debug> fmt::Debug for Container<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(slot) => f.debug_tuple("Success").field(slot).finish(),
            Repr::Failure(code) => f.debug_tuple("Failure").field(code).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Payload that counts how often it is built and released.
    struct Tracked<'a> {
        text: String,
        built: &'a Cell<usize>,
        dropped: &'a Cell<usize>,
    }

    impl<'a> Tracked<'a> {
        fn new(text: &str, built: &'a Cell<usize>, dropped: &'a Cell<usize>) -> Self {
            built.set(built.get() + 1);
            Self {
                text: text.to_string(),
                built,
                dropped,
            }
        }
    }

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            Tracked::new(&self.text, self.built, self.dropped)
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[test]
    fn test_success_state() {
        let res = Res::new(42);
        assert!(res.ok());
        assert!(!res.failed());
        assert_eq!(*res.value(), 42);
        assert_eq!(res.try_code(), None);
        assert!(res.status().ok());
    }

    #[test]
    fn test_failure_state() {
        let res: Res<i32> = Res::from_code(ErrorCode::IndexOutOfRange);
        assert!(res.failed());
        assert!(!res.ok());
        assert_eq!(res.code(), ErrorCode::IndexOutOfRange);
        assert_eq!(res.message(), "[access] Index out of range");
        assert_eq!(res.try_value(), None);
        assert_eq!(res.status().code(), ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn test_from_code_conversion() {
        let res: Res<String> = ErrorCode::FsNoSuchFile.into();
        assert_eq!(res.message(), "[fsys][access] No such file");
    }

    #[test]
    fn test_move_releases_once() {
        let built = Cell::new(0);
        let dropped = Cell::new(0);

        let first = Res::new(Tracked::new("hello", &built, &dropped));
        let second = first;
        assert_eq!(second.value().text, "hello");
        assert_eq!(built.get(), 1);
        assert_eq!(dropped.get(), 0);

        drop(second);
        assert_eq!(built.get(), 1);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_into_value_transfers_ownership() {
        let built = Cell::new(0);
        let dropped = Cell::new(0);

        let res = Res::new(Tracked::new("hello", &built, &dropped));
        let payload = res.into_value();
        assert_eq!(dropped.get(), 0);
        assert_eq!(payload.text, "hello");

        drop(payload);
        assert_eq!(built.get(), 1);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_clone_success_duplicates_payload() {
        let built = Cell::new(0);
        let dropped = Cell::new(0);
        {
            let original = Res::new(Tracked::new("hello", &built, &dropped));
            let copy = original.clone();
            assert_eq!(built.get(), 2);
            assert_eq!(copy.value().text, original.value().text);
        }
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn test_clone_failure_keeps_code() {
        let original: Res<String> = Res::from_code(ErrorCode::DfParseFailed);
        let copy = original.clone();
        assert_eq!(copy.code(), ErrorCode::DfParseFailed);
        assert_eq!(original.code(), ErrorCode::DfParseFailed);
        assert_eq!(copy, original);
    }

    #[test]
    fn test_failure_releases_nothing() {
        let built = Cell::new(0);
        let dropped = Cell::new(0);
        {
            let _res: Res<Tracked<'_>> = Res::from_code(ErrorCode::Failure);
        }
        assert_eq!(built.get(), 0);
        assert_eq!(dropped.get(), 0);
    }

    #[test]
    fn test_releases_on_drop() {
        assert!(Res::new(String::from("heap")).releases_on_drop());
        assert!(!Res::new(7u64).releases_on_drop());

        let failed: Res<String> = ErrorCode::Failure.into();
        assert!(!failed.releases_on_drop());

        let text = String::from("shared");
        assert!(!ResRef::new(&text).releases_on_drop());
        let mut owned = String::from("exclusive");
        assert!(!ResMut::new(&mut owned).releases_on_drop());
    }

    #[test]
    fn test_clone_gated_on_safe_copy() {
        fn duplicate<S: Storage + SafeCopy>(res: &Container<S>) -> Container<S> {
            res.clone()
        }

        let copy = duplicate(&Res::new(vec![1u8, 2]));
        assert_eq!(copy.value(), &vec![1, 2]);

        let text = String::from("alias");
        let alias = duplicate(&ResRef::new(text.as_str()));
        assert!(core::ptr::eq(alias.value(), text.as_str()));
    }

    #[test]
    fn test_double_move_roundtrip() {
        let res = Res::new(String::from("payload"));
        let moved = res;
        let moved_again = moved;
        assert_eq!(moved_again.into_value(), "payload");
    }

    #[test]
    fn test_reference_storage_never_releases_referent() {
        let built = Cell::new(0);
        let dropped = Cell::new(0);
        let referent = Tracked::new("shared", &built, &dropped);
        {
            let res = ResRef::new(&referent);
            let copy = res.clone();
            assert!(core::ptr::eq(res.value(), &referent));
            assert_eq!(copy.value().text, "shared");
        }
        assert_eq!(built.get(), 1);
        assert_eq!(dropped.get(), 0);
    }

    #[test]
    fn test_mutable_reference_storage() {
        let mut counter = 10u32;
        {
            let mut res = ResMut::new(&mut counter);
            *res.value_mut() += 5;
        }
        assert_eq!(counter, 15);
    }

    #[test]
    fn test_owned_value_mut() {
        let mut res = Res::new(vec![1u8]);
        res.value_mut().push(2);
        assert_eq!(res.value(), &vec![1, 2]);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Res::new(3).into_result(), Ok(3));
        let res: Res<i32> = ErrorCode::DfInvalidCast.into();
        assert_eq!(res.into_result(), Err(ErrorCode::DfInvalidCast));
    }

    #[test]
    fn test_map() {
        let len = Res::new(String::from("four")).map(|s| s.len());
        assert_eq!(*len.value(), 4);

        let failed: Res<String> = ErrorCode::FsFailedToRead.into();
        let len = failed.map(|s| s.len());
        assert_eq!(len.code(), ErrorCode::FsFailedToRead);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Res::new(1)), "Success(1)");
        let res: Res<i32> = ErrorCode::Failure.into();
        assert_eq!(format!("{:?}", res), "Failure(Failure)");
    }

    #[test]
    #[should_panic(expected = "value() on a failed result")]
    fn test_value_on_failure_panics() {
        let res: Res<i32> = ErrorCode::Failure.into();
        let _ = res.value();
    }

    #[test]
    #[should_panic(expected = "code() on a successful result")]
    fn test_code_on_success_panics() {
        let res = Res::new(1);
        let _ = res.code();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "ErrorCode::Ok does not describe a failure")]
    fn test_ok_code_rejected_in_debug() {
        let _res: Res<i32> = Res::from_code(ErrorCode::Ok);
    }
}
