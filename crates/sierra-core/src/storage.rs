//! Storage policies for result payloads.
//!
//! A container does not hold its payload directly; it holds a [`Storage`]
//! value that decides how the payload is kept:
//!
//! - [`Owned`]: the value lives inside the container and is released when
//!   the container is dropped.
//! - [`Borrowed`] / [`BorrowedMut`]: only the address is kept. Nothing is
//!   constructed or released, and the container can never outlive the
//!   referent: the borrow checker ties them together.

use core::fmt;

use crate::capability::{needs_release, ResultStorable, SafeDestructible};

/// How a payload is held inside a result container.
///
/// Each policy states what it demands of the payload: owned storage needs a
/// [`ResultStorable`] value, borrowed storage only a [`SafeDestructible`]
/// referent, which may be unsized.
pub trait Storage: Sized {
    /// What callers see through `access`.
    type Value: ?Sized;

    /// What callers hand in to build the slot, and get back from `release`.
    type Input;

    /// Whether dropping the slot runs any code.
    const NEEDS_RELEASE: bool;

    /// Build the slot from its input.
    fn construct(input: Self::Input) -> Self;

    /// Borrow the live value.
    fn access(&self) -> &Self::Value;

    /// Take the slot apart, handing back what was constructed.
    fn release(self) -> Self::Input;
}

/// Storage that also grants mutable access.
pub trait StorageMut: Storage {
    fn access_mut(&mut self) -> &mut Self::Value;
}

// ============================================================================
// Owned
// ============================================================================

/// Value stored in place.
#[derive(Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Owned<T>(T);

impl<T: ResultStorable> Storage for Owned<T> {
    type Value = T;
    type Input = T;

    const NEEDS_RELEASE: bool = needs_release::<T>();

    #[inline]
    fn construct(input: T) -> Self {
        Owned(input)
    }

    #[inline]
    fn access(&self) -> &T {
        &self.0
    }

    #[inline]
    fn release(self) -> T {
        self.0
    }
}

impl<T: ResultStorable> StorageMut for Owned<T> {
    #[inline]
    fn access_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Borrowed
// ============================================================================

/// Shared reference to a value owned elsewhere.
#[repr(transparent)]
pub struct Borrowed<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized + SafeDestructible> Storage for Borrowed<'a, T> {
    type Value = T;
    type Input = &'a T;

    const NEEDS_RELEASE: bool = false;

    #[inline]
    fn construct(input: &'a T) -> Self {
        Borrowed(input)
    }

    #[inline]
    fn access(&self) -> &T {
        self.0
    }

    #[inline]
    fn release(self) -> &'a T {
        self.0
    }
}

// Manual impls: a shared reference is always copyable, whatever `T` is.
impl<T: ?Sized> Clone for Borrowed<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Borrowed<'_, T> {}

impl<T: ?Sized + PartialEq> PartialEq for Borrowed<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Borrowed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{:?}", self.0)
    }
}

// ============================================================================
// BorrowedMut
// ============================================================================

/// Exclusive reference to a value owned elsewhere.
#[repr(transparent)]
pub struct BorrowedMut<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized + SafeDestructible> Storage for BorrowedMut<'a, T> {
    type Value = T;
    type Input = &'a mut T;

    const NEEDS_RELEASE: bool = false;

    #[inline]
    fn construct(input: &'a mut T) -> Self {
        BorrowedMut(input)
    }

    #[inline]
    fn access(&self) -> &T {
        self.0
    }

    #[inline]
    fn release(self) -> &'a mut T {
        self.0
    }
}

impl<T: ?Sized + SafeDestructible> StorageMut for BorrowedMut<'_, T> {
    #[inline]
    fn access_mut(&mut self) -> &mut T {
        self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for BorrowedMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for BorrowedMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&mut {:?}", &*self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_roundtrip() {
        let slot = Owned::construct(String::from("hello"));
        assert_eq!(slot.access(), "hello");
        assert_eq!(slot.release(), "hello");
    }

    #[test]
    fn test_owned_mutation() {
        let mut slot = Owned::construct(vec![1, 2]);
        slot.access_mut().push(3);
        assert_eq!(slot.access(), &[1, 2, 3]);
    }

    #[test]
    fn test_borrowed_keeps_address() {
        let value = 7u32;
        let slot = Borrowed::construct(&value);
        assert!(core::ptr::eq(slot.access(), &value));
        assert!(core::ptr::eq(slot.release(), &value));
    }

    #[test]
    fn test_borrowed_unsized() {
        let text = String::from("abc");
        let slot: Borrowed<'_, str> = Borrowed::construct(text.as_str());
        let copy = slot;
        assert_eq!(slot.access(), "abc");
        assert_eq!(copy.access(), "abc");
    }

    #[test]
    fn test_borrowed_mut_writes_through() {
        let mut value = 1;
        {
            let mut slot = BorrowedMut::construct(&mut value);
            *slot.access_mut() += 41;
        }
        assert_eq!(value, 42);
    }

    #[test]
    fn test_needs_release_flags() {
        assert!(<Owned<String> as Storage>::NEEDS_RELEASE);
        assert!(!<Owned<i32> as Storage>::NEEDS_RELEASE);
        assert!(!<Borrowed<'_, String> as Storage>::NEEDS_RELEASE);
        assert!(!<BorrowedMut<'_, String> as Storage>::NEEDS_RELEASE);
    }
}
