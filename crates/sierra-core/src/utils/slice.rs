//! Checked indexed access.
//!
//! The returned containers alias the element; they never copy or own it.

use sierra_error::ErrorCode;

use crate::result::{ResMut, ResRef};

/// Element `index` of `items`, or `IndexOutOfRange`.
#[inline]
pub fn at<T>(items: &[T], index: usize) -> ResRef<'_, T> {
    match items.get(index) {
        Some(item) => ResRef::new(item),
        None => ErrorCode::IndexOutOfRange.into(),
    }
}

/// Mutable element `index` of `items`, or `IndexOutOfRange`.
#[inline]
pub fn at_mut<T>(items: &mut [T], index: usize) -> ResMut<'_, T> {
    match items.get_mut(index) {
        Some(item) => ResMut::new(item),
        None => ErrorCode::IndexOutOfRange.into(),
    }
}
