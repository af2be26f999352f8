//! Numeric text reading.
//!
//! `read_f32` / `read_f64` return raw values and signal malformed input with
//! NaN rather than a result container, so hot parsing loops stay branch-light.
//! `parse_f64` is the checked variant for callers that need the reason.
//!
//! Plain digit runs take a fast accumulation path; anything with a sign,
//! decimal point or exponent goes through the standard library parser.
//! Text the float type cannot represent (overflow to infinity, a nonzero
//! value underflowing to zero) and a leading `+` read as NaN.

use std::str::FromStr;

use sierra_error::ErrorCode;

use crate::prims::{BASE_DECIMAL, F32_NAN, F64_NAN};
use crate::result::Res;
use crate::utils::char::{is_digit, is_numerical};

/// Float types the reader can produce.
pub trait ReadFloat: Copy + FromStr {
    const NAN: Self;

    fn from_u64(v: u64) -> Self;

    fn is_finite(self) -> bool;

    fn is_zero(self) -> bool;
}

macro_rules! read_float {
    ($t:ty, $nan:expr) => {
        impl ReadFloat for $t {
            const NAN: Self = $nan;

            #[inline]
            fn from_u64(v: u64) -> Self {
                v as $t
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0.0
            }
        }
    };
}

read_float!(f32, F32_NAN);
read_float!(f64, F64_NAN);

/// Accumulate an all-digit run. `None` if it overflows `u64`.
#[inline]
fn read_fast(bytes: &[u8]) -> Option<u64> {
    bytes.iter().try_fold(0u64, |acc, &b| {
        acc.checked_mul(BASE_DECIMAL as u64)?.checked_add((b - b'0') as u64)
    })
}

/// Nonzero digit before the exponent marker.
#[inline]
fn has_nonzero_mantissa(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .take_while(|&&b| b != b'e' && b != b'E')
        .any(|&b| matches!(b, b'1'..=b'9'))
}

fn read_full<T: ReadFloat>(text: &str) -> T {
    if text.starts_with('+') {
        return T::NAN;
    }

    let value: T = match text.parse() {
        Ok(v) => v,
        Err(_) => return T::NAN,
    };

    if !value.is_finite() {
        return T::NAN;
    }
    if value.is_zero() && has_nonzero_mantissa(text.as_bytes()) {
        return T::NAN;
    }
    value
}

/// Read `text` as a float; NaN if it is empty or malformed.
pub fn read<T: ReadFloat>(text: &str) -> T {
    let bytes = text.as_bytes();

    if bytes.is_empty() || !bytes.iter().all(|&b| is_numerical(b)) {
        return T::NAN;
    }

    if bytes.iter().all(|&b| is_digit(b)) {
        if let Some(v) = read_fast(bytes) {
            return T::from_u64(v);
        }
    }

    read_full(text)
}

#[inline]
pub fn read_f32(text: &str) -> f32 {
    read(text)
}

#[inline]
pub fn read_f64(text: &str) -> f64 {
    read(text)
}

/// Checked variant of [`read_f64`].
///
/// Fails with `DfInvalidSyntax` when `text` contains characters that cannot
/// appear in a number, and with `DfParseFailed` when it is empty, the
/// characters do not form one (e.g. `"1..2"`), or the value is out of range
/// for `f64` (e.g. `"1e400"`).
pub fn parse_f64(text: &str) -> Res<f64> {
    let bytes = text.as_bytes();

    if !bytes.iter().all(|&b| is_numerical(b)) {
        return ErrorCode::DfInvalidSyntax.into();
    }

    let value = read_f64(text);
    if value.is_nan() {
        return ErrorCode::DfParseFailed.into();
    }
    Res::new(value)
}
