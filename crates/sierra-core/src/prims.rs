//! Numeric limits and checked casts.

use sierra_error::ErrorCode;

use crate::result::Res;

pub const I8_MIN: i8 = i8::MIN;
pub const I16_MIN: i16 = i16::MIN;
pub const I32_MIN: i32 = i32::MIN;
pub const I64_MIN: i64 = i64::MIN;

pub const I8_MAX: i8 = i8::MAX;
pub const I16_MAX: i16 = i16::MAX;
pub const I32_MAX: i32 = i32::MAX;
pub const I64_MAX: i64 = i64::MAX;

pub const U8_MAX: u8 = u8::MAX;
pub const U16_MAX: u16 = u16::MAX;
pub const U32_MAX: u32 = u32::MAX;
pub const U64_MAX: u64 = u64::MAX;
pub const USIZE_MAX: usize = usize::MAX;

/// Most negative finite value.
pub const F32_LOWEST: f32 = f32::MIN;
pub const F64_LOWEST: f64 = f64::MIN;

/// Smallest positive normal value.
pub const F32_MIN: f32 = f32::MIN_POSITIVE;
pub const F64_MIN: f64 = f64::MIN_POSITIVE;

pub const F32_MAX: f32 = f32::MAX;
pub const F64_MAX: f64 = f64::MAX;

pub const F32_EPSILON: f32 = f32::EPSILON;
pub const F64_EPSILON: f64 = f64::EPSILON;

pub const F32_NAN: f32 = f32::NAN;
pub const F64_NAN: f64 = f64::NAN;

pub const F32_INF: f32 = f32::INFINITY;
pub const F64_INF: f64 = f64::INFINITY;

pub const BASE_BINARY: u8 = 2;
pub const BASE_OCTAL: u8 = 8;
pub const BASE_DECIMAL: u8 = 10;
pub const BASE_HEXADECIMAL: u8 = 16;

/// Uniform access to the bounds of a numeric type.
///
/// For floats `MIN` is the smallest positive normal value and `LOWEST` the
/// most negative finite one; for integers the two coincide.
pub trait Limits: Copy {
    const MIN: Self;
    const MAX: Self;
    const LOWEST: Self;
}

macro_rules! int_limits {
    ($($t:ty),*) => {$(
        impl Limits for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const LOWEST: Self = <$t>::MIN;
        }
    )*};
}

int_limits!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Limits for f32 {
    const MIN: Self = F32_MIN;
    const MAX: Self = F32_MAX;
    const LOWEST: Self = F32_LOWEST;
}

impl Limits for f64 {
    const MIN: Self = F64_MIN;
    const MAX: Self = F64_MAX;
    const LOWEST: Self = F64_LOWEST;
}

/// Convert `value` to `T`, failing with `DfInvalidCast` if it does not fit.
#[inline]
pub fn cast<T, U>(value: U) -> Res<T>
where
    T: TryFrom<U>,
{
    match T::try_from(value) {
        Ok(v) => Res::new(v),
        Err(_) => ErrorCode::DfInvalidCast.into(),
    }
}
