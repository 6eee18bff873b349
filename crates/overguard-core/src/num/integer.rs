// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::wide::Wide;
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// The integer capability every overflow check is expressed against.
///
/// Implemented for all primitive integer types. Besides the bounds and the
/// sentinel constants, an `Integer` knows how to promote itself into [`Wide`]
/// and how to narrow a `Wide` back, which is the only way two operands of
/// different widths are ever compared.
///
/// # Examples
///
/// ```rust
/// # use overguard_core::num::integer::Integer;
///
/// assert_eq!(<i8 as Integer>::MIN, -128);
/// assert_eq!(u16::NAME, "u16");
/// assert_eq!(i8::narrow(300u16.widen()), None);
/// assert_eq!(i8::narrow(100u16.widen()), Some(100));
/// ```
pub trait Integer: PrimInt + Debug + Display + Hash + Send + Sync + 'static {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
    /// The constant representing 0.
    const ZERO: Self;
    /// The constant representing +1.
    const ONE: Self;
    /// Whether the type can hold negative values.
    const SIGNED: bool;
    /// The name of the type, used in diagnostics.
    const NAME: &'static str;

    /// Promotes the value into the common wide representation.
    fn widen(self) -> Wide;

    /// Narrows a wide value into `Self`, returning `None` if it is out of range.
    fn narrow(wide: Wide) -> Option<Self>;

    /// Returns `true` if the value is strictly below zero.
    #[inline(always)]
    fn is_negative(self) -> bool {
        Self::SIGNED && self < Self::ZERO
    }
}

macro_rules! impl_integer {
    ($t:ty, $signed:expr) => {
        impl Integer for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const SIGNED: bool = $signed;
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn widen(self) -> Wide {
                // Every primitive fits in 256 bits.
                Wide::unchecked_from(self)
            }

            #[inline]
            fn narrow(wide: Wide) -> Option<Self> {
                <$t>::try_from(wide).ok()
            }
        }
    };
}

macro_rules! impl_signed_integer {
    ($t:ty) => {
        impl_integer!($t, true);
    };
}

macro_rules! impl_unsigned_integer {
    ($t:ty) => {
        impl_integer!($t, false);
    };
}

impl_signed_integer!(i8);
impl_signed_integer!(i16);
impl_signed_integer!(i32);
impl_signed_integer!(i64);
impl_signed_integer!(i128);
impl_signed_integer!(isize);

impl_unsigned_integer!(u8);
impl_unsigned_integer!(u16);
impl_unsigned_integer!(u32);
impl_unsigned_integer!(u64);
impl_unsigned_integer!(u128);
impl_unsigned_integer!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounds_round_trip<T: Integer>() {
        assert_eq!(T::narrow(T::MIN.widen()), Some(T::MIN));
        assert_eq!(T::narrow(T::MAX.widen()), Some(T::MAX));
        assert_eq!(T::narrow(T::ZERO.widen()), Some(T::ZERO));
        assert_eq!(T::narrow(T::MAX.widen() + Wide::ONE), None);
        assert_eq!(T::narrow(T::MIN.widen() - Wide::ONE), None);
    }

    #[test]
    fn test_bounds_round_trip_all_primitives() {
        assert_bounds_round_trip::<i8>();
        assert_bounds_round_trip::<i16>();
        assert_bounds_round_trip::<i32>();
        assert_bounds_round_trip::<i64>();
        assert_bounds_round_trip::<i128>();
        assert_bounds_round_trip::<isize>();
        assert_bounds_round_trip::<u8>();
        assert_bounds_round_trip::<u16>();
        assert_bounds_round_trip::<u32>();
        assert_bounds_round_trip::<u64>();
        assert_bounds_round_trip::<u128>();
        assert_bounds_round_trip::<usize>();
    }

    #[test]
    fn test_widen_preserves_value_across_signedness() {
        assert_eq!(u8::MAX.widen(), 255i32.widen());
        assert_eq!((-1i8).widen(), (-1i128).widen());
        assert!(u128::MAX.widen() > i128::MAX.widen());
        assert!(i128::MIN.widen() < 0u8.widen());
    }

    #[test]
    fn test_narrow_rejects_wrong_sign() {
        assert_eq!(u32::narrow((-1i64).widen()), None);
        assert_eq!(i64::narrow(u64::MAX.widen()), None);
        assert_eq!(i64::narrow((i64::MAX as u64).widen()), Some(i64::MAX));
    }

    #[test]
    fn test_is_negative() {
        assert!((-1i16).is_negative());
        assert!(!0i16.is_negative());
        assert!(!u8::MAX.is_negative());
    }

    #[test]
    fn test_names_and_signedness() {
        assert_eq!(i8::NAME, "i8");
        assert_eq!(usize::NAME, "usize");
        assert!(i32::SIGNED);
        assert!(!u32::SIGNED);
    }
}
