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

//! Operator surface for [`CheckedInt`].
//!
//! Bitwise and shift operators carry no overflow risk and delegate directly
//! to the stored value, with the same result as the native operator.
//!
//! Arithmetic has no operator form, since `+=` cannot report failure. Use
//! [`CheckedInt::add`] and [`CheckedInt::sum`] and their siblings.
//!
//! ```rust
//! # use overguard::CheckedInt;
//!
//! let v = CheckedInt::<u8>::from_native(200);
//! assert_eq!((v & 0x0Fu8).get(), 0x08);
//! assert_eq!((v >> 4).get(), 12);
//! ```

use crate::{checked::CheckedInt, operand::Operand};
use overguard_core::{Integer, OverflowError};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

macro_rules! impl_bitwise_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, R> $trait_name<R> for CheckedInt<T>
        where
            T: Integer,
            R: Operand<Int = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: R) -> Self::Output {
                Self::from_native(self.get() $op rhs.value())
            }
        }

        impl<T, R> $assign_trait<R> for CheckedInt<T>
        where
            T: Integer,
            R: Operand<Int = T>,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: R) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

macro_rules! impl_shift_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T> $trait_name<usize> for CheckedInt<T>
        where
            T: Integer,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: usize) -> Self::Output {
                Self::from_native(self.get() $op rhs)
            }
        }

        impl<T> $assign_trait<usize> for CheckedInt<T>
        where
            T: Integer,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: usize) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_shift_op!(Shl, shl, ShlAssign, shl_assign, <<);
impl_shift_op!(Shr, shr, ShrAssign, shr_assign, >>);

impl<T> Not for CheckedInt<T>
where
    T: Integer,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.complement()
    }
}

macro_rules! impl_conversions {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<CheckedInt<$t>> for $t {
                #[inline(always)]
                fn from(checked: CheckedInt<$t>) -> Self {
                    checked.get()
                }
            }

            impl<T> TryFrom<$t> for CheckedInt<T>
            where
                T: Integer,
            {
                type Error = OverflowError;

                #[inline]
                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
