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

use crate::checked::CheckedInt;
use overguard_core::Integer;

/// Anything that can appear on the right-hand side of a checked operation.
///
/// Native integers are their own operand; a [`CheckedInt`] is unwrapped to
/// its stored value first. Operands are read, never mutated.
///
/// # Examples
///
/// ```rust
/// # use overguard::{CheckedInt, Operand};
///
/// assert_eq!(7u16.value(), 7);
/// let wrapped = CheckedInt::<i8>::from_native(-3);
/// assert_eq!(wrapped.value(), -3);
/// ```
pub trait Operand: Copy {
    /// The primitive integer type of the operand.
    type Int: Integer;

    /// Returns the operand's integer value.
    fn value(self) -> Self::Int;
}

impl<T> Operand for T
where
    T: Integer,
{
    type Int = T;

    #[inline(always)]
    fn value(self) -> T {
        self
    }
}

impl<T> Operand for CheckedInt<T>
where
    T: Integer,
{
    type Int = T;

    #[inline(always)]
    fn value(self) -> T {
        self.get()
    }
}
