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

//! # Checked Integer
//!
//! `CheckedInt<T>` holds a single primitive integer and refuses every
//! mutation an overflow predicate flags. Construction, assignment, and the
//! compound arithmetic operations return `Result`; on `Err` the stored value
//! is exactly what it was before the call.
//!
//! The compound operations return `&mut Self` on success, so they chain with
//! `?`:
//!
//! ```rust
//! use overguard::{CheckedInt, OverflowError};
//!
//! fn scale(x: i8) -> Result<i8, OverflowError> {
//!     let mut v = CheckedInt::<i8>::new(x)?;
//!     v.add(3)?.multiply(4)?.subtract(1u64)?;
//!     Ok(v.get())
//! }
//!
//! assert_eq!(scale(2), Ok(19));
//! assert!(scale(30).is_err());
//! ```
//!
//! Operands may be any primitive integer or another `CheckedInt`, of any
//! width or signedness. Mixed operands are compared after promotion to
//! [`Wide`](overguard_core::Wide), and results are narrowed back into `T` before being stored.
//!
//! Division is the exception: its predicate never fires, so `divide` never
//! returns `Err`. A quotient that does not fit `T` (`T::MIN / -1`, or a
//! negative quotient for an unsigned `T`) panics the way native integer
//! division does.

use crate::operand::Operand;
use overguard_core::{Integer, Operation, OverflowError, checks};
use std::fmt;

/// An integer of type `T` whose arithmetic rejects overflow instead of
/// wrapping, saturating or panicking.
///
/// # Examples
///
/// ```rust
/// # use overguard::CheckedInt;
///
/// let mut v = CheckedInt::<i8>::new(127).unwrap();
/// assert!(v.add(1).is_err());
/// assert_eq!(v.get(), 127);
/// v.add(-1).unwrap();
/// assert_eq!(v.get(), 126);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckedInt<T>
where
    T: Integer,
{
    value: T,
}

impl<T> CheckedInt<T>
where
    T: Integer,
{
    /// The smallest value representable by `T`.
    pub const MIN: Self = Self::from_native(T::MIN);

    /// The largest value representable by `T`.
    pub const MAX: Self = Self::from_native(T::MAX);

    /// Creates a new `CheckedInt` from any operand.
    ///
    /// # Errors
    ///
    /// Returns an [`OverflowError`] if `value` is outside the range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use overguard::CheckedInt;
    ///
    /// assert_eq!(CheckedInt::<u8>::new(255u32).unwrap().get(), 255);
    /// assert!(CheckedInt::<u8>::new(256u32).is_err());
    /// assert!(CheckedInt::<u8>::new(-1i8).is_err());
    /// ```
    #[inline]
    pub fn new<R>(value: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        let mut checked = Self::default();
        checked.assign(value)?;
        Ok(checked)
    }

    /// Wraps a value that is already a `T`. Never fails.
    #[inline(always)]
    pub const fn from_native(value: T) -> Self {
        Self { value }
    }

    /// Returns the stored value.
    #[inline(always)]
    pub fn get(&self) -> T {
        self.value
    }

    /// Replaces the stored value with `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an [`OverflowError`] and leaves the value unchanged if `rhs`
    /// is outside the range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use overguard::CheckedInt;
    ///
    /// let mut v = CheckedInt::<i8>::new(100).unwrap();
    /// v.assign(50u64).unwrap();
    /// assert_eq!(v.get(), 50);
    /// assert!(v.assign(1_000i32).is_err());
    /// assert_eq!(v.get(), 50);
    /// ```
    pub fn assign<R>(&mut self, rhs: R) -> Result<&mut Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = rhs.value();
        let reject = || rejected(OverflowError::assignment::<T, _>(rhs));
        if checks::assign::<T, _>(rhs) {
            return Err(reject());
        }
        self.value = T::narrow(rhs.widen()).ok_or_else(reject)?;
        Ok(self)
    }

    /// Adds `rhs` to the stored value in place.
    ///
    /// # Errors
    ///
    /// Returns an [`OverflowError`] and leaves the value unchanged if the
    /// sum does not fit `T`.
    #[inline]
    pub fn add<R>(&mut self, rhs: R) -> Result<&mut Self, OverflowError>
    where
        R: Operand,
    {
        self.apply(Operation::Add, rhs.value(), |lhs, rhs| {
            T::narrow(lhs.widen() + rhs.widen())
        })
    }

    /// Subtracts `rhs` from the stored value in place.
    ///
    /// # Errors
    ///
    /// Returns an [`OverflowError`] and leaves the value unchanged if the
    /// difference does not fit `T`.
    #[inline]
    pub fn subtract<R>(&mut self, rhs: R) -> Result<&mut Self, OverflowError>
    where
        R: Operand,
    {
        self.apply(Operation::Subtract, rhs.value(), |lhs, rhs| {
            T::narrow(lhs.widen() - rhs.widen())
        })
    }

    /// Multiplies the stored value by `rhs` in place.
    ///
    /// # Errors
    ///
    /// Returns an [`OverflowError`] and leaves the value unchanged if the
    /// multiplication predicate reports overflow.
    pub fn multiply<R>(&mut self, rhs: R) -> Result<&mut Self, OverflowError>
    where
        R: Operand,
    {
        self.apply(Operation::Multiply, rhs.value(), |lhs, rhs| {
            lhs.widen().checked_mul(rhs.widen()).and_then(T::narrow)
        })
    }

    /// Divides the stored value by `rhs` in place, truncating toward zero.
    ///
    /// Division overflow is not detected: this never returns `Err`.
    ///
    /// # Errors
    ///
    /// Only if the division predicate reports overflow, which it never does.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, or if the quotient does not fit `T` (for
    /// example `T::MIN / -1`), matching native integer division.
    pub fn divide<R>(&mut self, rhs: R) -> Result<&mut Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = rhs.value();
        if checks::div(self.value, rhs) {
            return Err(rejected(OverflowError::arithmetic(
                Operation::Divide,
                self.value,
                rhs,
            )));
        }
        assert!(!rhs.widen().is_zero(), "attempt to divide by zero");
        match self.value.widen().checked_div(rhs.widen()).and_then(T::narrow) {
            Some(quotient) => self.value = quotient,
            None => panic!("attempt to divide with overflow"),
        }
        Ok(self)
    }

    /// Adds one in place and returns the incremented value.
    ///
    /// # Errors
    ///
    /// Fails without mutating when the value is `T::MAX`.
    #[inline]
    pub fn increment(&mut self) -> Result<&mut Self, OverflowError> {
        self.add(T::ONE)
    }

    /// Adds one in place and returns the value before the increment.
    ///
    /// # Errors
    ///
    /// Fails without mutating when the value is `T::MAX`.
    #[inline]
    pub fn post_increment(&mut self) -> Result<Self, OverflowError> {
        let prior = *self;
        self.increment()?;
        Ok(prior)
    }

    /// Subtracts one in place and returns the decremented value.
    ///
    /// # Errors
    ///
    /// Fails without mutating when the value is `T::MIN`.
    #[inline]
    pub fn decrement(&mut self) -> Result<&mut Self, OverflowError> {
        self.subtract(T::ONE)
    }

    /// Subtracts one in place and returns the value before the decrement.
    ///
    /// # Errors
    ///
    /// Fails without mutating when the value is `T::MIN`.
    #[inline]
    pub fn post_decrement(&mut self) -> Result<Self, OverflowError> {
        let prior = *self;
        self.decrement()?;
        Ok(prior)
    }

    /// Returns a new instance holding the bitwise complement. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use overguard::CheckedInt;
    ///
    /// assert_eq!(CheckedInt::<u8>::from_native(0b1010_0000).complement().get(), 0b0101_1111);
    /// assert_eq!(CheckedInt::<i8>::from_native(0).complement().get(), -1);
    /// ```
    #[inline(always)]
    pub fn complement(self) -> Self {
        Self::from_native(!self.value)
    }

    /// Returns `self + rhs` as a plain value, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`CheckedInt::add`] would.
    #[inline]
    pub fn sum<R>(self, rhs: R) -> Result<T, OverflowError>
    where
        R: Operand,
    {
        let mut copy = self;
        Ok(copy.add(rhs)?.get())
    }

    /// Returns `self - rhs` as a plain value, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`CheckedInt::subtract`] would.
    #[inline]
    pub fn difference<R>(self, rhs: R) -> Result<T, OverflowError>
    where
        R: Operand,
    {
        let mut copy = self;
        Ok(copy.subtract(rhs)?.get())
    }

    /// Returns `self * rhs` as a plain value, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`CheckedInt::multiply`] would.
    #[inline]
    pub fn product<R>(self, rhs: R) -> Result<T, OverflowError>
    where
        R: Operand,
    {
        let mut copy = self;
        Ok(copy.multiply(rhs)?.get())
    }

    /// Runs the predicate for `operation` and, if it passes, stores
    /// `compute(lhs, rhs)`.
    fn apply<R>(
        &mut self,
        operation: Operation,
        rhs: R,
        compute: impl FnOnce(T, R) -> Option<T>,
    ) -> Result<&mut Self, OverflowError>
    where
        R: Integer,
    {
        let lhs = self.value;
        let reject = || rejected(OverflowError::arithmetic(operation, lhs, rhs));
        if checks::would_overflow(operation, lhs, rhs) {
            return Err(reject());
        }
        self.value = compute(lhs, rhs).ok_or_else(reject)?;
        Ok(self)
    }
}

#[inline]
fn rejected(err: OverflowError) -> OverflowError {
    log::trace!("rejected checked integer operation: {err}");
    err
}

impl<T> Default for CheckedInt<T>
where
    T: Integer,
{
    #[inline(always)]
    fn default() -> Self {
        Self::from_native(T::ZERO)
    }
}

impl<T> AsRef<T> for CheckedInt<T>
where
    T: Integer,
{
    #[inline(always)]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> fmt::Debug for CheckedInt<T>
where
    T: Integer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CheckedInt<{}>({})", T::NAME, self.value)
    }
}

impl<T> fmt::Display for CheckedInt<T>
where
    T: Integer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
