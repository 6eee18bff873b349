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

//! # Overflow Predicates
//!
//! Pure functions deciding whether an operation between two integers, with the
//! result stored in the left operand's type `L`, would overflow. The operands
//! may differ in width and signedness. None of the predicates performs the
//! operation it checks: every comparison is carried out on operands promoted
//! to [`Wide`], which represents all intermediate bounds exactly.
//!
//! `sum` and `mul` follow a sign-driven case analysis rather than computing a
//! wide result and range-checking it. Two consequences are intentional and
//! covered by tests:
//!
//! - `sum` reports overflow whenever `rhs` is negative and equal to `R::MIN`,
//!   since that operand cannot be negated within `R`, even if the true sum
//!   would fit in a wider `L`.
//! - `mul` reports overflow when both operands are negative and one of them is
//!   the minimum of its own type, even if the product would fit in a wider `L`.
//!
//! `div` never reports overflow. `MIN / -1` is not detected.
//!
//! # Examples
//!
//! ```rust
//! # use overguard_core::checks;
//!
//! assert!(checks::sum(127i8, 1i8));
//! assert!(!checks::sum(127i8, -1i8));
//! assert!(checks::sub(-128i8, 1u8));
//! assert!(checks::mul(10i8, 13i8));
//! assert!(!checks::assign::<u8, _>(255i64));
//! assert!(checks::assign::<u8, _>(256i64));
//! ```

use crate::{
    error::Operation,
    num::{integer::Integer, wide::Wide},
};

/// Inclusive range of the destination type, promoted once per check.
#[derive(Clone, Copy)]
struct Bounds {
    min: Wide,
    max: Wide,
}

impl Bounds {
    #[inline(always)]
    fn of<L: Integer>() -> Self {
        Self {
            min: L::MIN.widen(),
            max: L::MAX.widen(),
        }
    }
}

/// Checks whether storing `rhs` into `L` overflows.
///
/// True iff `rhs` is above `L::MAX` or below `L::MIN`.
#[must_use]
#[inline]
pub fn assign<L, R>(rhs: R) -> bool
where
    L: Integer,
    R: Integer,
{
    let bounds = Bounds::of::<L>();
    let rhs = rhs.widen();
    rhs > bounds.max || rhs < bounds.min
}

/// Checks whether `lhs + rhs` overflows `L`.
#[must_use]
#[inline]
pub fn sum<L, R>(lhs: L, rhs: R) -> bool
where
    L: Integer,
    R: Integer,
{
    sum_wide(Bounds::of::<L>(), lhs.widen(), rhs.widen(), R::MIN.widen())
}

/// Checks whether `lhs - rhs` overflows `L`.
#[must_use]
#[inline]
pub fn sub<L, R>(lhs: L, rhs: R) -> bool
where
    L: Integer,
    R: Integer,
{
    sub_wide(Bounds::of::<L>(), lhs.widen(), rhs.widen())
}

/// Checks whether `lhs * rhs` overflows `L`.
///
/// Zero on either side never overflows, including `L::MIN * 0`.
#[must_use]
#[inline]
pub fn mul<L, R>(lhs: L, rhs: R) -> bool
where
    L: Integer,
    R: Integer,
{
    if lhs == L::ZERO || rhs == R::ZERO {
        return false;
    }
    if lhs.is_negative() && rhs.is_negative() && (lhs == L::MIN || rhs == R::MIN) {
        return true;
    }
    mul_wide(Bounds::of::<L>(), lhs.widen(), rhs.widen())
}

/// Checks whether `lhs / rhs` overflows `L`.
///
/// Always `false`: division overflow, including `L::MIN / -1`, is not
/// detected.
#[must_use]
#[inline(always)]
pub fn div<L, R>(_lhs: L, _rhs: R) -> bool
where
    L: Integer,
    R: Integer,
{
    false
}

/// Dispatches to the predicate matching `operation`.
///
/// For [`Operation::Assign`] the left operand is ignored.
///
/// # Examples
///
/// ```rust
/// # use overguard_core::{checks::would_overflow, error::Operation};
///
/// assert!(would_overflow(Operation::Add, u8::MAX, 1u8));
/// assert!(would_overflow(Operation::Assign, 0u8, -1i8));
/// assert!(!would_overflow(Operation::Divide, i8::MIN, -1i8));
/// ```
#[must_use]
pub fn would_overflow<L, R>(operation: Operation, lhs: L, rhs: R) -> bool
where
    L: Integer,
    R: Integer,
{
    match operation {
        Operation::Assign => assign::<L, R>(rhs),
        Operation::Add => sum(lhs, rhs),
        Operation::Subtract => sub(lhs, rhs),
        Operation::Multiply => mul(lhs, rhs),
        Operation::Divide => div(lhs, rhs),
    }
}

#[inline]
fn sum_wide(bounds: Bounds, lhs: Wide, rhs: Wide, rhs_min: Wide) -> bool {
    if rhs.is_negative() {
        if rhs == rhs_min {
            // -rhs does not exist in R.
            return true;
        }
        return sub_wide(bounds, lhs, -rhs);
    }
    if !lhs.is_negative() {
        bounds.max - lhs < rhs
    } else {
        bounds.max - rhs < lhs
    }
}

#[inline]
fn sub_wide(bounds: Bounds, lhs: Wide, rhs: Wide) -> bool {
    (rhs.is_negative() && lhs > bounds.max + rhs)
        || (rhs.is_positive() && lhs < bounds.min + rhs)
}

/// Both operands are non-zero; `MIN` operands of a negative pair are
/// already rejected by the caller.
#[inline]
fn mul_wide(bounds: Bounds, lhs: Wide, rhs: Wide) -> bool {
    match (lhs.is_negative(), rhs.is_negative()) {
        (true, true) => mul_wide(bounds, -lhs, -rhs),
        (true, false) => quotient_below(bounds.min, lhs, rhs),
        (false, true) => quotient_below(bounds.min, rhs, lhs),
        (false, false) => quotient_below(bounds.max, lhs, rhs),
    }
}

/// `bound / divisor < other`. A quotient that cannot be formed counts as
/// overflow.
#[inline(always)]
fn quotient_below(bound: Wide, divisor: Wide, other: Wide) -> bool {
    bound.checked_div(divisor).is_none_or(|q| q < other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn fits<L: Integer>(value: i128) -> bool {
        let min = L::MIN.to_i128().unwrap_or(i128::MIN);
        let max = L::MAX.to_i128().unwrap_or(i128::MAX);
        (min..=max).contains(&value)
    }

    #[test]
    fn test_assign_boundaries() {
        assert!(!assign::<i8, _>(127i32));
        assert!(!assign::<i8, _>(-128i32));
        assert!(assign::<i8, _>(128i32));
        assert!(assign::<i8, _>(-129i32));

        assert!(!assign::<u8, _>(255u64));
        assert!(assign::<u8, _>(256u64));
        assert!(assign::<u8, _>(-1i8));

        assert!(!assign::<u128, _>(u128::MAX));
        assert!(assign::<i128, _>(u128::MAX));
        assert!(assign::<u128, _>(i128::MIN));
        assert!(!assign::<i128, _>(i64::MIN));
    }

    #[test]
    fn test_scenarios_i8() {
        assert!(sum(127i8, 1i8));
        assert!(!sum(127i8, -1i8));
        assert!(sub(-128i8, 1i8));
        assert!(mul(10i8, 13i8));
        assert!(!mul(10i8, 12i8));
    }

    #[test]
    fn test_sum_exhaustive_i8_matches_exact_result() {
        for lhs in i8::MIN..=i8::MAX {
            for rhs in i8::MIN..=i8::MAX {
                let expected = if rhs == i8::MIN {
                    true
                } else {
                    !fits::<i8>(lhs as i128 + rhs as i128)
                };
                assert_eq!(sum(lhs, rhs), expected, "{lhs} + {rhs}");
            }
        }
    }

    #[test]
    fn test_sum_reports_unnegatable_min_operand() {
        // 0 + (-128) fits in i16 but the operand cannot be negated in i8.
        assert!(sum(0i16, i8::MIN));
        assert!(!sum(0i16, i8::MIN + 1));
        assert!(sum(i64::MAX, i64::MIN));
    }

    #[test]
    fn test_sub_exhaustive_i8_and_u8() {
        for lhs in i8::MIN..=i8::MAX {
            for rhs in i8::MIN..=i8::MAX {
                let expected = !fits::<i8>(lhs as i128 - rhs as i128);
                assert_eq!(sub(lhs, rhs), expected, "{lhs} - {rhs}");
            }
        }
        for lhs in u8::MIN..=u8::MAX {
            for rhs in u8::MIN..=u8::MAX {
                let expected = !fits::<u8>(lhs as i128 - rhs as i128);
                assert_eq!(sub(lhs, rhs), expected, "{lhs} - {rhs}");
            }
        }
    }

    #[test]
    fn test_mul_exhaustive_i8_and_u8() {
        for lhs in i8::MIN..=i8::MAX {
            for rhs in i8::MIN..=i8::MAX {
                let expected = !fits::<i8>(lhs as i128 * rhs as i128);
                assert_eq!(mul(lhs, rhs), expected, "{lhs} * {rhs}");
            }
        }
        for lhs in u8::MIN..=u8::MAX {
            for rhs in u8::MIN..=u8::MAX {
                let expected = !fits::<u8>(lhs as i128 * rhs as i128);
                assert_eq!(mul(lhs, rhs), expected, "{lhs} * {rhs}");
            }
        }
    }

    #[test]
    fn test_mul_by_zero_never_overflows() {
        assert!(!mul(i8::MIN, 0i8));
        assert!(!mul(0i8, i8::MIN));
        assert!(!mul(i128::MIN, 0u128));
        assert!(!mul(0u128, i128::MIN));
        assert!(!mul(u128::MAX, 0i8));
    }

    #[test]
    fn test_mul_min_by_minus_one() {
        assert!(mul(i8::MIN, -1i8));
        assert!(mul(-1i8, i8::MIN));
        assert!(mul(i64::MIN, -1i64));
        assert!(mul(i128::MIN, -1i128));
    }

    #[test]
    fn test_mul_conservative_blind_spot() {
        // (-1) * (-128) = 128 fits in i16, but -128 is i8::MIN.
        assert!(mul(-1i16, i8::MIN));
        assert!(!mul(-1i16, i8::MIN + 1));
        assert!(!mul(-1i16, -128i16));
    }

    #[test]
    fn test_mixed_signedness() {
        // Negative products never fit in unsigned targets.
        assert!(mul(1u8, -1i8));
        assert!(!mul(0u8, -1i8));
        // Unsigned operand beyond the signed target.
        assert!(sum(0i8, 200u8));
        assert!(!sum(-100i8, 200u8));
        assert!(sub(0u8, 1u64));
        assert!(!sub(255u8, 255u64));
        assert!(sum(u128::MAX, 1u8));
        assert!(!sum(u128::MAX, -1i8));
        assert!(sub(i128::MIN, u128::MAX));
        assert!(!sub(i128::MAX, 1u128));
    }

    #[test]
    fn test_div_never_reports() {
        assert!(!div(i8::MIN, -1i8));
        assert!(!div(i128::MIN, -1i128));
        assert!(!div(1u8, -1i8));
    }

    #[test]
    fn test_would_overflow_dispatch() {
        assert!(would_overflow(Operation::Assign, 0i8, 128u8));
        assert!(would_overflow(Operation::Add, 127i8, 1i8));
        assert!(would_overflow(Operation::Subtract, -128i8, 1i8));
        assert!(would_overflow(Operation::Multiply, 10i8, 13i8));
        assert!(!would_overflow(Operation::Divide, -128i8, -1i8));
    }

    fn check_random_pairs<L, R>(rng: &mut ChaCha8Rng, rounds: usize)
    where
        L: Integer + Into<i128>,
        R: Integer + Into<i128>,
        rand::distr::StandardUniform: rand::distr::Distribution<L> + rand::distr::Distribution<R>,
    {
        for _ in 0..rounds {
            let lhs: L = rng.random();
            let rhs: R = rng.random();
            let (a, b): (i128, i128) = (lhs.into(), rhs.into());

            let sum_expected = (R::SIGNED && rhs == R::MIN) || !fits::<L>(a + b);
            assert_eq!(sum(lhs, rhs), sum_expected, "{a} + {b} into {}", L::NAME);
            assert_eq!(sub(lhs, rhs), !fits::<L>(a - b), "{a} - {b} into {}", L::NAME);

            let min_pair = a < 0 && b < 0 && (lhs == L::MIN || rhs == R::MIN);
            let mul_expected = a != 0 && b != 0 && (min_pair || !fits::<L>(a * b));
            assert_eq!(mul(lhs, rhs), mul_expected, "{a} * {b} into {}", L::NAME);

            assert_eq!(assign::<L, R>(rhs), !fits::<L>(b), "{b} into {}", L::NAME);
        }
    }

    #[test]
    fn test_random_mixed_widths_match_exact_result() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        check_random_pairs::<i8, i16>(&mut rng, 20_000);
        check_random_pairs::<i16, i8>(&mut rng, 20_000);
        check_random_pairs::<u8, i32>(&mut rng, 20_000);
        check_random_pairs::<i32, u16>(&mut rng, 20_000);
        check_random_pairs::<i64, i32>(&mut rng, 20_000);
        check_random_pairs::<u32, i64>(&mut rng, 20_000);
        check_random_pairs::<i32, i64>(&mut rng, 20_000);
        check_random_pairs::<u16, u64>(&mut rng, 20_000);
    }

    #[test]
    fn test_random_small_operands_near_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20_000 {
            let lhs: i32 = if rng.random_bool(0.5) {
                i32::MAX - rng.random_range(0..1_000)
            } else {
                i32::MIN + rng.random_range(0..1_000)
            };
            let rhs: i16 = rng.random_range(-2_000..=2_000);
            let (a, b) = (lhs as i128, rhs as i128);
            assert_eq!(sum(lhs, rhs), !fits::<i32>(a + b), "{a} + {b}");
            assert_eq!(sub(lhs, rhs), !fits::<i32>(a - b), "{a} - {b}");
        }
    }
}
