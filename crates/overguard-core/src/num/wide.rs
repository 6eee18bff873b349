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

//! # Wide Promotion
//!
//! `Wide` is the common representation every primitive integer is promoted to
//! before two operands of different widths or signedness meet in a comparison.
//! It is the signed 256-bit integer of `alloy-primitives`, so every value of
//! `i8..=i128`, `u8..=u128`, `isize` and `usize`, as well as every sum or
//! difference of two such values, is represented exactly. Conversions in and
//! out go through [`Integer::widen`](crate::num::integer::Integer::widen) and
//! [`Integer::narrow`](crate::num::integer::Integer::narrow).
//!
//! # Examples
//!
//! ```rust
//! # use overguard_core::num::{integer::Integer, wide::Wide};
//!
//! let big = u128::MAX.widen();
//! let small = i128::MIN.widen();
//! assert!(small < big);
//! assert_eq!(u128::narrow(big - small), None);
//! assert_eq!(i128::narrow(small + big), Some(i128::MAX));
//! assert_eq!(Wide::ONE, 1u8.widen());
//! ```

/// A 256-bit two's-complement integer used as the promotion target for
/// mixed-width overflow checks.
pub type Wide = alloy_primitives::I256;
