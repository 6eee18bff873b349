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

//! # Overguard Core
//!
//! The stateless half of the overguard workspace: the integer capability
//! trait, the wide promotion used for mixed-width comparisons, the overflow
//! predicates, and the single error type surfaced when a predicate fires.
//!
//! ## Modules
//!
//! - `num`: `Integer` (bounds, sentinels, promotion and narrowing for every
//!   primitive integer) and `Wide` (the 256-bit promotion target).
//! - `checks`: Pure predicates `assign`, `sum`, `sub`, `mul` and `div`, plus
//!   the `would_overflow` dispatcher keyed by `Operation`.
//! - `error`: `Operation` and `OverflowError`.
//!
//! The predicates never perform the operation they check and never fail;
//! they can be called with any pair of values, including each type's
//! extremes.

pub mod checks;
pub mod error;
pub mod num;

pub use error::{Operation, OverflowError};
pub use num::{integer::Integer, wide::Wide};
