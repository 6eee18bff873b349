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

//! # Overguard
//!
//! A fixed-width integer wrapper that detects and rejects operations which
//! would wrap or produce an out-of-range result. `CheckedInt<T>` mirrors a
//! primitive integer but surfaces an [`OverflowError`] instead of performing
//! any assignment or arithmetic the overflow predicates flag, and leaves its
//! value untouched when it does.
//!
//! ## Modules
//!
//! - `checked`: `CheckedInt<T>` with construction, assignment, compound
//!   arithmetic (`add`, `subtract`, `multiply`, `divide`), increment and
//!   decrement, complement, and the value-returning `sum`, `difference` and
//!   `product`.
//! - `operand`: The `Operand` trait, accepted on the right-hand side of every
//!   operation: any primitive integer or another `CheckedInt`, of any width.
//! - `ops`: Bitwise and shift operators (pass-through) and conversions to and
//!   from primitives.
//!
//! The stateless predicates and the promotion machinery live in
//! `overguard_core` and are re-exported here.
//!
//! ## Known gap
//!
//! Division overflow is not detected. `CheckedInt::<i32>::MIN.divide(-1)`
//! panics like native division rather than returning an error.
//!
//! ## Example
//!
//! ```rust
//! use overguard::CheckedInt;
//!
//! let mut x = CheckedInt::<i8>::new(10).unwrap();
//! assert!(x.multiply(13).is_err()); // 130 > i8::MAX
//! assert_eq!(x.get(), 10);
//! x.multiply(12).unwrap();
//! assert_eq!(x.get(), 120);
//! ```

pub mod checked;
pub mod operand;
pub mod ops;

pub use checked::CheckedInt;
pub use operand::Operand;
pub use overguard_core::{Integer, Operation, OverflowError, Wide, checks};
