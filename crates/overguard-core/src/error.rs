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

use crate::num::{integer::Integer, wide::Wide};
use std::fmt;

/// The operation an overflow check is performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Storing a value into the target type (construction or assignment).
    Assign,
    /// Adding an operand to the stored value.
    Add,
    /// Subtracting an operand from the stored value.
    Subtract,
    /// Multiplying the stored value by an operand.
    Multiply,
    /// Dividing the stored value by an operand.
    Divide,
}

impl Operation {
    /// The operator symbol, as it appears in diagnostics.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Assign => "assignment",
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        };
        f.write_str(name)
    }
}

/// An operation was rejected because its result would not fit the target type.
///
/// The error carries the operation, the target type, and the operand values
/// promoted to [`Wide`] so that mixed-width operands are reported exactly.
/// For [`Operation::Assign`] there is no left-hand value.
///
/// # Examples
///
/// ```rust
/// # use overguard_core::error::{Operation, OverflowError};
///
/// let err = OverflowError::arithmetic::<i8, _>(Operation::Add, 127i8, 1i8);
/// assert_eq!(err.to_string(), "integer overflow in addition on i8: 127 + 1");
///
/// let err = OverflowError::assignment::<u8, _>(-1i32);
/// assert_eq!(err.to_string(), "integer overflow in assignment on u8: -1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "integer overflow in {operation} on {target}: {operands}",
    operands = Operands::new(.lhs, .operation, .rhs)
)]
pub struct OverflowError {
    operation: Operation,
    target: &'static str,
    lhs: Option<Wide>,
    rhs: Wide,
}

impl OverflowError {
    /// Creates the error for a value that does not fit into `T`.
    pub fn assignment<T, R>(value: R) -> Self
    where
        T: Integer,
        R: Integer,
    {
        Self {
            operation: Operation::Assign,
            target: T::NAME,
            lhs: None,
            rhs: value.widen(),
        }
    }

    /// Creates the error for `lhs <operation> rhs` not fitting into `T`.
    pub fn arithmetic<T, R>(operation: Operation, lhs: T, rhs: R) -> Self
    where
        T: Integer,
        R: Integer,
    {
        Self {
            operation,
            target: T::NAME,
            lhs: Some(lhs.widen()),
            rhs: rhs.widen(),
        }
    }

    /// The operation that was rejected.
    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The name of the type the result was meant to be stored in.
    #[inline]
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// The stored value the operation was applied to, if any.
    #[inline]
    pub fn lhs(&self) -> Option<Wide> {
        self.lhs
    }

    /// The operand that caused the overflow.
    #[inline]
    pub fn rhs(&self) -> Wide {
        self.rhs
    }
}

struct Operands {
    lhs: Option<Wide>,
    symbol: &'static str,
    rhs: Wide,
}

impl Operands {
    fn new(lhs: &Option<Wide>, operation: &Operation, rhs: &Wide) -> Self {
        Self {
            lhs: *lhs,
            symbol: operation.symbol(),
            rhs: *rhs,
        }
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lhs {
            Some(lhs) => write!(f, "{} {} {}", lhs, self.symbol, self.rhs),
            None => write!(f, "{}", self.rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display_and_symbol() {
        assert_eq!(Operation::Multiply.to_string(), "multiplication");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.to_string(), "division");
        assert_eq!(Operation::Assign.symbol(), "=");
    }

    #[test]
    fn test_arithmetic_error_fields() {
        let err = OverflowError::arithmetic::<i8, _>(Operation::Subtract, -128i8, 1u64);
        assert_eq!(err.operation(), Operation::Subtract);
        assert_eq!(err.target(), "i8");
        assert_eq!(err.lhs(), Some((-128i8).widen()));
        assert_eq!(err.rhs(), 1u64.widen());
        assert_eq!(
            err.to_string(),
            "integer overflow in subtraction on i8: -128 - 1"
        );
    }

    #[test]
    fn test_assignment_error_reports_wide_operand() {
        let err = OverflowError::assignment::<i64, _>(u128::MAX);
        assert_eq!(err.lhs(), None);
        assert_eq!(
            err.to_string(),
            format!("integer overflow in assignment on i64: {}", u128::MAX)
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&OverflowError::assignment::<u8, _>(256u16));
    }
}
