//! Big Number Errors
//!
//! Error taxonomy shared by every engine. All failures are deterministic
//! functions of the input, so none of them is ever retried internally.

use std::fmt;

/// Errors produced by big number construction, arithmetic and conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumError {
    /// Malformed numeral (empty input, bare sign, digit out of range for the radix)
    Parse(String),
    /// `divide` or `remainder` with a zero divisor
    DivisionByZero,
    /// `pow` with a negative exponent
    NegativeExponent(i64),
    /// `sqrt` of a negative value
    NegativeOperand,
    /// Argument outside the operation's domain (`log`, radix range)
    InvalidArgument(String),
    /// Narrowing conversion target cannot hold the value
    NarrowingOverflow {
        /// Name of the requested target type
        target: &'static str,
    },
    /// The unmanaged-buffer engine reported a non-success status
    NativeOperationFailure(String),
}

impl BigNumError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        BigNumError::Parse(reason.into())
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        BigNumError::InvalidArgument(reason.into())
    }
}

impl fmt::Display for BigNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumError::Parse(reason) => write!(f, "Invalid numeral: {}", reason),
            BigNumError::DivisionByZero => write!(f, "Division by zero"),
            BigNumError::NegativeExponent(n) => write!(f, "Negative exponent: {}", n),
            BigNumError::NegativeOperand => write!(f, "Negative operand"),
            BigNumError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
            BigNumError::NarrowingOverflow { target } => {
                write!(f, "Value does not fit in {}", target)
            }
            BigNumError::NativeOperationFailure(diagnostic) => {
                write!(f, "Native engine failure: {}", diagnostic)
            }
        }
    }
}

impl std::error::Error for BigNumError {}

/// Result alias used throughout the big number crates
pub type BigNumResult<T> = Result<T, BigNumError>;
