//! Arithmetic Operations
//!
//! Pure operations: each takes its operands by reference and returns a new
//! [`BigNumber`]. Division truncates toward zero and the remainder follows
//! the sign of the dividend, so `a == (a / b) * b + a % b` for every `b != 0`.

use std::cmp::Ordering;

use crate::engine::Engine;
use crate::error::{BigNumError, BigNumResult};
use crate::value::BigNumber;

impl<E: Engine> BigNumber<E> {
    /// Add two big numbers: x + y
    pub fn add(&self, other: &Self) -> BigNumResult<Self> {
        self.value.add(&other.value).map(Self::wrap)
    }

    /// Subtract two big numbers: x - y
    pub fn subtract(&self, other: &Self) -> BigNumResult<Self> {
        self.value.sub(&other.value).map(Self::wrap)
    }

    /// Multiply two big numbers: x * y
    pub fn multiply(&self, other: &Self) -> BigNumResult<Self> {
        self.value.mul(&other.value).map(Self::wrap)
    }

    /// Truncating quotient: x / y
    pub fn divide(&self, other: &Self) -> BigNumResult<Self> {
        self.div_rem(other).map(|(quotient, _)| quotient)
    }

    /// Remainder with the sign of the dividend: x % y
    pub fn remainder(&self, other: &Self) -> BigNumResult<Self> {
        self.div_rem(other).map(|(_, remainder)| remainder)
    }

    /// Quotient and remainder in one pass
    pub fn div_rem(&self, other: &Self) -> BigNumResult<(Self, Self)> {
        if other.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        let (quotient, remainder) = self.value.div_rem(&other.value)?;
        Ok((Self::wrap(quotient), Self::wrap(remainder)))
    }

    /// -x
    pub fn negate(&self) -> BigNumResult<Self> {
        self.value.neg().map(Self::wrap)
    }

    /// |x|
    pub fn abs(&self) -> BigNumResult<Self> {
        self.value.abs().map(Self::wrap)
    }

    /// x + 1
    pub fn increment(&self) -> BigNumResult<Self> {
        self.add(&Self::one()?)
    }

    /// x - 1
    pub fn decrement(&self) -> BigNumResult<Self> {
        self.subtract(&Self::one()?)
    }

    /// Raise to a non-negative power; `x.pow(0) == 1` for every `x`, zero included
    pub fn pow(&self, exponent: i32) -> BigNumResult<Self> {
        let exponent = u32::try_from(exponent)
            .map_err(|_| BigNumError::NegativeExponent(i64::from(exponent)))?;
        self.value.pow(exponent).map(Self::wrap)
    }

    /// Floor of the square root; `r * r <= x < (r + 1) * (r + 1)`
    pub fn sqrt(&self) -> BigNumResult<Self> {
        if self.is_negative() {
            return Err(BigNumError::NegativeOperand);
        }
        self.value.sqrt().map(Self::wrap)
    }

    /// Floor of the base-`base` logarithm. Requires `x > 0` and `base >= 2`.
    ///
    /// The estimate `(bit_length - 1) / log2(base)` is within one of the
    /// answer; it is then corrected against exact powers of the base.
    pub fn log(&self, base: i32) -> BigNumResult<u64> {
        if !self.is_positive() {
            return Err(BigNumError::invalid_argument("logarithm of a non-positive value"));
        }
        if base < 2 {
            return Err(BigNumError::invalid_argument(format!(
                "logarithm base {} is below 2",
                base
            )));
        }
        let bits = self.bit_length();
        let guess = ((bits - 1) as f64 / f64::from(base).log2()).floor() as u64;
        let base_value = Self::from_i64(i64::from(base))?;
        let power_of = |n: u64| -> BigNumResult<Self> {
            let n = u32::try_from(n)
                .map_err(|_| BigNumError::invalid_argument("logarithm exponent exceeds 32 bits"))?;
            base_value.value.pow(n).map(Self::wrap)
        };

        let mut estimate = guess;
        while estimate > 0 && power_of(estimate)?.compare(self) == Ordering::Greater {
            estimate -= 1;
        }
        while power_of(estimate + 1)?.compare(self) != Ordering::Greater {
            estimate += 1;
        }
        if estimate != guess {
            log::trace!("log{}: estimate {} corrected to {}", base, guess, estimate);
        }
        Ok(estimate)
    }

    /// Greatest common divisor of the absolute values; never negative
    pub fn gcd(&self, other: &Self) -> BigNumResult<Self> {
        self.value.gcd(&other.value).map(Self::wrap)
    }

    /// Least common multiple `|x * y| / gcd(x, y)`; zero if either operand is zero
    pub fn lcm(&self, other: &Self) -> BigNumResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let divisor = self.gcd(other)?;
        // Divide first to keep the intermediate small.
        self.abs()?.divide(&divisor)?.multiply(&other.abs()?)
    }
}
