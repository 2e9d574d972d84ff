//! Managed Engine
//!
//! Engine backed by the `malachite` crate. Storage is owned by
//! `malachite::Integer`, whose bitwise operators already follow infinite
//! two's complement semantics and whose right shift floors, so most
//! primitives are one-line delegations. This engine never fails.

use std::cmp::Ordering;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{FloorSqrt, Gcd, Pow, UnsignedAbs};
use malachite::base::num::logic::traits::{CountOnes, SignificantBits};
use malachite::{Integer, Natural};

use crate::engine::{algorithms, Engine};
use crate::error::{BigNumError, BigNumResult};

/// Big number storage using malachite's `Integer`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MalachiteInt {
    value: Integer,
}

impl MalachiteInt {
    /// Wrap an existing `Integer`
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Borrow the underlying `Integer`
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    fn wrap(value: Integer) -> BigNumResult<Self> {
        Ok(Self { value })
    }

    /// Absolute value of the non-negative end of the two's complement view:
    /// `v` itself when `v >= 0`, otherwise `!v`
    fn non_negative_view(&self) -> Natural {
        if self.value < 0 {
            (!&self.value).unsigned_abs()
        } else {
            (&self.value).unsigned_abs()
        }
    }
}

impl Engine for MalachiteInt {
    const NAME: &'static str = "malachite";

    fn from_i64(value: i64) -> BigNumResult<Self> {
        Self::wrap(Integer::from(value))
    }

    fn from_u64(value: u64) -> BigNumResult<Self> {
        Self::wrap(Integer::from(value))
    }

    fn duplicate(&self) -> BigNumResult<Self> {
        Ok(self.clone())
    }

    fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    fn signum(&self) -> i32 {
        if self.value < 0 {
            -1
        } else if self.value == 0 {
            0
        } else {
            1
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    fn magnitude_le_bytes(&self) -> Vec<u8> {
        let magnitude = (&self.value).unsigned_abs();
        let mut bytes = Vec::new();
        for limb in magnitude.to_limbs_asc() {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }

    fn from_magnitude_le_bytes(negative: bool, bytes: &[u8]) -> BigNumResult<Self> {
        let mut value = Integer::from(0);
        // Most significant chunk first; only the first one may be short.
        for chunk in bytes.chunks(8).rev() {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            value = (value << 64u64) + Integer::from(u64::from_le_bytes(word));
        }
        if negative {
            value = -value;
        }
        Self::wrap(value)
    }

    fn add(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(&self.value + &other.value)
    }

    fn sub(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(&self.value - &other.value)
    }

    fn mul(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(&self.value * &other.value)
    }

    fn div_rem(&self, divisor: &Self) -> BigNumResult<(Self, Self)> {
        if divisor.value == 0 {
            return Err(BigNumError::DivisionByZero);
        }
        // Integer division truncates; the remainder follows the dividend's sign.
        let quotient = &self.value / &divisor.value;
        let remainder = &self.value % &divisor.value;
        Ok((Self { value: quotient }, Self { value: remainder }))
    }

    fn neg(&self) -> BigNumResult<Self> {
        Self::wrap(-&self.value)
    }

    fn shl(&self, bits: u64) -> BigNumResult<Self> {
        Self::wrap(&self.value << bits)
    }

    fn shr(&self, bits: u64) -> BigNumResult<Self> {
        Self::wrap(&self.value >> bits)
    }

    fn and(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(&self.value & &other.value)
    }

    fn or(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(&self.value | &other.value)
    }

    fn xor(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(&self.value ^ &other.value)
    }

    fn not(&self) -> BigNumResult<Self> {
        Self::wrap(!&self.value)
    }

    fn bit_length(&self) -> u64 {
        (&self.non_negative_view()).significant_bits()
    }

    fn bit_count(&self) -> u64 {
        (&self.non_negative_view()).count_ones()
    }

    fn pow(&self, exponent: u32) -> BigNumResult<Self> {
        Self::wrap((&self.value).pow(u64::from(exponent)))
    }

    fn sqrt(&self) -> BigNumResult<Self> {
        if self.value < 0 {
            return Err(BigNumError::NegativeOperand);
        }
        Self::wrap((&self.value).floor_sqrt())
    }

    fn gcd(&self, other: &Self) -> BigNumResult<Self> {
        let a = (&self.value).unsigned_abs();
        let b = (&other.value).unsigned_abs();
        Self::wrap(Integer::from(a.gcd(b)))
    }

    fn to_radix_string(&self, radix: u32) -> BigNumResult<String> {
        if radix == 10 {
            Ok(self.value.to_string())
        } else {
            algorithms::to_radix_string(self, radix)
        }
    }

    fn from_radix_digits(negative: bool, digits: &str, radix: u32) -> BigNumResult<Self> {
        if radix != 10 {
            return algorithms::from_radix_digits(negative, digits, radix);
        }
        let magnitude = Integer::from_str(digits)
            .map_err(|_| BigNumError::parse(format!("invalid decimal digits \"{}\"", digits)))?;
        Self::wrap(if negative { -magnitude } else { magnitude })
    }
}
