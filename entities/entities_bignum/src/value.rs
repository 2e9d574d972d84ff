//! Big Number Value
//!
//! [`BigNumber`] is the engine-independent arbitrary precision signed integer.
//! Every constructor normalizes to canonical form before returning, and every
//! operation produces a new value; the only mutation entry points live in
//! [`in_place`](crate::in_place).
//!
//! # Examples
//!
//! ```rust
//! use entities_bignum::BigNumber;
//!
//! let big: BigNumber = "9223372036854775808".parse().unwrap();
//! let sum = big.add(&BigNumber::from_i64(2147483648).unwrap()).unwrap();
//! assert_eq!(sum.to_string(), "9223372039002259456");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_traits::{FromPrimitive, ToPrimitive};

use crate::engine::Engine;
use crate::error::{BigNumError, BigNumResult};
use crate::malachite_engine::MalachiteInt;

/// Arbitrary precision signed integer over a chosen [`Engine`]
pub struct BigNumber<E: Engine = MalachiteInt> {
    pub(crate) value: E,
}

impl<E: Engine> BigNumber<E> {
    pub(crate) fn wrap(value: E) -> Self {
        Self { value }
    }

    /// Wrap a canonical engine value
    pub fn from_engine(value: E) -> Self {
        Self::wrap(value)
    }

    /// Borrow the engine value
    pub fn engine(&self) -> &E {
        &self.value
    }

    /// Take the engine value
    pub fn into_engine(self) -> E {
        self.value
    }

    /// Zero
    pub fn zero() -> BigNumResult<Self> {
        E::from_i64(0).map(Self::wrap)
    }

    /// One
    pub fn one() -> BigNumResult<Self> {
        E::from_i64(1).map(Self::wrap)
    }

    /// Create from a 32-bit signed integer
    pub fn from_i32(value: i32) -> BigNumResult<Self> {
        E::from_i64(i64::from(value)).map(Self::wrap)
    }

    /// Create from a 64-bit signed integer
    pub fn from_i64(value: i64) -> BigNumResult<Self> {
        E::from_i64(value).map(Self::wrap)
    }

    /// Create from a 64-bit unsigned integer
    pub fn from_u64(value: u64) -> BigNumResult<Self> {
        E::from_u64(value).map(Self::wrap)
    }

    /// Parse a decimal numeral with an optional leading sign
    pub fn parse(text: &str) -> BigNumResult<Self> {
        Self::parse_radix(text, 10)
    }

    /// Copy that respects engine allocation limits, unlike `clone`
    pub fn try_clone(&self) -> BigNumResult<Self> {
        self.value.duplicate().map(Self::wrap)
    }

    /// The sign of the value: `-1`, `0` or `1`
    pub fn sign(&self) -> i32 {
        self.value.signum()
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.sign() == 0
    }

    /// Check if the value is strictly negative
    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    /// Check if the value is strictly positive
    pub fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    /// Signed comparison
    pub fn compare(&self, other: &Self) -> Ordering {
        self.value.compare(&other.value)
    }
}

macro_rules! exact_narrowing {
    ($($name:ident => $target:ty),* $(,)?) => {
        $(
            #[doc = concat!("Exact conversion to `", stringify!($target), "`, failing with `NarrowingOverflow` when out of range")]
            pub fn $name(&self) -> BigNumResult<$target> {
                let overflow = BigNumError::NarrowingOverflow { target: stringify!($target) };
                if self.is_negative() {
                    let wide = self.value.to_i64().ok_or(overflow.clone())?;
                    <$target>::try_from(wide).map_err(|_| overflow)
                } else {
                    let wide = self.value.to_u64().ok_or(overflow.clone())?;
                    <$target>::try_from(wide).map_err(|_| overflow)
                }
            }
        )*
    };
}

/// Narrowing conversions.
///
/// Integral targets are exact or fail; floating-point targets are best effort
/// and saturate to infinity beyond their range.
impl<E: Engine> BigNumber<E> {
    exact_narrowing! {
        to_i8 => i8,
        to_i16 => i16,
        to_i32 => i32,
        to_i64 => i64,
        to_u8 => u8,
        to_u16 => u16,
        to_u32 => u32,
        to_u64 => u64,
    }

    /// Nearest `f64`
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    /// Nearest `f32`
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

impl<E: Engine> PartialEq for BigNumber<E> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<E: Engine> Eq for BigNumber<E> {}

impl<E: Engine> PartialOrd for BigNumber<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Engine> Ord for BigNumber<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Sign and canonical magnitude only, so equal values hash equally whatever
// engine or codec produced them.
impl<E: Engine> Hash for BigNumber<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        self.value.magnitude_le_bytes().hash(state);
    }
}

impl<E: Engine + Clone> Clone for BigNumber<E> {
    fn clone(&self) -> Self {
        Self::wrap(self.value.clone())
    }
}

impl<E: Engine> fmt::Display for BigNumber<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_string_radix(10).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), "", text.trim_start_matches('-'))
    }
}

impl<E: Engine> fmt::Debug for BigNumber<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_string_radix(10) {
            Ok(text) => write!(f, "BigNumber<{}>({})", E::NAME, text),
            Err(_) => write!(f, "BigNumber<{}>(<unavailable>)", E::NAME),
        }
    }
}

impl<E: Engine> FromStr for BigNumber<E> {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<E: Engine> ToPrimitive for BigNumber<E> {
    fn to_i64(&self) -> Option<i64> {
        BigNumber::to_i64(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        BigNumber::to_u64(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(BigNumber::to_f64(self))
    }
}

impl<E: Engine> FromPrimitive for BigNumber<E> {
    fn from_i64(n: i64) -> Option<Self> {
        BigNumber::from_i64(n).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        BigNumber::from_u64(n).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn big(v: i64) -> BigNumber {
        BigNumber::from_i64(v).unwrap()
    }

    fn hash_of(v: &BigNumber) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_big_number_creation() {
        let n = big(12345);
        assert!(n.is_positive());
        assert!(!n.is_zero());
        assert_eq!(n.sign(), 1);

        let negative = big(-12345);
        assert!(negative.is_negative());
        assert_eq!(negative.sign(), -1);

        assert!(BigNumber::<MalachiteInt>::zero().unwrap().is_zero());
        assert_eq!(BigNumber::<MalachiteInt>::one().unwrap(), big(1));
        assert_eq!(BigNumber::<MalachiteInt>::from_i32(-7).unwrap(), big(-7));
    }

    #[test]
    fn test_equality_and_hash_ignore_construction_path() {
        let from_text: BigNumber = "262146".parse().unwrap();
        let from_bytes = BigNumber::from_bytes(&[0x04, 0x00, 0x02]).unwrap();
        let from_int = big(262146);
        assert_eq!(from_text, from_int);
        assert_eq!(from_bytes, from_int);
        assert_eq!(hash_of(&from_text), hash_of(&from_int));
        assert_eq!(hash_of(&from_bytes), hash_of(&from_int));
        assert_ne!(hash_of(&big(5)), hash_of(&big(-5)));
    }

    #[test]
    fn test_comparison() {
        let a = big(100);
        let b = big(50);
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert_eq!(b.compare(&a), Ordering::Less);
        assert_eq!(a.compare(&big(100)), Ordering::Equal);
        assert!(big(-1) < big(0));
        assert_eq!(big(3).max(big(-3)), big(3));
    }

    #[test]
    fn test_narrowing_exact_or_error() {
        assert_eq!(big(127).to_i8().unwrap(), 127);
        assert_eq!(
            big(128).to_i8().unwrap_err(),
            BigNumError::NarrowingOverflow { target: "i8" }
        );
        assert_eq!(big(-128).to_i8().unwrap(), -128);
        assert_eq!(big(-1).to_u64().unwrap_err(), BigNumError::NarrowingOverflow { target: "u64" });
        assert_eq!(big(i64::MIN).to_i64().unwrap(), i64::MIN);
        assert_eq!(big(2147483648).to_i32().unwrap_err(), BigNumError::NarrowingOverflow { target: "i32" });
        assert_eq!(BigNumber::<MalachiteInt>::from_u64(u64::MAX).unwrap().to_u64().unwrap(), u64::MAX);
        assert!(BigNumber::<MalachiteInt>::from_u64(u64::MAX).unwrap().to_i64().is_err());
        assert_eq!(big(65535).to_u16().unwrap(), 65535);
    }

    #[test]
    fn test_float_narrowing_best_effort() {
        assert_eq!(big(2147483648).to_f64(), 2147483648.0);
        assert_eq!(big(-3).to_f32(), -3.0);
        let huge: BigNumber = format!("1{}", "0".repeat(400)).parse().unwrap();
        assert_eq!(huge.to_f64(), f64::INFINITY);
        assert_eq!(huge.negate().unwrap().to_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_num_traits_conversions() {
        assert_eq!(ToPrimitive::to_i32(&big(42)), Some(42));
        assert_eq!(ToPrimitive::to_u8(&big(-1)), None);
        let from: BigNumber = FromPrimitive::from_i64(-9).unwrap();
        assert_eq!(from, big(-9));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(big(-42).to_string(), "-42");
        assert_eq!(format!("{:>6}", big(-42)), "   -42");
        assert_eq!(format!("{:?}", big(7)), "BigNumber<malachite>(7)");
    }

    #[test]
    fn test_try_clone_is_independent() {
        let a = big(99);
        let mut b = a.try_clone().unwrap();
        b.increment_in_place().unwrap();
        assert_eq!(a, big(99));
        assert_eq!(b, big(100));
    }
}
