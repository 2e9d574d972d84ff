//! Engine Capability Set
//!
//! A big number engine is the storage and primitive arithmetic behind a
//! [`BigNumber`](crate::BigNumber). Two engines ship with the workspace:
//!
//! - [`MalachiteInt`](crate::MalachiteInt): managed storage via `malachite::Integer`
//! - `NativeInt` (in `infrastructure_bignum_native`): limbs in an unmanaged
//!   `libc` buffer with deterministic release
//!
//! Engines implement a small set of primitives. Everything else (powers,
//! roots, gcd, radix conversion) has a provided implementation built only on
//! those primitives, which an engine may replace with a faster native one.
//!
//! All values handed across this trait are canonical: zero has signum `0`,
//! and magnitudes carry no high zero digits.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{BigNumError, BigNumResult};

/// Primitive operations every big number engine provides
pub trait Engine: Sized + fmt::Debug {
    /// Short engine name, used in diagnostics
    const NAME: &'static str;

    /// Create a value from a signed machine integer
    fn from_i64(value: i64) -> BigNumResult<Self>;

    /// Create a value from an unsigned machine integer
    fn from_u64(value: u64) -> BigNumResult<Self>;

    /// Allocate an independent copy of the value
    fn duplicate(&self) -> BigNumResult<Self>;

    /// Exact conversion to `i64`, `None` if out of range
    fn to_i64(&self) -> Option<i64>;

    /// Exact conversion to `u64`, `None` if negative or out of range
    fn to_u64(&self) -> Option<u64>;

    /// `-1`, `0` or `1`
    fn signum(&self) -> i32;

    /// Signed comparison
    fn compare(&self, other: &Self) -> Ordering;

    /// Little-endian bytes of the absolute value, without high zero bytes.
    /// Zero yields an empty vector.
    fn magnitude_le_bytes(&self) -> Vec<u8>;

    /// Build a value from a sign and little-endian magnitude bytes.
    /// High zero bytes are permitted; `negative` is ignored for a zero magnitude.
    fn from_magnitude_le_bytes(negative: bool, bytes: &[u8]) -> BigNumResult<Self>;

    /// `self + other`
    fn add(&self, other: &Self) -> BigNumResult<Self>;

    /// `self - other`
    fn sub(&self, other: &Self) -> BigNumResult<Self>;

    /// `self * other`
    fn mul(&self, other: &Self) -> BigNumResult<Self>;

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The remainder takes the sign of the dividend. A zero divisor fails
    /// with [`BigNumError::DivisionByZero`].
    fn div_rem(&self, divisor: &Self) -> BigNumResult<(Self, Self)>;

    /// `-self`
    fn neg(&self) -> BigNumResult<Self>;

    /// `self * 2^bits`
    fn shl(&self, bits: u64) -> BigNumResult<Self>;

    /// `floor(self / 2^bits)`
    fn shr(&self, bits: u64) -> BigNumResult<Self>;

    /// Bitwise AND over the infinite two's complement view
    fn and(&self, other: &Self) -> BigNumResult<Self>;

    /// Bitwise OR over the infinite two's complement view
    fn or(&self, other: &Self) -> BigNumResult<Self>;

    /// Bitwise XOR over the infinite two's complement view
    fn xor(&self, other: &Self) -> BigNumResult<Self>;

    /// `-self - 1`
    fn not(&self) -> BigNumResult<Self>;

    /// Bits in the minimal two's complement form, excluding the sign bit
    fn bit_length(&self) -> u64;

    /// Set bits in the minimal two's complement form (clear bits for negatives)
    fn bit_count(&self) -> u64;

    /// `|self|`
    fn abs(&self) -> BigNumResult<Self> {
        if self.signum() < 0 {
            self.neg()
        } else {
            self.duplicate()
        }
    }

    /// `self^exponent`, with `x^0 == 1` for every `x`
    fn pow(&self, exponent: u32) -> BigNumResult<Self> {
        algorithms::pow(self, exponent)
    }

    /// Floor of the square root. Negative input fails with
    /// [`BigNumError::NegativeOperand`].
    fn sqrt(&self) -> BigNumResult<Self> {
        algorithms::sqrt(self)
    }

    /// Greatest common divisor of the absolute values
    fn gcd(&self, other: &Self) -> BigNumResult<Self> {
        algorithms::gcd(self, other)
    }

    /// Render in the given radix (already validated to lie in `2..=36`)
    fn to_radix_string(&self, radix: u32) -> BigNumResult<String> {
        algorithms::to_radix_string(self, radix)
    }

    /// Build a value from validated ASCII digits in the given radix
    fn from_radix_digits(negative: bool, digits: &str, radix: u32) -> BigNumResult<Self> {
        algorithms::from_radix_digits(negative, digits, radix)
    }

    /// Best-effort conversion to `f64`; values beyond the range become infinite
    fn to_f64(&self) -> f64 {
        self.to_radix_string(10)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }

    /// Swap contents with `other`. Never fails and never allocates.
    fn exchange(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

/// Engine-independent algorithms built on the [`Engine`] primitives.
///
/// These back the provided trait methods and stay callable from engines
/// that override a method only for some inputs.
pub mod algorithms {
    use super::*;

    /// Square-and-multiply exponentiation
    pub fn pow<E: Engine>(base: &E, exponent: u32) -> BigNumResult<E> {
        let mut result = E::from_i64(1)?;
        let mut square = base.duplicate()?;
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.mul(&square)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.mul(&square)?;
            }
        }
        Ok(result)
    }

    /// Newton iteration for the integer square root.
    ///
    /// Starts from `2^ceil(bits / 2)`, which is never below the root, so the
    /// sequence decreases monotonically to the floor.
    pub fn sqrt<E: Engine>(value: &E) -> BigNumResult<E> {
        if value.signum() < 0 {
            return Err(BigNumError::NegativeOperand);
        }
        let two = E::from_i64(2)?;
        if value.compare(&two) == Ordering::Less {
            return value.duplicate();
        }
        let mut estimate = E::from_i64(1)?.shl((value.bit_length() + 1) / 2)?;
        loop {
            let (quotient, _) = value.div_rem(&estimate)?;
            let next = estimate.add(&quotient)?.shr(1)?;
            if next.compare(&estimate) != Ordering::Less {
                return Ok(estimate);
            }
            estimate = next;
        }
    }

    /// Euclid's algorithm on absolute values; `gcd(0, x) == |x|`
    pub fn gcd<E: Engine>(a: &E, b: &E) -> BigNumResult<E> {
        let mut x = a.abs()?;
        let mut y = b.abs()?;
        while y.signum() != 0 {
            let (_, remainder) = x.div_rem(&y)?;
            x = y;
            y = remainder;
        }
        Ok(x)
    }

    /// Number of digits per chunk and the chunk divisor `radix^digits`,
    /// choosing the largest power of the radix that fits in 32 bits.
    pub fn radix_chunk(radix: u32) -> (usize, u64) {
        let radix = u64::from(radix);
        let mut digits = 1;
        let mut chunk = radix;
        while chunk * radix <= u64::from(u32::MAX) {
            chunk *= radix;
            digits += 1;
        }
        (digits, chunk)
    }

    /// Sign-magnitude rendering with lowercase digits
    pub fn to_radix_string<E: Engine>(value: &E, radix: u32) -> BigNumResult<String> {
        if value.signum() == 0 {
            return Ok("0".to_string());
        }
        let (chunk_digits, chunk) = radix_chunk(radix);
        let divisor = E::from_u64(chunk)?;
        let mut rest = value.abs()?;
        let mut chunks = Vec::new();
        while rest.signum() != 0 {
            let (quotient, remainder) = rest.div_rem(&divisor)?;
            let low = remainder.to_u64().ok_or_else(|| {
                BigNumError::invalid_argument("radix chunk exceeds 64 bits")
            })?;
            chunks.push(low);
            rest = quotient;
        }

        let mut out = String::with_capacity(chunks.len() * chunk_digits + 1);
        if value.signum() < 0 {
            out.push('-');
        }
        for (i, chunk) in chunks.iter().rev().enumerate() {
            let digits = render_chunk(*chunk, radix);
            if i > 0 {
                for _ in digits.len()..chunk_digits {
                    out.push('0');
                }
            }
            out.push_str(&digits);
        }
        Ok(out)
    }

    fn render_chunk(mut chunk: u64, radix: u32) -> String {
        if chunk == 0 {
            return "0".to_string();
        }
        let radix = u64::from(radix);
        let mut digits = Vec::new();
        while chunk > 0 {
            let digit = (chunk % radix) as u32;
            digits.push(std::char::from_digit(digit, radix as u32).unwrap_or('?'));
            chunk /= radix;
        }
        digits.iter().rev().collect()
    }

    /// Chunked multiply-add over the digit string, most significant first
    pub fn from_radix_digits<E: Engine>(
        negative: bool,
        digits: &str,
        radix: u32,
    ) -> BigNumResult<E> {
        let (chunk_digits, _) = radix_chunk(radix);
        let mut acc = E::from_i64(0)?;
        for piece in digits.as_bytes().chunks(chunk_digits) {
            let mut chunk: u64 = 0;
            let mut scale: u64 = 1;
            for &b in piece {
                let digit = (b as char)
                    .to_digit(radix)
                    .ok_or_else(|| BigNumError::parse(format!("invalid digit '{}'", b as char)))?;
                chunk = chunk * u64::from(radix) + u64::from(digit);
                scale *= u64::from(radix);
            }
            acc = acc.mul(&E::from_u64(scale)?)?.add(&E::from_u64(chunk)?)?;
        }
        if negative {
            acc.neg()
        } else {
            Ok(acc)
        }
    }
}
