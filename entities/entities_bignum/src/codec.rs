//! Byte and Radix Codecs
//!
//! - Bytes: minimal big-endian two's complement, the same layout the JVM's
//!   `BigInteger.toByteArray` produces. Zero encodes as a single `0x00`;
//!   an empty input decodes to zero.
//! - Radix strings: bases 2 through 36, digits `0-9` then `a-z`, a leading
//!   `-` for negative values and no superfluous leading zeros.

use crate::engine::Engine;
use crate::error::{BigNumError, BigNumResult};
use crate::value::BigNumber;

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix
pub const MAX_RADIX: u32 = 36;

fn check_radix(radix: u32) -> BigNumResult<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(BigNumError::invalid_argument(format!(
            "radix {} outside {}..={}",
            radix, MIN_RADIX, MAX_RADIX
        )))
    }
}

/// Negate a big-endian byte string in place (invert, then add one)
fn twos_complement(bytes: &mut [u8]) {
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        let (sum, overflow) = (!*byte).overflowing_add(carry as u8);
        *byte = sum;
        carry = overflow;
    }
}

impl<E: Engine> BigNumber<E> {
    /// Minimal big-endian two's complement encoding
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::BigNumber;
    ///
    /// let n: BigNumber = BigNumber::from_i32(-6021).unwrap();
    /// assert_eq!(n.to_bytes(), vec![0xE8, 0x7B]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.value.magnitude_le_bytes();
        bytes.reverse();
        if bytes.is_empty() {
            return vec![0x00];
        }
        if self.is_negative() {
            twos_complement(&mut bytes);
            // Magnitudes just above a power of 256 lose the sign bit.
            if bytes[0] & 0x80 == 0 {
                bytes.insert(0, 0xFF);
            }
        } else if bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0x00);
        }
        bytes
    }

    /// Decode big-endian two's complement; an empty slice is zero
    pub fn from_bytes(bytes: &[u8]) -> BigNumResult<Self> {
        let Some(&first) = bytes.first() else {
            return Self::zero();
        };
        let negative = first & 0x80 != 0;
        let mut magnitude = bytes.to_vec();
        if negative {
            twos_complement(&mut magnitude);
        }
        magnitude.reverse();
        E::from_magnitude_le_bytes(negative, &magnitude).map(Self::wrap)
    }

    /// Render in the given radix
    pub fn to_string_radix(&self, radix: u32) -> BigNumResult<String> {
        check_radix(radix)?;
        self.value.to_radix_string(radix)
    }

    /// Parse a numeral in the given radix.
    ///
    /// Accepts one optional leading `+` or `-` followed by at least one digit
    /// valid for the radix (either letter case).
    pub fn parse_radix(text: &str, radix: u32) -> BigNumResult<Self> {
        check_radix(radix)?;
        if text.is_empty() {
            return Err(BigNumError::parse("empty string"));
        }
        let (negative, digits) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() {
            return Err(BigNumError::parse(format!("no digits after sign in \"{}\"", text)));
        }
        if let Some(bad) = digits.chars().find(|c| c.to_digit(radix).is_none()) {
            return Err(BigNumError::parse(format!(
                "invalid digit '{}' for radix {} in \"{}\"",
                bad, radix, text
            )));
        }
        let digits = digits.to_ascii_lowercase();
        E::from_radix_digits(negative, &digits, radix).map(Self::wrap)
    }
}
