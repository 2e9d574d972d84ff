//! Big Integer Facades
//!
//! Free functions named after the public operation surface: construction,
//! arithmetic, bitwise, comparison and conversion. Each one delegates to
//! the corresponding [`BigInt`](crate::BigInt) method.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use entities_bignum::BigNumResult;

use crate::BigInt;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Parse a decimal numeral with an optional leading sign
pub fn from_decimal_string(text: &str) -> BigNumResult<BigInt> {
    BigInt::parse(text)
}

pub fn from_int32(value: i32) -> BigNumResult<BigInt> {
    BigInt::from_i32(value)
}

pub fn from_int64(value: i64) -> BigNumResult<BigInt> {
    BigInt::from_i64(value)
}

/// Interpret big-endian two's complement bytes; empty input is zero
pub fn from_bytes(bytes: &[u8]) -> BigNumResult<BigInt> {
    BigInt::from_bytes(bytes)
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

pub fn add(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.add(b)
}

pub fn sub(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.subtract(b)
}

pub fn mul(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.multiply(b)
}

/// Quotient truncated toward zero
pub fn div(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.divide(b)
}

/// Remainder with the sign of the dividend
pub fn rem(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.remainder(b)
}

pub fn negate(v: &BigInt) -> BigNumResult<BigInt> {
    v.negate()
}

pub fn increment(v: &BigInt) -> BigNumResult<BigInt> {
    v.increment()
}

pub fn decrement(v: &BigInt) -> BigNumResult<BigInt> {
    v.decrement()
}

pub fn pow(v: &BigInt, exponent: i32) -> BigNumResult<BigInt> {
    v.pow(exponent)
}

pub fn sqrt(v: &BigInt) -> BigNumResult<BigInt> {
    v.sqrt()
}

pub fn log(v: &BigInt, base: i32) -> BigNumResult<u64> {
    v.log(base)
}

pub fn gcd(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.gcd(b)
}

pub fn lcm(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.lcm(b)
}

// In-place variants: on error the receiver keeps its previous value.

pub fn add_in_place(target: &mut BigInt, b: &BigInt) -> BigNumResult<()> {
    target.add_in_place(b)
}

pub fn sub_in_place(target: &mut BigInt, b: &BigInt) -> BigNumResult<()> {
    target.subtract_in_place(b)
}

pub fn mul_in_place(target: &mut BigInt, b: &BigInt) -> BigNumResult<()> {
    target.multiply_in_place(b)
}

pub fn div_in_place(target: &mut BigInt, b: &BigInt) -> BigNumResult<()> {
    target.divide_in_place(b)
}

pub fn rem_in_place(target: &mut BigInt, b: &BigInt) -> BigNumResult<()> {
    target.remainder_in_place(b)
}

// ---------------------------------------------------------------------------
// Bitwise
// ---------------------------------------------------------------------------

pub fn and(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.and(b)
}

pub fn or(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.or(b)
}

pub fn xor(a: &BigInt, b: &BigInt) -> BigNumResult<BigInt> {
    a.xor(b)
}

pub fn not(v: &BigInt) -> BigNumResult<BigInt> {
    v.not()
}

pub fn shl(v: &BigInt, n: i64) -> BigNumResult<BigInt> {
    v.shift_left(n)
}

/// Arithmetic shift, rounding toward negative infinity
pub fn shr(v: &BigInt, n: i64) -> BigNumResult<BigInt> {
    v.shift_right(n)
}

pub fn bit_length(v: &BigInt) -> u64 {
    v.bit_length()
}

pub fn bit_count(v: &BigInt) -> u64 {
    v.bit_count()
}

// ---------------------------------------------------------------------------
// Comparison and identity
// ---------------------------------------------------------------------------

pub fn compare(a: &BigInt, b: &BigInt) -> Ordering {
    a.compare(b)
}

pub fn equals(a: &BigInt, b: &BigInt) -> bool {
    a == b
}

/// Hash of the canonical form; equal values hash equally on any engine
pub fn hash(v: &BigInt) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Minimal big-endian two's complement bytes
pub fn to_bytes(v: &BigInt) -> Vec<u8> {
    v.to_bytes()
}

pub fn to_string(v: &BigInt, radix: u32) -> BigNumResult<String> {
    v.to_string_radix(radix)
}
