//! Native Engine
//!
//! [`NativeInt`] plugs the unmanaged-buffer integers into
//! [`entities_bignum::Engine`]. Each call allocates its result through
//! [`MpInt`], and any non-success [`Status`](crate::Status) surfaces as
//! [`BigNumError::NativeOperationFailure`]. Division by zero is rejected
//! here, before the engine is asked to divide.

use std::cmp::Ordering;
use std::fmt;

use entities_bignum::{BigNumError, BigNumResult, Engine};

use crate::mp::MpInt;

/// Integer whose digits live in a `libc` buffer released on drop
pub struct NativeInt {
    inner: MpInt,
}

impl NativeInt {
    fn wrap(result: Result<MpInt, crate::Status>) -> BigNumResult<Self> {
        Ok(Self { inner: result? })
    }

    /// Underlying limb integer
    pub fn as_mp(&self) -> &MpInt {
        &self.inner
    }

    /// Budget-respecting copy; use this instead of `clone` when an
    /// allocation failure must be reported rather than abort
    pub fn try_clone(&self) -> BigNumResult<Self> {
        self.duplicate()
    }
}

impl Engine for NativeInt {
    const NAME: &'static str = "native";

    fn from_i64(value: i64) -> BigNumResult<Self> {
        Self::wrap(MpInt::from_i64(value))
    }

    fn from_u64(value: u64) -> BigNumResult<Self> {
        Self::wrap(MpInt::from_u64(value))
    }

    fn duplicate(&self) -> BigNumResult<Self> {
        Self::wrap(self.inner.duplicate())
    }

    fn to_i64(&self) -> Option<i64> {
        self.inner.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.inner.to_u64()
    }

    fn signum(&self) -> i32 {
        self.inner.signum()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.inner.compare(&other.inner)
    }

    fn magnitude_le_bytes(&self) -> Vec<u8> {
        self.inner.le_bytes()
    }

    fn from_magnitude_le_bytes(negative: bool, bytes: &[u8]) -> BigNumResult<Self> {
        Self::wrap(MpInt::from_le_bytes(negative, bytes))
    }

    fn add(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(self.inner.add(&other.inner))
    }

    fn sub(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(self.inner.sub(&other.inner))
    }

    fn mul(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(self.inner.mul(&other.inner))
    }

    fn div_rem(&self, divisor: &Self) -> BigNumResult<(Self, Self)> {
        if divisor.signum() == 0 {
            return Err(BigNumError::DivisionByZero);
        }
        let (quotient, remainder) = self.inner.div_rem(&divisor.inner)?;
        Ok((Self { inner: quotient }, Self { inner: remainder }))
    }

    fn neg(&self) -> BigNumResult<Self> {
        Self::wrap(self.inner.neg())
    }

    fn shl(&self, bits: u64) -> BigNumResult<Self> {
        Self::wrap(self.inner.shl(bits))
    }

    fn shr(&self, bits: u64) -> BigNumResult<Self> {
        Self::wrap(self.inner.shr(bits))
    }

    fn and(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(self.inner.and(&other.inner))
    }

    fn or(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(self.inner.or(&other.inner))
    }

    fn xor(&self, other: &Self) -> BigNumResult<Self> {
        Self::wrap(self.inner.xor(&other.inner))
    }

    fn not(&self) -> BigNumResult<Self> {
        Self::wrap(self.inner.complement())
    }

    fn bit_length(&self) -> u64 {
        self.inner.bit_length()
    }

    fn bit_count(&self) -> u64 {
        self.inner.bit_count()
    }
}

/// Copies outside the allocation budget. Aborts only if the system
/// allocator itself is exhausted.
impl Clone for NativeInt {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.copy_unbudgeted(),
        }
    }
}

impl PartialEq for NativeInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for NativeInt {}

impl fmt::Debug for NativeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signum() < 0 { "-" } else { "" };
        write!(f, "NativeInt({}{:?})", sign, self.inner.limbs().iter().rev().collect::<Vec<_>>())
    }
}
