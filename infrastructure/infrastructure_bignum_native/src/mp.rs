//! Multi-Precision Integers in Unmanaged Buffers
//!
//! [`MpInt`] is a sign plus a magnitude held in a [`LimbBuffer`]. Every call
//! that needs storage allocates a fresh buffer for its result and reports
//! failure as a [`Status`]. Intermediate buffers are ordinary owned locals,
//! so an early return on any status releases them before the error
//! propagates.
//!
//! Canonical form: no high zero limbs, and zero is never negative.

use std::cmp::Ordering;

use crate::buffer::LimbBuffer;
use crate::status::Status;

const LIMB_BITS: u64 = 32;

/// Sign-magnitude integer over an owned limb buffer
#[derive(Debug)]
pub struct MpInt {
    negative: bool,
    digits: LimbBuffer,
}

// ---------------------------------------------------------------------------
// Magnitude helpers (least significant limb first, trimmed inputs)
// ---------------------------------------------------------------------------

fn cmp_mag(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_mag(a: &[u32], b: &[u32]) -> Result<LimbBuffer, Status> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = LimbBuffer::zeroed(long.len() + 1)?;
    let limbs = out.as_mut_slice();
    let mut carry = 0u64;
    for i in 0..long.len() {
        let sum = u64::from(long[i]) + u64::from(short.get(i).copied().unwrap_or(0)) + carry;
        limbs[i] = sum as u32;
        carry = sum >> LIMB_BITS;
    }
    limbs[long.len()] = carry as u32;
    out.trim();
    Ok(out)
}

/// `a - b`, requiring `a >= b`
fn sub_mag(a: &[u32], b: &[u32]) -> Result<LimbBuffer, Status> {
    let mut out = LimbBuffer::zeroed(a.len())?;
    let limbs = out.as_mut_slice();
    let mut borrow = false;
    for i in 0..a.len() {
        let (diff, under1) = a[i].overflowing_sub(b.get(i).copied().unwrap_or(0));
        let (diff, under2) = diff.overflowing_sub(borrow as u32);
        limbs[i] = diff;
        borrow = under1 || under2;
    }
    out.trim();
    Ok(out)
}

fn mul_mag(a: &[u32], b: &[u32]) -> Result<LimbBuffer, Status> {
    if a.is_empty() || b.is_empty() {
        return LimbBuffer::zeroed(0);
    }
    let mut out = LimbBuffer::zeroed(a.len() + b.len())?;
    let limbs = out.as_mut_slice();
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let t = u64::from(limbs[i + j]) + u64::from(x) * u64::from(y) + carry;
            limbs[i + j] = t as u32;
            carry = t >> LIMB_BITS;
        }
        limbs[i + b.len()] = carry as u32;
    }
    out.trim();
    Ok(out)
}

/// Quotient and remainder of a magnitude by a single nonzero limb
fn divrem_limb(a: &[u32], d: u32) -> Result<(LimbBuffer, u32), Status> {
    let mut quotient = LimbBuffer::zeroed(a.len())?;
    let limbs = quotient.as_mut_slice();
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = (rem << LIMB_BITS) | u64::from(a[i]);
        limbs[i] = (cur / u64::from(d)) as u32;
        rem = cur % u64::from(d);
    }
    quotient.trim();
    Ok((quotient, rem as u32))
}

/// Shift-subtract long division on magnitudes; `b` must be nonzero
fn divrem_mag(a: &[u32], b: &[u32]) -> Result<(LimbBuffer, LimbBuffer), Status> {
    if cmp_mag(a, b) == Ordering::Less {
        return Ok((LimbBuffer::zeroed(0)?, LimbBuffer::from_limbs(a)?));
    }
    if b.len() == 1 {
        let (quotient, rem) = divrem_limb(a, b[0])?;
        return Ok((quotient, LimbBuffer::from_limbs(&[rem])?));
    }

    let mut quotient = LimbBuffer::zeroed(a.len())?;
    // One spare limb absorbs the bit shifted in before each comparison.
    let mut rem = LimbBuffer::zeroed(b.len() + 1)?;
    {
        let q = quotient.as_mut_slice();
        let r = rem.as_mut_slice();
        for bit in (0..a.len() as u64 * LIMB_BITS).rev() {
            let incoming = (a[(bit / LIMB_BITS) as usize] >> (bit % LIMB_BITS)) & 1;
            shl1_in_place(r, incoming);
            if r[b.len()] != 0 || cmp_mag_fixed(&r[..b.len()], b) != Ordering::Less {
                sub_in_place(r, b);
                q[(bit / LIMB_BITS) as usize] |= 1 << (bit % LIMB_BITS);
            }
        }
    }
    quotient.trim();
    rem.trim();
    Ok((quotient, rem))
}

/// Compare equal-length limb slices, most significant first
fn cmp_mag_fixed(a: &[u32], b: &[u32]) -> Ordering {
    a.iter().rev().cmp(b.iter().rev())
}

fn shl1_in_place(limbs: &mut [u32], incoming: u32) {
    let mut carry = incoming;
    for limb in limbs.iter_mut() {
        let next = *limb >> 31;
        *limb = (*limb << 1) | carry;
        carry = next;
    }
}

/// `a -= b` over `a`'s full width; `a >= b` required
fn sub_in_place(a: &mut [u32], b: &[u32]) {
    let mut borrow = false;
    for i in 0..a.len() {
        let (diff, under1) = a[i].overflowing_sub(b.get(i).copied().unwrap_or(0));
        let (diff, under2) = diff.overflowing_sub(borrow as u32);
        a[i] = diff;
        borrow = under1 || under2;
    }
}

fn limb_shift(bits: u64) -> Result<(usize, u32), Status> {
    let limbs = usize::try_from(bits / LIMB_BITS).map_err(|_| Status::Max)?;
    Ok((limbs, (bits % LIMB_BITS) as u32))
}

fn shl_mag(a: &[u32], bits: u64) -> Result<LimbBuffer, Status> {
    if a.is_empty() {
        return LimbBuffer::zeroed(0);
    }
    let (whole, part) = limb_shift(bits)?;
    let len = a
        .len()
        .checked_add(whole)
        .and_then(|n| n.checked_add(1))
        .ok_or(Status::Max)?;
    let mut out = LimbBuffer::zeroed(len)?;
    let limbs = out.as_mut_slice();
    for (i, &limb) in a.iter().enumerate() {
        let wide = u64::from(limb) << part;
        limbs[i + whole] |= wide as u32;
        limbs[i + whole + 1] |= (wide >> LIMB_BITS) as u32;
    }
    out.trim();
    Ok(out)
}

/// Shift right, also reporting whether any nonzero bit was discarded
fn shr_mag(a: &[u32], bits: u64) -> Result<(LimbBuffer, bool), Status> {
    let (whole, part) = match limb_shift(bits) {
        Ok(shift) if shift.0 < a.len() => shift,
        _ => return Ok((LimbBuffer::zeroed(0)?, !a.is_empty())),
    };
    let lost_whole = a[..whole].iter().any(|&limb| limb != 0);
    let lost_part = part > 0 && a[whole] & ((1u32 << part) - 1) != 0;

    let mut out = LimbBuffer::zeroed(a.len() - whole)?;
    let limbs = out.as_mut_slice();
    for i in 0..limbs.len() {
        let low = u64::from(a[i + whole]);
        let high = u64::from(a.get(i + whole + 1).copied().unwrap_or(0));
        limbs[i] = (((high << LIMB_BITS) | low) >> part) as u32;
    }
    out.trim();
    Ok((out, lost_whole || lost_part))
}

/// Two's complement image of a sign-magnitude value over exactly `width` limbs
fn to_twos(negative: bool, magnitude: &[u32], width: usize) -> Result<LimbBuffer, Status> {
    let mut out = LimbBuffer::zeroed(width)?;
    let limbs = out.as_mut_slice();
    limbs[..magnitude.len()].copy_from_slice(magnitude);
    if negative {
        negate_twos_in_place(limbs);
    }
    Ok(out)
}

fn negate_twos_in_place(limbs: &mut [u32]) {
    let mut carry = true;
    for limb in limbs.iter_mut() {
        let (sum, overflow) = (!*limb).overflowing_add(carry as u32);
        *limb = sum;
        carry = overflow;
    }
}

// ---------------------------------------------------------------------------
// Signed integers
// ---------------------------------------------------------------------------

impl MpInt {
    fn from_parts(negative: bool, digits: LimbBuffer) -> Self {
        let negative = negative && !digits.is_empty();
        Self { negative, digits }
    }

    /// Zero
    pub fn zero() -> Result<Self, Status> {
        Ok(Self::from_parts(false, LimbBuffer::zeroed(0)?))
    }

    /// From an unsigned machine integer
    pub fn from_u64(value: u64) -> Result<Self, Status> {
        Self::from_sign_u64(false, value)
    }

    /// From a signed machine integer
    pub fn from_i64(value: i64) -> Result<Self, Status> {
        Self::from_sign_u64(value < 0, value.unsigned_abs())
    }

    fn from_sign_u64(negative: bool, magnitude: u64) -> Result<Self, Status> {
        let digits = LimbBuffer::from_limbs(&[magnitude as u32, (magnitude >> LIMB_BITS) as u32])?;
        Ok(Self::from_parts(negative, digits))
    }

    /// From a sign and little-endian magnitude bytes
    pub fn from_le_bytes(negative: bool, bytes: &[u8]) -> Result<Self, Status> {
        let mut digits = LimbBuffer::zeroed(bytes.len().div_ceil(4))?;
        let limbs = digits.as_mut_slice();
        for (i, &byte) in bytes.iter().enumerate() {
            limbs[i / 4] |= u32::from(byte) << (8 * (i % 4));
        }
        digits.trim();
        Ok(Self::from_parts(negative, digits))
    }

    /// Little-endian magnitude bytes without high zero bytes
    pub fn le_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .digits
            .as_slice()
            .iter()
            .flat_map(|limb| limb.to_le_bytes())
            .collect();
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }

    /// Copy into a fresh buffer, subject to the allocation limits
    pub fn duplicate(&self) -> Result<Self, Status> {
        Ok(Self::from_parts(self.negative, LimbBuffer::from_limbs(self.digits.as_slice())?))
    }

    /// Copy that bypasses the allocation budget
    pub(crate) fn copy_unbudgeted(&self) -> Self {
        Self::from_parts(self.negative, self.digits.copy_unbudgeted())
    }

    /// Magnitude limbs, least significant first
    pub fn limbs(&self) -> &[u32] {
        self.digits.as_slice()
    }

    /// `-1`, `0` or `1`
    pub fn signum(&self) -> i32 {
        if self.digits.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Exact `u64` magnitude, if it fits
    fn magnitude_u64(&self) -> Option<u64> {
        match self.limbs() {
            [] => Some(0),
            [low] => Some(u64::from(*low)),
            [low, high] => Some(u64::from(*low) | (u64::from(*high) << LIMB_BITS)),
            _ => None,
        }
    }

    /// Exact `i64`, if it fits
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude_u64()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Exact `u64`, if non-negative and it fits
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            None
        } else {
            self.magnitude_u64()
        }
    }

    /// Signed comparison
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_mag(self.limbs(), other.limbs()),
            (true, true) => cmp_mag(other.limbs(), self.limbs()),
        }
    }

    fn add_signed(a_neg: bool, a: &[u32], b_neg: bool, b: &[u32]) -> Result<Self, Status> {
        if a_neg == b_neg {
            return Ok(Self::from_parts(a_neg, add_mag(a, b)?));
        }
        match cmp_mag(a, b) {
            Ordering::Less => Ok(Self::from_parts(b_neg, sub_mag(b, a)?)),
            _ => Ok(Self::from_parts(a_neg, sub_mag(a, b)?)),
        }
    }

    /// `self + other`
    pub fn add(&self, other: &Self) -> Result<Self, Status> {
        Self::add_signed(self.negative, self.limbs(), other.negative, other.limbs())
    }

    /// `self - other`
    pub fn sub(&self, other: &Self) -> Result<Self, Status> {
        Self::add_signed(self.negative, self.limbs(), !other.negative, other.limbs())
    }

    /// `self * other`
    pub fn mul(&self, other: &Self) -> Result<Self, Status> {
        let digits = mul_mag(self.limbs(), other.limbs())?;
        Ok(Self::from_parts(self.negative != other.negative, digits))
    }

    /// Truncating division; a zero divisor reports [`Status::Val`]
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Status> {
        if divisor.digits.is_empty() {
            return Err(Status::Val);
        }
        let (quotient, remainder) = divrem_mag(self.limbs(), divisor.limbs())?;
        Ok((
            Self::from_parts(self.negative != divisor.negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }

    /// `-self`
    pub fn neg(&self) -> Result<Self, Status> {
        Ok(Self::from_parts(!self.negative, LimbBuffer::from_limbs(self.limbs())?))
    }

    /// `self * 2^bits`
    pub fn shl(&self, bits: u64) -> Result<Self, Status> {
        Ok(Self::from_parts(self.negative, shl_mag(self.limbs(), bits)?))
    }

    /// `floor(self / 2^bits)`
    pub fn shr(&self, bits: u64) -> Result<Self, Status> {
        let (shifted, lost) = shr_mag(self.limbs(), bits)?;
        if self.negative && lost {
            // floor(-m / 2^n) == -(floor(m / 2^n) + 1) when bits were discarded
            let bumped = add_mag(shifted.as_slice(), &[1])?;
            return Ok(Self::from_parts(true, bumped));
        }
        Ok(Self::from_parts(self.negative, shifted))
    }

    fn bitwise(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Result<Self, Status> {
        // One extra limb keeps each operand's sign extension visible.
        let width = self.limbs().len().max(other.limbs().len()) + 1;
        let a = to_twos(self.negative, self.limbs(), width)?;
        let mut out = to_twos(other.negative, other.limbs(), width)?;
        for (limb, &x) in out.as_mut_slice().iter_mut().zip(a.as_slice()) {
            *limb = op(x, *limb);
        }
        let negative = out.as_slice()[width - 1] >> 31 == 1;
        if negative {
            negate_twos_in_place(out.as_mut_slice());
        }
        out.trim();
        Ok(Self::from_parts(negative, out))
    }

    /// Bitwise AND over the infinite two's complement view
    pub fn and(&self, other: &Self) -> Result<Self, Status> {
        self.bitwise(other, |x, y| x & y)
    }

    /// Bitwise OR over the infinite two's complement view
    pub fn or(&self, other: &Self) -> Result<Self, Status> {
        self.bitwise(other, |x, y| x | y)
    }

    /// Bitwise XOR over the infinite two's complement view
    pub fn xor(&self, other: &Self) -> Result<Self, Status> {
        self.bitwise(other, |x, y| x ^ y)
    }

    /// `-self - 1`
    pub fn complement(&self) -> Result<Self, Status> {
        Self::add_signed(!self.negative, self.limbs(), true, &[1])
    }

    fn magnitude_bits(&self) -> u64 {
        match self.limbs().last() {
            None => 0,
            Some(&top) => {
                (self.limbs().len() as u64 - 1) * LIMB_BITS + u64::from(LIMB_BITS as u32 - top.leading_zeros())
            }
        }
    }

    fn magnitude_is_power_of_two(&self) -> bool {
        match self.limbs().split_last() {
            Some((top, rest)) => top.is_power_of_two() && rest.iter().all(|&limb| limb == 0),
            None => false,
        }
    }

    /// Minimal two's complement width excluding the sign bit.
    ///
    /// For `-m` this is the width of `m - 1`, which only differs from the
    /// width of `m` when `m` is a power of two.
    pub fn bit_length(&self) -> u64 {
        let bits = self.magnitude_bits();
        if self.negative && self.magnitude_is_power_of_two() {
            bits - 1
        } else {
            bits
        }
    }

    /// Set bits of the value, or of `!value` when negative.
    ///
    /// For `-m` that is the popcount of `m - 1`: the lowest set bit of `m`
    /// clears and the trailing zeros below it become ones.
    pub fn bit_count(&self) -> u64 {
        let ones: u64 = self.limbs().iter().map(|limb| u64::from(limb.count_ones())).sum();
        if !self.negative {
            return ones;
        }
        let mut trailing = 0u64;
        for &limb in self.limbs() {
            if limb == 0 {
                trailing += LIMB_BITS;
            } else {
                trailing += u64::from(limb.trailing_zeros());
                break;
            }
        }
        ones - 1 + trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::live_buffers;

    fn mp(v: i64) -> MpInt {
        MpInt::from_i64(v).unwrap()
    }

    fn val(v: &MpInt) -> i128 {
        let magnitude = v
            .limbs()
            .iter()
            .rev()
            .fold(0i128, |acc, &limb| (acc << 32) | i128::from(limb));
        if v.signum() < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    const SAMPLES: [i64; 12] = [
        0,
        1,
        -1,
        7,
        -7,
        255,
        -256,
        4294967295,
        -4294967296,
        1 << 40,
        i64::MIN + 1,
        i64::MAX,
    ];

    #[test]
    fn test_canonical_zero() {
        let zero = mp(0);
        assert_eq!(zero.signum(), 0);
        assert!(zero.limbs().is_empty());
        let neg_zero = mp(5).sub(&mp(5)).unwrap();
        assert_eq!(neg_zero.signum(), 0);
        let from_bytes = MpInt::from_le_bytes(true, &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(from_bytes.signum(), 0);
        assert_eq!(from_bytes.compare(&zero), Ordering::Equal);
    }

    #[test]
    fn test_machine_conversions() {
        assert_eq!(mp(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(mp(i64::MAX).to_i64(), Some(i64::MAX));
        assert_eq!(MpInt::from_u64(u64::MAX).unwrap().to_i64(), None);
        assert_eq!(MpInt::from_u64(u64::MAX).unwrap().to_u64(), Some(u64::MAX));
        assert_eq!(mp(-1).to_u64(), None);
    }

    #[test]
    fn test_add_sub_mul_against_i128() {
        for &x in &SAMPLES {
            for &y in &SAMPLES {
                let (a, b) = (mp(x), mp(y));
                let (x, y) = (i128::from(x), i128::from(y));
                assert_eq!(val(&a.add(&b).unwrap()), x + y, "{} + {}", x, y);
                assert_eq!(val(&a.sub(&b).unwrap()), x - y, "{} - {}", x, y);
                assert_eq!(val(&a.mul(&b).unwrap()), x * y, "{} * {}", x, y);
            }
        }
    }

    #[test]
    fn test_div_rem_against_i128() {
        for &x in &SAMPLES {
            for &y in SAMPLES.iter().filter(|&&y| y != 0) {
                let (q, r) = mp(x).div_rem(&mp(y)).unwrap();
                let (x, y) = (i128::from(x), i128::from(y));
                assert_eq!(val(&q), x / y, "{} / {}", x, y);
                assert_eq!(val(&r), x % y, "{} % {}", x, y);
            }
        }
        assert_eq!(mp(1).div_rem(&mp(0)).unwrap_err(), Status::Val);
    }

    #[test]
    fn test_multi_limb_division() {
        // (2^96 + 12345) / (2^40 + 3)
        let a = MpInt::from_u64(1).unwrap().shl(96).unwrap().add(&mp(12345)).unwrap();
        let b = mp((1 << 40) + 3);
        let (q, r) = a.div_rem(&b).unwrap();
        let back = q.mul(&b).unwrap().add(&r).unwrap();
        assert_eq!(back.compare(&a), Ordering::Equal);
        assert_eq!(cmp_mag(r.limbs(), b.limbs()), Ordering::Less);
    }

    #[test]
    fn test_shifts_against_i128() {
        for &x in &SAMPLES {
            for bits in [0u64, 1, 5, 31, 32, 33, 64, 70] {
                let v = mp(x);
                assert_eq!(val(&v.shl(bits.min(60)).unwrap()), i128::from(x) << bits.min(60));
                assert_eq!(val(&v.shr(bits).unwrap()), i128::from(x) >> bits, "{} >> {}", x, bits);
            }
        }
    }

    #[test]
    fn test_bitwise_against_i64() {
        for &x in &SAMPLES {
            assert_eq!(val(&mp(x).complement().unwrap()), i128::from(!x));
            for &y in &SAMPLES {
                assert_eq!(val(&mp(x).and(&mp(y)).unwrap()), i128::from(x & y), "{} & {}", x, y);
                assert_eq!(val(&mp(x).or(&mp(y)).unwrap()), i128::from(x | y), "{} | {}", x, y);
                assert_eq!(val(&mp(x).xor(&mp(y)).unwrap()), i128::from(x ^ y), "{} ^ {}", x, y);
            }
        }
    }

    #[test]
    fn test_bit_metrics() {
        assert_eq!(mp(1024).bit_length(), 11);
        assert_eq!(mp(1024).bit_count(), 1);
        assert_eq!(mp(-1024).bit_length(), 10);
        assert_eq!(mp(-1024).bit_count(), 10);
        assert_eq!(mp(-1).bit_length(), 0);
        assert_eq!(mp(-1).bit_count(), 0);
        assert_eq!(mp(0).bit_length(), 0);
        for &x in &SAMPLES {
            let expected = if x < 0 { (!x).count_ones() } else { x.count_ones() };
            assert_eq!(mp(x).bit_count(), u64::from(expected), "bit_count({})", x);
            let expected = 64 - if x < 0 { (!x).leading_zeros() } else { x.leading_zeros() };
            assert_eq!(mp(x).bit_length(), u64::from(expected), "bit_length({})", x);
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let v = mp(-6021);
        assert_eq!(v.le_bytes(), vec![0x85, 0x17]);
        let back = MpInt::from_le_bytes(true, &v.le_bytes()).unwrap();
        assert_eq!(back.compare(&v), Ordering::Equal);
    }

    #[test]
    fn test_temporaries_released() {
        let baseline = live_buffers();
        {
            let a = mp(-123456789);
            let b = mp(987654321);
            let _ = a.and(&b).unwrap();
            let _ = a.mul(&b).unwrap().div_rem(&b).unwrap();
            let _ = a.shr(3).unwrap();
        }
        assert_eq!(live_buffers(), baseline);
    }
}
