//! Bitwise Operations
//!
//! Bitwise operations act on the infinite two's complement view: a negative
//! number behaves as if extended leftward by an unbounded run of 1-bits.

use crate::engine::Engine;
use crate::error::BigNumResult;
use crate::value::BigNumber;

impl<E: Engine> BigNumber<E> {
    /// Bitwise AND: x & y
    pub fn and(&self, other: &Self) -> BigNumResult<Self> {
        self.value.and(&other.value).map(Self::wrap)
    }

    /// Bitwise OR: x | y
    pub fn or(&self, other: &Self) -> BigNumResult<Self> {
        self.value.or(&other.value).map(Self::wrap)
    }

    /// Bitwise XOR: x ^ y
    pub fn xor(&self, other: &Self) -> BigNumResult<Self> {
        self.value.xor(&other.value).map(Self::wrap)
    }

    /// Bitwise NOT, equal to `-x - 1`
    pub fn not(&self) -> BigNumResult<Self> {
        self.value.not().map(Self::wrap)
    }

    /// `x * 2^n`; a negative `n` shifts right instead
    pub fn shift_left(&self, n: i64) -> BigNumResult<Self> {
        if n >= 0 {
            self.value.shl(n.unsigned_abs()).map(Self::wrap)
        } else {
            self.value.shr(n.unsigned_abs()).map(Self::wrap)
        }
    }

    /// `floor(x / 2^n)`; a negative `n` shifts left instead
    pub fn shift_right(&self, n: i64) -> BigNumResult<Self> {
        if n >= 0 {
            self.value.shr(n.unsigned_abs()).map(Self::wrap)
        } else {
            self.value.shl(n.unsigned_abs()).map(Self::wrap)
        }
    }

    /// Bits in the minimal two's complement form, excluding the sign bit
    pub fn bit_length(&self) -> u64 {
        self.value.bit_length()
    }

    /// Bits that differ from the sign bit in the minimal two's complement form
    pub fn bit_count(&self) -> u64 {
        self.value.bit_count()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigNumber, MalachiteInt};

    type Big = BigNumber<MalachiteInt>;

    fn big(v: i64) -> Big {
        Big::from_i64(v).unwrap()
    }

    #[test]
    fn test_bitwise_operations() {
        let a = big(0b1010);
        let b = big(0b1100);

        assert_eq!(a.and(&b).unwrap(), big(0b1000));
        assert_eq!(a.or(&b).unwrap(), big(0b1110));
        assert_eq!(a.xor(&b).unwrap(), big(0b0110));
    }

    #[test]
    fn test_bitwise_matches_fixed_width_twos_complement() {
        let values = [0i64, 1, -1, 5, -5, 255, -256, 1 << 40, -(1 << 40) - 3, i64::MIN, i64::MAX];
        for &x in &values {
            assert_eq!(big(x).not().unwrap(), big(!x));
            for &y in &values {
                assert_eq!(big(x).and(&big(y)).unwrap(), big(x & y), "{} & {}", x, y);
                assert_eq!(big(x).or(&big(y)).unwrap(), big(x | y), "{} | {}", x, y);
                assert_eq!(big(x).xor(&big(y)).unwrap(), big(x ^ y), "{} ^ {}", x, y);
            }
        }
    }

    #[test]
    fn test_wide_operands() {
        let string = Big::parse("9223372036854775808").unwrap();
        let long = big(2147483648);
        assert_eq!(string.and(&long).unwrap(), big(0));
        assert_eq!(string.or(&long).unwrap(), Big::parse("9223372039002259456").unwrap());
        assert_eq!(string.xor(&long).unwrap(), Big::parse("9223372039002259456").unwrap());
        // -2^64 & (2^64 + 5) keeps only bit 64
        let neg = Big::parse("-18446744073709551616").unwrap();
        let pos = Big::parse("18446744073709551621").unwrap();
        assert_eq!(neg.and(&pos).unwrap(), Big::parse("18446744073709551616").unwrap());
    }

    #[test]
    fn test_not_is_negate_minus_one() {
        let long = big(2147483648);
        assert_eq!(long.not().unwrap(), big(-2147483649));
        assert_eq!(long.not().unwrap().negate().unwrap(), big(2147483649));
        assert_eq!(big(0).not().unwrap(), big(-1));
    }

    #[test]
    fn test_shift_operations() {
        assert_eq!(big(1073741824).shift_right(1).unwrap(), big(536870912));
        assert_eq!(big(1073741824).shift_left(2).unwrap(), big(4294967296));
        assert_eq!(big(2147483648).shift_left(2).unwrap(), big(8589934592));
        assert_eq!(big(10).shift_left(-1).unwrap(), big(5));
        assert_eq!(big(10).shift_right(-2).unwrap(), big(40));
    }

    #[test]
    fn test_shift_right_floors_negatives() {
        assert_eq!(big(-1).shift_right(1).unwrap(), big(-1));
        assert_eq!(big(-7).shift_right(1).unwrap(), big(-4));
        assert_eq!(big(-8).shift_right(2).unwrap(), big(-2));
        assert_eq!(big(-9).shift_right(2).unwrap(), big(-3));
        assert_eq!(big(-5).shift_right(200).unwrap(), big(-1));
        assert_eq!(big(5).shift_right(200).unwrap(), big(0));
    }

    #[test]
    fn test_bit_length_and_count() {
        assert_eq!(big(1024).bit_length(), 11);
        assert_eq!(big(1024).bit_count(), 1);
        assert_eq!(big(-1024).bit_length(), 10);
        assert_eq!(big(-1024).bit_count(), 10);
        assert_eq!(big(0).bit_length(), 0);
        assert_eq!(big(0).bit_count(), 0);
        assert_eq!(big(-1).bit_length(), 0);
        assert_eq!(big(-1).bit_count(), 0);
        assert_eq!(big(i64::MIN).bit_length(), 63);
        assert_eq!(big(255).bit_count(), 8);
    }
}
