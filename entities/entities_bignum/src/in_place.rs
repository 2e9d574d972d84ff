//! In-Place Operations
//!
//! The only mutation entry points of a [`BigNumber`]. Each computes its
//! result into a temporary and swaps it into the receiver, so a failed
//! operation leaves the receiver exactly as it was and no reader can ever
//! see a half-updated value. `&mut self` gives the single-writer discipline
//! these operations require.

use crate::engine::Engine;
use crate::error::BigNumResult;
use crate::value::BigNumber;

impl<E: Engine> BigNumber<E> {
    fn replace_with(&mut self, mut result: Self) {
        self.value.exchange(&mut result.value);
    }

    /// x += y
    pub fn add_in_place(&mut self, other: &Self) -> BigNumResult<()> {
        let result = self.add(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// x -= y
    pub fn subtract_in_place(&mut self, other: &Self) -> BigNumResult<()> {
        let result = self.subtract(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// x *= y
    pub fn multiply_in_place(&mut self, other: &Self) -> BigNumResult<()> {
        let result = self.multiply(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// x /= y
    pub fn divide_in_place(&mut self, other: &Self) -> BigNumResult<()> {
        let result = self.divide(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// x %= y
    pub fn remainder_in_place(&mut self, other: &Self) -> BigNumResult<()> {
        let result = self.remainder(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// x += 1
    pub fn increment_in_place(&mut self) -> BigNumResult<()> {
        let result = self.increment()?;
        self.replace_with(result);
        Ok(())
    }

    /// x -= 1
    pub fn decrement_in_place(&mut self) -> BigNumResult<()> {
        let result = self.decrement()?;
        self.replace_with(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigNumError, BigNumber, MalachiteInt};

    type Big = BigNumber<MalachiteInt>;

    fn big(v: i64) -> Big {
        Big::from_i64(v).unwrap()
    }

    #[test]
    fn test_assign_sequence() {
        let mut a = big(4);
        let b = big(3);

        a.add_in_place(&b).unwrap();
        assert_eq!(a, big(7));
        a.subtract_in_place(&b).unwrap();
        assert_eq!(a, big(4));
        a.multiply_in_place(&b).unwrap();
        assert_eq!(a, big(12));
        a.divide_in_place(&b).unwrap();
        assert_eq!(a, big(4));
        a.remainder_in_place(&b).unwrap();
        assert_eq!(a, big(1));
    }

    #[test]
    fn test_increment_decrement_in_place() {
        let mut a = big(2);
        a.increment_in_place().unwrap();
        assert_eq!(a, big(3));
        a.decrement_in_place().unwrap();
        a.decrement_in_place().unwrap();
        assert_eq!(a, big(1));
    }

    #[test]
    fn test_failed_operation_leaves_receiver_untouched() {
        let mut a = big(42);
        assert_eq!(a.divide_in_place(&big(0)).unwrap_err(), BigNumError::DivisionByZero);
        assert_eq!(a, big(42));
        assert_eq!(a.remainder_in_place(&big(0)).unwrap_err(), BigNumError::DivisionByZero);
        assert_eq!(a, big(42));
    }

    #[test]
    fn test_self_referencing_operand_via_clone() {
        let mut a = big(9);
        let copy = a.clone();
        a.multiply_in_place(&copy).unwrap();
        assert_eq!(a, big(81));
    }
}
