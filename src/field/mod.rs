//! Finite field arithmetic module
//!
//! The protocol only needs exact `+ − × ÷` over a prime field plus the
//! canonical embedding of small integers, which is what the univariate
//! evaluator uses to recognise interpolation nodes.

pub mod bls12_381;

pub use ark_ff::{Field as ArkField, PrimeField};
pub use ark_bls12_381::Fr as Bls12381Fr;

use crate::errors::{Result, SumCheckError};

/// Trait representing a prime field the sum-check protocol can run over
pub trait SumCheckField: ArkField + PrimeField {
    /// Generate a random field element
    fn random<R: rand::Rng>(rng: &mut R) -> Self;

    /// Canonical embedding of `index` into the field
    #[inline]
    fn from_index(index: usize) -> Self {
        Self::from(index as u64)
    }

    /// Returns `Some(i)` when this element is the integer `i` with `i < bound`.
    fn as_index_below(&self, bound: usize) -> Option<usize> {
        let repr = self.into_bigint();
        if repr >= Self::BigInt::from(bound as u64) {
            return None;
        }
        // below `bound`, so everything lives in the low limb
        Some(repr.as_ref()[0] as usize)
    }

    /// `self / rhs`, failing instead of panicking on a zero divisor
    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(SumCheckError::DivisionByZero);
        }
        rhs.inverse()
            .map(|inv| *self * inv)
            .ok_or(SumCheckError::DivisionByZero)
    }
}

/// Maps a hypercube coordinate to `0` or `1`
#[inline]
pub fn bit_to_field<F: SumCheckField>(bit: bool) -> F {
    if bit {
        F::one()
    } else {
        F::zero()
    }
}
