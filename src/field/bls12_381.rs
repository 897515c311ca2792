//! BLS12-381 scalar field implementation
//!
//! Wrapper around ark-bls12-381 scalar field (Fr)

use super::SumCheckField;
pub use ark_bls12_381::Fr;
use ark_std::UniformRand;

impl SumCheckField for Fr {
    fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }
}
