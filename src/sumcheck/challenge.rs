//! Sources of verifier challenges
//!
//! The verifier only needs values the prover cannot predict before it has
//! committed to a round polynomial. Every source sees each round message
//! through [`ChallengeSource::observe`] before the challenge for that round
//! is drawn, so transcript-bound sources can hash it in.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::num::NonZeroU64;

use ark_ff::BigInteger;
use blake2::Blake2b512;
use digest::{Digest, Output};
use rand::Rng;

use crate::errors::{Result, SumCheckError};
use crate::field::SumCheckField;

pub trait ChallengeSource<F: SumCheckField> {
    /// Absorb a round message sent by the prover
    fn observe(&mut self, _message: &[F]) {}

    /// Draw the next challenge
    fn next_challenge(&mut self) -> Result<F>;
}

impl<F: SumCheckField, C: ChallengeSource<F> + ?Sized> ChallengeSource<F> for &mut C {
    fn observe(&mut self, message: &[F]) {
        (**self).observe(message)
    }

    fn next_challenge(&mut self) -> Result<F> {
        (**self).next_challenge()
    }
}

/// Uniform field elements from a `rand` generator
#[derive(Clone, Debug)]
pub struct RngChallenger<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChallenger<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<F: SumCheckField, R: Rng> ChallengeSource<F> for RngChallenger<R> {
    fn next_challenge(&mut self) -> Result<F> {
        Ok(F::random(&mut self.rng))
    }
}

/// Challenges drawn from the integers `[0, bound)`.
///
/// A prover that guesses a challenge in advance can cheat, and from a small
/// range it guesses right with probability `1 / bound`. Only for demos and
/// tests that want readable numbers.
#[derive(Clone, Debug)]
pub struct SmallRangeChallenger<R: Rng> {
    rng: R,
    bound: NonZeroU64,
}

impl<R: Rng> SmallRangeChallenger<R> {
    pub fn new(rng: R, bound: NonZeroU64) -> Self {
        Self { rng, bound }
    }
}

impl<F: SumCheckField, R: Rng> ChallengeSource<F> for SmallRangeChallenger<R> {
    fn next_challenge(&mut self) -> Result<F> {
        Ok(F::from(self.rng.gen_range(0..self.bound.get())))
    }
}

/// Replays a fixed list of challenges
#[derive(Clone, Debug)]
pub struct FixedChallenges<F: SumCheckField> {
    remaining: VecDeque<F>,
    drawn: usize,
}

impl<F: SumCheckField> FixedChallenges<F> {
    pub fn new(challenges: impl IntoIterator<Item = F>) -> Self {
        Self {
            remaining: challenges.into_iter().collect(),
            drawn: 0,
        }
    }
}

impl<F: SumCheckField> ChallengeSource<F> for FixedChallenges<F> {
    fn next_challenge(&mut self) -> Result<F> {
        let challenge = self
            .remaining
            .pop_front()
            .ok_or(SumCheckError::ChallengesExhausted { drawn: self.drawn })?;
        self.drawn += 1;
        Ok(challenge)
    }
}

/// Blake2b transcript: every challenge is bound to all messages observed so far
#[derive(Clone)]
pub struct TranscriptChallenger<F: SumCheckField> {
    hasher: Blake2b512,
    _field: PhantomData<F>,
}

impl<F: SumCheckField> TranscriptChallenger<F> {
    pub fn new(domain_label: &[u8]) -> Self {
        let mut hasher = Blake2b512::default();
        hasher.update(domain_label);
        Self {
            hasher,
            _field: PhantomData,
        }
    }

    /// Bind public context (e.g. the claimed sum) before the first round
    pub fn append_scalar(&mut self, label: &[u8], x: &F) {
        self.append_bytes(label, &x.into_bigint().to_bytes_le());
    }

    fn append_bytes(&mut self, label: &[u8], bytes: &[u8]) {
        self.hasher.update(label);
        self.hasher.update((bytes.len() as u64).to_le_bytes());
        self.hasher.update(bytes);
    }
}

impl<F: SumCheckField> ChallengeSource<F> for TranscriptChallenger<F> {
    fn observe(&mut self, message: &[F]) {
        self.hasher.update(b"round_message");
        self.hasher.update((message.len() as u64).to_le_bytes());
        for x in message {
            self.append_scalar(b"eval", x);
        }
    }

    fn next_challenge(&mut self) -> Result<F> {
        self.hasher.update(b"challenge");
        let digest: Output<Blake2b512> = self.hasher.clone().finalize();
        let challenge = F::from_le_bytes_mod_order(&digest);
        self.hasher.update(&digest);
        Ok(challenge)
    }
}
