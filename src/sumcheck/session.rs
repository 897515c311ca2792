//! Per-session protocol state shared in shape by prover and verifier

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::field::SumCheckField;

/// Challenges `r_1, r_2, ...` issued so far. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeVector<F: SumCheckField> {
    challenges: Vec<F>,
}

impl<F: SumCheckField> ChallengeVector<F> {
    pub fn with_capacity(num_vars: usize) -> Self {
        Self {
            challenges: Vec::with_capacity(num_vars),
        }
    }

    pub fn push(&mut self, challenge: F) {
        self.challenges.push(challenge);
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn last(&self) -> Option<&F> {
        self.challenges.last()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.challenges
    }
}

impl<F: SumCheckField> AsRef<[F]> for ChallengeVector<F> {
    fn as_ref(&self) -> &[F] {
        &self.challenges
    }
}

/// Everything exchanged in one completed session, in a form a host can
/// serialize and ship over its own transport
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SessionRecord<F: SumCheckField> {
    pub num_vars: u64,
    pub proposed_sum: F,
    /// `[g_j(0), g_j(1)]` for j = 1..v
    pub round_polynomials: Vec<Vec<F>>,
    pub challenges: Vec<F>,
}
