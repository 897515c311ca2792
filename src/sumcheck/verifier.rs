use std::sync::Arc;

use crate::errors::{Result, SumCheckError};
use crate::field::SumCheckField;
use crate::polynomial::{MultilinearExtension, UnivariateEvaluations};

use super::challenge::ChallengeSource;
use super::events::{EventSink, Events, ProtocolEvent};
use super::session::{ChallengeVector, SessionRecord};

/// Round polynomials are restrictions of a multilinear g, so degree ≤ 1
pub const MAX_ROUND_EVALUATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierState {
    /// Waiting for g_j, 1-based
    AwaitingRound(usize),
    AwaitingOracleQuery,
    /// Accepted
    Done,
    /// A consistency check failed; the session cannot continue
    Rejected,
}

/// Verifier for sum-check. Holds only the claimed sum, the round history and
/// the challenges it issued.
#[derive(Debug)]
pub struct Verifier<F: SumCheckField, C: ChallengeSource<F>> {
    proposed_sum: F,
    num_vars: usize,
    state: VerifierState,
    challenges: ChallengeVector<F>,
    round_polynomials: Vec<UnivariateEvaluations<F>>,
    challenger: C,
    events: Events<F>,
}

impl<F: SumCheckField, C: ChallengeSource<F>> Verifier<F, C> {
    pub fn new(proposed_sum: F, num_vars: usize, challenger: C) -> Self {
        let state = if num_vars == 0 {
            VerifierState::AwaitingOracleQuery
        } else {
            VerifierState::AwaitingRound(1)
        };
        // more rounds than bits in a usize can never reach the oracle query
        let capacity = num_vars.min(usize::BITS as usize);
        Self {
            proposed_sum,
            num_vars,
            state,
            challenges: ChallengeVector::with_capacity(capacity),
            round_polynomials: Vec::with_capacity(capacity),
            challenger,
            events: Events::default(),
        }
    }

    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink<F>>) -> Self {
        self.events.set_sink(sink);
        self
    }

    pub fn state(&self) -> VerifierState {
        self.state
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn proposed_sum(&self) -> F {
        self.proposed_sum
    }

    /// Challenges issued so far, r_1..r_j
    pub fn challenges(&self) -> &[F] {
        self.challenges.as_slice()
    }

    /// Accepted g_1..g_j
    pub fn round_polynomials(&self) -> &[UnivariateEvaluations<F>] {
        &self.round_polynomials
    }

    /// Check g_j and answer with the challenge r_j.
    ///
    /// Round 1 requires g_1(0) + g_1(1) to equal the proposed sum; round j > 1
    /// requires g_j(0) + g_j(1) = g_{j-1}(r_{j-1}).
    #[tracing::instrument(skip_all, name = "Verifier::verify_round_polynomial", fields(state = ?self.state))]
    pub fn verify_round_polynomial(&mut self, g_j: &[F]) -> Result<F> {
        let round = match self.state {
            VerifierState::AwaitingRound(round) => round,
            VerifierState::AwaitingOracleQuery | VerifierState::Done => {
                return Err(SumCheckError::TooManyRounds {
                    num_rounds: self.num_vars,
                })
            }
            VerifierState::Rejected => return Err(SumCheckError::SessionRejected),
        };
        let poly = UnivariateEvaluations::new(g_j.to_vec())?;
        if poly.degree_bound() >= MAX_ROUND_EVALUATIONS {
            return Err(self.reject(
                Some(round),
                SumCheckError::Degree {
                    round,
                    len: g_j.len(),
                    max: MAX_ROUND_EVALUATIONS,
                },
            ));
        }

        let sum = poly.sum_over_boolean()?;
        let expected = self.current_claim()?;
        if sum != expected {
            return Err(self.reject(
                Some(round),
                SumCheckError::SumMismatch {
                    round,
                    expected: expected.to_string(),
                    actual: sum.to_string(),
                },
            ));
        }

        self.challenger.observe(g_j);
        let challenge = self.challenger.next_challenge()?;
        self.challenges.push(challenge);
        self.round_polynomials.push(poly);
        self.state = if round == self.num_vars {
            VerifierState::AwaitingOracleQuery
        } else {
            VerifierState::AwaitingRound(round + 1)
        };
        self.events
            .emit(ProtocolEvent::RoundAccepted { round, challenge });
        Ok(challenge)
    }

    /// Final check: evaluate the multilinear extension of `g` at r = (r_1..r_v)
    /// and compare with g_v(r_v). Acceptance moves the session to `Done`.
    #[tracing::instrument(skip_all, name = "Verifier::verify_oracle_query", fields(num_vars = self.num_vars))]
    pub fn verify_oracle_query(&mut self, g: &[F]) -> Result<()> {
        match self.state {
            VerifierState::AwaitingOracleQuery => {}
            VerifierState::AwaitingRound(round) => {
                return Err(SumCheckError::IncompleteRounds {
                    expected: self.num_vars,
                    completed: round - 1,
                })
            }
            VerifierState::Done => return Err(SumCheckError::SessionFinished),
            VerifierState::Rejected => return Err(SumCheckError::SessionRejected),
        }

        let poly = MultilinearExtension::new(g.to_vec(), self.num_vars)?;
        let g_of_r = poly.evaluate(self.challenges.as_slice())?;
        let expected = self.current_claim()?;
        if g_of_r != expected {
            return Err(self.reject(
                None,
                SumCheckError::OracleMismatch {
                    expected: expected.to_string(),
                    actual: g_of_r.to_string(),
                },
            ));
        }

        self.state = VerifierState::Done;
        self.events
            .emit(ProtocolEvent::OracleAccepted { evaluation: g_of_r });
        Ok(())
    }

    /// What's been exchanged so far
    pub fn record(&self) -> SessionRecord<F> {
        SessionRecord {
            num_vars: self.num_vars as u64,
            proposed_sum: self.proposed_sum,
            round_polynomials: self
                .round_polynomials
                .iter()
                .map(|g_j| g_j.values().to_vec())
                .collect(),
            challenges: self.challenges.as_slice().to_vec(),
        }
    }

    /// The claim carried into the next check: the proposed sum before any
    /// round, g_j(r_j) after round j
    fn current_claim(&self) -> Result<F> {
        match (self.round_polynomials.last(), self.challenges.last()) {
            (Some(g_prev), Some(&r_prev)) => g_prev.evaluate(r_prev),
            _ => Ok(self.proposed_sum),
        }
    }

    fn reject(&mut self, round: Option<usize>, err: SumCheckError) -> SumCheckError {
        self.state = VerifierState::Rejected;
        self.events.emit(ProtocolEvent::Rejected {
            round,
            reason: err.to_string(),
        });
        err
    }
}
