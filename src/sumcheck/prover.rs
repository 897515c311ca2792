use std::sync::Arc;

use rayon::prelude::*;

use crate::errors::{Result, SumCheckError};
use crate::field::{bit_to_field, SumCheckField};
use crate::polynomial::{MultilinearExtension, PARALLEL_THRESHOLD};
use crate::utils::vertex_bit;

use super::events::{EventSink, Events, ProtocolEvent};
use super::session::ChallengeVector;

/// How the prover computes each round's partial sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProverStrategy {
    /// Re-sum the multilinear extension over the free sub-hypercube every
    /// round: 2^(v-j) full evaluations for round j.
    Recompute,
    /// Keep the table of g(r_1, ..., r_k, ·) and halve it on every challenge.
    /// O(2^v) work over the whole session.
    #[default]
    Folding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProverConfig {
    pub strategy: ProverStrategy,
    /// Number of summands from which round sums are computed with rayon
    pub parallel_threshold: usize,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            strategy: ProverStrategy::default(),
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

/// Prover for the sum-check protocol over a multilinear polynomial
#[derive(Debug)]
pub struct Prover<F: SumCheckField> {
    poly: MultilinearExtension<F>,
    config: ProverConfig,
    challenges: ChallengeVector<F>,
    rounds_completed: usize,
    /// g(r_1, ..., r_k, ·) over the remaining 2^(v-k) vertices; `Folding` only
    folded: Vec<F>,
    events: Events<F>,
}

impl<F: SumCheckField> Prover<F> {
    /// Prover for the `num_vars`-variate extension of `g`, which may hold
    /// fewer than 2^num_vars entries.
    pub fn new(g: Vec<F>, num_vars: usize) -> Result<Self> {
        Self::with_config(g, num_vars, ProverConfig::default())
    }

    pub fn with_config(g: Vec<F>, num_vars: usize, config: ProverConfig) -> Result<Self> {
        let poly = MultilinearExtension::new(g, num_vars)?;
        let folded = match config.strategy {
            ProverStrategy::Folding => poly.padded_evaluations(),
            ProverStrategy::Recompute => Vec::new(),
        };
        Ok(Self {
            poly,
            config,
            challenges: ChallengeVector::with_capacity(num_vars),
            rounds_completed: 0,
            folded,
            events: Events::default(),
        })
    }

    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink<F>>) -> Self {
        self.events.set_sink(sink);
        self
    }

    pub fn num_vars(&self) -> usize {
        self.poly.num_vars()
    }

    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    pub fn challenges(&self) -> &[F] {
        self.challenges.as_slice()
    }

    /// The polynomial the prover is committed to, for answering the oracle query
    pub fn polynomial(&self) -> &MultilinearExtension<F> {
        &self.poly
    }

    /// Σ_{w ∈ {0,1}^v} g̃(w), the claim the session starts from
    #[tracing::instrument(skip_all, name = "Prover::proposed_sum", fields(num_vars = self.num_vars()))]
    pub fn proposed_sum(&self) -> Result<F> {
        let sum = match self.config.strategy {
            ProverStrategy::Recompute => {
                let num_vars = self.num_vars();
                self.sum_evaluations(1 << num_vars, |idx| {
                    let vertex: Vec<F> = (0..num_vars)
                        .map(|k| bit_to_field(vertex_bit(idx, num_vars, k)))
                        .collect();
                    self.poly.evaluate(&vertex)
                })?
            }
            ProverStrategy::Folding => self.poly.sum_over_hypercube(),
        };
        self.events.emit(ProtocolEvent::ProposedSum { sum });
        Ok(sum)
    }

    /// Produce `[g_j(0), g_j(1)]` for the next round j.
    ///
    /// Round 1 takes no challenge; round j > 1 takes the verifier's `r_{j-1}`,
    /// which fixes variable j-1 for this and every later round.
    #[tracing::instrument(skip_all, name = "Prover::round_polynomial", fields(round = self.rounds_completed + 1))]
    pub fn round_polynomial(&mut self, challenge: Option<F>) -> Result<[F; 2]> {
        let num_vars = self.num_vars();
        if self.rounds_completed == num_vars {
            return Err(SumCheckError::RoundOverflow { num_rounds: num_vars });
        }
        let round = self.rounds_completed + 1;
        match (round, challenge) {
            (1, Some(_)) => return Err(SumCheckError::UnexpectedChallenge { round }),
            (r, None) if r > 1 => return Err(SumCheckError::MissingChallenge { round }),
            _ => {}
        }

        if let Some(r) = challenge {
            self.challenges.push(r);
            if self.config.strategy == ProverStrategy::Folding {
                self.fold(r);
            }
        }

        let evaluations = match self.config.strategy {
            ProverStrategy::Recompute => self.recompute_round()?,
            ProverStrategy::Folding => self.folded_round(),
        };
        self.rounds_completed = round;
        self.events.emit(ProtocolEvent::RoundPolynomial { round, evaluations });
        Ok(evaluations)
    }

    /// g_j(x) = Σ_{b ∈ {0,1}^(v-j)} g̃(r_1, ..., r_{j-1}, x, b)
    fn recompute_round(&self) -> Result<[F; 2]> {
        let num_vars = self.num_vars();
        let prefix = self.challenges.as_slice();
        let free = num_vars - prefix.len() - 1;

        let sum_at = |x: bool| {
            self.sum_evaluations(1 << free, |mask| {
                let mut point = Vec::with_capacity(num_vars);
                point.extend_from_slice(prefix);
                point.push(bit_to_field(x));
                point.extend((0..free).map(|k| bit_to_field::<F>(vertex_bit(mask, free, k))));
                self.poly.evaluate(&point)
            })
        };
        Ok([sum_at(false)?, sum_at(true)?])
    }

    /// Σ_{i < count} eval(i), over rayon once `count` reaches the threshold
    fn sum_evaluations<E>(&self, count: usize, eval: E) -> Result<F>
    where
        E: Fn(usize) -> Result<F> + Sync + Send,
    {
        if count >= self.config.parallel_threshold {
            (0..count)
                .into_par_iter()
                .map(eval)
                .try_reduce(F::zero, |a, b| Ok(a + b))
        } else {
            (0..count).map(eval).sum()
        }
    }

    /// The current variable is the top bit, so the table's halves are x = 0 and x = 1
    fn folded_round(&self) -> [F; 2] {
        let (lo, hi) = self.folded.split_at(self.folded.len() / 2);
        if self.folded.len() >= self.config.parallel_threshold {
            let (s0, s1) = rayon::join(
                || lo.par_iter().copied().reduce(F::zero, |a, b| a + b),
                || hi.par_iter().copied().reduce(F::zero, |a, b| a + b),
            );
            [s0, s1]
        } else {
            [lo.iter().copied().sum(), hi.iter().copied().sum()]
        }
    }

    /// Fix the top variable to `r`: t'[i] = t[i] + r·(t[half + i] - t[i])
    fn fold(&mut self, r: F) {
        let half = self.folded.len() / 2;
        let (lo, hi) = self.folded.split_at(half);
        let folded: Vec<F> = if self.folded.len() >= self.config.parallel_threshold {
            lo.par_iter()
                .zip(hi.par_iter())
                .map(|(&a, &b)| a + r * (b - a))
                .collect()
        } else {
            lo.iter().zip(hi).map(|(&a, &b)| a + r * (b - a)).collect()
        };
        self.folded = folded;
    }
}
