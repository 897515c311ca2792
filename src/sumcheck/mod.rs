//! Sum-check protocol for multilinear polynomials
//!
//! Reduces a claim Σ_{x∈{0,1}^v} g(x) = T to a single evaluation g̃(r) at a
//! random point r, over v rounds of degree-1 univariate checks.
//!
//! Prover and verifier are independent state machines that only exchange
//! round polynomials `[g_j(0), g_j(1)]` and challenges `r_j`.

pub mod challenge;
pub mod events;
mod prover;
pub mod session;
mod verifier;

pub use challenge::{
    ChallengeSource, FixedChallenges, RngChallenger, SmallRangeChallenger, TranscriptChallenger,
};
pub use events::{EventSink, ProtocolEvent, TracingSink};
pub use prover::{Prover, ProverConfig, ProverStrategy};
pub use session::{ChallengeVector, SessionRecord};
pub use verifier::{Verifier, VerifierState, MAX_ROUND_EVALUATIONS};

use crate::errors::Result;
use crate::field::SumCheckField;

/// Run a full honest session over `g` with `num_vars` variables.
///
/// Returns the exchanged messages once the verifier has accepted, or the
/// first error either party raised.
#[tracing::instrument(skip_all, name = "sumcheck::run_protocol", fields(num_vars = num_vars))]
pub fn run_protocol<F, C>(
    g: Vec<F>,
    num_vars: usize,
    config: ProverConfig,
    challenger: C,
) -> Result<SessionRecord<F>>
where
    F: SumCheckField,
    C: ChallengeSource<F>,
{
    let oracle = g.clone();
    let mut prover = Prover::with_config(g, num_vars, config)?;
    let proposed_sum = prover.proposed_sum()?;
    let mut verifier = Verifier::new(proposed_sum, num_vars, challenger);

    let mut challenge = None;
    for _ in 0..num_vars {
        let g_j = prover.round_polynomial(challenge)?;
        challenge = Some(verifier.verify_round_polynomial(&g_j)?);
    }
    verifier.verify_oracle_query(&oracle)?;
    Ok(verifier.record())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SumCheckError;
    use crate::field::Bls12381Fr as Fr;
    use crate::polynomial::evaluate_univariate_lde;
    use ark_std::test_rng;
    use rand::{rngs::StdRng, SeedableRng};

    fn table(values: &[u64]) -> Vec<Fr> {
        values.iter().copied().map(Fr::from).collect()
    }

    #[test]
    fn one_to_eight_is_accepted() {
        let g = table(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let record = run_protocol(
            g,
            3,
            ProverConfig::default(),
            RngChallenger::new(StdRng::seed_from_u64(42)),
        )
        .unwrap();
        assert_eq!(record.proposed_sum, Fr::from(36u64));
        assert_eq!(record.challenges.len(), 3);
        assert_eq!(record.round_polynomials.len(), 3);
        assert_eq!(record.round_polynomials[0], table(&[10, 26]));
    }

    #[test]
    fn completeness_over_many_tables() {
        let mut rng = test_rng();
        for num_vars in 0..7usize {
            for len in [1usize, (1 << num_vars) / 2 + 1, 1 << num_vars] {
                let g: Vec<Fr> = (0..len).map(|_| Fr::random(&mut rng)).collect();
                for strategy in [ProverStrategy::Folding, ProverStrategy::Recompute] {
                    let config = ProverConfig {
                        strategy,
                        ..ProverConfig::default()
                    };
                    let record =
                        run_protocol(g.clone(), num_vars, config, RngChallenger::new(test_rng()))
                            .unwrap();
                    assert_eq!(record.challenges.len(), num_vars);
                }
            }
        }
    }

    #[test]
    fn completeness_with_transcript_challenges() {
        let g = table(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        let sum = g.iter().copied().sum::<Fr>();
        let mut challenger = TranscriptChallenger::new(b"sumcheck");
        challenger.append_scalar(b"claimed_sum", &sum);
        let record = run_protocol(g.clone(), 4, ProverConfig::default(), challenger).unwrap();

        let mut replay = TranscriptChallenger::new(b"sumcheck");
        replay.append_scalar(b"claimed_sum", &sum);
        let again = run_protocol(g, 4, ProverConfig::default(), replay).unwrap();
        assert_eq!(record, again);
    }

    #[test]
    fn every_single_corruption_is_caught() {
        let g = table(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let num_vars = 3;
        let challenges = table(&[11, 12, 13]);

        for bad_round in 0..num_vars {
            for bad_entry in 0..2 {
                let mut prover = Prover::new(g.clone(), num_vars).unwrap();
                let sum = prover.proposed_sum().unwrap();
                let mut verifier =
                    Verifier::new(sum, num_vars, FixedChallenges::new(challenges.clone()));

                let mut challenge = None;
                let mut outcome = Ok(());
                for round in 0..num_vars {
                    let mut g_j = prover.round_polynomial(challenge).unwrap();
                    if round == bad_round {
                        g_j[bad_entry] += Fr::from(1u64);
                    }
                    match verifier.verify_round_polynomial(&g_j) {
                        Ok(r) => challenge = Some(r),
                        Err(err) => {
                            outcome = Err(err);
                            break;
                        }
                    }
                }
                if outcome.is_ok() {
                    outcome = verifier.verify_oracle_query(&g);
                }
                let err = outcome.unwrap_err();
                assert!(err.is_rejection(), "round {} entry {}: {}", bad_round, bad_entry, err);
                assert_eq!(verifier.state(), VerifierState::Rejected);
            }
        }
    }

    #[test]
    fn consistent_lie_is_caught_by_oracle() {
        // Prover claims the sum of a different table and answers every round
        // honestly for that table; only the oracle query sees the real g.
        let real = table(&[1, 2, 3, 4]);
        let fake = table(&[1, 2, 3, 5]);
        let mut prover = Prover::new(fake, 2).unwrap();
        let sum = prover.proposed_sum().unwrap();
        let mut verifier = Verifier::new(sum, 2, FixedChallenges::new(table(&[7, 9])));

        let mut challenge = None;
        for _ in 0..2 {
            let g_j = prover.round_polynomial(challenge).unwrap();
            challenge = Some(verifier.verify_round_polynomial(&g_j).unwrap());
        }
        assert!(matches!(
            verifier.verify_oracle_query(&real),
            Err(SumCheckError::OracleMismatch { .. })
        ));
    }

    #[test]
    fn last_challenge_closes_round_chain() {
        let g = table(&[2, 7, 1, 8]);
        let record = run_protocol(
            g.clone(),
            2,
            ProverConfig::default(),
            RngChallenger::new(StdRng::seed_from_u64(5)),
        )
        .unwrap();
        let last = record.round_polynomials.last().unwrap();
        let r_v = *record.challenges.last().unwrap();
        let g_of_r = crate::polynomial::MultilinearExtension::new(g, 2)
            .unwrap()
            .evaluate(&record.challenges)
            .unwrap();
        assert_eq!(evaluate_univariate_lde(last, r_v).unwrap(), g_of_r);
    }

    #[test]
    fn errors_propagate_from_run() {
        assert_eq!(
            run_protocol(
                Vec::<Fr>::new(),
                2,
                ProverConfig::default(),
                RngChallenger::new(test_rng())
            ),
            Err(SumCheckError::EmptyInput)
        );
        assert_eq!(
            run_protocol(
                table(&[1, 2, 3]),
                2,
                ProverConfig::default(),
                FixedChallenges::new(table(&[1]))
            ),
            Err(SumCheckError::ChallengesExhausted { drawn: 1 })
        );
    }
}
