//! Walks through an honest sum-check session and a cheating prover.
//!
//! Run with `RUST_LOG=debug cargo run --example run_sumcheck` to see every
//! protocol message.

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use sumcheck_lde::encoding::{ascii_evaluations, pad_to_hypercube};
use sumcheck_lde::field::bls12_381::Fr;
use sumcheck_lde::sumcheck::{RngChallenger, TracingSink, TranscriptChallenger};
use sumcheck_lde::{
    evaluate_univariate_lde, run_protocol, Prover, ProverConfig, Result, Verifier,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // "hi" as a univariate extension: 104, 105, then 106 at x = 2
    let hi: Vec<Fr> = ascii_evaluations("hi");
    let at_two = evaluate_univariate_lde(&hi, Fr::from(2u64))?;
    tracing::info!("univariate extension of \"hi\" at 2 = {}", at_two);

    // Honest session over 1..=8, message by message
    let g: Vec<Fr> = (1..=8u64).map(Fr::from).collect();
    let sink = Arc::new(TracingSink);
    let mut prover = Prover::new(g.clone(), 3)?.with_event_sink(sink.clone());
    let mut verifier = Verifier::new(
        prover.proposed_sum()?,
        3,
        RngChallenger::new(StdRng::seed_from_u64(7)),
    )
    .with_event_sink(sink.clone());

    let mut challenge = None;
    for _ in 0..3 {
        let g_j = prover.round_polynomial(challenge)?;
        challenge = Some(verifier.verify_round_polynomial(&g_j)?);
    }
    verifier.verify_oracle_query(&g)?;
    tracing::info!("honest session: {:?}", verifier.state());

    // Prover that shifts g_1(1) by one gets caught in the first round
    let mut cheat = Prover::new(g.clone(), 3)?;
    let mut verifier = Verifier::new(
        cheat.proposed_sum()?,
        3,
        RngChallenger::new(StdRng::seed_from_u64(7)),
    )
    .with_event_sink(sink);
    let mut g_1 = cheat.round_polynomial(None)?;
    g_1[1] += Fr::from(1u64);
    if let Err(err) = verifier.verify_round_polynomial(&g_1) {
        tracing::info!("cheating prover: {:?} ({})", verifier.state(), err);
    }

    // Non-interactive run over a text message
    let (table, num_vars) = pad_to_hypercube(ascii_evaluations::<Fr>("sum-check"));
    let record = run_protocol(
        table,
        num_vars,
        ProverConfig::default(),
        TranscriptChallenger::new(b"run_sumcheck"),
    )?;
    tracing::info!(
        "transcript session over {} variables, sum {}",
        record.num_vars,
        record.proposed_sum
    );

    Ok(())
}
