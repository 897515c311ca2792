//! # Sum-check over multilinear low-degree extensions
//!
//! A prover convinces a verifier that Σ_{x∈{0,1}^v} g(x) equals a claimed
//! value, where g is given by its evaluation table on the boolean hypercube.
//! The verifier does v cheap univariate checks and one evaluation of the
//! multilinear extension of g at a random point.
//!
//! ## Structure
//!
//! - `field`: Prime field trait and the BLS12-381 scalar field instance
//! - `polynomial`: Univariate and multilinear low-degree extensions
//! - `sumcheck`: Prover / verifier state machines and challenge sources
//! - `encoding`: Mapping application data to evaluation tables
//!
//! ## Usage
//!
//! ```ignore
//! let mut prover = Prover::new(g.clone(), v)?;
//! let mut verifier = Verifier::new(prover.proposed_sum()?, v, RngChallenger::new(rng));
//! let mut challenge = None;
//! for _ in 0..v {
//!     let g_j = prover.round_polynomial(challenge)?;
//!     challenge = Some(verifier.verify_round_polynomial(&g_j)?);
//! }
//! verifier.verify_oracle_query(&g)?;
//! ```

pub mod encoding;
pub mod field;
pub mod polynomial;
pub mod sumcheck;

pub mod errors;
pub mod utils;

// Re-exports
pub use errors::{Result, SumCheckError};
pub use field::SumCheckField;
pub use polynomial::{
    evaluate_multilinear_lde, evaluate_multilinear_lde_naive, evaluate_univariate_lde,
    MultilinearExtension,
};
pub use sumcheck::{
    run_protocol, ChallengeSource, Prover, ProverConfig, ProverStrategy, SessionRecord, Verifier,
    VerifierState,
};
