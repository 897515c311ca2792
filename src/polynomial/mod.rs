//! Low-degree extensions and equality polynomials
//!
//! MLE definition:
//! g̃(r) = Σ g(w) · ẽq(r, w), where r ∈ F^d, w ∈ {0,1}^d

pub mod eq;
pub mod multilinear;
pub mod univariate;

pub use eq::{eq_polynomial, eq_table, PARALLEL_THRESHOLD};
pub use multilinear::{evaluate_multilinear_lde, evaluate_multilinear_lde_naive, MultilinearExtension};
pub use univariate::{evaluate_univariate_lde, UnivariateEvaluations};
