//! Univariate low-degree extension in point-value form
//!
//! A table `[y_0, ..., y_{n-1}]` is read as the values of the unique
//! polynomial of degree < n at the nodes `0, 1, ..., n-1`.

use crate::errors::{Result, SumCheckError};
use crate::field::SumCheckField;

/// Evaluate the degree-(n-1) interpolant of `values` (nodes `0..n`) at `r`.
///
/// When `r` is itself a node the stored value is returned directly; otherwise
/// the Lagrange form `Σ_i y_i · Π_{j≠i} (r - j) / (i - j)` is used.
pub fn evaluate_univariate_lde<F: SumCheckField>(values: &[F], r: F) -> Result<F> {
    if values.is_empty() {
        return Err(SumCheckError::EmptyInput);
    }
    if let Some(i) = r.as_index_below(values.len()) {
        return Ok(values[i]);
    }

    let n = values.len();
    let mut acc = F::zero();
    for (i, &y_i) in values.iter().enumerate() {
        let i_f = F::from_index(i);
        let mut numer = F::one();
        let mut denom = F::one();
        for j in (0..n).filter(|&j| j != i) {
            let j_f = F::from_index(j);
            numer *= r - j_f;
            denom *= i_f - j_f;
        }
        acc += y_i * numer.checked_div(&denom)?;
    }
    Ok(acc)
}

/// Univariate polynomial given by its values at `0, 1, ..., n-1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnivariateEvaluations<F: SumCheckField> {
    values: Vec<F>,
}

impl<F: SumCheckField> UnivariateEvaluations<F> {
    pub fn new(values: Vec<F>) -> Result<Self> {
        if values.is_empty() {
            return Err(SumCheckError::EmptyInput);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Upper bound on the degree, `n - 1`
    pub fn degree_bound(&self) -> usize {
        self.values.len() - 1
    }

    pub fn evaluate(&self, r: F) -> Result<F> {
        evaluate_univariate_lde(&self.values, r)
    }

    /// Returns g(0) + g(1)
    pub fn sum_over_boolean(&self) -> Result<F> {
        Ok(self.evaluate(F::zero())? + self.evaluate(F::one())?)
    }
}
