//! Multilinear extension of an evaluation table over {0,1}^d
//!
//! Entry `i` of the table is the value at the vertex whose coordinates are the
//! bits of `i`, most significant first. Tables shorter than 2^d are implicitly
//! zero-padded.

use rayon::prelude::*;

use crate::errors::{Result, SumCheckError};
use crate::field::SumCheckField;
use crate::polynomial::eq::{eq_polynomial, eq_table_with_threshold, PARALLEL_THRESHOLD};
use crate::utils::{fits_hypercube, num_vars_for_size, vertex_bits};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilinearExtension<F: SumCheckField> {
    evaluations: Vec<F>, // g(w) for the first `evaluations.len()` vertices
    num_vars: usize,     // d
}

impl<F: SumCheckField> MultilinearExtension<F> {
    /// Table over an explicit number of variables; `evaluations.len()` must be ≤ 2^d
    pub fn new(evaluations: Vec<F>, num_vars: usize) -> Result<Self> {
        if evaluations.is_empty() {
            return Err(SumCheckError::EmptyInput);
        }
        if !fits_hypercube(evaluations.len(), num_vars) {
            return Err(SumCheckError::InvalidArity {
                len: evaluations.len(),
                num_vars,
            });
        }
        Ok(Self {
            evaluations,
            num_vars,
        })
    }

    /// Table over the smallest hypercube holding it, d = ⌈log₂ len⌉
    pub fn from_values(evaluations: Vec<F>) -> Result<Self> {
        let num_vars = num_vars_for_size(evaluations.len());
        Self::new(evaluations, num_vars)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn evaluations(&self) -> &[F] {
        &self.evaluations
    }

    /// Value at hypercube vertex `index`, zero past the end of the table
    pub fn evaluate_on_vertex(&self, index: usize) -> F {
        self.evaluations.get(index).copied().unwrap_or_else(F::zero)
    }

    /// The full 2^d table, zero-padded
    pub fn padded_evaluations(&self) -> Vec<F> {
        let mut padded = self.evaluations.clone();
        padded.resize(1 << self.num_vars, F::zero());
        padded
    }

    /// Σ_{w ∈ {0,1}^d} g(w)
    pub fn sum_over_hypercube(&self) -> F {
        self.evaluations.iter().copied().sum()
    }

    fn check_point(&self, r: &[F]) -> Result<()> {
        if r.len() != self.num_vars {
            return Err(SumCheckError::DimensionMismatch {
                expected: self.num_vars,
                actual: r.len(),
            });
        }
        Ok(())
    }

    /// Evaluate at `r ∈ F^d` by recomputing every vertex's basis value, O(2^d·d).
    /// Vertices past the end of the table have coefficient zero and are skipped.
    #[tracing::instrument(skip_all, name = "MultilinearExtension::evaluate_naive", fields(num_vars = self.num_vars))]
    pub fn evaluate_naive(&self, r: &[F]) -> Result<F> {
        self.check_point(r)?;
        let term = |(idx, value): (usize, &F)| *value * eq_polynomial(r, &vertex_bits(idx, self.num_vars));
        let acc = if self.evaluations.len() >= PARALLEL_THRESHOLD {
            self.evaluations
                .par_iter()
                .enumerate()
                .map(term)
                .reduce(F::zero, |a, b| a + b)
        } else {
            self.evaluations.iter().enumerate().map(term).sum()
        };
        Ok(acc)
    }

    /// Evaluate at `r ∈ F^d` against the memoized basis table, O(2^d).
    #[tracing::instrument(skip_all, name = "MultilinearExtension::evaluate", fields(num_vars = self.num_vars))]
    pub fn evaluate(&self, r: &[F]) -> Result<F> {
        self.check_point(r)?;
        let basis = eq_table_with_threshold(r, PARALLEL_THRESHOLD);
        Ok(self.dot_basis(&basis))
    }

    /// Σ_i g(i)·basis[i] over the stored prefix of the table
    pub(crate) fn dot_basis(&self, basis: &[F]) -> F {
        if self.evaluations.len() >= PARALLEL_THRESHOLD {
            self.evaluations
                .par_iter()
                .zip(basis.par_iter())
                .map(|(v, b)| *v * b)
                .reduce(F::zero, |a, b| a + b)
        } else {
            self.evaluations
                .iter()
                .zip(basis.iter())
                .map(|(v, b)| *v * b)
                .sum()
        }
    }
}

/// Naive multilinear LDE of `values` at `r`, with d = ⌈log₂ values.len()⌉
pub fn evaluate_multilinear_lde_naive<F: SumCheckField>(values: &[F], r: &[F]) -> Result<F> {
    MultilinearExtension::from_values(values.to_vec())?.evaluate_naive(r)
}

/// Memoized multilinear LDE of `values` at `r`, with d = ⌈log₂ values.len()⌉
pub fn evaluate_multilinear_lde<F: SumCheckField>(values: &[F], r: &[F]) -> Result<F> {
    MultilinearExtension::from_values(values.to_vec())?.evaluate(r)
}
