//! Equality polynomial ẽq(r, w) = Π_k (w_k·r_k + (1-w_k)·(1-r_k))
//!
//! ẽq(r, w) is the multilinear Lagrange basis polynomial of hypercube vertex
//! `w` evaluated at `r`. [`eq_polynomial`] computes one basis value, while
//! [`eq_table`] builds all 2^d of them in a single bottom-up pass.

use ark_std::vec::Vec;
use rayon::prelude::*;

use crate::field::SumCheckField;

/// Table size from which the basis expansion is fanned out over rayon
pub const PARALLEL_THRESHOLD: usize = 1 << 10;

/// Evaluate equality polynomial at point `r` for Boolean vertex `w`
pub fn eq_polynomial<F: SumCheckField>(r: &[F], w: &[bool]) -> F {
    assert_eq!(r.len(), w.len(), "dimension mismatch");
    let mut acc = F::one();
    for (r_k, &w_k) in r.iter().zip(w.iter()) {
        let term = if w_k { *r_k } else { F::one() - r_k };
        acc *= term;
    }
    acc
}

/// All basis values `ẽq(r, w)` for `w ∈ {0,1}^d` in vertex order (index `i`
/// read most significant bit first), using 2^(d+1) multiplications overall.
pub fn eq_table<F: SumCheckField>(r: &[F]) -> Vec<F> {
    eq_table_with_threshold(r, PARALLEL_THRESHOLD)
}

/// [`eq_table`] with an explicit parallelisation threshold
#[tracing::instrument(skip_all, name = "eq_table", fields(num_vars = r.len()))]
pub fn eq_table_with_threshold<F: SumCheckField>(r: &[F], parallel_threshold: usize) -> Vec<F> {
    let mut table = vec![F::one()];
    for &r_i in r {
        table = if table.len() >= parallel_threshold {
            table
                .par_iter()
                .flat_map_iter(|&e| split(e, r_i))
                .collect()
        } else {
            table.iter().flat_map(|&e| split(e, r_i)).collect()
        };
    }
    table
}

/// Expands one entry `e` into `[e·(1-r_i), e·r_i]`
#[inline]
fn split<F: SumCheckField>(e: F, r_i: F) -> [F; 2] {
    let hi = e * r_i;
    [e - hi, hi]
}
