//! Turning application data into evaluation tables

use crate::field::SumCheckField;
use crate::utils::num_vars_for_size;

/// One field element per byte of `text`: "hi" becomes [104, 105]
pub fn ascii_evaluations<F: SumCheckField>(text: &str) -> Vec<F> {
    text.bytes().map(|b| F::from(b as u64)).collect()
}

/// Zero-pad `values` to the next power of two; returns the table and its variable count
pub fn pad_to_hypercube<F: SumCheckField>(mut values: Vec<F>) -> (Vec<F>, usize) {
    let num_vars = num_vars_for_size(values.len());
    values.resize(1 << num_vars, F::zero());
    (values, num_vars)
}
