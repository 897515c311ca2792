//! Utility functions

use ark_std::log2;

/// Number of variables of the smallest hypercube holding `size` evaluations, ⌈log₂ size⌉
pub fn num_vars_for_size(size: usize) -> usize {
    log2(size) as usize
}

/// Whether `len` evaluations fit on the `num_vars`-dimensional hypercube.
/// False once 2^num_vars no longer fits in a `usize`.
pub fn fits_hypercube(len: usize, num_vars: usize) -> bool {
    num_vars < usize::BITS as usize && len <= 1usize << num_vars
}

/// Coordinate `k` of hypercube vertex `index`, most significant bit first
#[inline]
pub fn vertex_bit(index: usize, num_vars: usize, k: usize) -> bool {
    (index >> (num_vars - 1 - k)) & 1 == 1
}

/// Boolean coordinates of hypercube vertex `index`, most significant bit first
pub fn vertex_bits(index: usize, num_vars: usize) -> Vec<bool> {
    (0..num_vars).map(|k| vertex_bit(index, num_vars, k)).collect()
}
