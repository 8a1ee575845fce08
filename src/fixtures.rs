//! Deterministic subjects of a given size, for use as benchmark setup
//! functions.

use ahash::{AHashMap, AHashSet};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const DEFAULT_SEED: u64 = 0x5F3759DF;

pub fn sequential_vec(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

/// `size` values drawn uniformly from `0..size`.
pub fn random_vec(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = size.max(1) as u64;
    (0..size).map(|_| rng.gen_range(0..bound)).collect()
}

pub fn sequential_set(size: usize) -> AHashSet<u64> {
    (0..size as u64).collect()
}

pub fn keyed_map(size: usize) -> AHashMap<u64, u64> {
    (0..size as u64).map(|key| (key, key)).collect()
}

pub type Matrix = Vec<Vec<u64>>;

pub fn random_matrix(side: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..side)
        .map(|_| (0..side).map(|_| rng.gen_range(0..100)).collect())
        .collect()
}

pub fn multiply(first: &Matrix, second: &Matrix) -> Matrix {
    let side = first.len();
    let mut result = vec![vec![0u64; side]; side];
    for i in 0..side {
        for j in 0..side {
            for k in 0..side {
                result[i][j] += first[i][k] * second[k][j];
            }
        }
    }
    result
}
