//! Deterministic test data for the integration suites.

#![allow(dead_code)]

/// Small linear congruential generator; reproducible across runs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed ^ 0x9E37_79B9_7F4A_7C15)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as u32
    }

    /// Uniform in `0..bound` (`bound > 0`).
    pub fn below(&mut self, bound: usize) -> usize {
        self.next_u32() as usize % bound
    }
}

/// `1..=n` in a seed-dependent order (Fisher-Yates).
pub fn shuffled_permutation(n: usize, seed: u64) -> Vec<i32> {
    let mut values: Vec<i32> = (1..=n as i32).collect();
    let mut rng = Lcg::new(seed);
    for i in (1..values.len()).rev() {
        let j = rng.below(i + 1);
        values.swap(i, j);
    }
    values
}

/// `len` values in `-range..range`, duplicates likely.
pub fn random_buffer(len: usize, range: i32, seed: u64) -> Vec<i32> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| rng.below(2 * range as usize) as i32 - range)
        .collect()
}
