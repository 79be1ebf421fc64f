//! Deterministic random stream keyed by a seed string.
//!
//! The seed string is hashed with BLAKE3; the first 16 bytes of the digest
//! become the state and stream of a PCG32 generator. Both algorithms are fixed
//! and portable, so a seed string yields the same floats on every platform and
//! every run. Not suitable for anything that must be unpredictable.

use rand::Rng;
use rand_pcg::Pcg32;

/// A reproducible stream of floats in `[0, 1)` derived from a seed string.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: Pcg32,
}

impl SeededRng {
    /// Create the stream for `seed`.
    pub fn new(seed: &str) -> Self {
        let (state, stream) = derive_state(seed);
        Self {
            inner: Pcg32::new(state, stream),
        }
    }

    /// The next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Split the BLAKE3 digest of `seed` into PCG32 state and stream selector.
pub fn derive_state(seed: &str) -> (u64, u64) {
    let hash = blake3::hash(seed.as_bytes());
    let bytes = hash.as_bytes();
    let mut state = [0u8; 8];
    let mut stream = [0u8; 8];
    state.copy_from_slice(&bytes[0..8]);
    stream.copy_from_slice(&bytes[8..16]);
    (u64::from_le_bytes(state), u64::from_le_bytes(stream))
}
