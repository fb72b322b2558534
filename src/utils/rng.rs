use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stream feeding the sensor noise of a plane.
pub const PLANE_NOISE_STREAM: &str = "plane_noise";

/// Master seed for a simulation run, split into independent named streams.
///
/// A stream seed mixes the master seed with the stream name through
/// `DefaultHasher`. Seeds repeat across runs built with the same Rust
/// release but may change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stream_seed(&self, stream: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        (self.seed, stream).hash(&mut hasher);
        hasher.finish()
    }

    /// Generator for `stream`, restarted from the same state on every call.
    pub fn stream(&self, stream: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.stream_seed(stream))
    }

    /// Sensor noise generator for a plane.
    pub fn plane_noise(&self) -> ChaCha8Rng {
        self.stream(PLANE_NOISE_STREAM)
    }
}
