//! Seeded random source for ball trajectories
//!
//! Every run is reproducible from its seed. Parallel workers get their own
//! streams derived from the master seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Draws consumed by the trajectory model
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn uniform01(&mut self) -> f64;

    /// Normal sample with the given mean and standard deviation
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// Golden-ratio increment used to spread partition seeds
const STREAM_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// PCG-backed random source
#[derive(Debug, Clone)]
pub struct BoardRng {
    seed: u64,
    /// Next stream handed out by `partition`
    stream: u64,
    rng: Pcg32,
}

impl BoardRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            stream: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off `n` independent generators for parallel workers
    pub fn partition(&mut self, n: usize) -> Vec<Self> {
        let partitions = (0..n as u64)
            .map(|i| {
                let stream = self.stream + i + 1;
                let seed = self.seed.wrapping_add(stream.wrapping_mul(STREAM_SPREAD));
                Self {
                    seed,
                    stream: 0,
                    rng: Pcg32::seed_from_u64(seed),
                }
            })
            .collect();
        self.stream += n as u64;
        partitions
    }
}

impl RandomSource for BoardRng {
    fn uniform01(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev == 0.0 {
            return mean;
        }
        // Box-Muller; keep u1 away from zero for ln
        let u1 = self.uniform01().max(f64::EPSILON);
        let u2 = self.uniform01();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }
}
