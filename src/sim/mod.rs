//! Stochastic simulation module
//!
//! Turns a board configuration into slot counts. Pure and deterministic
//! given the random source:
//! - Seeded RNG only
//! - No rendering or I/O (progress goes through an observer)

pub mod aggregate;
pub mod rng;
pub mod smooth;
pub mod stats;
pub mod trajectory;

pub use aggregate::{
    LogProgress, NoProgress, ProgressObserver, aggregate, aggregate_parallel, progress_step,
};
pub use rng::{BoardRng, RandomSource};
pub use smooth::smooth;
pub use stats::HistogramStats;
pub use trajectory::{BallState, bounce_probability, compute_bin_index};
