//! Galton Board - a bean machine simulator
//!
//! Core modules:
//! - `sim`: Stochastic ball trajectories, aggregation and smoothing
//! - `renderer`: Histogram rendering onto an RGB canvas
//! - `config`: Board parameters and validation
//! - `board`: The board itself, tying simulation and rendering together

pub mod board;
pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use board::{GaltonBoard, generate_galton_board};
pub use config::BoardConfig;
pub use error::{GaltonError, GaltonResult};

/// Board configuration constants
pub mod consts {
    use image::Rgb;

    /// Board defaults
    pub const DEFAULT_NUM_ROWS: u32 = 12;
    pub const DEFAULT_NUM_BALLS: u64 = 100_000;
    pub const DEFAULT_BOARD_WIDTH: u32 = 700;
    pub const DEFAULT_BOARD_HEIGHT: u32 = 500;

    /// Peg defaults
    pub const PEG_RADIUS: u32 = 4;
    pub const ELASTICITY: f64 = 0.7;
    /// Fraction of momentum carried to the next row
    pub const DAMPING_FACTOR: f64 = 0.8;
    /// Standard deviation of the drop point jitter (pixels)
    pub const INITIAL_VARIANCE: f64 = 2.0;

    /// Sensitivity of the bounce probability to peg offset
    pub const BOUNCE_SENSITIVITY: f64 = 0.1;
    pub const MIN_BOUNCE_PROBABILITY: f64 = 0.2;
    pub const MAX_BOUNCE_PROBABILITY: f64 = 0.8;

    /// Half-width of the moving average window
    pub const SMOOTHING_HALF_WIDTH: usize = 3;

    /// Progress is reported every 1/PROGRESS_STEPS of the run
    pub const PROGRESS_STEPS: u64 = 20;

    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_IMAGE_PATH: &str = "galton_board.png";

    /// Colors
    pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([102, 51, 153]);
    pub const LEFT_HALF_COLOR: Rgb<u8> = Rgb([122, 122, 244]);
    pub const RIGHT_HALF_COLOR: Rgb<u8> = Rgb([122, 244, 122]);
}
