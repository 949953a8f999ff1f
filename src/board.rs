//! The Galton board
//!
//! Owns the configuration, slot counts and canvas, and sequences
//! aggregation -> smoothing -> rendering.

use std::path::Path;

use crate::config::BoardConfig;
use crate::consts::{BACKGROUND_COLOR, DEFAULT_IMAGE_PATH, DEFAULT_SEED};
use crate::error::GaltonResult;
use crate::renderer::{self, Canvas, RgbCanvas};
use crate::sim::{self, BoardRng, HistogramStats, LogProgress, ProgressObserver};

/// A board with its simulation results
#[derive(Debug, Clone)]
pub struct GaltonBoard {
    config: BoardConfig,
    rng: BoardRng,
    /// Per-bin landing counts from the last run
    raw_counts: Vec<u64>,
    /// Smoothed counts; fixed length `board_width`
    slot_counts: Vec<u64>,
    canvas: RgbCanvas,
}

impl Default for GaltonBoard {
    fn default() -> Self {
        Self::build(BoardConfig::default(), DEFAULT_SEED)
    }
}

impl GaltonBoard {
    /// Board with the given geometry and default peg physics
    pub fn new(
        num_rows: u32,
        num_balls: u64,
        board_width: u32,
        board_height: u32,
    ) -> GaltonResult<Self> {
        Self::with_config(
            BoardConfig::new(num_rows, num_balls, board_width, board_height),
            DEFAULT_SEED,
        )
    }

    /// Board from a full configuration, validated up front
    pub fn with_config(config: BoardConfig, seed: u64) -> GaltonResult<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: BoardConfig, seed: u64) -> Self {
        let bins = config.num_bins();
        let canvas = RgbCanvas::new(config.board_width, config.board_height, BACKGROUND_COLOR);
        Self {
            config,
            rng: BoardRng::new(seed),
            raw_counts: vec![0; bins],
            slot_counts: vec![0; bins],
            canvas,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn num_balls(&self) -> u64 {
        self.config.num_balls
    }

    /// Takes effect on the next `simulate`
    pub fn set_num_balls(&mut self, count: u64) {
        self.config.num_balls = count;
    }

    pub fn raw_counts(&self) -> &[u64] {
        &self.raw_counts
    }

    pub fn slot_counts(&self) -> &[u64] {
        &self.slot_counts
    }

    /// Statistics of the last run's raw landing counts
    pub fn stats(&self) -> HistogramStats {
        HistogramStats::from_counts(&self.raw_counts)
    }

    /// Drop every ball, logging progress
    pub fn simulate(&mut self) {
        self.simulate_with_progress(&mut LogProgress);
    }

    /// Drop every ball, reporting progress to `observer`
    pub fn simulate_with_progress<O: ProgressObserver + ?Sized>(&mut self, observer: &mut O) {
        let raw = sim::aggregate(&self.config, &mut self.rng, observer);
        self.store(raw);
    }

    /// Drop every ball across `partitions` worker threads
    pub fn simulate_parallel(&mut self, partitions: usize) {
        let raw =
            sim::aggregate_parallel(&self.config, &mut self.rng, partitions, &mut LogProgress);
        self.store(raw);
    }

    fn store(&mut self, raw: Vec<u64>) {
        self.slot_counts.copy_from_slice(&sim::smooth(&raw));
        self.raw_counts = raw;
    }

    /// One ball's landing bin, drawn from the board's generator
    pub fn calculate_bin_index(&mut self) -> usize {
        sim::compute_bin_index(&self.config, &mut self.rng)
    }

    pub fn calculate_bar_height(&self, frequency: u64, max_frequency: u64) -> u32 {
        renderer::calculate_bar_height(frequency, max_frequency, self.config.board_height)
    }

    /// Redraw the histogram from the current slot counts
    pub fn generate_image(&mut self) -> &RgbCanvas {
        self.canvas.fill(BACKGROUND_COLOR);
        renderer::render(&self.slot_counts, &mut self.canvas);
        &self.canvas
    }

    /// Render and write the histogram image
    pub fn save_image(&mut self, path: impl AsRef<Path>) -> GaltonResult<()> {
        let path = path.as_ref();
        self.generate_image();
        match self.canvas.save(path) {
            Ok(()) => {
                log::info!("Saved histogram to {}", path.display());
                Ok(())
            }
            Err(e) => {
                log::error!("Error saving image: {}", e);
                Err(e)
            }
        }
    }
}

/// Simulate a default board and save it to `path` (default `galton_board.png`)
pub fn generate_galton_board(path: Option<&Path>) -> GaltonResult<GaltonBoard> {
    let mut board = GaltonBoard::default();
    board.simulate();
    board.save_image(path.unwrap_or(Path::new(DEFAULT_IMAGE_PATH)))?;
    Ok(board)
}
