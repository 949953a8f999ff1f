//! Single ball trajectory through the peg rows
//!
//! The ball carries momentum between rows, so the walk has memory: each
//! bounce adds a kick whose direction is drawn per row and whose strength
//! depends on how close to the peg center the ball strikes.

use super::rng::RandomSource;
use crate::config::BoardConfig;
use crate::consts::{BOUNCE_SENSITIVITY, MAX_BOUNCE_PROBABILITY, MIN_BOUNCE_PROBABILITY};

/// Ephemeral per-ball state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    /// Continuous horizontal coordinate (pixels)
    pub position: f64,
    /// Lateral velocity carried to the next row
    pub momentum: f64,
}

impl BallState {
    /// Drop a ball near the board center
    pub fn new<R: RandomSource + ?Sized>(config: &BoardConfig, rng: &mut R) -> Self {
        let center = f64::from(config.board_width) / 2.0;
        Self {
            position: center + rng.gaussian(0.0, config.initial_variance),
            momentum: 0.0,
        }
    }

    /// Pass the ball through peg row `row`, consuming one uniform draw
    pub fn bounce<R: RandomSource + ?Sized>(
        &mut self,
        config: &BoardConfig,
        row: u32,
        rng: &mut R,
    ) {
        let peg_radius = f64::from(config.peg_radius);

        // Odd rows are staggered by half a peg radius
        let peg_center = self.position + f64::from(row % 2) * config.peg_offset();
        let distance = (self.position - peg_center) / peg_radius;

        let direction = if rng.uniform01() < bounce_probability(distance) {
            1.0
        } else {
            -1.0
        };
        let bounce_force = (1.0 - distance.abs()) * config.elasticity;

        self.momentum =
            self.momentum * config.damping_factor + direction * bounce_force * (2.0 * peg_radius);
        self.position += self.momentum;
        self.clamp_to_board(config);
    }

    /// Keep the ball between the side walls
    pub fn clamp_to_board(&mut self, config: &BoardConfig) {
        let peg_radius = f64::from(config.peg_radius);
        let max = f64::from(config.board_width) - peg_radius;
        self.position = self.position.max(peg_radius).min(max);
    }

    /// Landing bin, always inside `[0, board_width - 1]`
    pub fn bin_index(&self, config: &BoardConfig) -> usize {
        let last = config.num_bins().saturating_sub(1);
        if self.position.is_nan() || self.position <= 0.0 {
            return 0;
        }
        (self.position.floor() as usize).min(last)
    }
}

/// Chance of bouncing right; balls already displaced right lean right
#[inline]
pub fn bounce_probability(distance: f64) -> f64 {
    (0.5 + BOUNCE_SENSITIVITY * distance).clamp(MIN_BOUNCE_PROBABILITY, MAX_BOUNCE_PROBABILITY)
}

/// Simulate one ball and return the bin it lands in.
///
/// Consumes one Gaussian draw for the drop point and one uniform draw per
/// row. `config` must have passed [`BoardConfig::validate`].
pub fn compute_bin_index<R: RandomSource + ?Sized>(config: &BoardConfig, rng: &mut R) -> usize {
    let mut ball = BallState::new(config, rng);
    if config.num_rows == 0 {
        ball.clamp_to_board(config);
    }
    for row in 0..config.num_rows {
        ball.bounce(config, row, rng);
    }
    ball.bin_index(config)
}
