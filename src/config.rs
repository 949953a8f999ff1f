//! Board parameters
//!
//! Immutable for the duration of a run. Persisted as pretty JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GaltonError, GaltonResult};

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of peg rows a ball falls through
    pub num_rows: u32,
    /// Balls dropped per simulation
    pub num_balls: u64,
    /// Width in pixels; also the number of landing bins
    pub board_width: u32,
    /// Height in pixels of the rendered histogram
    pub board_height: u32,

    // === Peg physics ===
    pub peg_radius: u32,
    /// Converts normalized peg offset into bounce force
    pub elasticity: f64,
    /// Momentum retained between rows, in (0, 1)
    pub damping_factor: f64,
    /// Standard deviation of the drop point
    pub initial_variance: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            num_rows: DEFAULT_NUM_ROWS,
            num_balls: DEFAULT_NUM_BALLS,
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,

            peg_radius: PEG_RADIUS,
            elasticity: ELASTICITY,
            damping_factor: DAMPING_FACTOR,
            initial_variance: INITIAL_VARIANCE,
        }
    }
}

impl BoardConfig {
    /// Board with the given geometry and default peg physics
    pub fn new(num_rows: u32, num_balls: u64, board_width: u32, board_height: u32) -> Self {
        Self {
            num_rows,
            num_balls,
            board_width,
            board_height,
            ..Self::default()
        }
    }

    /// Lateral stagger of odd peg rows
    pub fn peg_offset(&self) -> f64 {
        f64::from(self.peg_radius) * 0.5
    }

    /// Number of landing bins
    pub fn num_bins(&self) -> usize {
        self.board_width as usize
    }

    /// Check every parameter, reporting the first violation
    pub fn validate(&self) -> GaltonResult<()> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(GaltonError::config(format!(
                "board dimensions must be positive, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.peg_radius == 0 {
            return Err(GaltonError::config("peg_radius must be positive"));
        }
        // Clamping range [r, width - r] must be non-empty
        if u64::from(self.peg_radius) * 2 > u64::from(self.board_width) {
            return Err(GaltonError::config(format!(
                "peg_radius {} exceeds half the board width {}",
                self.peg_radius, self.board_width
            )));
        }
        if !self.elasticity.is_finite() || self.elasticity <= 0.0 {
            return Err(GaltonError::config(format!(
                "elasticity must be positive, got {}",
                self.elasticity
            )));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(GaltonError::config(format!(
                "damping_factor must lie in (0, 1), got {}",
                self.damping_factor
            )));
        }
        if !self.initial_variance.is_finite() || self.initial_variance < 0.0 {
            return Err(GaltonError::config(format!(
                "initial_variance must be non-negative, got {}",
                self.initial_variance
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> GaltonResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| GaltonError::io(path, e))?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> GaltonResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| GaltonError::io(path, e))?;
        log::info!("Board config saved to {}", path.display());
        Ok(())
    }
}
