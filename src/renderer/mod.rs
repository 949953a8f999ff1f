//! Histogram rendering module
//!
//! Draws slot counts as a two-colored bar chart onto a raster canvas.

pub mod canvas;
pub mod histogram;

pub use canvas::{Canvas, RgbCanvas};
pub use histogram::{bar_color, calculate_bar_height, render};
