//! Bar-chart rendering of slot counts

use image::Rgb;

use super::canvas::Canvas;
use crate::consts::{LEFT_HALF_COLOR, RIGHT_HALF_COLOR};

/// Bar height scaled so the tallest bar fills `board_height`
#[inline]
pub fn calculate_bar_height(frequency: u64, max_frequency: u64, board_height: u32) -> u32 {
    if max_frequency == 0 {
        return 0;
    }
    let ratio = frequency as f64 / max_frequency as f64;
    (ratio * f64::from(board_height)).floor() as u32
}

/// Color by canvas half: bars starting left of center use the left color
#[inline]
pub fn bar_color(x0: u32, board_width: u32) -> Rgb<u8> {
    if x0 < board_width / 2 {
        LEFT_HALF_COLOR
    } else {
        RIGHT_HALF_COLOR
    }
}

/// Draw one bar per slot, bottom-aligned.
///
/// Only bars are drawn; the caller clears the canvas beforehand.
pub fn render<C: Canvas + ?Sized>(counts: &[u64], canvas: &mut C) {
    let board_width = canvas.width();
    let board_height = canvas.height();

    let max_frequency = counts.iter().copied().max().unwrap_or(0);
    let bar_width = if counts.is_empty() {
        1
    } else {
        (board_width as usize / counts.len()).max(1) as u32
    };

    for (index, &frequency) in counts.iter().enumerate() {
        let bar_height = calculate_bar_height(frequency, max_frequency, board_height);
        if bar_height == 0 {
            continue;
        }
        let x0 = (index as u32).saturating_mul(bar_width);
        if x0 >= board_width {
            break;
        }
        let y0 = board_height - bar_height.min(board_height);
        canvas.fill_rect(
            x0,
            y0,
            x0.saturating_add(bar_width),
            board_height,
            bar_color(x0, board_width),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BACKGROUND_COLOR;
    use crate::renderer::canvas::RgbCanvas;
    use proptest::prelude::*;

    #[test]
    fn test_bar_height_zero_max() {
        assert_eq!(calculate_bar_height(0, 0, 500), 0);
        assert_eq!(calculate_bar_height(123, 0, 500), 0);
    }

    #[test]
    fn test_bar_height_scales() {
        assert_eq!(calculate_bar_height(10, 10, 500), 500);
        assert_eq!(calculate_bar_height(5, 10, 500), 250);
        assert_eq!(calculate_bar_height(1, 3, 10), 3);
    }

    #[test]
    fn test_bar_color_split() {
        assert_eq!(bar_color(0, 10), LEFT_HALF_COLOR);
        assert_eq!(bar_color(4, 10), LEFT_HALF_COLOR);
        assert_eq!(bar_color(5, 10), RIGHT_HALF_COLOR);
        // Odd widths split on the floor of the midpoint
        assert_eq!(bar_color(3, 7), RIGHT_HALF_COLOR);
    }

    #[test]
    fn test_all_zero_counts_leave_background() {
        let mut canvas = RgbCanvas::new(10, 8, BACKGROUND_COLOR);
        render(&[0; 10], &mut canvas);
        assert!(canvas.image().pixels().all(|p| *p == BACKGROUND_COLOR));
    }

    #[test]
    fn test_empty_counts_draw_nothing() {
        let mut canvas = RgbCanvas::new(4, 4, BACKGROUND_COLOR);
        render(&[], &mut canvas);
        assert!(canvas.image().pixels().all(|p| *p == BACKGROUND_COLOR));
    }

    #[test]
    fn test_bars_bottom_aligned() {
        let mut canvas = RgbCanvas::new(4, 10, BACKGROUND_COLOR);
        render(&[2, 4, 1, 0], &mut canvas);

        // Bar 0: half height, left half
        assert_eq!(canvas.pixel(0, 9), LEFT_HALF_COLOR);
        assert_eq!(canvas.pixel(0, 5), LEFT_HALF_COLOR);
        assert_eq!(canvas.pixel(0, 4), BACKGROUND_COLOR);
        // Bar 1: full height
        assert_eq!(canvas.pixel(1, 0), LEFT_HALF_COLOR);
        // Bar 2: right half, floor(1/4 * 10) = 2 rows
        assert_eq!(canvas.pixel(2, 8), RIGHT_HALF_COLOR);
        assert_eq!(canvas.pixel(2, 7), BACKGROUND_COLOR);
        // Bar 3: empty
        assert_eq!(canvas.pixel(3, 9), BACKGROUND_COLOR);
    }

    #[test]
    fn test_wide_bars_when_fewer_slots() {
        let mut canvas = RgbCanvas::new(9, 4, BACKGROUND_COLOR);
        render(&[1, 1, 1], &mut canvas);
        // bar_width = 3; the middle bar starts at x0 = 3 < 4
        assert_eq!(canvas.pixel(5, 0), LEFT_HALF_COLOR);
        assert_eq!(canvas.pixel(6, 0), RIGHT_HALF_COLOR);
    }

    #[test]
    fn test_rerender_is_identical() {
        let counts = [3, 9, 27, 9, 3];
        let mut a = RgbCanvas::new(5, 20, BACKGROUND_COLOR);
        render(&counts, &mut a);
        let first = a.image().clone();
        render(&counts, &mut a);
        assert_eq!(a.image(), &first);
    }

    proptest! {
        #[test]
        fn prop_bar_height_bounded(max in 1u64..1_000_000, f in 0u64..1_000_000, h in 1u32..2000) {
            let f = f.min(max);
            prop_assert!(calculate_bar_height(f, max, h) <= h);
        }
    }
}
