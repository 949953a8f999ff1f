//! Moving-average smoothing of raw slot counts

use crate::consts::SMOOTHING_HALF_WIDTH;

/// Centered integer moving average.
///
/// The window is truncated at the ends rather than wrapped, so edge bins
/// average over fewer samples.
pub fn smooth(raw: &[u64]) -> Vec<u64> {
    smooth_with_half_width(raw, SMOOTHING_HALF_WIDTH)
}

pub fn smooth_with_half_width(raw: &[u64], half_width: usize) -> Vec<u64> {
    let len = raw.len();
    (0..len)
        .map(|i| {
            let start = i.saturating_sub(half_width);
            let end = (i + half_width + 1).min(len);
            let window = &raw[start..end];
            window.iter().sum::<u64>() / window.len() as u64
        })
        .collect()
}
