//! Histogram aggregation
//!
//! Drops `num_balls` independent balls and counts where they land.
//! Progress is reported through an observer so the simulation stays free
//! of I/O.

use std::sync::mpsc;

use rayon::prelude::*;

use super::rng::{BoardRng, RandomSource};
use super::trajectory::compute_bin_index;
use crate::config::BoardConfig;
use crate::consts::PROGRESS_STEPS;

/// Receives `(completed, total)` as balls are simulated
pub trait ProgressObserver {
    fn on_progress(&mut self, completed: u64, total: u64);
}

impl<F: FnMut(u64, u64)> ProgressObserver for F {
    fn on_progress(&mut self, completed: u64, total: u64) {
        self(completed, total)
    }
}

/// Observer that ignores progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _completed: u64, _total: u64) {}
}

/// Observer that logs progress at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, completed: u64, total: u64) {
        log::info!("Simulated {}/{} balls.", completed, total);
    }
}

/// Balls between progress notifications (every ball for tiny runs)
pub fn progress_step(num_balls: u64) -> u64 {
    (num_balls / PROGRESS_STEPS).max(1)
}

/// Simulate every ball sequentially, returning raw per-bin counts.
pub fn aggregate<R, O>(config: &BoardConfig, rng: &mut R, observer: &mut O) -> Vec<u64>
where
    R: RandomSource + ?Sized,
    O: ProgressObserver + ?Sized,
{
    let mut counts = vec![0u64; config.num_bins()];
    let total = config.num_balls;
    let step = progress_step(total);

    for i in 0..total {
        counts[compute_bin_index(config, rng)] += 1;
        if (i + 1) % step == 0 {
            observer.on_progress(i + 1, total);
        }
    }
    counts
}

/// Simulate balls across `partitions` rayon workers.
///
/// Each worker owns a stream split from `rng` and a private count array;
/// arrays are summed once all workers finish. The result depends only on
/// the rng state and `partitions`, never on thread scheduling.
///
/// Workers send completed ball counts over a channel while they run; the
/// caller's thread drains it and notifies `observer` at the same cadence as
/// [`aggregate`].
pub fn aggregate_parallel<O>(
    config: &BoardConfig,
    rng: &mut BoardRng,
    partitions: usize,
    observer: &mut O,
) -> Vec<u64>
where
    O: ProgressObserver + ?Sized,
{
    let partitions = partitions.max(1);
    let total = config.num_balls;
    let step = progress_step(total);
    let streams = rng.partition(partitions);

    let per_worker = total / partitions as u64;
    let remainder = total % partitions as u64;
    let chunk = (step / partitions as u64).max(1);

    let (tx, rx) = mpsc::channel::<u64>();
    let mut partials: Vec<Vec<u64>> = Vec::with_capacity(partitions);

    rayon::in_place_scope(|scope| {
        let partials = &mut partials;
        scope.spawn(move |_| {
            *partials = streams
                .into_par_iter()
                .enumerate()
                .map(|(i, mut stream)| {
                    let balls = per_worker + u64::from((i as u64) < remainder);
                    let mut counts = vec![0u64; config.num_bins()];
                    for b in 0..balls {
                        counts[compute_bin_index(config, &mut stream)] += 1;
                        if (b + 1) % chunk == 0 {
                            let _ = tx.send(chunk);
                        }
                    }
                    if balls % chunk != 0 {
                        let _ = tx.send(balls % chunk);
                    }
                    counts
                })
                .collect();
        });

        // Ends once the spawned job drops the last sender
        let mut completed = 0;
        let mut next_report = step;
        for done in rx {
            completed += done;
            while next_report <= completed {
                observer.on_progress(next_report, total);
                next_report += step;
            }
        }
    });

    let mut merged = vec![0u64; config.num_bins()];
    for counts in partials {
        for (total_count, count) in merged.iter_mut().zip(counts) {
            *total_count += count;
        }
    }
    merged
}
