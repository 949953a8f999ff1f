use std::thread;

use galton_board::consts::{BACKGROUND_COLOR, LEFT_HALF_COLOR};
use galton_board::sim::NoProgress;
use galton_board::{BoardConfig, GaltonBoard};

#[test]
fn test_save_image_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.png");
    let mut board = GaltonBoard::new(12, 5_000, 120, 80).unwrap();
    board.simulate_with_progress(&mut NoProgress);
    board.save_image(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (120, 80));
    // Tallest bar reaches the top row
    assert!((0..120).any(|x| *image.get_pixel(x, 0) != BACKGROUND_COLOR));
    assert!(image.pixels().any(|p| *p == LEFT_HALF_COLOR));
}

#[test]
fn test_save_image_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("board.png");
    let mut board = GaltonBoard::new(2, 10, 20, 20).unwrap();
    board.simulate_with_progress(&mut NoProgress);

    let err = board.save_image(&path).unwrap_err();
    assert!(err.is_io());
    assert!(!path.exists());
}

#[test]
fn test_full_run_invariants() {
    let config = BoardConfig::new(12, 20_000, 700, 500);
    let mut board = GaltonBoard::with_config(config, 2024).unwrap();
    board.simulate_with_progress(&mut NoProgress);

    assert_eq!(board.slot_counts().len(), 700);
    assert_eq!(board.raw_counts().iter().sum::<u64>(), 20_000);

    let stats = board.stats();
    assert_eq!(stats.total, 20_000);
    // Staggered odd rows bounce right with p = 0.45, pulling the mass left
    assert!((stats.mean - 344.0).abs() < 3.0, "mean {}", stats.mean);
    assert!((stats.std_dev - 57.0).abs() < 5.0, "std dev {}", stats.std_dev);
}

#[test]
fn test_parallel_and_sequential_agree_in_shape() {
    let config = BoardConfig::new(12, 20_000, 700, 500);
    let mut seq = GaltonBoard::with_config(config.clone(), 1).unwrap();
    let mut par = GaltonBoard::with_config(config, 1).unwrap();
    seq.simulate_with_progress(&mut NoProgress);
    par.simulate_parallel(4);

    let (a, b) = (seq.stats(), par.stats());
    assert_eq!(a.total, b.total);
    assert!((a.mean - b.mean).abs() < 3.0);
    assert!((a.std_dev - b.std_dev).abs() / a.std_dev < 0.1);
}

#[test]
fn test_config_file_drives_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = BoardConfig::new(6, 1_000, 90, 40);
    config.elasticity = 0.5;
    config.save(&path).unwrap();

    let loaded = BoardConfig::load(&path).unwrap();
    let mut board = GaltonBoard::with_config(loaded, 3).unwrap();
    board.simulate_with_progress(&mut NoProgress);
    assert_eq!(board.raw_counts().len(), 90);
    assert_eq!(board.config().elasticity, 0.5);
}

#[test]
fn test_concurrent_saves_to_same_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.png");
    let mut board = GaltonBoard::new(12, 20_000, 1500, 1200).unwrap();
    board.simulate_with_progress(&mut NoProgress);

    for _ in 0..5 {
        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let mut board = board.clone();
                    let path = &path;
                    s.spawn(move || board.save_image(path))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for result in results {
            assert!(result.is_ok(), "save failed: {:?}", result);
        }

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (1500, 1200));
    }

    // Only the target survives; no temp files are left behind
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}
