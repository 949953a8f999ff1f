//! Galton board entry point
//!
//! Simulates a board, saves the histogram image and optionally a JSON
//! statistics report.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use galton_board::consts::{DEFAULT_IMAGE_PATH, DEFAULT_SEED};
use galton_board::{BoardConfig, GaltonBoard, GaltonError, GaltonResult};

const USAGE: &str = "Usage: galton-board [--rows N] [--balls N] [--width N] [--height N] [--seed S] [--config FILE] [--output FILE] [--threads N] [--stats FILE]";

struct Args {
    rows: Option<u32>,
    balls: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
    seed: u64,
    config: Option<PathBuf>,
    output: PathBuf,
    threads: usize,
    stats: Option<PathBuf>,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(value) = value else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, value);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        rows: None,
        balls: None,
        width: None,
        height: None,
        seed: DEFAULT_SEED,
        config: None,
        output: PathBuf::from(DEFAULT_IMAGE_PATH),
        threads: 1,
        stats: None,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--rows" => {
                i += 1;
                parsed.rows = Some(parse_value(flag, args.get(i)));
            }
            "--balls" => {
                i += 1;
                parsed.balls = Some(parse_value(flag, args.get(i)));
            }
            "--width" => {
                i += 1;
                parsed.width = Some(parse_value(flag, args.get(i)));
            }
            "--height" => {
                i += 1;
                parsed.height = Some(parse_value(flag, args.get(i)));
            }
            "--seed" => {
                i += 1;
                parsed.seed = parse_value(flag, args.get(i));
            }
            "--threads" => {
                i += 1;
                parsed.threads = parse_value(flag, args.get(i));
            }
            "--config" => {
                i += 1;
                parsed.config = Some(parse_value(flag, args.get(i)));
            }
            "--output" => {
                i += 1;
                parsed.output = parse_value(flag, args.get(i));
            }
            "--stats" => {
                i += 1;
                parsed.stats = Some(parse_value(flag, args.get(i)));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --rows N        Peg rows (default: 12)");
                println!("  --balls N       Balls to drop (default: 100000)");
                println!("  --width N       Board width in pixels (default: 700)");
                println!("  --height N      Board height in pixels (default: 500)");
                println!("  --seed S        RNG seed (default: {})", DEFAULT_SEED);
                println!("  --config FILE   JSON board config; flags above override it");
                println!("  --output FILE   Image path (default: {})", DEFAULT_IMAGE_PATH);
                println!("  --threads N     Parallel workers for the simulation (default: 1)");
                println!("  --stats FILE    Write distribution statistics as JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }
    parsed
}

fn run(args: Args) -> GaltonResult<()> {
    let mut config = match &args.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.num_rows = rows;
    }
    if let Some(balls) = args.balls {
        config.num_balls = balls;
    }
    if let Some(width) = args.width {
        config.board_width = width;
    }
    if let Some(height) = args.height {
        config.board_height = height;
    }

    let mut board = GaltonBoard::with_config(config, args.seed)?;
    log::info!(
        "Dropping {} balls through {} rows on a {}x{} board (seed {})",
        board.num_balls(),
        board.config().num_rows,
        board.config().board_width,
        board.config().board_height,
        args.seed
    );

    let start = Instant::now();
    if args.threads > 1 {
        board.simulate_parallel(args.threads);
    } else {
        board.simulate();
    }
    log::info!("Simulation finished in {:.2?}", start.elapsed());

    let stats = board.stats();
    log::info!(
        "Mean bin {:.2}, std dev {:.2}, peak {} balls at bin {}",
        stats.mean,
        stats.std_dev,
        stats.peak_count,
        stats.peak_index
    );
    if let Some(path) = &args.stats {
        let json = serde_json::to_string_pretty(&stats)?;
        std::fs::write(path, json).map_err(|e| GaltonError::io(path, e))?;
        log::info!("Statistics written to {}", path.display());
    }

    board.save_image(&args.output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("An unexpected error occurred: {}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                log::error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
