use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use board_split::core::{BoardLines, BOARD_CELLS};
use board_split::{split_gray, BoardSquares, SplitParams};
use clap::Parser;
use image::ImageReader;
use serde::Serialize;

/// Find a chessboard in a photo and cut it into 64 square tiles.
#[derive(Debug, Parser)]
#[command(name = "board-split", version, about)]
struct Cli {
    /// Input image (any format and color mode the `image` crate can decode).
    image: PathBuf,

    /// Directory to write `square_<row>_<col>.png` tiles into.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Side length of the output tiles; overrides the config file.
    #[arg(long)]
    tile_size: Option<NonZeroU32>,

    /// JSON file with `SplitParams`; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report of the detected gridlines here.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log detector internals to stderr. `RUST_LOG`, when set, takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SplitReport {
    image_path: String,
    width: u32,
    height: u32,
    detected: bool,
    lines: Option<BoardLines>,
    row_peaks: Vec<usize>,
    col_peaks: Vec<usize>,
    tiles_written: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("no board detected");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .finish()
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_log_filter(verbose));
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn run(cli: &Cli) -> Result<bool, CliError> {
    let mut params = match &cli.config {
        Some(path) => serde_json::from_str::<SplitParams>(&fs::read_to_string(path)?)?,
        None => SplitParams::default(),
    };
    if let Some(tile_size) = cli.tile_size {
        params.tile_size = tile_size;
    }

    let img = ImageReader::open(&cli.image)?.decode()?.to_luma8();
    let board = split_gray(&img, &params);

    let tiles_written = match (&board, &cli.out_dir) {
        (Some(board), Some(dir)) => write_tiles(board, dir)?,
        _ => 0,
    };

    if let Some(path) = &cli.report {
        let report = SplitReport {
            image_path: cli.image.to_string_lossy().into_owned(),
            width: img.width(),
            height: img.height(),
            detected: board.is_some(),
            lines: board.as_ref().map(|b| *b.lines()),
            row_peaks: board
                .as_ref()
                .map(|b| b.detection.row_peaks.clone())
                .unwrap_or_default(),
            col_peaks: board
                .as_ref()
                .map(|b| b.detection.col_peaks.clone())
                .unwrap_or_default(),
            tiles_written,
        };
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    if let Some(board) = &board {
        let l = board.lines();
        println!("rows {:?}", l.rows.as_slice());
        println!("cols {:?}", l.cols.as_slice());
        if tiles_written > 0 {
            if let Some(dir) = &cli.out_dir {
                println!("wrote {tiles_written} squares to {}", dir.display());
            }
        }
    }

    Ok(board.is_some())
}

fn write_tiles(board: &BoardSquares, dir: &Path) -> Result<usize, CliError> {
    fs::create_dir_all(dir)?;
    let mut written = 0;
    for row in 0..BOARD_CELLS {
        for col in 0..BOARD_CELLS {
            if let Some(square) = board.square(row, col) {
                square.save(dir.join(format!("square_{row}_{col}.png")))?;
                written += 1;
            }
        }
    }
    Ok(written)
}
