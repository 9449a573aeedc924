//! High-level facade crate for the `board-split-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core types and the gridline detector
//! - end-to-end helpers that take an `image` crate image, find the 8x8 board
//!   and cut it into 64 square tiles resampled to a fixed size
//!
//! ## Quickstart
//!
//! ```no_run
//! use board_split::split_image;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("board.png")?.decode()?;
//! match split_image(&img) {
//!     Some(squares) => println!("{} squares", squares.len()),
//!     None => println!("no board detected"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Squares are ordered row-major from the top-left cell: all 8 cells of the
//! top row left to right, then the next row, matching the rank-then-file
//! reading order of a board photographed from white's side.
//!
//! ## API map
//! - `board_split::core`: grayscale buffers and gridline types.
//! - `board_split::lattice`: gradient projections, peak picking and lattice validation.
//! - `board_split::split_*`, [`extract_squares`]: end-to-end helpers on `image` types.

pub use board_split_core as core;
pub use board_split_lattice as lattice;

pub use board_split_core::{BoardLines, LineSet};
pub use board_split_lattice::{BoardLineDetection, BoardLineDetector, LatticeParams};

mod split;

pub use split::{
    extract_squares, gray_image_from_slice, gray_view, split_from_gray_u8, split_gray,
    split_image, split_image_with, BoardSquares, SplitError, SplitParams, DEFAULT_TILE_SIZE,
};
