//! Core types for chessboard square extraction.
//!
//! This crate is intentionally small. It holds the borrowed/owned grayscale
//! buffers the detector operates on and the line-set types it produces. It
//! does *not* depend on any concrete image decoding crate.

mod image;
mod lines;

pub use image::{GrayImage, GrayImageView};
pub use lines::{
    Axis, BoardLines, InternalLines, LineSet, BOARD_CELLS, INTERNAL_LINES, LINE_COUNT,
};
