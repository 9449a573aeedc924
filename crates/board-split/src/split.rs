use board_split_core::{BoardLines, GrayImageView, BOARD_CELLS};
use board_split_lattice::{BoardLineDetection, BoardLineDetector, LatticeParams};
use image::imageops::{self, FilterType};
use image::DynamicImage;
use log::debug;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Side length, in pixels, of every extracted square.
pub const DEFAULT_TILE_SIZE: NonZeroU32 = match NonZeroU32::new(32) {
    Some(size) => size,
    None => unreachable!(),
};

/// Errors produced by the raw-buffer helpers.
///
/// Not finding a board is not an error; see [`split_gray`].
#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },
}

/// Configuration for the end-to-end split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    pub lattice: LatticeParams,
    /// Output square size (tiles are `tile_size x tile_size`). A zero size
    /// fails to deserialize.
    pub tile_size: NonZeroU32,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            lattice: LatticeParams::default(),
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// The 64 squares of a detected board and the gridlines they were cut along.
#[derive(Clone, Debug)]
pub struct BoardSquares {
    pub detection: BoardLineDetection,
    /// Row-major, `squares[row * 8 + col]`.
    pub squares: Vec<::image::GrayImage>,
}

impl BoardSquares {
    #[inline]
    pub fn lines(&self) -> &BoardLines {
        &self.detection.lines
    }

    /// Square at board `(row, col)`, both in `0..8`, row 0 at the top.
    pub fn square(&self, row: usize, col: usize) -> Option<&::image::GrayImage> {
        if row >= BOARD_CELLS || col >= BOARD_CELLS {
            return None;
        }
        self.squares.get(row * BOARD_CELLS + col)
    }

    pub fn into_squares(self) -> Vec<::image::GrayImage> {
        self.squares
    }
}

/// Convert an `image::GrayImage` into the lightweight `board-split-core` view type.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Split a photo of any color mode into 64 squares of 32x32 pixels.
///
/// Returns `None` if no board was found.
pub fn split_image(img: &DynamicImage) -> Option<Vec<::image::GrayImage>> {
    split_image_with(img, &SplitParams::default())
}

/// [`split_image`] with explicit parameters.
pub fn split_image_with(
    img: &DynamicImage,
    params: &SplitParams,
) -> Option<Vec<::image::GrayImage>> {
    let gray = img.to_luma8();
    split_gray(&gray, params).map(BoardSquares::into_squares)
}

/// Detect the board gridlines in `img` and cut out its 64 squares.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn split_gray(img: &::image::GrayImage, params: &SplitParams) -> Option<BoardSquares> {
    let detector = BoardLineDetector::new(params.lattice.clone());
    let Some(detection) = detector.detect(&gray_view(img)) else {
        debug!("no board in {}x{} image", img.width(), img.height());
        return None;
    };
    debug!(
        "board rows {:?} cols {:?}",
        detection.lines.rows.as_slice(),
        detection.lines.cols.as_slice()
    );

    let squares = extract_squares(img, &detection.lines, params.tile_size);
    Some(BoardSquares { detection, squares })
}

/// Crop every cell of `lines` out of `img` and resample it to
/// `tile_size x tile_size` with a Lanczos3 filter.
///
/// Cells are visited row by row, top to bottom, each row left to right.
/// Crop boxes are clamped to the image; a cell with no pixels left yields a
/// black tile.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(img, lines)))]
pub fn extract_squares(
    img: &::image::GrayImage,
    lines: &BoardLines,
    tile_size: NonZeroU32,
) -> Vec<::image::GrayImage> {
    let mut squares = Vec::with_capacity(BOARD_CELLS * BOARD_CELLS);
    for (y0, y1) in lines.rows.cells() {
        for (x0, x1) in lines.cols.cells() {
            squares.push(extract_square(img, x0, y0, x1, y1, tile_size.get()));
        }
    }
    squares
}

fn extract_square(
    img: &::image::GrayImage,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    tile_size: u32,
) -> ::image::GrayImage {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let (x0, x1) = (x0.min(w), x1.min(w));
    let (y0, y1) = (y0.min(h), y1.min(h));
    if x1 <= x0 || y1 <= y0 {
        return ::image::GrayImage::new(tile_size, tile_size);
    }

    let cell = imageops::crop_imm(
        img,
        x0 as u32,
        y0 as u32,
        (x1 - x0) as u32,
        (y1 - y0) as u32,
    )
    .to_image();
    imageops::resize(&cell, tile_size, tile_size, FilterType::Lanczos3)
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::GrayImage, SplitError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(SplitError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(SplitError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(SplitError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    ::image::GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(SplitError::InvalidGrayDimensions { width, height })
}

/// [`split_gray`] on a raw row-major grayscale buffer.
pub fn split_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    params: &SplitParams,
) -> Result<Option<BoardSquares>, SplitError> {
    let img = gray_image_from_slice(width, height, pixels)?;
    Ok(split_gray(&img, params))
}
