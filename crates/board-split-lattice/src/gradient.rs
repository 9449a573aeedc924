//! Directional gradients from two fixed 3x3 kernels.
//!
//! ```text
//! horizontal:  -1 0 1     vertical:  -1 -1 -1
//!              -1 0 1                 0  0  0
//!              -1 0 1                 1  1  1
//! ```
//!
//! Both are applied as a true convolution (kernel flipped), centered, with
//! zero padding, so the fields have the same size as the input and index
//! `(x, y)` refers to the same pixel as in the source image. Both kernels are
//! separable into a 3-tap box and a central difference, which is how they are
//! evaluated here.

use board_split_core::GrayImageView;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Signed gradient values, row-major, same shape as the source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<i32>,
}

impl GradientField {
    fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.width + x]
    }
}

/// Horizontal (`x`, responds to vertical edges) and vertical (`y`, responds to
/// horizontal edges) gradient fields.
#[derive(Clone, Debug)]
pub struct GradientPair {
    pub x: GradientField,
    pub y: GradientField,
}

/// Convolve `img` with the horizontal and vertical kernels.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(img), fields(width = img.width, height = img.height))
)]
pub fn compute_gradients(img: &GrayImageView<'_>) -> GradientPair {
    let (w, h) = (img.width, img.height);

    // 3-tap box sums along the kernel's constant direction, zero padded.
    let mut col_box = vec![0i32; w * h];
    let mut row_box = vec![0i32; w * h];
    for y in 0..h {
        for x in 0..w {
            let (xi, yi) = (x as i64, y as i64);
            col_box[y * w + x] = (-1..=1)
                .map(|d| img.get_or_zero(xi, yi + d) as i32)
                .sum();
            row_box[y * w + x] = (-1..=1)
                .map(|d| img.get_or_zero(xi + d, yi) as i32)
                .sum();
        }
    }

    let at = |buf: &[i32], x: i64, y: i64| -> i32 {
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            0
        } else {
            buf[y as usize * w + x as usize]
        }
    };

    let mut gx = GradientField::zeros(w, h);
    let mut gy = GradientField::zeros(w, h);
    for y in 0..h {
        for x in 0..w {
            let (xi, yi) = (x as i64, y as i64);
            // Flipped kernel: the `+1` tap lands on the previous sample.
            gx.data[y * w + x] = at(&col_box, xi - 1, yi) - at(&col_box, xi + 1, yi);
            gy.data[y * w + x] = at(&row_box, xi, yi - 1) - at(&row_box, xi, yi + 1);
        }
    }

    GradientPair { x: gx, y: gy }
}
