/// Borrowed single-channel 8-bit image, row-major, no padding between rows.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl<'a> GrayImageView<'a> {
    /// Wrap a raw buffer. Returns `None` if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Option<Self> {
        let expected = width.checked_mul(height)?;
        (data.len() == expected).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Sample at signed coordinates; anything outside the image reads as 0.
    #[inline]
    pub fn get_or_zero(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 0;
        }
        self.data[y as usize * self.width + x as usize]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_mismatched_buffer() {
        let data = vec![0u8; 11];
        assert!(GrayImageView::new(3, 4, &data).is_none());
        assert!(GrayImageView::new(11, 1, &data).is_some());
    }

    #[test]
    fn out_of_bounds_reads_as_zero() {
        let img = GrayImage::from_fn(2, 2, |x, y| (10 * (y * 2 + x) + 1) as u8);
        let view = img.view();
        assert_eq!(view.get_or_zero(0, 0), 1);
        assert_eq!(view.get_or_zero(1, 1), 31);
        assert_eq!(view.get_or_zero(-1, 0), 0);
        assert_eq!(view.get_or_zero(0, 2), 0);
        assert!(!view.is_empty());
    }
}
