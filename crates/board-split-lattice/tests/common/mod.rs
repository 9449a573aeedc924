use board_split_core::GrayImage;

pub const LIGHT: u8 = 220;
pub const DARK: u8 = 30;

/// Paint an 8x8 checkerboard whose cell boundaries are `rows`/`cols`
/// (9 entries each, end-exclusive). Pixels outside the board get `background`.
pub fn paint_board(
    width: usize,
    height: usize,
    rows: &[usize; 9],
    cols: &[usize; 9],
    background: u8,
) -> GrayImage {
    let cell_index = |lines: &[usize; 9], v: usize| -> Option<usize> {
        lines.windows(2).position(|w| w[0] <= v && v < w[1])
    };
    GrayImage::from_fn(width, height, |x, y| {
        match (cell_index(cols, x), cell_index(rows, y)) {
            (Some(i), Some(j)) if (i + j) % 2 == 0 => LIGHT,
            (Some(_), Some(_)) => DARK,
            _ => background,
        }
    })
}

/// Evenly spaced lines `start, start + cell, ..., start + 8 * cell`.
pub fn even_lines(start: usize, cell: usize) -> [usize; 9] {
    std::array::from_fn(|k| start + k * cell)
}
