use board_split::{split_from_gray_u8, split_gray, split_image, split_image_with, SplitParams};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use std::num::NonZeroU32;

const LIGHT: u8 = 220;
const DARK: u8 = 30;

/// 400x400 checkerboard with 50 px cells, light in the top-left corner.
fn checkerboard(size: u32, cell: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Luma([LIGHT])
        } else {
            Luma([DARK])
        }
    })
}

fn assert_uniform(img: &GrayImage, value: u8) {
    for p in img.pixels() {
        assert!(
            p.0[0].abs_diff(value) <= 1,
            "expected uniform {value}, got {}",
            p.0[0]
        );
    }
}

#[test]
fn synthetic_board_splits_into_64_squares() {
    let img = checkerboard(400, 50);
    let squares = split_image(&DynamicImage::ImageLuma8(img.clone())).expect("board detected");

    assert_eq!(squares.len(), 64);
    for sq in &squares {
        assert_eq!(sq.dimensions(), (32, 32));
    }

    // top-left cell is light, its right neighbour dark, and so on
    assert_uniform(&squares[0], LIGHT);
    assert_uniform(&squares[1], DARK);
    assert_uniform(&squares[8], DARK);
    assert_uniform(&squares[63], LIGHT);

    let top_left = imageops::crop_imm(&img, 0, 0, 50, 50).to_image();
    let expected = imageops::resize(&top_left, 32, 32, FilterType::Lanczos3);
    assert_eq!(squares[0], expected);
}

#[test]
fn lines_match_the_painted_grid() {
    let img = checkerboard(400, 50);
    let board = split_gray(&img, &SplitParams::default()).expect("board detected");
    let want = [0, 50, 100, 150, 200, 250, 300, 350, 400];
    assert_eq!(board.lines().rows.as_slice(), &want);
    assert_eq!(board.lines().cols.as_slice(), &want);
    assert_eq!(board.square(3, 5), Some(&board.squares[29]));
}

#[test]
fn color_input_is_converted_to_grayscale() {
    let img = RgbImage::from_fn(400, 400, |x, y| {
        if (x / 50 + y / 50) % 2 == 0 {
            Rgb([235, 220, 190])
        } else {
            Rgb([60, 30, 10])
        }
    });
    let squares = split_image(&DynamicImage::ImageRgb8(img)).expect("board detected");
    assert_eq!(squares.len(), 64);
    assert_eq!(squares[10].dimensions(), (32, 32));
}

#[test]
fn blank_image_has_no_board() {
    let img = GrayImage::from_pixel(400, 400, Luma([128]));
    assert!(split_image(&DynamicImage::ImageLuma8(img)).is_none());
}

#[test]
fn tile_size_is_configurable() {
    let img = checkerboard(400, 50);
    let params = SplitParams {
        tile_size: NonZeroU32::new(20).unwrap(),
        ..SplitParams::default()
    };
    let squares = split_image_with(&DynamicImage::ImageLuma8(img), &params).expect("board detected");
    assert!(squares.iter().all(|sq| sq.dimensions() == (20, 20)));
}

#[test]
fn repeated_runs_are_identical() {
    let img = DynamicImage::ImageLuma8(checkerboard(400, 50));
    let a = split_image(&img).expect("board detected");
    let b = split_image(&img).expect("board detected");
    assert_eq!(a, b);
}

#[test]
fn raw_buffer_entry_point_matches_image_entry_point() {
    let img = checkerboard(400, 50);
    let from_raw = split_from_gray_u8(400, 400, img.as_raw(), &SplitParams::default())
        .expect("valid buffer")
        .expect("board detected");
    let from_img = split_gray(&img, &SplitParams::default()).expect("board detected");
    assert_eq!(from_raw.squares, from_img.squares);
    assert_eq!(from_raw.detection, from_img.detection);
}
