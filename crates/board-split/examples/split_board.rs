use board_split::lattice::BoardLineDetector;
use board_split::{gray_view, LatticeParams};
use image::ImageReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: split_board <image_path>");
        return Ok(());
    };

    let img = ImageReader::open(path)?.decode()?.to_luma8();
    let detector = BoardLineDetector::new(LatticeParams::default());
    let debug = detector.detect_debug(&gray_view(&img));

    println!("row peaks: {:?}", debug.rows.peaks);
    println!("col peaks: {:?}", debug.cols.peaks);
    match debug.lines {
        Some(lines) => {
            println!("rows {:?}", lines.rows.as_slice());
            println!("cols {:?}", lines.cols.as_slice());
        }
        None => println!("no board detected"),
    }

    Ok(())
}
