//! Generate a synthetic marker image to exercise the locator.
//!
//! Writes `synthetic_marker.png`: a 43x43 dark square on a light background,
//! whose traced boundary encloses 1764 pixel units, inside the calibrated
//! area band.
//!
//! Usage:
//!   cargo run --example make_synthetic

use image::{Rgb, RgbImage};
use markerfind::DEFAULT_CENTER_OFFSET;

fn main() {
    let (x0, y0, side) = (60u32, 80u32, 43u32);

    let mut img = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            img.put_pixel(x, y, Rgb([20, 20, 20]));
        }
    }

    let path = "synthetic_marker.png";
    img.save(path).expect("failed to write synthetic image");

    let center = f64::from(side - 1) / 2.0;
    println!("wrote {path}");
    println!(
        "expected output: [{}, {}]",
        f64::from(x0) + center - DEFAULT_CENTER_OFFSET.0,
        f64::from(y0) + center - DEFAULT_CENTER_OFFSET.1,
    );
}
