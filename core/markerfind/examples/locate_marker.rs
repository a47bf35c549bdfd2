//! Locate a marker in an image file and print the result.
//!
//! Usage:
//!   cargo run --example locate_marker -- path/to/image.png

use markerfind::MarkerLocator;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: locate_marker <image>");
    let bytes =
        std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));

    match MarkerLocator::new(bytes).unwrap().locate().unwrap() {
        Some(loc) => println!(
            "marker at ({}, {}), boundary area {}",
            loc.x, loc.y, loc.area
        ),
        None => println!("no qualifying marker in {path}"),
    }
}
