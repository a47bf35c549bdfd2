use image::{Rgb, RgbImage};
use markerfind::{LocateError, MarkerLocator};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn encode_png(img: &RgbImage) -> Vec<u8> {
    use image::codecs::png::PngEncoder;
    use image::ImageEncoder;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
    buffer
}

fn blank(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, color);
        }
    }
}

fn locate(img: &RgbImage) -> Option<markerfind::MarkerLocation> {
    MarkerLocator::new(encode_png(img))
        .unwrap()
        .locate()
        .unwrap()
}

#[test]
fn isolated_blob_yields_offset_centroid() {
    // A filled w x h rectangle traces to a (w-1) x (h-1) boundary polygon,
    // so 43x43 encloses 1764 pixel units, inside the (1700, 1800) band.
    let mut img = blank(200, 200);
    fill_rect(&mut img, 60, 80, 43, 43, BLACK);

    let loc = locate(&img).expect("marker should be found");
    assert_eq!(loc.x, 51.0); // 60 + 21 - 30
    assert_eq!(loc.y, 71.0); // 80 + 21 - 30
    assert_eq!(loc.area, 1764.0);
}

#[test]
fn uniform_image_has_no_marker() {
    assert_eq!(locate(&blank(160, 120)), None);
}

#[test]
fn all_dark_image_has_no_qualifying_boundary() {
    // One giant foreground component, far above the area band
    let img = RgbImage::from_pixel(200, 200, BLACK);
    assert_eq!(locate(&img), None);
}

#[test]
fn hole_boundary_is_excluded_by_nesting() {
    // A dark plate with a light hole: the hole's boundary has the plate as
    // parent, and the plate's own boundary has a child, so neither qualifies
    // even though the hole boundary's area sits inside the band.
    let mut img = blank(200, 200);
    fill_rect(&mut img, 40, 40, 80, 80, BLACK);
    fill_rect(&mut img, 60, 60, 41, 41, WHITE);

    assert_eq!(locate(&img), None);
}

#[test]
fn island_inside_a_hole_is_top_level() {
    // Two-level flattening promotes a solid blob inside another component's
    // hole to top level, so it still qualifies.
    let mut img = blank(200, 200);
    fill_rect(&mut img, 30, 30, 120, 120, BLACK);
    fill_rect(&mut img, 50, 50, 80, 80, WHITE);
    fill_rect(&mut img, 68, 68, 43, 43, BLACK);

    let loc = locate(&img).expect("island should be found");
    assert_eq!(loc.x, 59.0); // 68 + 21 - 30
    assert_eq!(loc.y, 59.0);
    assert_eq!(loc.area, 1764.0);
}

#[test]
fn area_bounds_are_strict_on_both_sides() {
    // 35x51 -> area exactly 1700: excluded
    let mut img = blank(200, 200);
    fill_rect(&mut img, 50, 50, 35, 51, BLACK);
    assert_eq!(locate(&img), None);

    // 41x46 -> area exactly 1800: excluded
    let mut img = blank(200, 200);
    fill_rect(&mut img, 50, 50, 41, 46, BLACK);
    assert_eq!(locate(&img), None);

    // 38x47 -> area 1702: just inside the band
    let mut img = blank(200, 200);
    fill_rect(&mut img, 50, 50, 38, 47, BLACK);
    let loc = locate(&img).expect("1702 is inside the band");
    assert_eq!(loc.area, 1702.0);
    assert_eq!(loc.x, 38.5); // 50 + 18.5 - 30
    assert_eq!(loc.y, 43.0); // 50 + 23 - 30
}

#[test]
fn out_of_band_blobs_are_ignored() {
    let mut img = blank(200, 200);
    fill_rect(&mut img, 20, 20, 10, 10, BLACK); // far too small
    fill_rect(&mut img, 80, 80, 90, 90, BLACK); // far too large
    assert_eq!(locate(&img), None);
}

#[test]
fn first_boundary_in_trace_order_wins() {
    // Two qualifying blobs; tracing discovers the upper one first.
    let mut img = blank(200, 260);
    fill_rect(&mut img, 20, 20, 43, 43, BLACK);
    fill_rect(&mut img, 20, 160, 43, 43, BLACK);

    let loc = locate(&img).expect("a marker should be found");
    assert_eq!(loc.y, 11.0); // 20 + 21 - 30, the upper blob
}

#[test]
fn garbage_bytes_fail_at_construction() {
    assert!(matches!(
        MarkerLocator::new(b"not an image at all".to_vec()),
        Err(LocateError::DecodeError(_))
    ));
}

#[test]
fn truncated_image_is_a_decode_error_not_a_miss() {
    let mut img = blank(200, 200);
    fill_rect(&mut img, 60, 80, 43, 43, BLACK);
    let png = encode_png(&img);

    // Keep the container magic so construction succeeds, then cut the stream
    let result = MarkerLocator::new(png[..40].to_vec()).unwrap().locate();
    assert!(matches!(result, Err(LocateError::DecodeError(_))));
}

#[test]
fn grayscale_channel_order_is_preserved() {
    // RGB (0, 180, 255) grays to 182 under the swapped-tap conversion, so
    // the blob lands on the background side of the 180 cutoff...
    let mut img = blank(200, 200);
    fill_rect(&mut img, 60, 80, 43, 43, Rgb([0, 180, 255]));
    assert_eq!(locate(&img), None);

    // ...while the mirrored color grays to 135 and is found.
    let mut img = blank(200, 200);
    fill_rect(&mut img, 60, 80, 43, 43, Rgb([255, 180, 0]));
    assert!(locate(&img).is_some());
}

#[test]
fn locate_is_idempotent() {
    let mut img = blank(200, 200);
    fill_rect(&mut img, 60, 80, 43, 43, BLACK);
    let bytes = encode_png(&img);

    let first = MarkerLocator::new(bytes.clone()).unwrap().locate().unwrap();
    let second = MarkerLocator::new(bytes).unwrap().locate().unwrap();
    assert_eq!(first, second);
}
