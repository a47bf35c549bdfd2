use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use crate::contour::trace_contours;
use crate::error::LocateError;
use crate::moments::{contour_area, contour_moments};
use crate::MarkerLocation;

/// Decode input bytes into a `DynamicImage`.
pub(crate) fn decode_image(input: &[u8]) -> Result<DynamicImage, LocateError> {
    image::load_from_memory(input).map_err(|e| LocateError::DecodeError(e.to_string()))
}

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<ImageFormat, LocateError> {
    image::guess_format(input).map_err(|e| LocateError::DecodeError(e.to_string()))
}

// BT.601 taps in x2^14 fixed point, with the red and blue taps swapped:
// the threshold and area constants were calibrated against a conversion
// that labeled the decoder's channel order the other way around.
const R_TAP: u32 = 1868;
const G_TAP: u32 = 9617;
const B_TAP: u32 = 4899;

/// Convert a color image to single-channel intensity.
pub(crate) fn to_grayscale(image: &RgbImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(gray.pixels_mut()) {
        let [r, g, b] = src.0;
        let weighted =
            R_TAP * u32::from(r) + G_TAP * u32::from(g) + B_TAP * u32::from(b) + (1 << 13);
        dst.0[0] = (weighted >> 14) as u8;
    }
    gray
}

/// Inverted binary threshold: intensity at or above `cutoff` becomes
/// background (0), everything below becomes foreground (255). Isolates dark
/// regions against a light background.
pub(crate) fn binarize(gray: &GrayImage, cutoff: u8) -> GrayImage {
    let mut mask = gray.clone();
    for p in mask.pixels_mut() {
        p.0[0] = if p.0[0] >= cutoff { 0 } else { 255 };
    }
    mask
}

/// Full location pipeline: decode, grayscale, threshold, trace, select.
///
/// Selection takes the first isolated boundary, in trace order, whose
/// enclosed area lies strictly inside `area_bounds`; its centroid is
/// offset-corrected and rounded to 8 decimal digits.
pub(crate) fn locate_pipeline(
    input: &[u8],
    cutoff: u8,
    area_bounds: (f64, f64),
    offset: (f64, f64),
) -> Result<Option<MarkerLocation>, LocateError> {
    let decoded = decode_image(input)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(LocateError::ZeroDimensions);
    }

    let rgb = decoded.to_rgb8();
    let gray = to_grayscale(&rgb);
    let mask = binarize(&gray, cutoff);

    let contours = trace_contours(&mask);
    tracing::debug!(total = contours.len(), "traced contours");

    let (min_area, max_area) = area_bounds;
    for contour in &contours {
        if !contour.is_isolated() {
            continue;
        }
        let area = contour_area(&contour.points);
        if area <= min_area || area >= max_area {
            continue;
        }
        let Some((cx, cy)) = contour_moments(&contour.points).centroid() else {
            continue;
        };
        tracing::debug!(area, cx, cy, "selected boundary");
        return Ok(Some(MarkerLocation {
            x: round8(cx - offset.0),
            y: round8(cy - offset.1),
            area,
        }));
    }

    Ok(None)
}

/// Round to 8 decimal digits.
fn round8(v: f64) -> f64 {
    (v * 1e8).round() / 1e8
}
