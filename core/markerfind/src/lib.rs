//! Locate a small dark blob marker in an image.
//!
//! Decodes the input, isolates dark regions with a fixed inverted threshold,
//! traces region boundaries with two-level nesting, and reports the centroid
//! of the first isolated boundary whose enclosed area falls inside a
//! calibrated band. The coordinates are offset-corrected and rounded to 8
//! decimal digits.
//!
//! # Example
//!
//! ```no_run
//! use markerfind::MarkerLocator;
//!
//! let bytes = std::fs::read("capture.png").unwrap();
//! match MarkerLocator::new(bytes).unwrap().locate().unwrap() {
//!     Some(loc) => println!("marker at ({}, {})", loc.x, loc.y),
//!     None => println!("no marker"),
//! }
//! ```
#![warn(missing_docs)]

mod contour;
mod error;
mod moments;
mod pipeline;

/// Error type returned by markerfind operations.
pub use error::LocateError;

/// Intensity cutoff for the inverted binary threshold (0-255 scale). Pixels
/// at or above the cutoff are background.
pub const DEFAULT_THRESHOLD: u8 = 180;

/// Exclusive bounds on the enclosed area of a qualifying boundary, in pixel
/// units. Calibrated to the marker's size at the expected image scale.
pub const DEFAULT_AREA_BOUNDS: (f64, f64) = (1700.0, 1800.0);

/// Fixed calibration offset subtracted from the centroid, in pixels.
pub const DEFAULT_CENTER_OFFSET: (f64, f64) = (30.0, 30.0);

/// Location of a detected marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLocation {
    /// X coordinate in pixels, offset-adjusted and rounded to 8 decimals.
    pub x: f64,

    /// Y coordinate in pixels, offset-adjusted and rounded to 8 decimals.
    pub y: f64,

    /// Enclosed area of the selected boundary, in pixel units.
    pub area: f64,
}

/// Builder for locating a marker in encoded image bytes.
///
/// Decodes nothing up front beyond a container check; the full pipeline runs
/// once in [`locate`](Self::locate). The detection parameters default to the
/// calibrated constants and exist as overrides for tests and embedders.
pub struct MarkerLocator {
    input: Vec<u8>,
    threshold: u8,
    area_bounds: (f64, f64),
    offset: (f64, f64),
}

impl MarkerLocator {
    /// Create a locator from raw encoded image bytes (PNG, JPEG, WebP, ...).
    pub fn new(input: Vec<u8>) -> Result<Self, LocateError> {
        // Validate that the input carries a recognizable raster container
        pipeline::detect_format(&input)?;

        Ok(Self {
            input,
            threshold: DEFAULT_THRESHOLD,
            area_bounds: DEFAULT_AREA_BOUNDS,
            offset: DEFAULT_CENTER_OFFSET,
        })
    }

    /// Override the intensity cutoff (default: [`DEFAULT_THRESHOLD`]).
    pub fn threshold(mut self, cutoff: u8) -> Self {
        self.threshold = cutoff;
        self
    }

    /// Override the exclusive area bounds (default: [`DEFAULT_AREA_BOUNDS`]).
    pub fn area_bounds(mut self, min: f64, max: f64) -> Self {
        self.area_bounds = (min, max);
        self
    }

    /// Override the centroid offset (default: [`DEFAULT_CENTER_OFFSET`]).
    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = (dx, dy);
        self
    }

    /// Run the pipeline once, consuming the builder.
    ///
    /// `Ok(None)` means the image decoded fine but no boundary passed the
    /// nesting and area filters; decode failures are errors, never `None`.
    pub fn locate(self) -> Result<Option<MarkerLocation>, LocateError> {
        let (min, max) = self.area_bounds;
        if min >= max {
            return Err(LocateError::InvalidAreaBounds(min, max));
        }

        pipeline::locate_pipeline(&self.input, self.threshold, self.area_bounds, self.offset)
    }
}
