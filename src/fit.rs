//! Geometry for fitting an image inside a fixed canvas.

use crate::error::{MemeError, Result};

/// Where and how large to draw an image so it fits a canvas.
///
/// Coordinates are in canvas pixels and refer to the top-left corner of
/// the drawn image. The unused margin on the non-limiting axis is split
/// evenly on both sides (letterboxing).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitGeometry {
    pub width: f64,
    pub height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl FitGeometry {
    /// Right edge of the drawn image.
    #[inline]
    pub fn end_x(&self) -> f64 {
        self.start_x + self.width
    }

    /// Bottom edge of the drawn image.
    #[inline]
    pub fn end_y(&self) -> f64 {
        self.start_y + self.height
    }

    /// Returns `true` when the rectangle lies inside a canvas of the given size.
    pub fn fits_within(&self, canvas_width: f64, canvas_height: f64) -> bool {
        const EPSILON: f64 = 1e-9;
        self.start_x >= -EPSILON
            && self.start_y >= -EPSILON
            && self.end_x() <= canvas_width + EPSILON
            && self.end_y() <= canvas_height + EPSILON
    }
}

/// Shape of an image relative to a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide
    Portrait,
    /// Wider than tall
    Landscape,
    Square,
}

impl Orientation {
    /// Classify an image by its width/height ratio.
    pub fn of(image_width: f64, image_height: f64) -> Self {
        let ratio = image_width / image_height;
        if ratio < 1.0 {
            Orientation::Portrait
        } else if ratio > 1.0 {
            Orientation::Landscape
        } else {
            Orientation::Square
        }
    }
}

/// Compute the geometry that draws an image as large as possible inside a
/// canvas while keeping its aspect ratio, centred on the axis with spare room.
///
/// An image proportionally narrower than the canvas fills the canvas
/// height; any other image fills the canvas width. On a square canvas this
/// means portrait images are height-limited and landscape or square images
/// are width-limited.
///
/// ## Errors
///
/// Returns [`MemeError::InvalidDimension`] when any dimension is zero,
/// negative, NaN or infinite.
///
/// ## Example
///
/// ```rust
/// use meme_core_view::fit_image;
///
/// let fit = fit_image(400.0, 400.0, 800.0, 400.0).unwrap();
/// assert_eq!(fit.width, 400.0);
/// assert_eq!(fit.height, 200.0);
/// assert_eq!(fit.start_x, 0.0);
/// assert_eq!(fit.start_y, 100.0);
/// ```
pub fn fit_image(canvas_width: f64, canvas_height: f64, image_width: f64, image_height: f64) -> Result<FitGeometry> {
    check_dimension("canvas width", canvas_width)?;
    check_dimension("canvas height", canvas_height)?;
    check_dimension("image width", image_width)?;
    check_dimension("image height", image_height)?;

    // Extreme but valid inputs can still overflow or underflow here
    let aspect_ratio = image_width / image_height;
    check_dimension("aspect ratio", aspect_ratio)?;
    let canvas_ratio = canvas_width / canvas_height;
    check_dimension("canvas aspect ratio", canvas_ratio)?;

    let geometry = if aspect_ratio < canvas_ratio {
        // Height-limited: fill vertically, centre horizontally
        let height = canvas_height;
        let width = canvas_height * aspect_ratio;
        FitGeometry {
            width,
            height,
            start_x: (canvas_width - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        // Width-limited: fill horizontally, centre vertically
        let width = canvas_width;
        let height = canvas_width / aspect_ratio;
        FitGeometry {
            width,
            height,
            start_x: 0.0,
            start_y: (canvas_height - height) / 2.0,
        }
    };

    check_dimension("fitted width", geometry.width)?;
    check_dimension("fitted height", geometry.height)?;
    Ok(geometry)
}

fn check_dimension(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MemeError::InvalidDimension { name, value })
    }
}
