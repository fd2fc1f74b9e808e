//! Viewport: the affine mapping between data space and pixel space.
//!
//! Data space is the continuous coordinate system the user plots in, bounded
//! by `x_limits` and `y_limits`. Pixel space is the integer grid of the render
//! surface with its origin at the top-left corner, so the y-axis is inverted:
//! larger data-y values land higher on screen (smaller pixel-y).
//!
//! The transform functions are pure given the current limits. Pan and zoom
//! mutate the limits but never break the `min < max` invariant; an operation
//! that would is rejected and the limits are left untouched.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A point on the render surface, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which way a zoom step goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

/// Data-space bounds along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    /// Finite bounds with a strictly positive span.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max && self.span().is_finite()
    }

    /// Rescale both bounds around this axis's own midpoint.
    #[must_use]
    pub fn zoomed(&self, direction: ZoomDirection, factor: f64) -> Self {
        let mid = self.midpoint();
        match direction {
            ZoomDirection::In => Self::new(
                (1.0 - factor) * self.min + factor * mid,
                (1.0 - factor) * self.max + factor * mid,
            ),
            ZoomDirection::Out => Self::new(
                (1.0 + factor) * self.min - factor * mid,
                (1.0 + factor) * self.max - factor * mid,
            ),
        }
    }

    #[must_use]
    pub fn shifted(&self, delta: f64) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }
}

impl From<(f64, f64)> for Limits {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Pan/zoom state plus the data ↔ pixel transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pixel_size: (u32, u32),
    x_limits: Limits,
    y_limits: Limits,
}

impl Viewport {
    /// Build a viewport, validating the pixel size and both limit pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if either pixel dimension is
    /// zero or either pair of limits is degenerate or non-finite.
    pub fn new(pixel_size: (u32, u32), x_limits: Limits, y_limits: Limits) -> Result<Self, PlotError> {
        if pixel_size.0 == 0 || pixel_size.1 == 0 {
            return Err(PlotError::InvalidViewport(format!(
                "pixel size must be non-zero, got {}x{}",
                pixel_size.0, pixel_size.1
            )));
        }
        let viewport = Self { pixel_size, x_limits, y_limits };
        viewport.check_limits()?;
        Ok(viewport)
    }

    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    #[must_use]
    pub fn x_limits(&self) -> Limits {
        self.x_limits
    }

    #[must_use]
    pub fn y_limits(&self) -> Limits {
        self.y_limits
    }

    fn check_limits(&self) -> Result<(), PlotError> {
        if !self.x_limits.is_valid() {
            return Err(PlotError::InvalidViewport(format!(
                "degenerate x limits ({}, {})",
                self.x_limits.min, self.x_limits.max
            )));
        }
        if !self.y_limits.is_valid() {
            return Err(PlotError::InvalidViewport(format!(
                "degenerate y limits ({}, {})",
                self.y_limits.min, self.y_limits.max
            )));
        }
        Ok(())
    }

    /// Map a data-space point to the nearest pixel.
    ///
    /// Rounds half to even on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if the limits are degenerate.
    pub fn data_to_pixel(&self, point: Point) -> Result<PixelPoint, PlotError> {
        self.check_limits()?;
        Ok(self.map_unchecked(point))
    }

    /// Map a sequence of data-space points, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if the limits are degenerate.
    pub fn data_to_pixel_batch(&self, points: &[Point]) -> Result<Vec<PixelPoint>, PlotError> {
        self.check_limits()?;
        Ok(points.iter().map(|p| self.map_unchecked(*p)).collect())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn map_unchecked(&self, point: Point) -> PixelPoint {
        let (w, h) = (f64::from(self.pixel_size.0), f64::from(self.pixel_size.1));
        let px = w * (point.x - self.x_limits.min) / self.x_limits.span();
        let py = h * (self.y_limits.max - point.y) / self.y_limits.span();
        PixelPoint::new(px.round_ties_even() as i32, py.round_ties_even() as i32)
    }

    /// Map a pixel back into data space. Exact inverse of [`Self::data_to_pixel`]
    /// up to the rounding that function applies.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if the limits are degenerate.
    pub fn pixel_to_data(&self, pixel: PixelPoint) -> Result<Point, PlotError> {
        self.check_limits()?;
        let (w, h) = (f64::from(self.pixel_size.0), f64::from(self.pixel_size.1));
        Ok(Point::new(
            self.x_limits.min + self.x_limits.span() * f64::from(pixel.x) / w,
            self.y_limits.max - self.y_limits.span() * f64::from(pixel.y) / h,
        ))
    }

    /// Whether `point` lies strictly inside the visible rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x_limits.min
            && point.x < self.x_limits.max
            && point.y > self.y_limits.min
            && point.y < self.y_limits.max
    }

    /// Zoom both axes around their own midpoints.
    ///
    /// There is no aspect-ratio correction: each axis keeps its own span ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if `factor` is not in `(0, 1)` or
    /// the result would be degenerate. The limits are unchanged on error.
    pub fn zoom(&mut self, direction: ZoomDirection, factor: f64) -> Result<(), PlotError> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(PlotError::InvalidViewport(format!("zoom factor {factor} outside (0, 1)")));
        }
        let x_limits = self.x_limits.zoomed(direction, factor);
        let y_limits = self.y_limits.zoomed(direction, factor);
        if !x_limits.is_valid() || !y_limits.is_valid() {
            return Err(PlotError::InvalidViewport(format!("zoom {direction:?} would collapse the limits")));
        }
        self.x_limits = x_limits;
        self.y_limits = y_limits;
        tracing::debug!(?direction, factor, ?x_limits, ?y_limits, "viewport zoomed");
        Ok(())
    }

    /// Translate both limit pairs by a data-space delta.
    ///
    /// The delta is applied as-is; it is not scaled by the current zoom.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if `delta` is non-finite or the
    /// shifted limits would lose precision to the point of collapsing.
    pub fn pan(&mut self, delta: Point) -> Result<(), PlotError> {
        if !delta.is_finite() {
            return Err(PlotError::InvalidViewport(format!("non-finite pan delta ({}, {})", delta.x, delta.y)));
        }
        let x_limits = self.x_limits.shifted(delta.x);
        let y_limits = self.y_limits.shifted(delta.y);
        if !x_limits.is_valid() || !y_limits.is_valid() {
            return Err(PlotError::InvalidViewport("pan would collapse the limits".into()));
        }
        self.x_limits = x_limits;
        self.y_limits = y_limits;
        Ok(())
    }
}
