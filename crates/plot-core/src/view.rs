// File: crates/plot-core/src/view.rs
// Summary: Immutable viewport: mathematical ranges plus the pixel canvas they map onto.

use crate::error::PlotError;

/// Mathematical x/y ranges and the pixel canvas size.
/// Contract: `x_max > x_min`, `y_max > y_min`, width and height positive. Enforced by `new`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: i32,
    height: i32,
}

impl Viewport {
    /// Validate and build a viewport. Every mapping divides by the spans, so a degenerate
    /// range is rejected here, before anything is drawn.
    pub fn new(
        width: i32,
        height: i32,
        (x_min, x_max): (f64, f64),
        (y_min, y_max): (f64, f64),
    ) -> Result<Self, PlotError> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidCanvasSize { width, height });
        }
        check_range('x', x_min, x_max)?;
        check_range('y', y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max, width, height })
    }

    pub fn x_min(&self) -> f64 { self.x_min }
    pub fn x_max(&self) -> f64 { self.x_max }
    pub fn y_min(&self) -> f64 { self.y_min }
    pub fn y_max(&self) -> f64 { self.y_max }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    /// Pixels per mathematical unit along x.
    pub fn unit_width(&self) -> f64 { self.width as f64 / self.x_span() }
    /// Pixels per mathematical unit along y.
    pub fn unit_height(&self) -> f64 { self.height as f64 / self.y_span() }

    pub fn half_width(&self) -> f64 { self.width as f64 / 2.0 }
    pub fn half_height(&self) -> f64 { self.height as f64 / 2.0 }
}

fn check_range(axis: char, min: f64, max: f64) -> Result<(), PlotError> {
    if min.is_finite() && max.is_finite() && max > min {
        Ok(())
    } else {
        Err(PlotError::DegenerateViewport { axis, min, max })
    }
}
