// File: crates/plot-core/src/scale.rs
// Summary: Affine mapping between mathematical coordinates and centered pixel coordinates.

use crate::view::Viewport;

/// Maps math space onto a pixel frame whose origin is the canvas center.
///
/// `to_pixel_x(x) = unit_width * (x - x_min) - width / 2`, and likewise for y. No clamping and
/// no rounding; points outside the viewport map outside `[-w/2, w/2]`. The surface is expected to
/// translate its own origin to the canvas center (see [`crate::surface::Transform`]).
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    view: Viewport,
}

impl CoordinateMapper {
    pub fn new(view: Viewport) -> Self {
        Self { view }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    #[inline]
    pub fn to_pixel_x(&self, x: f64) -> f64 {
        self.view.unit_width() * (x - self.view.x_min()) - self.view.half_width()
    }

    #[inline]
    pub fn to_pixel_y(&self, y: f64) -> f64 {
        self.view.unit_height() * (y - self.view.y_min()) - self.view.half_height()
    }

    #[inline]
    pub fn to_math_x(&self, px: f64) -> f64 {
        (px + self.view.half_width()) / self.view.unit_width() + self.view.x_min()
    }

    #[inline]
    pub fn to_math_y(&self, py: f64) -> f64 {
        (py + self.view.half_height()) / self.view.unit_height() + self.view.y_min()
    }

    pub fn to_pixel(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.to_pixel_x(x), self.to_pixel_y(y))
    }

    pub fn to_math(&self, (px, py): (f64, f64)) -> (f64, f64) {
        (self.to_math_x(px), self.to_math_y(py))
    }

    /// Whether a pixel y lies within the canvas rows, bounds inclusive.
    pub fn contains_pixel_y(&self, py: f64) -> bool {
        let h = self.view.half_height();
        (-h..=h).contains(&py)
    }
}
