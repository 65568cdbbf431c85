// File: crates/plot-core/src/types.rs
// Summary: Shared constants (canvas size, ranges, sampling, marker and label geometry).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 512;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 512;

/// Default mathematical range shown on both axes.
pub const DEFAULT_RANGE: (f64, f64) = (-7.0, 7.0);
/// Default domain the request curve is sampled over.
pub const DEFAULT_DOMAIN: (f64, f64) = (-6.0, 6.0);

/// Samples per mathematical unit when a curve does not override it.
pub const DEFAULT_STEPS_PER_UNIT: u32 = 30;
/// Samples per unit used by the request pipeline.
pub const REQUEST_STEPS_PER_UNIT: u32 = 20;

/// A jump larger than `unit_height / DISCONTINUITY_DIVISOR` pixels is a discontinuity.
pub const DISCONTINUITY_DIVISOR: f64 = 3.0;
/// Radius of the discontinuity marker, in pixels.
pub const MARKER_RADIUS: f64 = 3.5;
/// Pen lift offset before the marker arc, relative to the previous pixel x.
pub const MARKER_LIFT_DX: f64 = 0.7;
/// Marker center offset relative to the previous pixel x.
pub const MARKER_CENTER_DX: f64 = -0.5;

/// Tick mark length in pixels.
pub const TICK_LENGTH: f64 = 3.0;
/// Tick mark stroke width.
pub const TICK_LINE_WIDTH: f64 = 1.5;
/// Baseline of the x-axis labels below the axis.
pub const X_LABEL_BASELINE: f64 = 25.0;
/// Label shift (in units of `unit_width`) for negative x ticks; wider to fit the minus sign.
pub const X_LABEL_SHIFT_NEGATIVE: f64 = 0.5;
/// Label shift (in units of `unit_width`) for positive x ticks.
pub const X_LABEL_SHIFT_POSITIVE: f64 = 0.15;
/// Horizontal offset of y-axis labels from the axis.
pub const Y_LABEL_DX: f64 = -28.0;
/// Vertical shift (in units of `unit_height`) of y-axis labels.
pub const Y_LABEL_SHIFT: f64 = 0.15;
/// Label font size in pixels.
pub const LABEL_FONT_SIZE: f32 = 18.0;

/// Most grid lines drawn per axis; a denser range draws no grid on that axis.
pub const MAX_GRID_LINES: usize = 1024;
/// Most sampling steps one curve may take.
pub const MAX_SAMPLES: usize = 100_000;
/// Device coordinates are clamped to this magnitude before they reach the rasterizer.
pub const MAX_DEVICE_COORD: f64 = 1.0e7;
