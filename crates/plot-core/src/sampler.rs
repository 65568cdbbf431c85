// File: crates/plot-core/src/sampler.rs
// Summary: Curve sampling into a single stroked path with discontinuity markers and viewport clipping.
// Notes:
// - Each step is either a line (sample inside the canvas rows) or a move (sample outside):
//   leaving the canvas cuts the stroke, re-entering draws from the off-canvas point.
// - A discontinuity marker and the move-or-line decision are independent; both can fire
//   for the same sample.

use std::f64::consts::TAU;

use skia_safe as skia;
use tracing::{debug, warn};

use crate::error::PlotError;
use crate::scale::CoordinateMapper;
use crate::surface::{DrawingSurface, Transform};
use crate::types::{
    DEFAULT_STEPS_PER_UNIT, DISCONTINUITY_DIVISOR, MARKER_CENTER_DX, MARKER_LIFT_DX, MARKER_RADIUS,
    MAX_SAMPLES,
};

/// A real function over a closed domain. The function may return NaN (or an infinity) where
/// it is undefined; such samples are skipped.
pub struct Curve<'a> {
    func: Box<dyn Fn(f64) -> f64 + 'a>,
    domain_start: f64,
    domain_end: f64,
}

impl<'a> Curve<'a> {
    pub fn new(func: impl Fn(f64) -> f64 + 'a, (start, end): (f64, f64)) -> Result<Self, PlotError> {
        if !(start.is_finite() && end.is_finite()) || start > end {
            return Err(PlotError::InvalidDomain { start, end });
        }
        Ok(Self { func: Box::new(func), domain_start: start, domain_end: end })
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingConfig {
    steps_per_unit: u32,
}

impl SamplingConfig {
    pub fn new(steps_per_unit: u32) -> Result<Self, PlotError> {
        if steps_per_unit == 0 {
            return Err(PlotError::InvalidSampling);
        }
        Ok(Self { steps_per_unit })
    }

    pub fn steps_per_unit(&self) -> u32 { self.steps_per_unit }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { steps_per_unit: DEFAULT_STEPS_PER_UNIT }
    }
}

/// Per-draw stroke settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSpec {
    pub color: skia::Color,
    pub line_width: f64,
}

impl StyleSpec {
    pub fn new(color: skia::Color, line_width: f64) -> Self {
        Self { color, line_width }
    }
}

/// What one `plot` call emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleReport {
    /// Curve evaluations, the initial one included.
    pub samples: usize,
    pub lines: usize,
    /// Pen moves for out-of-view samples or after a skipped sample (the initial move excluded).
    pub moves: usize,
    pub markers: usize,
    /// Samples dropped because the curve or the mapping produced a non-finite value.
    pub skipped: usize,
}

/// Last plotted position. Lives for one `plot` call.
struct Pen {
    pixel_x: f64,
    pixel_y_prev: Option<f64>,
}

pub struct CurveSampler<'a> {
    mapper: &'a CoordinateMapper,
    sampling: SamplingConfig,
}

impl<'a> CurveSampler<'a> {
    pub fn new(mapper: &'a CoordinateMapper) -> Self {
        Self { mapper, sampling: SamplingConfig::default() }
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Jump threshold in pixels: a third of a unit, so it follows canvas size and zoom.
    pub fn discontinuity_threshold(&self) -> f64 {
        self.mapper.viewport().unit_height() / DISCONTINUITY_DIVISOR
    }

    /// Sample `curve` across its domain and stroke the result once.
    /// `steps_per_unit` overrides the sampler's config for this curve; zero is ignored.
    /// Fails without touching the surface when the domain needs more than `MAX_SAMPLES` steps.
    pub fn plot<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        curve: &Curve<'_>,
        style: StyleSpec,
        steps_per_unit: Option<u32>,
    ) -> Result<SampleReport, PlotError> {
        let view = self.mapper.viewport();
        let steps = steps_per_unit
            .filter(|&s| s > 0)
            .unwrap_or(self.sampling.steps_per_unit);
        let step_x = view.unit_width() / steps as f64;
        let threshold = self.discontinuity_threshold();
        let (start, end) = curve.domain();
        // Index-based domain values avoid drift from repeated addition of 1/steps.
        let requested = ((end - start) * steps as f64 + 1e-9).floor();
        if !(requested <= MAX_SAMPLES as f64) {
            return Err(PlotError::TooManySamples { requested, limit: MAX_SAMPLES });
        }
        let count = requested as usize;

        surface.begin_path();
        surface.set_transform(Transform::centered_flipped(view.width(), view.height()));
        surface.set_stroke_style(style.color);
        surface.set_line_width(style.line_width);

        let mut report = SampleReport { samples: 1, ..SampleReport::default() };
        let mut pen = Pen {
            pixel_x: self.mapper.to_pixel_x(start),
            pixel_y_prev: finite(self.mapper.to_pixel_y(curve.eval(start))),
        };
        match pen.pixel_y_prev {
            Some(y) => surface.move_to(pen.pixel_x, y),
            None => report.skipped += 1,
        }

        for k in 1..=count {
            let x = start + k as f64 / steps as f64;
            let next_x = pen.pixel_x + step_x;
            report.samples += 1;

            let Some(y) = finite(self.mapper.to_pixel_y(curve.eval(x))) else {
                report.skipped += 1;
                pen.pixel_x = next_x;
                pen.pixel_y_prev = None;
                continue;
            };

            match pen.pixel_y_prev {
                Some(prev) if (y - prev).abs() > threshold => {
                    surface.move_to(pen.pixel_x + MARKER_LIFT_DX, y);
                    surface.arc(pen.pixel_x + MARKER_CENTER_DX, y, MARKER_RADIUS, 0.0, TAU);
                    report.markers += 1;
                    line_or_move(surface, self.mapper, next_x, y, &mut report);
                }
                Some(_) => line_or_move(surface, self.mapper, next_x, y, &mut report),
                // Resuming after a gap: never connect across it.
                None => {
                    surface.move_to(next_x, y);
                    report.moves += 1;
                }
            }

            pen.pixel_x = next_x;
            pen.pixel_y_prev = Some(y);
        }

        surface.stroke();
        surface.close_path();

        if report.skipped > 0 {
            warn!(skipped = report.skipped, "curve produced non-finite samples");
        }
        debug!(
            samples = report.samples,
            lines = report.lines,
            moves = report.moves,
            markers = report.markers,
            "curve plotted"
        );
        Ok(report)
    }
}

/// Line to an in-view sample, move to an out-of-view one.
fn line_or_move<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    mapper: &CoordinateMapper,
    x: f64,
    y: f64,
    report: &mut SampleReport,
) {
    if mapper.contains_pixel_y(y) {
        surface.line_to(x, y);
        report.lines += 1;
    } else {
        surface.move_to(x, y);
        report.moves += 1;
    }
}

#[inline]
fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}
