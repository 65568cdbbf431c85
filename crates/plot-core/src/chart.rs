// File: crates/plot-core/src/chart.rs
// Summary: Render options and the headless PNG pipeline (grid/axes, then curves) on a Skia raster surface.

use anyhow::{Context, Result};
use rand::Rng;
use skia_safe as skia;
use tracing::debug;

use crate::axis::{AxisRenderer, AxisStyle};
use crate::error::PlotError;
use crate::piecewise::PiecewiseCurve;
use crate::request::PlotRequest;
use crate::sampler::{Curve, CurveSampler, SamplingConfig, StyleSpec};
use crate::scale::CoordinateMapper;
use crate::skia_surface::SkiaSurface;
use crate::surface::DrawingSurface;
use crate::theme::{self, Theme};
use crate::types::{DEFAULT_DOMAIN, DEFAULT_RANGE, HEIGHT, REQUEST_STEPS_PER_UNIT, WIDTH};
use crate::view::Viewport;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Domain the request curve is sampled over.
    pub domain: (f64, f64),
    pub sampling: SamplingConfig,
    pub curve_line_width: f64,
    pub axis: AxisStyle,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let theme = Theme::light();
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_range: DEFAULT_RANGE,
            y_range: DEFAULT_RANGE,
            domain: DEFAULT_DOMAIN,
            sampling: SamplingConfig::new(REQUEST_STEPS_PER_UNIT).unwrap_or_default(),
            curve_line_width: 2.0,
            axis: AxisStyle { color: theme.axis_line, ..AxisStyle::default() },
            theme,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Switch theme and keep the axis color in step with it.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.axis.color = theme.axis_line;
        self.theme = theme;
        self
    }

    /// Validated viewport for these options.
    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height, self.x_range, self.y_range)
            .context("invalid plot viewport")
    }
}

/// Draw the grid, axes and labels, then every curve, onto any surface.
pub fn draw_plot<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    mapper: &CoordinateMapper,
    curves: &[(&Curve<'_>, skia::Color)],
    opts: &RenderOptions,
) -> Result<(), PlotError> {
    AxisRenderer::new(mapper, opts.axis, opts.theme).render(surface, opts.draw_labels);
    let sampler = CurveSampler::new(mapper).with_sampling(opts.sampling);
    for (curve, color) in curves {
        sampler.plot(surface, curve, StyleSpec::new(*color, opts.curve_line_width), None)?;
    }
    Ok(())
}

/// Render one curve to PNG bytes. The viewport is validated before any drawing happens.
pub fn render_curve_png(curve: &Curve<'_>, color: skia::Color, opts: &RenderOptions) -> Result<Vec<u8>> {
    let view = opts.viewport()?;
    let mapper = CoordinateMapper::new(view);
    let mut surface = SkiaSurface::new(view.width(), view.height(), opts.theme.background)
        .context("allocate plot surface")?;

    draw_plot(&mut surface, &mapper, &[(curve, color)], opts).context("draw plot")?;

    let bytes = surface.encode_png().context("encode plot")?;
    debug!(bytes = bytes.len(), "plot encoded");
    Ok(bytes)
}

/// Render the piecewise curve described by `request`, in a color picked from a fresh
/// palette permutation.
pub fn render_request_png<R: Rng + ?Sized>(
    request: &PlotRequest,
    opts: &RenderOptions,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let piecewise = PiecewiseCurve::from(request);
    let curve = Curve::new(move |x| piecewise.eval(x), opts.domain)
        .context("invalid curve domain")?;
    let color = theme::pick_curve_color(rng);
    debug!(?request, "rendering plot request");
    render_curve_png(&curve, color, opts)
}
