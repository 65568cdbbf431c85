// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plotting engine and the PNG render pipeline.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod piecewise;
pub mod request;
pub mod sampler;
pub mod scale;
pub mod skia_surface;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{AxisRenderer, AxisReport, AxisStyle};
pub use chart::{draw_plot, render_curve_png, render_request_png, RenderOptions};
pub use error::PlotError;
pub use piecewise::PiecewiseCurve;
pub use request::PlotRequest;
pub use sampler::{Curve, CurveSampler, SampleReport, SamplingConfig, StyleSpec};
pub use scale::CoordinateMapper;
pub use skia_surface::SkiaSurface;
pub use surface::{DrawingSurface, FontSpec, PathCmd, RecordingSurface, StrokedPath, Transform};
pub use theme::Theme;
pub use view::Viewport;
