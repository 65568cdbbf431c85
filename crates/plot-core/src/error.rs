// File: crates/plot-core/src/error.rs
// Summary: Library error type for viewport/curve configuration and surface failures.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    /// A mathematical range with zero, negative or non-finite span on the named axis.
    #[error("degenerate viewport on {axis} axis: min {min} must be below max {max}")]
    DegenerateViewport { axis: char, min: f64, max: f64 },

    #[error("invalid canvas size {width}x{height}; both sides must be positive")]
    InvalidCanvasSize { width: i32, height: i32 },

    #[error("invalid curve domain [{start}, {end}]")]
    InvalidDomain { start: f64, end: f64 },

    #[error("steps per unit must be positive")]
    InvalidSampling,

    #[error("curve needs {requested} sampling steps; at most {limit} are allowed")]
    TooManySamples { requested: f64, limit: usize },

    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },

    #[error("encode {0} failed")]
    Encode(&'static str),
}
