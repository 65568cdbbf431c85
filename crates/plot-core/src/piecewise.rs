// File: crates/plot-core/src/piecewise.rs
// Summary: Four-piece demonstration curve driven by the request parameters.

use std::f64::consts::PI;

use crate::request::PlotRequest;

/// Left edge of the ripple piece.
const RIPPLE_START: f64 = -6.0;

/// Breakpoints `a <= b <= c` split the line into four pieces:
/// - `[-6, a)`: ripple around `va`, `va + 2 sin(2πx)`
/// - `[a, b)`: straight line of slope `(va - vb) / (b - a)` reaching `vb` at `b`
/// - `[b, c)`: downward parabola `-(x - va)² + vc`
/// - elsewhere: straight line through `(c, vc)` with slope `(va - vc) / (c - a)`
///
/// Breakpoints are not required to be ordered; out-of-order values simply empty some pieces.
/// Coinciding breakpoints can make a slope infinite; the result is then non-finite and the
/// sampler skips it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiecewiseCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub va: f64,
    pub vb: f64,
    pub vc: f64,
}

impl PiecewiseCurve {
    pub fn eval(&self, x: f64) -> f64 {
        let Self { a, b, c, va, vb, vc } = *self;
        if x >= RIPPLE_START && x < a {
            va + 2.0 * (PI * x * 2.0).sin()
        } else if x >= a && x < b {
            (va - vb) / (b - a) * (x - b) + vb
        } else if x >= b && x < c {
            -(x - va) * (x - va) + vc
        } else {
            -(va - vc) / (a - c) * (x - c) + vc
        }
    }
}

impl From<&PlotRequest> for PiecewiseCurve {
    fn from(req: &PlotRequest) -> Self {
        Self {
            a: req.a as f64,
            b: req.b as f64,
            c: req.c as f64,
            va: req.va as f64,
            vb: req.vb as f64,
            vc: req.vc as f64,
        }
    }
}
