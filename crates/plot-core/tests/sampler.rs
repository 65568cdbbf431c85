// File: crates/plot-core/tests/sampler.rs
// Purpose: Curve sampling behavior: straight paths, discontinuity markers, clipping and NaN gaps.

use plot_core::{
    CoordinateMapper, Curve, CurveSampler, PathCmd, PlotError, RecordingSurface, SamplingConfig,
    StrokedPath, StyleSpec, Transform, Viewport,
};
use skia_safe as skia;

const EPS: f64 = 1e-6;

fn default_mapper() -> CoordinateMapper {
    CoordinateMapper::new(Viewport::new(512, 512, (-7.0, 7.0), (-7.0, 7.0)).expect("valid viewport"))
}

fn plot_one(
    mapper: &CoordinateMapper,
    func: impl Fn(f64) -> f64,
    domain: (f64, f64),
    steps: Option<u32>,
) -> (plot_core::SampleReport, StrokedPath) {
    let curve = Curve::new(func, domain).expect("valid domain");
    let mut surface = RecordingSurface::new();
    let report = CurveSampler::new(mapper).plot(
        &mut surface,
        &curve,
        StyleSpec::new(skia::Color::RED, 2.0),
        steps,
    )
    .expect("bounded sampling");
    assert_eq!(surface.strokes().len(), 1, "exactly one stroke per curve");
    (report, surface.strokes()[0].clone())
}

fn point(cmd: &PathCmd) -> (f64, f64) {
    match *cmd {
        PathCmd::MoveTo { x, y } | PathCmd::LineTo { x, y } | PathCmd::Arc { x, y, .. } => (x, y),
        PathCmd::Close => panic!("close has no point"),
    }
}

#[test]
fn identity_is_one_straight_diagonal() {
    let m = default_mapper();
    let (report, path) = plot_one(&m, |x| x, (-6.0, 6.0), Some(20));

    assert_eq!(report.markers, 0);
    assert_eq!(report.moves, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.samples, 241);
    assert_eq!(report.lines, 240);

    assert!(matches!(path.commands[0], PathCmd::MoveTo { .. }));
    assert_eq!(path.move_count(), 1);
    assert_eq!(path.arcs().count(), 0);

    let edge = 512.0 * 6.0 / 14.0;
    let (x0, y0) = point(&path.commands[0]);
    assert!((x0 + edge).abs() < EPS && (y0 + edge).abs() < EPS, "start ({x0}, {y0})");
    let (x1, y1) = point(path.commands.last().expect("commands"));
    assert!((x1 - edge).abs() < EPS && (y1 - edge).abs() < EPS, "end ({x1}, {y1})");

    for cmd in &path.commands {
        let (x, y) = point(cmd);
        assert!((x - y).abs() < EPS, "off the diagonal at ({x}, {y})");
    }
    assert_eq!(path.transform, Transform::centered_flipped(512, 512));
    assert_eq!(path.color, skia::Color::RED);
    assert_eq!(path.line_width, 2.0);
}

#[test]
fn step_jump_gets_exactly_one_marker_near_zero() {
    let m = default_mapper();
    let step = |x: f64| if x < 0.0 { 0.0 } else { 10.0 };
    let (report, path) = plot_one(&m, step, (-6.0, 6.0), Some(20));

    assert_eq!(report.markers, 1);
    let arcs: Vec<_> = path.arcs().collect();
    assert_eq!(arcs.len(), 1);
    let PathCmd::Arc { x, radius, start_angle, end_angle, .. } = *arcs[0] else { unreachable!() };
    let step_x = 512.0 / 14.0 / 20.0;
    assert!((x - m.to_pixel_x(0.0)).abs() <= step_x + 1.0, "marker at {x}");
    assert_eq!(radius, 3.5);
    assert!((end_angle - start_angle - std::f64::consts::TAU).abs() < 1e-12);
}

#[test]
fn marker_fires_only_above_a_third_of_a_unit() {
    let m = default_mapper();
    let unit = 512.0 / 14.0;
    // Jumps of 0.3 and 0.4 units: only the second crosses the unit/3 threshold.
    let small = |x: f64| if x < 0.0 { 0.0 } else { 0.3 };
    let large = |x: f64| if x < 0.0 { 0.0 } else { 0.4 };
    assert_eq!(plot_one(&m, small, (-1.0, 1.0), Some(10)).0.markers, 0);
    assert_eq!(plot_one(&m, large, (-1.0, 1.0), Some(10)).0.markers, 1);

    let sampler = CurveSampler::new(&m);
    assert!((sampler.discontinuity_threshold() - unit / 3.0).abs() < 1e-12);
}

#[test]
fn steep_continuous_slope_has_no_marker() {
    let m = default_mapper();
    // Slope 5: 0.25 units per sample at 20 steps, below the unit/3 threshold.
    let (report, _) = plot_one(&m, |x| 5.0 * x, (-1.0, 1.0), Some(20));
    assert_eq!(report.markers, 0);
}

#[test]
fn exiting_the_viewport_moves_instead_of_drawing() {
    let m = default_mapper();
    // Leaves the top of the canvas once 1.5x passes y_max = 7, i.e. x > 4.67.
    let (report, path) = plot_one(&m, |x| 1.5 * x, (0.0, 6.0), Some(10));
    assert_eq!(report.markers, 0);

    let top = 256.0;
    for cmd in &path.commands[1..] {
        let (_, y) = point(cmd);
        match cmd {
            PathCmd::LineTo { .. } => assert!(y <= top, "line drawn to off-canvas y {y}"),
            PathCmd::MoveTo { .. } => assert!(y > top, "move for in-view y {y}"),
            _ => {}
        }
    }
    assert!(report.moves > 0);
    assert_eq!(report.moves + report.lines, 60);
}

#[test]
fn re_entry_draws_a_line_from_the_off_canvas_point() {
    let m = default_mapper();
    // Above the canvas for x in [-1, 0), back inside from 0.
    let bump = |x: f64| if x < 0.0 { 7.4 } else { 6.9 };
    let (report, path) = plot_one(&m, bump, (-1.0, 1.0), Some(10));
    // 0.5 units is above the threshold, so the re-entry step is also marked.
    assert_eq!(report.markers, 1);

    let arc_at = path
        .commands
        .iter()
        .position(|c| matches!(c, PathCmd::Arc { .. }))
        .expect("marker");
    // Marker lift precedes the arc; the sample inside the view is then joined with a line.
    assert!(matches!(path.commands[arc_at - 1], PathCmd::MoveTo { .. }));
    assert!(matches!(path.commands[arc_at + 1], PathCmd::LineTo { .. }));
}

#[test]
fn marker_and_clip_compose_on_the_same_sample() {
    let m = default_mapper();
    let jump_out = |x: f64| if x < 0.0 { 0.0 } else { 20.0 };
    let (report, path) = plot_one(&m, jump_out, (-1.0, 1.0), Some(10));
    assert_eq!(report.markers, 1);

    let arc_at = path
        .commands
        .iter()
        .position(|c| matches!(c, PathCmd::Arc { .. }))
        .expect("marker");
    let PathCmd::MoveTo { y, .. } = path.commands[arc_at + 1] else {
        panic!("expected a move after the marker, got {:?}", path.commands[arc_at + 1]);
    };
    assert!(y > 256.0);
}

#[test]
fn nan_samples_are_skipped_without_connecting() {
    let m = default_mapper();
    let holey = |x: f64| if (-0.25..0.25).contains(&x) { f64::NAN } else { 1.0 };
    let (report, path) = plot_one(&m, holey, (-1.0, 1.0), Some(20));

    assert_eq!(report.skipped, 10);
    assert_eq!(report.markers, 0);
    for cmd in &path.commands {
        let (x, y) = point(cmd);
        assert!(x.is_finite() && y.is_finite());
    }
    // One initial move plus one move resuming after the gap.
    assert_eq!(path.move_count(), 2);
}

#[test]
fn curve_starting_undefined_begins_with_a_move() {
    let m = default_mapper();
    let (report, path) = plot_one(&m, |x| x.sqrt(), (-0.5, 2.0), Some(10));
    assert_eq!(report.skipped, 5);
    assert!(matches!(path.commands[0], PathCmd::MoveTo { .. }));
}

#[test]
fn sampling_config_sets_the_default_step() {
    let m = default_mapper();
    let curve = Curve::new(|x| x, (0.0, 1.0)).expect("domain");
    let mut surface = RecordingSurface::new();
    let style = StyleSpec::new(skia::Color::BLUE, 1.0);

    let samples = |sampler: &CurveSampler, surface: &mut RecordingSurface, steps| {
        sampler.plot(surface, &curve, style, steps).expect("bounded sampling").samples
    };
    assert_eq!(samples(&CurveSampler::new(&m), &mut surface, None), 31);

    let sampler = CurveSampler::new(&m).with_sampling(SamplingConfig::new(5).expect("positive"));
    assert_eq!(samples(&sampler, &mut surface, None), 6);
    assert_eq!(samples(&sampler, &mut surface, Some(50)), 51);
    assert_eq!(samples(&sampler, &mut surface, Some(0)), 6);
}

#[test]
fn single_point_domain_only_moves() {
    let m = default_mapper();
    let (report, path) = plot_one(&m, |_| 2.0, (1.0, 1.0), None);
    assert_eq!(report.samples, 1);
    assert_eq!(path.commands.len(), 1);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(Curve::new(|x| x, (2.0, 1.0)).is_err());
    assert!(Curve::new(|x| x, (f64::NEG_INFINITY, 1.0)).is_err());
    assert!(SamplingConfig::new(0).is_err());
}

#[test]
fn oversized_sampling_is_rejected_before_drawing() {
    let m = default_mapper();
    let style = StyleSpec::new(skia::Color::RED, 2.0);
    let mut surface = RecordingSurface::new();

    let wide = Curve::new(|x| x, (-1.0e12, 1.0e12)).expect("domain");
    let err = CurveSampler::new(&m).plot(&mut surface, &wide, style, None).expect_err("too many");
    assert!(matches!(err, PlotError::TooManySamples { limit: 100_000, .. }), "{err}");

    let narrow = Curve::new(|x| x, (0.0, 1.0)).expect("domain");
    let err = CurveSampler::new(&m)
        .plot(&mut surface, &narrow, style, Some(u32::MAX))
        .expect_err("too many");
    assert!(matches!(err, PlotError::TooManySamples { .. }));
    assert!(surface.strokes().is_empty());

    // Right at the limit still samples.
    let report = CurveSampler::new(&m)
        .plot(&mut surface, &narrow, style, Some(100_000))
        .expect("at the limit");
    assert_eq!(report.samples, 100_001);
}
