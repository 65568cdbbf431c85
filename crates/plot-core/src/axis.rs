// File: crates/plot-core/src/axis.rs
// Summary: Unit grid, bold x/y axes, tick marks and integer tick labels.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::grid::{integers_between, label_ticks};
use crate::scale::CoordinateMapper;
use crate::surface::{DrawingSurface, FontSpec, Transform};
use crate::theme::Theme;
use crate::types::{
    LABEL_FONT_SIZE, MAX_GRID_LINES, TICK_LENGTH, TICK_LINE_WIDTH, X_LABEL_BASELINE,
    X_LABEL_SHIFT_NEGATIVE, X_LABEL_SHIFT_POSITIVE, Y_LABEL_DX, Y_LABEL_SHIFT,
};

/// Stroke settings for the axis lines. The grid uses half of `line_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    pub line_width: f64,
    pub color: skia::Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self { line_width: 2.0, color: skia::Color::BLACK }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisReport {
    pub vertical_grid_lines: usize,
    pub horizontal_grid_lines: usize,
    pub labels: usize,
}

pub struct AxisRenderer<'a> {
    mapper: &'a CoordinateMapper,
    style: AxisStyle,
    theme: Theme,
}

impl<'a> AxisRenderer<'a> {
    pub fn new(mapper: &'a CoordinateMapper, style: AxisStyle, theme: Theme) -> Self {
        Self { mapper, style, theme }
    }

    /// Grid, axes and (optionally) tick labels.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S, draw_labels: bool) -> AxisReport {
        let mut report = self.draw_grid_and_axes(surface);
        if draw_labels {
            report.labels = self.draw_tick_labels(surface);
        }
        debug!(
            vertical = report.vertical_grid_lines,
            horizontal = report.horizontal_grid_lines,
            labels = report.labels,
            "axes rendered"
        );
        report
    }

    /// Light grid on every integer strictly inside the ranges, then the two axes through
    /// pixel zero.
    pub fn draw_grid_and_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> AxisReport {
        let view = self.mapper.viewport();
        let (cw, ch) = (view.half_width(), view.half_height());
        surface.set_transform(Transform::centered_flipped(view.width(), view.height()));

        surface.begin_path();
        surface.set_line_width(self.style.line_width / 2.0);
        surface.set_stroke_style(self.theme.grid);

        let xs = integers_between(view.x_min(), view.x_max());
        for &i in &xs {
            let px = self.mapper.to_pixel_x(i as f64);
            surface.move_to(px, -ch);
            surface.line_to(px, ch);
        }
        let ys = integers_between(view.y_min(), view.y_max());
        for &i in &ys {
            let py = self.mapper.to_pixel_y(i as f64);
            surface.move_to(cw, py);
            surface.line_to(-cw, py);
        }
        surface.stroke();
        surface.close_path();
        if view.x_span() > MAX_GRID_LINES as f64 || view.y_span() > MAX_GRID_LINES as f64 {
            warn!(
                x_span = view.x_span(),
                y_span = view.y_span(),
                limit = MAX_GRID_LINES,
                "range too wide for a unit grid; grid lines skipped"
            );
        }

        surface.begin_path();
        surface.set_line_width(self.style.line_width);
        surface.set_stroke_style(self.style.color);
        surface.move_to(-cw, 0.0);
        surface.line_to(cw, 0.0);
        surface.move_to(0.0, -ch);
        surface.line_to(0.0, ch);
        surface.stroke();
        surface.close_path();

        AxisReport {
            vertical_grid_lines: xs.len(),
            horizontal_grid_lines: ys.len(),
            labels: 0,
        }
    }

    /// Tick marks and integer labels for every non-zero grid value. Drawn in the unflipped
    /// centered frame so glyphs read upright; y positions are negated accordingly.
    pub fn draw_tick_labels<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> usize {
        let view = self.mapper.viewport();
        let unit_width = view.unit_width();
        let unit_height = view.unit_height();

        surface.set_transform(Transform::centered(view.width(), view.height()));
        surface.begin_path();
        surface.set_line_width(TICK_LINE_WIDTH);
        surface.set_stroke_style(self.style.color);
        surface.set_font(&FontSpec::label(LABEL_FONT_SIZE));
        surface.set_fill_style(self.theme.label);

        let mut labels = 0;
        for i in label_ticks(view.x_min(), view.x_max()) {
            let px = self.mapper.to_pixel_x(i as f64);
            surface.move_to(px, 0.0);
            surface.line_to(px, TICK_LENGTH);
            let shift = if i < 0 { X_LABEL_SHIFT_NEGATIVE } else { X_LABEL_SHIFT_POSITIVE };
            surface.fill_text(&i.to_string(), px - unit_width * shift, X_LABEL_BASELINE);
            labels += 1;
        }
        for i in label_ticks(view.y_min(), view.y_max()) {
            let py = -self.mapper.to_pixel_y(i as f64);
            surface.move_to(0.0, py);
            surface.line_to(-TICK_LENGTH, py);
            surface.fill_text(&i.to_string(), Y_LABEL_DX, py + unit_height * Y_LABEL_SHIFT);
            labels += 1;
        }
        surface.stroke();
        surface.close_path();
        labels
    }
}
