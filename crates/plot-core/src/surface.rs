// File: crates/plot-core/src/surface.rs
// Summary: Drawing-surface contract consumed by the renderers, plus an in-memory recording surface.

use skia_safe as skia;

/// 2D affine transform in canvas order: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Origin at the canvas center, y growing downward (text frame).
    pub fn centered(width: i32, height: i32) -> Self {
        Self { e: width as f64 / 2.0, f: height as f64 / 2.0, ..Self::IDENTITY }
    }

    /// Origin at the canvas center, y growing upward (math frame).
    pub fn centered_flipped(width: i32, height: i32) -> Self {
        Self { d: -1.0, ..Self::centered(width, height) }
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y + self.e, self.b * x + self.d * y + self.f)
    }

    pub fn to_skia(&self) -> skia::Matrix {
        skia::Matrix::new_all(
            self.a as f32, self.c as f32, self.e as f32,
            self.b as f32, self.d as f32, self.f as f32,
            0.0, 0.0, 1.0,
        )
    }
}

impl Default for Transform {
    fn default() -> Self { Self::IDENTITY }
}

/// Font request; the first family the font manager knows wins.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub families: Vec<&'static str>,
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    /// Bold monospace used for tick labels.
    pub fn label(size: f32) -> Self {
        Self {
            families: vec!["Consolas", "Menlo", "DejaVu Sans Mono", "Roboto Mono", "monospace"],
            size,
            bold: true,
        }
    }
}

/// Path-based drawing capability with canvas-2D semantics.
///
/// Points passed to `move_to`/`line_to`/`arc` are interpreted in the transform that is current
/// when they are added. `stroke` paints the accumulated path without clearing it; only
/// `begin_path` clears. `arc` connects the current point to the arc start.
pub trait DrawingSurface {
    fn set_transform(&mut self, transform: Transform);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Angles in radians, clockwise in the current frame.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_style(&mut self, color: skia::Color);
    fn set_fill_style(&mut self, color: skia::Color);
    fn set_font(&mut self, font: &FontSpec);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One path-construction command, in the coordinates it was issued with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Close,
}

/// A path as it was when `stroke` was called.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    pub commands: Vec<PathCmd>,
    pub transform: Transform,
    pub line_width: f64,
    pub color: skia::Color,
}

impl StrokedPath {
    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCmd::LineTo { .. })).count()
    }

    pub fn move_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCmd::MoveTo { .. })).count()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &PathCmd> {
        self.commands.iter().filter(|c| matches!(c, PathCmd::Arc { .. }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub transform: Transform,
    pub color: skia::Color,
    pub font: Option<FontSpec>,
}

/// Records every call instead of rasterizing. Useful for tests and for inspecting what a
/// renderer emits.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    transform: Transform,
    path: Vec<PathCmd>,
    line_width: f64,
    stroke_color: skia::Color,
    fill_color: skia::Color,
    font: Option<FontSpec>,
    strokes: Vec<StrokedPath>,
    texts: Vec<TextRun>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            transform: Transform::IDENTITY,
            path: Vec::new(),
            line_width: 1.0,
            stroke_color: skia::Color::BLACK,
            fill_color: skia::Color::BLACK,
            font: None,
            strokes: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn strokes(&self) -> &[StrokedPath] { &self.strokes }
    pub fn texts(&self) -> &[TextRun] { &self.texts }
    /// Commands added since the last `begin_path`.
    pub fn current_path(&self) -> &[PathCmd] { &self.path }
}

impl Default for RecordingSurface {
    fn default() -> Self { Self::new() }
}

impl DrawingSurface for RecordingSurface {
    fn set_transform(&mut self, transform: Transform) { self.transform = transform; }
    fn begin_path(&mut self) { self.path.clear(); }
    fn move_to(&mut self, x: f64, y: f64) { self.path.push(PathCmd::MoveTo { x, y }); }
    fn line_to(&mut self, x: f64, y: f64) { self.path.push(PathCmd::LineTo { x, y }); }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.push(PathCmd::Arc { x, y, radius, start_angle, end_angle });
    }

    fn close_path(&mut self) { self.path.push(PathCmd::Close); }

    fn stroke(&mut self) {
        self.strokes.push(StrokedPath {
            commands: self.path.clone(),
            transform: self.transform,
            line_width: self.line_width,
            color: self.stroke_color,
        });
    }

    fn set_line_width(&mut self, width: f64) { self.line_width = width; }
    fn set_stroke_style(&mut self, color: skia::Color) { self.stroke_color = color; }
    fn set_fill_style(&mut self, color: skia::Color) { self.fill_color = color; }
    fn set_font(&mut self, font: &FontSpec) { self.font = Some(font.clone()); }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.texts.push(TextRun {
            text: text.to_string(),
            x,
            y,
            transform: self.transform,
            color: self.fill_color,
            font: self.font.clone(),
        });
    }
}
