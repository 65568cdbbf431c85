// File: crates/plot-core/src/skia_surface.rs
// Summary: CPU raster DrawingSurface on Skia with canvas-2D path semantics and PNG encoding.

use std::f64::consts::TAU;

use skia_safe as skia;

use crate::error::PlotError;
use crate::surface::{DrawingSurface, FontSpec, Transform};
use crate::types::MAX_DEVICE_COORD;

pub struct SkiaSurface {
    surface: skia::Surface,
    path: skia::Path,
    transform: Transform,
    stroke: skia::Paint,
    fill: skia::Paint,
    font: skia::Font,
}

impl SkiaSurface {
    /// Create a raster surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: skia::Color) -> Result<Self, PlotError> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(PlotError::SurfaceAllocation { width, height })?;
        surface.canvas().clear(background);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(skia::Color::BLACK);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(skia::Color::BLACK);

        let mut font = skia::Font::default();
        font.set_size(10.0);

        Ok(Self {
            surface,
            path: skia::Path::new(),
            transform: Transform::IDENTITY,
            stroke,
            fill,
            font,
        })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    /// Snapshot the surface and encode it as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, PlotError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(PlotError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Map through the current transform. Finite coordinates too large for `f32` would turn
    /// into infinities and make Skia drop the whole path, so they are clamped first.
    fn device_point(&self, x: f64, y: f64) -> skia::Point {
        let (dx, dy) = self.transform.apply(x, y);
        skia::Point::new(clamp_coord(dx) as f32, clamp_coord(dy) as f32)
    }

    fn resolve_font(spec: &FontSpec) -> skia::Font {
        let style = if spec.bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
        let mgr = skia::FontMgr::default();
        let typeface = spec
            .families
            .iter()
            .find_map(|family| mgr.match_family_style(family, style))
            .or_else(|| mgr.legacy_make_typeface(None, style));
        match typeface {
            Some(tf) => skia::Font::new(tf, spec.size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(spec.size);
                font.set_embolden(spec.bold);
                font
            }
        }
    }
}

impl DrawingSurface for SkiaSurface {
    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device_point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.device_point(x, y);
        if self.path.is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        // Build in local coordinates, then map through the current transform and splice it on
        // with a connecting line from the current point.
        let (x, y) = (clamp_coord(x), clamp_coord(y));
        let mut arc = skia::Path::new();
        let sweep = end_angle - start_angle;
        if sweep.abs() >= TAU {
            let start = (x + radius * start_angle.cos(), y + radius * start_angle.sin());
            arc.move_to((start.0 as f32, start.1 as f32));
            arc.add_circle((x as f32, y as f32), radius as f32, None);
        } else {
            let oval = skia::Rect::from_xywh(
                (x - radius) as f32,
                (y - radius) as f32,
                (2.0 * radius) as f32,
                (2.0 * radius) as f32,
            );
            arc.arc_to(oval, start_angle.to_degrees() as f32, sweep.to_degrees() as f32, true);
        }
        arc.transform(&self.transform.to_skia());
        self.path.add_path(&arc, (0.0, 0.0), skia::path::AddPathMode::Extend);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        self.surface.canvas().draw_path(&self.path, &self.stroke);
    }

    fn set_line_width(&mut self, width: f64) {
        self.stroke.set_stroke_width(width as f32);
    }

    fn set_stroke_style(&mut self, color: skia::Color) {
        self.stroke.set_color(color);
    }

    fn set_fill_style(&mut self, color: skia::Color) {
        self.fill.set_color(color);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = Self::resolve_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let matrix = self.transform.to_skia();
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.concat(&matrix);
        canvas.draw_str(text, (x as f32, y as f32), &self.font, &self.fill);
        canvas.restore();
    }
}

#[inline]
fn clamp_coord(v: f64) -> f64 {
    v.clamp(-MAX_DEVICE_COORD, MAX_DEVICE_COORD)
}
