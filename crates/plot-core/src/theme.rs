// File: crates/plot-core/src/theme.rs
// Summary: Background/grid/axis/label colors and the curve color palette.

use rand::seq::SliceRandom;
use rand::Rng;
use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub label: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_rgb(211, 211, 211), // lightgray
            axis_line: skia::Color::BLACK,
            label: skia::Color::from_rgb(128, 128, 128), // gray
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_line: skia::Color::from_argb(255, 220, 220, 230),
            label: skia::Color::from_argb(255, 160, 160, 170),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

const CURVE_PALETTE_RGB: [u32; 15] = [
    0xe23275, 0x40c661, 0x1e166b, 0xc7df52, 0x5f0063,
    0x5e8400, 0xff8ef6, 0x6d3800, 0xb5a6ff, 0xad1e15,
    0x0181ca, 0xff9c64, 0x6c163b, 0xfca0cb, 0x7d0033,
];

/// The curve palette in its canonical order.
pub fn curve_palette() -> Vec<skia::Color> {
    CURVE_PALETTE_RGB
        .iter()
        .map(|rgb| skia::Color::new(0xFF00_0000 | rgb))
        .collect()
}

/// A fresh permutation of the palette drawn from a request-scoped random source.
pub fn shuffled_palette<R: Rng + ?Sized>(rng: &mut R) -> Vec<skia::Color> {
    let mut colors = curve_palette();
    colors.shuffle(rng);
    colors
}

/// First color of a fresh permutation.
pub fn pick_curve_color<R: Rng + ?Sized>(rng: &mut R) -> skia::Color {
    shuffled_palette(rng)
        .first()
        .copied()
        .unwrap_or(skia::Color::BLACK)
}
