// File: crates/plot-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the default request with a fixed seed and labels off (fonts vary across platforms).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use plot_core::{render_request_png, PlotRequest, RenderOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(query: &str) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let mut rng = StdRng::seed_from_u64(0);
    render_request_png(&PlotRequest::from_query(query), &opts, &mut rng).expect("render bytes")
}

#[test]
fn golden_default_request() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/default_request.png");
    write_or_compare(&path, &render(""));
}

#[test]
fn golden_shifted_breakpoints() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/shifted_breakpoints.png");
    write_or_compare(&path, &render("a=-4&b=-1&c=3&va=1&vb=5&vc=-3"));
}

#[test]
fn rendering_is_deterministic_for_a_seed() {
    assert_eq!(render("a=-3"), render("a=-3"));
}
