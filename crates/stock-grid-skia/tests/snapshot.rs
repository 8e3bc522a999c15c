// File: crates/stock-grid-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic grid (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use stock_grid_core::{GridConfig, GridRenderer, NoOverlay, Theme};
use stock_grid_skia::{render_to_png_bytes, RasterOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
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

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_default_grid() {
    let theme = Theme::classic();
    let mut r = GridRenderer::new(GridConfig::default(), &theme);
    let bytes = render_to_png_bytes(&mut r, &mut NoOverlay, &RasterOptions::new(400, 300, &theme)).expect("render");
    write_or_compare(&snapshot_path("default_grid.png"), &bytes);
}

#[test]
fn golden_dense_grid() {
    let theme = Theme::dark();
    let config = GridConfig::new(8, 6, 2, 4.0).expect("config");
    let mut r = GridRenderer::new(config, &theme);
    let bytes = render_to_png_bytes(&mut r, &mut NoOverlay, &RasterOptions::new(480, 320, &theme)).expect("render");
    write_or_compare(&snapshot_path("dense_grid.png"), &bytes);
}
