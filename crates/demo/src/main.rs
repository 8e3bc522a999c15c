// File: crates/demo/src/main.rs
// Summary: Demo CLI: loads OHLC CSV (or a synthetic session), draws the grid plus an overlay, writes a PNG.

mod data;
mod overlays;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use stock_grid_core::{theme, GridConfig, GridRenderer, Overlay};
use stock_grid_skia::{render_to_png, RasterOptions};

use overlays::{CandleOverlay, TimeShareOverlay};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Style {
    #[default]
    Candles,
    Line,
}

#[derive(Parser, Debug)]
#[command(about = "Render a stock chart grid with a data overlay to PNG")]
struct Args {
    /// OHLC CSV; a synthetic session is used when omitted.
    csv: Option<PathBuf>,
    /// TOML file with a `[grid]` table and optional `theme` / `style`.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "target/out/stock_grid.png")]
    out: PathBuf,
    #[arg(long, default_value_t = 1024)]
    width: i32,
    #[arg(long, default_value_t = 640)]
    height: i32,
    #[arg(long)]
    columns: Option<u32>,
    #[arg(long)]
    rows: Option<u32>,
    #[arg(long)]
    margin: Option<f32>,
    #[arg(long)]
    theme: Option<String>,
    #[arg(long, value_enum)]
    style: Option<Style>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    grid: GridConfig,
    theme: Option<String>,
    style: Option<Style>,
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// CLI flags override the file.
fn grid_config(file: GridConfig, args: &Args) -> Result<GridConfig> {
    let mut grid = file;
    if let Some(n) = args.columns { grid = grid.with_columns(n)?; }
    if let Some(n) = args.rows { grid = grid.with_top_rows(n)?; }
    if let Some(m) = args.margin { grid = grid.with_margin(m)?; }
    Ok(grid)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let file = match &args.config {
        Some(p) => load_file_config(p)?,
        None => FileConfig::default(),
    };
    let grid = grid_config(file.grid, &args).context("invalid grid configuration")?;
    let theme = theme::find(args.theme.as_deref().or(file.theme.as_deref()).unwrap_or("classic"));
    let style = args.style.or(file.style).unwrap_or_default();

    let candles = match &args.csv {
        Some(raw) => {
            let path = data::resolve_path(raw)?;
            data::load_ohlc_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => data::synthetic_session(),
    };
    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check headers and delimiter");
    }
    let (lo, hi) = data::price_range(&candles);
    tracing::info!(rows = candles.len(), low = lo, high = hi, theme = theme.name, ?style, "loaded data");

    let mut overlay: Box<dyn Overlay> = match style {
        Style::Candles => Box::new(CandleOverlay::new(candles)),
        Style::Line => Box::new(TimeShareOverlay::new(candles)),
    };
    let mut renderer = GridRenderer::new(grid, &theme);
    let opts = RasterOptions::new(args.width, args.height, &theme);
    render_to_png(&mut renderer, overlay.as_mut(), &opts, &args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
