// File: crates/demo/src/data.rs
// Summary: OHLC loading from CSV (Binance-like headers) and a deterministic synthetic session.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: f64, // epoch seconds, or row index when the file has no time column
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

/// Resolve path, trying .csv/.cvs swap if needed.
pub fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            tracing::info!(path = %alt.display(), "extension swapped between .csv/.cvs");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => { alt.set_extension("csv"); Some(alt) }
        "csv" => { alt.set_extension("cvs"); Some(alt) }
        _ => None,
    }
}

/// Load OHLC rows; rows missing any price column are skipped.
pub fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    if [i_open, i_high, i_low, i_close].iter().any(Option::is_none) {
        tracing::warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {} of {}", row + 1, path.display()))?;
        let parse = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok());
        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time_to_f64)
            .unwrap_or(row as f64);
        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            out.push(Candle { t, o, h, l, c });
        }
    }
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        return Some(if n > 10_i64.pow(12) { n as f64 / 1000.0 } else { n as f64 });
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp() as f64)
}

/// One trading session of minute bars, 09:30 to 15:00 with the lunch gap
/// folded out (241 bars), following a damped wave around 10.0.
pub fn synthetic_session() -> Vec<Candle> {
    const OPEN: i64 = 1_704_187_800; // 2024-01-02 09:30:00 UTC
    let mut prev = 10.0f64;
    (0..241)
        .map(|i| {
            let x = i as f64;
            let c = 10.0 + 0.35 * (x / 23.0).sin() * (-x / 400.0).exp() + 0.04 * (x / 3.0).cos();
            let o = prev;
            let wiggle = 0.02 + 0.01 * (x / 5.0).sin().abs();
            prev = c;
            // skip 11:30 -> 13:00
            let minute = if i > 120 { i as i64 + 90 } else { i as i64 };
            Candle { t: (OPEN + minute * 60) as f64, o, h: o.max(c) + wiggle, l: o.min(c) - wiggle, c }
        })
        .collect()
}

/// Label for a candle's time value.
pub fn time_label(t: f64) -> String {
    if t >= 1e9 {
        if let Some(dt) = chrono::DateTime::from_timestamp(t as i64, 0) {
            return dt.format("%H:%M").to_string();
        }
    }
    format!("#{}", t as i64)
}

pub fn price_range(c: &[Candle]) -> (f64, f64) {
    c.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), k| (lo.min(k.l), hi.max(k.h)))
}
