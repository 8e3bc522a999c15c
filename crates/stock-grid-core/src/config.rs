// File: crates/stock-grid-core/src/config.rs
// Summary: Grid configuration (counts, margin, dash pattern) validated at set time.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{DEFAULT_BOTTOM_ROW_COUNT, DEFAULT_COLUMN_COUNT, DEFAULT_MARGIN, DEFAULT_TOP_ROW_COUNT};

/// On/off lengths for dashed dividers plus the starting phase.
/// Contract: an even, non-zero number of positive finite intervals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub intervals: Vec<f32>,
    #[serde(default)]
    pub phase: f32,
}

impl DashPattern {
    pub fn new(intervals: Vec<f32>, phase: f32) -> Result<Self> {
        let dash = Self { intervals, phase };
        dash.validate()?;
        Ok(dash)
    }

    fn validate(&self) -> Result<()> {
        if self.intervals.is_empty() || self.intervals.len() % 2 != 0 {
            return Err(reject("dash", "needs an even, non-zero number of intervals"));
        }
        if self.intervals.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(reject("dash", "intervals must be positive and finite"));
        }
        if !self.phase.is_finite() {
            return Err(reject("dash", "phase must be finite"));
        }
        Ok(())
    }

    /// Sum of one on/off cycle.
    pub fn period(&self) -> f32 {
        self.intervals.iter().sum()
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self { intervals: vec![2.0, 2.0, 2.0, 2.0], phase: 1.0 }
    }
}

/// Row/column counts and margin for the table region.
///
/// `bottom_row_count` is stored for a lower sub-table that no drawing step
/// consumes yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    column_count: u32,
    top_row_count: u32,
    bottom_row_count: u32,
    margin: f32,
    dash: DashPattern,
}

impl GridConfig {
    pub fn new(column_count: u32, top_row_count: u32, bottom_row_count: u32, margin: f32) -> Result<Self> {
        Self {
            column_count,
            top_row_count,
            bottom_row_count,
            margin,
            dash: DashPattern::default(),
        }
        .validated()
    }

    pub fn column_count(&self) -> u32 { self.column_count }
    pub fn top_row_count(&self) -> u32 { self.top_row_count }
    pub fn bottom_row_count(&self) -> u32 { self.bottom_row_count }
    pub fn margin(&self) -> f32 { self.margin }
    pub fn dash(&self) -> &DashPattern { &self.dash }

    pub fn with_columns(mut self, n: u32) -> Result<Self> {
        self.column_count = n;
        self.validated()
    }

    pub fn with_top_rows(mut self, n: u32) -> Result<Self> {
        self.top_row_count = n;
        self.validated()
    }

    pub fn with_bottom_rows(mut self, n: u32) -> Result<Self> {
        self.bottom_row_count = n;
        self.validated()
    }

    pub fn with_margin(mut self, margin: f32) -> Result<Self> {
        self.margin = margin;
        self.validated()
    }

    pub fn with_dash(mut self, dash: DashPattern) -> Result<Self> {
        self.dash = dash;
        self.validated()
    }

    pub fn validated(self) -> Result<Self> {
        count_at_least_one("column_count", self.column_count)?;
        count_at_least_one("top_row_count", self.top_row_count)?;
        count_at_least_one("bottom_row_count", self.bottom_row_count)?;
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(reject("margin", format!("must be finite and >= 0, got {}", self.margin)));
        }
        self.dash.validate()?;
        Ok(self)
    }
}

fn count_at_least_one(field: &'static str, n: u32) -> Result<()> {
    if n < 1 {
        return Err(reject(field, "must be >= 1"));
    }
    Ok(())
}

/// Every configuration rejection goes through here so each one is logged.
fn reject(field: &'static str, reason: impl Into<String>) -> GridError {
    let err = GridError::config(field, reason);
    tracing::warn!(field, %err, "config rejected");
    err
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            top_row_count: DEFAULT_TOP_ROW_COUNT,
            bottom_row_count: DEFAULT_BOTTOM_ROW_COUNT,
            margin: DEFAULT_MARGIN,
            dash: DashPattern::default(),
        }
    }
}

// Deserialization goes through the same validation as the setters.
#[derive(Deserialize)]
#[serde(default)]
struct RawGridConfig {
    column_count: u32,
    top_row_count: u32,
    bottom_row_count: u32,
    margin: f32,
    dash: DashPattern,
}

impl Default for RawGridConfig {
    fn default() -> Self {
        let d = GridConfig::default();
        Self {
            column_count: d.column_count,
            top_row_count: d.top_row_count,
            bottom_row_count: d.bottom_row_count,
            margin: d.margin,
            dash: d.dash,
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridError;

    fn try_from(raw: RawGridConfig) -> Result<Self> {
        GridConfig {
            column_count: raw.column_count,
            top_row_count: raw.top_row_count,
            bottom_row_count: raw.bottom_row_count,
            margin: raw.margin,
            dash: raw.dash,
        }
        .validated()
    }
}
