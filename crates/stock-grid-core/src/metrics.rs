// File: crates/stock-grid-core/src/metrics.rs
// Summary: Surface sizing; derives the time-axis strip / table split from the surface height.

use crate::error::{GridError, Result};
use crate::types::{TEXT_SCALE_RATIO, TIME_AXIS_RATIO};

/// Derived surface dimensions. Recomputed only on resize.
///
/// Invariant: `time_axis_height + table_height == height` and
/// `time_axis_height == TIME_AXIS_RATIO * height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    width: f32,
    height: f32,
    time_axis_height: f32,
    table_height: f32,
    text_size: f32,
}

impl SurfaceMetrics {
    /// Compute metrics for a `width` x `height` surface. Both must be positive and finite.
    pub fn from_size(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GridError::InvalidSize { width, height });
        }
        let time_axis_height = height * TIME_AXIS_RATIO;
        let table_height = height - time_axis_height;
        Ok(Self {
            width,
            height,
            time_axis_height,
            table_height,
            text_size: time_axis_height * TEXT_SCALE_RATIO,
        })
    }

    pub fn width(&self) -> f32 { self.width }
    pub fn height(&self) -> f32 { self.height }
    pub fn time_axis_height(&self) -> f32 { self.time_axis_height }
    pub fn table_height(&self) -> f32 { self.table_height }
    /// Font size for time-axis labels.
    pub fn text_size(&self) -> f32 { self.text_size }

    /// Reject margins that would collapse the table to nothing.
    pub fn check_margin(&self, margin: f32) -> Result<()> {
        if 2.0 * margin >= self.width || 2.0 * margin >= self.table_height {
            return Err(GridError::MarginTooLarge { margin, width: self.width, height: self.height });
        }
        Ok(())
    }
}
