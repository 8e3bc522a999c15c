// File: crates/stock-grid-core/src/error.rs
// Summary: Error type for configuration, sizing and draw-order contract violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A configuration field was rejected when it was set.
    #[error("invalid grid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Resize input must be positive and finite.
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    /// Twice the margin must fit inside both the width and the table height.
    #[error("margin {margin} leaves no table area on a {width}x{height} surface")]
    MarginTooLarge { margin: f32, width: f32, height: f32 },

    /// A draw pass was requested before the first resize.
    #[error("draw requested before the surface was sized")]
    NotSized,
}

impl GridError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}

pub type Result<T, E = GridError> = std::result::Result<T, E>;
