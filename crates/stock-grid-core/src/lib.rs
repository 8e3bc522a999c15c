// File: crates/stock-grid-core/src/lib.rs
// Summary: Core library entry point; grid layout, draw-order protocol and the backend surface seam.

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod metrics;
pub mod overlay;
pub mod record;
pub mod render;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod types;

pub use config::{DashPattern, GridConfig};
pub use error::GridError;
pub use format::{format_fixed, format_percent};
pub use geometry::{LineSegment, Point, RectF};
pub use grid::{Divider, DividerKind, GridLayout};
pub use metrics::SurfaceMetrics;
pub use overlay::{FnOverlay, NoOverlay, Overlay, OverlayStack};
pub use record::{DisplayList, DrawOp};
pub use render::{DrawContext, GridRenderer};
pub use scale::{SlotScale, ValueScale};
pub use surface::{DrawSurface, GridPath, PathCommand};
pub use theme::{ColorId, ColorResolver, GridStyles, LineStyle, Theme};
pub use types::Rgba;
