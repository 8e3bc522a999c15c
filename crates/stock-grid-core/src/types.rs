// File: crates/stock-grid-core/src/types.rs
// Summary: Shared types and constants (ratios, default counts, colors).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Share of the surface height reserved for the time-axis strip.
pub const TIME_AXIS_RATIO: f32 = 0.055;
/// Text size as a share of the time-axis strip height.
pub const TEXT_SCALE_RATIO: f32 = 0.8;

pub const DEFAULT_COLUMN_COUNT: u32 = 4;
pub const DEFAULT_TOP_ROW_COUNT: u32 = 4;
pub const DEFAULT_BOTTOM_ROW_COUNT: u32 = 2;
/// Gap between the surface edge and the table border, in pixels.
pub const DEFAULT_MARGIN: f32 = 1.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Straight-alpha 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}
