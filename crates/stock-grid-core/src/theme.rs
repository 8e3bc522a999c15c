// File: crates/stock-grid-core/src/theme.rs
// Summary: Color themes, the color-lookup seam, and immutable line styles for grid strokes.

use crate::config::DashPattern;
use crate::types::{Rgba, DEFAULT_STROKE_WIDTH};

/// Named colors the grid asks its theme for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorId {
    Background,
    Border,
    Divider,
    AxisDivider,
    TimeText,
}

/// Color lookup collaborator; hosts can plug in their own resource tables.
pub trait ColorResolver {
    fn resolve_color(&self, id: ColorId) -> Rgba;
}

impl<F: Fn(ColorId) -> Rgba> ColorResolver for F {
    fn resolve_color(&self, id: ColorId) -> Rgba {
        self(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub border: Rgba,
    pub divider: Rgba,
    pub axis_divider: Rgba,
    pub time_text: Rgba,
}

impl ColorResolver for Theme {
    fn resolve_color(&self, id: ColorId) -> Rgba {
        match id {
            ColorId::Background => self.background,
            ColorId::Border => self.border,
            ColorId::Divider => self.divider,
            ColorId::AxisDivider => self.axis_divider,
            ColorId::TimeText => self.time_text,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            border: Rgba::opaque(90, 90, 100),
            divider: Rgba::opaque(55, 55, 62),
            axis_divider: Rgba::opaque(180, 180, 190),
            time_text: Rgba::opaque(200, 200, 210),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            border: Rgba::opaque(160, 160, 170),
            divider: Rgba::opaque(215, 215, 222),
            axis_divider: Rgba::opaque(100, 100, 110),
            time_text: Rgba::opaque(60, 60, 70),
        }
    }

    /// White sheet with grey dotted lines and a red centre line.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Rgba::opaque(0xff, 0xff, 0xff),
            border: Rgba::opaque(0xe2, 0xe2, 0xe2),
            divider: Rgba::opaque(0xd6, 0xd6, 0xd6),
            axis_divider: Rgba::opaque(0xf3, 0x4a, 0x4a),
            time_text: Rgba::opaque(0x99, 0x99, 0x99),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::classic()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

/// Stroke description handed to the surface with every path.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub stroke_width: f32,
    pub color: Rgba,
    pub dash: Option<DashPattern>,
}

impl LineStyle {
    pub fn solid(color: Rgba) -> Self {
        Self { stroke_width: DEFAULT_STROKE_WIDTH, color, dash: None }
    }

    pub fn dashed(color: Rgba, dash: DashPattern) -> Self {
        Self { stroke_width: DEFAULT_STROKE_WIDTH, color, dash: Some(dash) }
    }

    pub fn with_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_color(&self, color: Rgba) -> Self {
        Self { color, ..self.clone() }
    }
}

/// The three strokes of a grid pass, resolved once per config/theme change.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyles {
    pub border: LineStyle,
    pub divider: LineStyle,
    pub axis_divider: LineStyle,
    pub time_text: Rgba,
}

impl GridStyles {
    pub fn resolve(colors: &dyn ColorResolver, dash: &DashPattern) -> Self {
        let divider = LineStyle::dashed(colors.resolve_color(ColorId::Divider), dash.clone());
        let axis_divider = divider.with_color(colors.resolve_color(ColorId::AxisDivider));
        Self {
            border: LineStyle::solid(colors.resolve_color(ColorId::Border)),
            divider,
            axis_divider,
            time_text: colors.resolve_color(ColorId::TimeText),
        }
    }
}
