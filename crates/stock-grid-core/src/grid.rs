// File: crates/stock-grid-core/src/grid.rs
// Summary: Grid layout helpers: border corners, divider positions and time-axis text placement.
//
// All coordinates are in the table-local frame: origin translated down to the
// table's bottom edge, so the table spans y in [margin - table_height, -margin].

use crate::config::GridConfig;
use crate::geometry::{LineSegment, Point};
use crate::metrics::SurfaceMetrics;

/// Y of the table's top edge (the most negative y).
#[inline]
pub fn table_top_y(margin: f32, table_height: f32) -> f32 {
    margin - table_height
}

/// Y of the table's bottom edge.
#[inline]
pub fn table_bottom_y(margin: f32) -> f32 {
    -margin
}

#[inline]
pub fn column_spacing(width: f32, margin: f32, column_count: u32) -> f32 {
    (width - 2.0 * margin) / column_count as f32
}

#[inline]
pub fn column_x(margin: f32, spacing: f32, index: u32) -> f32 {
    margin + spacing * index as f32
}

#[inline]
pub fn row_spacing(table_height: f32, row_count: u32) -> f32 {
    table_height / row_count as f32
}

#[inline]
pub fn row_y(top_y: f32, spacing: f32, index: u32) -> f32 {
    top_y + spacing * index as f32
}

/// Index of the row divider drawn in the axis color.
///
/// Integer division: for odd counts this is not the geometric middle
/// (5 rows gives index 2, while the centre sits at 2.5).
#[inline]
pub fn axis_row_index(row_count: u32) -> u32 {
    row_count / 2
}

/// Border path corners: top-left, bottom-left, bottom-right, top-right.
pub fn border_corners(config: &GridConfig, metrics: &SurfaceMetrics) -> [Point; 4] {
    let m = config.margin();
    let top = table_top_y(m, metrics.table_height());
    let bottom = table_bottom_y(m);
    let right = metrics.width() - m;
    [
        Point::new(m, top),
        Point::new(m, bottom),
        Point::new(right, bottom),
        Point::new(right, top),
    ]
}

/// Vertical offset that centres a line of text of `text_height` in the strip.
#[inline]
pub fn text_margin(time_axis_height: f32, text_height: f32) -> f32 {
    (time_axis_height - text_height) / 2.0
}

/// Baseline Y for time-axis labels, measured from the table bottom.
#[inline]
pub fn time_text_baseline(time_axis_height: f32, text_height: f32) -> f32 {
    text_margin(time_axis_height, text_height) + text_height
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DividerKind {
    Column,
    Row,
    /// The distinguished row divider (centre / zero line).
    AxisRow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Divider {
    pub index: u32,
    pub kind: DividerKind,
    pub segment: LineSegment,
}

/// Interior column dividers, k = 1..column_count-1. Each runs top to bottom,
/// so every dash pattern starts at the table's top edge.
pub fn column_dividers<'a>(config: &'a GridConfig, metrics: &'a SurfaceMetrics) -> impl Iterator<Item = Divider> + 'a {
    let m = config.margin();
    let spacing = column_spacing(metrics.width(), m, config.column_count());
    let top = table_top_y(m, metrics.table_height());
    let bottom = table_bottom_y(m);
    (1..config.column_count()).map(move |i| {
        let x = column_x(m, spacing, i);
        Divider {
            index: i,
            kind: DividerKind::Column,
            segment: LineSegment::new(Point::new(x, top), Point::new(x, bottom)),
        }
    })
}

/// Interior row dividers of the top table, k = 1..top_row_count-1, left to right.
pub fn row_dividers<'a>(config: &'a GridConfig, metrics: &'a SurfaceMetrics) -> impl Iterator<Item = Divider> + 'a {
    let m = config.margin();
    let rows = config.top_row_count();
    let spacing = row_spacing(metrics.table_height(), rows);
    let top = table_top_y(m, metrics.table_height());
    let right = metrics.width() - m;
    let axis = axis_row_index(rows);
    (1..rows).map(move |i| {
        let y = row_y(top, spacing, i);
        Divider {
            index: i,
            kind: if i == axis { DividerKind::AxisRow } else { DividerKind::Row },
            segment: LineSegment::new(Point::new(m, y), Point::new(right, y)),
        }
    })
}

/// Every line of one grid pass, collected.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub border: [Point; 4],
    pub columns: Vec<Divider>,
    pub rows: Vec<Divider>,
}

impl GridLayout {
    pub fn compute(config: &GridConfig, metrics: &SurfaceMetrics) -> Self {
        Self {
            border: border_corners(config, metrics),
            columns: column_dividers(config, metrics).collect(),
            rows: row_dividers(config, metrics).collect(),
        }
    }

    pub fn axis_row(&self) -> Option<&Divider> {
        self.rows.iter().find(|d| d.kind == DividerKind::AxisRow)
    }
}
