// File: crates/stock-grid-core/src/render.rs
// Summary: GridRenderer: resize handling and the fixed draw pass (border, columns, rows, time text, overlay).

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::geometry::{Point, RectF};
use crate::grid::{self, DividerKind, GridLayout};
use crate::metrics::SurfaceMetrics;
use crate::overlay::Overlay;
use crate::surface::{DrawSurface, GridPath};
use crate::theme::{ColorResolver, GridStyles, LineStyle};
use crate::types::Rgba;

/// Per-pass state handed to each drawing step and to overlay hooks.
///
/// Coordinates are table-local: the surface has been translated down by the
/// table height, so the table occupies `y` in `[table_top_y, table_bottom_y]`.
pub struct DrawContext<'a> {
    config: &'a GridConfig,
    metrics: &'a SurfaceMetrics,
    styles: &'a GridStyles,
    path: &'a mut GridPath,
    text_rect: RectF,
}

impl<'a> DrawContext<'a> {
    fn new(config: &'a GridConfig, metrics: &'a SurfaceMetrics, styles: &'a GridStyles, path: &'a mut GridPath) -> Self {
        path.reset();
        Self { config, metrics, styles, path, text_rect: RectF::default() }
    }

    pub fn config(&self) -> &GridConfig { self.config }
    pub fn metrics(&self) -> &SurfaceMetrics { self.metrics }
    pub fn styles(&self) -> &GridStyles { self.styles }

    /// Surface-space position of the table-local origin.
    pub fn origin(&self) -> Point {
        Point::new(0.0, self.metrics.table_height())
    }

    pub fn left_x(&self) -> f32 { self.config.margin() }
    pub fn right_x(&self) -> f32 { self.metrics.width() - self.config.margin() }
    pub fn table_top_y(&self) -> f32 { grid::table_top_y(self.config.margin(), self.metrics.table_height()) }
    pub fn table_bottom_y(&self) -> f32 { grid::table_bottom_y(self.config.margin()) }

    pub fn column_spacing(&self) -> f32 {
        grid::column_spacing(self.metrics.width(), self.config.margin(), self.config.column_count())
    }

    /// X of column boundary `index`; 0 and `column_count` are the border.
    pub fn column_x(&self, index: u32) -> f32 {
        grid::column_x(self.config.margin(), self.column_spacing(), index)
    }

    pub fn row_spacing(&self) -> f32 {
        grid::row_spacing(self.metrics.table_height(), self.config.top_row_count())
    }

    /// Y of row boundary `index`, counted from the table top.
    pub fn row_y(&self, index: u32) -> f32 {
        grid::row_y(self.table_top_y(), self.row_spacing(), index)
    }

    /// Y of the axis-colored divider (also meaningful when it is not drawn).
    pub fn axis_row_y(&self) -> f32 {
        self.row_y(grid::axis_row_index(self.config.top_row_count()))
    }

    /// Measure `text` at the time-axis size and remember its bounds.
    pub fn measure_text(&mut self, surface: &mut dyn DrawSurface, text: &str) -> RectF {
        self.text_rect = surface.measure_text_bounds(text, self.metrics.text_size());
        self.text_rect
    }

    /// Bounds from the most recent `measure_text`; empty before the first one.
    pub fn text_bounds(&self) -> RectF { self.text_rect }

    /// Gap that vertically centres the last measured text in the time strip.
    pub fn text_margin(&self) -> f32 {
        grid::text_margin(self.metrics.time_axis_height(), self.text_rect.height())
    }

    /// Baseline for the last measured text, below the table bottom.
    /// Without a prior measurement this collapses to the strip midline.
    pub fn time_text_y(&self) -> f32 {
        grid::time_text_baseline(self.metrics.time_axis_height(), self.text_rect.height())
    }

    /// Draw a time label with its left edge at `x` using the measured bounds.
    pub fn draw_time_text(&mut self, surface: &mut dyn DrawSurface, text: &str, x: f32) {
        self.measure_text(surface, text);
        let origin = Point::new(x, self.time_text_y());
        surface.draw_text(text, origin, self.metrics.text_size(), self.styles.time_text);
    }

    /// Stroke one segment through the shared path buffer, leaving it empty.
    pub fn stroke_line(&mut self, surface: &mut dyn DrawSurface, from: Point, to: Point, style: &LineStyle) {
        self.path.reset();
        self.path.move_to(from).line_to(to);
        surface.draw_path(self.path, style);
        self.path.reset();
    }

    /// Text color of the time strip.
    pub fn time_text_color(&self) -> Rgba { self.styles.time_text }
}

/// Owns grid configuration, sizing and resolved styles; drives one pass per frame.
#[derive(Debug, Clone)]
pub struct GridRenderer {
    config: GridConfig,
    metrics: Option<SurfaceMetrics>,
    styles: GridStyles,
    path: GridPath,
}

impl GridRenderer {
    pub fn new(config: GridConfig, colors: &dyn ColorResolver) -> Self {
        let styles = GridStyles::resolve(colors, config.dash());
        Self { config, metrics: None, styles, path: GridPath::new() }
    }

    pub fn config(&self) -> &GridConfig { &self.config }
    pub fn metrics(&self) -> Option<&SurfaceMetrics> { self.metrics.as_ref() }
    pub fn styles(&self) -> &GridStyles { &self.styles }

    /// Recompute metrics for a new surface size. Must precede the first draw.
    ///
    /// A rejected size drops the previous metrics, so the next `render`
    /// fails with `NotSized` instead of drawing for the old surface.
    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<SurfaceMetrics> {
        let metrics = SurfaceMetrics::from_size(width, height)
            .and_then(|m| m.check_margin(self.config.margin()).map(|()| m))
            .inspect_err(|e| {
                tracing::warn!(%e, "resize rejected");
                self.metrics = None;
            })?;
        tracing::debug!(
            width,
            height,
            time_axis_height = metrics.time_axis_height(),
            table_height = metrics.table_height(),
            text_size = metrics.text_size(),
            "grid resized"
        );
        self.metrics = Some(metrics);
        Ok(metrics)
    }

    /// Replace the configuration between frames.
    pub fn set_config(&mut self, config: GridConfig) -> Result<()> {
        let config = config.validated()?;
        if let Some(m) = &self.metrics {
            m.check_margin(config.margin()).inspect_err(|e| tracing::warn!(%e, "config rejected"))?;
        }
        self.styles.divider.dash = Some(config.dash().clone());
        self.styles.axis_divider.dash = Some(config.dash().clone());
        self.config = config;
        Ok(())
    }

    /// Re-resolve colors, keeping the configured dash pattern.
    pub fn set_colors(&mut self, colors: &dyn ColorResolver) {
        self.styles = GridStyles::resolve(colors, self.config.dash());
    }

    /// Every grid line of the next pass, without drawing.
    pub fn layout(&self) -> Result<GridLayout> {
        let metrics = self.metrics.as_ref().ok_or(GridError::NotSized)?;
        Ok(GridLayout::compute(&self.config, metrics))
    }

    /// Run one full pass: border, columns, rows, time text, overlay.
    pub fn render(&mut self, surface: &mut dyn DrawSurface, overlay: &mut dyn Overlay) -> Result<()> {
        let metrics = self.metrics.ok_or(GridError::NotSized)?;

        surface.save();
        surface.translate(0.0, metrics.table_height());

        let mut ctx = DrawContext::new(&self.config, &metrics, &self.styles, &mut self.path);
        draw_borders(surface, &mut ctx);
        let columns = draw_column_lines(surface, &mut ctx);
        let rows = draw_row_lines(surface, &mut ctx);
        overlay.draw_time_text(surface, &mut ctx);
        overlay.draw(surface, &mut ctx);

        surface.restore();
        tracing::trace!(columns, rows, overlay = overlay.id(), "grid pass complete");
        Ok(())
    }
}

// ---- drawing steps ---------------------------------------------------------

fn draw_borders(surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
    let [top_left, bottom_left, bottom_right, top_right] = grid::border_corners(ctx.config, ctx.metrics);
    ctx.path.reset();
    ctx.path
        .move_to(top_left)
        .line_to(bottom_left)
        .line_to(bottom_right)
        .line_to(top_right)
        .close();
    surface.draw_path(ctx.path, &ctx.styles.border);
    ctx.path.reset();
}

fn draw_column_lines(surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) -> u32 {
    let style = &ctx.styles.divider;
    let mut drawn = 0;
    for divider in grid::column_dividers(ctx.config, ctx.metrics) {
        ctx.path.reset();
        ctx.path.move_to(divider.segment.from).line_to(divider.segment.to);
        surface.draw_path(ctx.path, style);
        drawn += 1;
    }
    ctx.path.reset();
    drawn
}

fn draw_row_lines(surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) -> u32 {
    let mut drawn = 0;
    for divider in grid::row_dividers(ctx.config, ctx.metrics) {
        let style = match divider.kind {
            DividerKind::AxisRow => &ctx.styles.axis_divider,
            _ => &ctx.styles.divider,
        };
        ctx.path.reset();
        ctx.path.move_to(divider.segment.from).line_to(divider.segment.to);
        surface.draw_path(ctx.path, style);
        drawn += 1;
    }
    ctx.path.reset();
    drawn
}
