// File: crates/stock-grid-core/src/surface.rs
// Summary: Minimal vector-drawing contract a rendering backend must expose, plus the reusable path buffer.

use crate::geometry::{Point, RectF};
use crate::theme::LineStyle;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Path buffer reused across segments; reset between lines so no stale
/// geometry carries into the next stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridPath {
    commands: Vec<PathCommand>,
}

impl GridPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p.into()));
        self
    }

    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p.into()));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Clear commands, keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Rendering backend seam. Implementations apply the current translation to
/// every coordinate they receive.
pub trait DrawSurface {
    /// Push the current transform.
    fn save(&mut self);
    /// Pop back to the last saved transform.
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);

    /// Stroke `path` with `style`.
    fn draw_path(&mut self, path: &GridPath, style: &LineStyle);

    /// Bounding box of `text` at `size`, relative to its baseline origin
    /// (top is negative for glyphs above the baseline).
    fn measure_text_bounds(&mut self, text: &str, size: f32) -> RectF;

    /// Draw `text` with its baseline-left at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Rgba);

    /// Stateless single-segment helper built on `draw_path`.
    fn draw_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        let mut path = GridPath::new();
        path.move_to(from).line_to(to);
        self.draw_path(&path, style);
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn save(&mut self) { (**self).save() }
    fn restore(&mut self) { (**self).restore() }
    fn translate(&mut self, dx: f32, dy: f32) { (**self).translate(dx, dy) }
    fn draw_path(&mut self, path: &GridPath, style: &LineStyle) { (**self).draw_path(path, style) }
    fn measure_text_bounds(&mut self, text: &str, size: f32) -> RectF { (**self).measure_text_bounds(text, size) }
    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Rgba) {
        (**self).draw_text(text, origin, size, color)
    }
}
