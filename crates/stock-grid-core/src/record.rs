// File: crates/stock-grid-core/src/record.rs
// Summary: DisplayList surface that records draw operations for headless use, hit-testing and tests.

use crate::geometry::{Point, RectF};
use crate::surface::{DrawSurface, GridPath, PathCommand};
use crate::theme::LineStyle;
use crate::types::Rgba;

/// Average glyph advance as a share of the font size, for the built-in measurer.
const APPROX_ADVANCE: f32 = 0.6;
/// Cap height as a share of the font size, for the built-in measurer.
const APPROX_CAP_HEIGHT: f32 = 0.72;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Path {
        /// Commands as issued, in the frame active at the time.
        local: Vec<PathCommand>,
        /// Same commands with the active translation applied.
        absolute: Vec<PathCommand>,
        style: LineStyle,
    },
    Text { text: String, origin: Point, absolute: Point, size: f32, color: Rgba },
}

/// A `DrawSurface` that keeps everything it is told.
///
/// Text is measured with a fixed-advance approximation so layouts are
/// deterministic without a font stack.
#[derive(Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    offset: (f32, f32),
    stack: Vec<(f32, f32)>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.offset = (0.0, 0.0);
        self.stack.clear();
    }

    /// Current translation.
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Outstanding `save` calls without a matching `restore`.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded paths as (local commands, style).
    pub fn paths(&self) -> impl Iterator<Item = (&[PathCommand], &LineStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Path { local, style, .. } => Some((local.as_slice(), style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    fn shift(&self, p: Point) -> Point {
        p.offset(self.offset.0, self.offset.1)
    }
}

impl DrawSurface for DisplayList {
    fn save(&mut self) {
        self.stack.push(self.offset);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        // unbalanced restore is ignored, as raster canvases do
        if let Some(prev) = self.stack.pop() {
            self.offset = prev;
        }
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn draw_path(&mut self, path: &GridPath, style: &LineStyle) {
        let absolute = path
            .commands()
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(self.shift(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(self.shift(p)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        self.ops.push(DrawOp::Path {
            local: path.commands().to_vec(),
            absolute,
            style: style.clone(),
        });
    }

    fn measure_text_bounds(&mut self, text: &str, size: f32) -> RectF {
        let width = text.chars().count() as f32 * size * APPROX_ADVANCE;
        let height = size * APPROX_CAP_HEIGHT;
        RectF::from_ltrb(0.0, -height, width, 0.0)
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Rgba) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            origin,
            absolute: self.shift(origin),
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_scoped_by_save_restore() {
        let mut dl = DisplayList::new();
        dl.save();
        dl.translate(0.0, 10.0);
        dl.draw_line(Point::new(1.0, 1.0), Point::new(2.0, 1.0), &LineStyle::solid(Rgba::TRANSPARENT));
        dl.restore();
        assert_eq!(dl.offset(), (0.0, 0.0));
        assert_eq!(dl.save_depth(), 0);
        match &dl.ops()[2] {
            DrawOp::Path { absolute, .. } => {
                assert_eq!(absolute[0], PathCommand::MoveTo(Point::new(1.0, 11.0)));
            }
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn measure_scales_with_length() {
        let mut dl = DisplayList::new();
        let a = dl.measure_text_bounds("09:30", 10.0);
        let b = dl.measure_text_bounds("09:30:00", 10.0);
        assert!(b.width() > a.width());
        assert_eq!(a.height(), b.height());
    }
}
