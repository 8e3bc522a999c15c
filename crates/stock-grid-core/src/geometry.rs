// File: crates/stock-grid-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math in the table-local frame.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned float rectangle; used for measured text bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn is_vertical(&self) -> bool { self.from.x == self.to.x }
    pub fn is_horizontal(&self) -> bool { self.from.y == self.to.y }

    pub fn length(&self) -> f32 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}
