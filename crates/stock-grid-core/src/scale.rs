// File: crates/stock-grid-core/src/scale.rs
// Summary: Value (Y) and slot (X) scales mapping data into the table-local frame for overlays.

use crate::render::DrawContext;

/// Horizontal scale over a fixed number of equally wide slots (bars, minutes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotScale {
    pub left_px: f32,
    pub slot_width: f32,
    pub slots: usize,
}

impl SlotScale {
    pub fn new(left_px: f32, right_px: f32, slots: usize) -> Self {
        let slots = slots.max(1);
        Self { left_px, slot_width: (right_px - left_px) / slots as f32, slots }
    }

    /// Slots spanning the table between the border lines.
    pub fn from_context(ctx: &DrawContext<'_>, slots: usize) -> Self {
        Self::new(ctx.left_x(), ctx.right_x(), slots)
    }

    /// Centre X of slot `i`.
    #[inline]
    pub fn center_x(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.slot_width
    }

    /// Slot under `px`, if inside the scale.
    pub fn slot_at(&self, px: f32) -> Option<usize> {
        if self.slot_width <= 0.0 || px < self.left_px {
            return None;
        }
        let i = ((px - self.left_px) / self.slot_width) as usize;
        (i < self.slots).then_some(i)
    }
}

/// Vertical scale mapping `[vmin, vmax]` onto `[bottom_px, top_px]`.
/// In the table-local frame `top_px` is the more negative value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    /// Range symmetric about `reference`, so the reference lands halfway
    /// between `top_px` and `bottom_px`. Used for change/percentage charts.
    pub fn centered(top_px: f32, bottom_px: f32, reference: f64, max_deviation: f64) -> Self {
        let dev = if max_deviation.abs() < 1e-12 { 1.0 } else { max_deviation.abs() };
        Self::linear(top_px, bottom_px, reference - dev, reference + dev)
    }

    /// Scale spanning the table interior of `ctx`, border to border.
    pub fn from_context(ctx: &DrawContext<'_>, vmin: f64, vmax: f64) -> Self {
        Self::linear(ctx.table_top_y(), ctx.table_bottom_y(), vmin, vmax)
    }

    /// Scale over the row span, `row_y(0)` to `row_y(top_row_count)`, so the
    /// value at row boundary `i` maps exactly onto row divider `i`.
    pub fn over_rows(ctx: &DrawContext<'_>, vmin: f64, vmax: f64) -> Self {
        let (top, bottom) = row_span(ctx);
        Self::linear(top, bottom, vmin, vmax)
    }

    /// `centered` over the row span. With an even row count the reference
    /// sits on the axis divider.
    pub fn centered_over_rows(ctx: &DrawContext<'_>, reference: f64, max_deviation: f64) -> Self {
        let (top, bottom) = row_span(ctx);
        Self::centered(top, bottom, reference, max_deviation)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((v - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}

fn row_span(ctx: &DrawContext<'_>) -> (f32, f32) {
    (ctx.row_y(0), ctx.row_y(ctx.config().top_row_count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_ends() {
        let s = ValueScale::linear(-100.0, 0.0, 10.0, 20.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(20.0), -100.0);
        assert!((s.from_px(-50.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn centered_reference_is_midline() {
        let s = ValueScale::centered(-200.0, 0.0, 5.0, 0.5);
        assert_eq!(s.to_px(5.0), -100.0);
        assert_eq!(s.from_px(-200.0), 5.5);
        assert_eq!(s.from_px(-100.0), 5.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = ValueScale::linear(-10.0, 0.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
        let c = ValueScale::centered(-10.0, 0.0, 3.0, 0.0);
        assert_eq!((c.vmin, c.vmax), (2.0, 4.0));
    }

    #[test]
    fn slots() {
        let s = SlotScale::new(0.0, 100.0, 4);
        assert_eq!(s.center_x(0), 12.5);
        assert_eq!(s.slot_at(99.0), Some(3));
        assert_eq!(s.slot_at(100.0), None);
        assert_eq!(s.slot_at(-1.0), None);
    }
}
