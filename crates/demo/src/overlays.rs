// File: crates/demo/src/overlays.rs
// Summary: Candlestick and time-share overlays drawn on top of the grid, with time and price labels.

use stock_grid_core::{
    format_fixed, format_percent, DrawContext, DrawSurface, GridPath, LineStyle, Overlay, Point, Rgba, SlotScale,
    ValueScale,
};

use crate::data::{price_range, time_label, Candle};

const UP: Rgba = Rgba::opaque(40, 200, 120);
const DOWN: Rgba = Rgba::opaque(220, 80, 80);
const PRICE_LINE: Rgba = Rgba::opaque(64, 160, 255);
/// Gap between a label and the border it sits against.
const LABEL_PAD: f32 = 2.0;

/// First, middle and last time label across the strip.
fn draw_time_labels(surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>, candles: &[Candle]) {
    let (Some(first), Some(last)) = (candles.first(), candles.last()) else { return };
    let mid = &candles[candles.len() / 2];
    let size = ctx.metrics().text_size();
    let color = ctx.time_text_color();

    let left = time_label(first.t);
    ctx.measure_text(surface, &left);
    surface.draw_text(&left, Point::new(ctx.left_x() + LABEL_PAD, ctx.time_text_y()), size, color);

    let centre = time_label(mid.t);
    let w = ctx.measure_text(surface, &centre).width();
    let x = (ctx.left_x() + ctx.right_x() - w) / 2.0;
    surface.draw_text(&centre, Point::new(x, ctx.time_text_y()), size, color);

    let right = time_label(last.t);
    let w = ctx.measure_text(surface, &right).width();
    surface.draw_text(&right, Point::new(ctx.right_x() - w - LABEL_PAD, ctx.time_text_y()), size, color);
}

/// Values at each row boundary, read back from the scale at the divider's y
/// and drawn just below it on the left.
fn draw_value_labels(
    surface: &mut dyn DrawSurface,
    ctx: &DrawContext<'_>,
    scale: &ValueScale,
    label: impl Fn(f64) -> String,
) {
    let rows = ctx.config().top_row_count();
    let size = ctx.metrics().text_size() * 0.8;
    let color = ctx.time_text_color();
    for i in 0..rows {
        let text = label(scale.from_px(ctx.row_y(i)));
        let h = surface.measure_text_bounds(&text, size).height();
        surface.draw_text(&text, Point::new(ctx.left_x() + LABEL_PAD, ctx.row_y(i) + h + LABEL_PAD), size, color);
    }
}

pub struct CandleOverlay {
    candles: Vec<Candle>,
}

impl CandleOverlay {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }
}

impl Overlay for CandleOverlay {
    fn id(&self) -> &'static str { "candles" }

    fn draw_time_text(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        draw_time_labels(surface, ctx, &self.candles);
    }

    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        if self.candles.is_empty() {
            return;
        }
        let (lo, hi) = price_range(&self.candles);
        let pad = (hi - lo) * 0.02;
        let ys = ValueScale::from_context(ctx, lo - pad, hi + pad);
        let xs = SlotScale::from_context(ctx, self.candles.len());
        let body_w = (xs.slot_width * 0.7).max(1.0);

        for (i, c) in self.candles.iter().enumerate() {
            let x = xs.center_x(i);
            let color = if c.c >= c.o { UP } else { DOWN };
            let wick = LineStyle::solid(color);
            ctx.stroke_line(surface, Point::new(x, ys.to_px(c.h)), Point::new(x, ys.to_px(c.l)), &wick);

            // a wide stroke stands in for the filled body
            let (y_o, y_c) = (ys.to_px(c.o), ys.to_px(c.c));
            let top = y_o.min(y_c);
            let bottom = y_o.max(y_c).max(top + 1.0);
            let body = LineStyle::solid(color).with_width(body_w);
            ctx.stroke_line(surface, Point::new(x, top), Point::new(x, bottom), &body);
        }
        draw_value_labels(surface, ctx, &ys, |v| format_fixed(v, 2));
    }
}

/// Close-price line against the session reference (first open), with the
/// reference on the axis divider and percentage labels.
pub struct TimeShareOverlay {
    candles: Vec<Candle>,
    path: GridPath,
}

impl TimeShareOverlay {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles, path: GridPath::new() }
    }

    fn reference(&self) -> Option<f64> {
        self.candles.first().map(|c| c.o)
    }
}

impl Overlay for TimeShareOverlay {
    fn id(&self) -> &'static str { "time-share" }

    fn draw_time_text(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        draw_time_labels(surface, ctx, &self.candles);
    }

    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        let Some(reference) = self.reference() else { return };
        let max_dev = self.candles.iter().map(|c| (c.c - reference).abs()).fold(0.0, f64::max);
        let ys = ValueScale::centered_over_rows(ctx, reference, max_dev * 1.05);
        let xs = SlotScale::from_context(ctx, self.candles.len());

        self.path.reset();
        for (i, c) in self.candles.iter().enumerate() {
            let p = Point::new(xs.center_x(i), ys.to_px(c.c));
            if i == 0 { self.path.move_to(p); } else { self.path.line_to(p); }
        }
        surface.draw_path(&self.path, &LineStyle::solid(PRICE_LINE).with_width(1.5));
        self.path.reset();

        draw_value_labels(surface, ctx, &ys, |v| {
            if reference == 0.0 { format_fixed(v, 2) } else { format_percent((v - reference) / reference, 2) }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_grid_core::{DisplayList, DrawOp, GridConfig, GridRenderer, PathCommand, Theme};

    fn session() -> Vec<Candle> {
        vec![
            Candle { t: 0.0, o: 10.0, h: 10.4, l: 9.9, c: 10.2 },
            Candle { t: 1.0, o: 10.2, h: 10.3, l: 9.6, c: 9.8 },
            Candle { t: 2.0, o: 9.8, h: 10.1, l: 9.7, c: 10.0 },
        ]
    }

    fn render(overlay: &mut dyn Overlay) -> DisplayList {
        let mut r = GridRenderer::new(GridConfig::default(), &Theme::classic());
        r.on_resize(400.0, 600.0).unwrap();
        let mut dl = DisplayList::new();
        r.render(&mut dl, overlay).unwrap();
        dl
    }

    #[test]
    fn candles_draw_wick_and_body_per_bar() {
        let dl = render(&mut CandleOverlay::new(session()));
        // border + 3 columns + 3 rows, then two strokes per candle
        assert_eq!(dl.paths().count(), 7 + 6);
        let colors: Vec<_> = dl.paths().skip(7).map(|(_, s)| s.color).collect();
        assert_eq!(colors, vec![UP, UP, DOWN, DOWN, UP, UP]);
        let labels: Vec<_> = dl.texts().map(|(t, _)| t.to_owned()).collect();
        assert_eq!(&labels[..3], &["#0", "#1", "#2"]);
        assert_eq!(labels.len(), 3 + 4);
    }

    #[test]
    fn time_share_reference_sits_on_axis_row() {
        let mut overlay = TimeShareOverlay::new(session());
        let dl = render(&mut overlay);
        let ops = dl.ops();
        let line = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Path { local, style, .. } if style.color == PRICE_LINE => Some(local.clone()),
                _ => None,
            })
            .expect("price line");
        assert_eq!(line.len(), 3);
        let labels: Vec<_> = dl.texts().map(|(t, _)| t.to_owned()).skip(3).collect();
        // 4 rows: +max, +half, 0 (reference on the axis row), -half
        assert_eq!(labels[2], "0.00%");
        assert!(labels[0].starts_with("2.10"));

        // a close equal to the reference is plotted on the axis divider
        let mut flat = session();
        flat[1].c = flat[0].o;
        let dl = render(&mut TimeShareOverlay::new(flat));
        let axis_y = dl.paths().nth(5).map(|(c, _)| c[0]).expect("axis divider");
        let price = dl
            .paths()
            .find(|(_, s)| s.color == PRICE_LINE)
            .map(|(c, _)| c[1])
            .expect("price line");
        match (axis_y, price) {
            (PathCommand::MoveTo(a), PathCommand::LineTo(p)) => assert!((a.y - p.y).abs() < 1e-3),
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
