// File: crates/stock-grid-core/tests/properties.rs
// Purpose: Property checks over sizes and counts (split, spacing, axis tagging, similarity).

use proptest::prelude::*;
use stock_grid_core::{DividerKind, GridConfig, GridLayout, SurfaceMetrics};

fn rel_close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn split_sums_to_height(w in 1.0f32..4000.0, h in 1.0f32..4000.0) {
        let m = SurfaceMetrics::from_size(w, h).unwrap();
        prop_assert!(rel_close(m.time_axis_height() + m.table_height(), h));
        prop_assert!(rel_close(m.time_axis_height(), 0.055 * h));
    }

    #[test]
    fn columns_are_interior_and_even(cols in 1u32..40, w in 200.0f32..3000.0, h in 200.0f32..3000.0, margin in 0.0f32..20.0) {
        let c = GridConfig::new(cols, 4, 2, margin).unwrap();
        let m = SurfaceMetrics::from_size(w, h).unwrap();
        let layout = GridLayout::compute(&c, &m);
        prop_assert_eq!(layout.columns.len() as u32, cols - 1);
        for d in &layout.columns {
            prop_assert!(d.segment.from.x > margin && d.segment.from.x < w - margin);
        }
        let xs: Vec<f32> = layout.columns.iter().map(|d| d.segment.from.x).collect();
        let spacing = (w - 2.0 * margin) / cols as f32;
        for pair in xs.windows(2) {
            prop_assert!(rel_close(pair[1] - pair[0], spacing));
        }
    }

    #[test]
    fn exactly_one_axis_row(rows in 1u32..40, h in 200.0f32..3000.0) {
        let c = GridConfig::new(4, rows, 2, 1.0).unwrap();
        let m = SurfaceMetrics::from_size(500.0, h).unwrap();
        let layout = GridLayout::compute(&c, &m);
        prop_assert_eq!(layout.rows.len() as u32, rows - 1);
        for d in &layout.rows {
            let want = if d.index == rows / 2 { DividerKind::AxisRow } else { DividerKind::Row };
            prop_assert_eq!(d.kind, want);
        }
        let axis = layout.rows.iter().filter(|d| d.kind == DividerKind::AxisRow).count();
        prop_assert_eq!(axis, if rows >= 2 { 1 } else { 0 });
    }

    #[test]
    fn scaling_surface_scales_geometry(k in 0.5f32..4.0, cols in 1u32..12, rows in 1u32..12) {
        let (w, h, margin) = (400.0f32, 600.0f32, 2.0f32);
        let base = GridLayout::compute(
            &GridConfig::new(cols, rows, 2, margin).unwrap(),
            &SurfaceMetrics::from_size(w, h).unwrap(),
        );
        let scaled = GridLayout::compute(
            &GridConfig::new(cols, rows, 2, margin * k).unwrap(),
            &SurfaceMetrics::from_size(w * k, h * k).unwrap(),
        );
        for (a, b) in base.border.iter().zip(scaled.border.iter()) {
            prop_assert!(rel_close(a.x * k, b.x) && rel_close(a.y * k, b.y));
        }
        for (a, b) in base.columns.iter().chain(&base.rows).zip(scaled.columns.iter().chain(&scaled.rows)) {
            prop_assert!(rel_close(a.segment.from.x * k, b.segment.from.x));
            prop_assert!(rel_close(a.segment.from.y * k, b.segment.from.y));
            prop_assert!(rel_close(a.segment.to.x * k, b.segment.to.x));
            prop_assert!(rel_close(a.segment.to.y * k, b.segment.to.y));
            prop_assert_eq!(a.kind, b.kind);
        }
    }
}
