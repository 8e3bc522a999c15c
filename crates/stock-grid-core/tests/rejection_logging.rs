// File: crates/stock-grid-core/tests/rejection_logging.rs
// Purpose: Every rejected configuration or resize emits a warning.
// Behavior:
// - Installs a scoped subscriber that records WARN events and their `field` value.
// - Kept as the only test in this binary so callsite interest is not shared.

use std::fmt;
use std::sync::{Arc, Mutex};

use stock_grid_core::{DashPattern, GridConfig, GridRenderer, Theme};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Warnings(Arc<Mutex<Vec<String>>>);

struct FieldName<'a>(&'a mut String);

impl Visit for FieldName<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "field" {
            *self.0 = value.to_owned();
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for Warnings {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut field = String::new();
        event.record(&mut FieldName(&mut field));
        self.0.lock().expect("lock").push(field);
    }
}

#[test]
fn each_rejection_warns() {
    let warnings = Warnings::default();
    let subscriber = tracing_subscriber::registry().with(warnings.clone());

    tracing::subscriber::with_default(subscriber, || {
        assert!(GridConfig::default().with_columns(0).is_err());
        assert!(GridConfig::default().with_margin(-1.0).is_err());
        assert!(GridConfig::default().with_margin(f32::INFINITY).is_err());
        assert!(DashPattern::new(vec![2.0, 2.0, 2.0], 0.0).is_err());
        assert!(DashPattern::new(vec![2.0, -1.0], 0.0).is_err());

        let mut r = GridRenderer::new(GridConfig::default().with_margin(10.0).expect("margin"), &Theme::dark());
        r.on_resize(400.0, 600.0).expect("fits");
        assert!(r.on_resize(15.0, 600.0).is_err());
        assert!(r.on_resize(0.0, 600.0).is_err());
    });

    let seen = warnings.0.lock().expect("lock").clone();
    assert_eq!(&seen[..5], &["column_count", "margin", "margin", "dash", "dash"]);
    // resize rejections carry no config field
    assert_eq!(seen.len(), 7);
}
