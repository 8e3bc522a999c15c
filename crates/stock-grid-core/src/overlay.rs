// File: crates/stock-grid-core/src/overlay.rs
// Summary: Overlay trait: extension hooks run inside the table-local frame after the grid is drawn.

use crate::render::DrawContext;
use crate::surface::DrawSurface;

/// Data-specific drawing on top of the grid (candles, lines, labels).
///
/// Both hooks run once per pass while the surface is translated to the table
/// bottom, so positions from `DrawContext` line up with the grid as drawn.
pub trait Overlay {
    fn id(&self) -> &'static str {
        "overlay"
    }

    /// Time labels for the bottom strip. Measure with
    /// `DrawContext::measure_text` before reading `time_text_y`.
    fn draw_time_text(&mut self, _surface: &mut dyn DrawSurface, _ctx: &mut DrawContext<'_>) {}

    /// Runs last; may draw anything in table-local coordinates.
    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>);
}

/// Grid only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverlay;

impl Overlay for NoOverlay {
    fn id(&self) -> &'static str {
        "none"
    }

    fn draw(&mut self, _surface: &mut dyn DrawSurface, _ctx: &mut DrawContext<'_>) {}
}

/// Adapts a closure into the `draw` hook.
pub struct FnOverlay<F> {
    id: &'static str,
    f: F,
}

impl<F> FnOverlay<F>
where
    F: FnMut(&mut dyn DrawSurface, &mut DrawContext<'_>),
{
    pub fn new(id: &'static str, f: F) -> Self {
        Self { id, f }
    }
}

impl<F> Overlay for FnOverlay<F>
where
    F: FnMut(&mut dyn DrawSurface, &mut DrawContext<'_>),
{
    fn id(&self) -> &'static str {
        self.id
    }

    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        (self.f)(surface, ctx)
    }
}

/// Runs several overlays in insertion order; later ones paint on top.
#[derive(Default)]
pub struct OverlayStack {
    layers: Vec<Box<dyn Overlay>>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, overlay: impl Overlay + 'static) -> &mut Self {
        self.layers.push(Box::new(overlay));
        self
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Overlay for OverlayStack {
    fn id(&self) -> &'static str {
        "stack"
    }

    fn draw_time_text(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        for layer in &mut self.layers {
            layer.draw_time_text(surface, ctx);
        }
    }

    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        for layer in &mut self.layers {
            layer.draw(surface, ctx);
        }
    }
}

impl<O: Overlay + ?Sized> Overlay for Box<O> {
    fn id(&self) -> &'static str { (**self).id() }
    fn draw_time_text(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        (**self).draw_time_text(surface, ctx)
    }
    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) { (**self).draw(surface, ctx) }
}

impl<O: Overlay + ?Sized> Overlay for &mut O {
    fn id(&self) -> &'static str { (**self).id() }
    fn draw_time_text(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) {
        (**self).draw_time_text(surface, ctx)
    }
    fn draw(&mut self, surface: &mut dyn DrawSurface, ctx: &mut DrawContext<'_>) { (**self).draw(surface, ctx) }
}
