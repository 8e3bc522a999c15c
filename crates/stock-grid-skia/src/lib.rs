// File: crates/stock-grid-skia/src/lib.rs
// Summary: Skia-backed DrawSurface and headless raster rendering (PNG bytes/files, RGBA buffers).

use anyhow::{Context, Result};
use skia_safe as skia;

use stock_grid_core::{
    ColorId, ColorResolver, DrawSurface, GridPath, GridRenderer, LineStyle, Overlay, PathCommand, Point, RectF,
    Rgba,
};

#[inline]
fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `DrawSurface` over a borrowed Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    font: skia::Font,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        // Prefer a real system typeface; the default font may carry none.
        let font = skia::FontMgr::default()
            .legacy_make_typeface(None, skia::FontStyle::default())
            .map(|tf| skia::Font::from_typeface(tf, 12.0))
            .unwrap_or_default();
        Self { canvas, font }
    }

    fn stroke_paint(style: &LineStyle) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.stroke_width);
        paint.set_color(to_skia(style.color));
        if let Some(dash) = &style.dash {
            paint.set_path_effect(skia::PathEffect::dash(&dash.intervals, dash.phase));
        }
        paint
    }

    fn sized_font(&mut self, size: f32) -> &skia::Font {
        self.font.set_size(size.max(1.0));
        &self.font
    }
}

fn to_skia_path(path: &GridPath) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to((p.x, p.y)); }
            PathCommand::LineTo(p) => { out.line_to((p.x, p.y)); }
            PathCommand::Close => { out.close(); }
        }
    }
    out
}

impl DrawSurface for SkiaSurface<'_> {
    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate((dx, dy));
    }

    fn draw_path(&mut self, path: &GridPath, style: &LineStyle) {
        if path.is_empty() {
            return;
        }
        self.canvas.draw_path(&to_skia_path(path), &Self::stroke_paint(style));
    }

    fn measure_text_bounds(&mut self, text: &str, size: f32) -> RectF {
        let (_, bounds) = self.sized_font(size).measure_str(text, None);
        RectF::from_ltrb(bounds.left, bounds.top, bounds.right, bounds.bottom)
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia(color));
        let canvas = self.canvas;
        canvas.draw_str(text, (origin.x, origin.y), self.sized_font(size), &paint);
    }
}

/// Raster target description for headless rendering.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
}

impl RasterOptions {
    pub fn new(width: i32, height: i32, colors: &dyn ColorResolver) -> Self {
        Self { width, height, background: colors.resolve_color(ColorId::Background) }
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self::new(stock_grid_core::types::WIDTH, stock_grid_core::types::HEIGHT, &stock_grid_core::Theme::dark())
    }
}

/// Size the renderer to `opts`, run one pass on a CPU raster surface and hand back the surface.
fn rasterize(renderer: &mut GridRenderer, overlay: &mut dyn Overlay, opts: &RasterOptions) -> Result<skia::Surface> {
    renderer
        .on_resize(opts.width as f32, opts.height as f32)
        .context("sizing grid for raster target")?;
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background));
        let mut target = SkiaSurface::new(canvas);
        renderer.render(&mut target, overlay).context("grid draw pass")?;
    }
    tracing::debug!(width = opts.width, height = opts.height, overlay = overlay.id(), "rasterized grid");
    Ok(surface)
}

/// Render to encoded PNG bytes.
pub fn render_to_png_bytes(renderer: &mut GridRenderer, overlay: &mut dyn Overlay, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(renderer, overlay, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render a PNG to `output_png_path`, creating parent directories.
pub fn render_to_png(
    renderer: &mut GridRenderer,
    overlay: &mut dyn Overlay,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(renderer, overlay, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride).
pub fn render_to_rgba8(
    renderer: &mut GridRenderer,
    overlay: &mut dyn Overlay,
    opts: &RasterOptions,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(renderer, overlay, opts)?;
    let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
    let stride = w as usize * 4;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back {}x{} pixels failed", w, h);
    }
    Ok((pixels, w, h, stride))
}
