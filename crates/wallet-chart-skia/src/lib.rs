// File: crates/wallet-chart-skia/src/lib.rs
// Summary: Skia CPU raster implementation of DrawSurface, plus PNG/RGBA export.

use anyhow::Result;
use skia_safe as skia;

use wallet_chart_core::{
    render, Color, DrawSurface, FillStyle, PointF, RenderLayout, RenderOptions, SeriesPoint,
    StrokeStyle, TextAlign,
};

/// CPU raster surface backing the chart renderer.
///
/// The backing buffer is allocated at `logical size x device_pixel_ratio`
/// and the canvas carries the matching uniform scale, so all draw calls
/// arrive in logical (CSS) pixels and rasterize at native density.
pub struct SkiaSurface {
    surface: skia::Surface,
    logical_width: f32,
    logical_height: f32,
    dpr: f32,
}

impl SkiaSurface {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self> {
        let dpr = device_pixel_ratio.max(0.1);
        let mut surface = raster(width, height, dpr)?;
        surface.canvas().scale((dpr, dpr));
        Ok(Self {
            surface,
            logical_width: width,
            logical_height: height,
            dpr,
        })
    }

    /// Backing buffer dimensions in device pixels.
    pub fn physical_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn logical_size(&self) -> (f32, f32) {
        (self.logical_width, self.logical_height)
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    /// Encode the current pixels as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels as PNG to `path`, creating parent dirs.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Copy out the raw pixels as tightly-packed RGBA8.
    /// Returns (pixels, width, height, row_bytes) in device pixels.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.physical_size();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }
}

impl DrawSurface for SkiaSurface {
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let dpr = device_pixel_ratio.max(0.1);
        // Raster allocation only fails on absurd dimensions; keep the old
        // buffer in that case rather than panic mid-frame.
        if let Ok(mut surface) = raster(width, height, dpr) {
            surface.canvas().scale((dpr, dpr));
            self.surface = surface;
            self.logical_width = width;
            self.logical_height = height;
            self.dpr = dpr;
        }
    }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn stroke_path(&mut self, points: &[PointF], style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let path = polyline(points, false);
        let mut paint = base_paint();
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        paint.set_color(to_skia(style.color));
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_path(&mut self, points: &[PointF], fill: &FillStyle) {
        if points.len() < 3 {
            return;
        }
        let path = polyline(points, true);
        let mut paint = base_paint();
        paint.set_style(skia::paint::Style::Fill);
        match *fill {
            FillStyle::Solid(color) => {
                paint.set_color(to_skia(color));
            }
            FillStyle::VerticalGradient { top, bottom, y0, y1 } => {
                let colors = [to_skia(top), to_skia(bottom)];
                let shader = skia::gradient_shader::linear(
                    (skia::Point::new(0.0, y0), skia::Point::new(0.0, y1)),
                    skia::gradient_shader::GradientShaderColors::Colors(&colors),
                    None,
                    skia::TileMode::Clamp,
                    None,
                    None,
                );
                paint.set_shader(shader);
            }
        }
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_circle(&mut self, center: PointF, radius: f32, color: Color) {
        let mut paint = base_paint();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.surface
            .canvas()
            .draw_circle((center.x, center.y), radius, &paint);
    }

    fn draw_text(&mut self, text: &str, pos: PointF, size: f32, color: Color, align: TextAlign) {
        let mut paint = base_paint();
        paint.set_color(to_skia(color));
        let mut font = skia::Font::default();
        font.set_size(size.max(1.0));

        let (width, _bounds) = font.measure_str(text, Some(&paint));
        let x = match align {
            TextAlign::Left => pos.x,
            TextAlign::Center => pos.x - width * 0.5,
            TextAlign::Right => pos.x - width,
        };
        // draw_str anchors at the baseline; nudge so `pos.y` reads as the
        // visual center for the default font.
        let y = pos.y + size * 0.35;
        self.surface.canvas().draw_str(text, (x, y), &font, &paint);
    }
}

/// Render `series` onto a fresh Skia surface and hand back the PNG bytes
/// together with the layout snapshot for hover lookups.
pub fn render_to_png_bytes(
    series: &[SeriesPoint],
    device_pixel_ratio: f32,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, RenderLayout)> {
    let mut surface = SkiaSurface::new(opts.width as f32, opts.height as f32, device_pixel_ratio)?;
    let layout = render(&mut surface, series, device_pixel_ratio, opts);
    let bytes = surface.to_png_bytes()?;
    Ok((bytes, layout))
}

/// Render `series` to a PNG file at `path`; see [`render_to_png_bytes`].
pub fn render_to_png(
    series: &[SeriesPoint],
    device_pixel_ratio: f32,
    opts: &RenderOptions,
    path: impl AsRef<std::path::Path>,
) -> Result<RenderLayout> {
    let mut surface = SkiaSurface::new(opts.width as f32, opts.height as f32, device_pixel_ratio)?;
    let layout = render(&mut surface, series, device_pixel_ratio, opts);
    surface.write_png(path)?;
    Ok(layout)
}

fn raster(width: f32, height: f32, dpr: f32) -> Result<skia::Surface> {
    let pw = (width * dpr).ceil().max(1.0) as i32;
    let ph = (height * dpr).ceil().max(1.0) as i32;
    skia::surfaces::raster_n32_premul((pw, ph))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

fn polyline(points: &[PointF], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to((points[0].x, points[0].y));
    for p in &points[1..] {
        path.line_to((p.x, p.y));
    }
    if close {
        path.close();
    }
    path
}

fn base_paint() -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
