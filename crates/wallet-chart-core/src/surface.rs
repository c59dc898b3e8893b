// File: crates/wallet-chart-core/src/surface.rs
// Summary: Minimal drawing-surface capability trait the renderer draws through.

use crate::geometry::PointF;
use crate::types::Color;

/// Text anchor relative to the given position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

/// Fill for a closed path: flat color, or a vertical linear gradient
/// interpolated from `top` at `y0` down to `bottom` at `y1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillStyle {
    Solid(Color),
    VerticalGradient { top: Color, bottom: Color, y0: f32, y1: f32 },
}

/// The 2D drawing capability the chart renderer needs from a host canvas.
///
/// All coordinates are logical (CSS) pixels. `resize` must allocate the
/// backing buffer at `device_pixel_ratio` density and apply the matching
/// uniform scale, so every later call draws in logical units while rendering
/// at native density. Implementations draw immediately and hold no layout
/// state between calls.
pub trait DrawSurface {
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32);
    fn clear(&mut self, color: Color);
    /// Stroke an open polyline through `points`.
    fn stroke_path(&mut self, points: &[PointF], style: &StrokeStyle);
    /// Fill the closed polygon described by `points`.
    fn fill_path(&mut self, points: &[PointF], fill: &FillStyle);
    fn fill_circle(&mut self, center: PointF, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: PointF, size: f32, color: Color, align: TextAlign);
}
