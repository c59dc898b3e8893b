// File: crates/wallet-chart-core/src/render.rs
// Summary: Full-repaint chart renderer: grid, gradient area, line, markers, labels.

use crate::format::format_value;
use crate::geometry::PointF;
use crate::series::{max_value, SeriesPoint};
use crate::surface::{DrawSurface, FillStyle, StrokeStyle, TextAlign};
use crate::theme::Theme;
use crate::types::{HEIGHT, MARKER_RADIUS, PADDING, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Logical (CSS-pixel) surface width.
    pub width: i32,
    /// Logical (CSS-pixel) surface height.
    pub height: i32,
    /// Plot inset on all four sides, logical pixels.
    pub padding: f32,
    /// Horizontal grid lines; the dashboard draws 5, reports views 4.
    pub grid_lines: usize,
    pub theme: Theme,
    /// `Some("CW")` formats y labels and tooltips as currency; `None` plain.
    pub currency: Option<String>,
    /// Axis tick text on/off; snapshot tests disable it to dodge platform
    /// font differences.
    pub draw_labels: bool,
    /// Message shown instead of degenerate geometry when there is no data.
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            grid_lines: 5,
            theme: Theme::dark(),
            currency: None,
            draw_labels: true,
            placeholder: "No transactions yet".to_string(),
        }
    }
}

/// Pixel positions of the plotted points from one render pass, consumed only
/// by the hover locator. Replaced wholesale on every redraw, never patched;
/// callers must pair a layout with the series it was rendered from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub plot_width: f32,
    pub plot_height: f32,
    pub points: Vec<PointF>,
}

impl RenderLayout {
    /// True for the layout of a placeholder render; hover lookups against it
    /// always miss.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Draw the full chart onto `surface` and return the layout snapshot.
///
/// Every invocation is a complete repaint in a fixed order: device-density
/// resize, clear, grid, gradient area, line, markers, labels. Side effects
/// are confined to `surface`; the renderer keeps no state between calls.
pub fn render(
    surface: &mut dyn DrawSurface,
    series: &[SeriesPoint],
    device_pixel_ratio: f32,
    opts: &RenderOptions,
) -> RenderLayout {
    let width = opts.width as f32;
    let height = opts.height as f32;

    surface.resize(width, height, device_pixel_ratio);
    surface.clear(opts.theme.background);

    // No data (or all zeros, which would collapse the vertical scale):
    // placeholder message, empty layout.
    if series.is_empty() || series.iter().all(|p| p.value == 0.0) {
        surface.draw_text(
            &opts.placeholder,
            PointF::new(width * 0.5, height * 0.5),
            13.0,
            opts.theme.placeholder,
            TextAlign::Center,
        );
        return RenderLayout::default();
    }

    let max = max_value(series);
    let padding = opts.padding;
    let plot_w = width - padding * 2.0;
    let plot_h = height - padding * 2.0;
    let baseline = padding + plot_h;

    // Horizontal grid lines, low alpha.
    let rows = opts.grid_lines.max(2);
    let row_ys = linspace(padding, baseline, rows);
    let grid_style = StrokeStyle { color: opts.theme.grid, width: 1.0 };
    for &y in &row_ys {
        surface.stroke_path(
            &[PointF::new(padding, y), PointF::new(padding + plot_w, y)],
            &grid_style,
        );
    }

    // Map series points into the plot rect. A single-point series has no
    // horizontal extent; center it.
    let n = series.len();
    let points: Vec<PointF> = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if n > 1 {
                padding + plot_w * i as f32 / (n - 1) as f32
            } else {
                padding + plot_w * 0.5
            };
            let y = padding + plot_h * (1.0 - (p.value / max) as f32);
            PointF::new(x, y)
        })
        .collect();

    // Area under the line, closed back along the baseline, fading out
    // toward it.
    let mut area = Vec::with_capacity(n + 2);
    area.push(PointF::new(points[0].x, baseline));
    area.extend_from_slice(&points);
    area.push(PointF::new(points[n - 1].x, baseline));
    surface.fill_path(
        &area,
        &FillStyle::VerticalGradient {
            top: opts.theme.area_top,
            bottom: opts.theme.area_bottom,
            y0: padding,
            y1: baseline,
        },
    );

    // Line, then a marker at every non-zero point.
    surface.stroke_path(&points, &StrokeStyle { color: opts.theme.line_stroke, width: 2.0 });
    for (p, pt) in series.iter().zip(&points) {
        if p.value != 0.0 {
            surface.fill_circle(*pt, MARKER_RADIUS, opts.theme.marker);
        }
    }

    if opts.draw_labels {
        // X ticks for the sparse non-empty bucket labels, centered under the
        // plot.
        for (p, pt) in series.iter().zip(&points) {
            if !p.bucket.label.is_empty() {
                surface.draw_text(
                    &p.bucket.label,
                    PointF::new(pt.x, height - 15.0),
                    11.0,
                    opts.theme.axis_label,
                    TextAlign::Center,
                );
            }
        }

        // Y labels at each grid line, top = max down to 0 at the baseline.
        for (i, &y) in row_ys.iter().enumerate() {
            let fraction = 1.0 - i as f64 / (rows - 1) as f64;
            surface.draw_text(
                &format_value(max * fraction, opts.currency.as_deref()),
                PointF::new(padding - 8.0, y),
                11.0,
                opts.theme.axis_label,
                TextAlign::Right,
            );
        }
    }

    RenderLayout {
        origin_x: padding,
        origin_y: padding,
        plot_width: plot_w,
        plot_height: plot_h,
        points,
    }
}

fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f32 - 1.0);
    (0..steps).map(|i| start + step * i as f32).collect()
}
