// File: crates/chart-core/src/chart.rs
// Summary: Line chart with indicator/tooltip and its headless PNG rendering pipeline (Skia CPU raster).

use skia_safe as skia;
use tracing::{debug, warn};

use crate::axis::{time_labels, value_labels};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{line_path, RectI32};
use crate::grid::value_grid_ys;
use crate::indicator::{Indicator, Tooltip, TOOLTIP_BOX_WIDTH};
use crate::projection::Projection;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Dataset, Insets, Rgba, HEIGHT, WIDTH};

const LABEL_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 8.0;
const TOOLTIP_LINE_HEIGHT: f32 = 16.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Reveal animation progress in [0, 1]; only y grows in.
    pub progress: f64,
    /// Indicator position, in pixels from the plot's left edge.
    pub indicator_x: Option<f64>,
    pub draw_labels: bool,
    pub stroke_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            progress: 1.0,
            indicator_x: None,
            draw_labels: true,
            stroke_width: 4.0,
        }
    }
}

impl RenderOptions {
    /// Plot rectangle inside the insets.
    pub fn plot_rect(&self) -> ChartResult<RectI32> {
        let rect = RectI32::from_ltrb(
            self.insets.left as i32,
            self.insets.top as i32,
            self.width - self.insets.right as i32,
            self.height - self.insets.bottom as i32,
        );
        if self.width <= 0 || self.height <= 0 || rect.width() <= 0 || rect.height() <= 0 {
            return Err(ChartError::InvalidViewport { width: self.width, height: self.height });
        }
        Ok(rect)
    }
}

pub struct LineChart {
    pub dataset: Dataset,
    pub x_label_count: usize,
    pub y_label_count: usize,
}

impl LineChart {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, x_label_count: 5, y_label_count: 5 }
    }

    pub fn with_label_counts(mut self, x: usize, y: usize) -> Self {
        self.x_label_count = x;
        self.y_label_count = y;
        self
    }

    /// Tooltip for the given indicator position, using the plot size from `opts`.
    pub fn tooltip(&self, opts: &RenderOptions) -> ChartResult<Option<Tooltip>> {
        let viewport = opts.plot_rect()?.viewport();
        let projection = Projection::compute(&self.dataset, viewport);
        let indicator = opts.indicator_x.map(|x| Indicator::at(x, viewport)).unwrap_or_default();
        Ok(Tooltip::build(&self.dataset, &projection, indicator))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::Render(e.to_string()))?;
        }
        std::fs::write(path, bytes).map_err(|e| ChartError::Render(e.to_string()))?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let rect = opts.plot_rect()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.theme.background));

        let viewport = rect.viewport();
        let projection = Projection::compute(&self.dataset, viewport);
        debug!(
            series = self.dataset.series.len(),
            width = opts.width,
            height = opts.height,
            progress = opts.progress,
            "rendering line chart"
        );

        draw_grid(canvas, &rect, &projection, self.y_label_count, &opts.theme);

        for series in &self.dataset.series {
            if series.points.len() < 2 {
                warn!(label = %series.label, points = series.points.len(), "series too short to draw");
                continue;
            }
            let verts = line_path(series, &projection, viewport, opts.progress);
            draw_polyline(canvas, &rect, &verts, series.color, opts.stroke_width);
        }

        let indicator = opts.indicator_x.map(|x| Indicator::at(x, viewport)).unwrap_or_default();
        if let Some(x) = indicator.x_px {
            draw_indicator(canvas, &rect, x, &opts.theme);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_axis_labels(canvas, &shaper, &rect, &projection, self, &opts.theme);
            if let Some(tip) = Tooltip::build(&self.dataset, &projection, indicator) {
                draw_tooltip(canvas, &shaper, &rect, &tip, &opts.theme);
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn draw_grid(canvas: &skia::Canvas, rect: &RectI32, projection: &Projection, count: usize, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r) = (rect.left as f32, rect.top as f32, rect.right as f32);
    for y in value_grid_ys(projection, rect.viewport(), count) {
        let y = t + y as f32;
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_polyline(canvas: &skia::Canvas, rect: &RectI32, verts: &[(f64, f64)], color: Rgba, width: f32) {
    let (l, t) = (rect.left as f32, rect.top as f32);
    let mut path = skia::Path::new();
    for (i, &(x, y)) in verts.iter().enumerate() {
        let pt = (l + x as f32, t + y as f32);
        if i == 0 { path.move_to(pt); } else { path.line_to(pt); }
    }
    canvas.draw_path(&path, &stroke_paint(color, width));
}

fn draw_indicator(canvas: &skia::Canvas, rect: &RectI32, x: f64, theme: &Theme) {
    let x = rect.left as f32 + x as f32;
    let paint = stroke_paint(theme.indicator, 2.0);
    canvas.draw_line((x, rect.top as f32), (x, rect.bottom as f32), &paint);
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    rect: &RectI32,
    projection: &Projection,
    chart: &LineChart,
    theme: &Theme,
) {
    let color = to_skia(theme.axis_label);
    let viewport = rect.viewport();
    for tick in value_labels(projection, viewport, chart.y_label_count) {
        let y = rect.top as f32 + tick.px as f32 + LABEL_SIZE * 0.4;
        shaper.draw_right(canvas, &tick.text, rect.left as f32 - 8.0, y, LABEL_SIZE, color);
    }
    for tick in time_labels(projection, viewport, chart.x_label_count) {
        let x = rect.left as f32 + tick.px as f32;
        shaper.draw_centered(canvas, &tick.text, x, rect.bottom as f32 + 20.0, LABEL_SIZE, color);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, shaper: &TextShaper, rect: &RectI32, tip: &Tooltip, theme: &Theme) {
    let lines = tip.lines();
    let text_w = lines
        .iter()
        .map(|l| shaper.measure_width(l, LABEL_SIZE))
        .fold(0.0f32, f32::max);
    let box_w = text_w + TOOLTIP_PADDING * 2.0;
    let box_h = lines.len() as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0;

    let anchor = tip.anchor_x(rect.viewport(), (box_w as f64).max(TOOLTIP_BOX_WIDTH));
    let left = rect.left as f32 + anchor as f32;
    let top = rect.top as f32 + 10.0;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(to_skia(theme.tooltip_background));
    let rrect = skia::RRect::new_rect_xy(skia::Rect::from_xywh(left, top, box_w, box_h), 4.0, 4.0);
    canvas.draw_rrect(rrect, &bg);

    let mut y = top + TOOLTIP_PADDING + LABEL_SIZE;
    shaper.draw_left(canvas, &tip.time_text(), left + TOOLTIP_PADDING, y, LABEL_SIZE, to_skia(theme.tooltip_text));
    for entry in &tip.entries {
        y += TOOLTIP_LINE_HEIGHT;
        shaper.draw_left(canvas, &entry.text(), left + TOOLTIP_PADDING, y, LABEL_SIZE, to_skia(entry.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_rejects_tiny_surfaces() {
        let opts = RenderOptions { width: 40, height: 40, ..RenderOptions::default() };
        assert_eq!(opts.plot_rect(), Err(ChartError::InvalidViewport { width: 40, height: 40 }));
    }

    #[test]
    fn default_plot_rect() {
        let rect = RenderOptions::default().plot_rect().unwrap();
        assert_eq!(rect, RectI32::from_ltrb(56, 16, WIDTH - 16, HEIGHT - 40));
    }
}
