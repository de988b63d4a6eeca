// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::format_tick;
use crate::scale::ValueScale;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TICK_LEN: f32 = 5.0;
const GAP: f32 = 6.0;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 16.0;
const MARKER_RADIUS: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Minimum margins around the plot area.
    pub insets: Insets,
    pub theme: Theme,
    /// Text drawing (titles, labels, ticks, legend text). Off for pixel-stable snapshots.
    pub draw_labels: bool,
    /// Grow `insets` so tick labels (rotated or not) and titles are not clipped.
    pub auto_layout: bool,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            auto_layout: false,
            show_grid: true,
            show_legend: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Labels that will appear in the legend, in drawing order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).filter(|l| !l.is_empty()).collect()
    }

    /// Fit both axis ranges to the data (and fixed X ticks), padding by `margin`.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Insets actually used for `opts`: the configured ones, grown to fit labels
    /// when `auto_layout` is on.
    pub fn layout_insets(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Insets {
        let shaper = match shaper {
            Some(s) if opts.auto_layout && opts.draw_labels => s,
            _ => return opts.insets,
        };

        let x_labels: Vec<String> = self.x_axis.tick_values().into_iter().map(format_tick).collect();
        let y_labels: Vec<String> = self.y_axis.tick_values().into_iter().map(format_tick).collect();

        let y_tick_w = y_labels
            .iter()
            .map(|l| shaper.measure(l, TICK_FONT).0)
            .fold(0.0f32, f32::max);
        let (x_tick_w, x_tick_h) = x_labels
            .iter()
            .map(|l| shaper.measure_rotated(l, TICK_FONT, self.x_axis.tick_rotation))
            .fold((0.0f32, 0.0f32), |(w, h), (lw, lh)| (w.max(lw), h.max(lh)));
        let (_, label_h) = shaper.measure("Ag", LABEL_FONT);
        let (_, title_h) = shaper.measure("Ag", TITLE_FONT);

        let left = y_tick_w + TICK_LEN + GAP * 3.0 + label_h;
        let bottom = x_tick_h + TICK_LEN + GAP * 3.0 + label_h;
        let top = if self.title.is_empty() { GAP * 2.0 } else { title_h + GAP * 3.0 };
        // Horizontal labels are centered on their tick and can overhang the right edge.
        let right = if self.x_axis.tick_rotation == 0.0 { x_tick_w * 0.5 + GAP } else { GAP * 2.0 };

        opts.insets.max(Insets::new(
            left.ceil() as u32,
            right.ceil() as u32,
            top.ceil() as u32,
            bottom.ceil() as u32,
        ))
    }

    /// Render onto a fresh CPU raster surface.
    pub fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        // Background
        canvas.clear(theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        let insets = self.layout_insets(opts, shaper.as_ref());
        let plot = RectI32::inset(opts.width, opts.height, &insets);

        let sx = ValueScale::for_axis(&self.x_axis, plot.left as f32, plot.right as f32);
        let sy = ValueScale::for_axis(&self.y_axis, plot.bottom as f32, plot.top as f32);
        let x_ticks = visible_ticks(&self.x_axis, &sx, &plot, true);
        let y_ticks = visible_ticks(&self.y_axis, &sy, &plot, false);

        if opts.show_grid {
            draw_grid(canvas, &plot, &x_ticks, &y_ticks, theme);
        }
        draw_frame(canvas, &plot, &x_ticks, &y_ticks, theme);

        if let Some(shaper) = shaper.as_ref() {
            draw_tick_labels(canvas, shaper, &plot, &self.x_axis, &x_ticks, &y_ticks, theme);
            draw_titles(canvas, shaper, &plot, self, opts.height, theme);
        }

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = theme.series_color(i);
            draw_line_series(canvas, &sx, &sy, s, color);
        }
        canvas.restore();

        if opts.show_legend {
            draw_legend(canvas, shaper.as_ref(), &plot, &self.series, theme);
        }

        Ok(surface)
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(
            "rendered chart '{}' ({} series, {}x{}) into {} PNG bytes",
            self.title,
            self.series.len(),
            opts.width,
            opts.height,
            data.size()
        );
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

/// (value, pixel) pairs of ticks that land inside the plot area.
fn visible_ticks(axis: &Axis, scale: &ValueScale, plot: &RectI32, horizontal: bool) -> Vec<(f64, f32)> {
    axis.tick_values()
        .into_iter()
        .filter(|&v| scale.accepts(v))
        .map(|v| (v, scale.to_px(v)))
        .filter(|&(_, px)| {
            if horizontal {
                px >= plot.left as f32 - 0.5 && px <= plot.right as f32 + 0.5
            } else {
                px >= plot.top as f32 - 0.5 && px <= plot.bottom as f32 + 0.5
            }
        })
        .collect()
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, x_ticks: &[(f64, f32)], y_ticks: &[(f64, f32)], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for &(_, x) in x_ticks {
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    // horizontals
    for &(_, y) in y_ticks {
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, x_ticks: &[(f64, f32)], y_ticks: &[(f64, f32)], theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.2);
    canvas.draw_rect(to_rect(plot), &axis_paint);

    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &(_, x) in x_ticks {
        canvas.draw_line((x, b), (x, b + TICK_LEN), &axis_paint);
    }
    for &(_, y) in y_ticks {
        canvas.draw_line((l - TICK_LEN, y), (l, y), &axis_paint);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x_axis: &Axis,
    x_ticks: &[(f64, f32)],
    y_ticks: &[(f64, f32)],
    theme: &Theme,
) {
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &(v, x) in x_ticks {
        let text = format_tick(v);
        if x_axis.tick_rotation == 0.0 {
            shaper.draw_centered(canvas, &text, x, b + TICK_LEN + GAP * 0.5, TICK_FONT, theme.tick);
        } else {
            shaper.draw_rotated_end(canvas, &text, x, b + TICK_LEN + GAP, x_axis.tick_rotation, TICK_FONT, theme.tick);
        }
    }
    for &(v, y) in y_ticks {
        shaper.draw_right(canvas, &format_tick(v), l - TICK_LEN - GAP * 0.5, y, TICK_FONT, theme.tick);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, chart: &Chart, height: i32, theme: &Theme) {
    let cx = (plot.left + plot.right) as f32 * 0.5;
    let cy = (plot.top + plot.bottom) as f32 * 0.5;

    if !chart.title.is_empty() {
        let (_, h) = shaper.measure(&chart.title, TITLE_FONT);
        shaper.draw_centered(canvas, &chart.title, cx, plot.top as f32 - h - GAP, TITLE_FONT, theme.axis_label);
    }
    if !chart.x_axis.label.is_empty() {
        let (_, h) = shaper.measure(&chart.x_axis.label, LABEL_FONT);
        shaper.draw_centered(canvas, &chart.x_axis.label, cx, height as f32 - h - GAP, LABEL_FONT, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        // Vertical, reading bottom to top, hugging the left edge.
        let mut p = shaper.layout(&chart.y_axis.label, LABEL_FONT, theme.axis_label);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((GAP, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, 0.0));
        canvas.restore();
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &ValueScale, sy: &ValueScale, series: &Series, color: skia::Color) {
    if series.data_xy.is_empty() {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    // Points without a position (e.g. zero on a log axis) break the line.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut points = Vec::with_capacity(series.data_xy.len());
    for &(x, y) in &series.data_xy {
        if !(sx.accepts(x) && sy.accepts(y)) {
            pen_down = false;
            continue;
        }
        let p = (sx.to_px(x), sy.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
        points.push(p);
    }
    canvas.draw_path(&path, &stroke);

    if series.marker == Marker::Circle {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);
        for p in points {
            canvas.draw_circle(p, MARKER_RADIUS, &fill);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: Option<&TextShaper>, plot: &RectI32, series: &[Series], theme: &Theme) {
    let entries: Vec<(usize, &Series)> = series.iter().enumerate().filter(|(_, s)| !s.label.is_empty()).collect();
    if entries.is_empty() {
        return;
    }

    let swatch = 28.0f32;
    let row_h = 20.0f32;
    let text_w = shaper
        .map(|sh| entries.iter().map(|(_, s)| sh.measure(&s.label, TICK_FONT).0).fold(0.0f32, f32::max))
        .unwrap_or(0.0);
    let box_w = GAP * 3.0 + swatch + text_w;
    let box_h = GAP * 2.0 + row_h * entries.len() as f32;
    let left = plot.left as f32 + GAP * 2.0;
    let top = plot.top as f32 + GAP * 2.0;

    let frame = skia::Rect::from_xywh(left, top, box_w, box_h);
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(frame, 3.0, 3.0, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(frame, 3.0, 3.0, &border);

    for (row, (i, s)) in entries.iter().enumerate() {
        let color = theme.series_color(*i);
        let cy = top + GAP + row_h * (row as f32 + 0.5);
        let x0 = left + GAP;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_stroke_width(2.0);
        stroke.set_color(color);
        canvas.draw_line((x0, cy), (x0 + swatch, cy), &stroke);
        if s.marker == Marker::Circle {
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_color(color);
            canvas.draw_circle((x0 + swatch * 0.5, cy), MARKER_RADIUS, &dot);
        }
        if let Some(sh) = shaper {
            let (_, h) = sh.measure(&s.label, TICK_FONT);
            sh.draw_at(canvas, &s.label, x0 + swatch + GAP, cy - h * 0.5, TICK_FONT, theme.axis_label);
        }
    }
}
