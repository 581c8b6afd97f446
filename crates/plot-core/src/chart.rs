// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::grid::{format_caption, log_ticks, nice_ticks};
use crate::scale::ValueScale;
use crate::series::{LineStyle, Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::{Theme, PALETTE_LEN};
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Title, tick captions, axis labels, and legend. Deterministic tests
    /// disable this to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub theme: Theme,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            theme: Theme::light(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the series data. `margin` is the padding
    /// fraction added on each side (additive for linear axes, in decades
    /// for log axes). Bar series pull baseline 0.0 into the y range.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for s in &self.series {
            let half_bar = match s.series_type {
                SeriesType::Bars => s.bar_width * 0.5,
                SeriesType::Line => 0.0,
            };
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x - half_bar);
                x_max = x_max.max(x + half_bar);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
            if matches!(s.series_type, SeriesType::Bars) && !s.data_xy.is_empty() {
                y_min = y_min.min(0.0);
                y_max = y_max.max(0.0);
            }
        }

        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            self.x_axis.min = 0.0;
            self.x_axis.max = 1.0;
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }

        let (xa, xb) = padded(x_min, x_max, margin, self.x_axis.kind);
        let (ya, yb) = padded(y_min, y_max, margin, self.y_axis.kind);
        self.x_axis.min = xa;
        self.x_axis.max = xb;
        self.y_axis.min = ya;
        self.y_axis.max = yb;
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::EncodePng)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`. The image is fully
    /// encoded in memory before the file is opened, so a failed render
    /// never leaves a partial or zero-byte artifact at the destination.
    /// The destination directory is not created here.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to a raw RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Surface);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(self.theme.background);

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );
        let sx = ValueScale::for_axis(&self.x_axis, plot.left as f32, plot.right as f32);
        let sy = ValueScale::for_axis(&self.y_axis, plot.bottom as f32, plot.top as f32);

        let x_ticks = axis_ticks(&self.x_axis);
        let y_ticks = axis_ticks(&self.y_axis);

        draw_grid(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, &self.theme);
        draw_axes(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, &self.theme);

        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or(self.theme.palette[i % PALETTE_LEN]);
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &sx, &sy, s, color),
                SeriesType::Bars => draw_bar_series(canvas, &sx, &sy, s, color),
            }
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_captions(canvas, &shaper, &plot, &sx, &sy, &x_ticks, &y_ticks, &self.theme);
            draw_axis_labels(canvas, &shaper, &plot, &self.x_axis, &self.y_axis, &self.theme);
            if !self.title.is_empty() {
                shaper.draw_centered(
                    canvas,
                    &self.title,
                    (plot.left + plot.width() / 2) as f32,
                    plot.top as f32 - 34.0,
                    26.0,
                    self.theme.title,
                    false,
                );
            }
            draw_legend(canvas, &shaper, &plot, &self.series, &self.theme);
        }
    }
}

fn padded(min: f64, max: f64, margin: f64, kind: ScaleKind) -> (f64, f64) {
    match kind {
        ScaleKind::Linear => {
            let m = (max - min) * margin;
            (min - m, max + m)
        }
        ScaleKind::Log10 => {
            let lo = min.max(1e-12);
            let hi = max.max(lo);
            let d = (hi / lo).log10() * margin;
            (lo / 10f64.powf(d), hi * 10f64.powf(d))
        }
    }
}

fn axis_ticks(axis: &Axis) -> Vec<(f64, String)> {
    if let Some(t) = &axis.ticks {
        return t.clone();
    }
    let positions = match axis.kind {
        ScaleKind::Linear => nice_ticks(axis.min, axis.max, 8),
        ScaleKind::Log10 => log_ticks(axis.min, axis.max),
    };
    positions.into_iter().map(|v| (v, format_caption(v))).collect()
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &ValueScale,
    sy: &ValueScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals at x ticks
    for &(v, _) in x_ticks {
        let x = sx.to_px(v);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    // horizontals at y ticks
    for &(v, _) in y_ticks {
        let y = sy.to_px(v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &ValueScale,
    sy: &ValueScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    // Tick stubs pointing out of the plot
    for &(v, _) in x_ticks {
        let x = sx.to_px(v);
        canvas.draw_line((x, b), (x, b + 6.0), &axis_paint);
    }
    for &(v, _) in y_ticks {
        let y = sy.to_px(v);
        canvas.draw_line((l - 6.0, y), (l, y), &axis_paint);
    }
}

fn draw_tick_captions(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    sx: &ValueScale,
    sy: &ValueScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    for (v, caption) in x_ticks {
        let x = sx.to_px(*v);
        shaper.draw_centered(canvas, caption, x, plot.bottom as f32 + 32.0, 16.0, theme.tick, true);
    }
    for (v, caption) in y_ticks {
        let y = sy.to_px(*v);
        shaper.draw_right(canvas, caption, plot.left as f32 - 14.0, y + 6.0, 16.0, theme.tick, true);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let cx = (plot.left + plot.width() / 2) as f32;
    shaper.draw_centered(canvas, &x_axis.label, cx, plot.bottom as f32 + 78.0, 20.0, theme.axis_label, false);

    // Y label runs bottom-to-top along the left margin.
    let lx = plot.left as f32 - 100.0;
    let ly = (plot.top + plot.height() / 2) as f32;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(lx, ly)));
    shaper.draw_centered(canvas, &y_axis.label, lx, ly, 20.0, theme.axis_label, false);
    canvas.restore();
}

fn draw_line_series(
    canvas: &skia::Canvas,
    sx: &ValueScale,
    sy: &ValueScale,
    series: &Series,
    color: skia::Color,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        builder.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            builder.line_to((sx.to_px(x), sy.to_px(y)));
        }
        let path = builder.detach();

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(3.0);
        stroke.set_color(color);
        if series.line_style == LineStyle::Dashed {
            if let Some(dash) = skia::PathEffect::dash(&[16.0, 10.0], 0.0) {
                stroke.set_path_effect(dash);
            }
        }
        canvas.draw_path(&path, &stroke);
    }

    if series.markers {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);
        for &(x, y) in data {
            canvas.draw_circle((sx.to_px(x), sy.to_px(y)), 7.0, &fill);
        }
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    sx: &ValueScale,
    sy: &ValueScale,
    series: &Series,
    color: skia::Color,
) {
    if series.data_xy.is_empty() {
        return;
    }

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color);

    let base_px = sy.to_px(0.0);
    let half = series.bar_width * 0.5;
    for &(x, y) in &series.data_xy {
        let x0 = sx.to_px(x - half);
        let x1 = sx.to_px(x + half);
        let y_px = sy.to_px(y);
        let top = y_px.min(base_px);
        let bot = y_px.max(base_px);
        let rect = skia::Rect::from_ltrb(x0, top, x1, bot.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    series: &[Series],
    theme: &Theme,
) {
    let entries: Vec<(&str, skia::Color, &Series)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            s.name
                .as_deref()
                .map(|n| (n, s.color.unwrap_or(theme.palette[i % PALETTE_LEN]), s))
        })
        .collect();
    // A legend only makes sense when more than one series is plotted.
    if entries.len() < 2 {
        return;
    }

    let text_size = 18.0f32;
    let row_h = 30.0f32;
    let swatch_w = 36.0f32;
    let pad = 14.0f32;

    let text_w = entries
        .iter()
        .map(|(n, _, _)| shaper.measure_width(n, text_size, false))
        .fold(0.0f32, f32::max);
    let box_w = pad + swatch_w + 10.0 + text_w + pad;
    let box_h = pad * 2.0 + entries.len() as f32 * row_h - 8.0;
    let bx = plot.left as f32 + 18.0;
    let by = plot.top as f32 + 18.0;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    let frame_rect = skia::Rect::from_ltrb(bx, by, bx + box_w, by + box_h);
    canvas.draw_rect(frame_rect, &fill);

    let mut frame = skia::Paint::default();
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    frame.set_color(theme.legend_frame);
    canvas.draw_rect(frame_rect, &frame);

    for (row, (name, color, s)) in entries.iter().enumerate() {
        let cy = by + pad + row as f32 * row_h + row_h * 0.5 - 4.0;
        let x0 = bx + pad;
        let x1 = x0 + swatch_w;
        match s.series_type {
            SeriesType::Line => {
                let mut stroke = skia::Paint::default();
                stroke.set_anti_alias(true);
                stroke.set_style(skia::paint::Style::Stroke);
                stroke.set_stroke_width(3.0);
                stroke.set_color(*color);
                if s.line_style == LineStyle::Dashed {
                    if let Some(dash) = skia::PathEffect::dash(&[10.0, 6.0], 0.0) {
                        stroke.set_path_effect(dash);
                    }
                }
                canvas.draw_line((x0, cy), (x1, cy), &stroke);
                if s.markers {
                    let mut dot = skia::Paint::default();
                    dot.set_anti_alias(true);
                    dot.set_style(skia::paint::Style::Fill);
                    dot.set_color(*color);
                    canvas.draw_circle(((x0 + x1) * 0.5, cy), 5.0, &dot);
                }
            }
            SeriesType::Bars => {
                let mut body = skia::Paint::default();
                body.set_anti_alias(true);
                body.set_style(skia::paint::Style::Fill);
                body.set_color(*color);
                canvas.draw_rect(skia::Rect::from_ltrb(x0, cy - 8.0, x1, cy + 8.0), &body);
            }
        }
        shaper.draw_left(canvas, name, x1 + 10.0, cy + text_size * 0.4, text_size, theme.axis_label, false);
    }
}
