// File: crates/heap-plots/src/charts.rs
// Summary: The seven chart specifications and the shared render routine.

use std::path::{Path, PathBuf};

use plot_core::grid::format_caption;
use plot_core::types::{HEIGHT, WIDTH};
use plot_core::{Axis, Chart, RenderError, RenderOptions, ScaleKind, Series, SeriesType, Theme};

use crate::dataset::Columns;

// Scaling constants for the theoretical curves. Fitted for visual
// alignment with the measured data; display parameters, not analysis.
pub const INSERT_REF_SCALE: f64 = 0.1;
pub const EXTRACT_REF_SCALE: f64 = 1.5;
pub const DECREASE_REF_SCALE: f64 = 50.0;

/// Width of one bar as a fraction of a size group in the clustered chart.
const BAR_SLOT: f64 = 0.2;

/// Declarative description of one output artifact. Rendering is a pure
/// function of a spec plus the dataset columns.
pub struct ChartSpec {
    pub file_name: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub size: (i32, i32),
    /// Overrides the autoscaled x range (categorical group axes).
    pub x_range: Option<(f64, f64)>,
    pub build_series: fn(&Columns) -> Result<Vec<Series>, RenderError>,
    /// Explicit x tick captions (categorical group axes).
    pub x_ticks: Option<fn(&Columns) -> Vec<(f64, String)>>,
}

/// The seven charts, in the order they are written.
pub fn chart_specs() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            file_name: "insert-comparisons.png",
            title: "Insert Operation - Comparisons Analysis",
            x_label: "Heap Size (n)",
            y_label: "Number of Comparisons",
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            size: (WIDTH, HEIGHT),
            x_range: None,
            build_series: insert_comparisons_series,
            x_ticks: None,
        },
        ChartSpec {
            file_name: "insert-time.png",
            title: "Insert Operation - Time Performance",
            x_label: "Heap Size (n)",
            y_label: "Execution Time (ms)",
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            size: (WIDTH, HEIGHT),
            x_range: None,
            build_series: insert_time_series,
            x_ticks: None,
        },
        ChartSpec {
            file_name: "extract-comparisons.png",
            title: "ExtractMin Operation - Comparisons Analysis",
            x_label: "Heap Size (n)",
            y_label: "Number of Comparisons",
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            size: (WIDTH, HEIGHT),
            x_range: None,
            build_series: extract_comparisons_series,
            x_ticks: None,
        },
        ChartSpec {
            file_name: "extract-time.png",
            title: "ExtractMin Operation - Time Performance",
            x_label: "Heap Size (n)",
            y_label: "Execution Time (ms)",
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            size: (WIDTH, HEIGHT),
            x_range: None,
            build_series: extract_time_series,
            x_ticks: None,
        },
        ChartSpec {
            file_name: "decreasekey-comparisons.png",
            title: "DecreaseKey Operation - Comparisons Analysis",
            x_label: "Heap Size (n)",
            y_label: "Number of Comparisons",
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            size: (WIDTH, HEIGHT),
            x_range: None,
            build_series: decrease_comparisons_series,
            x_ticks: None,
        },
        ChartSpec {
            file_name: "all-operations-comparison.png",
            title: "All Operations - Time Comparison",
            x_label: "Heap Size",
            y_label: "Execution Time (ms)",
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            size: (1800, 1050),
            x_range: Some((-0.5, 3.5)),
            build_series: all_operations_series,
            x_ticks: Some(size_group_ticks),
        },
        ChartSpec {
            file_name: "complexity-loglog.png",
            title: "Complexity Analysis - All Operations (Log-Log Plot)",
            x_label: "Heap Size (n) - log scale",
            y_label: "Comparisons - log scale",
            x_scale: ScaleKind::Log10,
            y_scale: ScaleKind::Log10,
            size: (WIDTH, HEIGHT),
            x_range: None,
            build_series: complexity_series,
            x_ticks: None,
        },
    ]
}

/// Build, validate, autoscale, and write one chart. Returns the path of
/// the written PNG.
pub fn render_chart(
    spec: &ChartSpec,
    columns: &Columns,
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let mut chart = Chart::new(spec.title);
    for series in (spec.build_series)(columns)? {
        chart.add_series(series);
    }

    chart.x_axis = Axis::new(spec.x_label, 0.0, 1.0);
    chart.x_axis.kind = spec.x_scale;
    chart.y_axis = Axis::new(spec.y_label, 0.0, 1.0);
    chart.y_axis.kind = spec.y_scale;
    chart.autoscale_axes(0.02);
    if let Some((lo, hi)) = spec.x_range {
        chart.x_axis.min = lo;
        chart.x_axis.max = hi;
    }
    if let Some(ticks) = spec.x_ticks {
        chart.x_axis.ticks = Some(ticks(columns));
    }

    let opts = RenderOptions {
        width: spec.size.0,
        height: spec.size.1,
        ..RenderOptions::default()
    };
    let path = out_dir.join(spec.file_name);
    chart.render_to_png(&opts, &path)?;
    Ok(path)
}

// ---- series builders ---------------------------------------------------------

fn insert_comparisons_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    Ok(vec![
        measured_line(c, &c.insert_comparisons, "Actual")?,
        reference_curve(c, "O(n log n) theoretical", |n| n * n.log2() * INSERT_REF_SCALE)?,
    ])
}

fn insert_time_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    Ok(vec![measured_line(c, &c.insert_time_ms, "Insert")?
        .with_color(Theme::light().palette[1])])
}

fn extract_comparisons_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    Ok(vec![
        measured_line(c, &c.extract_comparisons, "Actual")?
            .with_color(Theme::light().palette[2]),
        reference_curve(c, "O(n log n) theoretical", |n| n * n.log2() * EXTRACT_REF_SCALE)?,
    ])
}

fn extract_time_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    Ok(vec![measured_line(c, &c.extract_time_ms, "ExtractMin")?
        .with_color(Theme::light().palette[3])])
}

fn decrease_comparisons_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    Ok(vec![
        measured_line(c, &c.decrease_comparisons, "Actual")?
            .with_color(Theme::light().palette[4]),
        reference_curve(c, "O(log n) theoretical", |n| n.log2() * DECREASE_REF_SCALE)?,
    ])
}

fn all_operations_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    let operations: [(&str, &Vec<f64>); 4] = [
        ("Insert", &c.insert_time_ms),
        ("Extract", &c.extract_time_ms),
        ("DecreaseKey", &c.decrease_time_ms),
        ("Merge", &c.merge_time_ms),
    ];

    let mut out = Vec::with_capacity(operations.len());
    for (slot, (name, column)) in operations.iter().enumerate() {
        // One series per operation; group g holds its bar at g + offset.
        let offset = (slot as f64 - 1.5) * BAR_SLOT;
        let groups: Vec<f64> = (0..c.sizes.len()).map(|g| g as f64 + offset).collect();
        out.push(
            Series::from_columns(SeriesType::Bars, *name, &groups, column.as_slice())?
                .with_bar_width(BAR_SLOT * 0.9),
        );
    }
    Ok(out)
}

fn complexity_series(c: &Columns) -> Result<Vec<Series>, RenderError> {
    let palette = Theme::light().palette;
    Ok(vec![
        measured_line(c, &c.insert_comparisons, "Insert")?.with_color(palette[0]),
        measured_line(c, &c.extract_comparisons, "Extract")?.with_color(Theme::light().reference),
        measured_line(c, &c.decrease_comparisons, "DecreaseKey")?.with_color(palette[1]),
    ])
}

fn size_group_ticks(c: &Columns) -> Vec<(f64, String)> {
    c.sizes
        .iter()
        .enumerate()
        .map(|(g, &n)| (g as f64, format_caption(n)))
        .collect()
}

fn measured_line(c: &Columns, column: &[f64], name: &str) -> Result<Series, RenderError> {
    Ok(Series::from_columns(SeriesType::Line, name, &c.sizes, column)?.with_markers())
}

fn reference_curve(
    c: &Columns,
    name: &str,
    f: impl Fn(f64) -> f64,
) -> Result<Series, RenderError> {
    let values: Vec<f64> = c.sizes.iter().map(|&n| f(n)).collect();
    Ok(Series::from_columns(SeriesType::Line, name, &c.sizes, &values)?
        .dashed()
        .with_color(Theme::light().reference))
}
