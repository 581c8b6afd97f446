// File: crates/heap-plots/tests/spec_shapes.rs
// Purpose: Structural properties of the seven chart specifications.

use heap_plots::charts::{chart_specs, ChartSpec};
use heap_plots::dataset::{Columns, BENCHMARKS};
use plot_core::{LineStyle, ScaleKind, SeriesType};

fn spec(file_name: &str) -> ChartSpec {
    chart_specs()
        .into_iter()
        .find(|s| s.file_name == file_name)
        .unwrap_or_else(|| panic!("no spec named {file_name}"))
}

#[test]
fn there_are_seven_specs_with_unique_names() {
    let specs = chart_specs();
    assert_eq!(specs.len(), 7);
    let mut names: Vec<&str> = specs.iter().map(|s| s.file_name).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 7, "duplicate output names");
}

#[test]
fn grouped_bar_chart_has_four_bars_per_size_group() {
    let spec = spec("all-operations-comparison.png");
    let columns = Columns::from_records(&BENCHMARKS);
    let series = (spec.build_series)(&columns).expect("consistent dataset");

    // One bar series per operation
    assert_eq!(series.len(), 4);
    for s in &series {
        assert_eq!(s.series_type, SeriesType::Bars);
        // one bar per size group
        assert_eq!(s.data_xy.len(), BENCHMARKS.len());
        // every bar sits inside its group's unit slot
        for (group, &(x, y)) in s.data_xy.iter().enumerate() {
            assert!((x - group as f64).abs() < 0.5, "bar at {x} escapes group {group}");
            assert!(y >= 0.0);
        }
    }
}

#[test]
fn loglog_chart_plots_three_positive_series() {
    let spec = spec("complexity-loglog.png");
    assert_eq!(spec.x_scale, ScaleKind::Log10);
    assert_eq!(spec.y_scale, ScaleKind::Log10);

    let columns = Columns::from_records(&BENCHMARKS);
    let series = (spec.build_series)(&columns).expect("consistent dataset");
    assert_eq!(series.len(), 3);
    for s in &series {
        assert_eq!(s.data_xy.len(), 4, "one point per sample size");
        for &(x, y) in &s.data_xy {
            assert!(x > 0.0 && y > 0.0, "log axes need strictly positive values");
        }
    }
}

#[test]
fn comparison_charts_carry_a_dashed_reference_curve() {
    let columns = Columns::from_records(&BENCHMARKS);
    for name in ["insert-comparisons.png", "extract-comparisons.png", "decreasekey-comparisons.png"] {
        let series = (spec(name).build_series)(&columns).expect("consistent dataset");
        assert_eq!(series.len(), 2, "{name}: measured + reference");
        assert_eq!(series[0].line_style, LineStyle::Solid);
        assert_eq!(series[1].line_style, LineStyle::Dashed, "{name}: reference must be dashed");
        assert!(series[1].name.is_some(), "{name}: reference needs a legend entry");
    }
}

#[test]
fn reference_curves_grow_like_their_bounds() {
    let columns = Columns::from_records(&BENCHMARKS);
    let series = (spec("insert-comparisons.png").build_series)(&columns).unwrap();
    let reference = &series[1];
    // n·log2(n) scaled by 0.1: check the first point exactly
    let expect = 100.0 * 100.0_f64.log2() * 0.1;
    assert!((reference.data_xy[0].1 - expect).abs() < 1e-9);
}
