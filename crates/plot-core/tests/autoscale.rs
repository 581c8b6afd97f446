// File: crates/plot-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use plot_core::{Chart, Series, SeriesType};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new("Autoscale");

    // XY line
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));

    // Bars pull baseline 0.0 into the y range and widen x by half a bar
    chart.add_series(
        Series::with_data(SeriesType::Bars, vec![(2.0, 6.0), (3.0, 2.5)]).with_bar_width(0.4),
    );

    chart.autoscale_axes(0.0);

    // X spans 0..5 from the line vs 1.8..3.2 from the bars => expect ~0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Bars force the baseline into range
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
    // Y max comes from the tallest bar
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_without_data_falls_back_to_unit_range() {
    let mut chart = Chart::new("Empty");
    chart.autoscale_axes(0.02);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}

#[test]
fn autoscale_log_axis_keeps_range_positive() {
    let mut chart = Chart::new("LogLog");
    chart.x_axis = plot_core::Axis::log10("n", 1.0, 10.0);
    chart.y_axis = plot_core::Axis::log10("v", 1.0, 10.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(100.0, 91.0), (100_000.0, 2_999_412.0)],
    ));

    chart.autoscale_axes(0.02);

    assert!(chart.x_axis.min > 0.0);
    assert!(chart.y_axis.min > 0.0);
    assert!(chart.y_axis.min <= 91.0);
    assert!(chart.y_axis.max >= 2_999_412.0);
}
