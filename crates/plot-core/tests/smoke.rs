// File: crates/plot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plot_core::{Axis, Chart, RenderOptions, Series, SeriesType};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new("Smoke Test");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(
        Series::with_data(
            SeriesType::Line,
            vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
        )
        .with_markers(),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_fails_without_destination_directory() {
    let mut chart = Chart::new("Missing Dir");
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 1.0)]));
    chart.autoscale_axes(0.0);

    let out = std::path::PathBuf::from("target/test_out/no_such_dir/out.png");
    let _ = std::fs::remove_dir_all(out.parent().unwrap());

    let err = chart
        .render_to_png(&RenderOptions::default(), &out)
        .expect_err("render into a missing directory must fail");
    assert!(matches!(err, plot_core::RenderError::Io(_)));
    assert!(!out.exists(), "no partial artifact may be left behind");
}
