// File: crates/plot-core/tests/ticks.rs
// Purpose: Tick layout and caption formatting.

use plot_core::grid::{format_caption, log_ticks, nice_ticks};
use plot_core::scale::ValueScale;

#[test]
fn nice_ticks_use_round_steps() {
    let ticks = nice_ticks(0.0, 100_000.0, 8);
    assert!(ticks.len() >= 4, "expected several ticks, got {ticks:?}");
    assert_eq!(ticks[0], 0.0);
    let step = ticks[1] - ticks[0];
    for pair in ticks.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-6, "uneven steps: {ticks:?}");
    }
    // 1-2-5 ladder
    let mantissa = step / 10f64.powf(step.log10().floor());
    assert!(
        (mantissa - 1.0).abs() < 1e-9 || (mantissa - 2.0).abs() < 1e-9 || (mantissa - 5.0).abs() < 1e-9,
        "step {step} is not on the 1-2-5 ladder"
    );
}

#[test]
fn log_ticks_are_decades_within_range() {
    let ticks = log_ticks(91.0, 2_999_412.0);
    assert_eq!(ticks, vec![100.0, 1_000.0, 10_000.0, 100_000.0, 1_000_000.0]);
}

#[test]
fn captions_group_thousands() {
    assert_eq!(format_caption(0.0), "0");
    assert_eq!(format_caption(100.0), "100");
    assert_eq!(format_caption(100_000.0), "100,000");
    assert_eq!(format_caption(3_000_000.0), "3,000,000");
    assert_eq!(format_caption(2.5), "2.5");
    assert_eq!(format_caption(0.05), "0.05");
}

#[test]
fn log_scale_maps_decades_evenly() {
    let scale = ValueScale::new_log10(0.0, 300.0, 10.0, 10_000.0);
    let p10 = scale.to_px(10.0);
    let p100 = scale.to_px(100.0);
    let p1000 = scale.to_px(1_000.0);
    let p10000 = scale.to_px(10_000.0);

    assert!((p10 - 0.0).abs() < 0.5);
    assert!((p10000 - 300.0).abs() < 0.5);
    // decades are equidistant on a log axis
    assert!(((p100 - p10) - (p1000 - p100)).abs() < 0.5);
}
