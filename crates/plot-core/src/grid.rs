// File: crates/plot-core/src/grid.rs
// Summary: Tick layout and caption formatting helpers.

/// "Nice" tick positions for a linear range using a 1-2-5 step ladder.
/// Returns positions inside [min, max]; `target` is the desired tick count.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || !min.is_finite() || !max.is_finite() {
        return vec![min];
    }
    let raw = (max - min) / target.max(2) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let base = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = base * mag;

    let mut out = Vec::new();
    let mut v = (min / step).ceil() * step;
    while v <= max + step * 1e-9 {
        // avoid "-0"
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        v += step;
    }
    out
}

/// Decade tick positions for a log10 range, clipped to [min, max].
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    let lo = min.max(1e-12).log10().floor() as i32;
    let hi = max.max(1e-12).log10().ceil() as i32;
    (lo..=hi)
        .map(|e| 10f64.powi(e))
        .filter(|&v| v >= min * 0.999 && v <= max * 1.001)
        .collect()
}

/// Format a tick caption. Whole values get thousands separators
/// ("100,000"); fractional values keep two decimals with trailing
/// zeros trimmed.
pub fn format_caption(v: f64) -> String {
    if v.fract().abs() < 1e-9 && v.abs() < 9e15 {
        return group_thousands(v.round() as i64);
    }
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
