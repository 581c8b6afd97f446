// File: crates/plot-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind, and optional fixed ticks.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Explicit tick positions with captions. When set, generated ticks
    /// are suppressed (used for categorical axes such as size groups).
    pub ticks: Option<Vec<(f64, String)>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: None }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label, min, max);
        a.kind = ScaleKind::Log10;
        a
    }

    pub fn default_x() -> Self {
        Self::new("x", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("y", 0.0, 1.0)
    }
}
