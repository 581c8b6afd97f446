// File: crates/plot-core/src/series.rs
// Summary: Series model for line and clustered-bar data.

use skia_safe as skia;

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    /// Bars rising from baseline 0.0, `bar_width` wide in x units.
    Bars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Legend entry when set; anonymous series never appear in the legend.
    pub name: Option<String>,
    /// Explicit color; falls back to the theme palette by series index.
    pub color: Option<skia::Color>,
    pub line_style: LineStyle,
    pub markers: bool,
    /// Bar width in x units (Bars only).
    pub bar_width: f64,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            name: None,
            color: None,
            line_style: LineStyle::Solid,
            markers: false,
            bar_width: 0.8,
        }
    }

    /// Pair an x column with a y column, rejecting mismatched lengths.
    /// This is the defensive gate between tabular data and the renderer.
    pub fn from_columns(
        series_type: SeriesType,
        name: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Self, RenderError> {
        let name = name.into();
        if xs.len() != ys.len() {
            return Err(RenderError::SeriesLength {
                series: name,
                expected: xs.len(),
                actual: ys.len(),
            });
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::with_data(series_type, data).named(name))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width.max(0.0);
        self
    }
}
