// File: crates/plot-core/src/scale.rs
// Summary: Linear and log10 value-to-pixel transforms shared by both axes.

use crate::axis::{Axis, ScaleKind};

/// Maps a data range onto a pixel span. `start_px` is where `vmin` lands,
/// `end_px` where `vmax` lands; for the Y axis the pair is (bottom, top)
/// since pixel coordinates grow downward.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    start_px: f32,
    end_px: f32,
    vmin: f64,
    vmax: f64,
    log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure a strictly positive range for the log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, axis.min, axis.max),
        }
    }

    fn frac(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.frac(v) as f32 * (self.end_px - self.start_px)
    }
}
