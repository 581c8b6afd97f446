// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

/// Number of distinct colors in the categorical series palette.
pub const PALETTE_LEN: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_fill: skia::Color,
    /// Categorical colors assigned to series without an explicit color.
    pub palette: [skia::Color; PALETTE_LEN],
    /// Stroke for dashed theoretical reference curves.
    pub reference: skia::Color,
}

impl Theme {
    /// Default theme; light background suits print output.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 224, 224, 230),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 90, 90, 100),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_frame: skia::Color::from_argb(255, 180, 180, 190),
            legend_fill: skia::Color::from_argb(235, 255, 255, 255),
            palette: [
                skia::Color::from_argb(255, 31, 119, 180),  // blue
                skia::Color::from_argb(255, 44, 160, 44),   // green
                skia::Color::from_argb(255, 148, 103, 189), // purple
                skia::Color::from_argb(255, 23, 190, 207),  // cyan
                skia::Color::from_argb(255, 188, 156, 34),  // olive
                skia::Color::from_argb(255, 255, 127, 14),  // orange
            ],
            reference: skia::Color::from_argb(255, 214, 39, 40), // red
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_frame: skia::Color::from_argb(255, 90, 90, 100),
            legend_fill: skia::Color::from_argb(235, 28, 28, 32),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 80, 220, 130),
                skia::Color::from_argb(255, 186, 140, 255),
                skia::Color::from_argb(255, 70, 210, 230),
                skia::Color::from_argb(255, 230, 200, 80),
                skia::Color::from_argb(255, 255, 160, 60),
            ],
            reference: skia::Color::from_argb(255, 240, 90, 90),
        }
    }
}
