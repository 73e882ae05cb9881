// File: crates/chart-maths/src/types.rs
// Summary: Shared types and constants (paddings, label area, domain and container sizes).

/// Horizontal area reserved for the value-axis labels, in pixels.
pub const AXIS_X_LABEL_AREA: f64 = 56.0;
/// Chart padding, in pixels. Also the largest side spacing allowed.
pub const PADDING: f64 = 24.0;
/// Default number of horizontal gridlines.
pub const DEFAULT_GRID_LINES: usize = 5;

/// Numeric domain spanned by one or more series.
/// Contract: `min_value <= max_value` whenever it was computed from numeric data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinMaxValues {
    pub min_value: f64,
    pub max_value: f64,
}

impl MinMaxValues {
    pub const fn new(min_value: f64, max_value: f64) -> Self {
        Self { min_value, max_value }
    }
    /// Distance between the extremes.
    pub fn span(&self) -> f64 { self.max_value - self.min_value }
}

/// Drawing surface dimensions, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSize {
    pub svg_width: f64,
    pub svg_height: f64,
}

impl ContainerSize {
    pub const fn new(svg_width: f64, svg_height: f64) -> Self {
        Self { svg_width, svg_height }
    }
    /// Width left for plotting once the label area and both side paddings are removed.
    pub fn plotting_area_width(&self) -> f64 {
        (self.svg_width - AXIS_X_LABEL_AREA - PADDING * 2.0).max(0.0)
    }
    /// Height left for plotting once top and bottom paddings are removed.
    pub fn plotting_area_height(&self) -> f64 {
        (self.svg_height - PADDING * 2.0).max(0.0)
    }
}
