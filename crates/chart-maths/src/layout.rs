// File: crates/chart-maths/src/layout.rs
// Summary: Options and the per-render bundle of values a line/area chart lays itself out with.

use tracing::debug;

use crate::grid::range;
use crate::maths::{calculate_min_and_max_values, calculate_side_spacing, get_serie_percentage, series_greater_length};
use crate::series::Series;
use crate::types::{ContainerSize, MinMaxValues, DEFAULT_GRID_LINES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Number of horizontal gridlines, ends included.
    pub grid_lines: usize,
    /// When false the domain never starts below 0 (area charts fill down to the axis).
    pub accept_negative_values: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { grid_lines: DEFAULT_GRID_LINES, accept_negative_values: true }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartLayout {
    pub min_max: MinMaxValues,
    /// Value-axis label for each gridline, bottom to top.
    pub axis_labels: Vec<f64>,
    /// Number of categories, i.e. the longest series.
    pub series_length: usize,
    pub side_spacing: f64,
    /// Per series and per point position within the domain; gaps stay `None`.
    pub percentages: Vec<Vec<Option<f64>>>,
}

impl LineChartLayout {
    pub fn compute(series: &[Series], container: &ContainerSize, opts: &LayoutOptions) -> Self {
        let min_max = calculate_min_and_max_values(series, opts.accept_negative_values);
        let axis_labels = range(&min_max, opts.grid_lines);
        let series_length = series_greater_length(series);
        let side_spacing = calculate_side_spacing(container.svg_width, series_length);
        let percentages = series
            .iter()
            .map(|s| {
                s.data
                    .iter()
                    .map(|v| v.is_finite().then(|| get_serie_percentage(&min_max, *v)))
                    .collect()
            })
            .collect();
        debug!(
            series = series.len(),
            series_length,
            side_spacing,
            min = min_max.min_value,
            max = min_max.max_value,
            "computed line chart layout"
        );
        Self { min_max, axis_labels, series_length, side_spacing, percentages }
    }

    /// Horizontal distance between two consecutive categories inside the plotting area.
    pub fn category_width(&self, container: &ContainerSize) -> f64 {
        let usable = container.plotting_area_width() - self.side_spacing * 2.0;
        match self.series_length {
            0 => 0.0,
            1 => usable.max(0.0),
            n => (usable / (n - 1) as f64).max(0.0),
        }
    }
}
