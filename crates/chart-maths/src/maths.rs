// File: crates/chart-maths/src/maths.rs
// Summary: Domain, side spacing and value-to-percentage helpers for line/area charts.

use tracing::{debug, trace};

use crate::series::Series;
use crate::types::{MinMaxValues, AXIS_X_LABEL_AREA, PADDING};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Extremum {
    Min,
    Max,
}

/// Global minimum and maximum across every series.
///
/// With `accept_negative_values == false` a negative minimum is clamped to 0.
/// Series without plottable points contribute nothing; when no series has any,
/// both ends fall back to 0.
pub fn calculate_min_and_max_values(series: &[Series], accept_negative_values: bool) -> MinMaxValues {
    let min_value = get_domain(series, Extremum::Min);
    let max_value = get_domain(series, Extremum::Max);
    if !accept_negative_values && min_value < 0.0 {
        debug!(min_value, "negative minimum clamped to 0");
        return MinMaxValues::new(0.0, max_value);
    }
    MinMaxValues::new(min_value, max_value)
}

/// Half the width of one category, truncated and capped at [`PADDING`].
///
/// This is the room left between the axis labels and the first plotted point.
/// A container narrower than the label area yields a negative spacing. Any
/// non-finite result (zero `series_length`) falls back to [`PADDING`].
pub fn calculate_side_spacing(container_width: f64, series_length: usize) -> f64 {
    let half_category_width = ((container_width - AXIS_X_LABEL_AREA) / series_length as f64 / 2.0).trunc();
    if half_category_width.is_finite() && half_category_width <= PADDING { half_category_width } else { PADDING }
}

/// Length of the longest series, 0 when there are none.
pub fn series_greater_length(series: &[Series]) -> usize {
    series.iter().map(Series::len).max().unwrap_or(0)
}

/// Position of `value` inside the domain as a fraction, e.g. -8 in `[-10, 0]` is 0.2.
///
/// Degenerate domains map everything to 0.
pub fn get_serie_percentage(min_max: &MinMaxValues, value: f64) -> f64 {
    let range = min_max.span();
    let displacement = value - min_max.min_value;
    let result = displacement / range;
    if result.is_finite() { result } else { 0.0 }
}

pub(crate) fn get_domain(series: &[Series], kind: Extremum) -> f64 {
    let fold: fn(f64, f64) -> f64 = match kind {
        Extremum::Min => f64::min,
        Extremum::Max => f64::max,
    };
    let result = series.iter().flat_map(Series::values).reduce(fold);
    match result {
        Some(v) => v,
        None => {
            trace!(?kind, series = series.len(), "no plottable points, domain defaults to 0");
            0.0
        }
    }
}
