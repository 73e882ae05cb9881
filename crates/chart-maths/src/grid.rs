// File: crates/chart-maths/src/grid.rs
// Summary: Gridline step and tick value helpers for the value axis.

use tracing::{debug, trace};

use crate::types::MinMaxValues;

/// Ticks are rounded to this many decimal places to hide accumulated float error.
const DECIMAL_SCALE: f64 = 1e10;
/// Past this magnitude scaling by `DECIMAL_SCALE` would lose precision instead of removing it.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
/// Upper bound on gridlines; larger requests are clamped.
pub const MAX_GRID_LINES: usize = 1000;

/// Tick values from `min_value` to `max_value` inclusive, one per gridline.
///
/// The step is the domain split into `grid_lines - 1` intervals. A flat domain
/// steps by 1 and yields the single tick `[min_value]`. Non-finite bounds or an
/// inverted domain yield no ticks. `grid_lines` is clamped to [`MAX_GRID_LINES`].
pub fn range(min_max: &MinMaxValues, grid_lines: usize) -> Vec<f64> {
    let MinMaxValues { min_value, max_value } = *min_max;
    if grid_lines > MAX_GRID_LINES {
        debug!(grid_lines, max = MAX_GRID_LINES, "grid lines clamped");
    }
    let grid_lines = grid_lines.min(MAX_GRID_LINES);
    if !min_value.is_finite() || !max_value.is_finite() || max_value < min_value {
        debug!(min_value, max_value, "no ticks for degenerate domain");
        return Vec::new();
    }
    let step = get_grid_line_area(min_max, grid_lines);
    if !step.is_finite() {
        debug!(min_value, max_value, "domain too wide to step, keeping the ends");
        return vec![min_value, max_value];
    }

    // Index-based so drift cannot add or drop a tick. Only the offset from
    // min_value is rounded, so ticks keep min_value's precision.
    let intervals = grid_lines.saturating_sub(1).max(1) as u64;
    let count = (((max_value - min_value) / step + 1e-9).floor() as u64).min(intervals);
    let tolerance = step * 1e-6;
    (0..=count)
        .map(|i| {
            if i == 0 {
                return min_value;
            }
            let tick = min_value + tidy(step * i as f64, step);
            if i == count && (tick - max_value).abs() <= tolerance { max_value } else { tick }
        })
        .collect()
}

/// Distance between two gridlines. Never 0, so stepping always advances.
pub(crate) fn get_grid_line_area(min_max: &MinMaxValues, grid_lines: usize) -> f64 {
    let intervals = grid_lines.saturating_sub(1).max(1) as f64;
    let result = min_max.span() / intervals;
    if result == 0.0 {
        trace!(grid_lines, "flat domain, grid step falls back to 1");
        1.0
    } else {
        result
    }
}

// Rounding only applies when the step is far coarser than the rounding unit.
fn tidy(value: f64, step: f64) -> f64 {
    if step * DECIMAL_SCALE >= 1e3 { round_decimals(value) } else { value }
}

fn round_decimals(value: f64) -> f64 {
    let scaled = value * DECIMAL_SCALE;
    if scaled.abs() >= MAX_EXACT { value } else { scaled.round() / DECIMAL_SCALE }
}
