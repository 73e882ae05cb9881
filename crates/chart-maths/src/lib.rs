// File: crates/chart-maths/src/lib.rs
// Summary: Library entry point; exports the layout maths used by line and area charts.

pub mod types;
pub mod value;
pub mod series;
pub mod maths;
pub mod grid;
pub mod layout;

pub use types::{ContainerSize, MinMaxValues, AXIS_X_LABEL_AREA, DEFAULT_GRID_LINES, PADDING};
pub use value::{verify_if_float_or_integer, DataValue};
pub use series::Series;
pub use maths::{calculate_min_and_max_values, calculate_side_spacing, get_serie_percentage, series_greater_length};
pub use grid::{range, MAX_GRID_LINES};
pub use layout::{LayoutOptions, LineChartLayout};
