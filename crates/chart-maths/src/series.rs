// File: crates/chart-maths/src/series.rs
// Summary: Series model for line and area charts.
// Notes:
// - Gaps are stored as NaN so every point keeps its category position.

use crate::value::DataValue;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self { label: label.into(), data }
    }

    /// Build a series from raw values, turning anything that is not a finite
    /// number into a gap.
    pub fn from_values<I, V>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        let data = values
            .into_iter()
            .map(|v| v.into().as_plottable().unwrap_or(f64::NAN))
            .collect();
        Self { label: label.into(), data }
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Plottable points, skipping gaps and non-finite entries.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied().filter(|v| v.is_finite())
    }

    /// Per-point value, `None` for gaps.
    pub fn point(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().filter(|v| v.is_finite())
    }
}
