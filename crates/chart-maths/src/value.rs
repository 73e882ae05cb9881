// File: crates/chart-maths/src/value.rs
// Summary: Loosely typed input cells and the float-or-integer check used to filter them.

/// A raw value as handed over by a data source, before it is known to be plottable.
#[derive(Clone, Debug, PartialEq)]
pub enum DataValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl DataValue {
    /// Classify a text cell: empty -> `Missing`, `true`/`false` -> `Bool`,
    /// anything `f64` parses (including `inf`/`NaN`) -> `Number`, else `Text`.
    pub fn parse(cell: &str) -> Self {
        let s = cell.trim();
        if s.is_empty() {
            return DataValue::Missing;
        }
        if s.eq_ignore_ascii_case("true") { return DataValue::Bool(true); }
        if s.eq_ignore_ascii_case("false") { return DataValue::Bool(false); }
        match s.parse::<f64>() {
            Ok(n) => DataValue::Number(n),
            Err(_) => DataValue::Text(s.to_string()),
        }
    }

    /// The numeric payload when this value is plottable.
    pub fn as_plottable(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) if verify_if_float_or_integer(self) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self { DataValue::Number(v) }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self { DataValue::Number(v as f64) }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self { DataValue::Bool(v) }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self { DataValue::Text(v.to_string()) }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DataValue::Missing, Into::into)
    }
}

/// True for any finite number, integer or not. Booleans, text, missing values,
/// infinities and NaN are rejected.
pub fn verify_if_float_or_integer(value: &DataValue) -> bool {
    match value {
        DataValue::Number(n) => n.is_finite(),
        DataValue::Bool(_) | DataValue::Text(_) | DataValue::Missing => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_cells() {
        assert_eq!(DataValue::parse(""), DataValue::Missing);
        assert_eq!(DataValue::parse(" TRUE "), DataValue::Bool(true));
        assert_eq!(DataValue::parse("-2.5"), DataValue::Number(-2.5));
        assert_eq!(DataValue::parse("n/a"), DataValue::Text("n/a".into()));
        assert_eq!(DataValue::parse("inf"), DataValue::Number(f64::INFINITY));
    }

    #[test]
    fn option_maps_none_to_missing() {
        assert_eq!(DataValue::from(None::<f64>), DataValue::Missing);
        assert_eq!(DataValue::from(Some(3_i64)), DataValue::Number(3.0));
    }
}
