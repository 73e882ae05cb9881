// File: crates/chart-maths/tests/domain.rs
// Purpose: Validate domain, spacing, length and percentage helpers.

use chart_maths::{
    calculate_min_and_max_values, calculate_side_spacing, get_serie_percentage, series_greater_length,
    MinMaxValues, Series, PADDING,
};

fn sample() -> Vec<Series> {
    vec![
        Series::with_data("north", vec![4.0, -6.0, 12.0]),
        Series::with_data("south", vec![2.0, 30.0]),
    ]
}

#[test]
fn min_and_max_across_series() {
    let mm = calculate_min_and_max_values(&sample(), true);
    assert_eq!(mm, MinMaxValues::new(-6.0, 30.0));
}

#[test]
fn negative_minimum_clamped_when_rejected() {
    let mm = calculate_min_and_max_values(&sample(), false);
    assert_eq!(mm.min_value, 0.0);
    assert_eq!(mm.max_value, 30.0);
}

#[test]
fn positive_minimum_untouched_when_negatives_rejected() {
    let series = vec![Series::with_data("a", vec![5.0, 9.0])];
    assert_eq!(calculate_min_and_max_values(&series, false), MinMaxValues::new(5.0, 9.0));
}

#[test]
fn empty_input_defaults_to_zero() {
    assert_eq!(calculate_min_and_max_values(&[], true), MinMaxValues::new(0.0, 0.0));
    let gaps = vec![Series::new("none"), Series::with_data("gaps", vec![f64::NAN, f64::NAN])];
    assert_eq!(calculate_min_and_max_values(&gaps, true), MinMaxValues::new(0.0, 0.0));
}

#[test]
fn side_spacing_is_capped() {
    // (300 - 56) / 2 / 2 = 61
    assert_eq!(calculate_side_spacing(300.0, 2), PADDING);
    assert!(calculate_side_spacing(300.0, 2) <= PADDING);
}

#[test]
fn side_spacing_truncates_narrow_categories() {
    // (200 - 56) / 10 / 2 = 7.2
    assert_eq!(calculate_side_spacing(200.0, 10), 7.0);
}

#[test]
fn side_spacing_without_categories_is_padding() {
    assert_eq!(calculate_side_spacing(300.0, 0), PADDING);
    assert_eq!(calculate_side_spacing(56.0, 0), PADDING);
    // narrower than the label area divides to -inf
    assert_eq!(calculate_side_spacing(40.0, 0), PADDING);
}

#[test]
fn side_spacing_negative_for_narrow_container() {
    // (40 - 56) / 2 / 2 = -4
    assert_eq!(calculate_side_spacing(40.0, 2), -4.0);
}

#[test]
fn greater_length_picks_longest() {
    let series = vec![Series::with_data("a", vec![1.0, 2.0]), Series::with_data("b", vec![1.0, 2.0, 3.0])];
    assert_eq!(series_greater_length(&series), 3);
    assert_eq!(series_greater_length(&[]), 0);
}

#[test]
fn percentage_from_negative_minimum() {
    let p = get_serie_percentage(&MinMaxValues::new(-10.0, 0.0), -8.0);
    assert!((p - 0.2).abs() < 1e-12, "got {p}");
}

#[test]
fn percentage_of_flat_domain_is_zero() {
    assert_eq!(get_serie_percentage(&MinMaxValues::new(0.0, 0.0), 5.0), 0.0);
    assert_eq!(get_serie_percentage(&MinMaxValues::new(3.0, 3.0), 3.0), 0.0);
}

#[test]
fn percentage_ends_of_domain() {
    let mm = MinMaxValues::new(10.0, 20.0);
    assert_eq!(get_serie_percentage(&mm, 10.0), 0.0);
    assert_eq!(get_serie_percentage(&mm, 20.0), 1.0);
    assert_eq!(get_serie_percentage(&mm, 15.0), 0.5);
}
