use approx::assert_relative_eq;
use serde_json::json;
use units::Length;

use crate::range::{QuantitativeRange, QuantitativeValue, Quantity, Rangeable, axis};

#[test]
fn number_steps_yields_exactly_k_monotonic_values() {
    let range = QuantitativeRange::new(0.1, 0.7).with_number_steps(7);
    let values: Vec<f64> = range.values().collect();

    assert_eq!(values.len(), 7);
    assert_eq!(range.values().len(), 7);
    assert_eq!(values[0], 0.1);
    assert_eq!(values[6], 0.7);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert_relative_eq!(values[3], 0.4, epsilon = 1e-12);
}

#[test]
fn single_step_yields_min_value() {
    let values: Vec<f64> = QuantitativeRange::new(3.0, 9.0)
        .with_number_steps(1)
        .values()
        .collect();
    assert_eq!(values, vec![3.0]);
}

#[test]
fn number_steps_wins_over_step_size() {
    let range = QuantitativeRange::new(0.0, 10.0)
        .with_number_steps(3)
        .with_step_size(1.0);
    assert_eq!(range.values().collect::<Vec<_>>(), vec![0.0, 5.0, 10.0]);
}

#[test]
fn step_size_stops_at_largest_value_not_above_max() {
    let values: Vec<f64> = QuantitativeRange::new(1.0, 10.0)
        .with_step_size(4.0)
        .values()
        .collect();
    assert_eq!(values, vec![1.0, 5.0, 9.0]);
}

#[test]
fn zero_steps_count_as_unset() {
    let range = QuantitativeRange::new(1.0, 4.0)
        .with_number_steps(0)
        .with_step_size(0.0);
    assert_eq!(range.values().collect::<Vec<_>>(), vec![1.0, 4.0]);
}

#[test]
fn range_without_steps_yields_endpoints() {
    let values: Vec<f64> = QuantitativeRange::new(400.0, 800.0).values().collect();
    assert_eq!(values, vec![400.0, 800.0]);
}

#[test]
fn range_values_restart() {
    let range = QuantitativeRange::new(0.0, 1.0).with_number_steps(5);
    assert_eq!(range.values().count(), 5);
    assert_eq!(range.values().count(), 5);
}

#[test]
fn quantitative_value_iterates_both_bounds() {
    let bounds = QuantitativeValue::new(-90.0, 90.0);
    assert_eq!(bounds.iter().collect::<Vec<_>>(), vec![-90.0, 90.0]);
}

#[test]
fn rangeable_accepts_scalar_list_and_range() {
    let single: Rangeable<u32> = serde_json::from_value(json!(2)).unwrap();
    let list: Rangeable<u32> = serde_json::from_value(json!([1, 2])).unwrap();
    let range: Rangeable<u32> =
        serde_json::from_value(json!({"minValue": 1, "maxValue": 4, "stepSize": 1})).unwrap();

    assert_eq!(single.values().collect::<Vec<_>>(), vec![2]);
    assert_eq!(list.values().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(range.values().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn integer_fields_round_range_samples() {
    let domain: Rangeable<u32> =
        Rangeable::Range(QuantitativeRange::new(1.0, 2.0).with_number_steps(3));
    assert_eq!(domain.values().collect::<Vec<_>>(), vec![1, 2, 2]);
}

#[test]
fn length_fields_read_kilometers() {
    let domain: Rangeable<Length> = serde_json::from_value(json!([500, 705])).unwrap();
    let values: Vec<f64> = domain.values().map(|l| l.to_km()).collect();
    assert_eq!(values, vec![500.0, 705.0]);
}

#[test]
fn as_single_requires_exactly_one_value() {
    assert_eq!(Rangeable::Single(3u32).as_single(), Some(3));
    assert_eq!(Rangeable::List(vec![3u32]).as_single(), Some(3));
    assert_eq!(Rangeable::List(vec![3u32, 4]).as_single(), None);
}

#[test]
fn unset_axis_contributes_one_absent_value() {
    assert_eq!(axis::<u32>(&None), vec![None]);
    assert_eq!(
        axis(&Some(Rangeable::List(vec![1u32, 2]))),
        vec![Some(1), Some(2)]
    );
}

#[test]
fn quantity_accepts_number_or_bounds() {
    let point: Quantity = serde_json::from_value(json!(38.5)).unwrap();
    let bounds: Quantity =
        serde_json::from_value(json!({"minValue": -10, "maxValue": 10})).unwrap();

    assert_eq!(point, Quantity::Value(38.5));
    assert_eq!(bounds, Quantity::Bounds(QuantitativeValue::new(-10.0, 10.0)));
}

#[test]
fn ranges_encode_with_type_tag() {
    let doc = serde_json::to_value(QuantitativeRange::new(1.0, 2.0).with_number_steps(2)).unwrap();
    assert_eq!(
        doc,
        json!({"@type": "QuantitativeRange", "minValue": 1.0, "maxValue": 2.0, "numberSteps": 2})
    );
}
