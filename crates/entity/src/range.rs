//! Enumerable value domains
//!
//! A design-space field may hold one value, an explicit list of values, or a
//! [`QuantitativeRange`]. All three iterate through [`Rangeable::values`], so a
//! generator never needs to know which form was written in the document.

use serde::{Deserialize, Serialize};
use units::{Angle, Length};

use crate::document::{Entity, EntityType, TypeTag};

/// A fixed two-point domain, such as the bounds of a target region.
///
/// Iterates as `[min_value, max_value]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<QuantitativeValue>,
    pub min_value: f64,
    pub max_value: f64,
}

impl QuantitativeValue {
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            type_tag: TypeTag::new(),
            min_value,
            max_value,
        }
    }

    pub fn iter(&self) -> std::array::IntoIter<f64, 2> {
        [self.min_value, self.max_value].into_iter()
    }
}

impl EntityType for QuantitativeValue {
    const TYPE: &'static str = "QuantitativeValue";
}

impl Entity for QuantitativeValue {
    fn id(&self) -> Option<&str> {
        None
    }
}

/// An enumerable numeric domain.
///
/// `number_steps` takes precedence over `step_size`. With neither set (or
/// either set to zero) the range degenerates to its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeRange {
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<QuantitativeRange>,
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_steps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
}

impl QuantitativeRange {
    /// Endpoints-only range.
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            type_tag: TypeTag::new(),
            min_value,
            max_value,
            number_steps: None,
            step_size: None,
        }
    }

    pub fn with_number_steps(self, number_steps: u32) -> Self {
        Self {
            number_steps: Some(number_steps),
            ..self
        }
    }

    pub fn with_step_size(self, step_size: f64) -> Self {
        Self {
            step_size: Some(step_size),
            ..self
        }
    }

    /// Enumerates the range.
    ///
    /// ```
    /// use entity::QuantitativeRange;
    ///
    /// let altitudes: Vec<f64> = QuantitativeRange::new(400.0, 700.0)
    ///     .with_step_size(125.0)
    ///     .values()
    ///     .collect();
    /// assert_eq!(altitudes, vec![400.0, 525.0, 650.0]);
    /// ```
    pub fn values(&self) -> RangeValues {
        let (min, max) = (self.min_value, self.max_value);

        if let Some(steps) = self.number_steps.filter(|&k| k > 0) {
            return RangeValues::linspace(min, max, steps as usize);
        }

        if let Some(step) = self.step_size.filter(|&s| s != 0.0) {
            let count = 1.0 + ((max - min) / step).floor();
            let count = if count.is_finite() && count > 0.0 {
                count as usize
            } else {
                0
            };
            let end = min + count.saturating_sub(1) as f64 * step;
            return RangeValues::linspace(min, end, count);
        }

        RangeValues::linspace(min, max, 2)
    }
}

impl EntityType for QuantitativeRange {
    const TYPE: &'static str = "QuantitativeRange";
}

impl Entity for QuantitativeRange {
    fn id(&self) -> Option<&str> {
        None
    }
}

/// Evenly spaced values from `start` to `end`, both inclusive.
///
/// The final value is `end` exactly, not an accumulated approximation of it.
#[derive(Debug, Clone)]
pub struct RangeValues {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl RangeValues {
    fn linspace(start: f64, end: f64, count: usize) -> Self {
        let step = if count > 1 {
            (end - start) / (count - 1) as f64
        } else {
            0.0
        };
        Self {
            start,
            end,
            step,
            index: 0,
            count,
        }
    }
}

impl Iterator for RangeValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let value = if self.count > 1 && self.index == self.count - 1 {
            self.end
        } else {
            self.start + self.step * self.index as f64
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeValues {}

/// Conversion from a range sample into a field's value type.
pub trait RangeValue: Clone {
    fn from_f64(value: f64) -> Self;
}

impl RangeValue for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Integer fields round to the nearest count; negative samples clamp to zero.
impl RangeValue for u32 {
    fn from_f64(value: f64) -> Self {
        value.round().max(0.0) as u32
    }
}

impl RangeValue for Length {
    fn from_f64(value: f64) -> Self {
        Length::from_km(value)
    }
}

impl RangeValue for Angle {
    fn from_f64(value: f64) -> Self {
        Angle::from_degrees(value)
    }
}

/// A field accepting a scalar, a list of scalars, or a [`QuantitativeRange`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rangeable<T> {
    Single(T),
    List(Vec<T>),
    Range(QuantitativeRange),
}

impl<T: RangeValue> Rangeable<T> {
    pub fn values(&self) -> Values<'_, T> {
        match self {
            Rangeable::Single(value) => Values::Items(std::slice::from_ref(value).iter()),
            Rangeable::List(values) => Values::Items(values.iter()),
            Rangeable::Range(range) => Values::Range(range.values()),
        }
    }

    /// The value when the domain holds exactly one element.
    pub fn as_single(&self) -> Option<T> {
        let mut values = self.values();
        match (values.next(), values.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Rangeable<T> {
    fn from(value: T) -> Self {
        Rangeable::Single(value)
    }
}

/// Iterator over a [`Rangeable`] domain.
#[derive(Debug, Clone)]
pub enum Values<'a, T> {
    Items(std::slice::Iter<'a, T>),
    Range(RangeValues),
}

impl<T: RangeValue> Iterator for Values<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Values::Items(items) => items.next().cloned(),
            Values::Range(range) => range.next().map(T::from_f64),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Values::Items(items) => items.size_hint(),
            Values::Range(range) => range.size_hint(),
        }
    }
}

impl<T: RangeValue> ExactSizeIterator for Values<'_, T> {}

/// Materializes one product axis. An unset field contributes a single `None`.
pub fn axis<T: RangeValue>(field: &Option<Rangeable<T>>) -> Vec<Option<T>> {
    match field {
        Some(domain) => domain.values().map(Some).collect(),
        None => vec![None],
    }
}

/// A coordinate given as a number or as a two-point bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Value(f64),
    Bounds(QuantitativeValue),
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Value(value)
    }
}

impl From<QuantitativeValue> for Quantity {
    fn from(bounds: QuantitativeValue) -> Self {
        Quantity::Bounds(bounds)
    }
}
