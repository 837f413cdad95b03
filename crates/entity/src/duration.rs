//! ISO 8601 durations.
//!
//! Durations travel as strings (`P90D`, `PT5M`). A few fields also accept a
//! bare number in a field-specific unit; the deserializers here normalize such
//! numbers into the string form on the way in.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use units::Time;

use crate::range::{RangeValue, Rangeable};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsoDuration(String);

impl IsoDuration {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_minutes(minutes: f64) -> Self {
        Time::from_minutes(minutes).into()
    }

    pub fn from_days(days: f64) -> Self {
        Time::from_days(days).into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Time> for IsoDuration {
    fn from(time: Time) -> Self {
        Self(time.to_iso8601())
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Range samples of an interval are minutes.
impl RangeValue for IsoDuration {
    fn from_f64(value: f64) -> Self {
        IsoDuration::from_minutes(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    fn into_duration(self, unit: fn(f64) -> Time) -> IsoDuration {
        match self {
            Scalar::Number(value) => unit(value).into(),
            Scalar::Text(text) => IsoDuration(text),
        }
    }
}

/// Duration field where a bare number means days.
pub fn days<'de, D>(deserializer: D) -> Result<Option<IsoDuration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| s.into_duration(Time::from_days)))
}

/// Duration field where a bare number means minutes.
pub fn minutes<'de, D>(deserializer: D) -> Result<Option<IsoDuration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| s.into_duration(Time::from_minutes)))
}

/// Rangeable interval field; numeric entries mean minutes.
pub fn interval<'de, D>(deserializer: D) -> Result<Option<Rangeable<IsoDuration>>, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = |s: Scalar| s.into_duration(Time::from_minutes);
    Ok(
        Option::<Rangeable<Scalar>>::deserialize(deserializer)?.map(|raw| match raw {
            Rangeable::Single(value) => Rangeable::Single(minutes(value)),
            Rangeable::List(values) => Rangeable::List(values.into_iter().map(minutes).collect()),
            Rangeable::Range(range) => Rangeable::Range(range),
        }),
    )
}
