use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with seconds as the base unit,
/// matching orbital periods and mission scheduling intervals.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let interval = Time::from_minutes(90.0);
/// assert_eq!(interval.to_seconds(), 5400.0);
/// assert_eq!(interval.to_iso8601(), "PT1H30M");
///
/// let duration = Time::from_days(90.0);
/// assert_eq!(duration.to_iso8601(), "P90D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in minutes.
    pub fn from_minutes(value: f64) -> Self {
        Self(value * SECONDS_PER_MINUTE)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value * SECONDS_PER_HOUR)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to minutes.
    pub fn to_minutes(&self) -> f64 {
        self.0 / SECONDS_PER_MINUTE
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Formats the time as an ISO 8601 duration (`PnDTnHnMnS`).
    ///
    /// Zero components are omitted; a zero duration is written `P0D`.
    /// Negative durations carry a leading minus sign.
    pub fn to_iso8601(&self) -> String {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        let total = self.0.abs();

        let days = (total / SECONDS_PER_DAY).floor();
        let mut rest = total - days * SECONDS_PER_DAY;
        let hours = (rest / SECONDS_PER_HOUR).floor();
        rest -= hours * SECONDS_PER_HOUR;
        let minutes = (rest / SECONDS_PER_MINUTE).floor();
        let seconds = rest - minutes * SECONDS_PER_MINUTE;

        let mut out = format!("{}P", sign);
        if days > 0.0 {
            out.push_str(&format!("{}D", days));
        }
        if hours > 0.0 || minutes > 0.0 || seconds > 0.0 {
            out.push('T');
            if hours > 0.0 {
                out.push_str(&format!("{}H", hours));
            }
            if minutes > 0.0 {
                out.push_str(&format!("{}M", minutes));
            }
            if seconds > 0.0 {
                out.push_str(&format!("{}S", seconds));
            }
        }
        if out.ends_with('P') {
            out.push_str("0D");
        }
        out
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
