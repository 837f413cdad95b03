use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const KM_TO_M: f64 = 1_000.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with kilometers as the base unit,
/// which is the natural choice for orbital altitudes and semi-major axes.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let altitude = Length::from_km(705.0);
/// let elevation = Length::from_meters(1570.0);
///
/// assert_eq!(altitude.to_m(), 705_000.0);
/// assert_eq!(elevation.to_km(), 1.57);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: km

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / KM_TO_M)
    }

    /// Returns the length in kilometers.
    pub fn to_km(&self) -> f64 {
        self.0
    }

    /// Converts the length to meters.
    pub fn to_m(&self) -> f64 {
        self.0 * KM_TO_M
    }

    /// Raw power of the kilometer value, e.g. `a³` for Kepler's third law
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
