use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A plane angle using f64 precision.
///
/// Degrees are the base unit since every angle in a tradespace document
/// (inclination, RAAN, anomalies, fields of view) is exchanged in decimal degrees.
///
/// # Examples
///
/// ```rust
/// use units::Angle;
///
/// let raan = Angle::from_degrees(180.0);
/// assert!((raan.to_radians() - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(Angle::from_degrees(-90.0).normalized().to_degrees(), 270.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: degrees

impl Angle {
    /// Creates a zero angle
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Angle` from a value in decimal degrees.
    pub fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Angle` from a value in radians.
    pub fn from_radians(value: f64) -> Self {
        Self(value.to_degrees())
    }

    /// Returns the angle in decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.0
    }

    /// Converts the angle to radians.
    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// Wraps the angle into [0, 360).
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(360.0))
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}
