/// Equatorial radius of the Earth (km)
pub const R_EARTH: f64 = 6378.14;

/// Gravitational parameter of the Earth (km³/s²)
pub const MU_EARTH: f64 = 3.986004418e5;

/// Coefficient of the sun-synchronous inclination relation (dimensionless)
pub const SSO_COEFFICIENT: f64 = 10.10949;
