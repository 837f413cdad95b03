mod tests {
    use approx::assert_relative_eq;

    use crate::length::{KM_TO_M, Length};

    #[test]
    fn test_length_conversions() {
        let length_km = Length::from_km(1.0);
        assert_relative_eq!(length_km.to_m(), KM_TO_M);

        let length_m = Length::from_meters(KM_TO_M);
        assert_relative_eq!(length_m.to_km(), 1.0);

        // Test round trip
        let original = 705.3;
        let round_trip = Length::from_meters(Length::from_km(original).to_m()).to_km();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let earth_radius = Length::from_km(6378.14);
        let altitude = Length::from_km(705.0);

        assert_relative_eq!((earth_radius + altitude).to_km(), 7083.14);
        assert_relative_eq!((earth_radius - altitude).to_km(), 5673.14);
        assert_relative_eq!((altitude * 2.0).to_km(), 1410.0);
        assert_relative_eq!((2.0 * altitude).to_km(), 1410.0);
        assert_relative_eq!((altitude / 2.0).to_km(), 352.5);

        // Ratio of two lengths is dimensionless
        assert_relative_eq!((earth_radius + altitude) / earth_radius, 7083.14 / 6378.14);
    }

    #[test]
    fn test_length_serializes_as_bare_number() {
        let json = serde_json::to_string(&Length::from_km(705.0)).unwrap();
        assert_eq!(json, "705.0");

        let parsed: Length = serde_json::from_str("550").unwrap();
        assert_relative_eq!(parsed.to_km(), 550.0);
    }
}
