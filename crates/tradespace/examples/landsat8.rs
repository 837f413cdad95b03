//! Landsat 8 tradespace example
//!
//! Builds the Sustainable Land Imaging search in code, prints every
//! architecture it expands to, and dumps the search document.
//!
//! Run with: cargo run --package tradespace --example landsat8

use entity::{
    Agency, AgencyType, CommunicationBand, Entity, IsoDuration, QuantitativeValue, Quantity,
    Rangeable,
};
use ground::{GroundNetwork, GroundStation, Region};
use space::{
    BasicInstrument, Constellation, ConstellationType, FieldOfView, InstrumentProperties,
    LaunchVehicle, Orbit, Satellite, orbital_period,
};
use tradespace::{DesignSpace, MissionConcept, TradespaceSearch};
use units::{Angle, Length};

fn main() -> entity::Result<()> {
    let altitude = Length::from_km(705.0);

    let mission = MissionConcept {
        name: Some("Sustainable Land Imaging - Landsat 8".to_string()),
        acronym: Some("SLI-Landsat8".to_string()),
        agency: Some(Agency::of_type(AgencyType::Government)),
        start: Some("2017-08-01T00:00:00Z".to_string()),
        duration: Some(IsoDuration::from_days(90.0)),
        target: Some(Region {
            latitude: Some(QuantitativeValue::new(35.0, 45.0).into()),
            longitude: Some(QuantitativeValue::new(-115.0, -100.0).into()),
            ..Default::default()
        }),
        objects: vec!["SUN".to_string()],
        ..Default::default()
    };

    let imager = BasicInstrument {
        properties: InstrumentProperties {
            name: Some("Operational Land Imager/Thermal Infrared Sensor".to_string()),
            acronym: Some("OLI/TIRS".to_string()),
            agency: Some(Agency::of_type(AgencyType::Government)),
            mass: Some(657.0),
            volume: Some(10.016),
            power: Some(319.0),
            operating_wavelength: vec![443.0, 482.0, 561.0, 655.0, 865.0, 1609.0, 2201.0],
            pixel_bit_depth: Some(12),
            field_of_view: Some(FieldOfView::Conical {
                full_cone_angle: Angle::from_degrees(7.5),
            }),
            number_pixels: Some(6250),
            solar_conditions: Some("SUNLIT".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let design_space = DesignSpace {
        constellations: vec![
            Constellation {
                constellation_type: Some(ConstellationType::DeltaHomogenous),
                number_satellites: Rangeable::List(vec![1, 2]),
                number_planes: Some(Rangeable::List(vec![1, 2])),
                orbit: Some(Orbit::sun_synchronous(altitude).into()),
                ..Default::default()
            }
            .with_defaults(),
        ],
        satellites: vec![Satellite {
            name: Some("Landsat 8".to_string()),
            mass: Some(2750.0),
            volume: Some(43.2),
            power: Some(1550.0),
            comm_band: vec![CommunicationBand::X],
            payload: vec![imager.into()],
            ..Default::default()
        }],
        launchers: vec![LaunchVehicle {
            name: Some("AtlasV".to_string()),
            mass_to_leo: Some(9800.0),
            mean_time_between_launches: Some(IsoDuration::new("P0Y0M133D")),
            ..Default::default()
        }],
        ground_networks: vec![GroundNetwork {
            number_stations: Some(Rangeable::Single(1)),
            ..Default::default()
        }],
        ground_stations: vec![GroundStation {
            latitude: Some(Quantity::Value(40.5974791834978)),
            longitude: Some(Quantity::Value(-104.83875274658203)),
            elevation: Some(1570.0),
            comm_band: vec![CommunicationBand::X],
            ..Default::default()
        }],
        ..Default::default()
    };

    let search = TradespaceSearch {
        mission,
        design_space,
        ..Default::default()
    };

    println!("Landsat 8 Tradespace");
    println!("{}", "=".repeat(60));
    println!(
        "Reference orbit: {:.0} km, period {:.2} min",
        altitude.to_km(),
        orbital_period(altitude).to_minutes()
    );

    for (index, architecture) in search.design_space.generate_architectures()?.enumerate() {
        let Some(constellation) = &architecture.constellation else {
            continue;
        };
        let members = constellation.satellites.as_deref().unwrap_or_default();
        println!("\nArchitecture {index:05}: {} satellite(s)", members.len());
        for satellite in members {
            let Some(orbit) = &satellite.orbit else {
                continue;
            };
            println!(
                "  {:<10} RAAN {:>6.1}°  true anomaly {:>6.1}°",
                satellite.short_name().unwrap_or("-"),
                orbit
                    .right_ascension_ascending_node
                    .map_or(0.0, |raan| raan.to_degrees()),
                orbit.true_anomaly.map_or(0.0, |anomaly| anomaly.to_degrees()),
            );
        }
    }

    println!("\nSearch document:\n{}", search.to_json()?);
    Ok(())
}
