use entity::{Agency, AgencyType, Entity, Error, Rangeable};
use ground::{GroundNetwork, GroundStation};
use serde_json::json;
use space::{Constellation, ConstellationType, Orbit, Satellite};
use units::Length;

use crate::design_space::DesignSpace;

fn delta(satellites: Vec<u32>) -> Constellation {
    Constellation {
        constellation_type: Some(ConstellationType::DeltaHomogenous),
        number_satellites: Rangeable::List(satellites),
        orbit: Some(Orbit::sun_synchronous(Length::from_km(600.0)).into()),
        ..Default::default()
    }
    .with_defaults()
}

fn network(stations: u32) -> GroundNetwork {
    GroundNetwork {
        number_stations: Some(Rangeable::Single(stations)),
        ..Default::default()
    }
}

fn stations(count: usize) -> Vec<GroundStation> {
    (0..count)
        .map(|index| GroundStation {
            name: Some(format!("GS-{index}")),
            ..Default::default()
        })
        .collect()
}

#[test]
fn lists_accept_single_elements() {
    let design_space = DesignSpace::decode(json!({
        "constellations": {"constellationType": "DELTA_HOMOGENOUS"},
        "satellites": {"name": "Sat"},
        "launchers": {"name": "Vega"},
        "groundNetworks": {"numberStations": 1},
        "groundStations": {"name": "Station"}
    }))
    .unwrap();

    assert_eq!(design_space.constellations.len(), 1);
    assert_eq!(design_space.satellites.len(), 1);
    assert_eq!(design_space.launchers.len(), 1);
    assert_eq!(design_space.ground_networks.len(), 1);
    assert_eq!(design_space.ground_stations.len(), 1);
}

#[test]
fn entries_concatenate_in_order() {
    let design_space = DesignSpace {
        constellations: vec![delta(vec![1]), delta(vec![2, 3])],
        satellites: vec![Satellite::default()],
        ground_networks: vec![network(1), network(2)],
        ground_stations: stations(2),
        ..Default::default()
    };

    let architectures: Vec<(u32, usize)> = design_space
        .generate_architectures()
        .unwrap()
        .map(|architecture| {
            let constellation = architecture.constellation.unwrap();
            let network = architecture.ground_network.unwrap();
            (
                constellation.number_satellites.as_single().unwrap(),
                network.ground_stations.map_or(0, |members| members.len()),
            )
        })
        .collect();

    // Networks: two single-station picks, then the one pair
    assert_eq!(
        architectures,
        vec![
            (1, 1),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 1),
            (2, 2),
            (3, 1),
            (3, 1),
            (3, 2),
        ]
    );
}

#[test]
fn agency_mismatch_leaves_no_networks() {
    let design_space = DesignSpace {
        constellations: vec![delta(vec![1])],
        satellites: vec![Satellite::default()],
        ground_networks: vec![GroundNetwork {
            agency: Some(Agency::of_type(AgencyType::Academic)),
            ..network(1)
        }],
        ground_stations: stations(3),
        ..Default::default()
    };

    let architectures = design_space.generate_architectures().unwrap();
    assert!(architectures.networks().is_empty());
    assert_eq!(architectures.count(), 0);
}

#[test]
fn configuration_errors_surface_before_iteration() {
    let mut design_space = DesignSpace {
        constellations: vec![delta(vec![1])],
        satellites: vec![Satellite::default()],
        ground_networks: vec![GroundNetwork::default()],
        ground_stations: stations(1),
        ..Default::default()
    };
    assert!(matches!(
        design_space.generate_architectures(),
        Err(Error::MissingField { .. })
    ));

    design_space.ground_networks = vec![network(1)];
    design_space.constellations[0].constellation_type = Some(ConstellationType::AdHoc);
    assert!(matches!(
        design_space.generate_architectures(),
        Err(Error::UnsupportedConstellationType(_))
    ));
}

#[test]
fn empty_design_space_has_no_architectures() {
    let design_space = DesignSpace::default();
    let architectures = design_space.generate_architectures().unwrap();
    assert_eq!(architectures.count(), 0);
}
