use approx::assert_relative_eq;
use bevy::prelude::*;
use plane_sitl::{
    components::{AirData, BodyAccelerations, Plane, PlaneConfig, ServoInputs},
    resources::{PhysicsConfig, PlaneNoise},
    utils::GRAVITY,
};

use crate::common::{assert_air_data_valid, create_cruise_spatial, TestAppBuilder};

#[test]
fn test_plugin_spawns_single_plane() {
    let mut app = TestAppBuilder::new().build();

    assert_eq!(app.query_all::<Plane>().len(), 1);

    let plane = app.query_single::<Plane>().expect("Plane not found");
    assert_eq!(plane.name(), "plane");
    assert_relative_eq!(plane.thrust_scale(), GRAVITY / 0.65);

    let name = app.query_single::<Name>().expect("Name not found");
    assert_eq!(name.as_str(), "plane");

    let servos = app.query_single::<ServoInputs>().expect("Servos not found");
    assert_eq!(*servos, ServoInputs::neutral());

    let accel = app
        .query_single::<BodyAccelerations>()
        .expect("Accelerations not found");
    assert_eq!(*accel, BodyAccelerations::default());

    assert!(app.get_state::<PhysicsConfig>().is_some());
    assert!(matches!(
        app.get_state::<PlaneNoise>(),
        Some(PlaneNoise::Disabled)
    ));
}

#[test]
fn test_initial_state_primes_air_data() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(create_cruise_spatial(22.0))
        .build();

    let air_data = app.query_single::<AirData>().expect("AirData not found");
    assert_air_data_valid(air_data);
    assert_relative_eq!(air_data.true_airspeed, 22.0, epsilon = 1e-12);
    assert_relative_eq!(air_data.velocity_body.x, 22.0, epsilon = 1e-12);
}

#[test]
fn test_fixed_timestep_follows_physics_config() {
    let physics = PhysicsConfig {
        timestep: 1.0 / 400.0,
        ..PhysicsConfig::default()
    };
    let app = TestAppBuilder::new().with_physics(physics).build();

    let time = app
        .get_state::<Time<Fixed>>()
        .expect("Fixed time not inserted");
    assert_relative_eq!(time.timestep().as_secs_f64(), 1.0 / 400.0, epsilon = 1e-9);
}

#[test]
fn test_invalid_config_is_not_spawned() {
    let config = PlaneConfig {
        mass: 0.0,
        ..PlaneConfig::small_uav()
    };
    let mut app = TestAppBuilder::new().with_plane(config).build();

    assert!(app.query_all::<Plane>().is_empty());
    assert!(app.get_state::<PlaneNoise>().is_none());
}

#[test]
fn test_invalid_physics_is_not_spawned() {
    let physics = PhysicsConfig {
        hover_throttle: 0.0,
        ..PhysicsConfig::default()
    };
    let mut app = TestAppBuilder::new().with_physics(physics).build();

    assert!(app.query_all::<Plane>().is_empty());
}
