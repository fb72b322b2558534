use approx::assert_relative_eq;
use nalgebra::Vector3;
use plane_sitl::{
    components::{AirData, BodyAccelerations, Plane, PlaneConfig, SpatialComponent},
    utils::GRAVITY,
};

use crate::common::{
    add_integrator, assert_accelerations_valid, assert_vector_eq, create_cruise_spatial,
    servo_frame, IntegratorLog, TestAppBuilder,
};

#[test]
fn test_hover_throttle_balances_gravity() {
    let mut app = TestAppBuilder::new().build();
    app.set_servos(&servo_frame(1500, 1500, 1650, 1500));
    app.run_steps(1);

    let accel = app
        .query_single::<BodyAccelerations>()
        .expect("Accelerations not found");
    assert_relative_eq!(accel.linear.x, GRAVITY, epsilon = 1e-9);
    assert_vector_eq(&accel.angular, &Vector3::zeros(), 1e-12);
}

#[test]
fn test_reverse_thrust_frame() {
    let mut app = TestAppBuilder::new()
        .with_plane(PlaneConfig::for_frame("plane-revthrust"))
        .build();

    app.set_servos(&servo_frame(1500, 1500, 1000, 1500));
    app.run_steps(1);

    let expected = {
        let plane = app.query_single::<Plane>().expect("Plane not found");
        -plane.thrust_scale() / plane.mass()
    };
    let accel = app
        .query_single::<BodyAccelerations>()
        .expect("Accelerations not found");
    assert_relative_eq!(accel.linear.x, expected, epsilon = 1e-9);

    app.set_servos(&servo_frame(1500, 1500, 1500, 1500));
    app.run_steps(1);
    let accel = app
        .query_single::<BodyAccelerations>()
        .expect("Accelerations not found");
    assert_relative_eq!(accel.linear.x, 0.0);
}

#[test]
fn test_integrator_sees_same_tick_accelerations() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(create_cruise_spatial(18.0))
        .build();
    add_integrator(&mut app.app);

    app.set_servos(&servo_frame(1500, 1500, 1800, 1500));
    app.run_steps(1);

    let current = *app
        .query_single::<BodyAccelerations>()
        .expect("Accelerations not found");
    let log = app.get_state::<IntegratorLog>().expect("Log not found");

    assert_eq!(log.seen.len(), 1);
    assert_eq!(log.seen[0], current);
    assert_ne!(current, BodyAccelerations::default());
}

#[test]
fn test_cruise_stays_finite() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(create_cruise_spatial(20.0))
        .build();
    add_integrator(&mut app.app);

    app.set_servos(&servo_frame(1520, 1480, 1700, 1500));
    for _ in 0..240 {
        app.run_steps(1);
        let accel = app
            .query_single::<BodyAccelerations>()
            .expect("Accelerations not found");
        assert_accelerations_valid(accel);
    }

    let spatial = app
        .query_single::<SpatialComponent>()
        .expect("Spatial not found");
    assert!(spatial.velocity.iter().all(|v| v.is_finite()));
    assert!(spatial.position.x > 0.0, "Plane should have moved north");
}

#[test]
fn test_velocity_change_reaches_alpha_next_tick() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(create_cruise_spatial(20.0))
        .build();

    {
        let mut spatial = app
            .query_single_mut::<SpatialComponent>()
            .expect("Spatial not found");
        spatial.velocity = Vector3::new(20.0, 0.0, 2.0);
    }

    app.run_steps(1);
    let alpha = app.query_single::<AirData>().expect("AirData not found").alpha;
    assert_relative_eq!(alpha, 0.0);

    app.run_steps(1);
    let alpha = app.query_single::<AirData>().expect("AirData not found").alpha;
    assert_relative_eq!(alpha, 2.0_f64.atan2(20.0), epsilon = 1e-12);
}
