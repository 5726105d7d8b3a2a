use approx::assert_relative_eq;
use zeppelin::components::ParameterId;

use crate::common::{assert_craft_within_bounds, create_test_craft, run_ticks, ticks_until};

#[test]
fn test_full_power_from_rest() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::EnginePower, 80.0, true);

    let mut previous = craft.get_turned_velocity();
    for _ in 0..50 {
        let difference = 80.0 - previous;
        craft.update_values(16.0);
        let velocity = craft.get_turned_velocity();

        assert_relative_eq!(velocity - previous, difference / 20.0, epsilon = 1e-9);
        assert_eq!(craft.get_parameter(ParameterId::Turn), 1.0);
        previous = velocity;
    }

    let ticks = ticks_until(
        &mut craft,
        |craft| craft.get_parameter(ParameterId::Velocity) == 80.0,
        500,
    );
    assert!(ticks.is_some(), "velocity never settled at 80");
    assert_craft_within_bounds(&craft);
}

#[test]
fn test_engine_idle_coasts_down() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::EnginePower, 40.0, true);
    run_ticks(&mut craft, 300);
    assert_eq!(craft.get_parameter(ParameterId::Velocity), 40.0);

    craft.change_parameter(ParameterId::EnginePower, -40.0, false);
    let mut previous = craft.get_turned_velocity();
    for _ in 0..20 {
        craft.update_values(16.0);
        let velocity = craft.get_turned_velocity();
        assert_relative_eq!(previous - velocity, 0.3, epsilon = 1e-9);
        previous = velocity;
    }
    assert_eq!(craft.get_parameter(ParameterId::Turn), 1.0);
}

#[test]
fn test_reverse_through_zero() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::EnginePower, 20.0, true);
    run_ticks(&mut craft, 300);

    craft.change_parameter(ParameterId::EnginePower, -60.0, false);
    let ticks = ticks_until(&mut craft, |craft| craft.get_turn() == -1, 1000);
    assert!(ticks.is_some(), "craft never reversed");

    run_ticks(&mut craft, 1000);
    assert_eq!(craft.get_turned_velocity(), -40.0);
    assert_eq!(craft.get_parameter(ParameterId::Velocity), 40.0);
    assert_eq!(craft.get_parameter(ParameterId::Turn), -1.0);
}

#[test]
fn test_climb_and_settle() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::Pressure, -100.0, false);

    let ticks = ticks_until(
        &mut craft,
        |craft| {
            let height = craft.get_parameter(ParameterId::Height);
            assert!(height <= 100.0, "height overshot to {}", height);
            height == 100.0
        },
        300,
    );
    assert!(ticks.is_some(), "height never settled");

    run_ticks(&mut craft, 10);
    assert_eq!(craft.get_parameter(ParameterId::Height), 100.0);
    assert_eq!(craft.get_parameter(ParameterId::DestinedHeight), 100.0);
    assert_eq!(craft.get_parameter(ParameterId::PressureChange), 0.0);
}

#[test]
fn test_turning_wraps_heading() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::EnginePower, 80.0, true);
    craft.change_parameter(ParameterId::AngularVelocity, -10.0, true);

    let mut crossed_north = false;
    let mut previous = craft.get_parameter(ParameterId::Direction);
    for _ in 0..2000 {
        craft.update_values(16.0);
        let direction = craft.get_parameter(ParameterId::Direction);
        assert!((0.0..360.0).contains(&direction));
        if direction > previous {
            crossed_north = true;
        }
        previous = direction;
    }
    assert!(crossed_north, "heading never wrapped through 0");
}

#[test]
fn test_angular_velocity_snaps_at_rest() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::AngularVelocity, 1.0, false);
    assert_eq!(craft.get_parameter(ParameterId::AngularVelocity), 0.0);

    craft.change_parameter(ParameterId::AngularVelocity, 1.0, true);
    craft.change_parameter(ParameterId::AngularVelocity, 1.0, false);
    assert_eq!(craft.get_parameter(ParameterId::AngularVelocity), 2.0);
}

#[test]
fn test_long_session_stays_in_bounds() {
    let mut craft = create_test_craft();
    let inputs = [
        (ParameterId::Pressure, -300.0, false),
        (ParameterId::EnginePower, 70.0, true),
        (ParameterId::AngularVelocity, 3.0, true),
        (ParameterId::Pressure, 40.0, false),
        (ParameterId::EnginePower, -100.0, false),
        (ParameterId::AngularVelocity, -6.0, false),
    ];

    for (parameter, delta, hard) in inputs {
        craft.change_parameter(parameter, delta, hard);
        for _ in 0..200 {
            craft.update_values(16.0);
            assert_craft_within_bounds(&craft);
        }
    }
    assert!(!craft.is_crashed());
}
