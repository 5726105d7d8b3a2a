use zeppelin::components::{ChangeOutcome, ParameterId};

use crate::common::{assert_snapshot_eq, create_test_craft, run_ticks};

#[test]
fn test_hard_drop_crashes() {
    let mut craft = create_test_craft();
    craft.set_parameter(ParameterId::Height, 10.0);

    let outcome = craft.change_parameter(ParameterId::Height, -6.0, false);

    assert_eq!(outcome, ChangeOutcome::Crashed);
    assert!(craft.is_crashed());
}

#[test]
fn test_small_drop_does_not_crash() {
    let mut craft = create_test_craft();
    craft.set_parameter(ParameterId::Height, 10.0);

    let outcome = craft.change_parameter(ParameterId::Height, -4.0, false);

    assert_eq!(outcome, ChangeOutcome::Applied);
    assert!(!craft.is_crashed());
}

#[test]
fn test_crash_by_name() {
    let mut craft = create_test_craft();
    craft.set_parameter_by_name("height", 400.0).unwrap();
    craft.change_parameter_by_name("height", -5.0, false).unwrap();
    assert!(craft.is_crashed());
}

#[test]
fn test_dumping_ballast_pressure_back_crashes() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::Pressure, -500.0, false);
    run_ticks(&mut craft, 500);
    assert_eq!(craft.get_parameter(ParameterId::Height), 500.0);
    assert!(!craft.is_crashed());

    craft.change_parameter(ParameterId::Pressure, 500.0, false);
    craft.update_values(16.0);
    assert!(craft.is_crashed());
}

#[test]
fn test_crash_is_terminal() {
    let mut craft = create_test_craft();
    craft.change_parameter(ParameterId::EnginePower, 60.0, true);
    craft.change_parameter(ParameterId::Pressure, -200.0, false);
    run_ticks(&mut craft, 100);

    craft.change_parameter(ParameterId::Height, -50.0, false);
    assert!(craft.is_crashed());

    // Inputs still land, but nothing derived from them moves any more
    craft.change_parameter(ParameterId::AngularVelocity, 5.0, true);
    let frozen = craft.snapshot();
    run_ticks(&mut craft, 100);

    assert_snapshot_eq(&craft.snapshot(), &frozen);
    assert!(frozen.crashed);
}
