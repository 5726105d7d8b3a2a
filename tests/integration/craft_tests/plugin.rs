use std::time::Duration;

use zeppelin::{
    components::{ParameterId, ParameterSpec, ParameterTable},
    plugins::{CraftInput, CraftPlugin},
};

use crate::common::{assert_craft_within_bounds, TestAppBuilder};

#[test]
fn test_plugin_inserts_craft() {
    let app = TestAppBuilder::new().build();
    let craft = app.craft();
    assert_eq!(craft.get_parameter(ParameterId::Fuel), 100.0);
    assert!(!craft.is_crashed());
}

#[test]
fn test_inputs_are_applied_before_tick() {
    let mut app = TestAppBuilder::new().build();
    app.run_frame();

    app.send_input(CraftInput::hard(ParameterId::EnginePower, 80.0));
    app.run_frame();

    let craft = app.craft();
    assert_eq!(craft.get_parameter(ParameterId::EnginePower), 80.0);
    assert_eq!(craft.get_parameter(ParameterId::DestinedVelocity), 80.0);
    assert!(craft.get_parameter(ParameterId::Velocity) > 0.0);
}

#[test]
fn test_soft_input_respects_snap() {
    let mut app = TestAppBuilder::new().build();
    app.send_input(CraftInput::soft(ParameterId::EnginePower, 10.0));
    app.run_frame();
    assert_eq!(app.craft().get_parameter(ParameterId::EnginePower), 0.0);
}

#[test]
fn test_elapsed_time_drives_distance() {
    let mut app = TestAppBuilder::new()
        .with_frame(Duration::from_millis(20))
        .build();
    app.send_input(CraftInput::hard(ParameterId::EnginePower, 60.0));
    app.run_steps(300);

    let craft = app.craft();
    assert!(craft.distance_travelled() > 0.0);
    assert!(craft.get_parameter(ParameterId::Fuel) < 100.0);
    assert_craft_within_bounds(craft);
}

#[test]
fn test_crash_event_sent_once() {
    let mut app = TestAppBuilder::new().build();
    app.craft_mut().set_parameter(ParameterId::Height, 300.0);
    app.craft_mut().set_parameter(ParameterId::DestinedHeight, 300.0);

    app.send_input(CraftInput::soft(ParameterId::Height, -20.0));
    app.run_steps(10);

    assert!(app.craft().is_crashed());
    assert_eq!(app.crashes().len(), 1);
    assert_eq!(app.crashes()[0].height, 280.0);
}

#[test]
fn test_custom_table() {
    let mut table = ParameterTable::default();
    table.insert(ParameterId::Fuel, ParameterSpec::new(25.0, 0.0, 25.0));
    let app = TestAppBuilder::new().with_table(table).build();
    assert_eq!(app.craft().get_range(ParameterId::Fuel), (0.0, 25.0));
}

#[test]
fn test_invalid_table_rejected_by_plugin() {
    let mut table = ParameterTable::default();
    table.insert(ParameterId::Direction, ParameterSpec::new(0.0, 0.0, 0.0));
    assert!(CraftPlugin::new(table).is_err());
}
