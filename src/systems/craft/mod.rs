mod fuel;
mod heading;
mod height;
mod velocity;

use bevy::prelude::*;

use crate::components::{CraftState, ParameterId};

pub use fuel::{base_consumption, distance_delta, rate_limit, raw_consumption, update_fuel};
pub use heading::{heading_change, update_heading};
pub use height::{height_from_pressure, height_step, update_height};
pub use velocity::{
    get_acceleration, is_accelerating, update_velocity, velocity_from_engine_power,
    velocity_lambda_turn, VelocityUpdate,
};

/// Advances the craft by one tick of `elapsed_ms` milliseconds.
///
/// Subsystems run in dependency order: height, velocity, heading, fuel. Fuel goes last
/// because it prices both the pressure change and the velocity difference of this tick.
/// A crashed craft is frozen.
pub fn update_values(state: &mut CraftState, elapsed_ms: f64) {
    if state.is_crashed() {
        debug!("Craft crashed, skipping update");
        return;
    }

    let pressure_change = update_height(state);
    let velocity = update_velocity(state);
    update_heading(state);
    update_fuel(state, elapsed_ms, &velocity, pressure_change);

    debug!(
        "tick {}ms: height {:.2} velocity {:.2} direction {:.2} fuel {:.3} consumption {:.2}",
        elapsed_ms,
        state.get_parameter(ParameterId::Height),
        state.get_turned_velocity(),
        state.get_parameter(ParameterId::Direction),
        state.get_parameter(ParameterId::Fuel),
        state.get_parameter(ParameterId::FuelConsumption),
    );
}

impl CraftState {
    /// See [`update_values`].
    pub fn update_values(&mut self, elapsed_ms: f64) {
        update_values(self, elapsed_ms);
    }
}
