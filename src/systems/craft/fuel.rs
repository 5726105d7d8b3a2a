use bevy::prelude::*;

use crate::{
    components::{CraftState, ParameterId},
    utils::{
        ACCELERATION_FUEL_DIVIDER, DECELERATION_FUEL_DIVIDER, DISTANCE_TIME_DIVIDER,
        FUEL_BASE_CONSUMPTION, FUEL_CONSUMPTION_STEP, FUEL_CRUISE_POWER, FUEL_CURVE_DIVIDER,
        FUEL_DISTANCE_DIVIDER, PRESSURE_PER_1_FUEL_UNIT,
    },
};

use super::velocity::VelocityUpdate;

/// Consumption for a steady engine setting. Cheapest around cruise power, zero when off.
pub fn base_consumption(engine_power: f64) -> f64 {
    let power = engine_power.abs();
    if power == 0.0 {
        return 0.0;
    }
    (power - FUEL_CRUISE_POWER).powi(2) / FUEL_CURVE_DIVIDER + FUEL_BASE_CONSUMPTION
}

/// Consumption before smoothing: the base curve, the cost (or saving) of changing speed,
/// and the cost of moving ballast. Never negative.
pub fn raw_consumption(engine_power: f64, velocity: &VelocityUpdate, pressure_change: f64) -> f64 {
    let difference = velocity.velocity_difference.abs();
    let speed_term = if velocity.accelerating {
        difference / ACCELERATION_FUEL_DIVIDER
    } else {
        -difference / DECELERATION_FUEL_DIVIDER
    };
    let pressure_term = pressure_change.abs() / PRESSURE_PER_1_FUEL_UNIT;

    (base_consumption(engine_power) + speed_term + pressure_term).max(0.0)
}

/// Moves from `cache` toward `raw` by at most `step`.
pub fn rate_limit(cache: f64, raw: f64, step: f64) -> f64 {
    cache + (raw - cache).max(-step).min(step)
}

/// Distance covered in `elapsed_ms` at `velocity` distance units per hour.
pub fn distance_delta(velocity: f64, elapsed_ms: f64) -> f64 {
    velocity * elapsed_ms / DISTANCE_TIME_DIVIDER
}

pub fn fuel_consumption_step(state: &CraftState) -> f64 {
    state
        .parameter(ParameterId::FuelConsumption)
        .max_step()
        .unwrap_or(FUEL_CONSUMPTION_STEP)
}

/// Prices this tick, burns fuel for the distance covered, and cuts the engine on an empty tank.
pub fn update_fuel(
    state: &mut CraftState,
    elapsed_ms: f64,
    velocity: &VelocityUpdate,
    pressure_change: f64,
) {
    let engine_power = state.get_parameter(ParameterId::EnginePower);
    let raw = raw_consumption(engine_power, velocity, pressure_change);
    let consumption = rate_limit(
        state.fuel_consumption_cache,
        raw,
        fuel_consumption_step(state),
    );
    state.set_parameter(ParameterId::FuelConsumption, consumption);
    state.fuel_consumption_cache = state.get_parameter(ParameterId::FuelConsumption);

    let distance = distance_delta(state.get_parameter(ParameterId::Velocity), elapsed_ms);
    state.distance_travelled += distance;

    let consumed_fuel = distance * state.fuel_consumption_cache / FUEL_DISTANCE_DIVIDER;
    state.change_parameter(ParameterId::Fuel, -consumed_fuel, false);

    if state.parameter(ParameterId::Fuel).is_at_min() {
        if state.get_parameter(ParameterId::EnginePower) != 0.0 {
            state.set_parameter(ParameterId::EnginePower, 0.0);
        }
        if !state.engine_cut {
            warn!(
                "Fuel depleted after {:.3} distance units, engine cut",
                state.distance_travelled
            );
            state.engine_cut = true;
        }
    }
}
