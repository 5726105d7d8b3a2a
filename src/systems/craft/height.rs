use crate::{
    components::{CraftState, ParameterId},
    utils::{HEIGHT_CHANGE_DIVIDER, MINIMAL_STEP},
};

/// Height the craft settles at for a given ballast pressure. Venting raises it.
pub fn height_from_pressure(initial_pressure: f64, pressure: f64) -> f64 {
    initial_pressure - pressure
}

/// Proportional step toward the destined height, capped at `max_step` on the way up.
pub fn height_step(height_difference: f64, max_step: f64) -> f64 {
    (height_difference / HEIGHT_CHANGE_DIVIDER).min(max_step)
}

/// Pressure → destined height → height.
///
/// Returns the pressure change observed this tick; the fuel subsystem charges for it.
pub fn update_height(state: &mut CraftState) -> f64 {
    let pressure = state.get_parameter(ParameterId::Pressure);
    let pressure_change = (state.pressure_cache - pressure).abs();
    state.set_parameter(ParameterId::PressureChange, pressure_change);

    if pressure_change > 0.0 {
        state.pressure_cache = pressure;
        let destined_height = height_from_pressure(state.initial_pressure(), pressure);
        state.set_parameter(ParameterId::DestinedHeight, destined_height);
    }

    let destined_height = state.get_parameter(ParameterId::DestinedHeight);
    let height_difference = destined_height - state.get_parameter(ParameterId::Height);
    if height_difference == 0.0 {
        return pressure_change;
    }

    if height_difference.abs() < MINIMAL_STEP {
        state.set_parameter(ParameterId::Height, destined_height);
    } else {
        let max_step = state
            .parameter(ParameterId::Height)
            .max_step()
            .unwrap_or(f64::INFINITY);
        state.change_parameter(
            ParameterId::Height,
            height_step(height_difference, max_step),
            false,
        );
    }

    // Grounded: stop chasing a target below the floor
    if state.parameter(ParameterId::Height).is_at_min() {
        let height = state.get_parameter(ParameterId::Height);
        state.set_parameter(ParameterId::DestinedHeight, height);
    }

    pressure_change
}
