use crate::{
    components::{CraftState, ParameterId},
    utils::{ACCELERATION_DIVIDER, DECELERATION_LIMIT, MINIMAL_STEP, REVERSE_ACCELERATION_FACTOR},
};

/// What the velocity step saw this tick. Fuel consumption is priced from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityUpdate {
    /// `destined_velocity - turned_velocity`, measured before the step.
    pub velocity_difference: f64,
    pub accelerating: bool,
    /// Acceleration applied to the velocity this tick.
    pub acceleration: f64,
}

pub fn velocity_from_engine_power(engine_power: f64) -> f64 {
    engine_power
}

/// True when the target lies on the other side of zero, or further from zero than now.
pub fn is_accelerating(destined_velocity: f64, turned_velocity: f64) -> bool {
    destined_velocity * turned_velocity < 0.0 || destined_velocity.abs() > turned_velocity.abs()
}

/// Direction the velocity has to move in: `1.0`, `-1.0` or `0.0`.
pub fn velocity_lambda_turn(velocity_difference: f64) -> f64 {
    if velocity_difference > 0.0 {
        1.0
    } else if velocity_difference < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Asymmetric acceleration curve.
///
/// Forward acceleration follows `difference / ACCELERATION_DIVIDER`; reverse acceleration
/// is three times slower. Coasting toward a smaller target uses the slow curve and is
/// capped at `DECELERATION_LIMIT` per tick.
pub fn get_acceleration(velocity_difference: f64, accelerating: bool) -> f64 {
    let lambda_turn = velocity_lambda_turn(velocity_difference);
    let slow_divider = ACCELERATION_DIVIDER * REVERSE_ACCELERATION_FACTOR;

    if accelerating {
        if lambda_turn > 0.0 {
            velocity_difference / ACCELERATION_DIVIDER
        } else {
            velocity_difference / slow_divider
        }
    } else {
        lambda_turn * (velocity_difference.abs() / slow_divider).min(DECELERATION_LIMIT)
    }
}

/// Engine power → destined velocity → velocity, plus the `turn` and `acceleration` readouts.
pub fn update_velocity(state: &mut CraftState) -> VelocityUpdate {
    let engine_power = state.get_parameter(ParameterId::EnginePower);
    if engine_power != state.engine_cache {
        state.engine_cache = engine_power;
        state.set_parameter(
            ParameterId::DestinedVelocity,
            velocity_from_engine_power(engine_power),
        );
    }

    let destined_velocity = state.get_parameter(ParameterId::DestinedVelocity);
    let turned_velocity = state.get_turned_velocity();
    let velocity_difference = destined_velocity - turned_velocity;
    let accelerating = is_accelerating(destined_velocity, turned_velocity);

    let mut acceleration = 0.0;
    if velocity_difference != 0.0 {
        if velocity_difference.abs() < MINIMAL_STEP {
            state.set_parameter(ParameterId::Velocity, destined_velocity);
        } else {
            acceleration = get_acceleration(velocity_difference, accelerating);
            state.change_parameter(ParameterId::Velocity, acceleration, false);
        }
    }

    state.set_parameter(ParameterId::Acceleration, acceleration);
    let turn = state.get_turn();
    state.set_parameter(ParameterId::Turn, f64::from(turn));

    VelocityUpdate {
        velocity_difference,
        accelerating,
        acceleration,
    }
}
