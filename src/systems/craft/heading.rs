use crate::{
    components::{CraftState, ParameterId},
    utils::HEADING_DIVIDER,
};

/// Degrees turned in one tick. No speed, no turning.
pub fn heading_change(angular_velocity: f64, turned_velocity: f64) -> f64 {
    angular_velocity * turned_velocity / HEADING_DIVIDER
}

pub fn update_heading(state: &mut CraftState) {
    let angular_velocity = state.get_parameter(ParameterId::AngularVelocity);
    if angular_velocity == 0.0 {
        return;
    }

    let delta = heading_change(angular_velocity, state.get_turned_velocity());
    state.change_parameter(ParameterId::Direction, delta, false);
}
