use bevy::prelude::*;

use crate::{
    components::{ChangeOutcome, CraftState, ParameterId},
    plugins::{CraftCrashed, CraftInput},
};

/// Applies queued player input to the craft. Runs before the tick so input never
/// interleaves with an update.
pub fn apply_craft_inputs(mut inputs: EventReader<CraftInput>, mut craft: ResMut<CraftState>) {
    for input in inputs.read() {
        let outcome = craft.change_parameter(input.parameter, input.delta, input.hard);
        if outcome == ChangeOutcome::Held {
            debug!("{} held at its rest value", input.parameter);
        }
    }
}

/// Runs one tick with the frame's elapsed time and reports the crash once.
pub fn craft_update_system(
    mut craft: ResMut<CraftState>,
    time: Res<Time>,
    mut crashes: EventWriter<CraftCrashed>,
    mut reported: Local<bool>,
) {
    let elapsed_ms = time.delta().as_secs_f64() * 1000.0;
    craft.update_values(elapsed_ms);

    if craft.is_crashed() && !*reported {
        *reported = true;
        let event = CraftCrashed {
            height: craft.get_parameter(ParameterId::Height),
            distance_travelled: craft.distance_travelled(),
        };
        info!("Reporting crash: {:?}", event);
        crashes.send(event);
    }
}
