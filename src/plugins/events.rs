use bevy::prelude::*;

use crate::components::ParameterId;

/// A player control change, queued until the next input stage.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CraftInput {
    pub parameter: ParameterId,
    pub delta: f64,
    /// Moves the parameter even when it rests on its snap value.
    pub hard: bool,
}

impl CraftInput {
    pub fn soft(parameter: ParameterId, delta: f64) -> Self {
        Self {
            parameter,
            delta,
            hard: false,
        }
    }

    pub fn hard(parameter: ParameterId, delta: f64) -> Self {
        Self {
            parameter,
            delta,
            hard: true,
        }
    }
}

/// Sent once, on the tick the craft is first seen crashed.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CraftCrashed {
    pub height: f64,
    pub distance_travelled: f64,
}
