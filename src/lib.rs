//! Control engine for a player-driven airship.
//!
//! The craft is a fixed set of bounded [`components::Parameter`]s. Players nudge the
//! control parameters (pressure, engine power, angular velocity) and
//! [`components::CraftState::update_values`] derives everything else once per tick.
//! [`plugins::CraftPlugin`] hosts the craft inside a bevy app.

pub mod components;
pub mod plugins;
pub mod systems;
pub mod utils;

pub use components::{CraftState, ParameterId, ParameterTable};
pub use plugins::{CraftCrashed, CraftInput, CraftPlugin, CraftSet};
