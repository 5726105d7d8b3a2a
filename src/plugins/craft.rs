use bevy::prelude::*;

use crate::components::{ConfigError, CraftState, ParameterTable};
use crate::plugins::{CraftCrashed, CraftInput};
use crate::systems::{apply_craft_inputs, craft_update_system};

/// Per-frame stages: player input is applied before the tick runs.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum CraftSet {
    Input,
    Update,
}

/// Inserts the [`CraftState`] resource and ticks it every `Update`.
pub struct CraftPlugin {
    craft: CraftState,
}

impl Default for CraftPlugin {
    fn default() -> Self {
        Self {
            craft: CraftState::default(),
        }
    }
}

impl CraftPlugin {
    pub fn new(table: ParameterTable) -> Result<Self, ConfigError> {
        Ok(Self {
            craft: CraftState::new(&table)?,
        })
    }
}

impl Plugin for CraftPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.craft.clone())
            .add_event::<CraftInput>()
            .add_event::<CraftCrashed>();

        app.configure_sets(Update, (CraftSet::Input, CraftSet::Update).chain())
            .add_systems(
                Update,
                (
                    apply_craft_inputs.in_set(CraftSet::Input),
                    craft_update_system.in_set(CraftSet::Update),
                ),
            );
    }
}
