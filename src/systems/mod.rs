pub mod controller;
pub mod craft;

pub use controller::{apply_craft_inputs, craft_update_system};
pub use craft::{update_values, VelocityUpdate};
