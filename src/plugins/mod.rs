mod craft;
mod events;

pub use craft::{CraftPlugin, CraftSet};
pub use events::{CraftCrashed, CraftInput};
