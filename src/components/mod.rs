pub mod config;
pub mod craft;
pub mod parameter;
pub mod parameter_id;

pub use config::{ConfigError, ParameterSpec, ParameterTable};
pub use craft::{parameter_layout, CraftSnapshot, CraftState};
pub use parameter::{ChangeOutcome, Parameter, ParameterKind};
pub use parameter_id::ParameterId;
