pub mod loader;
pub mod parameters;

pub use loader::{ConfigError, ConfigFormat};
pub use parameters::{ParameterSpec, ParameterTable};
