use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::SimError;

/// Stable identifiers of every parameter a craft carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterId {
    Height,
    DestinedHeight,
    Pressure,
    PressureChange,
    EnginePower,
    DestinedVelocity,
    Velocity,
    Acceleration,
    Fuel,
    FuelConsumption,
    Turn,
    AngularVelocity,
    Direction,
}

impl ParameterId {
    pub const COUNT: usize = 13;

    pub const ALL: [ParameterId; Self::COUNT] = [
        ParameterId::Height,
        ParameterId::DestinedHeight,
        ParameterId::Pressure,
        ParameterId::PressureChange,
        ParameterId::EnginePower,
        ParameterId::DestinedVelocity,
        ParameterId::Velocity,
        ParameterId::Acceleration,
        ParameterId::Fuel,
        ParameterId::FuelConsumption,
        ParameterId::Turn,
        ParameterId::AngularVelocity,
        ParameterId::Direction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterId::Height => "height",
            ParameterId::DestinedHeight => "destined_height",
            ParameterId::Pressure => "pressure",
            ParameterId::PressureChange => "pressure_change",
            ParameterId::EnginePower => "engine_power",
            ParameterId::DestinedVelocity => "destined_velocity",
            ParameterId::Velocity => "velocity",
            ParameterId::Acceleration => "acceleration",
            ParameterId::Fuel => "fuel",
            ParameterId::FuelConsumption => "fuel_consumption",
            ParameterId::Turn => "turn",
            ParameterId::AngularVelocity => "angular_velocity",
            ParameterId::Direction => "direction",
        }
    }

    /// Position in [`ParameterId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterId {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ParameterId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| SimError::UnknownParameter(name.to_string()))
    }
}
