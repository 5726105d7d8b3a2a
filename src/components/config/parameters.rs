use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::{craft::parameter_layout, ParameterId, ParameterKind};

use super::loader::ConfigError;

/// One row of the parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub initial_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Largest per-tick change the update engine applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_step: Option<f64>,
    /// Input granularity exposed to key mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl ParameterSpec {
    pub fn new(initial_value: f64, min_value: f64, max_value: f64) -> Self {
        Self {
            initial_value,
            min_value,
            max_value,
            max_step: None,
            step: None,
        }
    }

    pub fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = Some(max_step);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

/// Name → bounds table a craft is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterTable {
    entries: BTreeMap<ParameterId, ParameterSpec>,
}

impl Default for ParameterTable {
    /// The built-in table used when no config file is supplied.
    fn default() -> Self {
        use ParameterId::*;

        let entries = BTreeMap::from([
            (
                Height,
                ParameterSpec::new(0.0, 0.0, 2000.0)
                    .with_max_step(10.0)
                    .with_step(10.0),
            ),
            (DestinedHeight, ParameterSpec::new(0.0, 0.0, 2000.0)),
            (
                Pressure,
                ParameterSpec::new(2000.0, 0.0, 4000.0).with_step(10.0),
            ),
            (PressureChange, ParameterSpec::new(0.0, 0.0, 4000.0)),
            (
                EnginePower,
                ParameterSpec::new(0.0, -40.0, 80.0).with_step(5.0),
            ),
            (DestinedVelocity, ParameterSpec::new(0.0, -80.0, 80.0)),
            (Velocity, ParameterSpec::new(0.0, 0.0, 80.0)),
            (Acceleration, ParameterSpec::new(0.0, -10.0, 10.0)),
            (Fuel, ParameterSpec::new(100.0, 0.0, 100.0)),
            (
                FuelConsumption,
                ParameterSpec::new(0.0, 0.0, 100.0).with_max_step(5.0),
            ),
            (Turn, ParameterSpec::new(0.0, -1.0, 1.0)),
            (
                AngularVelocity,
                ParameterSpec::new(0.0, -10.0, 10.0).with_step(1.0),
            ),
            (Direction, ParameterSpec::new(0.0, 0.0, 360.0)),
        ]);

        Self { entries }
    }
}

impl ParameterTable {
    /// A table with no rows. Only useful as a base for [`ParameterTable::insert`].
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: ParameterId) -> Option<&ParameterSpec> {
        self.entries.get(&id)
    }

    pub fn insert(&mut self, id: ParameterId, spec: ParameterSpec) -> Option<ParameterSpec> {
        self.entries.insert(id, spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, &ParameterSpec)> {
        self.entries.iter().map(|(id, spec)| (*id, spec))
    }

    /// Overlays `other` onto this table, row by row.
    pub fn merged(mut self, other: ParameterTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Checks that every parameter has a sane row.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for id in ParameterId::ALL {
            let spec = self
                .get(id)
                .ok_or_else(|| ConfigError::ValidationError(format!("missing row for {}", id)))?;
            validate_spec(id, spec)?;
        }
        Ok(())
    }
}

fn validate_spec(id: ParameterId, spec: &ParameterSpec) -> Result<(), ConfigError> {
    let finite = [spec.initial_value, spec.min_value, spec.max_value]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(ConfigError::ValidationError(format!(
            "{}: values must be finite",
            id
        )));
    }

    let (kind, _) = parameter_layout(id);
    let (min_value, max_value) = match kind {
        ParameterKind::Turned => (-spec.max_value, spec.max_value),
        _ => (spec.min_value, spec.max_value),
    };

    if min_value > max_value {
        return Err(ConfigError::ValidationError(format!(
            "{}: min {} is above max {}",
            id, min_value, max_value
        )));
    }
    if kind == ParameterKind::Directional && min_value == max_value {
        return Err(ConfigError::ValidationError(format!(
            "{}: directional range must not be empty",
            id
        )));
    }
    if spec.initial_value < min_value || spec.initial_value > max_value {
        return Err(ConfigError::ValidationError(format!(
            "{}: initial value {} outside [{}, {}]",
            id, spec.initial_value, min_value, max_value
        )));
    }

    for (label, step) in [("max_step", spec.max_step), ("step", spec.step)] {
        if let Some(step) = step {
            if !(step > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{}: {} must be positive, got {}",
                    id, label, step
                )));
            }
        }
    }

    Ok(())
}
