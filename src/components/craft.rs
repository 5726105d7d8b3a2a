use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    components::{
        config::{ConfigError, ParameterSpec, ParameterTable},
        ChangeOutcome, Parameter, ParameterId, ParameterKind,
    },
    utils::{SimError, FUEL_CONSUMPTION_STEP},
};

/// Kind and snap position of each parameter. These belong to the craft, not the table.
pub fn parameter_layout(id: ParameterId) -> (ParameterKind, Option<f64>) {
    match id {
        ParameterId::Height => (ParameterKind::Height, None),
        ParameterId::Velocity => (ParameterKind::Turned, None),
        ParameterId::Direction => (ParameterKind::Directional, None),
        ParameterId::EnginePower | ParameterId::AngularVelocity => (ParameterKind::Plain, Some(0.0)),
        _ => (ParameterKind::Plain, None),
    }
}

/// The airship: every parameter plus the caches the update engine keeps between ticks.
///
/// Single writer. Input changes and [`CraftState::update_values`] must not interleave;
/// inside a bevy app this is guaranteed by `ResMut` access.
#[derive(Resource, Debug, Clone)]
pub struct CraftState {
    parameters: [Parameter; ParameterId::COUNT],
    initial_pressure: f64,
    pub(crate) pressure_cache: f64,
    pub(crate) engine_cache: f64,
    pub(crate) fuel_consumption_cache: f64,
    pub(crate) distance_travelled: f64,
    pub(crate) engine_cut: bool,
    crashed: bool,
}

impl Default for CraftState {
    fn default() -> Self {
        Self::build(&ParameterTable::default())
    }
}

impl CraftState {
    /// Builds a craft from a validated parameter table.
    pub fn new(table: &ParameterTable) -> Result<Self, ConfigError> {
        table.validate()?;
        let craft = Self::build(table);
        info!(
            "Craft ready: height {}, pressure {}, fuel {}",
            craft.get_parameter(ParameterId::Height),
            craft.get_parameter(ParameterId::Pressure),
            craft.get_parameter(ParameterId::Fuel)
        );
        Ok(craft)
    }

    fn build(table: &ParameterTable) -> Self {
        let parameters = std::array::from_fn(|index| {
            let id = ParameterId::ALL[index];
            let spec = table
                .get(id)
                .copied()
                .unwrap_or_else(|| ParameterSpec::new(0.0, 0.0, 0.0));
            let (kind, snap) = parameter_layout(id);

            let parameter = Parameter::new(kind, spec.initial_value, spec.min_value, spec.max_value)
                .with_step(spec.step)
                .with_max_step(spec.max_step);
            match snap {
                Some(snap_to) => parameter.with_snap(snap_to),
                None => parameter,
            }
        });

        let mut craft = Self {
            parameters,
            initial_pressure: 0.0,
            pressure_cache: 0.0,
            engine_cache: 0.0,
            fuel_consumption_cache: 0.0,
            distance_travelled: 0.0,
            engine_cut: false,
            crashed: false,
        };
        craft.initial_pressure = craft.get_parameter(ParameterId::Pressure);
        craft.pressure_cache = craft.initial_pressure;
        craft.engine_cache = craft.get_parameter(ParameterId::EnginePower);
        craft.fuel_consumption_cache = craft.get_parameter(ParameterId::FuelConsumption);
        craft
    }

    pub fn parameter(&self, id: ParameterId) -> &Parameter {
        &self.parameters[id.index()]
    }

    pub(crate) fn parameter_mut(&mut self, id: ParameterId) -> &mut Parameter {
        &mut self.parameters[id.index()]
    }

    pub fn get_parameter(&self, id: ParameterId) -> f64 {
        self.parameter(id).get_value()
    }

    pub fn get_parameter_by_name(&self, name: &str) -> Result<f64, SimError> {
        Ok(self.get_parameter(name.parse()?))
    }

    pub fn get_range(&self, id: ParameterId) -> (f64, f64) {
        self.parameter(id).get_range()
    }

    pub fn get_range_by_name(&self, name: &str) -> Result<(f64, f64), SimError> {
        Ok(self.get_range(name.parse()?))
    }

    /// Input granularity from the table, for key mapping.
    pub fn get_step(&self, id: ParameterId) -> Option<f64> {
        self.parameter(id).step()
    }

    /// Applies a player (or engine) change. A crashing height change latches the crash flag.
    pub fn change_parameter(&mut self, id: ParameterId, delta: f64, hard: bool) -> ChangeOutcome {
        let outcome = self.parameter_mut(id).change(delta, hard);
        if outcome == ChangeOutcome::Crashed {
            self.register_crash(id, delta);
        }
        outcome
    }

    pub fn change_parameter_by_name(
        &mut self,
        name: &str,
        delta: f64,
        hard: bool,
    ) -> Result<ChangeOutcome, SimError> {
        Ok(self.change_parameter(name.parse()?, delta, hard))
    }

    /// Raw assignment. Clamps or wraps, never crashes.
    pub fn set_parameter(&mut self, id: ParameterId, value: f64) {
        self.parameter_mut(id).set_value(value);
    }

    pub fn set_parameter_by_name(&mut self, name: &str, value: f64) -> Result<(), SimError> {
        self.set_parameter(name.parse()?, value);
        Ok(())
    }

    /// Signed velocity.
    pub fn get_turned_velocity(&self) -> f64 {
        self.parameter(ParameterId::Velocity).get_turned_value()
    }

    /// Direction of travel: `1` forward, `-1` reverse, `0` at rest.
    pub fn get_turn(&self) -> i8 {
        self.parameter(ParameterId::Velocity).get_turn()
    }

    /// Pressure the table started the craft at. Destined height is measured from it.
    pub fn initial_pressure(&self) -> f64 {
        self.initial_pressure
    }

    pub fn distance_travelled(&self) -> f64 {
        self.distance_travelled
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Every current value by name. Debugging aid only.
    pub fn dump(&self) -> BTreeMap<&'static str, f64> {
        ParameterId::ALL
            .into_iter()
            .map(|id| (id.as_str(), self.get_parameter(id)))
            .collect()
    }

    pub fn snapshot(&self) -> CraftSnapshot {
        CraftSnapshot {
            parameters: self
                .dump()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            distance_travelled: self.distance_travelled,
            crashed: self.crashed,
        }
    }

    fn register_crash(&mut self, id: ParameterId, delta: f64) {
        if !self.crashed {
            warn!(
                "Craft crashed: {} changed by {} from above the ground",
                id, delta
            );
        }
        self.crashed = true;
    }
}

/// Serializable dump of a craft, for logs and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftSnapshot {
    pub parameters: BTreeMap<String, f64>,
    pub distance_travelled: f64,
    pub crashed: bool,
}

impl CraftSnapshot {
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
