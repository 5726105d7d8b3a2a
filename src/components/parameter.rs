use serde::{Deserialize, Serialize};

use crate::utils::CRASH_THRESHOLD;

/// How a bounded parameter treats assignment and readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Clamped into `[min, max]`.
    Plain,
    /// Signed over `[-max, max]` internally, read out as a magnitude.
    Turned,
    /// Lives on a circle of circumference `max` and wraps instead of clamping.
    Directional,
    /// Clamped, but a large single-step drop from above the floor is a crash.
    Height,
}

/// Result of a [`Parameter::change`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// A soft change hit the snap position and was ignored.
    Held,
    Applied,
    /// The change was applied and was violent enough to crash the craft.
    Crashed,
}

/// A scalar confined to a range.
///
/// Every assignment goes through [`Parameter::set_value`], so out-of-range values are
/// clamped (or wrapped, for [`ParameterKind::Directional`]) rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    kind: ParameterKind,
    value: f64,
    min_value: f64,
    max_value: f64,
    snap_to: Option<f64>,
    step: Option<f64>,
    max_step: Option<f64>,
}

impl Default for Parameter {
    fn default() -> Self {
        Self::new(ParameterKind::Plain, 0.0, 0.0, 0.0)
    }
}

impl Parameter {
    pub fn new(kind: ParameterKind, value: f64, min_value: f64, max_value: f64) -> Self {
        let mut parameter = Self {
            kind,
            value: 0.0,
            min_value: 0.0,
            max_value: 0.0,
            snap_to: None,
            step: None,
            max_step: None,
        };
        parameter.set_range(min_value, max_value);
        parameter.set_value(value);
        parameter
    }

    pub fn with_snap(mut self, snap_to: f64) -> Self {
        self.snap_to = Some(snap_to);
        self
    }

    pub fn with_step(mut self, step: Option<f64>) -> Self {
        self.step = step;
        self
    }

    pub fn with_max_step(mut self, max_step: Option<f64>) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Input granularity, used by whatever maps keys to changes.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Largest change the update engine applies to this parameter in one tick.
    pub fn max_step(&self) -> Option<f64> {
        self.max_step
    }

    pub fn snap_to(&self) -> Option<f64> {
        self.snap_to
    }

    /// Sets the bounds and re-clamps the current value into them.
    ///
    /// A turned parameter only takes the magnitude bound: its internal range becomes
    /// `[-max, max]` and `min_value` is ignored.
    pub fn set_range(&mut self, min_value: f64, max_value: f64) {
        match self.kind {
            ParameterKind::Turned => {
                self.min_value = -max_value;
                self.max_value = max_value;
            }
            _ => {
                self.min_value = min_value;
                self.max_value = max_value;
            }
        }
        self.set_value(self.value);
    }

    /// Assigns a value, clamping or wrapping it into range. Never signals a crash.
    pub fn set_value(&mut self, value: f64) {
        self.value = match self.kind {
            ParameterKind::Directional => self.wrap(value),
            _ => self.clamp(value),
        };
    }

    /// Externally visible value: the magnitude for turned parameters, the raw value otherwise.
    pub fn get_value(&self) -> f64 {
        match self.kind {
            ParameterKind::Turned => self.value.abs(),
            _ => self.value,
        }
    }

    /// Raw signed value.
    pub fn get_turned_value(&self) -> f64 {
        self.value
    }

    /// Sign of the raw value as one of `-1`, `0`, `1`.
    pub fn get_turn(&self) -> i8 {
        if self.value > 0.0 {
            1
        } else if self.value < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Externally visible range. Turned parameters report `(0, max)`.
    pub fn get_range(&self) -> (f64, f64) {
        match self.kind {
            ParameterKind::Turned => (0.0, self.max_value),
            _ => (self.min_value, self.max_value),
        }
    }

    pub fn is_at_min(&self) -> bool {
        self.value == self.min_value
    }

    /// Applies `delta` to the raw value.
    ///
    /// A soft change (`hard == false`) leaves a parameter resting on its snap value
    /// untouched. Height parameters evaluate the crash condition against the value
    /// before the change is clamped.
    pub fn change(&mut self, delta: f64, hard: bool) -> ChangeOutcome {
        let crashed = self.kind == ParameterKind::Height
            && self.value > self.min_value
            && delta <= -CRASH_THRESHOLD;

        if !hard && self.snap_to == Some(self.value) {
            return if crashed {
                ChangeOutcome::Crashed
            } else {
                ChangeOutcome::Held
            };
        }

        self.set_value(self.value + delta);
        if crashed {
            ChangeOutcome::Crashed
        } else {
            ChangeOutcome::Applied
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        if value > self.max_value {
            self.max_value
        } else if value < self.min_value {
            self.min_value
        } else {
            value
        }
    }

    fn wrap(&self, value: f64) -> f64 {
        let span = self.max_value - self.min_value;
        if span <= 0.0 || !value.is_finite() {
            return self.min_value;
        }
        let wrapped = self.min_value + (value - self.min_value).rem_euclid(span);
        // rem_euclid can round up to exactly `span` for tiny negative inputs
        if wrapped >= self.max_value {
            self.min_value
        } else {
            wrapped
        }
    }
}
