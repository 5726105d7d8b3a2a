// Convergence
pub const MINIMAL_STEP: f64 = 0.2; // Differences below this snap straight to the target
pub const HEIGHT_CHANGE_DIVIDER: f64 = 20.0;
pub const ACCELERATION_DIVIDER: f64 = 20.0;
pub const REVERSE_ACCELERATION_FACTOR: f64 = 3.0; // Reverse thrust and coasting use a slower curve
pub const DECELERATION_LIMIT: f64 = 0.3; // Max velocity loss per tick while coasting

// Terminal condition
pub const CRASH_THRESHOLD: f64 = 5.0; // Single-step height drop that counts as a crash

// Heading
pub const HEADING_DIVIDER: f64 = 1000.0; // degrees per tick = angular_velocity * velocity / divider

// Fuel curve: (|power| - cruise)^2 / divider + base
pub const FUEL_CRUISE_POWER: f64 = 50.0;
pub const FUEL_CURVE_DIVIDER: f64 = 125.0;
pub const FUEL_BASE_CONSUMPTION: f64 = 10.0;

// Fuel modifiers
pub const ACCELERATION_FUEL_DIVIDER: f64 = 2.0;
pub const DECELERATION_FUEL_DIVIDER: f64 = 4.0;
pub const PRESSURE_PER_1_FUEL_UNIT: f64 = 10.0;
pub const FUEL_CONSUMPTION_STEP: f64 = 5.0; // Used when the table has no max_step for fuel_consumption

// Distance and fuel burn
pub const DISTANCE_TIME_DIVIDER: f64 = 3_600_000.0; // ms per hour
pub const FUEL_DISTANCE_DIVIDER: f64 = 10.0;
