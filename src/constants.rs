/// Physical and model constants used in trajectory calculations

/// Gravitational acceleration in m/s²
///
/// The engine uses the rounded 9.81 value rather than standard gravity
/// (9.80665). Zero solves and published tables depend on it, so it must
/// not be "corrected".
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Standard air density at sea level and 15°C (kg/m³)
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Standard temperature (15°C) in Kelvin
pub const STANDARD_TEMP_K: f64 = 288.15;

/// Offset between Celsius and Kelvin
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Standard sea-level pressure in inches of mercury
pub const STANDARD_PRESSURE_INHG: f64 = 29.92;

/// Barometric formula lapse coefficient (per foot)
pub const BAROMETRIC_LAPSE_PER_FT: f64 = 0.0000068756;

/// Barometric formula exponent
pub const BAROMETRIC_EXPONENT: f64 = 5.2559;

/// Conversion factor: meters to feet
pub const METERS_TO_FEET: f64 = 3.28084;

/// Metric drag proportionality constant for the simplified G1 retardation
///
/// Retardation = v² / (BC * BC_DRAG_CONSTANT), in m/s² for v in m/s.
///
/// Derivation: the imperial reference formula uses 166000 with yards and
/// feet per second. 166000 * 0.9144 (yd → m) * 0.3048² (fps² → (m/s)²)
/// lands near 14000, which is the empirically fitted value.
pub const BC_DRAG_CONSTANT: f64 = 14000.0;

/// Minutes of angle per radian, as used for sight corrections
pub const MOA_PER_RADIAN: f64 = 3438.0;

/// Milliradians per radian
pub const MIL_PER_RADIAN: f64 = 1000.0;

/// Millimeters per meter
pub const MM_PER_METER: f64 = 1000.0;

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Length of one integration sub-step (meters)
pub const STEP_LENGTH_M: f64 = 1.0;

/// Reporting increment for short tables (meters)
pub const SHORT_RANGE_INCREMENT_M: u32 = 25;

/// Reporting increment for long tables (meters)
pub const LONG_RANGE_INCREMENT_M: u32 = 50;

/// Target distances at or below this use the short-range increment (meters)
pub const SHORT_RANGE_LIMIT_M: f64 = 300.0;
