// Unit conversion between the imperial inputs shooters often have and the
// metric units the engine works in
use serde::Serialize;

use crate::inputs::TrajectoryInput;
use crate::trajectory_sampling::TrajectorySample;

const FPS_TO_MPS: f64 = 0.3048;
const GRAINS_TO_GRAMS: f64 = 0.06479891;
const YARDS_TO_METERS: f64 = 0.9144;
const MPH_TO_MPS: f64 = 0.44704;
const INCHES_TO_MM: f64 = 25.4;
const FEET_TO_METERS: f64 = 0.3048;
const JOULES_TO_FT_LBF: f64 = 0.737562;

/// Unit system for input/output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

pub struct UnitConverter;

impl UnitConverter {
    // Input conversions (to metric)
    pub fn velocity_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * FPS_TO_MPS, // fps to m/s
        }
    }

    pub fn weight_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * GRAINS_TO_GRAMS, // grains to grams
        }
    }

    pub fn distance_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * YARDS_TO_METERS, // yards to meters
        }
    }

    pub fn wind_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * MPH_TO_MPS, // mph to m/s
        }
    }

    pub fn sight_height_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * INCHES_TO_MM, // inches to mm
        }
    }

    pub fn temperature_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => (val - 32.0) * 5.0 / 9.0, // °F to °C
        }
    }

    pub fn altitude_to_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * FEET_TO_METERS, // feet to meters
        }
    }

    // Output conversions (from metric)
    pub fn velocity_from_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val / FPS_TO_MPS,
        }
    }

    pub fn distance_from_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val / YARDS_TO_METERS,
        }
    }

    pub fn energy_from_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val * JOULES_TO_FT_LBF, // J to ft·lbf
        }
    }

    /// Drop and drift: mm, or inches for imperial.
    pub fn offset_from_metric(val: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => val,
            UnitSystem::Imperial => val / INCHES_TO_MM,
        }
    }

    /// Convert a request given in `units` to the engine's metric input.
    pub fn input_to_metric(input: &TrajectoryInput, units: UnitSystem) -> TrajectoryInput {
        TrajectoryInput {
            muzzle_velocity: Self::velocity_to_metric(input.muzzle_velocity, units),
            bullet_weight: Self::weight_to_metric(input.bullet_weight, units),
            ballistic_coefficient: input.ballistic_coefficient,
            zero_range: Self::distance_to_metric(input.zero_range, units),
            target_distance: Self::distance_to_metric(input.target_distance, units),
            wind_speed: Self::wind_to_metric(input.wind_speed, units),
            wind_angle: input.wind_angle,
            sight_height: Self::sight_height_to_metric(input.sight_height, units),
            temperature: Self::temperature_to_metric(input.temperature, units),
            altitude: Self::altitude_to_metric(input.altitude, units),
        }
    }
}

/// A table row expressed in a display unit system.
///
/// Angular corrections are unit-free and pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub distance: f64,
    pub velocity: f64,
    pub energy: f64,
    pub drop: f64,
    pub wind_drift: f64,
    pub time_of_flight: f64,
    pub moa: f64,
    pub mil: f64,
}

impl DisplayRow {
    pub fn from_sample(sample: &TrajectorySample, units: UnitSystem) -> Self {
        DisplayRow {
            distance: UnitConverter::distance_from_metric(f64::from(sample.distance), units),
            velocity: UnitConverter::velocity_from_metric(sample.velocity as f64, units),
            energy: UnitConverter::energy_from_metric(sample.energy as f64, units),
            drop: UnitConverter::offset_from_metric(sample.drop as f64, units),
            wind_drift: UnitConverter::offset_from_metric(sample.wind_drift as f64, units),
            time_of_flight: sample.time_of_flight,
            moa: sample.moa,
            mil: sample.mil,
        }
    }
}
