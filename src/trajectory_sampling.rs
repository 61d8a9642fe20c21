use serde::{Deserialize, Serialize};

use crate::constants::{LONG_RANGE_INCREMENT_M, SHORT_RANGE_INCREMENT_M, SHORT_RANGE_LIMIT_M};

/// One row of the trajectory table, already rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectorySample {
    pub distance: u32,       // m
    pub velocity: i64,       // m/s
    pub energy: i64,         // J
    pub drop: i64,           // mm, positive = below line of sight
    pub wind_drift: i64,     // mm
    pub time_of_flight: f64, // s, 3 decimals
    pub moa: f64,            // 1 decimal
    pub mil: f64,            // 1 decimal
}

/// Reporting increment for a table out to `target_distance`.
pub fn sample_increment(target_distance: f64) -> u32 {
    if target_distance <= SHORT_RANGE_LIMIT_M {
        SHORT_RANGE_INCREMENT_M
    } else {
        LONG_RANGE_INCREMENT_M
    }
}

/// Reported distances: `0, inc, 2*inc, ...` up to and including the last
/// increment that does not pass `target_distance`.
///
/// The target itself is only reported when it falls on an increment; 457 m
/// yields a final row at 450 m.
pub fn sample_distances(target_distance: f64) -> impl Iterator<Item = u32> {
    let increment = sample_increment(target_distance);
    (0u32..)
        .step_by(increment as usize)
        .take_while(move |&d| f64::from(d) <= target_distance)
}

/// Round half toward positive infinity, the convention the published tables
/// were generated with (`-2.5` → `-2`, `2.5` → `3`).
///
/// Negative zero is normalized to zero.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    let rounded = if rounded - value == -0.5 { rounded + 1.0 } else { rounded };
    rounded + 0.0
}

/// Round to a whole number for the integer columns.
pub fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round to `places` decimal places.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    round_half_up(value * scale) / scale + 0.0
}
