use tracing::{debug, warn};

use crate::constants::{MIL_PER_RADIAN, MOA_PER_RADIAN};
use crate::error::BallisticsError;
use crate::integration::integrate;

/// What to do when the zero range cannot define a zero angle (`<= 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroRangePolicy {
    /// Treat the sight line as parallel to the bore (zero angle 0)
    #[default]
    Parallel,
    /// Fail with `DegenerateZero`
    Reject,
}

/// Bore elevation (radians) that puts the trajectory on the sight line at
/// `zero_range`.
///
/// The zero pass steps `floor(zero_range) + 1` meters, one more than the
/// sample passes step for the same distance, and ignores the headwind
/// component entirely: the zero is a property of the rifle and sight, not of
/// today's wind.
pub fn zero_angle(
    muzzle_velocity: f64,
    corrected_bc: f64,
    zero_range: f64,
    sight_height_m: f64,
    policy: ZeroRangePolicy,
) -> Result<f64, BallisticsError> {
    if zero_range <= 0.0 {
        return match policy {
            ZeroRangePolicy::Parallel => {
                warn!(zero_range, "zero range is not positive, assuming sight parallel to bore");
                Ok(0.0)
            }
            ZeroRangePolicy::Reject => Err(BallisticsError::DegenerateZero { zero_range }),
        };
    }

    let steps = (zero_range.floor() as u32).saturating_add(1);
    let state = integrate(steps, muzzle_velocity, corrected_bc, 0.0)?;
    let angle = ((state.drop + sight_height_m) / zero_range).atan();

    debug!(
        zero_range,
        drop_m = state.drop,
        angle_rad = angle,
        "solved zero angle"
    );
    Ok(angle)
}

/// Angular sight correction for a drop (or drift) at a distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngularCorrection {
    pub moa: f64,
    pub mil: f64,
}

impl AngularCorrection {
    /// Small-angle correction: `offset / distance` radians.
    ///
    /// The distance must be positive; the muzzle sample never gets here.
    pub fn from_offset(offset_m: f64, distance_m: f64) -> Self {
        let angle_rad = offset_m / distance_m;
        AngularCorrection {
            moa: angle_rad * MOA_PER_RADIAN,
            mil: angle_rad * MIL_PER_RADIAN,
        }
    }
}
