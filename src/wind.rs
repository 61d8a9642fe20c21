use std::f64::consts::PI;

/// Wind decomposed along and across the line of fire.
///
/// The angle is measured from the target: 0° is a pure headwind (blowing
/// from the target toward the shooter), 180° a pure tailwind and 90° a
/// full-value crosswind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindComponents {
    /// Along the bore, positive = headwind (m/s)
    pub headwind: f64,
    /// Across the bore, positive = toward positive drift (m/s)
    pub crosswind: f64,
}

impl WindComponents {
    pub fn new(speed_mps: f64, angle_deg: f64) -> Self {
        let angle_rad = angle_deg * PI / 180.0;
        WindComponents {
            headwind: speed_mps * angle_rad.cos(),
            crosswind: speed_mps * angle_rad.sin(),
        }
    }

    /// Lateral drift in meters by the lag-time method.
    ///
    /// Lag is the extra flight time compared with a bullet that kept its
    /// muzzle velocity all the way to `distance_m`.
    pub fn lag_drift(&self, time_of_flight: f64, distance_m: f64, muzzle_velocity: f64) -> f64 {
        let lag = time_of_flight - distance_m / muzzle_velocity;
        self.crosswind * lag
    }
}
