//! Meter-step Euler integration of velocity decay, time and drop.
//!
//! Both the zero solve and every reported sample use [`integrate`], so the
//! drop accumulation is identical between the two passes.

use crate::constants::{BC_DRAG_CONSTANT, G_ACCEL_MPS2, STEP_LENGTH_M};
use crate::error::BallisticsError;

/// Projectile state after a number of one-meter steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub velocity: f64, // m/s
    pub time: f64,     // s
    pub drop: f64,     // m, below the bore line
}

impl FlightState {
    pub fn at_muzzle(muzzle_velocity: f64) -> Self {
        FlightState {
            velocity: muzzle_velocity,
            time: 0.0,
            drop: 0.0,
        }
    }

    /// Advance the state by one meter.
    ///
    /// `headwind` is added to the bullet speed before computing drag; the
    /// zero pass passes 0.0.
    #[inline]
    pub fn step(&mut self, corrected_bc: f64, headwind: f64) {
        let dt = STEP_LENGTH_M / self.velocity;
        let relative_velocity = self.velocity + headwind;
        let drag_decel = (relative_velocity * relative_velocity) / (corrected_bc * BC_DRAG_CONSTANT);
        self.velocity -= drag_decel * dt;
        self.time += dt;
        // Literal reference accumulation, shared with the zero pass
        self.drop += 0.5 * G_ACCEL_MPS2 * dt * dt + G_ACCEL_MPS2 * self.time * dt;
    }
}

/// Integrate `steps` one-meter steps from the muzzle.
///
/// Fails if the velocity stops being finite and positive, which only happens
/// for coefficients far below any real projectile.
pub fn integrate(
    steps: u32,
    muzzle_velocity: f64,
    corrected_bc: f64,
    headwind: f64,
) -> Result<FlightState, BallisticsError> {
    let mut state = FlightState::at_muzzle(muzzle_velocity);
    for meter in 0..steps {
        state.step(corrected_bc, headwind);
        if !(state.velocity.is_finite() && state.velocity > 0.0) {
            return Err(BallisticsError::ProjectileStalled { distance: meter + 1 });
        }
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_steps_is_muzzle() {
        let state = integrate(0, 800.0, 0.5, 0.0).unwrap();
        assert_eq!(state, FlightState::at_muzzle(800.0));
    }

    #[test]
    fn test_single_step() {
        let state = integrate(1, 800.0, 0.5, 0.0).unwrap();
        let dt = 1.0 / 800.0;
        let decel = 800.0 * 800.0 / (0.5 * 14000.0);
        assert_relative_eq!(state.velocity, 800.0 - decel * dt, epsilon = 1e-12);
        assert_relative_eq!(state.time, dt, epsilon = 1e-15);
        assert_relative_eq!(state.drop, 0.5 * 9.81 * dt * dt + 9.81 * dt * dt, epsilon = 1e-15);
    }

    #[test]
    fn test_velocity_decays_geometrically() {
        // Without wind each meter multiplies velocity by (1 - 1 / (bc * k))
        let state = integrate(100, 800.0, 0.5, 0.0).unwrap();
        let factor: f64 = 1.0 - 1.0 / (0.5 * 14000.0);
        assert_relative_eq!(state.velocity, 800.0 * factor.powi(100), max_relative = 1e-10);
    }

    #[test]
    fn test_headwind_adds_drag() {
        let calm = integrate(300, 800.0, 0.45, 0.0).unwrap();
        let head = integrate(300, 800.0, 0.45, 10.0).unwrap();
        let tail = integrate(300, 800.0, 0.45, -10.0).unwrap();
        assert!(head.velocity < calm.velocity);
        assert!(tail.velocity > calm.velocity);
        assert!(head.time > calm.time);
    }

    #[test]
    fn test_matches_manual_loop() {
        let state = integrate(250, 823.0, 0.462, 1.5).unwrap();

        let mut velocity: f64 = 823.0;
        let mut time = 0.0;
        let mut drop = 0.0;
        for _ in 0..250 {
            let dt = 1.0 / velocity;
            let rel = velocity + 1.5;
            let decel = (rel * rel) / (0.462 * 14000.0);
            velocity -= decel * dt;
            time += dt;
            drop += 0.5 * 9.81 * dt * dt + 9.81 * time * dt;
        }
        assert_eq!(state.velocity.to_bits(), velocity.to_bits());
        assert_eq!(state.time.to_bits(), time.to_bits());
        assert_eq!(state.drop.to_bits(), drop.to_bits());
    }

    #[test]
    fn test_stall_detected() {
        // bc * k < 1 drives velocity negative on the first step
        let result = integrate(10, 800.0, 0.00005, 0.0);
        assert_eq!(result, Err(BallisticsError::ProjectileStalled { distance: 1 }));
    }
}
