// Trajectory table solver
use tracing::debug;

use crate::angle_calculations::{zero_angle, AngularCorrection, ZeroRangePolicy};
use crate::atmosphere::AtmosphericCorrection;
use crate::constants::MM_PER_METER;
use crate::error::BallisticsError;
use crate::inputs::TrajectoryInput;
use crate::integration::integrate;
use crate::trajectory_sampling::{
    round_to_int, round_to_places, sample_distances, TrajectorySample,
};
use crate::wind::WindComponents;

/// Engine-side knobs that are not part of the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolverOptions {
    pub zero_policy: ZeroRangePolicy,
    /// Upper bound on target and zero distance (meters); `None` = unbounded
    pub max_distance: Option<f64>,
}

// Trajectory solver
#[derive(Debug, Clone)]
pub struct TrajectorySolver {
    input: TrajectoryInput,
    options: SolverOptions,
}

impl TrajectorySolver {
    pub fn new(input: TrajectoryInput) -> Self {
        Self::with_options(input, SolverOptions::default())
    }

    pub fn with_options(input: TrajectoryInput, options: SolverOptions) -> Self {
        Self { input, options }
    }

    pub fn input(&self) -> &TrajectoryInput {
        &self.input
    }

    fn check_limits(&self) -> Result<(), BallisticsError> {
        let Some(limit) = self.options.max_distance else {
            return Ok(());
        };
        if self.input.target_distance > limit {
            return Err(BallisticsError::TargetTooFar {
                requested: self.input.target_distance,
                limit,
            });
        }
        if self.input.zero_range > limit {
            return Err(BallisticsError::invalid(
                "zeroRange",
                format!("must not exceed {limit} m, got {}", self.input.zero_range),
            ));
        }
        Ok(())
    }

    /// Compute the full table, muzzle row first.
    ///
    /// Every row is re-simulated from the muzzle rather than continued from
    /// the previous row, which keeps each row bit-for-bit reproducible on its
    /// own.
    pub fn solve(&self) -> Result<Vec<TrajectorySample>, BallisticsError> {
        let input = &self.input;
        input.validate()?;
        self.check_limits()?;

        let atmosphere = AtmosphericCorrection::new(
            input.ballistic_coefficient,
            input.temperature,
            input.altitude,
        )?;
        let corrected_bc = atmosphere.corrected_bc;
        let sight_height_m = input.sight_height_m();

        let zero = zero_angle(
            input.muzzle_velocity,
            corrected_bc,
            input.zero_range,
            sight_height_m,
            self.options.zero_policy,
        )?;
        let zero_slope = zero.tan();
        let wind = WindComponents::new(input.wind_speed, input.wind_angle);

        let mut samples = Vec::new();
        for distance in sample_distances(input.target_distance) {
            if distance == 0 {
                samples.push(self.muzzle_sample());
                continue;
            }

            let d = f64::from(distance);
            let state = integrate(distance, input.muzzle_velocity, corrected_bc, wind.headwind)?;

            let drift_m = wind.lag_drift(state.time, d, input.muzzle_velocity);
            let trajectory_rise = zero_slope * d;
            let drop_from_sight = state.drop - trajectory_rise + sight_height_m;
            let energy = 0.5 * input.bullet_mass_kg() * state.velocity * state.velocity;
            let correction = AngularCorrection::from_offset(drop_from_sight, d);

            samples.push(TrajectorySample {
                distance,
                velocity: round_to_int(state.velocity),
                energy: round_to_int(energy),
                drop: round_to_int(drop_from_sight * MM_PER_METER),
                wind_drift: round_to_int(drift_m * MM_PER_METER),
                time_of_flight: round_to_places(state.time, 3),
                moa: round_to_places(correction.moa, 1),
                mil: round_to_places(correction.mil, 1),
            });
        }

        debug!(
            rows = samples.len(),
            zero_angle_rad = zero,
            corrected_bc,
            "trajectory solved"
        );
        Ok(samples)
    }

    // At the muzzle the impact point sits one sight height below the sight line
    fn muzzle_sample(&self) -> TrajectorySample {
        let input = &self.input;
        let energy = 0.5 * input.bullet_mass_kg() * input.muzzle_velocity * input.muzzle_velocity;
        TrajectorySample {
            distance: 0,
            velocity: round_to_int(input.muzzle_velocity),
            energy: round_to_int(energy),
            drop: round_to_int(-input.sight_height),
            wind_drift: 0,
            time_of_flight: 0.0,
            moa: 0.0,
            mil: 0.0,
        }
    }
}

/// Compute a trajectory table with default solver options.
pub fn compute(input: &TrajectoryInput) -> Result<Vec<TrajectorySample>, BallisticsError> {
    TrajectorySolver::new(*input).solve()
}
