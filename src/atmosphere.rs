//! Atmospheric density correction for the ballistic coefficient.
//!
//! Published G1 coefficients are referenced to standard air (1.225 kg/m³ at
//! 15°C and sea level). Thinner air means less drag, which the engine models
//! as an effectively higher coefficient: `corrected_bc = bc / density_ratio`.

use tracing::debug;

use crate::constants::{
    BAROMETRIC_EXPONENT, BAROMETRIC_LAPSE_PER_FT, CELSIUS_TO_KELVIN, METERS_TO_FEET,
    STANDARD_AIR_DENSITY, STANDARD_PRESSURE_INHG, STANDARD_TEMP_K,
};
use crate::error::BallisticsError;

/// Station pressure in inches of mercury from the barometric formula.
///
/// The altitude is converted to feet because the formula's coefficients are
/// imperial. Beyond roughly 145,000 ft the base goes negative and the result
/// is NaN.
pub fn station_pressure_inhg(altitude_m: f64) -> f64 {
    let altitude_ft = altitude_m * METERS_TO_FEET;
    STANDARD_PRESSURE_INHG * (1.0 - BAROMETRIC_LAPSE_PER_FT * altitude_ft).powf(BAROMETRIC_EXPONENT)
}

/// Air density in kg/m³ for a temperature (°C) and altitude (m).
pub fn air_density(temperature_c: f64, altitude_m: f64) -> f64 {
    let temp_k = temperature_c + CELSIUS_TO_KELVIN;
    let pressure = station_pressure_inhg(altitude_m);
    STANDARD_AIR_DENSITY * (pressure / STANDARD_PRESSURE_INHG) * (STANDARD_TEMP_K / temp_k)
}

/// Density ratio and the ballistic coefficient corrected with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericCorrection {
    pub air_density: f64,
    pub density_ratio: f64,
    pub corrected_bc: f64,
}

impl AtmosphericCorrection {
    /// Build the correction, rejecting conditions where the density model
    /// breaks down instead of letting NaN reach the stepper.
    pub fn new(
        ballistic_coefficient: f64,
        temperature_c: f64,
        altitude_m: f64,
    ) -> Result<Self, BallisticsError> {
        let air_density = air_density(temperature_c, altitude_m);
        let density_ratio = air_density / STANDARD_AIR_DENSITY;

        if !density_ratio.is_finite() || density_ratio <= 0.0 {
            return Err(BallisticsError::invalid(
                "altitude",
                format!("{altitude_m} m is outside the barometric model (density ratio {density_ratio})"),
            ));
        }

        let corrected_bc = ballistic_coefficient / density_ratio;
        debug!(air_density, density_ratio, corrected_bc, "atmospheric correction");

        Ok(Self {
            air_density,
            density_ratio,
            corrected_bc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_conditions() {
        assert_relative_eq!(air_density(15.0, 0.0), 1.225, epsilon = 1e-12);
        let correction = AtmosphericCorrection::new(0.462, 15.0, 0.0).unwrap();
        assert_relative_eq!(correction.density_ratio, 1.0, epsilon = 1e-12);
        assert_relative_eq!(correction.corrected_bc, 0.462, epsilon = 1e-12);
    }

    #[test]
    fn test_pressure_drops_with_altitude() {
        let sea_level = station_pressure_inhg(0.0);
        let mountain = station_pressure_inhg(2000.0);
        assert_relative_eq!(sea_level, 29.92, epsilon = 1e-12);
        assert!(mountain < sea_level);
        // Roughly 23.5 inHg at 6,560 ft
        assert!((mountain - 23.5).abs() < 0.2);
    }

    #[test]
    fn test_thin_air_raises_bc() {
        let high = AtmosphericCorrection::new(0.5, 15.0, 1500.0).unwrap();
        assert!(high.density_ratio < 1.0);
        assert!(high.corrected_bc > 0.5);

        let hot = AtmosphericCorrection::new(0.5, 35.0, 0.0).unwrap();
        assert!(hot.corrected_bc > 0.5);

        let cold = AtmosphericCorrection::new(0.5, -10.0, 0.0).unwrap();
        assert!(cold.corrected_bc < 0.5);
    }

    #[test]
    fn test_below_sea_level() {
        let dead_sea = AtmosphericCorrection::new(0.5, 15.0, -400.0).unwrap();
        assert!(dead_sea.density_ratio > 1.0);
    }

    #[test]
    fn test_out_of_model_altitude() {
        let result = AtmosphericCorrection::new(0.5, 15.0, 60_000.0);
        assert!(matches!(
            result,
            Err(BallisticsError::InvalidInput { field: "altitude", .. })
        ));
    }
}
