// Trajectory input parameters and their validation
use serde::{Deserialize, Serialize};

use crate::constants::CELSIUS_TO_KELVIN;
use crate::error::BallisticsError;

/// Muzzle, cartridge, environment and geometry for a single computation.
///
/// Field names follow the JSON contract of the calculate endpoint
/// (`muzzleVelocity`, `bulletWeight`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryInput {
    pub muzzle_velocity: f64,       // m/s
    pub bullet_weight: f64,         // grams
    pub ballistic_coefficient: f64, // G1
    pub zero_range: f64,            // meters
    pub target_distance: f64,       // meters
    pub wind_speed: f64,            // m/s
    pub wind_angle: f64,            // degrees (0 = headwind, 90 = full value)
    pub sight_height: f64,          // mm
    pub temperature: f64,           // Celsius
    pub altitude: f64,              // meters
}

impl Default for TrajectoryInput {
    // .308 Win, 168 gr match bullet, 100 yd zero
    fn default() -> Self {
        Self {
            muzzle_velocity: 823.0,
            bullet_weight: 10.9,
            ballistic_coefficient: 0.462,
            zero_range: 91.0,
            target_distance: 457.0,
            wind_speed: 4.5,
            wind_angle: 90.0,
            sight_height: 38.0,
            temperature: 15.0,
            altitude: 0.0,
        }
    }
}

impl TrajectoryInput {
    /// Reject inputs that would make the stepping loop meaningless.
    ///
    /// `zero_range <= 0` is not checked here; it is handled by the zero
    /// range policy of the solver.
    pub fn validate(&self) -> Result<(), BallisticsError> {
        let fields = [
            ("muzzleVelocity", self.muzzle_velocity),
            ("bulletWeight", self.bullet_weight),
            ("ballisticCoefficient", self.ballistic_coefficient),
            ("zeroRange", self.zero_range),
            ("targetDistance", self.target_distance),
            ("windSpeed", self.wind_speed),
            ("windAngle", self.wind_angle),
            ("sightHeight", self.sight_height),
            ("temperature", self.temperature),
            ("altitude", self.altitude),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(BallisticsError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        let positive = [
            ("muzzleVelocity", self.muzzle_velocity),
            ("bulletWeight", self.bullet_weight),
            ("ballisticCoefficient", self.ballistic_coefficient),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(BallisticsError::invalid(
                    field,
                    format!("must be greater than zero, got {value}"),
                ));
            }
        }

        let non_negative = [
            ("targetDistance", self.target_distance),
            ("windSpeed", self.wind_speed),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(BallisticsError::invalid(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
        }

        if self.temperature <= -CELSIUS_TO_KELVIN {
            return Err(BallisticsError::invalid(
                "temperature",
                format!("must be above absolute zero, got {}", self.temperature),
            ));
        }

        Ok(())
    }

    /// Sight height above the bore axis in meters.
    pub fn sight_height_m(&self) -> f64 {
        self.sight_height / crate::constants::MM_PER_METER
    }

    /// Bullet mass in kilograms.
    pub fn bullet_mass_kg(&self) -> f64 {
        self.bullet_weight / crate::constants::GRAMS_PER_KG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TrajectoryInput::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_core_fields() {
        for velocity in [0.0, -10.0] {
            let input = TrajectoryInput {
                muzzle_velocity: velocity,
                ..Default::default()
            };
            match input.validate() {
                Err(BallisticsError::InvalidInput { field, .. }) => {
                    assert_eq!(field, "muzzleVelocity")
                }
                other => panic!("expected invalid muzzle velocity, got {other:?}"),
            }
        }

        let input = TrajectoryInput {
            ballistic_coefficient: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(BallisticsError::InvalidInput { field: "ballisticCoefficient", .. })
        ));

        let input = TrajectoryInput {
            bullet_weight: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(BallisticsError::InvalidInput { field: "bulletWeight", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let input = TrajectoryInput {
            altitude: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(BallisticsError::InvalidInput { field: "altitude", .. })
        ));

        let input = TrajectoryInput {
            wind_angle: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(BallisticsError::InvalidInput { field: "windAngle", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_distance_and_wind() {
        let input = TrajectoryInput {
            target_distance: -1.0,
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = TrajectoryInput {
            wind_speed: -0.5,
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_zero_range_not_checked() {
        let input = TrajectoryInput {
            zero_range: 0.0,
            sight_height: 0.0,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_rejects_absolute_zero() {
        let input = TrajectoryInput {
            temperature: -273.15,
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(BallisticsError::InvalidInput { field: "temperature", .. })
        ));
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{
            "muzzleVelocity": 823, "bulletWeight": 10.9, "ballisticCoefficient": 0.462,
            "zeroRange": 91, "targetDistance": 457, "windSpeed": 4.5, "windAngle": 90,
            "sightHeight": 38, "temperature": 15, "altitude": 0
        }"#;
        let input: TrajectoryInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, TrajectoryInput::default());
    }

    #[test]
    fn test_json_missing_field_rejected() {
        let json = r#"{"muzzleVelocity": 823}"#;
        assert!(serde_json::from_str::<TrajectoryInput>(json).is_err());
    }

    #[test]
    fn test_unit_helpers() {
        let input = TrajectoryInput::default();
        assert!((input.sight_height_m() - 0.038).abs() < 1e-12);
        assert!((input.bullet_mass_kg() - 0.0109).abs() < 1e-12);
    }
}
