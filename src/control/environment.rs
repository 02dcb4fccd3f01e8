use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, CORIOLIS_COEFFICIENT, GRAVITY, LIFT_COEFFICIENT, WIND,
};
use crate::errors::{SimulationError, SimulationResult};
use crate::utils::vector3d::Vector3D;

/// Per-run atmosphere and planet constants. Never mutated by integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentConstants {
    pub gravity: f64,
    pub air_density: f64,
    pub lift_coefficient: f64,
    pub coriolis_coefficient: f64,
    pub wind: Vector3D,
}

impl Default for EnvironmentConstants {
    fn default() -> Self {
        EnvironmentConstants {
            gravity: GRAVITY,
            air_density: AIR_DENSITY_SEA_LEVEL,
            lift_coefficient: LIFT_COEFFICIENT,
            coriolis_coefficient: CORIOLIS_COEFFICIENT,
            wind: Vector3D::from_tuple(WIND),
        }
    }
}

impl EnvironmentConstants {
    pub fn new(
        gravity: f64,
        air_density: f64,
        lift_coefficient: f64,
        coriolis_coefficient: f64,
        wind: Vector3D,
    ) -> SimulationResult<Self> {
        let environment = EnvironmentConstants {
            gravity,
            air_density,
            lift_coefficient,
            coriolis_coefficient,
            wind,
        };
        environment.validate()?;
        Ok(environment)
    }

    /// Vacuum with no wind, only gravity acting.
    pub fn vacuum(gravity: f64) -> Self {
        EnvironmentConstants {
            gravity,
            air_density: 0.0,
            lift_coefficient: 0.0,
            coriolis_coefficient: 0.0,
            wind: Vector3D::ZERO,
        }
    }

    pub fn validate(&self) -> SimulationResult<()> {
        let scalars = [
            ("gravity", self.gravity),
            ("air density", self.air_density),
            ("lift coefficient", self.lift_coefficient),
            ("coriolis coefficient", self.coriolis_coefficient),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidArgument(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.air_density < 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "air density cannot be negative, got {}",
                self.air_density
            )));
        }
        if !self.wind.is_finite() {
            return Err(SimulationError::InvalidArgument(format!(
                "wind must be finite, got {:?}",
                self.wind
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_matches_sea_level_demo_conditions() {
        let environment = EnvironmentConstants::default();
        assert_abs_diff_eq!(environment.gravity, 9.81, epsilon = 1e-12);
        assert_abs_diff_eq!(environment.air_density, 1.225, epsilon = 1e-12);
        assert_abs_diff_eq!(environment.lift_coefficient, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(environment.coriolis_coefficient, 0.0001, epsilon = 1e-12);
        assert_eq!(environment.wind, Vector3D::new(5.0, 0.0, -3.0));
        assert!(environment.validate().is_ok());
    }

    #[test]
    fn test_vacuum_has_no_air() {
        let environment = EnvironmentConstants::vacuum(1.62);
        assert_eq!(environment.air_density, 0.0);
        assert_eq!(environment.wind, Vector3D::ZERO);
        assert!(environment.validate().is_ok());
    }

    #[test]
    fn test_negative_air_density_is_rejected() {
        let result = EnvironmentConstants::new(9.81, -1.0, 0.5, 0.0, Vector3D::ZERO);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let result = EnvironmentConstants::new(f64::NAN, 1.225, 0.5, 0.0, Vector3D::ZERO);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));

        let result = EnvironmentConstants::new(
            9.81,
            1.225,
            0.5,
            0.0,
            Vector3D::new(f64::INFINITY, 0.0, 0.0),
        );
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }
}
