use crate::constants::{ROCKET_MASS, ROCKET_RADIUS, ROCKET_SPIN_RATE};
use crate::errors::{SimulationError, SimulationResult};
use crate::utils::vector3d::Vector3D;

/// The simulated rocket. Mass, radius and spin are fixed for the whole run;
/// position and velocity evolve once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector3D,
    pub velocity: Vector3D,
    mass: f64,
    radius: f64,
    spin_rate: f64,
}

impl Body {
    pub fn new(
        position: Vector3D,
        velocity: Vector3D,
        mass: f64,
        radius: f64,
        spin_rate: f64,
    ) -> SimulationResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "mass must be positive, got {mass}"
            )));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "radius cannot be negative, got {radius}"
            )));
        }
        if !spin_rate.is_finite() {
            return Err(SimulationError::InvalidArgument(format!(
                "spin rate must be finite, got {spin_rate}"
            )));
        }
        let body = Body {
            position,
            velocity,
            mass,
            radius,
            spin_rate,
        };
        body.check_kinematics()?;
        Ok(body)
    }

    /// The demo rocket at rest on the pad.
    pub fn rocket() -> Self {
        Body {
            position: Vector3D::ZERO,
            velocity: Vector3D::ZERO,
            mass: ROCKET_MASS,
            radius: ROCKET_RADIUS,
            spin_rate: ROCKET_SPIN_RATE,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn spin_rate(&self) -> f64 {
        self.spin_rate
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub(crate) fn check_kinematics(&self) -> SimulationResult<()> {
        if !self.position.is_finite() {
            return Err(SimulationError::InvalidArgument(format!(
                "position must be finite, got {:?}",
                self.position
            )));
        }
        if !self.velocity.is_finite() {
            return Err(SimulationError::InvalidArgument(format!(
                "velocity must be finite, got {:?}",
                self.velocity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rocket_defaults() {
        let body = Body::rocket();
        assert_eq!(body.mass(), 500.0);
        assert_eq!(body.radius(), 0.5);
        assert_eq!(body.spin_rate(), 20.0);
        assert_eq!(body.position, Vector3D::ZERO);
        assert_eq!(body.speed(), 0.0);
    }

    #[test]
    fn test_non_positive_mass_is_rejected() {
        for mass in [0.0, -10.0, f64::NAN] {
            let result = Body::new(Vector3D::ZERO, Vector3D::ZERO, mass, 0.5, 0.0);
            assert!(
                matches!(result, Err(SimulationError::InvalidArgument(_))),
                "mass {mass} should be rejected"
            );
        }
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let result = Body::new(Vector3D::ZERO, Vector3D::ZERO, 1.0, -0.1, 0.0);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_radius_is_allowed() {
        assert!(Body::new(Vector3D::ZERO, Vector3D::ZERO, 1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_non_finite_kinematics_are_rejected() {
        let result = Body::new(
            Vector3D::new(0.0, f64::NAN, 0.0),
            Vector3D::ZERO,
            1.0,
            0.0,
            0.0,
        );
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));

        let result = Body::new(
            Vector3D::ZERO,
            Vector3D::new(f64::NEG_INFINITY, 0.0, 0.0),
            1.0,
            0.0,
            0.0,
        );
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }
}
