use crate::{
    control::{environment::EnvironmentConstants, rocket::Body},
    utils::vector3d::Vector3D,
};

/// The five force contributions acting on a body during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceBreakdown {
    pub thrust: Vector3D,
    pub gravity: Vector3D,
    pub magnus: Vector3D,
    pub lift: Vector3D,
    pub coriolis: Vector3D,
}

impl ForceBreakdown {
    pub fn calculate(body: &Body, thrust_magnitude: f64, environment: &EnvironmentConstants) -> Self {
        let velocity = body.velocity;
        let relative_wind = velocity - environment.wind;

        ForceBreakdown {
            thrust: thrust_force(thrust_magnitude),
            gravity: gravity_force(body.mass(), environment),
            magnus: magnus_force(body, relative_wind, environment),
            lift: lift_force(velocity, relative_wind, environment),
            coriolis: coriolis_force(velocity, body.mass(), environment),
        }
    }

    pub fn total(&self) -> Vector3D {
        [self.thrust, self.gravity, self.magnus, self.lift, self.coriolis]
            .into_iter()
            .sum()
    }
}

/// Thrust along the fixed world up axis, not the body axis.
pub fn thrust_force(thrust_magnitude: f64) -> Vector3D {
    Vector3D::new(0.0, thrust_magnitude, 0.0)
}

pub fn gravity_force(mass: f64, environment: &EnvironmentConstants) -> Vector3D {
    Vector3D::new(0.0, -mass * environment.gravity, 0.0)
}

pub fn magnus_force(
    body: &Body,
    relative_wind: Vector3D,
    environment: &EnvironmentConstants,
) -> Vector3D {
    0.5 * environment.air_density
        * body.spin_rate()
        * body.radius()
        * body.velocity.cross(&relative_wind)
}

/// Zero when the relative wind is parallel to the velocity.
pub fn lift_force(
    velocity: Vector3D,
    relative_wind: Vector3D,
    environment: &EnvironmentConstants,
) -> Vector3D {
    let direction = relative_wind.cross(&velocity).normalize();
    environment.lift_coefficient
        * environment.air_density
        * relative_wind.magnitude_squared()
        * direction
}

pub fn coriolis_force(velocity: Vector3D, mass: f64, environment: &EnvironmentConstants) -> Vector3D {
    environment.coriolis_coefficient * mass * velocity.cross(&Vector3D::UP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn moving_body(velocity: Vector3D) -> Body {
        Body::new(Vector3D::ZERO, velocity, 500.0, 0.5, 20.0).unwrap()
    }

    #[test]
    fn test_thrust_points_up() {
        assert_eq!(thrust_force(1_000.0), Vector3D::new(0.0, 1_000.0, 0.0));
    }

    #[test]
    fn test_gravity_force() {
        let environment = EnvironmentConstants::default();
        let gravity = gravity_force(500.0, &environment);
        assert_abs_diff_eq!(gravity.y, -4_905.0, epsilon = 1e-9);
        assert_eq!(gravity.x, 0.0);
        assert_eq!(gravity.z, 0.0);
    }

    #[test]
    fn test_body_at_rest_feels_only_thrust_and_gravity() {
        let environment = EnvironmentConstants::default();
        let forces = ForceBreakdown::calculate(&Body::rocket(), 15_000.0, &environment);

        assert_eq!(forces.magnus, Vector3D::ZERO);
        assert_eq!(forces.coriolis, Vector3D::ZERO);
        // Velocity is zero so the lift direction is degenerate.
        assert_eq!(forces.lift, Vector3D::ZERO);
        assert_abs_diff_eq!(forces.total().y, 15_000.0 - 4_905.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lift_is_zero_when_wind_parallel_to_velocity() {
        let environment = EnvironmentConstants {
            wind: Vector3D::new(0.0, 4.0, 0.0),
            ..EnvironmentConstants::default()
        };
        let velocity = Vector3D::new(0.0, 10.0, 0.0);
        let lift = lift_force(velocity, velocity - environment.wind, &environment);

        assert_eq!(lift, Vector3D::ZERO);
        assert!(lift.is_finite());
    }

    #[test]
    fn test_lift_magnitude_and_direction() {
        let environment = EnvironmentConstants::default();
        let velocity = Vector3D::new(0.0, 10.0, 0.0);
        let relative_wind = velocity - environment.wind; // (-5, 10, 3)
        let lift = lift_force(velocity, relative_wind, &environment);

        let expected_magnitude = 0.5 * 1.225 * relative_wind.magnitude_squared();
        assert_abs_diff_eq!(lift.magnitude(), expected_magnitude, epsilon = 1e-9);
        assert_abs_diff_eq!(lift.dot(&velocity), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lift.dot(&relative_wind), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_magnus_force() {
        let environment = EnvironmentConstants::default();
        let body = moving_body(Vector3D::new(0.0, 10.0, 0.0));
        let relative_wind = body.velocity - environment.wind;
        let magnus = magnus_force(&body, relative_wind, &environment);

        // v x (v - w) = -(v x w) = -((0,10,0) x (5,0,-3)) = (30, 0, 50)
        let scale = 0.5 * 1.225 * 20.0 * 0.5;
        assert_abs_diff_eq!(magnus.x, scale * 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(magnus.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(magnus.z, scale * 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coriolis_is_horizontal() {
        let environment = EnvironmentConstants::default();
        let coriolis = coriolis_force(Vector3D::new(10.0, 5.0, 0.0), 500.0, &environment);

        // (10,5,0) x (0,1,0) = (0, 0, 10)
        assert_abs_diff_eq!(coriolis.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(coriolis.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(coriolis.z, 0.0001 * 500.0 * 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_spin_means_no_magnus() {
        let environment = EnvironmentConstants::default();
        let body = Body::new(Vector3D::ZERO, Vector3D::new(3.0, 4.0, 0.0), 500.0, 0.5, 0.0).unwrap();
        let forces = ForceBreakdown::calculate(&body, 0.0, &environment);
        assert_eq!(forces.magnus, Vector3D::ZERO);
    }
}
