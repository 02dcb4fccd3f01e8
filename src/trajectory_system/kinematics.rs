use crate::{
    control::{environment::EnvironmentConstants, propulsion::ThrustState, rocket::Body},
    errors::{SimulationError, SimulationResult},
    utils::vector3d::Vector3D,
};

use super::forces::ForceBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntegratorConfig {
    /// Longest timestep the integrator will take; larger `dt` values are clamped.
    pub max_dt: Option<f64>,
}

/// Result of advancing a body by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub thrust: ThrustState,
    pub acceleration: Vector3D,
    pub forces: ForceBreakdown,
    /// The timestep actually integrated, after clamping.
    pub dt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightIntegrator {
    config: IntegratorConfig,
}

impl FlightIntegrator {
    pub fn new(config: IntegratorConfig) -> SimulationResult<Self> {
        if let Some(max_dt) = config.max_dt {
            if !max_dt.is_finite() || max_dt <= 0.0 {
                return Err(SimulationError::InvalidArgument(format!(
                    "max dt must be positive, got {max_dt}"
                )));
            }
        }
        Ok(FlightIntegrator { config })
    }

    pub fn with_max_dt(max_dt: f64) -> SimulationResult<Self> {
        Self::new(IntegratorConfig {
            max_dt: Some(max_dt),
        })
    }

    pub fn config(&self) -> IntegratorConfig {
        self.config
    }

    /// Advances `body` by `dt` seconds under thrust, gravity, magnus, lift and
    /// coriolis forces using semi-implicit Euler. Inputs are left untouched.
    pub fn step(
        &self,
        body: &Body,
        thrust: &ThrustState,
        environment: &EnvironmentConstants,
        dt: f64,
    ) -> SimulationResult<StepOutcome> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "dt must be finite and non-negative, got {dt}"
            )));
        }
        body.check_kinematics()?;
        environment.validate()?;

        let dt = match self.config.max_dt {
            Some(max_dt) => dt.min(max_dt),
            None => dt,
        };

        let thrust = thrust.decayed(dt);
        let forces = ForceBreakdown::calculate(body, thrust.get_thrust(), environment);
        let acceleration = forces.total() / body.mass();

        // Velocity first, then position from the updated velocity.
        let velocity = body.velocity + acceleration * dt;
        let position = body.position + velocity * dt;

        if !velocity.is_finite() || !position.is_finite() {
            return Err(SimulationError::PhysicsError(format!(
                "integration diverged: position {position:?}, velocity {velocity:?}"
            )));
        }

        Ok(StepOutcome {
            position,
            velocity,
            thrust,
            acceleration,
            forces,
            dt,
        })
    }

    /// Like [`FlightIntegrator::step`], but writes the result back into `body` and `thrust`.
    pub fn advance(
        &self,
        body: &mut Body,
        thrust: &mut ThrustState,
        environment: &EnvironmentConstants,
        dt: f64,
    ) -> SimulationResult<StepOutcome> {
        let outcome = self.step(body, thrust, environment, dt)?;
        body.position = outcome.position;
        body.velocity = outcome.velocity;
        *thrust = outcome.thrust;
        Ok(outcome)
    }
}
