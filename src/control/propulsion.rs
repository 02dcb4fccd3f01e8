use crate::constants::{IGNITE_RATE, INITIAL_THRUST};
use crate::errors::{SimulationError, SimulationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Burning,
    BurnedOut,
}

/// Solid motor whose available thrust decays linearly until exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustState {
    remaining_thrust: f64,
    ignite_rate: f64,
}

impl Default for ThrustState {
    fn default() -> Self {
        ThrustState {
            remaining_thrust: INITIAL_THRUST,
            ignite_rate: IGNITE_RATE,
        }
    }
}

impl ThrustState {
    pub fn new(initial_thrust: f64, ignite_rate: f64) -> SimulationResult<Self> {
        if !initial_thrust.is_finite() || initial_thrust < 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "initial thrust must be finite and non-negative, got {initial_thrust}"
            )));
        }
        if !ignite_rate.is_finite() || ignite_rate < 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "ignite rate must be finite and non-negative, got {ignite_rate}"
            )));
        }
        Ok(ThrustState {
            remaining_thrust: initial_thrust,
            ignite_rate,
        })
    }

    pub fn burned_out() -> Self {
        ThrustState {
            remaining_thrust: 0.0,
            ignite_rate: IGNITE_RATE,
        }
    }

    /// Thrust left after burning for `delta_time` seconds, floored at zero.
    pub fn decayed(&self, delta_time: f64) -> Self {
        ThrustState {
            remaining_thrust: (self.remaining_thrust - delta_time * self.ignite_rate).max(0.0),
            ignite_rate: self.ignite_rate,
        }
    }

    pub fn get_thrust(&self) -> f64 {
        self.remaining_thrust
    }

    pub fn get_ignite_rate(&self) -> f64 {
        self.ignite_rate
    }

    pub fn motor_state(&self) -> MotorState {
        if self.remaining_thrust > 0.0 {
            MotorState::Burning
        } else {
            MotorState::BurnedOut
        }
    }

    pub fn is_burned_out(&self) -> bool {
        self.motor_state() == MotorState::BurnedOut
    }

    /// Seconds of burn left at the current decay rate.
    pub fn time_to_burnout(&self) -> f64 {
        if self.remaining_thrust == 0.0 {
            0.0
        } else if self.ignite_rate == 0.0 {
            f64::INFINITY
        } else {
            self.remaining_thrust / self.ignite_rate
        }
    }
}
