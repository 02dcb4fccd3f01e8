pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::audio::{AudioEngine, HeadlessAudio, LoopHandle};
pub use control::camera::{Camera, CameraSpeeds, Key, KeyInput, KeyState};
pub use control::environment::EnvironmentConstants;
pub use control::propulsion::{MotorState, ThrustState};
pub use control::rocket::Body;
pub use control::scene::{scatter_clouds, FlightScene, FrameClock, HeadlessNode, SceneNode};
pub use errors::{SimulationError, SimulationResult};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::forces::ForceBreakdown;
pub use trajectory_system::kinematics::{FlightIntegrator, IntegratorConfig, StepOutcome};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
