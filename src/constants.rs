// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const LIFT_COEFFICIENT: f64 = 0.5;
pub const CORIOLIS_COEFFICIENT: f64 = 0.0001;
pub const WIND: (f64, f64, f64) = (5.0, 0.0, -3.0); // m/s

// Rocket Constants
pub const ROCKET_MASS: f64 = 500.0; // kg
pub const ROCKET_RADIUS: f64 = 0.5; // m
pub const ROCKET_SPIN_RATE: f64 = 20.0; // rad/s

// Propulsion Constants
pub const INITIAL_THRUST: f64 = 15_000.0; // N
pub const IGNITE_RATE: f64 = 2_000.0; // N/s of thrust decay (solid motor burn-out)

// Camera Constants
pub const CAMERA_MOVEMENT_SPEED: f64 = 100.0; // units/s
pub const CAMERA_LOOK_SPEED: f64 = 40.0; // units/s
pub const CAMERA_START_POSITION: (f64, f64, f64) = (0.0, 30.0, -40.0);
pub const CAMERA_START_TARGET: (f64, f64, f64) = (0.0, 5.0, 0.0);

// Scene Constants
pub const CLOUD_COUNT: usize = 10;
pub const ROCKET_SOUND_PATH: &str = "resources/rocket_sound.wav";

// Simulation Parameters
pub const FRAME_MILLIS: u64 = 16; // ms, one rendered frame (62.5 Hz)
pub const TIME_STEP: f64 = FRAME_MILLIS as f64 / 1000.0; // s
pub const MAX_FRAME_DT: f64 = 0.1; // s, longest frame the scene feeds the integrator
pub const MAX_SIMULATION_TIME: f64 = 30.0; // s
