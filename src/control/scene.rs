use rand::Rng;

use crate::constants::{CLOUD_COUNT, MAX_FRAME_DT};
use crate::control::{
    camera::{Camera, CameraSpeeds, KeyInput},
    environment::EnvironmentConstants,
    propulsion::ThrustState,
    rocket::Body,
};
use crate::errors::{SimulationError, SimulationResult};
use crate::trajectory_system::kinematics::{FlightIntegrator, StepOutcome};
use crate::utils::vector3d::Vector3D;

/// The visual node that mirrors the simulated body in a rendering engine.
pub trait SceneNode {
    fn set_position(&mut self, position: Vector3D) -> SimulationResult<()>;

    /// Optional hook for engines that orient the mesh along the flight path.
    fn face_along(&mut self, _velocity: Vector3D) -> SimulationResult<()> {
        Ok(())
    }
}

/// Scene node with no renderer behind it.
#[derive(Debug, Default, Clone)]
pub struct HeadlessNode {
    pub position: Vector3D,
    pub heading: Vector3D,
    pub updates: usize,
    detached: bool,
}

impl HeadlessNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the engine dropping the node; later updates fail.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    fn ensure_attached(&self) -> SimulationResult<()> {
        if self.detached {
            Err(SimulationError::SceneError(
                "rocket node is no longer attached to the scene".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl SceneNode for HeadlessNode {
    fn set_position(&mut self, position: Vector3D) -> SimulationResult<()> {
        self.ensure_attached()?;
        self.position = position;
        self.updates += 1;
        Ok(())
    }

    fn face_along(&mut self, velocity: Vector3D) -> SimulationResult<()> {
        self.ensure_attached()?;
        self.heading = velocity.normalize();
        Ok(())
    }
}

/// Turns a monotonic millisecond timer into per-frame `dt` in seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    then: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: u64) -> Self {
        FrameClock { then: Some(now_ms) }
    }

    pub fn tick(&mut self, now_ms: u64) -> SimulationResult<f64> {
        let dt = match self.then {
            None => 0.0,
            Some(then) if now_ms < then => {
                return Err(SimulationError::InvalidArgument(format!(
                    "timer went backwards from {then} ms to {now_ms} ms"
                )));
            }
            Some(then) => (now_ms - then) as f64 / 1000.0,
        };
        self.then = Some(now_ms);
        Ok(dt)
    }
}

/// Background cloud positions scattered above the launch pad.
pub fn scatter_clouds(rng: &mut impl Rng, count: usize) -> Vec<Vector3D> {
    (0..count)
        .map(|_| {
            Vector3D::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(300.0..350.0),
                rng.gen_range(-100.0..100.0),
            )
        })
        .collect()
}

pub struct FlightScene {
    pub body: Body,
    pub thrust: ThrustState,
    pub environment: EnvironmentConstants,
    pub camera: Camera,
    pub camera_speeds: CameraSpeeds,
    integrator: FlightIntegrator,
    clouds: Vec<Vector3D>,
    elapsed_time: f64,
}

impl FlightScene {
    /// The demo scene: rocket on the pad, default camera, clouds overhead.
    pub fn new(rng: &mut impl Rng) -> SimulationResult<Self> {
        let mut scene = FlightScene::with_parts(
            Body::rocket(),
            ThrustState::default(),
            EnvironmentConstants::default(),
            FlightIntegrator::with_max_dt(MAX_FRAME_DT)?,
        );
        scene.clouds = scatter_clouds(rng, CLOUD_COUNT);
        Ok(scene)
    }

    pub fn with_parts(
        body: Body,
        thrust: ThrustState,
        environment: EnvironmentConstants,
        integrator: FlightIntegrator,
    ) -> Self {
        FlightScene {
            body,
            thrust,
            environment,
            camera: Camera::default(),
            camera_speeds: CameraSpeeds::default(),
            integrator,
            clouds: Vec::new(),
            elapsed_time: 0.0,
        }
    }

    pub fn clouds(&self) -> &[Vector3D] {
        &self.clouds
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// One rendered frame: camera, then physics, then the visual node.
    /// Scene state is only committed once every step has succeeded.
    pub fn frame(
        &mut self,
        delta_time: f64,
        input: &impl KeyInput,
        node: &mut impl SceneNode,
    ) -> SimulationResult<StepOutcome> {
        let mut camera = self.camera;
        camera.update(input, &self.camera_speeds, delta_time)?;

        let outcome = self
            .integrator
            .step(&self.body, &self.thrust, &self.environment, delta_time)?;

        node.set_position(outcome.position)?;
        node.face_along(outcome.velocity)?;

        self.camera = camera;
        self.body.position = outcome.position;
        self.body.velocity = outcome.velocity;
        self.thrust = outcome.thrust;
        self.elapsed_time += outcome.dt;
        Ok(outcome)
    }
}
