use crate::constants::{
    CAMERA_LOOK_SPEED, CAMERA_MOVEMENT_SPEED, CAMERA_START_POSITION, CAMERA_START_TARGET,
};
use crate::errors::{SimulationError, SimulationResult};
use crate::utils::vector3d::Vector3D;

const KEY_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    Ascend,
    Descend,
}

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Forward,
        Key::Back,
        Key::StrafeLeft,
        Key::StrafeRight,
        Key::LookUp,
        Key::LookDown,
        Key::LookLeft,
        Key::LookRight,
        Key::Ascend,
        Key::Descend,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Boolean key-state queries supplied by whatever owns the input device.
pub trait KeyInput {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Pressed/released flag per key, updated from input events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; KEY_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pressed(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for key in keys {
            state.set(*key, true);
        }
        state
    }

    pub fn set(&mut self, key: Key, pressed_down: bool) {
        self.pressed[key.index()] = pressed_down;
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }
}

impl KeyInput for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3D,
    pub target: Vector3D,
    pub up: Vector3D,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Vector3D::from_tuple(CAMERA_START_POSITION),
            target: Vector3D::from_tuple(CAMERA_START_TARGET),
            up: Vector3D::UP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpeeds {
    pub movement: f64,
    pub look: f64,
}

impl Default for CameraSpeeds {
    fn default() -> Self {
        CameraSpeeds {
            movement: CAMERA_MOVEMENT_SPEED,
            look: CAMERA_LOOK_SPEED,
        }
    }
}

impl Camera {
    pub fn new(position: Vector3D, target: Vector3D, up: Vector3D) -> Self {
        Camera {
            position,
            target,
            up,
        }
    }

    pub fn forward(&self) -> Vector3D {
        (self.target - self.position).normalize()
    }

    /// Strafe axis, `forward x up`.
    pub fn side(&self) -> Vector3D {
        self.forward().cross(&self.up).normalize()
    }

    /// Moves the camera for every pressed key. Directions are taken from the
    /// camera as it was at the start of the frame, so keys compose additively.
    pub fn update(
        &mut self,
        input: &impl KeyInput,
        speeds: &CameraSpeeds,
        delta_time: f64,
    ) -> SimulationResult<()> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(SimulationError::InvalidArgument(format!(
                "camera dt must be finite and non-negative, got {delta_time}"
            )));
        }

        let forward = self.forward();
        let side = self.side();
        let step = speeds.movement * delta_time;
        let look = speeds.look * delta_time;

        let mut position = self.position;
        let mut target = self.target;

        for key in Key::ALL.into_iter().filter(|key| input.is_key_down(*key)) {
            match key {
                Key::Forward => {
                    position += forward * step;
                    target += forward * step;
                }
                Key::Back => {
                    position -= forward * step;
                    target -= forward * step;
                }
                Key::StrafeLeft => {
                    position += side * step;
                    target += side * step;
                }
                Key::StrafeRight => {
                    position -= side * step;
                    target -= side * step;
                }
                Key::LookUp => target.y += look,
                Key::LookDown => target.y -= look,
                Key::LookLeft => target.x -= look,
                Key::LookRight => target.x += look,
                Key::Ascend => {
                    position.y += step;
                    target.y += step;
                }
                Key::Descend => {
                    position.y -= step;
                    target.y -= step;
                }
            }
        }

        self.position = position;
        self.target = target;
        Ok(())
    }
}
