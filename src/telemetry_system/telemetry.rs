use crate::control::propulsion::MotorState;
use crate::control::rocket::Body;
use crate::trajectory_system::kinematics::StepOutcome;
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Default)]
pub struct Telemetry {
    pub log: Vec<String>,
    max_speed: f64,
    max_altitude: f64,
    max_acceleration: f64,
    burnout_time: Option<f64>,
    state_times: Vec<(MotorState, f64)>,
    simulation_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    fn format_vector3d(vec: &Vector3D, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}, z = {:.precision$}",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, body: &Body, outcome: &StepOutcome) {
        self.simulation_time += outcome.dt;
        let speed = body.speed();
        let altitude = body.altitude();
        let acceleration = outcome.acceleration.magnitude();
        let motor_state = outcome.thrust.motor_state();

        self.max_speed = self.max_speed.max(speed);
        self.max_altitude = self.max_altitude.max(altitude);
        self.max_acceleration = self.max_acceleration.max(acceleration);
        if motor_state == MotorState::BurnedOut && self.burnout_time.is_none() {
            self.burnout_time = Some(self.simulation_time);
        }

        let forces = &outcome.forces;
        let data = format!(
            "Time: {}\n\
                 Position: {}\n\
                 Velocity: {} (Speed: {:.2} m/s)\n\
                 Acceleration: {} (Magnitude: {:.2} m/s²)\n\
                 Thrust: {:.2} N ({:?})\n\
                 Magnus: {}\n\
                 Lift: {}\n\
                 Coriolis: {}\n",
            Self::format_time(self.simulation_time),
            Self::format_vector3d(&body.position, 2),
            Self::format_vector3d(&body.velocity, 2),
            speed,
            Self::format_vector3d(&outcome.acceleration, 2),
            acceleration,
            outcome.thrust.get_thrust(),
            motor_state,
            Self::format_vector3d(&forces.magnus, 2),
            Self::format_vector3d(&forces.lift, 2),
            Self::format_vector3d(&forces.coriolis, 2),
        );
        self.log.push(data);

        // Track motor state transitions
        match self.state_times.last() {
            Some((last_state, _)) if *last_state == motor_state => {}
            _ => self.state_times.push((motor_state, self.simulation_time)),
        }
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn burnout_time(&self) -> Option<f64> {
        self.burnout_time
    }

    pub fn state_transitions(&self) -> &[(MotorState, f64)] {
        &self.state_times
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Flight Summary ---");
        println!("Max Speed: {:.2} m/s", self.max_speed);
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        println!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
        match self.burnout_time {
            Some(time) => println!("Motor burnout at: {}", Self::format_time(time)),
            None => println!("Motor still burning"),
        }

        println!("\n--- Motor State Transitions ---");
        for (state, time) in &self.state_times {
            println!("State {:?} reached at: {}", state, Self::format_time(*time));
        }
    }
}
