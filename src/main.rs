use std::path::Path;

use rocket_flight::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut audio = HeadlessAudio::new();
    let engine_sound = audio.load_and_loop(Path::new(ROCKET_SOUND_PATH))?;

    let mut scene = FlightScene::new(&mut rand::thread_rng())?;
    let mut node = HeadlessNode::new();
    let mut clock = FrameClock::starting_at(0);
    let mut telemetry = Telemetry::new();
    let mut keys = KeyState::new();

    println!(
        "Rocket on the pad with {} clouds overhead. Ignition!",
        scene.clouds().len()
    );

    let mut now_ms = 0;
    let mut last_state = scene.thrust.motor_state();

    while scene.elapsed_time() < MAX_SIMULATION_TIME {
        now_ms += FRAME_MILLIS;
        let dt = clock.tick(now_ms)?;

        // Follow the rocket up for the first few seconds.
        keys.set(Key::Ascend, scene.elapsed_time() < 5.0);
        keys.set(Key::LookUp, scene.elapsed_time() < 5.0);

        match scene.frame(dt, &keys, &mut node) {
            Ok(outcome) => {
                telemetry.collect_data(&scene.body, &outcome);

                let state = outcome.thrust.motor_state();
                if state != last_state {
                    println!(
                        "Motor {:?} at t={:.2}s, altitude {:.1} m",
                        state,
                        scene.elapsed_time(),
                        scene.body.altitude()
                    );
                    last_state = state;
                }
            }
            Err(e) => {
                println!("Error during simulation step: {}", e);
                break;
            }
        }
    }

    audio.stop(engine_sound)?;
    telemetry.display_data();

    Ok(())
}
