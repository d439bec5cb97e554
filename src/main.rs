//! Radar Vector headless runner
//!
//! Plays a round on a 60 Hz manual clock with a simple autopilot that clears
//! every new arrival onto the nearer runway final, then prints the last
//! snapshot as JSON.
//!
//! Usage: `radar-vector [settings.json] [seed] [max_frames]`

use std::collections::HashSet;

use glam::Vec2;

use radar_vector::platform::ManualClock;
use radar_vector::sim::{AircraftId, GameEvent, GamePhase};
use radar_vector::{Game, Settings, angle_to_vector};

/// Distance from the runway center of the final approach fix
const FINAL_FIX_DISTANCE: f32 = 90.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next().filter(|a| a != "-") {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * 5);

    log::info!("Radar Vector (headless) starting, seed {seed}");

    let mut game = Game::with_clock(settings, seed, ManualClock::sixty_hz());
    let mut cleared: HashSet<AircraftId> = HashSet::new();
    game.start();

    for _ in 0..max_frames {
        for event in game.frame() {
            if let GameEvent::Spawned { id, .. } = event {
                let position = game.state().find(id).map(|a| a.position);
                if let Some(position) = position {
                    let path = approach_path(game.settings(), position);
                    game.assign_path(id, path);
                    cleared.insert(id);
                }
            }
        }
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished after {} ticks: score {}, landed {}, crashed {}, cleared {}",
        game.state().time_ticks,
        snapshot.score,
        snapshot.landed,
        snapshot.crashed,
        cleared.len()
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("cannot serialize snapshot: {e}");
            std::process::exit(1);
        }
    }
}

/// Final approach fix on the nearer runway end, then the threshold
fn approach_path(settings: &Settings, from: Vec2) -> Vec<Vec2> {
    let axis = angle_to_vector(settings.runway_heading) * FINAL_FIX_DISTANCE;
    // Landing along the heading means arriving from behind it
    let fix_a = settings.runway_center - axis;
    let fix_b = settings.runway_center + axis;
    let fix = if from.distance(fix_a) <= from.distance(fix_b) {
        fix_a
    } else {
        fix_b
    };
    vec![fix, settings.runway_center]
}
