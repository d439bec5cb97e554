// Shared fixtures for deterministic simulation tests.

use std::collections::VecDeque;

use glam::Vec2;

use super::state::{Aircraft, AircraftId, AircraftStatus, GamePhase, GameState, Wind};
use crate::settings::Settings;

// Far above anything the spawn counter hands out during a test run.
const TEST_ID_BASE: u64 = 1 << 48;

pub(crate) fn test_id(n: u64) -> AircraftId {
    AircraftId(TEST_ID_BASE + n)
}

/// Flying aircraft heading along +x at unit speed
pub(crate) fn aircraft_at(n: u64, position: Vec2) -> Aircraft {
    Aircraft {
        id: test_id(n),
        callsign: format!("TS{n}"),
        position,
        velocity: Vec2::ZERO,
        speed: 1.0,
        heading: 0.0,
        target_path: VecDeque::new(),
        status: AircraftStatus::Flying,
        history: VecDeque::new(),
        radius: 8.0,
        fuel: 100.0,
    }
}

/// Default rules with calm air and spawning disabled
pub(crate) fn quiet_settings() -> Settings {
    Settings {
        max_aircraft: 0,
        initial_wind: Wind::CALM,
        ..Settings::default()
    }
}

pub(crate) fn running_state(settings: &Settings) -> GameState {
    let mut state = GameState::new(42, settings);
    state.phase = GamePhase::Running;
    state
}
