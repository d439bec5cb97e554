//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, settings, commands and
//! frame times, a round plays out identically:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod environment;
pub mod landing;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod steering;
pub mod tick;

#[cfg(test)]
pub(crate) mod test_support;

pub use collision::{detect_collisions, nearest_traffic, proximity_alert};
pub use environment::{advance_spawn, advance_wind, sample_wind, spawn_interval_ms};
pub use landing::{approach_offset, can_land, is_aligned, is_out_of_contact};
pub use snapshot::{AircraftView, DraftView, RunwayView, Snapshot};
pub use spawn::{generate_callsign, next_aircraft_id, spawn_aircraft};
pub use state::{
    Aircraft, AircraftId, AircraftStatus, CrashCause, GameEvent, GamePhase, GameState, Wind,
};
pub use steering::{advance, steer, wind_drift};
pub use tick::{PathAssignment, TickInput, assign_path, tick};
