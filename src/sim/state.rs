//! Game state and core simulation types
//!
//! The tick driver is the only writer of `GameState`; everything else reads
//! it through `Snapshot`.

use std::collections::VecDeque;
use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `start`
    NotStarted,
    /// Active gameplay
    Running,
    /// Simulation frozen, rendering continues
    Paused,
    /// Round ended by a crash; only `restart` leaves this phase
    GameOver,
}

/// Stable aircraft identifier, never reused within a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AircraftId(pub u64);

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Aircraft status. Transitions only go `Flying -> Landed | Crashed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftStatus {
    Flying,
    /// Reserved for a multi-phase approach sequence; nothing enters it yet
    Landing,
    Landed,
    Crashed,
}

/// Why an aircraft was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Mid-air collision with another aircraft
    Collision,
    /// Strayed beyond the contact radius
    LostContact,
}

/// Wind affecting every aircraft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Direction the wind blows toward (radians)
    pub direction: f32,
    pub speed: f32,
}

impl Wind {
    pub const CALM: Wind = Wind {
        direction: 0.0,
        speed: 0.0,
    };
}

/// An aircraft on the scope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: AircraftId,
    pub callsign: String,
    pub position: Vec2,
    /// Displacement applied by the most recent tick (thrust + wind)
    pub velocity: Vec2,
    /// Distance covered per tick along the heading
    pub speed: f32,
    /// Heading in radians (0 = +x); not normalized
    pub heading: f32,
    /// Operator-assigned waypoints, consumed front to back
    pub target_path: VecDeque<Vec2>,
    pub status: AircraftStatus,
    /// Recent positions for trail rendering (oldest first)
    pub history: VecDeque<Vec2>,
    pub radius: f32,
    /// Carried for rendering; never consumed
    pub fuel: f32,
}

impl Aircraft {
    pub fn is_flying(&self) -> bool {
        self.status == AircraftStatus::Flying
    }

    /// Append the current position to the trail, evicting the oldest past `max_len`
    pub fn record_trail(&mut self, max_len: usize) {
        self.history.push_back(self.position);
        while self.history.len() > max_len {
            self.history.pop_front();
        }
    }
}

/// Events produced by a tick, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: AircraftId, callsign: String },
    PathAssigned { id: AircraftId, waypoints: usize },
    Landed { id: AircraftId },
    Crashed { id: AircraftId, cause: CrashCause },
    WindChanged(Wind),
    GameOver,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub landed: u32,
    pub crashed: u32,
    pub wind: Wind,
    /// Active aircraft in spawn order
    pub aircraft: Vec<Aircraft>,
    /// Milliseconds since the last wind resample
    pub wind_timer_ms: f32,
    /// Milliseconds since the last spawn attempt
    pub spawn_timer_ms: f32,
    /// Radar sweep angle in [0, 2π)
    pub sweep_angle: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh, not-yet-started round
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            seed,
            phase: GamePhase::NotStarted,
            score: 0,
            landed: 0,
            crashed: 0,
            wind: settings.initial_wind,
            aircraft: Vec::new(),
            wind_timer_ms: 0.0,
            spawn_timer_ms: 0.0,
            sweep_angle: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn find(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.id == id)
    }

    pub fn find_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.iter_mut().find(|a| a.id == id)
    }

    pub fn flying(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.iter().filter(|a| a.is_flying())
    }

    /// Nearest flying aircraft within `radius` of `point`
    pub fn pick(&self, point: Vec2, radius: f32) -> Option<AircraftId> {
        self.flying()
            .map(|a| (a.id, a.position.distance(point)))
            .filter(|(_, d)| *d < radius)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    pub fn is_simulating(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
