//! Session controller
//!
//! Owns the round state, the pending command queue and the frame clock.
//! Pointer and lifecycle commands are queued here and reach the simulation
//! only at the next tick boundary.

use glam::Vec2;

use crate::platform::{FrameClock, PathDraft, SystemClock};
use crate::settings::Settings;
use crate::sim::{
    AircraftId, DraftView, GameEvent, GamePhase, GameState, PathAssignment, Snapshot, TickInput,
    tick,
};

/// Seed increment between rounds
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// A playable session driven by a frame clock
pub struct Game<C: FrameClock = SystemClock> {
    settings: Settings,
    state: GameState,
    seed: u64,
    clock: C,
    /// Commands applied on the next tick
    input: TickInput,
    draft: PathDraft,
    last_frame_ms: f64,
}

impl Game<SystemClock> {
    /// Session on the wall clock
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_clock(settings, seed, SystemClock::new())
    }
}

impl<C: FrameClock> Game<C> {
    pub fn with_clock(settings: Settings, seed: u64, mut clock: C) -> Self {
        let last_frame_ms = clock.now_ms();
        Self {
            state: GameState::new(seed, &settings),
            draft: PathDraft::new(settings.path_min_segment),
            settings,
            seed,
            clock,
            input: TickInput::default(),
            last_frame_ms,
        }
    }

    /// Begin the first round (no-op once started)
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::NotStarted {
            return;
        }
        self.state.phase = GamePhase::Running;
        self.last_frame_ms = self.clock.now_ms();
        log::info!("Round started (seed {})", self.seed);
    }

    /// Discard the current round and start a fresh one
    pub fn restart(&mut self) {
        self.seed = self.seed.wrapping_add(SEED_STRIDE);
        self.state = GameState::new(self.seed, &self.settings);
        self.state.phase = GamePhase::Running;
        self.input = TickInput::default();
        self.draft.cancel();
        self.last_frame_ms = self.clock.now_ms();
        log::info!("Round restarted (seed {})", self.seed);
    }

    /// Queue a pause toggle; a second toggle before the next frame cancels it
    pub fn toggle_pause(&mut self) {
        if matches!(self.state.phase, GamePhase::Running | GamePhase::Paused) {
            self.input.pause = !self.input.pause;
        }
    }

    /// Grab the nearest flying aircraft under the pointer and start a path
    pub fn pointer_down(&mut self, point: Vec2) -> Option<AircraftId> {
        if self.state.phase != GamePhase::Running || self.input.pause {
            return None;
        }
        let id = self.state.pick(point, self.settings.pick_radius)?;
        self.draft.begin(id);
        Some(id)
    }

    pub fn pointer_drag(&mut self, point: Vec2) {
        self.draft.extend(point);
    }

    /// Commit the drawn path for the next tick
    pub fn pointer_up(&mut self) {
        if let Some((id, waypoints)) = self.draft.finish() {
            log::debug!("Queued {} waypoints for {}", waypoints.len(), id);
            self.input.assignments.push(PathAssignment { id, waypoints });
        }
    }

    /// Queue a path assignment directly (scripted control)
    pub fn assign_path(&mut self, id: AircraftId, waypoints: Vec<Vec2>) {
        self.input.assignments.push(PathAssignment { id, waypoints });
    }

    /// Run one frame: read the clock, apply queued commands, tick once
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let now = self.clock.now_ms();
        let dt_ms = (now - self.last_frame_ms).max(0.0) as f32;
        self.last_frame_ms = now;

        if self.state.phase == GamePhase::NotStarted {
            return Vec::new();
        }

        let pending = std::mem::take(&mut self.input);
        let events = tick(&mut self.state, &self.settings, &pending, dt_ms);

        match self.state.phase {
            // Hold path changes until the round resumes
            GamePhase::Paused => self.input.assignments = pending.assignments,
            GamePhase::GameOver => self.draft.cancel(),
            _ => {}
        }

        events
    }

    /// Read-only view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        let draft = self.draft.target().and_then(|id| {
            (!self.draft.points().is_empty()).then(|| DraftView {
                id,
                points: self.draft.points().to_vec(),
            })
        });
        Snapshot::capture(&self.state, &self.settings).with_draft(draft)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
