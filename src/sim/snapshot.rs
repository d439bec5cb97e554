//! Read-only per-frame view for rendering and HUD
//!
//! Built from `GameState` after each frame; holds no references back into
//! the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::proximity_alert;
use super::state::{Aircraft, AircraftId, AircraftStatus, GamePhase, GameState, Wind};
use crate::settings::Settings;

/// One aircraft as the scope draws it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: AircraftId,
    pub callsign: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading: f32,
    pub status: AircraftStatus,
    /// Trail, oldest first
    pub trail: Vec<Vec2>,
    /// Remaining assigned waypoints
    pub planned_path: Vec<Vec2>,
    /// Other traffic inside the alert radius
    pub proximity_alert: bool,
    pub radius: f32,
    pub fuel: f32,
}

impl AircraftView {
    fn new(aircraft: &Aircraft, all: &[Aircraft], alert_radius: f32) -> Self {
        Self {
            id: aircraft.id,
            callsign: aircraft.callsign.clone(),
            position: aircraft.position,
            velocity: aircraft.velocity,
            heading: aircraft.heading,
            status: aircraft.status,
            trail: aircraft.history.iter().copied().collect(),
            planned_path: aircraft.target_path.iter().copied().collect(),
            proximity_alert: proximity_alert(aircraft, all, alert_radius),
            radius: aircraft.radius,
            fuel: aircraft.fuel,
        }
    }
}

/// Runway geometry for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayView {
    pub center: Vec2,
    pub heading: f32,
    pub length: f32,
    pub width: f32,
}

/// Path the operator is currently drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftView {
    pub id: AircraftId,
    pub points: Vec<Vec2>,
}

/// Everything rendering and UI need for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub landed: u32,
    pub crashed: u32,
    pub wind: Wind,
    pub sweep_angle: f32,
    pub radar_radius: f32,
    pub runway: RunwayView,
    pub aircraft: Vec<AircraftView>,
    pub draft: Option<DraftView>,
}

impl Snapshot {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        let alert_radius = settings.collision_threshold * settings.proximity_alert_factor;
        Self {
            phase: state.phase,
            score: state.score,
            landed: state.landed,
            crashed: state.crashed,
            wind: state.wind,
            sweep_angle: state.sweep_angle,
            radar_radius: settings.radar_radius,
            runway: RunwayView {
                center: settings.runway_center,
                heading: settings.runway_heading,
                length: settings.runway_length,
                width: settings.runway_width,
            },
            aircraft: state
                .aircraft
                .iter()
                .map(|a| AircraftView::new(a, &state.aircraft, alert_radius))
                .collect(),
            draft: None,
        }
    }

    /// Attach the in-progress drag path
    pub fn with_draft(mut self, draft: Option<DraftView>) -> Self {
        self.draft = draft;
        self
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::{aircraft_at, quiet_settings, running_state, test_id};

    #[test]
    fn test_capture_copies_state() {
        let settings = quiet_settings();
        let mut state = running_state(&settings);
        let mut a = aircraft_at(1, Vec2::new(100.0, 100.0));
        a.target_path.push_back(Vec2::new(150.0, 150.0));
        a.history.push_back(Vec2::new(99.0, 100.0));
        state.aircraft.push(a);
        state.aircraft.push(aircraft_at(2, Vec2::new(140.0, 100.0)));
        state.aircraft.push(aircraft_at(3, Vec2::new(600.0, 600.0)));
        state.score = 300;

        let snap = Snapshot::capture(&state, &settings);
        assert_eq!(snap.score, 300);
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.aircraft.len(), 3);
        assert_eq!(snap.aircraft[0].id, test_id(1));
        assert_eq!(snap.aircraft[0].planned_path, vec![Vec2::new(150.0, 150.0)]);
        assert_eq!(snap.aircraft[0].trail, vec![Vec2::new(99.0, 100.0)]);
        // 40 apart is inside 24 * 2.5
        assert!(snap.aircraft[0].proximity_alert);
        assert!(snap.aircraft[1].proximity_alert);
        assert!(!snap.aircraft[2].proximity_alert);
        assert!(snap.draft.is_none());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let settings = quiet_settings();
        let mut state = running_state(&settings);
        state.aircraft.push(aircraft_at(1, Vec2::new(100.0, 100.0)));

        let json = serde_json::to_string(&Snapshot::capture(&state, &settings))
            .expect("snapshot serializes");
        let back: Snapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(back.aircraft[0].callsign, "TS1");
        assert_eq!(back.phase, GamePhase::Running);
    }
}
