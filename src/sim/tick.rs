//! Simulation tick
//!
//! One call advances the round by one frame of real elapsed time. Ticks are
//! atomic: commands are applied at the boundary, never mid-step.

use glam::Vec2;
use rand::Rng;

use super::collision::detect_collisions;
use super::environment::{advance_spawn, advance_wind};
use super::landing::{can_land, is_out_of_contact};
use super::spawn::spawn_aircraft;
use super::state::{AircraftId, AircraftStatus, CrashCause, GameEvent, GamePhase, GameState};
use super::steering::{advance, steer};
use crate::settings::Settings;

/// Replace an aircraft's target path
#[derive(Debug, Clone, PartialEq)]
pub struct PathAssignment {
    pub id: AircraftId,
    pub waypoints: Vec<Vec2>,
}

/// Commands queued between ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Path assignments, applied in order
    pub assignments: Vec<PathAssignment>,
    /// Pause toggle
    pub pause: bool,
}

/// Replace the target path of a flying aircraft
///
/// Unknown or non-flying ids are ignored. Returns whether the path was set.
pub fn assign_path(state: &mut GameState, id: AircraftId, waypoints: &[Vec2]) -> bool {
    match state.find_mut(id) {
        Some(aircraft) if aircraft.is_flying() => {
            aircraft.target_path = waypoints.iter().copied().collect();
            log::debug!("{} {} cleared via {} waypoints", aircraft.callsign, id, waypoints.len());
            true
        }
        _ => false,
    }
}

/// Advance the round by one frame of `dt_ms` milliseconds
pub fn tick(
    state: &mut GameState,
    settings: &Settings,
    input: &TickInput,
    dt_ms: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return events;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    // Render-only while paused, game over or not yet started
    if !state.is_simulating() {
        return events;
    }

    for assignment in &input.assignments {
        if assign_path(state, assignment.id, &assignment.waypoints) {
            events.push(GameEvent::PathAssigned {
                id: assignment.id,
                waypoints: assignment.waypoints.len(),
            });
        }
    }

    state.time_ticks += 1;

    // Wind
    if let Some(wind) = advance_wind(&mut state.wind_timer_ms, dt_ms, &mut state.rng, settings) {
        log::info!(
            "Wind now {:.0}° at {:.1}",
            wind.direction.to_degrees(),
            wind.speed
        );
        state.wind = wind;
        events.push(GameEvent::WindChanged(wind));
    }

    // Spawning
    if advance_spawn(
        &mut state.spawn_timer_ms,
        dt_ms,
        state.score,
        state.aircraft.len(),
        settings,
    ) {
        let aircraft = spawn_aircraft(&mut state.rng, settings);
        log::debug!(
            "Spawned {} {} at ({:.0}, {:.0})",
            aircraft.callsign,
            aircraft.id,
            aircraft.position.x,
            aircraft.position.y
        );
        events.push(GameEvent::Spawned {
            id: aircraft.id,
            callsign: aircraft.callsign.clone(),
        });
        state.aircraft.push(aircraft);
    }

    // Movement, contact and landing
    let wind = state.wind;
    let mut lost_contact = false;
    for aircraft in state.aircraft.iter_mut().filter(|a| a.is_flying()) {
        steer(aircraft, settings);
        advance(aircraft, wind, settings);

        if is_out_of_contact(aircraft, settings) {
            aircraft.status = AircraftStatus::Crashed;
            state.crashed += 1;
            lost_contact = true;
            log::warn!("Lost contact with {} {}", aircraft.callsign, aircraft.id);
            events.push(GameEvent::Crashed {
                id: aircraft.id,
                cause: CrashCause::LostContact,
            });
            continue;
        }

        if state.rng.random_bool(settings.trail_sample_chance) {
            aircraft.record_trail(settings.trail_length);
        }

        if can_land(aircraft, settings) {
            aircraft.status = AircraftStatus::Landed;
            state.score += settings.landing_score;
            state.landed += 1;
            log::info!(
                "{} {} landed, score {}",
                aircraft.callsign,
                aircraft.id,
                state.score
            );
            events.push(GameEvent::Landed { id: aircraft.id });
        }
    }

    state.aircraft.retain(|a| a.status != AircraftStatus::Landed);

    // Separation
    let collided = detect_collisions(&state.aircraft, settings.collision_threshold);
    for aircraft in state
        .aircraft
        .iter_mut()
        .filter(|a| collided.contains(&a.id))
    {
        aircraft.status = AircraftStatus::Crashed;
        log::warn!("Mid-air collision: {} {}", aircraft.callsign, aircraft.id);
        events.push(GameEvent::Crashed {
            id: aircraft.id,
            cause: CrashCause::Collision,
        });
    }
    state.crashed += collided.len() as u32;

    if lost_contact || !collided.is_empty() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: score {}, landed {}, crashed {}",
            state.time_ticks,
            state.score,
            state.landed,
            state.crashed
        );
        events.push(GameEvent::GameOver);
    }

    state.sweep_angle = (state.sweep_angle + settings.sweep_step) % std::f32::consts::TAU;

    events
}
