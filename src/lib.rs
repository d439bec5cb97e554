//! Radar Vector - An arcade air-traffic-control simulation
//!
//! Core modules:
//! - `sim`: Simulation core (steering, wind, collisions, landing, tick driver)
//! - `game`: Session controller (lifecycle, pointer commands, frame scheduling)
//! - `platform`: Pointer path drafting and frame clocks
//! - `settings`: Data-driven tuning loaded from JSON

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Default tuning constants (the values `Settings::default` is built from)
pub mod consts {
    use glam::Vec2;

    /// Scope dimensions
    pub const CANVAS_SIZE: f32 = 800.0;
    pub const RADAR_RADIUS: f32 = 380.0;

    /// Runway sits at the center of the scope, pointing up
    pub const RUNWAY_CENTER: Vec2 = Vec2::new(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0);
    pub const RUNWAY_LENGTH: f32 = 100.0;
    pub const RUNWAY_WIDTH: f32 = 12.0;
    pub const RUNWAY_HEADING: f32 = -std::f32::consts::FRAC_PI_2;

    /// Spawning
    pub const SPAWN_MARGIN: f32 = 10.0;
    pub const SPAWN_HEADING_JITTER: f32 = 0.5;
    pub const SPAWN_INTERVAL_INITIAL_MS: f32 = 2000.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 800.0;
    /// Spawn interval shrinks by this many ms per point of score
    pub const SPAWN_INTERVAL_PER_POINT_MS: f32 = 5.0;
    pub const MAX_AIRCRAFT: usize = 12;

    /// Aircraft kinematics (units per tick)
    pub const SPEED_MIN: f32 = 0.5;
    pub const SPEED_MAX: f32 = 1.2;
    pub const AIRCRAFT_RADIUS: f32 = 8.0;
    pub const INITIAL_FUEL: f32 = 100.0;

    /// Steering
    pub const WAYPOINT_ARRIVAL_RADIUS: f32 = 15.0;
    /// Fraction of the heading error corrected each tick
    pub const TURN_RESPONSIVENESS: f32 = 0.08;

    /// Wind
    pub const WIND_PUSH_FACTOR: f32 = 0.15;
    pub const WIND_RESAMPLE_MS: f32 = 15_000.0;
    pub const WIND_SPEED_MIN: f32 = 0.5;
    pub const WIND_SPEED_MAX: f32 = 3.0;
    pub const INITIAL_WIND_DIRECTION: f32 = std::f32::consts::FRAC_PI_4;
    pub const INITIAL_WIND_SPEED: f32 = 1.0;

    /// Trail rendering
    pub const TRAIL_LENGTH: usize = 8;
    pub const TRAIL_SAMPLE_CHANCE: f64 = 0.2;

    /// Separation and arrival rules
    pub const COLLISION_THRESHOLD: f32 = 24.0;
    pub const PROXIMITY_ALERT_FACTOR: f32 = 2.5;
    pub const LANDING_THRESHOLD: f32 = 20.0;
    pub const LANDING_ANGLE_TOLERANCE: f32 = 0.5; // radians
    pub const LANDING_SCORE: u64 = 100;
    /// Distance beyond the radar ring at which contact is lost
    pub const CONTACT_MARGIN: f32 = 120.0;

    /// Pointer handling
    pub const PICK_RADIUS: f32 = 40.0;
    pub const PATH_MIN_SEGMENT: f32 = 20.0;

    /// Cosmetic sweep advance per tick (radians)
    pub const SWEEP_STEP: f32 = 0.02;
}

/// Normalize angle to (-π, π] by repeated ±2π adjustment
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Wrap an angle difference via `atan2(sin, cos)` (robust for any magnitude)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.sin().atan2(angle.cos())
}

/// Unit vector pointing along `angle` (0 rad is +x)
#[inline]
pub fn angle_to_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of a vector (atan2). The zero vector maps to 0.
#[inline]
pub fn vector_to_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
