//! Simulation tuning
//!
//! Every gameplay constant lives in one `Settings` value. Defaults come from
//! `crate::consts`; a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Wind;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings file {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Scope ===
    pub canvas_size: f32,
    pub radar_radius: f32,

    // === Runway ===
    pub runway_center: Vec2,
    /// Runway heading in radians (landing accepted from either end)
    pub runway_heading: f32,
    /// Length/width are carried for rendering only
    pub runway_length: f32,
    pub runway_width: f32,

    // === Traffic ===
    /// Spawns start this far outside the radar ring
    pub spawn_margin: f32,
    /// Max random deviation from a center-pointing initial heading (radians)
    pub spawn_heading_jitter: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Spawn cap
    pub max_aircraft: usize,
    pub spawn_interval_initial_ms: f32,
    pub spawn_interval_floor_ms: f32,
    pub spawn_interval_per_point_ms: f32,
    pub aircraft_radius: f32,
    pub initial_fuel: f32,

    // === Steering ===
    pub waypoint_arrival_radius: f32,
    pub turn_responsiveness: f32,

    // === Wind ===
    pub wind_push_factor: f32,
    pub wind_resample_ms: f32,
    pub wind_speed_min: f32,
    pub wind_speed_max: f32,
    pub initial_wind: Wind,

    // === Trails ===
    pub trail_length: usize,
    /// Per-tick probability of recording a trail point
    pub trail_sample_chance: f64,

    // === Rules ===
    pub collision_threshold: f32,
    /// Proximity alert fires inside `collision_threshold * proximity_alert_factor`
    pub proximity_alert_factor: f32,
    pub landing_threshold: f32,
    pub landing_angle_tolerance: f32,
    pub landing_score: u64,
    pub contact_margin: f32,

    // === Input ===
    pub pick_radius: f32,
    pub path_min_segment: f32,

    // === Cosmetic ===
    pub sweep_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            radar_radius: RADAR_RADIUS,

            runway_center: RUNWAY_CENTER,
            runway_heading: RUNWAY_HEADING,
            runway_length: RUNWAY_LENGTH,
            runway_width: RUNWAY_WIDTH,

            spawn_margin: SPAWN_MARGIN,
            spawn_heading_jitter: SPAWN_HEADING_JITTER,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            max_aircraft: MAX_AIRCRAFT,
            spawn_interval_initial_ms: SPAWN_INTERVAL_INITIAL_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            spawn_interval_per_point_ms: SPAWN_INTERVAL_PER_POINT_MS,
            aircraft_radius: AIRCRAFT_RADIUS,
            initial_fuel: INITIAL_FUEL,

            waypoint_arrival_radius: WAYPOINT_ARRIVAL_RADIUS,
            turn_responsiveness: TURN_RESPONSIVENESS,

            wind_push_factor: WIND_PUSH_FACTOR,
            wind_resample_ms: WIND_RESAMPLE_MS,
            wind_speed_min: WIND_SPEED_MIN,
            wind_speed_max: WIND_SPEED_MAX,
            initial_wind: Wind {
                direction: INITIAL_WIND_DIRECTION,
                speed: INITIAL_WIND_SPEED,
            },

            trail_length: TRAIL_LENGTH,
            trail_sample_chance: TRAIL_SAMPLE_CHANCE,

            collision_threshold: COLLISION_THRESHOLD,
            proximity_alert_factor: PROXIMITY_ALERT_FACTOR,
            landing_threshold: LANDING_THRESHOLD,
            landing_angle_tolerance: LANDING_ANGLE_TOLERANCE,
            landing_score: LANDING_SCORE,
            contact_margin: CONTACT_MARGIN,

            pick_radius: PICK_RADIUS,
            path_min_segment: PATH_MIN_SEGMENT,

            sweep_step: SWEEP_STEP,
        }
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
            SettingsError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.radar_radius <= 0.0 {
            return Err(invalid("radar_radius", "must be positive"));
        }
        if !(self.spawn_heading_jitter >= 0.0 && self.spawn_heading_jitter.is_finite()) {
            return Err(invalid(
                "spawn_heading_jitter",
                "must be finite and non-negative",
            ));
        }
        if !(self.speed_min > 0.0 && self.speed_min <= self.speed_max && self.speed_max.is_finite())
        {
            return Err(invalid(
                "speed_min",
                format!("need 0 < speed_min <= speed_max ({})", self.speed_max),
            ));
        }
        if !(self.wind_speed_min >= 0.0
            && self.wind_speed_min <= self.wind_speed_max
            && self.wind_speed_max.is_finite())
        {
            return Err(invalid(
                "wind_speed_min",
                format!(
                    "need 0 <= wind_speed_min <= wind_speed_max ({})",
                    self.wind_speed_max
                ),
            ));
        }
        if self.spawn_interval_floor_ms <= 0.0
            || self.spawn_interval_floor_ms > self.spawn_interval_initial_ms
        {
            return Err(invalid(
                "spawn_interval_floor_ms",
                "must be positive and not above spawn_interval_initial_ms",
            ));
        }
        if !(0.0..=1.0).contains(&self.turn_responsiveness) {
            return Err(invalid("turn_responsiveness", "must be within 0..=1"));
        }
        if !(0.0..=1.0).contains(&self.trail_sample_chance) {
            return Err(invalid("trail_sample_chance", "must be within 0..=1"));
        }
        if self.wind_resample_ms <= 0.0 {
            return Err(invalid("wind_resample_ms", "must be positive"));
        }
        Ok(())
    }

    /// Radius beyond which an aircraft loses contact and is lost
    #[inline]
    pub fn contact_radius(&self) -> f32 {
        self.radar_radius + self.contact_margin
    }

    /// Distance from the runway center at which new aircraft appear
    #[inline]
    pub fn spawn_radius(&self) -> f32 {
        self.radar_radius + self.spawn_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_aircraft, 12);
        assert_eq!(settings.contact_radius(), 500.0);
        assert_eq!(settings.spawn_radius(), 390.0);
        assert_eq!(settings.runway_center, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_partial_json_override() {
        let settings = Settings::from_json(r#"{ "max_aircraft": 4, "collision_threshold": 30.0 }"#)
            .expect("partial override parses");
        assert_eq!(settings.max_aircraft, 4);
        assert_eq!(settings.collision_threshold, 30.0);
        assert_eq!(settings.landing_threshold, LANDING_THRESHOLD);
    }

    #[test]
    fn test_rejects_inverted_speed_band() {
        let err = Settings::from_json(r#"{ "speed_min": 2.0, "speed_max": 1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "speed_min",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_heading_jitter() {
        let err = Settings::from_json(r#"{ "spawn_heading_jitter": -0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "spawn_heading_jitter",
                ..
            }
        ));

        let nan = Settings {
            spawn_heading_jitter: f32::NAN,
            ..Settings::default()
        };
        assert!(nan.validate().is_err());

        let straight = Settings::from_json(r#"{ "spawn_heading_jitter": 0.0 }"#)
            .expect("zero jitter is allowed");
        assert_eq!(straight.spawn_heading_jitter, 0.0);
    }

    #[test]
    fn test_rejects_unbounded_random_bands() {
        let fast = Settings {
            speed_max: f32::INFINITY,
            ..Settings::default()
        };
        assert!(matches!(
            fast.validate(),
            Err(SettingsError::Invalid {
                field: "speed_min",
                ..
            })
        ));

        let gusty = Settings {
            wind_speed_max: f32::NAN,
            ..Settings::default()
        };
        assert!(matches!(
            gusty.validate(),
            Err(SettingsError::Invalid {
                field: "wind_speed_min",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ max_aircraft: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
