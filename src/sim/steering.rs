//! Path-following steering and movement
//!
//! Turn rate is exponential smoothing: each tick corrects a fixed fraction
//! (`turn_responsiveness`) of the heading error. Displacement is per tick, so
//! both are Euler steps tied to the frame cadence.

use glam::Vec2;

use super::state::{Aircraft, Wind};
use crate::settings::Settings;
use crate::{angle_to_vector, normalize_angle, vector_to_angle};

/// Turn toward the head of the target path, consuming it on arrival.
///
/// Returns `true` if a waypoint was reached this tick (no turn is applied).
pub fn steer(aircraft: &mut Aircraft, settings: &Settings) -> bool {
    let Some(&target) = aircraft.target_path.front() else {
        return false;
    };

    if aircraft.position.distance(target) < settings.waypoint_arrival_radius {
        aircraft.target_path.pop_front();
        return true;
    }

    let desired = vector_to_angle(target - aircraft.position);
    let delta = normalize_angle(desired - aircraft.heading);
    aircraft.heading += delta * settings.turn_responsiveness;
    false
}

/// Wind displacement applied to every aircraft per tick
#[inline]
pub fn wind_drift(wind: Wind, push_factor: f32) -> Vec2 {
    angle_to_vector(wind.direction) * wind.speed * push_factor
}

/// Move one tick along the heading plus wind drift; `velocity` records the step
pub fn advance(aircraft: &mut Aircraft, wind: Wind, settings: &Settings) {
    let thrust = angle_to_vector(aircraft.heading) * aircraft.speed;
    let step = thrust + wind_drift(wind, settings.wind_push_factor);
    aircraft.velocity = step;
    aircraft.position += step;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_support::aircraft_at;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_straight_flight_without_path() {
        let settings = Settings::default();
        let mut a = aircraft_at(1, Vec2::new(100.0, 100.0));
        assert!(!steer(&mut a, &settings));
        advance(&mut a, Wind::CALM, &settings);
        assert_eq!(a.heading, 0.0);
        assert!((a.position - Vec2::new(101.0, 100.0)).length() < 1e-5);
        assert!((a.velocity - Vec2::new(1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_turn_is_eight_percent_of_error() {
        let settings = Settings::default();
        let mut a = aircraft_at(1, Vec2::ZERO);
        a.target_path.push_back(Vec2::new(0.0, 100.0));
        steer(&mut a, &settings);
        assert!((a.heading - FRAC_PI_2 * 0.08).abs() < 1e-5);
        assert_eq!(a.target_path.len(), 1);
    }

    #[test]
    fn test_turn_takes_short_way_around() {
        let settings = Settings::default();
        let mut a = aircraft_at(1, Vec2::ZERO);
        // Facing just below -x, target just above -x: short turn crosses ±π
        a.heading = -PI + 0.1;
        a.target_path.push_back(Vec2::new(-100.0, 10.0));
        steer(&mut a, &settings);
        assert!(a.heading < -PI + 0.1, "should turn clockwise through π");
    }

    #[test]
    fn test_waypoint_consumed_on_arrival() {
        let settings = Settings::default();
        let mut a = aircraft_at(1, Vec2::ZERO);
        a.heading = 0.3;
        a.target_path.push_back(Vec2::new(10.0, 0.0));
        a.target_path.push_back(Vec2::new(200.0, 200.0));

        assert!(steer(&mut a, &settings));
        assert_eq!(a.target_path.front(), Some(&Vec2::new(200.0, 200.0)));
        // Arrival tick keeps the current heading
        assert_eq!(a.heading, 0.3);
    }

    #[test]
    fn test_wind_is_attenuated() {
        let settings = Settings::default();
        let mut a = aircraft_at(1, Vec2::ZERO);
        a.speed = 0.0;
        let wind = Wind {
            direction: FRAC_PI_2,
            speed: 2.0,
        };
        advance(&mut a, wind, &settings);
        assert!(a.position.x.abs() < 1e-5);
        assert!((a.position.y - 0.3).abs() < 1e-5);
    }
}
