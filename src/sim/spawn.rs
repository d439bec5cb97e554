//! Aircraft spawning
//!
//! New traffic appears just outside the radar ring, pointed roughly at the
//! runway.

use std::collections::VecDeque;
use std::f32::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use super::state::{Aircraft, AircraftId, AircraftStatus};
use crate::settings::Settings;
use crate::{angle_to_vector, vector_to_angle};

const AIRLINES: [&str; 7] = ["UA", "AA", "DL", "SW", "BA", "LH", "AF"];

/// Returns a process-unique, monotonically increasing aircraft id.
///
/// Restarting a round never rewinds the counter, so ids are not reused.
pub fn next_aircraft_id() -> AircraftId {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    AircraftId(COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Airline code plus a three-digit flight number, e.g. `DL417`
pub fn generate_callsign(rng: &mut impl Rng) -> String {
    let airline = AIRLINES[rng.random_range(0..AIRLINES.len())];
    let number: u32 = rng.random_range(100..=999);
    format!("{airline}{number}")
}

/// Create a new aircraft on the spawn ring
///
/// `speed` and the initial `velocity` magnitude are drawn separately, so they
/// usually disagree until the first tick recomputes `velocity`.
pub fn spawn_aircraft(rng: &mut impl Rng, settings: &Settings) -> Aircraft {
    let angle = rng.random_range(0.0..TAU);
    let position = settings.runway_center + angle_to_vector(angle) * settings.spawn_radius();

    let jitter = settings.spawn_heading_jitter;
    let to_center = settings.runway_center - position;
    let heading = vector_to_angle(to_center) + rng.random_range(-jitter..=jitter);

    let velocity_magnitude = rng.random_range(settings.speed_min..=settings.speed_max);
    let speed = rng.random_range(settings.speed_min..=settings.speed_max);

    Aircraft {
        id: next_aircraft_id(),
        callsign: generate_callsign(rng),
        position,
        velocity: angle_to_vector(heading) * velocity_magnitude,
        speed,
        heading,
        target_path: VecDeque::new(),
        status: AircraftStatus::Flying,
        history: VecDeque::with_capacity(settings.trail_length + 1),
        radius: settings.aircraft_radius,
        fuel: settings.initial_fuel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_angle;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_on_ring_pointing_inward() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(3);

        for _ in 0..200 {
            let a = spawn_aircraft(&mut rng, &settings);
            let r = a.position.distance(settings.runway_center);
            assert!((r - 390.0).abs() < 0.01, "spawned at radius {r}");

            let inward = vector_to_angle(settings.runway_center - a.position);
            let off = normalize_angle(a.heading - inward).abs();
            assert!(off <= 0.5 + 1e-4, "heading off by {off}");

            assert!((0.5..=1.2).contains(&a.speed));
            let v = a.velocity.length();
            assert!((0.5 - 1e-4..=1.2 + 1e-4).contains(&v));
            assert!(a.is_flying());
            assert!(a.target_path.is_empty());
        }
    }

    #[test]
    fn test_zero_jitter_points_straight_at_runway() {
        let settings = Settings::from_json(r#"{ "spawn_heading_jitter": 0.0 }"#)
            .expect("zero jitter validates");
        let mut rng = Pcg32::seed_from_u64(5);

        for _ in 0..20 {
            let a = spawn_aircraft(&mut rng, &settings);
            let inward = vector_to_angle(settings.runway_center - a.position);
            assert!(normalize_angle(a.heading - inward).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ids_unique() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut ids: Vec<_> = (0..50).map(|_| spawn_aircraft(&mut rng, &settings).id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_callsign_format() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            let callsign = generate_callsign(&mut rng);
            let (airline, number) = callsign.split_at(2);
            assert!(AIRLINES.contains(&airline));
            let n: u32 = number.parse().expect("numeric flight number");
            assert!((100..=999).contains(&n));
        }
    }
}
