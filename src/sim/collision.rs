//! Separation checks between aircraft
//!
//! Pairwise O(n²) over flying aircraft; the spawn cap keeps n small.

use std::collections::BTreeSet;

use super::state::{Aircraft, AircraftId};

/// Ids of every flying aircraft closer than `threshold` to another flying one
///
/// Both members of a conflicting pair are reported. The boundary is strict:
/// exactly `threshold` apart is not a collision.
pub fn detect_collisions(aircraft: &[Aircraft], threshold: f32) -> BTreeSet<AircraftId> {
    let flying: Vec<&Aircraft> = aircraft.iter().filter(|a| a.is_flying()).collect();
    let mut crashed = BTreeSet::new();

    for (i, a) in flying.iter().enumerate() {
        for b in &flying[i + 1..] {
            if a.position.distance(b.position) < threshold {
                crashed.insert(a.id);
                crashed.insert(b.id);
            }
        }
    }

    crashed
}

/// Distance from `subject` to the nearest other flying aircraft
pub fn nearest_traffic(subject: &Aircraft, aircraft: &[Aircraft]) -> Option<f32> {
    aircraft
        .iter()
        .filter(|other| other.id != subject.id && other.is_flying())
        .map(|other| subject.position.distance(other.position))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Whether a flying aircraft has traffic inside `alert_radius`
pub fn proximity_alert(subject: &Aircraft, aircraft: &[Aircraft], alert_radius: f32) -> bool {
    subject.is_flying()
        && nearest_traffic(subject, aircraft).is_some_and(|d| d < alert_radius)
}
