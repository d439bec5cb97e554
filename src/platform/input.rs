//! Pointer path drafting
//!
//! A drag that starts on an aircraft collects points into a draft; releasing
//! the pointer turns the draft into a path assignment.

use glam::Vec2;

use crate::sim::AircraftId;

/// In-progress drag for one aircraft
#[derive(Debug, Clone, Default)]
pub struct PathDraft {
    target: Option<AircraftId>,
    points: Vec<Vec2>,
    min_segment: f32,
}

impl PathDraft {
    pub fn new(min_segment: f32) -> Self {
        Self {
            target: None,
            points: Vec::new(),
            min_segment,
        }
    }

    /// Start a fresh draft for `id`, discarding any previous one
    pub fn begin(&mut self, id: AircraftId) {
        self.target = Some(id);
        self.points.clear();
    }

    /// Record a drag point if it is at least `min_segment` from the last one
    ///
    /// Ignored when no drag is active. Returns whether the point was kept.
    pub fn extend(&mut self, point: Vec2) -> bool {
        if self.target.is_none() {
            return false;
        }
        let keep = self
            .points
            .last()
            .is_none_or(|last| last.distance(point) >= self.min_segment);
        if keep {
            self.points.push(point);
        }
        keep
    }

    /// End the drag; yields the target and its points when any were drawn
    pub fn finish(&mut self) -> Option<(AircraftId, Vec<Vec2>)> {
        let target = self.target.take()?;
        let points = std::mem::take(&mut self.points);
        if points.is_empty() {
            None
        } else {
            Some((target, points))
        }
    }

    /// Drop any drag in progress
    pub fn cancel(&mut self) {
        self.target = None;
        self.points.clear();
    }

    pub fn target(&self) -> Option<AircraftId> {
        self.target
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }
}
