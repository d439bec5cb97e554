//! Runway arrival and loss-of-contact rules

use std::f32::consts::PI;

use super::state::Aircraft;
use crate::settings::Settings;
use crate::wrap_angle;

/// Signed heading offset from the runway heading, in (-π, π]
#[inline]
pub fn approach_offset(heading: f32, runway_heading: f32) -> f32 {
    wrap_angle(heading - runway_heading)
}

/// Aligned with the runway from either end
pub fn is_aligned(heading: f32, settings: &Settings) -> bool {
    let offset = approach_offset(heading, settings.runway_heading).abs();
    let tolerance = settings.landing_angle_tolerance;
    offset < tolerance || offset > PI - tolerance
}

/// Close enough to the runway center and aligned with it
pub fn can_land(aircraft: &Aircraft, settings: &Settings) -> bool {
    aircraft.position.distance(settings.runway_center) < settings.landing_threshold
        && is_aligned(aircraft.heading, settings)
}

/// Beyond radio range of the scope
pub fn is_out_of_contact(aircraft: &Aircraft, settings: &Settings) -> bool {
    aircraft.position.distance(settings.runway_center) > settings.contact_radius()
}
