//! Platform abstraction layer
//!
//! Keeps host concerns out of the simulation:
//! - Pointer drags turned into waypoint paths
//! - Frame timing (wall clock or manual stepping)

pub mod input;
pub mod time;

pub use input::PathDraft;
pub use time::{FrameClock, ManualClock, SystemClock};
