//! Utility Module
//!
//! - [`AnimationClock`]: host timestamps to animation seconds
//! - [`OrbitDrag`]: pointer drags to camera yaw/pitch

pub mod orbit_control;
pub mod time;

pub use orbit_control::OrbitDrag;
pub use time::AnimationClock;
