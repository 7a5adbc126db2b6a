//! Overhead lift: from a deep squat with the bar at the hips to standing
//! with arms locked overhead, then back down.

use crate::animation::action::{LoopMode, Playback};
use crate::animation::blend::PoseBlend;
use crate::animation::pose::{JointId, Pose, PoseParam};
use crate::animation::routines::PoseSource;

/// Outward shoulder shift for a wide grip.
const GRIP_REACH: f32 = 0.12;

pub const LIFT_START: Pose = Pose::REST
    .with_angle(JointId::HipL, 1.1)
    .with_angle(JointId::HipR, 1.1)
    .with_angle(JointId::KneeL, -1.6)
    .with_angle(JointId::KneeR, -1.6)
    .with_angle(JointId::BodyLean, 0.5)
    .with_offset(PoseParam::RootY, -0.35)
    .with_offset(PoseParam::ReachL, GRIP_REACH)
    .with_offset(PoseParam::ReachR, GRIP_REACH);

pub const LIFT_END: Pose = Pose::REST
    .with_angle(JointId::ShoulderL, 3.0)
    .with_angle(JointId::ShoulderR, 3.0)
    .with_angle(JointId::HeadTilt, -0.15)
    .with_offset(PoseParam::ReachL, GRIP_REACH)
    .with_offset(PoseParam::ReachR, GRIP_REACH);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftRoutine {
    pub blend: PoseBlend,
    pub playback: Playback,
}

impl LiftRoutine {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            blend: PoseBlend::new(LIFT_START, LIFT_END),
            playback: Playback::new(duration, LoopMode::PingPong),
        }
    }
}

impl Default for LiftRoutine {
    fn default() -> Self {
        Self::new(2.5)
    }
}

impl PoseSource for LiftRoutine {
    fn pose_at(&self, elapsed: f32) -> Pose {
        self.blend.sample(self.playback.progress(elapsed))
    }

    fn name(&self) -> &'static str {
        "lifting"
    }
}
