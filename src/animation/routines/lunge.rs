//! Fencing lunge: a guard stance extending into a full lunge and back.
//!
//! The sword arm straightens and reaches forward only as the shoulder comes
//! up, so the elbow and reach follow the shoulder through a [`GatedBlend`]
//! instead of the shared progress.

use crate::animation::action::{LoopMode, Playback};
use crate::animation::blend::{GatedBlend, PoseBlend};
use crate::animation::pose::{JointId, Pose, PoseParam};
use crate::animation::routines::PoseSource;

pub const LUNGE_START: Pose = Pose::REST
    .with_angle(JointId::BodyLean, 0.1)
    .with_angle(JointId::ShoulderR, 0.6)
    .with_angle(JointId::ElbowR, 0.9)
    .with_angle(JointId::ShoulderL, -0.3)
    .with_angle(JointId::ElbowL, 1.2)
    .with_angle(JointId::HipR, 0.35)
    .with_angle(JointId::KneeR, -0.5)
    .with_angle(JointId::HipL, -0.25)
    .with_angle(JointId::KneeL, -0.4)
    .with_offset(PoseParam::RootY, -0.05);

pub const LUNGE_END: Pose = Pose::REST
    .with_angle(JointId::BodyLean, 0.25)
    .with_angle(JointId::ShoulderR, 1.5)
    .with_angle(JointId::ElbowR, 0.0)
    .with_angle(JointId::ShoulderL, -0.9)
    .with_angle(JointId::ElbowL, 0.3)
    .with_angle(JointId::HipR, 1.2)
    .with_angle(JointId::KneeR, -1.2)
    .with_angle(JointId::HipL, -0.7)
    .with_angle(JointId::KneeL, 0.0)
    .with_offset(PoseParam::RootY, -0.3)
    .with_offset(PoseParam::RootZ, 0.4)
    .with_offset(PoseParam::ReachR, -0.08);

/// Shoulder angle past which the sword arm is fully extended.
pub const SHOULDER_GATE: f32 = 1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct LungeRoutine {
    pub blend: PoseBlend,
    pub gate: GatedBlend,
    pub playback: Playback,
}

impl LungeRoutine {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        let blend = PoseBlend::new(LUNGE_START, LUNGE_END);
        let gate = GatedBlend::new(
            JointId::ShoulderR,
            LUNGE_START.angle(JointId::ShoulderR),
            SHOULDER_GATE,
        )
        .with_target_from(JointId::ElbowR, &blend)
        .with_target_from(PoseParam::ReachR, &blend);

        Self {
            blend,
            gate,
            playback: Playback::new(duration, LoopMode::PingPong),
        }
    }
}

impl Default for LungeRoutine {
    fn default() -> Self {
        Self::new(1.2)
    }
}

impl PoseSource for LungeRoutine {
    fn pose_at(&self, elapsed: f32) -> Pose {
        let mut pose = self.blend.sample(self.playback.progress(elapsed));
        self.gate.apply(&mut pose);
        pose
    }

    fn name(&self) -> &'static str {
        "lunging"
    }
}
