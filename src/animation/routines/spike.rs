//! Volleyball spike: airborne wind-up swinging through to the hit.
//! Plays once and holds the follow-through.

use crate::animation::action::{LoopMode, Playback};
use crate::animation::blend::PoseBlend;
use crate::animation::pose::{JointId, Pose, PoseParam};
use crate::animation::routines::PoseSource;

pub const SPIKE_START: Pose = Pose::REST
    .with_angle(JointId::ShoulderR, 2.6)
    .with_angle(JointId::ElbowR, 1.8)
    .with_angle(JointId::ShoulderL, 2.2)
    .with_angle(JointId::ElbowL, 0.2)
    .with_angle(JointId::BodyLean, -0.25)
    .with_angle(JointId::HeadTilt, -0.3)
    .with_angle(JointId::HipL, 0.3)
    .with_angle(JointId::KneeL, -0.6)
    .with_angle(JointId::HipR, 0.2)
    .with_angle(JointId::KneeR, -0.5)
    .with_offset(PoseParam::RootY, 0.6);

pub const SPIKE_END: Pose = Pose::REST
    .with_angle(JointId::ShoulderR, 0.9)
    .with_angle(JointId::ElbowR, 0.1)
    .with_angle(JointId::ShoulderL, 0.4)
    .with_angle(JointId::ElbowL, 0.6)
    .with_angle(JointId::BodyLean, 0.35)
    .with_angle(JointId::HeadTilt, 0.2)
    .with_angle(JointId::HipL, 0.5)
    .with_angle(JointId::KneeL, -0.8)
    .with_angle(JointId::HipR, 0.4)
    .with_angle(JointId::KneeR, -0.7)
    .with_offset(PoseParam::RootY, 0.45);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeRoutine {
    pub blend: PoseBlend,
    pub playback: Playback,
}

impl SpikeRoutine {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            blend: PoseBlend::new(SPIKE_START, SPIKE_END),
            playback: Playback::new(duration, LoopMode::Once),
        }
    }
}

impl Default for SpikeRoutine {
    fn default() -> Self {
        Self::new(0.9)
    }
}

impl PoseSource for SpikeRoutine {
    fn pose_at(&self, elapsed: f32) -> Pose {
        self.blend.sample(self.playback.progress(elapsed))
    }

    fn name(&self) -> &'static str {
        "spiking"
    }
}
