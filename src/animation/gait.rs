//! Cyclic gait synthesis.
//!
//! Every joint angle is a phase-shifted sine of time. The hip uses an
//! asymmetric amplitude keyed on the sign of the sine, and the knee is
//! derived from the same frame's hip angle rather than driven on its own.

use std::f32::consts::{PI, TAU};

use crate::animation::pose::{JointId, Pose, PoseParam};
use crate::settings::GaitSettings;

/// Phase of the left leg; the right leg runs half a cycle behind.
pub const LEFT_PHASE: f32 = 0.0;
pub const RIGHT_PHASE: f32 = PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitCycle {
    /// Radians per second.
    pub angular_frequency: f32,
    pub hip_forward_amplitude: f32,
    pub hip_backward_amplitude: f32,
    pub knee_offset: f32,
    pub arm_amplitude: f32,
    pub elbow_bend: f32,
    pub body_lean: f32,
    pub bob_amplitude: f32,
}

impl GaitCycle {
    #[must_use]
    pub fn from_settings(settings: &GaitSettings) -> Self {
        Self {
            angular_frequency: TAU * settings.stride_frequency,
            hip_forward_amplitude: settings.hip_forward_amplitude,
            hip_backward_amplitude: settings.hip_backward_amplitude,
            knee_offset: settings.knee_offset,
            arm_amplitude: settings.arm_amplitude,
            elbow_bend: settings.elbow_bend,
            body_lean: settings.body_lean,
            bob_amplitude: settings.bob_amplitude,
        }
    }

    #[inline]
    #[must_use]
    pub fn phase(&self, time: f32, phase_offset: f32) -> f32 {
        self.angular_frequency * time + phase_offset
    }

    /// Forward amplitude while the sine is non-negative, the smaller backward
    /// amplitude while it is negative.
    #[inline]
    #[must_use]
    pub fn hip_amplitude(&self, sine: f32) -> f32 {
        if sine >= 0.0 {
            self.hip_forward_amplitude
        } else {
            self.hip_backward_amplitude
        }
    }

    #[must_use]
    pub fn hip_angle(&self, time: f32, phase_offset: f32) -> f32 {
        let sine = self.phase(time, phase_offset).sin();
        self.hip_amplitude(sine) * sine
    }

    /// Knee angle for a hip angle of the same limb and frame.
    ///
    /// While the leg is forward the knee folds by `-(hip + knee_offset)`, which
    /// holds the lower leg at `knee_offset` behind vertical whatever the thigh
    /// does. A trailing leg stays straight.
    #[inline]
    #[must_use]
    pub fn knee_from_hip(&self, hip: f32) -> f32 {
        if hip > 0.0 { -(hip + self.knee_offset) } else { 0.0 }
    }

    /// Arms swing in counter-phase to the leg on the same side.
    #[must_use]
    pub fn shoulder_angle(&self, time: f32, leg_phase_offset: f32) -> f32 {
        self.arm_amplitude * self.phase(time, leg_phase_offset + PI).sin()
    }

    /// Vertical bounce, two peaks per stride.
    #[must_use]
    pub fn bob(&self, time: f32) -> f32 {
        self.bob_amplitude * self.phase(time, 0.0).sin().abs()
    }

    #[must_use]
    pub fn pose_at(&self, time: f32) -> Pose {
        let hip_l = self.hip_angle(time, LEFT_PHASE);
        let hip_r = self.hip_angle(time, RIGHT_PHASE);

        Pose::REST
            .with_angle(JointId::BodyLean, self.body_lean)
            .with_angle(JointId::HipL, hip_l)
            .with_angle(JointId::KneeL, self.knee_from_hip(hip_l))
            .with_angle(JointId::HipR, hip_r)
            .with_angle(JointId::KneeR, self.knee_from_hip(hip_r))
            .with_angle(JointId::ShoulderL, self.shoulder_angle(time, LEFT_PHASE))
            .with_angle(JointId::ElbowL, self.elbow_bend)
            .with_angle(JointId::ShoulderR, self.shoulder_angle(time, RIGHT_PHASE))
            .with_angle(JointId::ElbowR, self.elbow_bend)
            .with_offset(PoseParam::RootY, self.bob(time))
    }
}

impl Default for GaitCycle {
    fn default() -> Self {
        Self::from_settings(&GaitSettings::default())
    }
}
