//! Pose data.
//!
//! A [`Pose`] maps every [`JointId`] to an angle in radians and every
//! [`PoseParam`] to a scalar offset in metres. Both tables are fixed-size
//! arrays indexed by the enum discriminant, so poses are `Copy` and can be
//! authored as `const` values:
//!
//! ```rust,ignore
//! const GUARD: Pose = Pose::REST
//!     .with_angle(JointId::ShoulderR, 0.6)
//!     .with_offset(PoseParam::RootY, -0.05);
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::values::Interpolatable;

/// Pose-driven joints. Each rotates about one fixed axis chosen by the
/// skeleton (see [`Skeleton::humanoid`](crate::scene::Skeleton::humanoid)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JointId {
    /// Forward lean of the torso about the pelvis.
    BodyLean,
    /// Head nod; positive looks down.
    HeadTilt,
    ShoulderL,
    ElbowL,
    ShoulderR,
    ElbowR,
    HipL,
    KneeL,
    HipR,
    KneeR,
}

impl JointId {
    pub const COUNT: usize = 10;

    pub const ALL: [JointId; Self::COUNT] = [
        JointId::BodyLean,
        JointId::HeadTilt,
        JointId::ShoulderL,
        JointId::ElbowL,
        JointId::ShoulderR,
        JointId::ElbowR,
        JointId::HipL,
        JointId::KneeL,
        JointId::HipR,
        JointId::KneeR,
    ];
}

/// Positional pose parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoseParam {
    /// Lateral root offset.
    RootX,
    /// Vertical root offset (crouch, jump, bob).
    RootY,
    /// Forward root offset.
    RootZ,
    /// Outward shift of the left shoulder pivot.
    ReachL,
    /// Outward shift of the right shoulder pivot.
    ReachR,
}

impl PoseParam {
    pub const COUNT: usize = 5;

    pub const ALL: [PoseParam; Self::COUNT] = [
        PoseParam::RootX,
        PoseParam::RootY,
        PoseParam::RootZ,
        PoseParam::ReachL,
        PoseParam::ReachR,
    ];
}

/// Any single named value of a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseField {
    Angle(JointId),
    Offset(PoseParam),
}

impl From<JointId> for PoseField {
    fn from(joint: JointId) -> Self {
        PoseField::Angle(joint)
    }
}

impl From<PoseParam> for PoseField {
    fn from(param: PoseParam) -> Self {
        PoseField::Offset(param)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    angles: [f32; JointId::COUNT],
    offsets: [f32; PoseParam::COUNT],
}

impl Pose {
    /// Every angle and offset zero: arms and legs hanging straight down.
    pub const REST: Pose = Pose {
        angles: [0.0; JointId::COUNT],
        offsets: [0.0; PoseParam::COUNT],
    };

    #[must_use]
    pub const fn with_angle(mut self, joint: JointId, radians: f32) -> Self {
        self.angles[joint as usize] = radians;
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, param: PoseParam, value: f32) -> Self {
        self.offsets[param as usize] = value;
        self
    }

    #[inline]
    #[must_use]
    pub fn angle(&self, joint: JointId) -> f32 {
        self.angles[joint as usize]
    }

    #[inline]
    pub fn set_angle(&mut self, joint: JointId, radians: f32) {
        self.angles[joint as usize] = radians;
    }

    #[inline]
    #[must_use]
    pub fn offset(&self, param: PoseParam) -> f32 {
        self.offsets[param as usize]
    }

    #[inline]
    pub fn set_offset(&mut self, param: PoseParam, value: f32) {
        self.offsets[param as usize] = value;
    }

    #[must_use]
    pub fn get(&self, field: PoseField) -> f32 {
        match field {
            PoseField::Angle(joint) => self.angle(joint),
            PoseField::Offset(param) => self.offset(param),
        }
    }

    pub fn set(&mut self, field: PoseField, value: f32) {
        match field {
            PoseField::Angle(joint) => self.set_angle(joint, value),
            PoseField::Offset(param) => self.set_offset(param, value),
        }
    }

    /// Every field with its current value, angles first.
    pub fn fields(&self) -> impl Iterator<Item = (PoseField, f32)> + '_ {
        let angles = JointId::ALL
            .into_iter()
            .map(|joint| (PoseField::Angle(joint), self.angle(joint)));
        let offsets = PoseParam::ALL
            .into_iter()
            .map(|param| (PoseField::Offset(param), self.offset(param)));
        angles.chain(offsets)
    }

    /// Component-wise linear interpolation over every field.
    #[must_use]
    pub fn lerp(&self, end: &Pose, t: f32) -> Pose {
        Pose::interpolate_linear(*self, *end, t)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Interpolatable for Pose {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        let mut out = start;
        for (o, (a, b)) in out.angles.iter_mut().zip(start.angles.iter().zip(end.angles.iter())) {
            *o = f32::interpolate_linear(*a, *b, t);
        }
        for (o, (a, b)) in out.offsets.iter_mut().zip(start.offsets.iter().zip(end.offsets.iter())) {
            *o = f32::interpolate_linear(*a, *b, t);
        }
        out
    }
}
