//! Pose blending.
//!
//! [`PoseBlend`] interpolates every field between two authored poses.
//! [`GatedBlend`] then overrides selected secondary fields so that they follow
//! a primary joint instead of the shared progress value:
//!
//! ```text
//! k = (primary - primary_start) / (threshold - primary_start)
//! secondary = start + (end - start) * k     while primary has not crossed threshold
//! secondary = end                           once it has
//! ```
//!
//! `k` is not clamped before the gate. Once the primary passes the threshold
//! the secondary is held at `end` instead of extrapolating.

use smallvec::SmallVec;

use crate::animation::pose::{Pose, PoseField};
use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseBlend {
    pub start: Pose,
    pub end: Pose,
}

impl PoseBlend {
    #[must_use]
    pub const fn new(start: Pose, end: Pose) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn sample(&self, t: f32) -> Pose {
        Pose::interpolate_linear(self.start, self.end, t)
    }
}

/// One field driven by the gate, with its own start/end pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatedTarget {
    pub field: PoseField,
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatedBlend {
    pub primary: PoseField,
    pub primary_start: f32,
    pub threshold: f32,
    pub targets: SmallVec<[GatedTarget; 4]>,
}

impl GatedBlend {
    #[must_use]
    pub fn new(primary: impl Into<PoseField>, primary_start: f32, threshold: f32) -> Self {
        Self {
            primary: primary.into(),
            primary_start,
            threshold,
            targets: SmallVec::new(),
        }
    }

    /// Adds a secondary field taking its start/end values from `blend`.
    #[must_use]
    pub fn with_target_from(mut self, field: impl Into<PoseField>, blend: &PoseBlend) -> Self {
        let field = field.into();
        self.targets.push(GatedTarget {
            field,
            start: blend.start.get(field),
            end: blend.end.get(field),
        });
        self
    }

    #[must_use]
    pub fn with_target(mut self, field: impl Into<PoseField>, start: f32, end: f32) -> Self {
        self.targets.push(GatedTarget {
            field: field.into(),
            start,
            end,
        });
        self
    }

    /// Progress of the primary from its start towards the threshold. Not clamped.
    #[must_use]
    pub fn gate_fraction(&self, primary_current: f32) -> f32 {
        let span = self.threshold - self.primary_start;
        if span == 0.0 {
            return 1.0;
        }
        (primary_current - self.primary_start) / span
    }

    /// `true` once the primary has moved strictly past the threshold, in the
    /// direction from its start value.
    #[must_use]
    pub fn has_crossed(&self, primary_current: f32) -> bool {
        let span = self.threshold - self.primary_start;
        span == 0.0 || (primary_current - self.threshold) * span > 0.0
    }

    #[must_use]
    pub fn secondary_value(&self, target: &GatedTarget, primary_current: f32) -> f32 {
        if self.has_crossed(primary_current) {
            target.end
        } else {
            let k = self.gate_fraction(primary_current);
            target.start + (target.end - target.start) * k
        }
    }

    /// Overwrites every target field of `pose`, reading the primary from the
    /// same pose.
    pub fn apply(&self, pose: &mut Pose) {
        let primary_current = pose.get(self.primary);
        for target in &self.targets {
            pose.set(target.field, self.secondary_value(target, primary_current));
        }
    }
}
