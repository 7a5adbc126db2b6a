use glam::Vec3;
use smallvec::SmallVec;

use crate::animation::{JointId, Pose, PoseParam};
use crate::resources::PrimitiveKind;
use crate::scene::skeleton::{PartId, PartKey, SocketId};

/// Drawn body of a part, laid out along `direction` from the pivot.
///
/// The segment starts `gap` away from the pivot (the radius of the joint
/// sphere), so its midpoint sits at `direction * (gap + length / 2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub mesh: PrimitiveKind,
    pub length: f32,
    pub width: f32,
    pub depth: f32,
    pub gap: f32,
    /// Unit axis the segment extends along, `-Y` for hanging limbs.
    pub direction: Vec3,
}

impl Segment {
    #[must_use]
    pub fn new(mesh: PrimitiveKind, length: f32, thickness: f32) -> Self {
        Self {
            mesh,
            length,
            width: thickness,
            depth: thickness,
            gap: 0.0,
            direction: Vec3::NEG_Y,
        }
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn pointing(mut self, direction: Vec3) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        self.direction * (self.gap + self.length * 0.5)
    }

    #[inline]
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        Vec3::new(self.width, self.length, self.depth)
    }
}

/// Pose-driven rotation of a part about one fixed local axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub id: JointId,
    pub axis: Vec3,
}

/// One rigid part of a skeleton.
///
/// # Evaluation order
///
/// Relative to its parent frame a part is placed by, in order:
///
/// 1. `offset` plus every `offset_params` entry scaled by the pose value
/// 2. `rest_rotation`, a fixed angle/axis
/// 3. `joint`, the pose angle about the joint axis
///
/// Marker, segment and socket then live in that frame, and children are
/// placed relative to it.
#[derive(Debug, Clone)]
pub struct PartNode {
    pub id: PartId,

    // === Hierarchy ===
    pub(crate) parent: Option<PartKey>,
    pub(crate) children: Vec<PartKey>,

    // === Placement ===
    pub offset: Vec3,
    pub offset_params: SmallVec<[(PoseParam, Vec3); 3]>,
    pub rest_rotation: Option<(f32, Vec3)>,
    pub joint: Option<Joint>,

    // === Contents ===
    /// Radius of the sphere drawn at the pivot.
    pub marker: Option<f32>,
    pub segment: Option<Segment>,
    pub socket: Option<SocketId>,
}

impl PartNode {
    #[must_use]
    pub fn new(id: PartId) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            offset: Vec3::ZERO,
            offset_params: SmallVec::new(),
            rest_rotation: None,
            joint: None,
            marker: None,
            segment: None,
            socket: None,
        }
    }

    #[must_use]
    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Adds `direction * pose.offset(param)` to the placement.
    #[must_use]
    pub fn with_param(mut self, param: PoseParam, direction: Vec3) -> Self {
        self.offset_params.push((param, direction));
        self
    }

    #[must_use]
    pub fn with_rest_rotation(mut self, angle: f32, axis: Vec3) -> Self {
        self.rest_rotation = Some((angle, axis));
        self
    }

    #[must_use]
    pub fn with_joint(mut self, id: JointId, axis: Vec3) -> Self {
        self.joint = Some(Joint { id, axis });
        self
    }

    #[must_use]
    pub fn with_marker(mut self, radius: f32) -> Self {
        self.marker = Some(radius);
        self
    }

    #[must_use]
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segment = Some(segment);
        self
    }

    #[must_use]
    pub fn with_socket(mut self, socket: SocketId) -> Self {
        self.socket = Some(socket);
        self
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<PartKey> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[PartKey] {
        &self.children
    }

    /// Pivot position in the parent frame for `pose`.
    #[must_use]
    pub fn local_translation(&self, pose: &Pose) -> Vec3 {
        self.offset_params
            .iter()
            .fold(self.offset, |acc, &(param, direction)| acc + direction * pose.offset(param))
    }

    /// Pose angle of this part's joint, `0` when it has none.
    #[must_use]
    pub fn joint_angle(&self, pose: &Pose) -> f32 {
        self.joint.map_or(0.0, |joint| pose.angle(joint.id))
    }
}
