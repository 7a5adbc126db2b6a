//! Articulated skeleton.
//!
//! Parts live in a [`SlotMap`] arena and link to each other by [`PartKey`].
//! The humanoid is rooted at the torso:
//!
//! ```text
//! Torso ─┬─ Head
//!        ├─ UpperArmL ── LowerArmL ── HandL
//!        ├─ UpperArmR ── LowerArmR ── HandR [── Prop]
//!        ├─ UpperLegL ── LowerLegL ── FootL
//!        └─ UpperLegR ── LowerLegR ── FootR
//! ```
//!
//! Coordinates: `+Y` up, the figure faces `+Z`, its left side is at `-X`.
//! Limbs hang along `-Y` and swing about `-X`, so a positive shoulder or hip
//! angle moves the limb forward.

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{Key, SlotMap, new_key_type};

use crate::animation::{JointId, PoseParam};
use crate::resources::PrimitiveKind;
use crate::scene::node::{PartNode, Segment};
use crate::settings::{PropSettings, Proportions};

new_key_type! {
    pub struct PartKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartId {
    Torso,
    Head,
    UpperArmL,
    LowerArmL,
    HandL,
    UpperArmR,
    LowerArmR,
    HandR,
    UpperLegL,
    LowerLegL,
    FootL,
    UpperLegR,
    LowerLegR,
    FootR,
    /// Hand-held prop carried in the skeleton.
    Prop,
}

/// Named points whose world transforms are captured during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketId {
    LeftHand,
    RightHand,
    LeftFoot,
    RightFoot,
}

/// Forward tilt of the sword blade relative to the hand.
const SWORD_TILT: f32 = 0.35;

/// Local swing axis of shoulders, elbows, hips and knees.
const SWING_AXIS: Vec3 = Vec3::NEG_X;

#[derive(Debug, Clone)]
pub struct Skeleton {
    nodes: SlotMap<PartKey, PartNode>,
    root: PartKey,
    by_id: FxHashMap<PartId, PartKey>,
}

impl Skeleton {
    /// Creates a skeleton holding only `root`.
    #[must_use]
    pub fn new(root: PartNode) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut by_id = FxHashMap::default();
        let id = root.id;
        let root = nodes.insert(root);
        by_id.insert(id, root);
        Self { nodes, root, by_id }
    }

    /// Appends `node` as the last child of `parent`.
    ///
    /// Returns a null key and leaves the skeleton untouched when `parent` is
    /// not a live part.
    pub fn add_child(&mut self, parent: PartKey, mut node: PartNode) -> PartKey {
        if !self.nodes.contains_key(parent) {
            log::warn!("Skeleton: parent {parent:?} not found, dropping part {:?}", node.id);
            return PartKey::null();
        }
        node.parent = Some(parent);
        let id = node.id;
        let key = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(key);
        }
        if self.by_id.insert(id, key).is_some() {
            log::warn!("Skeleton: part {id:?} added twice, lookups resolve to the newest");
        }
        key
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> PartKey {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: PartKey) -> Option<&PartNode> {
        self.nodes.get(key)
    }

    #[inline]
    #[must_use]
    pub fn key_of(&self, id: PartId) -> Option<PartKey> {
        self.by_id.get(&id).copied()
    }

    #[must_use]
    pub fn part(&self, id: PartId) -> Option<&PartNode> {
        self.key_of(id).and_then(|key| self.nodes.get(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of draw calls one evaluation issues.
    #[must_use]
    pub fn drawable_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| usize::from(node.marker.is_some()) + usize::from(node.segment.is_some()))
            .sum()
    }

    /// Nodes in evaluation order (depth-first, children in insertion order).
    #[must_use]
    pub fn depth_first(&self) -> Vec<PartKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut pending = vec![self.root];
        while let Some(key) = pending.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            order.push(key);
            pending.extend(node.children.iter().rev());
        }
        order
    }

    /// Builds the humanoid from body proportions.
    ///
    /// Every child offset is the parent's joint span (`2 * joint_radius +
    /// length`), so segments abut the joint spheres at both ends.
    #[must_use]
    pub fn humanoid(p: &Proportions) -> Self {
        let torso = PartNode::new(PartId::Torso)
            .at(Vec3::new(0.0, p.leg_length(), 0.0))
            .with_param(PoseParam::RootX, Vec3::X)
            .with_param(PoseParam::RootY, Vec3::Y)
            .with_param(PoseParam::RootZ, Vec3::Z)
            .with_joint(JointId::BodyLean, Vec3::X)
            .with_segment(
                Segment::new(PrimitiveKind::Cube, p.torso_length, p.torso_width)
                    .with_depth(p.torso_depth)
                    .pointing(Vec3::Y),
            );

        let mut skeleton = Self::new(torso);
        let root = skeleton.root;

        let head_size = 2.0 * p.head_radius;
        skeleton.add_child(
            root,
            PartNode::new(PartId::Head)
                .at(Vec3::new(0.0, p.torso_length, 0.0))
                .with_joint(JointId::HeadTilt, Vec3::X)
                .with_segment(
                    Segment::new(PrimitiveKind::Sphere, head_size, head_size)
                        .with_gap(p.neck_length)
                        .pointing(Vec3::Y),
                ),
        );

        let half_shoulders = p.shoulder_width * 0.5;
        let half_hips = p.hip_width * 0.5;

        skeleton.add_limb(
            root,
            p,
            &LimbSpec {
                root_part: PartId::UpperArmL,
                mid_part: PartId::LowerArmL,
                end_part: PartId::HandL,
                anchor: Vec3::new(-half_shoulders, p.torso_length, 0.0),
                reach: Some((PoseParam::ReachL, Vec3::NEG_X)),
                root_joint: JointId::ShoulderL,
                mid_joint: JointId::ElbowL,
                upper_length: p.upper_arm_length,
                lower_length: p.lower_arm_length,
                end_radius: p.hand_radius,
                socket: SocketId::LeftHand,
            },
        );
        skeleton.add_limb(
            root,
            p,
            &LimbSpec {
                root_part: PartId::UpperArmR,
                mid_part: PartId::LowerArmR,
                end_part: PartId::HandR,
                anchor: Vec3::new(half_shoulders, p.torso_length, 0.0),
                reach: Some((PoseParam::ReachR, Vec3::X)),
                root_joint: JointId::ShoulderR,
                mid_joint: JointId::ElbowR,
                upper_length: p.upper_arm_length,
                lower_length: p.lower_arm_length,
                end_radius: p.hand_radius,
                socket: SocketId::RightHand,
            },
        );
        skeleton.add_limb(
            root,
            p,
            &LimbSpec {
                root_part: PartId::UpperLegL,
                mid_part: PartId::LowerLegL,
                end_part: PartId::FootL,
                anchor: Vec3::new(-half_hips, 0.0, 0.0),
                reach: None,
                root_joint: JointId::HipL,
                mid_joint: JointId::KneeL,
                upper_length: p.upper_leg_length,
                lower_length: p.lower_leg_length,
                end_radius: p.foot_radius,
                socket: SocketId::LeftFoot,
            },
        );
        skeleton.add_limb(
            root,
            p,
            &LimbSpec {
                root_part: PartId::UpperLegR,
                mid_part: PartId::LowerLegR,
                end_part: PartId::FootR,
                anchor: Vec3::new(half_hips, 0.0, 0.0),
                reach: None,
                root_joint: JointId::HipR,
                mid_joint: JointId::KneeR,
                upper_length: p.upper_leg_length,
                lower_length: p.lower_leg_length,
                end_radius: p.foot_radius,
                socket: SocketId::RightFoot,
            },
        );

        log::debug!(
            "Skeleton: built humanoid with {} parts, {} drawables",
            skeleton.len(),
            skeleton.drawable_count()
        );
        skeleton
    }

    /// Humanoid holding a sword in the right hand.
    #[must_use]
    pub fn humanoid_with_sword(p: &Proportions, props: &PropSettings) -> Self {
        let mut skeleton = Self::humanoid(p);
        if let Some(hand) = skeleton.key_of(PartId::HandR) {
            skeleton.add_child(
                hand,
                PartNode::new(PartId::Prop)
                    .with_rest_rotation(SWORD_TILT, SWING_AXIS)
                    .with_segment(
                        Segment::new(PrimitiveKind::Limb, props.sword_length, props.sword_thickness)
                            .with_gap(p.hand_radius),
                    ),
            );
        }
        skeleton
    }

    fn add_limb(&mut self, parent: PartKey, p: &Proportions, limb: &LimbSpec) {
        let mut upper = PartNode::new(limb.root_part)
            .at(limb.anchor)
            .with_joint(limb.root_joint, SWING_AXIS)
            .with_marker(p.joint_radius)
            .with_segment(
                Segment::new(PrimitiveKind::Limb, limb.upper_length, p.limb_thickness)
                    .with_gap(p.joint_radius),
            );
        if let Some((param, direction)) = limb.reach {
            upper = upper.with_param(param, direction);
        }
        let upper = self.add_child(parent, upper);

        let lower = self.add_child(
            upper,
            PartNode::new(limb.mid_part)
                .at(Vec3::new(0.0, -p.joint_span(limb.upper_length, p.joint_radius), 0.0))
                .with_joint(limb.mid_joint, SWING_AXIS)
                .with_marker(p.joint_radius)
                .with_segment(
                    Segment::new(PrimitiveKind::Limb, limb.lower_length, p.limb_thickness)
                        .with_gap(p.joint_radius),
                ),
        );

        self.add_child(
            lower,
            PartNode::new(limb.end_part)
                .at(Vec3::new(0.0, -p.joint_span(limb.lower_length, limb.end_radius), 0.0))
                .with_marker(limb.end_radius)
                .with_socket(limb.socket),
        );
    }
}

struct LimbSpec {
    root_part: PartId,
    mid_part: PartId,
    end_part: PartId,
    anchor: Vec3,
    reach: Option<(PoseParam, Vec3)>,
    root_joint: JointId,
    mid_joint: JointId,
    upper_length: f32,
    lower_length: f32,
    end_radius: f32,
    socket: SocketId,
}
