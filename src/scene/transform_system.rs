//! Skeleton evaluation.
//!
//! Walks a [`Skeleton`] depth-first with a [`TransformStack`], drawing each
//! part's marker and segment and capturing socket frames. Each part runs in
//! its own [`TransformStack::scoped`] frame, so the stack depth on return
//! always equals the depth on entry.

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::Pose;
use crate::errors::{FiguraError, Result};
use crate::renderer::{DrawContext, RenderBackend};
use crate::resources::{BoundingBox, PrimitiveKind};
use crate::scene::skeleton::{PartId, PartKey, Skeleton, SocketId};
use crate::scene::transform_stack::TransformStack;

/// What one evaluation leaves behind for prop placement and framing.
#[derive(Debug, Clone, Default)]
pub struct EvaluatedFrame {
    /// World transform of each socket, copied at capture.
    pub sockets: FxHashMap<SocketId, Mat4>,
    /// World position of every part pivot.
    pub joint_positions: FxHashMap<PartId, Vec3>,
}

impl EvaluatedFrame {
    pub fn socket(&self, id: SocketId) -> Result<Mat4> {
        self.sockets
            .get(&id)
            .copied()
            .ok_or(FiguraError::MissingSocket(id))
    }

    #[must_use]
    pub fn joint_position(&self, id: PartId) -> Option<Vec3> {
        self.joint_positions.get(&id).copied()
    }

    /// Box around every pivot; `None` before anything was evaluated.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.joint_positions.values().copied())
    }

    pub fn clear(&mut self) {
        self.sockets.clear();
        self.joint_positions.clear();
    }
}

pub struct SkeletonEvaluator<'s> {
    skeleton: &'s Skeleton,
}

impl<'s> SkeletonEvaluator<'s> {
    #[must_use]
    pub fn new(skeleton: &'s Skeleton) -> Self {
        Self { skeleton }
    }

    /// Draws the skeleton in `pose`, starting from the stack's current frame.
    pub fn evaluate<B: RenderBackend + ?Sized>(
        &self,
        pose: &Pose,
        stack: &mut TransformStack,
        ctx: &mut DrawContext<'_, B>,
    ) -> Result<EvaluatedFrame> {
        let mut frame = EvaluatedFrame::default();
        let depth = stack.depth();

        self.visit(self.skeleton.root(), pose, stack, ctx, &mut frame)?;

        ctx.note_stack_depth(stack.max_depth());
        if stack.depth() != depth {
            return Err(FiguraError::UnbalancedStack {
                context: "SkeletonEvaluator::evaluate",
                expected: depth,
                found: stack.depth(),
            });
        }
        Ok(frame)
    }

    fn visit<B: RenderBackend + ?Sized>(
        &self,
        key: PartKey,
        pose: &Pose,
        stack: &mut TransformStack,
        ctx: &mut DrawContext<'_, B>,
        frame: &mut EvaluatedFrame,
    ) -> Result<()> {
        let Some(node) = self.skeleton.get(key) else {
            log::warn!("SkeletonEvaluator: dangling part key {key:?}, skipping");
            return Ok(());
        };

        stack.scoped(|stack| {
            stack.translate(node.local_translation(pose));
            if let Some((angle, axis)) = node.rest_rotation {
                stack.rotate(angle, axis);
            }
            if let Some(joint) = node.joint {
                stack.rotate(node.joint_angle(pose), joint.axis);
            }

            let pivot = stack.current_matrix();
            frame.joint_positions.insert(node.id, pivot.w_axis.truncate());

            if let Some(radius) = node.marker {
                stack.scoped(|stack| {
                    stack.scale(Vec3::splat(2.0 * radius));
                    ctx.draw(PrimitiveKind::Sphere, &stack.current_matrix());
                    Ok(())
                })?;
            }

            if let Some(segment) = node.segment {
                stack.scoped(|stack| {
                    stack.translate(segment.midpoint()).scale(segment.scale());
                    ctx.draw(segment.mesh, &stack.current_matrix());
                    Ok(())
                })?;
            }

            if let Some(socket) = node.socket {
                frame.sockets.insert(socket, pivot);
            }

            for &child in node.children() {
                self.visit(child, pose, stack, ctx, frame)?;
            }
            Ok(())
        })
    }
}
