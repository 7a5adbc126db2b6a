//! Derived props.
//!
//! Props that are not part of the skeleton are placed from socket frames
//! captured during evaluation:
//!
//! - [`BarPlacement`] spans a bar between two sockets and caps both ends
//!   with plates (barbell).
//! - [`AttachedProp`] re-enters one socket frame and draws a primitive at a
//!   fixed local offset (ball).

use glam::{Mat4, Quat, Vec3};

use crate::errors::{FiguraError, Result};
use crate::renderer::{DrawContext, RenderBackend};
use crate::resources::PrimitiveKind;
use crate::scene::skeleton::SocketId;
use crate::scene::transform_stack::TransformStack;
use crate::scene::transform_system::EvaluatedFrame;

/// Below this the cross product is treated as zero.
const PARALLEL_EPSILON: f32 = 1e-6;
/// Shorter bars are skipped.
const MIN_BAR_LENGTH: f32 = 1e-5;

/// Orientation and extent of a bar between two world points.
///
/// The bar's local `+Y` is mapped onto `dir` by rotating `angle` radians
/// about `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPlacement {
    pub left: Vec3,
    pub right: Vec3,
    pub mid: Vec3,
    /// Unit direction from `left` to `right`; `+Y` when the points coincide.
    pub dir: Vec3,
    pub length: f32,
    /// Unit rotation axis.
    pub axis: Vec3,
    pub angle: f32,
}

impl BarPlacement {
    /// Placement between the translations of two world transforms.
    #[must_use]
    pub fn between(left: &Mat4, right: &Mat4) -> Self {
        Self::between_points(left.w_axis.truncate(), right.w_axis.truncate())
    }

    #[must_use]
    pub fn between_points(left: Vec3, right: Vec3) -> Self {
        let delta = right - left;
        let length = delta.length();
        let dir = if length > MIN_BAR_LENGTH { delta / length } else { Vec3::Y };
        let mid = (left + right) * 0.5;

        let cross = Vec3::Y.cross(dir);
        let dot = Vec3::Y.dot(dir).clamp(-1.0, 1.0);

        let (axis, angle) = if cross.length() > PARALLEL_EPSILON {
            (cross.normalize(), dot.acos())
        } else if dot < 0.0 {
            // Antiparallel: any perpendicular axis works.
            (Vec3::X, std::f32::consts::PI)
        } else {
            (Vec3::X, 0.0)
        };

        Self {
            left,
            right,
            mid,
            dir,
            length,
            axis,
            angle,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length <= MIN_BAR_LENGTH
    }

    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(self.axis, self.angle)
    }

    /// World frame at the bar midpoint with local `+Y` along the bar.
    #[must_use]
    pub fn frame(&self) -> Mat4 {
        Mat4::from_translation(self.mid) * Mat4::from_quat(self.rotation())
    }

    /// Local `Y` of each end plate, inset so the plates sit flush with the
    /// bar ends.
    #[must_use]
    pub fn plate_offsets(&self, cap_half_thickness: f32) -> [f32; 2] {
        let reach = self.length - cap_half_thickness;
        [-reach, reach]
    }
}

/// Draws a bar along `placement` with a [`PrimitiveKind::Plate`] at each end.
///
/// The bar mesh spans `[-1, 1]` on `Y`, so the drawn bar reaches `length`
/// past the midpoint on either side. Skips coincident endpoints.
pub fn draw_bar_between<B: RenderBackend + ?Sized>(
    stack: &mut TransformStack,
    ctx: &mut DrawContext<'_, B>,
    placement: &BarPlacement,
    cap_half_thickness: f32,
) -> Result<()> {
    if placement.is_degenerate() {
        log::debug!(
            "draw_bar_between: endpoints coincide at {:?}, skipping bar",
            placement.mid
        );
        return Ok(());
    }

    let depth = stack.depth();

    stack.scoped(|stack| {
        stack
            .translate(placement.mid)
            .rotate(placement.angle, placement.axis);

        stack.scoped(|stack| {
            stack.scale(Vec3::new(1.0, placement.length, 1.0));
            ctx.draw(PrimitiveKind::Bar, &stack.current_matrix());
            Ok(())
        })?;

        for y in placement.plate_offsets(cap_half_thickness) {
            stack.scoped(|stack| {
                stack.translate(Vec3::new(0.0, y, 0.0));
                ctx.draw(PrimitiveKind::Plate, &stack.current_matrix());
                Ok(())
            })?;
        }
        Ok(())
    })?;

    if stack.depth() != depth {
        return Err(FiguraError::UnbalancedStack {
            context: "draw_bar_between",
            expected: depth,
            found: stack.depth(),
        });
    }
    Ok(())
}

/// Draws a bar between two captured sockets.
pub fn draw_bar_between_sockets<B: RenderBackend + ?Sized>(
    stack: &mut TransformStack,
    ctx: &mut DrawContext<'_, B>,
    frame: &EvaluatedFrame,
    sockets: (SocketId, SocketId),
    cap_half_thickness: f32,
) -> Result<BarPlacement> {
    let left = frame.socket(sockets.0)?;
    let right = frame.socket(sockets.1)?;
    let placement = BarPlacement::between(&left, &right);
    draw_bar_between(stack, ctx, &placement, cap_half_thickness)?;
    Ok(placement)
}

/// A primitive rigidly attached to a socket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedProp {
    pub socket: SocketId,
    pub mesh: PrimitiveKind,
    /// Translation in the socket frame.
    pub offset: Vec3,
    pub scale: Vec3,
}

impl AttachedProp {
    #[must_use]
    pub fn new(socket: SocketId, mesh: PrimitiveKind) -> Self {
        Self {
            socket,
            mesh,
            offset: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// World transform the prop is drawn with.
    pub fn world_matrix(&self, frame: &EvaluatedFrame) -> Result<Mat4> {
        let socket = frame.socket(self.socket)?;
        Ok(socket * Mat4::from_translation(self.offset) * Mat4::from_scale(self.scale))
    }

    pub fn draw<B: RenderBackend + ?Sized>(
        &self,
        stack: &mut TransformStack,
        ctx: &mut DrawContext<'_, B>,
        frame: &EvaluatedFrame,
    ) -> Result<()> {
        let socket = frame.socket(self.socket)?;
        stack.scoped(|stack| {
            stack.load_matrix(socket);
            stack.translate(self.offset).scale(self.scale);
            ctx.draw(self.mesh, &stack.current_matrix());
            Ok(())
        })
    }
}
