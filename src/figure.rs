//! Figure Orchestration
//!
//! [`Figure`] ties one scenario together for per-frame rendering:
//!
//! ```text
//! elapsed ─► PoseSource::pose_at ─► SkeletonEvaluator ─► sockets ─► props
//!                                          │                         │
//!                                          └──── DrawContext::draw ◄─┘
//! ```
//!
//! The host owns the clock and the camera state and passes both in each
//! frame. Everything else is rebuilt per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use figura::{DrawRecorder, Figure, MeshLibrary, ScenarioKind};
//! use figura::settings::FiguraSettings;
//!
//! let settings = FiguraSettings::default();
//! let meshes = MeshLibrary::new(&settings.tessellation, &settings.props);
//! let mut backend = DrawRecorder::new();
//! meshes.upload_to(&mut backend);
//!
//! let mut figure = Figure::new(ScenarioKind::Lifting, &settings)?;
//! let state = figure.initial_camera_state();
//! let stats = figure.render_frame(0.5, &state, &meshes, &mut backend)?;
//! ```

use glam::Vec3;

use crate::animation::{Pose, PoseSource, ScenarioKind};
use crate::errors::{FiguraError, Result};
use crate::renderer::{DrawContext, FrameStats, RenderBackend};
use crate::resources::{MeshLibrary, PrimitiveKind};
use crate::scene::{
    AttachedProp, Camera, CameraState, EvaluatedFrame, Skeleton, SkeletonEvaluator, SocketId,
    TransformStack, draw_bar_between_sockets,
};
use crate::settings::FiguraSettings;

/// Props placed after the skeleton has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum PropRig {
    None,
    Attached(AttachedProp),
    /// Bar with end plates between both hands.
    Barbell { cap_half_thickness: f32 },
}

pub struct Figure {
    kind: ScenarioKind,
    skeleton: Skeleton,
    source: Box<dyn PoseSource>,
    rig: PropRig,
    camera: Camera,
    initial_state: CameraState,
    stack: TransformStack,
    last_frame: EvaluatedFrame,
}

impl Figure {
    /// Builds the skeleton, pose source and props for `kind`.
    pub fn new(kind: ScenarioKind, settings: &FiguraSettings) -> Result<Self> {
        settings.validate()?;

        let proportions = &settings.proportions;
        let props = &settings.props;

        let skeleton = match kind {
            ScenarioKind::Lunging => Skeleton::humanoid_with_sword(proportions, props),
            _ => Skeleton::humanoid(proportions),
        };

        let rig = match kind {
            ScenarioKind::Spiking => PropRig::Attached(
                AttachedProp::new(SocketId::RightHand, PrimitiveKind::Sphere)
                    .with_offset(Vec3::new(0.0, -(proportions.hand_radius + props.ball_radius), 0.0))
                    .with_scale(Vec3::splat(2.0 * props.ball_radius)),
            ),
            ScenarioKind::Lifting => PropRig::Barbell {
                cap_half_thickness: props.plate_thickness * 0.5,
            },
            ScenarioKind::Running | ScenarioKind::Lunging => PropRig::None,
        };

        log::info!("Figure: {kind} with {} parts, rig {rig:?}", skeleton.len());

        Ok(Self {
            kind,
            skeleton,
            source: kind.pose_source(settings),
            rig,
            camera: Camera::from_settings(&settings.camera, 1.0),
            initial_state: CameraState::from_settings(&settings.camera),
            stack: TransformStack::new(),
            last_frame: EvaluatedFrame::default(),
        })
    }

    /// Replaces the pose source, keeping skeleton and props.
    #[must_use]
    pub fn with_pose_source(mut self, source: Box<dyn PoseSource>) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    #[must_use]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    #[must_use]
    pub fn rig(&self) -> &PropRig {
        &self.rig
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[must_use]
    pub fn initial_camera_state(&self) -> CameraState {
        self.initial_state
    }

    #[must_use]
    pub fn pose_at(&self, elapsed: f32) -> Pose {
        self.source.pose_at(elapsed)
    }

    /// Sockets and pivots of the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> &EvaluatedFrame {
        &self.last_frame
    }

    /// Evaluates and draws one frame at `elapsed` seconds.
    pub fn render_frame<B: RenderBackend + ?Sized>(
        &mut self,
        elapsed: f32,
        state: &CameraState,
        meshes: &MeshLibrary,
        backend: &mut B,
    ) -> Result<FrameStats> {
        let pose = self.source.pose_at(elapsed);

        self.stack.reset();
        let mut ctx = DrawContext::new(
            meshes,
            backend,
            self.camera.view_matrix(state),
            self.camera.projection_matrix(),
        );

        let frame = SkeletonEvaluator::new(&self.skeleton).evaluate(&pose, &mut self.stack, &mut ctx)?;

        match &self.rig {
            PropRig::None => {}
            PropRig::Attached(prop) => prop.draw(&mut self.stack, &mut ctx, &frame)?,
            PropRig::Barbell { cap_half_thickness } => {
                draw_bar_between_sockets(
                    &mut self.stack,
                    &mut ctx,
                    &frame,
                    (SocketId::LeftHand, SocketId::RightHand),
                    *cap_half_thickness,
                )?;
            }
        }

        if self.stack.depth() != 0 {
            return Err(FiguraError::UnbalancedStack {
                context: "Figure::render_frame",
                expected: 0,
                found: self.stack.depth(),
            });
        }

        ctx.note_stack_depth(self.stack.max_depth());
        let stats = ctx.stats();
        self.last_frame = frame;

        log::trace!(
            "Figure: t={elapsed:.3}s {} draws, {} triangles",
            stats.draw_calls,
            stats.triangles
        );
        Ok(stats)
    }
}
