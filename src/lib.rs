#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod errors;
pub mod figure;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{GaitCycle, JointId, LoopMode, Playback, Pose, PoseBlend, PoseParam, PoseSource, ScenarioKind};
pub use errors::{FiguraError, Result};
pub use figure::{Figure, PropRig};
pub use renderer::{DrawCall, DrawContext, DrawRecorder, FrameStats, RenderBackend};
pub use resources::primitives::*;
pub use resources::{BoundingBox, MeshData, MeshLibrary, PrimitiveKind};
pub use scene::{Camera, CameraState, PartId, Skeleton, SocketId, TransformStack};
pub use settings::FiguraSettings;
pub use utils::{AnimationClock, OrbitDrag};
pub use glam;
