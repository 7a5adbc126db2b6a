mod values;
pub mod action;
pub mod blend;
pub mod gait;
pub mod pose;
pub mod routines;

pub use action::{LoopMode, Playback};
pub use blend::{GatedBlend, GatedTarget, PoseBlend};
pub use gait::GaitCycle;
pub use pose::{JointId, Pose, PoseField, PoseParam};
pub use routines::{LiftRoutine, LungeRoutine, PoseSource, RunningGait, ScenarioKind, SpikeRoutine};
pub use values::Interpolatable;
