//! Animation sources for each scenario.
//!
//! A [`PoseSource`] turns elapsed seconds into a [`Pose`]. The running cycle
//! is synthesized from sines; the other routines blend two authored poses
//! with a [`Playback`](crate::animation::Playback) driving progress.

mod lift;
mod lunge;
mod running;
mod spike;

pub use lift::LiftRoutine;
pub use lunge::LungeRoutine;
pub use running::RunningGait;
pub use spike::SpikeRoutine;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::pose::Pose;
use crate::errors::FiguraError;
use crate::settings::FiguraSettings;

/// Anything that can produce a pose for a point in time.
pub trait PoseSource: Send + Sync {
    /// Pose at `elapsed` seconds since the animation epoch.
    fn pose_at(&self, elapsed: f32) -> Pose;

    fn name(&self) -> &'static str;
}

/// The four figure scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Running,
    Lunging,
    Spiking,
    Lifting,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Running,
        ScenarioKind::Lunging,
        ScenarioKind::Spiking,
        ScenarioKind::Lifting,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKind::Running => "running",
            ScenarioKind::Lunging => "lunging",
            ScenarioKind::Spiking => "spiking",
            ScenarioKind::Lifting => "lifting",
        }
    }

    /// Builds the pose source for this scenario.
    #[must_use]
    pub fn pose_source(self, settings: &FiguraSettings) -> Box<dyn PoseSource> {
        match self {
            ScenarioKind::Running => Box::new(RunningGait::new(&settings.gait)),
            ScenarioKind::Lunging => Box::new(LungeRoutine::new(settings.timing.lunge_duration)),
            ScenarioKind::Spiking => Box::new(SpikeRoutine::new(settings.timing.spike_duration)),
            ScenarioKind::Lifting => Box::new(LiftRoutine::new(settings.timing.lift_duration)),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = FiguraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" | "run" => Ok(ScenarioKind::Running),
            "lunging" | "lunge" | "fencing" => Ok(ScenarioKind::Lunging),
            "spiking" | "spike" | "volleyball" => Ok(ScenarioKind::Spiking),
            "lifting" | "lift" | "weightlifting" => Ok(ScenarioKind::Lifting),
            other => Err(FiguraError::UnknownScenario(other.to_string())),
        }
    }
}
