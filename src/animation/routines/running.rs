use crate::animation::gait::GaitCycle;
use crate::animation::pose::Pose;
use crate::animation::routines::PoseSource;
use crate::settings::GaitSettings;

/// Endless running cycle driven by [`GaitCycle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningGait {
    pub cycle: GaitCycle,
}

impl RunningGait {
    #[must_use]
    pub fn new(settings: &GaitSettings) -> Self {
        Self {
            cycle: GaitCycle::from_settings(settings),
        }
    }
}

impl Default for RunningGait {
    fn default() -> Self {
        Self::new(&GaitSettings::default())
    }
}

impl PoseSource for RunningGait {
    fn pose_at(&self, elapsed: f32) -> Pose {
        self.cycle.pose_at(elapsed)
    }

    fn name(&self) -> &'static str {
        "running"
    }
}
