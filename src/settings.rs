//! Figure Settings
//!
//! Every tunable of the figure lives here: camera, body proportions, gait
//! shape, routine timing, prop dimensions and tessellation. All structs
//! implement [`Default`] and deserialize with `#[serde(default)]`, so a JSON
//! file only needs the fields it overrides.
//!
//! # Example
//!
//! ```rust,ignore
//! use figura::settings::FiguraSettings;
//!
//! let settings = FiguraSettings::from_json_str(r#"{ "gait": { "stride_frequency": 1.8 } }"#)?;
//! assert_eq!(settings.camera.fov_degrees, 45.0);
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{FiguraError, Result};

// ---------------------------------------------------------------------------
// CameraSettings
// ---------------------------------------------------------------------------

/// Projection and orbit defaults.
///
/// | Field                   | Description                           | Default      |
/// |-------------------------|---------------------------------------|--------------|
/// | `fov_degrees`           | Vertical field of view                | `45`         |
/// | `near` / `far`          | Clip planes                           | `0.1` / `100`|
/// | `distance`              | Orbit radius around `target`          | `4.5`        |
/// | `target`                | Orbit centre                          | `(0, 1, 0)`  |
/// | `initial_yaw_degrees`   | Yaw at startup                        | `25`         |
/// | `initial_pitch_degrees` | Pitch at startup                      | `10`         |
/// | `rotate_speed`          | Radians per dragged pixel             | `0.01`       |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub target: Vec3,
    pub initial_yaw_degrees: f32,
    pub initial_pitch_degrees: f32,
    pub rotate_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            distance: 4.5,
            target: Vec3::new(0.0, 1.0, 0.0),
            initial_yaw_degrees: 25.0,
            initial_pitch_degrees: 10.0,
            rotate_speed: 0.01,
        }
    }
}

// ---------------------------------------------------------------------------
// Proportions
// ---------------------------------------------------------------------------

/// Body measurements in metres.
///
/// Limb segments start `joint_radius` away from their proximal pivot and end
/// one distal radius short of the next, so hand and foot pivots sit
/// `joint_radius + length + hand_radius` (or `foot_radius`) below the elbow or
/// knee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proportions {
    pub torso_length: f32,
    pub torso_width: f32,
    pub torso_depth: f32,
    pub neck_length: f32,
    pub head_radius: f32,
    pub shoulder_width: f32,
    pub hip_width: f32,
    pub upper_arm_length: f32,
    pub lower_arm_length: f32,
    pub upper_leg_length: f32,
    pub lower_leg_length: f32,
    pub limb_thickness: f32,
    pub joint_radius: f32,
    pub hand_radius: f32,
    pub foot_radius: f32,
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            torso_length: 0.6,
            torso_width: 0.34,
            torso_depth: 0.2,
            neck_length: 0.06,
            head_radius: 0.12,
            shoulder_width: 0.44,
            hip_width: 0.2,
            upper_arm_length: 0.26,
            lower_arm_length: 0.24,
            upper_leg_length: 0.38,
            lower_leg_length: 0.36,
            limb_thickness: 0.08,
            joint_radius: 0.045,
            hand_radius: 0.045,
            foot_radius: 0.05,
        }
    }
}

impl Proportions {
    /// Pivot-to-pivot distance for a segment of the given length.
    ///
    /// The segment starts at the surface of the proximal joint sphere and
    /// ends at the surface of a distal sphere of `distal_radius`.
    #[inline]
    #[must_use]
    pub fn joint_span(&self, segment_length: f32, distal_radius: f32) -> f32 {
        self.joint_radius + segment_length + distal_radius
    }

    /// Height of the hip pivots above the ground at rest.
    #[must_use]
    pub fn leg_length(&self) -> f32 {
        self.joint_span(self.upper_leg_length, self.joint_radius)
            + self.joint_span(self.lower_leg_length, self.foot_radius)
            + self.foot_radius
    }
}

// ---------------------------------------------------------------------------
// GaitSettings
// ---------------------------------------------------------------------------

/// Shape of the running cycle.
///
/// The hip swings with `forward_amplitude` while the sine is non-negative and
/// with the smaller `backward_amplitude` while it is negative, so the leading
/// leg lifts higher than the trailing leg trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitSettings {
    /// Full strides per second.
    pub stride_frequency: f32,
    pub hip_forward_amplitude: f32,
    pub hip_backward_amplitude: f32,
    /// Lower-leg angle held behind vertical while the leg is forward.
    pub knee_offset: f32,
    pub arm_amplitude: f32,
    pub elbow_bend: f32,
    pub body_lean: f32,
    pub bob_amplitude: f32,
}

impl Default for GaitSettings {
    fn default() -> Self {
        Self {
            stride_frequency: 1.4,
            hip_forward_amplitude: 0.9,
            hip_backward_amplitude: 0.35,
            knee_offset: 0.3,
            arm_amplitude: 0.7,
            elbow_bend: 1.4,
            body_lean: 0.15,
            bob_amplitude: 0.04,
        }
    }
}

// ---------------------------------------------------------------------------
// TimingSettings
// ---------------------------------------------------------------------------

/// Durations in seconds of one start→end pass of each blended routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    pub lunge_duration: f32,
    pub spike_duration: f32,
    pub lift_duration: f32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            lunge_duration: 1.2,
            spike_duration: 0.9,
            lift_duration: 2.5,
        }
    }
}

// ---------------------------------------------------------------------------
// PropSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropSettings {
    pub sword_length: f32,
    pub sword_thickness: f32,
    pub ball_radius: f32,
    pub bar_radius: f32,
    pub plate_outer_radius: f32,
    pub plate_inner_radius: f32,
    pub plate_thickness: f32,
}

impl Default for PropSettings {
    fn default() -> Self {
        Self {
            sword_length: 0.9,
            sword_thickness: 0.02,
            ball_radius: 0.11,
            bar_radius: 0.015,
            plate_outer_radius: 0.22,
            plate_inner_radius: 0.02,
            plate_thickness: 0.05,
        }
    }
}

// ---------------------------------------------------------------------------
// TessellationSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationSettings {
    pub sphere_lat_bands: u32,
    pub sphere_lon_bands: u32,
    pub cylinder_radial_segments: u32,
    pub plate_segments: u32,
}

impl Default for TessellationSettings {
    fn default() -> Self {
        Self {
            sphere_lat_bands: 12,
            sphere_lon_bands: 16,
            cylinder_radial_segments: 16,
            plate_segments: 24,
        }
    }
}

// ---------------------------------------------------------------------------
// FiguraSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiguraSettings {
    pub camera: CameraSettings,
    pub proportions: Proportions,
    pub gait: GaitSettings,
    pub timing: TimingSettings,
    pub props: PropSettings,
    pub tessellation: TessellationSettings,
}

impl FiguraSettings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded figure settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values that would make the figure or the camera degenerate.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("camera.fov_degrees", self.camera.fov_degrees),
            ("camera.near", self.camera.near),
            ("camera.distance", self.camera.distance),
            ("proportions.torso_length", self.proportions.torso_length),
            ("proportions.upper_arm_length", self.proportions.upper_arm_length),
            ("proportions.lower_arm_length", self.proportions.lower_arm_length),
            ("proportions.upper_leg_length", self.proportions.upper_leg_length),
            ("proportions.lower_leg_length", self.proportions.lower_leg_length),
            ("proportions.limb_thickness", self.proportions.limb_thickness),
            ("gait.stride_frequency", self.gait.stride_frequency),
            ("timing.lunge_duration", self.timing.lunge_duration),
            ("timing.spike_duration", self.timing.spike_duration),
            ("timing.lift_duration", self.timing.lift_duration),
            ("props.plate_thickness", self.props.plate_thickness),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FiguraError::InvalidSettings(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if self.camera.far <= self.camera.near {
            return Err(FiguraError::InvalidSettings(format!(
                "camera.far ({}) must exceed camera.near ({})",
                self.camera.far, self.camera.near
            )));
        }
        if self.gait.hip_backward_amplitude > self.gait.hip_forward_amplitude {
            return Err(FiguraError::InvalidSettings(
                "gait.hip_backward_amplitude must not exceed gait.hip_forward_amplitude".into(),
            ));
        }
        if self.props.plate_inner_radius >= self.props.plate_outer_radius {
            return Err(FiguraError::InvalidSettings(
                "props.plate_inner_radius must be smaller than props.plate_outer_radius".into(),
            ));
        }
        Ok(())
    }
}
