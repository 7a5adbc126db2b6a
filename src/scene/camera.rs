use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::settings::CameraSettings;

/// Orbit angles carried between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    /// Rotation about world `+Y`, radians.
    pub yaw: f32,
    /// Rotation about the camera's `+X`, radians, within `[-π/2, π/2]`.
    pub pitch: f32,
}

impl CameraState {
    #[must_use]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(
            settings.initial_yaw_degrees.to_radians(),
            settings.initial_pitch_degrees.to_radians(),
        )
    }

    pub fn apply_delta(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}

/// Perspective camera orbiting a fixed target.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub target: Vec3,

    pub(crate) projection_matrix: Mat4,
}

impl Camera {
    /// `fov` in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            distance: 4.5,
            target: Vec3::ZERO,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    #[must_use]
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        let mut cam = Self::new_perspective(settings.fov_degrees, aspect, settings.near, settings.far);
        cam.distance = settings.distance;
        cam.target = settings.target;
        cam
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Call on viewport resize. Non-positive sizes are ignored.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("Camera: ignoring degenerate viewport {width}x{height}");
            return;
        }
        self.aspect = width / height;
        self.update_projection_matrix();
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Back off by `distance`, pitch, yaw, then recentre on `target`.
    #[must_use]
    pub fn view_matrix(&self, state: &CameraState) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(state.pitch)
            * Mat4::from_rotation_y(-state.yaw)
            * Mat4::from_translation(-self.target)
    }

    /// World-space eye position for `state`.
    #[must_use]
    pub fn eye_position(&self, state: &CameraState) -> Vec3 {
        self.view_matrix(state).inverse().w_axis.truncate()
    }

    /// Recentres on `center` and backs off far enough to fit a sphere of
    /// `radius` in the vertical field of view.
    pub fn frame_sphere(&mut self, center: Vec3, radius: f32) {
        let half_fov = self.fov * 0.5;
        self.target = center;
        self.distance = (radius / half_fov.sin()).max(self.near + radius);
    }
}
