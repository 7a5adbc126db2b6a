use glam::Vec2;

use crate::scene::CameraState;

/// Pointer-drag adapter that rotates a [`CameraState`].
///
/// Horizontal motion changes yaw, vertical motion changes pitch, both scaled
/// by `rotate_speed` radians per pixel. Pitch is clamped by
/// [`CameraState::apply_delta`].
#[derive(Debug, Clone)]
pub struct OrbitDrag {
    pub rotate_speed: f32,
    last_position: Option<Vec2>,
}

impl OrbitDrag {
    #[must_use]
    pub fn new(rotate_speed: f32) -> Self {
        Self {
            rotate_speed,
            last_position: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.last_position = Some(position);
    }

    /// Applies the motion since the previous event. Ignored while no button
    /// is held.
    pub fn pointer_move(&mut self, position: Vec2, state: &mut CameraState) {
        let Some(last) = self.last_position else {
            return;
        };
        let delta = position - last;
        state.apply_delta(delta.x * self.rotate_speed, delta.y * self.rotate_speed);
        self.last_position = Some(position);
    }

    pub fn pointer_up(&mut self) {
        self.last_position = None;
    }

    /// Leaving the viewport ends the drag.
    pub fn pointer_leave(&mut self) {
        self.last_position = None;
    }
}

impl Default for OrbitDrag {
    fn default() -> Self {
        Self::new(0.01)
    }
}
