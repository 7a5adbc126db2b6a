//! Transform Stack
//!
//! A matrix stack in the fixed-function style: one mutable *current*
//! transform plus a LIFO history of saved copies.
//!
//! Every elementary operation post-multiplies the current transform, so a
//! chain such as `translate → rotate → scale` applies child-local operations
//! on top of the parent-accumulated frame:
//!
//! ```text
//! current = current * T(v) * R(angle, axis) * S(s)
//! ```
//!
//! `Mat4` is `Copy`, so [`TransformStack::push`] stores a value. Mutating the
//! current transform after a push never reaches the saved copy.
//!
//! # Balance
//!
//! Every `push` must be matched by exactly one `pop` before the enclosing
//! scope returns, otherwise sibling parts render relative to the wrong parent
//! frame. [`TransformStack::scoped`] enforces this for a closure.

use glam::{Mat4, Vec3};

use crate::errors::{FiguraError, Result};

const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    history: Vec<Mat4>,
    max_depth: usize,
}

impl TransformStack {
    /// Creates a stack whose current transform is the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: Mat4::IDENTITY,
            history: Vec::with_capacity(capacity),
            max_depth: 0,
        }
    }

    /// Saves a copy of the current transform. The current transform is left
    /// untouched.
    pub fn push(&mut self) {
        self.history.push(self.current);
        self.max_depth = self.max_depth.max(self.history.len());
    }

    /// Restores the most recently saved transform.
    pub fn pop(&mut self) -> Result<()> {
        self.current = self.history.pop().ok_or(FiguraError::StackUnderflow)?;
        Ok(())
    }

    /// Resets the current transform to identity. History is not touched.
    pub fn load_identity(&mut self) {
        self.current = Mat4::IDENTITY;
    }

    /// Replaces the current transform, e.g. to re-enter a captured frame.
    pub fn load_matrix(&mut self, matrix: Mat4) {
        self.current = matrix;
    }

    pub fn translate(&mut self, v: Vec3) -> &mut Self {
        self.current *= Mat4::from_translation(v);
        self
    }

    /// Rotates by `angle` radians about `axis`. The axis need not be unit
    /// length; a zero axis leaves the transform unchanged.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) -> &mut Self {
        match axis.try_normalize() {
            Some(axis) => self.current *= Mat4::from_axis_angle(axis, angle),
            None => log::warn!("TransformStack::rotate: zero-length axis, rotation skipped"),
        }
        self
    }

    pub fn scale(&mut self, s: Vec3) -> &mut Self {
        self.current *= Mat4::from_scale(s);
        self
    }

    pub fn multiply(&mut self, matrix: &Mat4) -> &mut Self {
        self.current *= *matrix;
        self
    }

    /// Returns a copy of the current transform.
    #[inline]
    #[must_use]
    pub fn current_matrix(&self) -> Mat4 {
        self.current
    }

    /// Number of saved transforms.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Deepest history length reached since creation or the last [`reset`](Self::reset).
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Clears history and statistics and loads the identity.
    pub fn reset(&mut self) {
        self.history.clear();
        self.current = Mat4::IDENTITY;
        self.max_depth = 0;
    }

    /// Runs `f` between a `push` and a `pop`.
    ///
    /// Fails with [`FiguraError::UnbalancedStack`] if `f` leaves the depth
    /// different from what it found. Errors leave the stack as it was at the
    /// point of failure; they are not recoverable.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        self.push();
        let inner_depth = self.depth();
        let out = f(self)?;
        let found = self.depth();
        if found != inner_depth {
            return Err(FiguraError::UnbalancedStack {
                context: "TransformStack::scoped",
                expected: inner_depth,
                found,
            });
        }
        self.pop()?;
        Ok(out)
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_restores_parent_frame() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::X);
        let parent = stack.current_matrix();

        stack
            .scoped(|s| {
                s.translate(Vec3::Y).scale(Vec3::splat(3.0));
                Ok(())
            })
            .unwrap();

        assert_eq!(stack.current_matrix(), parent);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scoped_reports_leaked_push() {
        let mut stack = TransformStack::new();
        let err = stack
            .scoped(|s| {
                s.push();
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(
            err,
            FiguraError::UnbalancedStack { expected: 1, found: 2, .. }
        ));
    }
}
