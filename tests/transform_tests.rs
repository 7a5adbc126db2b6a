//! Transform Stack Tests
//!
//! Tests for:
//! - push/pop copy semantics and underflow
//! - post-multiplication order of elementary operations
//! - load_identity / load_matrix independence from history
//! - scoped balance checking
//! - randomized push/pop sequences

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use figura::errors::FiguraError;
use figura::scene::TransformStack;

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn mat4_approx(a: &Mat4, b: &Mat4) -> bool {
    a.abs_diff_eq(*b, EPSILON)
}

// ============================================================================
// Push / Pop
// ============================================================================

#[test]
fn push_leaves_current_unchanged() {
    let mut stack = TransformStack::new();
    stack.translate(Vec3::new(1.0, 2.0, 3.0));
    let before = stack.current_matrix();

    stack.push();

    assert_eq!(stack.current_matrix(), before);
    assert_eq!(stack.depth(), 1);
}

#[test]
fn pop_restores_saved_copy_after_mutation() {
    let mut stack = TransformStack::new();
    stack.translate(Vec3::X);
    let saved = stack.current_matrix();

    stack.push();
    stack.rotate(FRAC_PI_2, Vec3::Y).scale(Vec3::splat(3.0));
    assert_ne!(stack.current_matrix(), saved);

    stack.pop().unwrap();
    assert_eq!(stack.current_matrix(), saved);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn pop_on_empty_history_underflows() {
    let mut stack = TransformStack::new();
    let err = stack.pop().unwrap_err();
    assert!(matches!(err, FiguraError::StackUnderflow));
}

#[test]
fn current_matrix_is_a_copy() {
    let mut stack = TransformStack::new();
    let snapshot = stack.current_matrix();
    stack.translate(Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(snapshot, Mat4::IDENTITY);
}

// ============================================================================
// Composition Order
// ============================================================================

#[test]
fn operations_post_multiply() {
    let mut stack = TransformStack::new();
    stack
        .translate(Vec3::new(0.0, 1.0, 0.0))
        .rotate(FRAC_PI_2, Vec3::Z)
        .scale(Vec3::splat(2.0));

    let expected = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))
        * Mat4::from_rotation_z(FRAC_PI_2)
        * Mat4::from_scale(Vec3::splat(2.0));
    assert!(mat4_approx(&stack.current_matrix(), &expected));

    // Local +X is scaled, rotated onto +Y, then lifted
    let p = stack.current_matrix().transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(0.0, 3.0, 0.0)), "got {p:?}");
}

#[test]
fn child_translation_is_in_parent_frame() {
    let mut stack = TransformStack::new();
    stack.rotate(FRAC_PI_2, Vec3::Y);
    stack.translate(Vec3::Z);
    let origin = stack.current_matrix().transform_point3(Vec3::ZERO);
    assert!(vec3_approx(origin, Vec3::X), "got {origin:?}");
}

#[test]
fn multiply_matches_elementary_ops() {
    let m = Mat4::from_scale_rotation_translation(
        Vec3::new(1.0, 2.0, 1.0),
        glam::Quat::from_rotation_x(0.3),
        Vec3::new(4.0, 0.0, -1.0),
    );
    let mut a = TransformStack::new();
    a.translate(Vec3::Y).multiply(&m);
    assert!(mat4_approx(&a.current_matrix(), &(Mat4::from_translation(Vec3::Y) * m)));
}

#[test]
fn rotate_with_zero_axis_is_noop() {
    let mut stack = TransformStack::new();
    stack.translate(Vec3::X);
    let before = stack.current_matrix();
    stack.rotate(1.0, Vec3::ZERO);
    assert_eq!(stack.current_matrix(), before);
}

// ============================================================================
// Load
// ============================================================================

#[test]
fn load_identity_ignores_history() {
    let mut stack = TransformStack::new();
    stack.translate(Vec3::X);
    stack.push();
    stack.translate(Vec3::Y);
    stack.load_identity();

    assert_eq!(stack.current_matrix(), Mat4::IDENTITY);
    assert_eq!(stack.depth(), 1);

    stack.pop().unwrap();
    assert_eq!(stack.current_matrix(), Mat4::from_translation(Vec3::X));
}

#[test]
fn load_matrix_reenters_captured_frame() {
    let mut stack = TransformStack::new();
    stack.translate(Vec3::new(2.0, 0.0, 0.0)).rotate(0.7, Vec3::X);
    let captured = stack.current_matrix();

    stack.load_identity();
    stack.push();
    stack.load_matrix(captured);
    assert_eq!(stack.current_matrix(), captured);
    stack.pop().unwrap();
    assert_eq!(stack.current_matrix(), Mat4::IDENTITY);
}

// ============================================================================
// Scoped
// ============================================================================

#[test]
fn scoped_returns_closure_value() {
    let mut stack = TransformStack::new();
    let inner = stack
        .scoped(|s| {
            s.translate(Vec3::Z);
            Ok(s.current_matrix())
        })
        .unwrap();
    assert_eq!(inner, Mat4::from_translation(Vec3::Z));
    assert_eq!(stack.current_matrix(), Mat4::IDENTITY);
    assert_eq!(stack.max_depth(), 1);
}

#[test]
fn scoped_reports_extra_pop() {
    let mut stack = TransformStack::new();
    stack.push();
    let err = stack
        .scoped(|s| {
            s.pop()?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, FiguraError::UnbalancedStack { expected: 2, found: 1, .. }));
}

// ============================================================================
// Randomized Balance
// ============================================================================

/// Random nested scopes with random operations must return to the initial
/// transform and depth.
#[test]
fn random_balanced_sequences_restore_state() {
    let mut rng = StdRng::seed_from_u64(0x5eed_f16a);

    for _ in 0..200 {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ));
        let start = stack.current_matrix();
        stack.push();
        let mut open = 0_usize;

        for _ in 0..rng.gen_range(1..60) {
            match rng.gen_range(0..5) {
                0 => {
                    stack.push();
                    open += 1;
                }
                1 if open > 0 => {
                    stack.pop().unwrap();
                    open -= 1;
                }
                2 => {
                    stack.rotate(rng.gen_range(-3.0..3.0), Vec3::new(0.3, 1.0, -0.2));
                }
                3 => {
                    stack.scale(Vec3::splat(rng.gen_range(0.5..2.0)));
                }
                _ => {
                    stack.translate(Vec3::new(rng.gen_range(-2.0..2.0), 0.5, 0.0));
                }
            }
            assert_eq!(stack.depth(), open + 1);
        }

        while open > 0 {
            stack.pop().unwrap();
            open -= 1;
        }
        stack.pop().unwrap();

        assert_eq!(stack.current_matrix(), start);
        assert_eq!(stack.depth(), 0);
    }
}

#[test]
fn random_nested_scopes_leave_parent_untouched() {
    fn nest(stack: &mut TransformStack, rng: &mut StdRng, level: u32) {
        let before = stack.current_matrix();
        let depth = stack.depth();
        stack
            .scoped(|s| {
                s.translate(Vec3::new(0.0, rng.gen_range(-1.0..1.0), 0.0))
                    .rotate(rng.gen_range(-1.0..1.0), Vec3::X);
                if level > 0 {
                    for _ in 0..rng.gen_range(1..3) {
                        nest(s, rng, level - 1);
                    }
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(stack.current_matrix(), before);
        assert_eq!(stack.depth(), depth);
    }

    let mut rng = StdRng::seed_from_u64(42);
    let mut stack = TransformStack::new();
    for _ in 0..20 {
        nest(&mut stack, &mut rng, 4);
    }
    assert_eq!(stack.depth(), 0);
}
