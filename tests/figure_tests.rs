//! Figure Tests
//!
//! Tests for:
//! - Per-scenario draw counts and prop rigs
//! - Stack balance across many frames
//! - Camera matrices reaching the backend
//! - Barbell and ball placement relative to captured hands

use glam::{Mat4, Vec3};

use figura::animation::{JointId, Pose, PoseSource};
use figura::renderer::DrawRecorder;
use figura::resources::{MeshLibrary, PrimitiveKind};
use figura::scene::{CameraState, SocketId};
use figura::settings::FiguraSettings;
use figura::{Figure, PropRig, ScenarioKind};

const EPSILON: f32 = 1e-4;

fn setup() -> (FiguraSettings, MeshLibrary, DrawRecorder) {
    let _ = env_logger::builder().is_test(true).try_init();
    let settings = FiguraSettings::default();
    let meshes = MeshLibrary::new(&settings.tessellation, &settings.props);
    let mut recorder = DrawRecorder::new();
    meshes.upload_to(&mut recorder);
    (settings, meshes, recorder)
}

struct Frozen(Pose);

impl PoseSource for Frozen {
    fn pose_at(&self, _elapsed: f32) -> Pose {
        self.0
    }

    fn name(&self) -> &'static str {
        "frozen"
    }
}

// ============================================================================
// Draw Counts
// ============================================================================

#[test]
fn draw_counts_per_scenario() {
    let (settings, meshes, mut recorder) = setup();
    let expected = [
        (ScenarioKind::Running, 22),
        (ScenarioKind::Lunging, 23),
        (ScenarioKind::Spiking, 23),
        (ScenarioKind::Lifting, 25),
    ];

    for (kind, draws) in expected {
        let mut figure = Figure::new(kind, &settings).unwrap();
        recorder.clear_calls();
        let stats = figure
            .render_frame(0.37, &figure.initial_camera_state(), &meshes, &mut recorder)
            .unwrap();
        assert_eq!(stats.draw_calls, draws, "{kind}");
        assert_eq!(recorder.calls.len(), draws as usize, "{kind}");
        assert!(stats.triangles > 0);
    }
}

#[test]
fn rigs_match_scenarios() {
    let settings = FiguraSettings::default();
    assert_eq!(*Figure::new(ScenarioKind::Running, &settings).unwrap().rig(), PropRig::None);
    assert!(matches!(
        Figure::new(ScenarioKind::Spiking, &settings).unwrap().rig(),
        PropRig::Attached(_)
    ));
    assert!(matches!(
        Figure::new(ScenarioKind::Lifting, &settings).unwrap().rig(),
        PropRig::Barbell { .. }
    ));
    let lunge = Figure::new(ScenarioKind::Lunging, &settings).unwrap();
    assert!(lunge.skeleton().part(figura::PartId::Prop).is_some());
}

#[test]
fn uploads_happen_once_not_per_frame() {
    let (settings, meshes, mut recorder) = setup();
    let mut figure = Figure::new(ScenarioKind::Running, &settings).unwrap();
    let state = figure.initial_camera_state();
    for i in 0..5 {
        figure.render_frame(i as f32 * 0.016, &state, &meshes, &mut recorder).unwrap();
    }
    assert_eq!(recorder.uploads.len(), PrimitiveKind::ALL.len());
}

// ============================================================================
// Balance
// ============================================================================

#[test]
fn many_frames_stay_balanced() {
    let (settings, meshes, mut recorder) = setup();
    for kind in ScenarioKind::ALL {
        let mut figure = Figure::new(kind, &settings).unwrap();
        let mut state = figure.initial_camera_state();
        for i in 0..240 {
            state.apply_delta(0.01, 0.002);
            let stats = figure
                .render_frame(i as f32 / 60.0, &state, &meshes, &mut recorder)
                .unwrap();
            assert!(stats.max_stack_depth >= 5, "{kind}");
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn backend_receives_camera_matrices() {
    let (settings, meshes, mut recorder) = setup();
    let mut figure = Figure::new(ScenarioKind::Running, &settings).unwrap();
    figure.camera_mut().set_aspect(1600.0, 900.0);
    let state = CameraState::new(0.3, -0.2);

    recorder.clear_calls();
    figure.render_frame(0.0, &state, &meshes, &mut recorder).unwrap();

    let view = figure.camera().view_matrix(&state);
    let projection = figure.camera().projection_matrix();
    for call in &recorder.calls {
        let expected = projection * call.model_view;
        assert!(call.model_view_projection.abs_diff_eq(expected, EPSILON));
    }

    // Torso cube model matrix recovered from model-view
    let torso = recorder.calls_for(PrimitiveKind::Cube).next().unwrap();
    let model = view.inverse() * torso.model_view;
    assert!(model.w_axis.y > 0.5);
}

// ============================================================================
// Props
// ============================================================================

#[test]
fn barbell_spans_both_hands() {
    let (settings, meshes, mut recorder) = setup();
    let mut figure = Figure::new(ScenarioKind::Lifting, &settings).unwrap();
    let state = CameraState::default();

    recorder.clear_calls();
    figure.render_frame(1.1, &state, &meshes, &mut recorder).unwrap();

    let frame = figure.last_frame();
    let left = frame.socket(SocketId::LeftHand).unwrap().w_axis.truncate();
    let right = frame.socket(SocketId::RightHand).unwrap().w_axis.truncate();

    let view_inv = figure.camera().view_matrix(&state).inverse();
    let bar = recorder.calls_for(PrimitiveKind::Bar).next().unwrap();
    let model = view_inv * bar.model_view;
    let mid = model.w_axis.truncate();
    assert!((mid - (left + right) * 0.5).length() < EPSILON);

    // Local +Y of the unscaled bar points from left to right hand
    let axis = model.transform_vector3(Vec3::Y).normalize();
    assert!((axis - (right - left).normalize()).length() < EPSILON);
    assert_eq!(recorder.calls_for(PrimitiveKind::Plate).count(), 2);
}

#[test]
fn ball_stays_with_right_hand() {
    let (settings, meshes, mut recorder) = setup();
    let mut figure = Figure::new(ScenarioKind::Spiking, &settings).unwrap();
    let state = CameraState::default();
    let view_inv = figure.camera().view_matrix(&state).inverse();
    let expected_gap = settings.proportions.hand_radius + settings.props.ball_radius;

    for t in [0.0, 0.3, 0.6, 2.0] {
        recorder.clear_calls();
        figure.render_frame(t, &state, &meshes, &mut recorder).unwrap();
        let hand = figure.last_frame().socket(SocketId::RightHand).unwrap().w_axis.truncate();
        // The ball is drawn last
        let ball = recorder.calls.last().unwrap();
        assert_eq!(ball.geometry, PrimitiveKind::Sphere);
        let centre = (view_inv * ball.model_view).w_axis.truncate();
        assert!(((centre - hand).length() - expected_gap).abs() < EPSILON, "t = {t}");
    }
}

#[test]
fn custom_pose_source_drives_figure() {
    let (settings, meshes, mut recorder) = setup();
    let pose = Pose::REST.with_angle(JointId::ShoulderL, 1.0);
    let mut figure = Figure::new(ScenarioKind::Running, &settings)
        .unwrap()
        .with_pose_source(Box::new(Frozen(pose)));

    assert_eq!(figure.pose_at(99.0), pose);
    figure
        .render_frame(0.0, &CameraState::default(), &meshes, &mut recorder)
        .unwrap();
    let hand = figure.last_frame().socket(SocketId::LeftHand).unwrap().w_axis.truncate();
    assert!(hand.z > 0.0);
}

#[test]
fn invalid_settings_are_rejected() {
    let mut settings = FiguraSettings::default();
    settings.camera.far = 0.01;
    assert!(Figure::new(ScenarioKind::Running, &settings).is_err());
}

#[test]
fn view_matrix_is_rigid() {
    let figure = Figure::new(ScenarioKind::Running, &FiguraSettings::default()).unwrap();
    let view = figure.camera().view_matrix(&CameraState::new(10.0, 5.0));
    assert!(view.determinant().abs() > 0.5);
    assert_ne!(view, Mat4::IDENTITY);
}
