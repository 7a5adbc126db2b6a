//! Headless showcase.
//!
//! Usage: `showcase [running|lunging|spiking|lifting|all] [settings.json]`
//!
//! Drives each selected scenario for a few seconds of synthetic 60 Hz
//! timestamps against a [`DrawRecorder`], slowly orbiting the camera, and
//! logs per-frame statistics. Run with `RUST_LOG=debug` for detail.

use anyhow::Context;
use figura::glam::Vec2;
use figura::{
    AnimationClock, DrawRecorder, Figure, FiguraSettings, FrameStats, MeshLibrary, OrbitDrag,
    ScenarioKind,
};

const FRAME_MS: f64 = 1000.0 / 60.0;
const FRAMES: u32 = 240;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let selection = args.next().unwrap_or_else(|| "all".to_string());
    let settings = match args.next() {
        Some(path) => FiguraSettings::from_json_file(&path)
            .with_context(|| format!("loading settings from {path}"))?,
        None => FiguraSettings::default(),
    };

    let kinds: Vec<ScenarioKind> = if selection == "all" {
        ScenarioKind::ALL.to_vec()
    } else {
        vec![selection.parse()?]
    };

    let meshes = MeshLibrary::new(&settings.tessellation, &settings.props);
    let mut backend = DrawRecorder::new();
    meshes.upload_to(&mut backend);

    for kind in kinds {
        run_scenario(kind, &settings, &meshes, &mut backend)?;
    }
    Ok(())
}

fn run_scenario(
    kind: ScenarioKind,
    settings: &FiguraSettings,
    meshes: &MeshLibrary,
    backend: &mut DrawRecorder,
) -> anyhow::Result<()> {
    let mut figure = Figure::new(kind, settings)?;
    figure.camera_mut().set_aspect(1280.0, 720.0);

    let mut state = figure.initial_camera_state();
    let mut drag = OrbitDrag::new(settings.camera.rotate_speed);
    let mut clock = AnimationClock::new();
    let mut totals = FrameStats::default();

    // Pretend the user drags slowly to the right for the whole run
    drag.pointer_down(Vec2::ZERO);

    for frame in 0..FRAMES {
        let timestamp = 10_000.0 + f64::from(frame) * FRAME_MS;
        drag.pointer_move(Vec2::new(frame as f32 * 0.5, 0.0), &mut state);

        backend.clear_calls();
        let elapsed = clock.elapsed(timestamp);
        let stats = figure
            .render_frame(elapsed, &state, meshes, backend)
            .with_context(|| format!("{kind} frame {frame}"))?;

        log::debug!(
            "{kind} t={elapsed:.3}s draws={} tris={} depth={}",
            stats.draw_calls,
            stats.triangles,
            stats.max_stack_depth
        );
        totals.draw_calls += stats.draw_calls;
        totals.triangles += stats.triangles;
        totals.max_stack_depth = totals.max_stack_depth.max(stats.max_stack_depth);
    }
    drag.pointer_up();

    if let Some(bounds) = figure.last_frame().bounds() {
        log::info!(
            "{kind}: final pivots span {:.2} x {:.2} x {:.2} m",
            bounds.size().x,
            bounds.size().y,
            bounds.size().z
        );
    }
    log::info!(
        "{kind}: {FRAMES} frames, {} draws, {} triangles, max stack depth {}, yaw {:.2} rad",
        totals.draw_calls,
        totals.triangles,
        totals.max_stack_depth,
        state.yaw
    );
    Ok(())
}
