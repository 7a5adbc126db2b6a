//! Renderer Seam
//!
//! The core never talks to a graphics API directly. It drives a
//! [`RenderBackend`], which receives:
//!
//! 1. one [`upload_geometry`](RenderBackend::upload_geometry) per primitive at
//!    initialization,
//! 2. per drawn part, a [`bind_geometry`](RenderBackend::bind_geometry)
//!    followed by a [`draw_indexed`](RenderBackend::draw_indexed) carrying the
//!    model-view and model-view-projection matrices.
//!
//! Shader setup, buffer objects and the frame loop belong to the backend.
//! [`DrawRecorder`] is a backend that only records calls; it serves headless
//! runs and tests.

use glam::Mat4;

use crate::resources::{MeshData, MeshLibrary, PrimitiveKind};

pub trait RenderBackend {
    fn upload_geometry(&mut self, kind: PrimitiveKind, mesh: &MeshData);

    fn bind_geometry(&mut self, kind: PrimitiveKind);

    fn draw_indexed(&mut self, index_count: u32, model_view: &Mat4, model_view_projection: &Mat4);
}

/// Per-frame counters returned by [`Figure::render_frame`](crate::Figure::render_frame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: u32,
    pub triangles: u32,
    pub max_stack_depth: usize,
}

/// Frame-scoped view of the backend: applies the camera to model matrices
/// and counts what was submitted.
pub struct DrawContext<'a, B: RenderBackend + ?Sized> {
    meshes: &'a MeshLibrary,
    backend: &'a mut B,
    view: Mat4,
    projection: Mat4,
    stats: FrameStats,
}

impl<'a, B: RenderBackend + ?Sized> DrawContext<'a, B> {
    pub fn new(meshes: &'a MeshLibrary, backend: &'a mut B, view: Mat4, projection: Mat4) -> Self {
        Self {
            meshes,
            backend,
            view,
            projection,
            stats: FrameStats::default(),
        }
    }

    /// Draws `kind` with the given world (model) matrix.
    pub fn draw(&mut self, kind: PrimitiveKind, model: &Mat4) {
        let model_view = self.view * *model;
        let model_view_projection = self.projection * model_view;
        let index_count = self.meshes.index_count(kind);

        self.backend.bind_geometry(kind);
        self.backend
            .draw_indexed(index_count, &model_view, &model_view_projection);

        self.stats.draw_calls += 1;
        self.stats.triangles += index_count / 3;
    }

    #[inline]
    #[must_use]
    pub fn meshes(&self) -> &MeshLibrary {
        self.meshes
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub(crate) fn note_stack_depth(&mut self, depth: usize) {
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(depth);
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

// ---------------------------------------------------------------------------
// DrawRecorder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub geometry: PrimitiveKind,
    pub index_count: u32,
    pub model_view: Mat4,
    pub model_view_projection: Mat4,
}

/// Backend that keeps every call in memory.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    pub uploads: Vec<(PrimitiveKind, usize)>,
    pub calls: Vec<DrawCall>,
    bound: Option<PrimitiveKind>,
}

impl DrawRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets recorded draws, keeping uploads.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.bound = None;
    }

    pub fn calls_for(&self, kind: PrimitiveKind) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(move |call| call.geometry == kind)
    }
}

impl RenderBackend for DrawRecorder {
    fn upload_geometry(&mut self, kind: PrimitiveKind, mesh: &MeshData) {
        self.uploads.push((kind, mesh.index_count()));
    }

    fn bind_geometry(&mut self, kind: PrimitiveKind) {
        self.bound = Some(kind);
    }

    fn draw_indexed(&mut self, index_count: u32, model_view: &Mat4, model_view_projection: &Mat4) {
        let Some(geometry) = self.bound else {
            log::warn!("DrawRecorder: draw_indexed without bound geometry, skipping");
            return;
        };
        self.calls.push(DrawCall {
            geometry,
            index_count,
            model_view: *model_view,
            model_view_projection: *model_view_projection,
        });
    }
}
