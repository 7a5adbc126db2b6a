use crate::resources::geometry::MeshData;
use glam::Vec3;
use std::f32::consts::TAU;

/// Annular disc lying in the XZ plane, thickness along Y.
pub struct PlateOptions {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub thickness: f32,
    pub segments: u32,
}

impl Default for PlateOptions {
    fn default() -> Self {
        Self {
            outer_radius: 0.25,
            inner_radius: 0.03,
            thickness: 0.05,
            segments: 32,
        }
    }
}

/// Disc with a hole, built from four ruled surfaces: top annulus, bottom
/// annulus, outer wall and inner wall.
///
/// Each surface is a zig-zag strip of `2 * (segments + 1)` vertices and
/// `6 * segments` indices, so surfaces never share vertices and keep their
/// own normals.
#[must_use]
pub fn create_plate(options: PlateOptions) -> MeshData {
    let segments = options.segments.max(3);
    let half = options.thickness / 2.0;
    let outer = options.outer_radius;
    let inner = options.inner_radius;

    let strip_vertices = 2 * (segments + 1) as usize;
    let mut mesh = MeshData::with_capacity(4 * strip_vertices, 24 * segments as usize);

    // Top: inner ring first so the strip faces +Y
    push_strip(&mut mesh, segments, |dir| {
        (
            (dir * inner + Vec3::Y * half, Vec3::Y),
            (dir * outer + Vec3::Y * half, Vec3::Y),
        )
    });
    // Bottom
    push_strip(&mut mesh, segments, |dir| {
        (
            (dir * outer - Vec3::Y * half, Vec3::NEG_Y),
            (dir * inner - Vec3::Y * half, Vec3::NEG_Y),
        )
    });
    // Outer wall, facing away from the axis
    push_strip(&mut mesh, segments, |dir| {
        (
            (dir * outer + Vec3::Y * half, dir),
            (dir * outer - Vec3::Y * half, dir),
        )
    });
    // Inner wall, facing the axis
    push_strip(&mut mesh, segments, |dir| {
        (
            (dir * inner - Vec3::Y * half, -dir),
            (dir * inner + Vec3::Y * half, -dir),
        )
    });

    mesh
}

type StripVertex = (Vec3, Vec3);

/// Emits rings `A` and `B` interleaved (`A0 B0 A1 B1 ...`) and stitches them
/// with triangles `(Ai, Bi, Ai+1)` and `(Bi, Bi+1, Ai+1)`.
fn push_strip(
    mesh: &mut MeshData,
    segments: u32,
    ring: impl Fn(Vec3) -> (StripVertex, StripVertex),
) {
    let base = mesh.vertex_count() as u32;

    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let dir = Vec3::new(sin_theta, 0.0, cos_theta);

        let ((a_pos, a_normal), (b_pos, b_normal)) = ring(dir);
        mesh.push_vertex(a_pos, a_normal);
        mesh.push_vertex(b_pos, b_normal);
    }

    for i in 0..segments {
        let a0 = base + 2 * i;
        let b0 = a0 + 1;
        let a1 = a0 + 2;
        let b1 = a0 + 3;

        mesh.push_triangle(a0, b0, a1);
        mesh.push_triangle(b0, b1, a1);
    }
}
