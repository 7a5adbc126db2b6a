use crate::resources::geometry::MeshData;
use glam::Vec3;

/// Unit cube centred on the origin (edge length 1).
#[must_use]
pub fn create_cube() -> MeshData {
    create_box(1.0, 1.0, 1.0)
}

/// Axis-aligned box centred on the origin.
///
/// 24 vertices (4 per face, no sharing across faces) so every face keeps a
/// constant normal; 12 triangles.
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> MeshData {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    // Each face: normal + 4 corners, counter-clockwise seen from outside
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // Front face (+Z)
        ([0.0, 0.0, 1.0], [[-w, -h, d], [w, -h, d], [w, h, d], [-w, h, d]]),
        // Back face (-Z)
        ([0.0, 0.0, -1.0], [[-w, -h, -d], [-w, h, -d], [w, h, -d], [w, -h, -d]]),
        // Top face (+Y)
        ([0.0, 1.0, 0.0], [[-w, h, -d], [-w, h, d], [w, h, d], [w, h, -d]]),
        // Bottom face (-Y)
        ([0.0, -1.0, 0.0], [[-w, -h, -d], [w, -h, -d], [w, -h, d], [-w, -h, d]]),
        // Right face (+X)
        ([1.0, 0.0, 0.0], [[w, -h, -d], [w, h, -d], [w, h, d], [w, -h, d]]),
        // Left face (-X)
        ([-1.0, 0.0, 0.0], [[-w, -h, -d], [-w, -h, d], [-w, h, d], [-w, h, -d]]),
    ];

    let mut mesh = MeshData::with_capacity(24, 36);
    for (normal, corners) in faces {
        let normal = Vec3::from_array(normal);
        let base = mesh.vertex_count() as u32;
        for corner in corners {
            mesh.push_vertex(Vec3::from_array(corner), normal);
        }
        // 0, 1, 2,  0, 2, 3
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base, base + 2, base + 3);
    }

    mesh
}
