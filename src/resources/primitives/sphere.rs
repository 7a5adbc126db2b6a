use crate::resources::geometry::MeshData;
use glam::Vec3;
use std::f32::consts::PI;

pub struct SphereOptions {
    pub radius: f32,
    /// Rings from pole to pole.
    pub lat_bands: u32,
    /// Slices around the Y axis.
    pub lon_bands: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            lat_bands: 16,
            lon_bands: 32,
        }
    }
}

/// UV sphere centred on the origin.
///
/// Produces `(lat_bands + 1) * (lon_bands + 1)` vertices (the seam column is
/// duplicated) and `lat_bands * lon_bands * 6` indices. Pole quads are emitted
/// as degenerate triangles rather than special-cased.
#[must_use]
pub fn create_sphere(options: SphereOptions) -> MeshData {
    let radius = options.radius;
    let lat_bands = options.lat_bands.max(1);
    let lon_bands = options.lon_bands.max(1);

    let stride = lon_bands + 1;
    let mut mesh = MeshData::with_capacity(
        ((lat_bands + 1) * stride) as usize,
        (lat_bands * lon_bands * 6) as usize,
    );

    for lat in 0..=lat_bands {
        // Latitude angle: 0 at the north pole, PI at the south pole
        let theta = lat as f32 / lat_bands as f32 * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=lon_bands {
            let phi = lon as f32 / lon_bands as f32 * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let normal = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            mesh.push_vertex(normal * radius, normal);
        }
    }

    for lat in 0..lat_bands {
        for lon in 0..lon_bands {
            let first = lat * stride + lon;
            let second = first + stride;

            mesh.push_triangle(first, second, first + 1);
            mesh.push_triangle(second, second + 1, first + 1);
        }
    }

    mesh
}
