use crate::resources::geometry::MeshData;
use glam::Vec3;
use std::f32::consts::TAU;

pub struct CylinderOptions {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    /// Skip both end caps.
    pub open_ended: bool,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 1.0,
            radial_segments: 16,
            height_segments: 1,
            open_ended: false,
        }
    }
}

/// Cylinder (or cone frustum) along the Y axis, spanning `[-h/2, +h/2]`.
///
/// The lateral surface has `(height_segments + 1) * (radial_segments + 1)`
/// vertices. Each cap adds one centre vertex, a rim ring of
/// `radial_segments + 1` vertices and `radial_segments` fan triangles.
#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> MeshData {
    let radial = options.radial_segments.max(1);
    let rows = options.height_segments.max(1);
    let half_height = options.height / 2.0;

    let lateral_vertices = (rows + 1) * (radial + 1);
    let cap_vertices = if options.open_ended { 0 } else { 2 * (radial + 2) };
    let mut mesh = MeshData::with_capacity(
        (lateral_vertices + cap_vertices) as usize,
        (rows * radial * 6 + if options.open_ended { 0 } else { radial * 6 }) as usize,
    );

    generate_torso(&mut mesh, &options, radial, rows, half_height);

    // Zero-radius caps (cones) are still emitted so vertex counts stay uniform.
    if !options.open_ended {
        generate_cap(&mut mesh, options.radius_top, half_height, radial, true);
        generate_cap(&mut mesh, options.radius_bottom, half_height, radial, false);
    }

    mesh
}

fn generate_torso(
    mesh: &mut MeshData,
    options: &CylinderOptions,
    radial: u32,
    rows: u32,
    half_height: f32,
) {
    let slope = if options.height.abs() > f32::EPSILON {
        (options.radius_bottom - options.radius_top) / options.height
    } else {
        0.0
    };

    let base = mesh.vertex_count() as u32;

    for y in 0..=rows {
        let v = y as f32 / rows as f32;
        let radius = v * (options.radius_bottom - options.radius_top) + options.radius_top;
        let py = -v * options.height + half_height;

        for x in 0..=radial {
            let theta = x as f32 / radial as f32 * TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = Vec3::new(radius * sin_theta, py, radius * cos_theta);
            let normal = Vec3::new(sin_theta, slope, cos_theta).normalize();
            mesh.push_vertex(position, normal);
        }
    }

    let stride = radial + 1;
    for y in 0..rows {
        for x in 0..radial {
            let a = base + y * stride + x;
            let b = base + (y + 1) * stride + x;
            let c = b + 1;
            let d = a + 1;

            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }
}

fn generate_cap(mesh: &mut MeshData, radius: f32, half_height: f32, radial: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);

    let center = mesh.push_vertex(Vec3::new(0.0, half_height * sign, 0.0), normal);

    let rim_start = mesh.vertex_count() as u32;
    for x in 0..=radial {
        let theta = x as f32 / radial as f32 * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.push_vertex(
            Vec3::new(radius * sin_theta, half_height * sign, radius * cos_theta),
            normal,
        );
    }

    for x in 0..radial {
        let i = rim_start + x;
        if top {
            mesh.push_triangle(i, i + 1, center);
        } else {
            mesh.push_triangle(i + 1, i, center);
        }
    }
}
