//! Primitive Geometry Tests
//!
//! Tests for:
//! - sphere / cylinder / box / plate vertex and index counts
//! - normals: unit length, lateral cylinder normals, cap normals
//! - index validity and outward winding
//! - MeshData byte views and bounding boxes
//! - MeshLibrary contents and uploads

use glam::{Mat4, Vec3};

use figura::renderer::DrawRecorder;
use figura::resources::primitives::{
    CylinderOptions, PlateOptions, SphereOptions, create_box, create_cube, create_cylinder,
    create_plate, create_sphere,
};
use figura::resources::{BoundingBox, MeshData, MeshLibrary, PrimitiveKind};
use figura::settings::{PropSettings, TessellationSettings};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn assert_indices_in_range(mesh: &MeshData) {
    let count = mesh.vertex_count() as u32;
    assert_eq!(mesh.index_count() % 3, 0);
    for &i in &mesh.indices {
        assert!(i < count, "index {i} out of range for {count} vertices");
    }
}

fn assert_unit_normals(mesh: &MeshData) {
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal(i).unwrap();
        assert!(approx(n.length(), 1.0), "normal {i} = {n:?} is not unit length");
    }
}

fn face_normal(mesh: &MeshData, tri: usize) -> (Vec3, Vec3) {
    let idx = &mesh.indices[tri * 3..tri * 3 + 3];
    let a = mesh.position(idx[0] as usize).unwrap();
    let b = mesh.position(idx[1] as usize).unwrap();
    let c = mesh.position(idx[2] as usize).unwrap();
    ((b - a).cross(c - a), (a + b + c) / 3.0)
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn sphere_counts() {
    let mesh = create_sphere(SphereOptions {
        radius: 2.0,
        lat_bands: 8,
        lon_bands: 12,
    });
    assert_eq!(mesh.vertex_count(), 9 * 13);
    assert_eq!(mesh.index_count(), 8 * 12 * 6);
    assert_indices_in_range(&mesh);
}

#[test]
fn sphere_normals_are_scaled_down_positions() {
    let radius = 1.5;
    let mesh = create_sphere(SphereOptions {
        radius,
        lat_bands: 6,
        lon_bands: 10,
    });
    assert_unit_normals(&mesh);
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i).unwrap();
        let n = mesh.normal(i).unwrap();
        assert!(vec3_approx(p / radius, n), "vertex {i}: {p:?} vs {n:?}");
    }
}

#[test]
fn sphere_bounds_match_radius() {
    let bb = create_sphere(SphereOptions {
        radius: 0.5,
        lat_bands: 16,
        lon_bands: 16,
    })
    .bounding_box()
    .unwrap();
    assert!(approx(bb.max.y, 0.5));
    assert!(approx(bb.min.y, -0.5));
    assert!(vec3_approx(bb.center(), Vec3::ZERO));
}

// ============================================================================
// Cylinder
// ============================================================================

#[test]
fn open_cylinder_counts() {
    let mesh = create_cylinder(CylinderOptions {
        radial_segments: 10,
        height_segments: 3,
        open_ended: true,
        ..Default::default()
    });
    assert_eq!(mesh.vertex_count(), 4 * 11);
    assert_eq!(mesh.index_count(), 3 * 10 * 6);
    assert_indices_in_range(&mesh);
}

#[test]
fn caps_add_centre_and_rim_per_end() {
    let radial = 12;
    let open = create_cylinder(CylinderOptions {
        radial_segments: radial,
        open_ended: true,
        ..Default::default()
    });
    let closed = create_cylinder(CylinderOptions {
        radial_segments: radial,
        open_ended: false,
        ..Default::default()
    });

    let radial = radial as usize;
    assert_eq!(closed.vertex_count() - open.vertex_count(), 2 * (radial + 2));
    assert_eq!(closed.index_count() - open.index_count(), 2 * radial * 3);
    assert_indices_in_range(&closed);
}

#[test]
fn straight_cylinder_lateral_normals_are_horizontal() {
    let radial = 16_u32;
    let rows = 2_u32;
    let mesh = create_cylinder(CylinderOptions {
        radius_top: 0.7,
        radius_bottom: 0.7,
        height: 3.0,
        radial_segments: radial,
        height_segments: rows,
        open_ended: false,
    });
    assert_unit_normals(&mesh);

    let lateral = ((rows + 1) * (radial + 1)) as usize;
    for i in 0..lateral {
        let n = mesh.normal(i).unwrap();
        assert!(approx(n.y, 0.0), "lateral normal {i} has y = {}", n.y);
        let p = mesh.position(i).unwrap();
        let radial_dir = Vec3::new(p.x, 0.0, p.z).normalize();
        assert!(vec3_approx(n, radial_dir));
    }
}

#[test]
fn unit_limb_cylinder_has_flat_side_normals() {
    let mesh = create_cylinder(CylinderOptions {
        radius_top: 0.5,
        radius_bottom: 0.5,
        height: 1.0,
        radial_segments: 16,
        height_segments: 1,
        open_ended: false,
    });
    assert_unit_normals(&mesh);
    assert_indices_in_range(&mesh);

    let lateral = 2 * 17;
    for i in 0..lateral {
        let n = mesh.normal(i).unwrap();
        assert_eq!(n.y, 0.0, "lateral normal {i} has y = {}", n.y);
        let p = mesh.position(i).unwrap();
        assert!(approx(p.y.abs(), 0.5));
        assert!(approx(Vec3::new(p.x, 0.0, p.z).length(), 0.5));
    }
}

#[test]
fn cone_lateral_normals_tilt_up() {
    let mesh = create_cylinder(CylinderOptions {
        radius_top: 0.0,
        radius_bottom: 1.0,
        height: 1.0,
        open_ended: true,
        ..Default::default()
    });
    let n = mesh.normal(0).unwrap();
    assert!(n.y > 0.0);
    assert!(approx(n.y, 1.0 / 2.0_f32.sqrt()));
}

#[test]
fn cap_normals_point_along_axis() {
    let radial = 8_usize;
    let mesh = create_cylinder(CylinderOptions {
        radial_segments: radial as u32,
        height_segments: 1,
        ..Default::default()
    });
    let lateral = 2 * (radial + 1);
    let cap = radial + 2;

    for i in lateral..lateral + cap {
        assert_eq!(mesh.normal(i).unwrap(), Vec3::Y);
    }
    for i in lateral + cap..lateral + 2 * cap {
        assert_eq!(mesh.normal(i).unwrap(), Vec3::NEG_Y);
    }
}

#[test]
fn cylinder_spans_half_height_each_way() {
    let bb = create_cylinder(CylinderOptions {
        radius_top: 0.5,
        radius_bottom: 0.5,
        height: 2.0,
        ..Default::default()
    })
    .bounding_box()
    .unwrap();
    assert!(approx(bb.min.y, -1.0));
    assert!(approx(bb.max.y, 1.0));
    assert!(approx(bb.max.x, 0.5));
}

#[test]
fn cap_triangles_face_outward() {
    let radial = 12_usize;
    let mesh = create_cylinder(CylinderOptions {
        radial_segments: radial as u32,
        height_segments: 1,
        ..Default::default()
    });
    let lateral_tris = radial * 2;

    for t in lateral_tris..lateral_tris + radial {
        assert!(face_normal(&mesh, t).0.y > 0.0, "top cap triangle {t} faces down");
    }
    for t in lateral_tris + radial..lateral_tris + 2 * radial {
        assert!(face_normal(&mesh, t).0.y < 0.0, "bottom cap triangle {t} faces up");
    }
}

// ============================================================================
// Box
// ============================================================================

#[test]
fn cube_counts_and_face_normals() {
    let mesh = create_cube();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.index_count(), 36);
    assert_indices_in_range(&mesh);
    assert_unit_normals(&mesh);

    // Four vertices per face share one normal
    for face in 0..6 {
        let n = mesh.normal(face * 4).unwrap();
        for corner in 1..4 {
            assert_eq!(mesh.normal(face * 4 + corner).unwrap(), n);
        }
    }
}

#[test]
fn cube_triangles_face_outward() {
    let mesh = create_cube();
    for t in 0..mesh.triangle_count() {
        let (n, centroid) = face_normal(&mesh, t);
        assert!(n.dot(centroid) > 0.0, "triangle {t} winds inward");
    }
}

#[test]
fn box_extents() {
    let bb = create_box(2.0, 4.0, 6.0).bounding_box().unwrap();
    assert!(vec3_approx(bb.size(), Vec3::new(2.0, 4.0, 6.0)));
    assert!(vec3_approx(bb.center(), Vec3::ZERO));
}

// ============================================================================
// Plate
// ============================================================================

#[test]
fn plate_counts() {
    let segments = 20_usize;
    let mesh = create_plate(PlateOptions {
        segments: segments as u32,
        ..Default::default()
    });
    assert_eq!(mesh.vertex_count(), 4 * 2 * (segments + 1));
    assert_eq!(mesh.index_count(), 4 * 6 * segments);
    assert_indices_in_range(&mesh);
    assert_unit_normals(&mesh);
}

#[test]
fn plate_extents() {
    let mesh = create_plate(PlateOptions {
        outer_radius: 0.3,
        inner_radius: 0.05,
        thickness: 0.1,
        segments: 32,
    });
    let bb = mesh.bounding_box().unwrap();
    assert!(approx(bb.max.x, 0.3));
    assert!(approx(bb.max.y, 0.05));
    assert!(approx(bb.min.y, -0.05));

    // No vertex inside the hole
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i).unwrap();
        let r = Vec3::new(p.x, 0.0, p.z).length();
        assert!(r > 0.05 - EPSILON, "vertex {i} at radius {r}");
    }
}

#[test]
fn plate_top_faces_up() {
    let segments = 16_usize;
    let mesh = create_plate(PlateOptions {
        segments: segments as u32,
        ..Default::default()
    });
    // First strip is the top annulus
    for t in 0..2 * segments {
        assert!(face_normal(&mesh, t).0.y > 0.0, "top triangle {t} faces down");
    }
}

#[test]
fn plate_segments_are_clamped() {
    let mesh = create_plate(PlateOptions {
        segments: 0,
        ..Default::default()
    });
    assert_eq!(mesh.vertex_count(), 4 * 2 * 4);
}

// ============================================================================
// MeshData / BoundingBox
// ============================================================================

#[test]
fn byte_views_match_lengths() {
    let mesh = create_cube();
    assert_eq!(mesh.position_bytes().len(), 24 * 3 * 4);
    assert_eq!(mesh.normal_bytes().len(), 24 * 3 * 4);
    assert_eq!(mesh.index_bytes().len(), 36 * 4);
    assert_eq!(mesh.positions_flat().len(), 72);
}

#[test]
fn empty_mesh_has_no_bounds() {
    assert!(MeshData::default().bounding_box().is_none());
}

#[test]
fn bounding_box_transform_and_union() {
    let bb = BoundingBox::from_points([Vec3::splat(-1.0), Vec3::splat(1.0)]).unwrap();
    let moved = bb.transform(&Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0)));
    assert!(vec3_approx(moved.center(), Vec3::new(3.0, 0.0, 0.0)));

    let both = bb.union(&moved);
    assert!(vec3_approx(both.min, Vec3::splat(-1.0)));
    assert!(vec3_approx(both.max, Vec3::new(4.0, 1.0, 1.0)));
}

// ============================================================================
// MeshLibrary
// ============================================================================

#[test]
fn library_canonical_sizes() {
    let props = PropSettings::default();
    let library = MeshLibrary::new(&TessellationSettings::default(), &props);

    let sphere = library.get(PrimitiveKind::Sphere).bounding_box().unwrap();
    assert!(approx(sphere.max.x, 0.5));

    let limb = library.get(PrimitiveKind::Limb).bounding_box().unwrap();
    assert!(approx(limb.size().y, 1.0));
    assert!(approx(limb.max.x, 0.5));

    let cube = library.get(PrimitiveKind::Cube).bounding_box().unwrap();
    assert!(vec3_approx(cube.size(), Vec3::ONE));

    let bar = library.get(PrimitiveKind::Bar).bounding_box().unwrap();
    assert!(approx(bar.min.y, -1.0));
    assert!(approx(bar.max.y, 1.0));
    assert!(approx(bar.max.x, props.bar_radius));

    let plate = library.get(PrimitiveKind::Plate).bounding_box().unwrap();
    assert!(approx(plate.max.x, props.plate_outer_radius));
    assert!(approx(plate.size().y, props.plate_thickness));
}

#[test]
fn library_uploads_every_kind_once() {
    let library = MeshLibrary::default();
    let mut recorder = DrawRecorder::new();
    library.upload_to(&mut recorder);

    assert_eq!(recorder.uploads.len(), PrimitiveKind::ALL.len());
    for kind in PrimitiveKind::ALL {
        let uploaded = recorder.uploads.iter().find(|(k, _)| *k == kind).unwrap();
        assert_eq!(uploaded.1, library.get(kind).index_count());
        assert_eq!(library.index_count(kind) as usize, uploaded.1);
    }
}
