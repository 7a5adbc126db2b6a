//! Canonical primitive buffers.
//!
//! Generated once at startup and reused for every draw via scaling. Shapes
//! are authored at unit size where possible so `scale(width, length, depth)`
//! maps directly onto world-space dimensions:
//!
//! | Kind     | Shape                                               |
//! |----------|-----------------------------------------------------|
//! | `Sphere` | radius 0.5                                          |
//! | `Limb`   | cylinder, radius 0.5, height 1, along Y             |
//! | `Cube`   | edge 1                                              |
//! | `Bar`    | cylinder, prop bar radius, height 2 (spans ±1 on Y) |
//! | `Plate`  | annulus with prop plate dimensions                  |

use serde::{Deserialize, Serialize};

use crate::renderer::RenderBackend;
use crate::resources::geometry::MeshData;
use crate::resources::primitives::{
    CylinderOptions, PlateOptions, SphereOptions, create_cube, create_cylinder, create_plate,
    create_sphere,
};
use crate::settings::{PropSettings, TessellationSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Sphere,
    Limb,
    Cube,
    Bar,
    Plate,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::Sphere,
        PrimitiveKind::Limb,
        PrimitiveKind::Cube,
        PrimitiveKind::Bar,
        PrimitiveKind::Plate,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct MeshLibrary {
    meshes: [MeshData; 5],
}

impl MeshLibrary {
    #[must_use]
    pub fn new(tessellation: &TessellationSettings, props: &PropSettings) -> Self {
        let radial = tessellation.cylinder_radial_segments;

        let sphere = create_sphere(SphereOptions {
            radius: 0.5,
            lat_bands: tessellation.sphere_lat_bands,
            lon_bands: tessellation.sphere_lon_bands,
        });
        let limb = create_cylinder(CylinderOptions {
            radius_top: 0.5,
            radius_bottom: 0.5,
            height: 1.0,
            radial_segments: radial,
            height_segments: 1,
            open_ended: false,
        });
        let bar = create_cylinder(CylinderOptions {
            radius_top: props.bar_radius,
            radius_bottom: props.bar_radius,
            height: 2.0,
            radial_segments: radial,
            height_segments: 1,
            open_ended: false,
        });
        let plate = create_plate(PlateOptions {
            outer_radius: props.plate_outer_radius,
            inner_radius: props.plate_inner_radius,
            thickness: props.plate_thickness,
            segments: tessellation.plate_segments,
        });

        let library = Self {
            meshes: [sphere, limb, create_cube(), bar, plate],
        };
        log::debug!(
            "MeshLibrary built: {} vertices, {} triangles",
            library.meshes.iter().map(MeshData::vertex_count).sum::<usize>(),
            library.meshes.iter().map(MeshData::triangle_count).sum::<usize>(),
        );
        library
    }

    #[inline]
    #[must_use]
    pub fn get(&self, kind: PrimitiveKind) -> &MeshData {
        &self.meshes[kind.index()]
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self, kind: PrimitiveKind) -> u32 {
        self.get(kind).index_count() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveKind, &MeshData)> {
        PrimitiveKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Hands every buffer to the backend once, at initialization.
    pub fn upload_to<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        for (kind, mesh) in self.iter() {
            backend.upload_geometry(kind, mesh);
        }
    }
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new(&TessellationSettings::default(), &PropSettings::default())
    }
}
