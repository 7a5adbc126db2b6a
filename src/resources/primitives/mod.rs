pub mod box_shape;
pub mod cylinder;
pub mod plate;
pub mod sphere;

pub use box_shape::{create_box, create_cube};
pub use cylinder::{create_cylinder, CylinderOptions};
pub use plate::{create_plate, PlateOptions};
pub use sphere::{create_sphere, SphereOptions};
