//! Shapes supported by inertia3d.

pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::dimensions::{Dimension, Dimensions, MAX_DIMENSIONS};
pub use self::interface::{
    make_box, make_cylinder, make_sphere, moment_of_inertia, shape_dimensions, shape_kind,
};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
pub use self::sphere::Sphere;

mod cuboid;
mod cylinder;
mod dimensions;
mod interface;
mod shape;
mod sphere;
