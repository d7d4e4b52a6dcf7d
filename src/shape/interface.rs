//! Free-function entry points for callers that drive the shape model without
//! going through the typed API.

use crate::math::Real;
use crate::shape::{Dimensions, Shape, ShapeType};
use crate::InvalidParameter;

/// Creates a sphere of the given radius.
///
/// Fails if `radius <= 0`.
pub fn make_sphere(radius: Real) -> Result<Shape, InvalidParameter> {
    Shape::sphere(radius)
}

/// Creates a box from its three side lengths.
///
/// The box rotates about the axis parallel to `a`. Fails if any side is `<= 0`.
pub fn make_box(a: Real, b: Real, c: Real) -> Result<Shape, InvalidParameter> {
    Shape::cuboid(a, b, c)
}

/// Creates a cylinder from its radius and full height.
///
/// Fails if `radius <= 0` or `height <= 0`.
pub fn make_cylinder(radius: Real, height: Real) -> Result<Shape, InvalidParameter> {
    Shape::cylinder(radius, height)
}

/// The kind of `shape`.
pub fn shape_kind(shape: &Shape) -> ShapeType {
    shape.shape_type()
}

/// The named dimensions of `shape`.
pub fn shape_dimensions(shape: &Shape) -> Dimensions {
    shape.dimensions()
}

/// The moment of inertia of `shape` about its principal rotation axis, for the given density.
///
/// Fails if `density <= 0`.
pub fn moment_of_inertia(shape: &Shape, density: Real) -> Result<Real, InvalidParameter> {
    shape.moment_of_inertia(density)
}
