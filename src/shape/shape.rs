use crate::mass_properties::MassProperties;
use crate::math::{Real, Vector};
use crate::shape::{Cuboid, Cylinder, Dimensions, Sphere};
use crate::InvalidParameter;
use core::fmt;
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A sphere shape.
    Sphere = 0,
    /// A rectangular box shape.
    Box,
    /// A cylindrical shape.
    Cylinder,
}

impl ShapeType {
    /// All the shape types, in discriminant order.
    pub const ALL: [ShapeType; 3] = [ShapeType::Sphere, ShapeType::Box, ShapeType::Cylinder];

    /// The human-readable name of this shape type.
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Sphere => "Sphere",
            ShapeType::Box => "Box",
            ShapeType::Cylinder => "Cylinder",
        }
    }

    /// The number of parameters a shape of this type is built from.
    pub fn parameter_count(self) -> usize {
        match self {
            ShapeType::Sphere => 1,
            ShapeType::Box => 3,
            ShapeType::Cylinder => 2,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ShapeType {
    type Error = InvalidParameter;

    fn try_from(discriminant: u32) -> Result<Self, Self::Error> {
        num::FromPrimitive::from_u32(discriminant)
            .ok_or(InvalidParameter::UnknownShapeKind(discriminant))
    }
}

/// A rigid body shape: one of the three supported kinds.
///
/// Shapes are validated on construction and never change afterwards.
///
/// The moment of inertia of each kind is taken about its principal rotation axis
/// (see [`Shape::principal_axis`]):
/// * Sphere: any diameter, `I = 2/5 m r²`.
/// * Box: the axis through the centroid parallel to side `a`, `I = 1/12 m (b² + c²)`.
/// * Cylinder: its longitudinal axis, `I = 1/2 m r²`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub enum Shape {
    /// A sphere shape.
    Sphere(Sphere),
    /// A rectangular box shape.
    Box(Cuboid),
    /// A cylindrical shape.
    Cylinder(Cylinder),
}

impl Shape {
    /// Creates a sphere shape.
    pub fn sphere(radius: Real) -> Result<Self, InvalidParameter> {
        Sphere::new(radius).map(Shape::Sphere)
    }

    /// Creates a box shape from its side lengths.
    pub fn cuboid(a: Real, b: Real, c: Real) -> Result<Self, InvalidParameter> {
        Cuboid::new(a, b, c).map(Shape::Box)
    }

    /// Creates a cylinder shape.
    pub fn cylinder(radius: Real, height: Real) -> Result<Self, InvalidParameter> {
        Cylinder::new(radius, height).map(Shape::Cylinder)
    }

    /// Creates a shape of the given type from its parameters, in constructor order.
    ///
    /// ```
    /// use inertia3d::{Shape, ShapeType};
    ///
    /// let cylinder = Shape::from_parameters(ShapeType::Cylinder, &[0.3, 2.0]).unwrap();
    /// assert_eq!(cylinder, Shape::cylinder(0.3, 2.0).unwrap());
    /// assert!(Shape::from_parameters(ShapeType::Box, &[1.0, 2.0]).is_err());
    /// ```
    pub fn from_parameters(kind: ShapeType, params: &[Real]) -> Result<Self, InvalidParameter> {
        match (kind, params) {
            (ShapeType::Sphere, &[radius]) => Self::sphere(radius),
            (ShapeType::Box, &[a, b, c]) => Self::cuboid(a, b, c),
            (ShapeType::Cylinder, &[radius, height]) => Self::cylinder(radius, height),
            _ => Err(InvalidParameter::WrongParameterCount {
                kind,
                expected: kind.parameter_count(),
                found: params.len(),
            }),
        }
    }

    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Box(_) => ShapeType::Box,
            Shape::Cylinder(_) => ShapeType::Cylinder,
        }
    }

    /// The human-readable name of this shape's type.
    pub fn name(&self) -> &'static str {
        self.shape_type().name()
    }

    /// The named dimensions of this shape.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Shape::Sphere(s) => Dimensions::new(&[("radius", s.radius())]),
            Shape::Box(b) => Dimensions::new(&[("a", b.a()), ("b", b.b()), ("c", b.c())]),
            Shape::Cylinder(c) => {
                Dimensions::new(&[("radius", c.radius()), ("height", c.height())])
            }
        }
    }

    /// Converts this shape into a sphere if it is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Shape::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this shape into a box if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            Shape::Box(b) => Some(b),
            _ => None,
        }
    }

    /// Converts this shape into a cylinder if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Shape::Cylinder(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn volume_unit_inertia(&self) -> (Real, Real) {
        match self {
            Shape::Sphere(s) => MassProperties::sphere_volume_unit_inertia(s.radius()),
            Shape::Box(b) => MassProperties::cuboid_volume_unit_inertia(b.a(), b.b(), b.c()),
            Shape::Cylinder(c) => {
                MassProperties::cylinder_y_volume_unit_inertia(c.radius(), c.height())
            }
        }
    }

    /// The volume of this shape, in m³.
    pub fn volume(&self) -> Real {
        self.volume_unit_inertia().0
    }

    /// Computes the mass and principal moment of inertia of this shape.
    ///
    /// Fails with [`InvalidParameter::NonPositive`] if `density` is not strictly positive.
    pub fn mass_properties(&self, density: Real) -> Result<MassProperties, InvalidParameter> {
        match self {
            Shape::Sphere(s) => MassProperties::from_sphere(density, s),
            Shape::Box(b) => MassProperties::from_cuboid(density, b),
            Shape::Cylinder(c) => MassProperties::from_cylinder(density, c),
        }
    }

    /// Mass properties for a density that was already checked to be strictly positive.
    pub(crate) fn mass_properties_unchecked(&self, density: Real) -> MassProperties {
        let (volume, unit_inertia) = self.volume_unit_inertia();
        MassProperties::with_volume_unit_inertia(density, volume, unit_inertia)
    }

    /// The mass of this shape for the given density, in kg.
    pub fn mass(&self, density: Real) -> Result<Real, InvalidParameter> {
        self.mass_properties(density).map(|props| props.mass)
    }

    /// The moment of inertia of this shape about its principal rotation axis, in kg·m².
    pub fn moment_of_inertia(&self, density: Real) -> Result<Real, InvalidParameter> {
        self.mass_properties(density)
            .map(|props| props.principal_inertia)
    }

    /// The local axis the moment of inertia is computed about.
    ///
    /// This is `x` for the sphere (any diameter would do) and for the box (side `a`
    /// is laid along `x`), and `y` for the cylinder.
    pub fn principal_axis(&self) -> Vector<Real> {
        match self {
            Shape::Sphere(_) | Shape::Box(_) => Vector::x(),
            Shape::Cylinder(_) => Vector::y(),
        }
    }

    /// The half-extents of the smallest local axis-aligned box containing this shape.
    pub fn local_half_extents(&self) -> Vector<Real> {
        match self {
            Shape::Sphere(s) => s.local_half_extents(),
            Shape::Box(b) => b.local_half_extents(),
            Shape::Cylinder(c) => c.local_half_extents(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Box(cuboid)
    }
}

impl From<Cylinder> for Shape {
    fn from(cylinder: Cylinder) -> Self {
        Shape::Cylinder(cylinder)
    }
}
