use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::Cuboid;
use crate::InvalidParameter;

impl MassProperties {
    /// Volume and unit inertia about the axis parallel to side `a`.
    pub(crate) fn cuboid_volume_unit_inertia(a: Real, b: Real, c: Real) -> (Real, Real) {
        let volume = a * b * c;
        let i = (b * b + c * c) / 12.0;

        (volume, i)
    }

    /// Computes the mass properties of a solid box rotating about the axis through its
    /// centroid parallel to side `a`.
    ///
    /// The moment of inertia is `(1/12) × mass × (b² + c²)`.
    pub fn from_cuboid(density: Real, cuboid: &Cuboid) -> Result<Self, InvalidParameter> {
        let (a, b, c) = cuboid.sides();
        let (vol, unit_i) = Self::cuboid_volume_unit_inertia(a, b, c);
        Self::from_volume_unit_inertia(density, vol, unit_i)
    }
}
