use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::Sphere;
use crate::InvalidParameter;
use na::RealField;

impl MassProperties {
    pub(crate) fn sphere_volume_unit_inertia(radius: Real) -> (Real, Real) {
        let volume = Real::pi() * radius * radius * radius * 4.0 / 3.0;
        let i = radius * radius * 2.0 / 5.0;

        (volume, i)
    }

    /// Computes the mass properties of a solid sphere.
    ///
    /// # Arguments
    ///
    /// * `density` - The material density in kg/m³ (e.g., water = 1000, steel = 7800).
    /// * `sphere` - The sphere.
    ///
    /// # Physics Background
    ///
    /// A homogeneous sphere is perfectly symmetric, so every diameter is a principal axis
    /// and they all share the same moment of inertia:
    /// - Volume = (4/3) × π × radius³
    /// - Moment of inertia = (2/5) × mass × radius²
    ///
    /// # Example
    ///
    /// ```
    /// use inertia3d::mass_properties::MassProperties;
    /// use inertia3d::shape::Sphere;
    ///
    /// // A 0.5m radius steel ball.
    /// let ball = Sphere::new(0.5).unwrap();
    /// let props = MassProperties::from_sphere(7800.0, &ball).unwrap();
    ///
    /// // Mass: (4/3) × π × 0.125 × 7800 ≈ 4084 kg
    /// assert!((props.mass - 4084.07).abs() < 0.01);
    /// // Moment: 0.4 × 4084 × 0.25 ≈ 408.4 kg·m²
    /// assert!((props.principal_inertia - 408.41).abs() < 0.01);
    /// ```
    pub fn from_sphere(density: Real, sphere: &Sphere) -> Result<Self, InvalidParameter> {
        let (vol, unit_i) = Self::sphere_volume_unit_inertia(sphere.radius());
        Self::from_volume_unit_inertia(density, vol, unit_i)
    }
}
