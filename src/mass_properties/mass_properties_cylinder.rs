use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::Cylinder;
use crate::InvalidParameter;
use na::RealField;

impl MassProperties {
    pub(crate) fn cylinder_y_volume_unit_inertia(radius: Real, height: Real) -> (Real, Real) {
        let sq_radius = radius * radius;
        let volume = sq_radius * height * Real::pi();

        (volume, sq_radius / 2.0)
    }

    /// Computes the mass properties of a solid cylinder spinning about its own
    /// longitudinal axis (the local `y` axis).
    ///
    /// # Physics Background
    ///
    /// - Volume = π × radius² × height
    /// - Moment of inertia about the `y` axis = (1/2) × mass × radius²
    ///
    /// The height only contributes through the mass: a longer cylinder of the same
    /// radius spins just as easily per kilogram.
    ///
    /// # Example - Copper Rod
    ///
    /// ```
    /// use inertia3d::mass_properties::MassProperties;
    /// use inertia3d::shape::Cylinder;
    ///
    /// // A 2m long copper rod with a 0.3m radius (density 8960 kg/m³).
    /// let rod = Cylinder::new(0.3, 2.0).unwrap();
    /// let props = MassProperties::from_cylinder(8960.0, &rod).unwrap();
    ///
    /// // Mass = π × 0.09 × 2 × 8960 ≈ 5066.8 kg
    /// assert!((props.mass - 5066.76).abs() < 0.01);
    /// // Moment = 0.5 × 5066.8 × 0.09 ≈ 228.0 kg·m²
    /// assert!((props.principal_inertia - 228.004).abs() < 0.001);
    /// ```
    pub fn from_cylinder(density: Real, cylinder: &Cylinder) -> Result<Self, InvalidParameter> {
        let (cyl_vol, cyl_unit_i) =
            Self::cylinder_y_volume_unit_inertia(cylinder.radius(), cylinder.height());
        Self::from_volume_unit_inertia(density, cyl_vol, cyl_unit_i)
    }
}
