use crate::math::Real;
use crate::utils::check_positive;
use crate::InvalidParameter;
use approx::{AbsDiffEq, RelativeEq};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
/// The mass properties of a homogeneous rigid body.
pub struct MassProperties {
    /// The mass of the rigid body, in kg.
    pub mass: Real,
    /// The moment of inertia of the rigid body about its principal rotation axis, in kg·m².
    pub principal_inertia: Real,
}

impl MassProperties {
    /// Initializes the mass properties with the given mass and principal moment of inertia.
    pub fn new(mass: Real, principal_inertia: Real) -> Self {
        Self {
            mass,
            principal_inertia,
        }
    }

    /// Builds the mass properties of a body of the given volume and unit inertia.
    ///
    /// The unit inertia is the moment of inertia per unit of mass, so it only depends on the
    /// geometry of the body. The mass is computed first and the moment follows from it.
    pub(crate) fn from_volume_unit_inertia(
        density: Real,
        volume: Real,
        unit_inertia: Real,
    ) -> Result<Self, InvalidParameter> {
        let density = check_positive("density", density)?;
        Ok(Self::with_volume_unit_inertia(density, volume, unit_inertia))
    }

    /// Same as [`Self::from_volume_unit_inertia`] for a density already known to be positive.
    pub(crate) fn with_volume_unit_inertia(
        density: Real,
        volume: Real,
        unit_inertia: Real,
    ) -> Self {
        let mass = volume * density;
        Self::new(mass, unit_inertia * mass)
    }

    /// The mass properties of the same body made of a material `factor` times denser.
    ///
    /// Both the mass and the principal moment of inertia are multiplied by `factor`.
    /// Fails with [`InvalidParameter::NonPositive`] if `factor` is not strictly positive.
    pub fn scaled(self, factor: Real) -> Result<Self, InvalidParameter> {
        let factor = check_positive("factor", factor)?;
        Ok(Self::new(self.mass * factor, self.principal_inertia * factor))
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mass.abs_diff_eq(&other.mass, epsilon)
            && self
                .principal_inertia
                .abs_diff_eq(&other.principal_inertia, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self
                .principal_inertia
                .relative_eq(&other.principal_inertia, epsilon, max_relative)
    }
}
