//! Sphere shape.

use crate::math::{Real, Vector};
use crate::utils::check_positive;
use crate::InvalidParameter;

/// A solid sphere centered at the origin.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    ///
    /// Fails with [`InvalidParameter::NonPositive`] if `radius` is not strictly positive.
    #[inline]
    pub fn new(radius: Real) -> Result<Sphere, InvalidParameter> {
        Ok(Sphere {
            radius: check_positive("radius", radius)?,
        })
    }

    /// The radius of the sphere.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The half-extents of the smallest axis-aligned box containing this sphere.
    #[inline]
    pub fn local_half_extents(&self) -> Vector<Real> {
        Vector::repeat(self.radius)
    }
}
