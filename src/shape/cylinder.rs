//! Cylinder shape.

use crate::math::{Real, Vector};
use crate::utils::check_positive;
use crate::InvalidParameter;

/// Solid cylinder with its principal axis aligned with the `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    radius: Real,
    height: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `radius` - the radius of the circular cross-section.
    /// * `height` - the full length of the cylinder along the `y` axis.
    ///
    /// Fails with [`InvalidParameter::NonPositive`] if either argument is not strictly positive.
    pub fn new(radius: Real, height: Real) -> Result<Cylinder, InvalidParameter> {
        Ok(Cylinder {
            radius: check_positive("radius", radius)?,
            height: check_positive("height", height)?,
        })
    }

    /// The radius of the cylinder.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The full height of the cylinder.
    #[inline]
    pub fn height(&self) -> Real {
        self.height
    }

    /// Half the height of the cylinder.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// The half-extents of the smallest axis-aligned box containing this cylinder.
    #[inline]
    pub fn local_half_extents(&self) -> Vector<Real> {
        Vector::new(self.radius, self.half_height(), self.radius)
    }
}
