//! Rectangular box shape.

use crate::math::{Real, Vector};
use crate::utils::check_positive;
use crate::InvalidParameter;

/// A solid rectangular box centered at the origin.
///
/// The sides `a`, `b` and `c` are the full lengths of the box along the local
/// `x`, `y` and `z` axes. The box rotates about the axis parallel to side `a`,
/// so its moment of inertia only depends on `a` through its mass.
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    a: Real,
    b: Real,
    c: Real,
}

impl Cuboid {
    /// Creates a new box from its three side lengths.
    ///
    /// Fails with [`InvalidParameter::NonPositive`] if any side is not strictly positive.
    /// Sides are checked in the order `a`, `b`, `c` and the first offending one is reported.
    #[inline]
    pub fn new(a: Real, b: Real, c: Real) -> Result<Cuboid, InvalidParameter> {
        Ok(Cuboid {
            a: check_positive("a", a)?,
            b: check_positive("b", b)?,
            c: check_positive("c", c)?,
        })
    }

    /// The side length along the rotation axis (local `x`).
    #[inline]
    pub fn a(&self) -> Real {
        self.a
    }

    /// The side length along the local `y` axis.
    #[inline]
    pub fn b(&self) -> Real {
        self.b
    }

    /// The side length along the local `z` axis.
    #[inline]
    pub fn c(&self) -> Real {
        self.c
    }

    /// The three side lengths `(a, b, c)`.
    #[inline]
    pub fn sides(&self) -> (Real, Real, Real) {
        (self.a, self.b, self.c)
    }

    /// The half-extents of this box along each local axis.
    #[inline]
    pub fn local_half_extents(&self) -> Vector<Real> {
        Vector::new(self.a, self.b, self.c) / 2.0
    }
}
