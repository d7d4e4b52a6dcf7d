use crate::math::Real;
use crate::shape::Shape;

/// The outcome of computing the moment of inertia of one body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct MomentResult {
    /// The body the moment was computed for.
    pub shape: Shape,
    /// The density used for the computation, in kg/m³.
    pub density: Real,
    /// The mass of the body at that density, in kg.
    pub mass: Real,
    /// The moment of inertia about the body's principal rotation axis, in kg·m².
    pub moment: Real,
}

impl MomentResult {
    /// `density` must already have been checked to be strictly positive.
    pub(crate) fn compute(shape: &Shape, density: Real) -> Self {
        let props = shape.mass_properties_unchecked(density);
        Self {
            shape: *shape,
            density,
            mass: props.mass,
            moment: props.principal_inertia,
        }
    }

    /// This result as a `(shape, density, moment)` tuple.
    pub fn as_tuple(&self) -> (Shape, Real, Real) {
        (self.shape, self.density, self.moment)
    }
}

/// The sum of the moments of inertia of `results`.
///
/// This is `0.0` if there are no results.
pub fn total_moment<'a>(results: impl IntoIterator<Item = &'a MomentResult>) -> Real {
    results.into_iter().fold(0.0, |total, result| total + result.moment)
}
