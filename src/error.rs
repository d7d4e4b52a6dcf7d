use crate::math::Real;
use crate::shape::ShapeType;

/// Error indicating that a shape or a density was given an unusable value.
///
/// Every variant is raised at the point of violation; nothing is stored or computed
/// once one of them has been returned.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub enum InvalidParameter {
    /// A dimension or a density is zero, negative, or NaN.
    #[error("the parameter `{name}` must be strictly positive (got {value}).")]
    NonPositive {
        /// The name of the offending parameter (`"radius"`, `"density"`, …).
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// A raw discriminant does not identify any [`ShapeType`].
    #[error("{0} is not a known shape kind.")]
    UnknownShapeKind(u32),
    /// The number of parameters given to [`Shape::from_parameters`](crate::Shape::from_parameters)
    /// does not match the shape kind.
    #[error("a {kind} expects {expected} parameters, {found} were given.")]
    WrongParameterCount {
        /// The kind of shape being built.
        kind: ShapeType,
        /// The number of parameters this kind is defined by.
        expected: usize,
        /// The number of parameters actually given.
        found: usize,
    },
}
