use crate::math::Real;
use arrayvec::ArrayVec;
use core::slice;

/// The maximum number of dimensions describing a single shape.
pub const MAX_DIMENSIONS: usize = 3;

/// A single named dimension of a shape, in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct Dimension {
    /// The name of the dimension (`"radius"`, `"a"`, `"height"`, …).
    pub name: &'static str,
    /// The value of the dimension.
    pub value: Real,
}

/// The named dimensions of a shape, in the order its constructor takes them.
///
/// * Sphere: `radius`.
/// * Box: `a`, `b`, `c`.
/// * Cylinder: `radius`, `height`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct Dimensions(ArrayVec<Dimension, MAX_DIMENSIONS>);

impl Dimensions {
    pub(crate) fn new(named: &[(&'static str, Real)]) -> Self {
        Self(
            named
                .iter()
                .map(|&(name, value)| Dimension { name, value })
                .collect(),
        )
    }

    /// The value of the dimension called `name`, if the shape has one.
    pub fn get(&self, name: &str) -> Option<Real> {
        self.0.iter().find(|d| d.name == name).map(|d| d.value)
    }

    /// The dimensions as a slice.
    pub fn as_slice(&self) -> &[Dimension] {
        &self.0
    }

    /// Iterates through the dimensions, in constructor order.
    pub fn iter(&self) -> slice::Iter<'_, Dimension> {
        self.0.iter()
    }

    /// Iterates through the dimension values only, in constructor order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        self.0.iter().map(|d| d.value)
    }

    /// The number of dimensions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is this set of dimensions empty?
    ///
    /// Always `false` for the dimensions of a valid shape.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dimensions {
    type Item = &'a Dimension;
    type IntoIter = slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
