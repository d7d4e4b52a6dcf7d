use crate::math::Real;
use crate::registry::{total_moment, MomentResult};
use crate::shape::Shape;
use crate::utils::check_positive;
use crate::InvalidParameter;
use alloc::vec::Vec;
use core::slice;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered collection of bodies sharing the same material.
///
/// Bodies are kept in insertion order and duplicates are allowed. The registry owns
/// its shapes; the only way to remove them is [`BodyRegistry::clear`].
///
/// ```
/// use inertia3d::{make_box, make_cylinder, make_sphere, BodyRegistry};
///
/// let mut registry = BodyRegistry::new();
/// registry.add(make_sphere(1.0).unwrap());
/// registry.add(make_box(2.0, 3.0, 4.0).unwrap());
/// registry.add(make_cylinder(1.0, 2.0).unwrap());
///
/// // Steel.
/// let results = registry.compute_all(7800.0).unwrap();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[1].shape.name(), "Box");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct BodyRegistry {
    shapes: Vec<Shape>,
}

impl BodyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` bodies.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a body at the end of this registry.
    pub fn add(&mut self, shape: Shape) {
        log::trace!(
            "Registering body #{}: {} {:?}.",
            self.shapes.len(),
            shape.name(),
            shape.dimensions()
        );
        self.shapes.push(shape);
    }

    /// The number of bodies in this registry.
    pub fn count(&self) -> usize {
        self.shapes.len()
    }

    /// Does this registry contain no body?
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The `i`-th body added to this registry.
    pub fn get(&self, i: usize) -> Option<&Shape> {
        self.shapes.get(i)
    }

    /// All the bodies of this registry, in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterates through the bodies of this registry, in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Removes every body from this registry.
    pub fn clear(&mut self) {
        log::trace!("Clearing {} bodies.", self.shapes.len());
        self.shapes.clear();
    }

    /// Computes the moment of inertia of every body for the given density.
    ///
    /// The results are in insertion order, one per body. The density is checked before
    /// any body is processed; the registry itself is left untouched.
    pub fn compute_all(&self, density: Real) -> Result<Vec<MomentResult>, InvalidParameter> {
        let density = check_positive("density", density)?;
        log::debug!(
            "Computing the moments of inertia of {} bodies with density {}.",
            self.shapes.len(),
            density
        );

        #[cfg(not(feature = "parallel"))]
        let results = self
            .shapes
            .iter()
            .map(|shape| MomentResult::compute(shape, density))
            .collect();
        #[cfg(feature = "parallel")]
        let results = self
            .shapes
            .par_iter()
            .map(|shape| MomentResult::compute(shape, density))
            .collect();

        Ok(results)
    }

    /// The sum of the moments of inertia of every body for the given density.
    ///
    /// This is `0.0` for an empty registry.
    pub fn total_moment(&self, density: Real) -> Result<Real, InvalidParameter> {
        self.compute_all(density)
            .map(|results| total_moment(&results))
    }
}

impl<'a> IntoIterator for &'a BodyRegistry {
    type Item = &'a Shape;
    type IntoIter = slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Shape> for BodyRegistry {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Shape> for BodyRegistry {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        for shape in iter {
            self.add(shape);
        }
    }
}
