/*!
inertia3d
========

**inertia3d** computes the mass and the principal moment of inertia of simple
3-dimensional rigid bodies (spheres, boxes and cylinders) written with the
rust programming language.

```
use inertia3d::{make_box, moment_of_inertia};

// A 1 × 2 × 3 m aluminium block rotating about the axis parallel to its first side.
let block = make_box(1.0, 2.0, 3.0).unwrap();
let moment = moment_of_inertia(&block, 2700.0).unwrap();
assert!((moment - 17550.0).abs() < 1.0e-9);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

extern crate alloc;

extern crate num_traits as num;

pub extern crate nalgebra as na;

pub use self::error::InvalidParameter;
pub use self::registry::{total_moment, BodyRegistry, MomentResult};
pub use self::shape::{
    make_box, make_cylinder, make_sphere, moment_of_inertia, shape_dimensions, shape_kind, Shape,
    ShapeType,
};

mod error;
pub mod mass_properties;
pub mod registry;
pub mod shape;
mod utils;

/// Aliases for mathematical types.
pub mod math {
    pub use na::Vector3;

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The vector type.
    pub use Vector3 as Vector;
}
