//! Mass properties (mass and principal moment of inertia) of shapes.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_cuboid;
mod mass_properties_cylinder;
mod mass_properties_sphere;
