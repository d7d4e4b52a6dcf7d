//! Ordered collections of bodies and batch moment-of-inertia computation.

pub use self::body_registry::BodyRegistry;
pub use self::moment_result::{total_moment, MomentResult};

mod body_registry;
mod moment_result;
