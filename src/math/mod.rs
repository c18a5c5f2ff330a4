//! Vector and 4x4 matrix math for projecting grid cells to clip space.

mod mat4;
mod vec3;

pub use mat4::{DEGENERATE_EPSILON, Mat4, identity, look_at, multiply, perspective, translate};
pub use vec3::Vec3;
