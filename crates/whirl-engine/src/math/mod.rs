//! Matrix math for the per-frame rotation transform.

mod mat4;

pub use mat4::Mat4;
