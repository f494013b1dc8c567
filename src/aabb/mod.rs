//! Axis Aligned Bounding Boxes.

mod aabb_impl;
mod corner;
mod intersection;

pub use aabb_impl::*;
pub use corner::*;
pub use intersection::*;
