//! A crate which exports axis-aligned bounding boxes described by a center and
//! a per-axis half-width, together with corner and point-containment queries.
//!
//! ## About
//!
//! An [`Aabb`](aabb::Aabb) stores its `center` and its `extent`. The extent is kept
//! non-negative on every axis no matter which constructor or setter produced it,
//! so the box can never be turned inside out. On top of that the box offers its
//! measures (volume and surface area), its eight named corners and an inclusive,
//! exact point containment test. These are the building blocks of spatial
//! partitioning, collision detection and render culling.
//!
//! ## Example
//!
//! ```
//! use extent_box::aabb::{Aabb, Corner, IntersectsAabb};
//! use nalgebra::{Point3, Vector3};
//!
//! let mut aabb = Aabb::from_components(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
//! assert_eq!(aabb.corner_point(Corner::FrontBottomLeft), Point3::new(-1.0, -2.0, 3.0));
//! assert!(Point3::new(1.0, 2.0, 3.0).intersects_aabb(&aabb));
//!
//! aabb.set_extent(Vector3::new(-1.0, 1.0, 1.0));
//! assert_eq!(aabb.extent(), Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(aabb.calculate_area(), 8.0);
//! ```
//!
//! ## Features
//!
//! - `serde` (default **disabled**) - adds `Serialize` and `Deserialize` implementations for
//!   [`Aabb`](aabb::Aabb), [`Corner`](aabb::Corner) and [`Axis`](axis::Axis)
//! - `rayon` (default **enabled**) - evaluates
//!   [`Aabb::contained_indices`](aabb::Aabb::contained_indices) in parallel
//!

pub mod aabb;
pub mod axis;
pub mod scalar;
mod utils;

#[cfg(test)]
mod testbase;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
