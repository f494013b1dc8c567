//! The numeric bound shared by every box coordinate.

use nalgebra::{
    ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign, Scalar, SimdPartialOrd,
};
use num_traits::{Float, FromPrimitive, Signed};

/// Scalar type usable as a coordinate of an [`Aabb`].
///
/// Blanket-implemented, so `f32` and `f64` work out of the box.
///
/// [`Aabb`]: crate::aabb::Aabb
pub trait BoxValue:
    Scalar
    + Copy
    + Float
    + FromPrimitive
    + Signed
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + SimdPartialOrd
    + std::fmt::Display
{
}

impl<T> BoxValue for T where
    T: Scalar
        + Copy
        + Float
        + FromPrimitive
        + Signed
        + ClosedAddAssign
        + ClosedSubAssign
        + ClosedMulAssign
        + ClosedDivAssign
        + SimdPartialOrd
        + std::fmt::Display
{
}
