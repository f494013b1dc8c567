//! Utilities module.

use crate::scalar::BoxValue;
use nalgebra::Vector3;

/// Returns `extent` with the sign of every component discarded.
///
/// This is the single place where the extent invariant is established; every
/// constructor and setter of [`Aabb`] routes its half-widths through here.
/// `NaN` components stay `NaN`.
///
/// [`Aabb`]: crate::aabb::Aabb
#[inline]
pub fn abs_extent<T: BoxValue>(extent: Vector3<T>) -> Vector3<T> {
    if log::log_enabled!(log::Level::Trace)
        && extent.iter().any(|component| *component < T::zero())
    {
        log::trace!("discarding sign of negative extent {extent:?}");
    }
    extent.abs()
}

/// The scalar `0.5`, built without a fallible conversion.
#[inline(always)]
pub fn half<T: BoxValue>() -> T {
    T::one() / (T::one() + T::one())
}

/// The scalar `2`, built without a fallible conversion.
#[inline(always)]
pub fn two<T: BoxValue>() -> T {
    T::one() + T::one()
}

#[cfg(test)]
mod tests {
    use crate::testbase::TVector3;
    use crate::utils::{abs_extent, half, two};

    #[test]
    /// Test if negative components are flipped and positive ones kept.
    fn test_abs_extent_mixed_signs() {
        let extent = abs_extent(TVector3::new(-1.0, 2.0, -0.0));
        assert_eq!(extent, TVector3::new(1.0, 2.0, 0.0));
        assert!(extent.z.is_sign_positive());
    }

    #[test]
    /// Test if `NaN` survives normalization instead of becoming a number.
    fn test_abs_extent_keeps_nan() {
        let extent = abs_extent(TVector3::new(f32::NAN, -1.0, 1.0));
        assert!(extent.x.is_nan());
        assert_eq!(extent.y, 1.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(half::<f32>(), 0.5);
        assert_eq!(two::<f64>(), 2.0);
    }
}
