use nalgebra::Point3;

use crate::{aabb::Aabb, scalar::BoxValue};

/// A trait implemented by things that may or may not intersect an [`Aabb`].
pub trait IntersectsAabb<T: BoxValue> {
    /// Returns whether this object intersects an [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::{Aabb, IntersectsAabb};
    /// use nalgebra::Point3;
    ///
    /// struct XyPlane;
    ///
    /// impl IntersectsAabb<f32> for XyPlane {
    ///     fn intersects_aabb(&self, aabb: &Aabb<f32>) -> bool {
    ///         aabb.min().z <= 0.0 && aabb.max().z >= 0.0
    ///     }
    /// }
    ///
    /// let aabb = Aabb::from_components(0.0, 0.0, 0.5, 1.0, 1.0, 1.0);
    /// assert!(XyPlane.intersects_aabb(&aabb));
    /// assert!(Point3::new(0.0, 0.0, 1.5).intersects_aabb(&aabb));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    fn intersects_aabb(&self, aabb: &Aabb<T>) -> bool;
}

impl<T: BoxValue> IntersectsAabb<T> for Point3<T> {
    fn intersects_aabb(&self, aabb: &Aabb<T>) -> bool {
        aabb.intersects_point(self)
    }
}
