//! Axis Aligned Bounding Boxes stored as a center and a non-negative extent.

use crate::aabb::Corner;
use crate::axis::Axis;
use crate::scalar::BoxValue;
use crate::utils::{abs_extent, half, two};
use nalgebra::{Point3, Vector3};
use std::fmt;

/// An axis aligned bounding box described by its `center` and its `extent`,
/// the half-width of the box along every axis.
///
/// Every component of the extent is non-negative. All constructors and setters
/// discard the sign of the half-widths they are given, so a box cannot be
/// turned "inside out".
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aabb<T: BoxValue> {
    /// Geometric center of the box.
    center: Point3<T>,

    /// Half-widths along x, y and z.
    extent: Vector3<T>,
}

impl<T: BoxValue> Aabb<T> {
    /// Creates the unit [`Aabb`]: centered on the origin with a side length of one
    /// along every axis.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::<f32>::unit();
    /// assert_eq!(aabb.center(), Point3::origin());
    /// assert_eq!(aabb.extent(), Vector3::new(0.5, 0.5, 0.5));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn unit() -> Aabb<T> {
        Aabb {
            center: Point3::origin(),
            extent: Vector3::repeat(half()),
        }
    }

    /// Creates a new [`Aabb`] around `center`. The sign of each component of
    /// `extent` is discarded.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(-2.0, 3.0, -4.0));
    /// assert_eq!(aabb.center(), Point3::new(1.0, 1.0, 1.0));
    /// assert_eq!(aabb.extent(), Vector3::new(2.0, 3.0, 4.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn new(center: Point3<T>, extent: Vector3<T>) -> Aabb<T> {
        Aabb {
            center,
            extent: abs_extent(extent),
        }
    }

    /// Creates a new [`Aabb`] from the components of its center and its extent.
    /// Same as [`Aabb::new`].
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::Vector3;
    ///
    /// let aabb = Aabb::from_components(0.0, 0.0, 0.0, -1.0, -1.0, -1.0);
    /// assert_eq!(aabb.extent(), Vector3::new(1.0, 1.0, 1.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Aabb::new`]: struct.Aabb.html#method.new
    ///
    pub fn from_components(cx: T, cy: T, cz: T, ex: T, ey: T, ez: T) -> Aabb<T> {
        Aabb::new(Point3::new(cx, cy, cz), Vector3::new(ex, ey, ez))
    }

    /// Creates the smallest [`Aabb`] spanning two opposite corners `a` and `b`.
    /// The corners may be given in any order; the center is their midpoint and
    /// the extent is half their per-axis distance.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::from_corners(Point3::new(2.0, -1.0, 0.0), Point3::new(0.0, 1.0, 4.0));
    /// assert_eq!(aabb.center(), Point3::new(1.0, 0.0, 2.0));
    /// assert_eq!(aabb.extent(), Vector3::new(1.0, 1.0, 2.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn from_corners(a: Point3<T>, b: Point3<T>) -> Aabb<T> {
        Aabb {
            center: Point3::from((a.coords + b.coords) * half::<T>()),
            extent: abs_extent((a - b) * half::<T>()),
        }
    }

    /// Returns the center point of the [`Aabb`].
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    #[inline]
    pub fn center(&self) -> Point3<T> {
        self.center
    }

    /// Returns the half-widths of the [`Aabb`]. Never negative.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    #[inline]
    pub fn extent(&self) -> Vector3<T> {
        self.extent
    }

    /// Moves the [`Aabb`] so it is centered on `center`. The extent is kept.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn set_center(&mut self, center: Point3<T>) {
        self.center = center;
    }

    /// Replaces the extent, discarding the sign of each component.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::Vector3;
    ///
    /// let mut aabb = Aabb::<f32>::unit();
    /// aabb.set_extent(Vector3::new(1.0, -1.0, -1.0));
    /// assert_eq!(aabb.extent(), Vector3::new(1.0, 1.0, 1.0));
    /// ```
    pub fn set_extent(&mut self, extent: Vector3<T>) {
        self.extent = abs_extent(extent);
    }

    /// Replaces the extent by its components. Same as [`Aabb::set_extent`].
    ///
    /// [`Aabb::set_extent`]: struct.Aabb.html#method.set_extent
    pub fn set_extent_components(&mut self, ex: T, ey: T, ez: T) {
        self.set_extent(Vector3::new(ex, ey, ez));
    }

    /// Returns the full side lengths of the [`Aabb`] along all three axes.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn size(&self) -> Vector3<T> {
        self.extent * two::<T>()
    }

    /// Returns the corner with the smallest coordinates, `center - extent`.
    pub fn min(&self) -> Point3<T> {
        self.center - self.extent
    }

    /// Returns the corner with the largest coordinates, `center + extent`.
    pub fn max(&self) -> Point3<T> {
        self.center + self.extent
    }

    /// Returns the measure of the [`Aabb`]: the product of its three side lengths.
    /// The unit box yields `1`, a box with extent `(1, 1, 1)` yields `8`.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    ///
    /// assert_eq!(Aabb::<f32>::unit().calculate_area(), 1.0);
    /// assert_eq!(Aabb::from_components(0.0, 1000.0, 0.0, 1.0, -1.0, 1.0).calculate_area(), 8.0);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn calculate_area(&self) -> T {
        self.volume()
    }

    /// Returns the volume of the [`Aabb`].
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn volume(&self) -> T {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Returns the total surface area of the six faces of the [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    ///
    /// let aabb = Aabb::from_components(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
    /// assert_eq!(aabb.surface_area(), 2.0 * (2.0 * 4.0 + 4.0 * 6.0 + 2.0 * 6.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn surface_area(&self) -> T {
        let size = self.size();
        two::<T>() * (size.x * size.y + size.y * size.z + size.x * size.z)
    }

    /// Returns the position of `corner`.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::{Aabb, Corner};
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::from_components(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
    /// assert_eq!(aabb.corner_point(Corner::FrontBottomLeft), Point3::new(-1.0, -2.0, 3.0));
    /// assert_eq!(aabb.corner_point(Corner::BackTopRight), Point3::new(1.0, 2.0, -3.0));
    /// ```
    ///
    pub fn corner_point(&self, corner: Corner) -> Point3<T> {
        let mut point = self.center;
        for axis in Axis::ALL {
            if corner.is_positive(axis) {
                point[axis] += self.extent[axis];
            } else {
                point[axis] -= self.extent[axis];
            }
        }
        point
    }

    /// Returns all eight corners, in the order of [`Corner::ALL`].
    ///
    /// [`Corner::ALL`]: enum.Corner.html#associatedconstant.ALL
    pub fn corners(&self) -> [Point3<T>; 8] {
        Corner::ALL.map(|corner| self.corner_point(corner))
    }

    /// Returns true if `point` lies inside the [`Aabb`] or on its boundary.
    /// The comparison is exact, no tolerance is applied.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::from_components(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
    /// assert!(aabb.intersects_point(&Point3::new(1.0, 2.0, 3.0)));
    /// assert!(!aabb.intersects_point(&Point3::new(1.0, 2.0, 3.01)));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn intersects_point(&self, point: &Point3<T>) -> bool {
        let offset = (*point - self.center).abs();
        Axis::ALL
            .iter()
            .all(|&axis| offset[axis] <= self.extent[axis])
    }

    /// Same as [`Aabb::intersects_point`] for a point given by its coordinates.
    ///
    /// [`Aabb::intersects_point`]: struct.Aabb.html#method.intersects_point
    pub fn intersects_coords(&self, x: T, y: T, z: T) -> bool {
        self.intersects_point(&Point3::new(x, y, z))
    }

    /// Returns true if `point` is approximately inside the [`Aabb`]
    /// with respect to some `epsilon`.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::from_components(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
    /// let point = Point3::new(1.000001, 0.0, 0.0);
    ///
    /// assert!(!aabb.intersects_point(&point));
    /// assert!(aabb.approx_contains_eps(&point, 0.00001));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn approx_contains_eps(&self, point: &Point3<T>, epsilon: T) -> bool {
        let offset = (*point - self.center).abs();
        Axis::ALL
            .iter()
            .all(|&axis| offset[axis] - self.extent[axis] < epsilon)
    }

    /// Returns the indices of all `points` inside the [`Aabb`], in ascending order.
    ///
    /// # Examples
    /// ```
    /// use extent_box::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::<f32>::unit();
    /// let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0), Point3::new(0.5, 0.5, 0.5)];
    /// assert_eq!(aabb.contained_indices(&points), vec![0, 2]);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    #[cfg(feature = "rayon")]
    pub fn contained_indices(&self, points: &[Point3<T>]) -> Vec<usize>
    where
        T: Send + Sync,
    {
        use rayon::prelude::*;

        points
            .par_iter()
            .enumerate()
            .filter(|(_, point)| self.intersects_point(point))
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the indices of all `points` inside the [`Aabb`], in ascending order.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    #[cfg(not(feature = "rayon"))]
    pub fn contained_indices(&self, points: &[Point3<T>]) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, point)| self.intersects_point(point))
            .map(|(index, _)| index)
            .collect()
    }
}

/// The default [`Aabb`] is the unit box.
///
/// [`Aabb`]: struct.Aabb.html
impl<T: BoxValue> Default for Aabb<T> {
    fn default() -> Aabb<T> {
        Aabb::unit()
    }
}

impl<T: BoxValue> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Center: ({}, {}, {}), Extent: ({}, {}, {})",
            self.center.x, self.center.y, self.center.z, self.extent.x, self.extent.y, self.extent.z
        )
    }
}

// Deserialized boxes go through `Aabb::new` so the extent invariant holds.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Aabb<T>
where
    T: BoxValue + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Aabb")]
        struct Raw<T: BoxValue> {
            center: Point3<T>,
            extent: Vector3<T>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Ok(Aabb::new(raw.center, raw.extent))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::testbase::{TAabb3, TPoint3, TVector3};

    #[test]
    fn test_deserialize_normalizes_extent() {
        let aabb: TAabb3 =
            serde_json::from_str(r#"{"center":[0,0,0],"extent":[-1,2,-3]}"#).unwrap();
        assert_eq!(aabb.center(), TPoint3::origin());
        assert_eq!(aabb.extent(), TVector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let aabb = TAabb3::from_components(4.0, -4.0, 2.0, 0.5, -1.5, 2.5);
        let json = serde_json::to_string(&aabb).unwrap();
        let loaded: TAabb3 = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, aabb);
    }
}
