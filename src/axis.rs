//! Axis enum for indexing three-dimensional points and vectors.

use nalgebra::{Point3, Scalar, Vector3};
use std::fmt::{Display, Formatter, Result};
use std::ops::{Index, IndexMut};

/// An `Axis` in a three-dimensional coordinate system.
/// Used to access [`Point3`] and [`Vector3`] components via index.
///
/// # Examples
/// ```
/// use extent_box::axis::Axis;
/// use nalgebra::Point3;
///
/// let mut position = Point3::new(1.0, 0.5, 42.0);
/// position[Axis::Y] *= 4.0;
///
/// assert_eq!(position[Axis::Y], 2.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Index of the X axis.
    X = 0,

    /// Index of the Y axis.
    Y = 1,

    /// Index of the Z axis.
    Z = 2,
}

impl Axis {
    /// All three axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The component index of this axis.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Display implementation for `Axis`.
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

/// Make `Point3` indexable by `Axis`.
impl<T: Scalar> Index<Axis> for Point3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.coords[axis.index()]
    }
}

/// Make `Point3` mutably accessible by `Axis`.
impl<T: Scalar> IndexMut<Axis> for Point3<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.coords[axis.index()]
    }
}

/// Make `Vector3` indexable by `Axis`.
impl<T: Scalar> Index<Axis> for Vector3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self[axis.index()]
    }
}

/// Make `Vector3` mutably accessible by `Axis`.
impl<T: Scalar> IndexMut<Axis> for Vector3<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self[axis.index()]
    }
}

#[cfg(test)]
mod test {
    use crate::axis::Axis;
    use crate::testbase::{tuple_to_point, tuple_to_vector, TupleVec};
    use proptest::prelude::*;

    #[test]
    fn test_display_axis() {
        let names: Vec<String> = Axis::ALL.iter().map(|axis| axis.to_string()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    proptest! {
        // Test whether accessing points by index is the same as accessing them by `Axis`.
        #[test]
        fn test_index_point_by_axis(tpl: TupleVec) {
            let p = tuple_to_point(&tpl);

            prop_assert_eq!(p[Axis::X].to_bits(), p.x.to_bits());
            prop_assert_eq!(p[Axis::Y].to_bits(), p.y.to_bits());
            prop_assert_eq!(p[Axis::Z].to_bits(), p.z.to_bits());
        }

        // Test whether vectors can be mutably set, by indexing via `Axis`.
        #[test]
        fn test_set_vector_by_axis(tpl: TupleVec) {
            let mut v = tuple_to_vector(&(0.0, 0.0, 0.0));

            v[Axis::X] = tpl.0;
            v[Axis::Y] = tpl.1;
            v[Axis::Z] = tpl.2;

            prop_assert_eq!(v.x.to_bits(), tpl.0.to_bits());
            prop_assert_eq!(v.y.to_bits(), tpl.1.to_bits());
            prop_assert_eq!(v.z.to_bits(), tpl.2.to_bits());
        }
    }
}
