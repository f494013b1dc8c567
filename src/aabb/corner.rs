use crate::axis::Axis;
use std::fmt::{Display, Formatter, Result};

/// One of the eight vertices of an [`Aabb`].
///
/// The local coordinate convention is:
/// - `Left`/`Right` is the negative/positive x side,
/// - `Bottom`/`Top` is the negative/positive y side,
/// - `Front`/`Back` is the **positive**/**negative** z side.
///
/// # Examples
/// ```
/// use extent_box::aabb::Corner;
/// use extent_box::axis::Axis;
///
/// assert!(Corner::FrontBottomLeft.is_positive(Axis::Z));
/// assert!(!Corner::FrontBottomLeft.is_positive(Axis::X));
/// assert_eq!(Corner::FrontBottomLeft.opposite(), Corner::BackTopRight);
/// ```
///
/// [`Aabb`]: struct.Aabb.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    /// -x, -y, +z.
    FrontBottomLeft,

    /// +x, -y, +z.
    FrontBottomRight,

    /// -x, +y, +z.
    FrontTopLeft,

    /// +x, +y, +z.
    FrontTopRight,

    /// -x, -y, -z.
    BackBottomLeft,

    /// +x, -y, -z.
    BackBottomRight,

    /// -x, +y, -z.
    BackTopLeft,

    /// +x, +y, -z.
    BackTopRight,
}

impl Corner {
    /// Every corner, front face first.
    pub const ALL: [Corner; 8] = [
        Corner::FrontBottomLeft,
        Corner::FrontBottomRight,
        Corner::FrontTopLeft,
        Corner::FrontTopRight,
        Corner::BackBottomLeft,
        Corner::BackBottomRight,
        Corner::BackTopLeft,
        Corner::BackTopRight,
    ];

    /// Builds the corner lying on the given sides.
    pub fn from_sides(front: bool, top: bool, right: bool) -> Corner {
        match (front, top, right) {
            (true, false, false) => Corner::FrontBottomLeft,
            (true, false, true) => Corner::FrontBottomRight,
            (true, true, false) => Corner::FrontTopLeft,
            (true, true, true) => Corner::FrontTopRight,
            (false, false, false) => Corner::BackBottomLeft,
            (false, false, true) => Corner::BackBottomRight,
            (false, true, false) => Corner::BackTopLeft,
            (false, true, true) => Corner::BackTopRight,
        }
    }

    /// Whether this corner lies on the front (+z) face.
    pub fn is_front(self) -> bool {
        matches!(
            self,
            Corner::FrontBottomLeft
                | Corner::FrontBottomRight
                | Corner::FrontTopLeft
                | Corner::FrontTopRight
        )
    }

    /// Whether this corner lies on the top (+y) face.
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Corner::FrontTopLeft | Corner::FrontTopRight | Corner::BackTopLeft | Corner::BackTopRight
        )
    }

    /// Whether this corner lies on the right (+x) face.
    pub fn is_right(self) -> bool {
        matches!(
            self,
            Corner::FrontBottomRight
                | Corner::FrontTopRight
                | Corner::BackBottomRight
                | Corner::BackTopRight
        )
    }

    /// Returns true if this corner sits on the positive side of `axis`,
    /// i.e. at `center + extent` rather than `center - extent`.
    #[inline]
    pub fn is_positive(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.is_right(),
            Axis::Y => self.is_top(),
            Axis::Z => self.is_front(),
        }
    }

    /// The corner diagonally across the box.
    pub fn opposite(self) -> Corner {
        Corner::from_sides(!self.is_front(), !self.is_top(), !self.is_right())
    }
}

impl Display for Corner {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}-{}-{}",
            if self.is_front() { "front" } else { "back" },
            if self.is_top() { "top" } else { "bottom" },
            if self.is_right() { "right" } else { "left" },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::aabb::Corner;
    use crate::axis::Axis;
    use std::collections::HashSet;

    #[test]
    fn test_corners_are_distinct() {
        let unique: HashSet<Corner> = Corner::ALL.iter().copied().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_from_sides_roundtrips() {
        for corner in Corner::ALL {
            let rebuilt = Corner::from_sides(corner.is_front(), corner.is_top(), corner.is_right());
            assert_eq!(rebuilt, corner);
        }
    }

    #[test]
    fn test_opposite_flips_every_axis() {
        for corner in Corner::ALL {
            let opposite = corner.opposite();
            for axis in Axis::ALL {
                assert_ne!(corner.is_positive(axis), opposite.is_positive(axis));
            }
            assert_eq!(opposite.opposite(), corner);
        }
    }

    #[test]
    fn test_front_is_positive_z() {
        assert!(Corner::FrontTopRight.is_positive(Axis::Z));
        assert!(!Corner::BackTopRight.is_positive(Axis::Z));
        assert!(Corner::BackTopRight.is_positive(Axis::X));
        assert!(Corner::BackTopRight.is_positive(Axis::Y));
    }

    #[test]
    fn test_display_corner() {
        assert_eq!(Corner::FrontBottomLeft.to_string(), "front-bottom-left");
        assert_eq!(Corner::BackTopRight.to_string(), "back-top-right");
    }
}
