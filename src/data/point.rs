use num_traits::Float;
use std::ops::Sub;

use super::Vector;

/// A position in the logical coordinate space. Logical Y grows upward;
/// mapping to pixels happens in [crate::canvas].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point<T> {
  pub x: T,
  pub y: T,
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }
}

impl<T: Float> Point<T> {
  /// Unit vector pointing from `self` towards `other`. `None` when the two
  /// points coincide and no direction exists.
  pub fn direction_to(&self, other: &Point<T>) -> Option<Vector<T>> {
    (other - self).unit()
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(pair: (T, T)) -> Point<T> {
    Point::new(pair.0, pair.1)
  }
}

impl<T: Float> Sub for &Point<T> {
  type Output = Vector<T>;
  fn sub(self, rhs: &Point<T>) -> Vector<T> {
    Vector::new(self.x - rhs.x, self.y - rhs.y)
  }
}
