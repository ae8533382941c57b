use num_traits::Float;

/// A free 2D vector, used for arrival and candidate directions during
/// gift wrapping. Directions are normalized before any cross/dot
/// comparison so the tests are scale invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T> {
  pub x: T,
  pub y: T,
}

impl<T> Vector<T> {
  pub const fn new(x: T, y: T) -> Vector<T> {
    Vector { x, y }
  }
}

impl<T: Float> Vector<T> {
  pub fn magnitude(&self) -> T {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Normalize to unit length. `None` for the zero vector.
  pub fn unit(&self) -> Option<Vector<T>> {
    let len = self.magnitude();
    if len.is_zero() {
      return None;
    }
    Some(Vector::new(self.x / len, self.y / len))
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.x * other.x + self.y * other.y
  }

  /// Z component of the 3D cross product. Positive iff `other` is a left
  /// turn (counterclockwise) from `self`.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.x * other.y - self.y * other.x
  }
}
