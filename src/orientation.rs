use crate::data::{Point, Vector};
use crate::Num;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Uses the arbitrary precision machinery of `geometry_predicates` so the
  /// answer is exact even for nearly collinear floating point input.
  pub fn new(p1: &Point<Num>, p2: &Point<Num>, p3: &Point<Num>) -> Orientation {
    orient([p1.x, p1.y], [p2.x, p2.y], [p3.x, p3.y])
  }

  /// Turn from direction `u` to direction `v`:
  /// `cross(u, v) > 0` iff `v` is a left turn from `u`.
  pub fn of_vectors(u: &Vector<Num>, v: &Vector<Num>) -> Orientation {
    orient([0.0, 0.0], [u.x, u.y], [v.x, v.y])
  }

  pub fn is_ccw(self) -> bool {
    self == Orientation::CounterClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == Orientation::CoLinear
  }
}

fn orient(p1: [f64; 2], p2: [f64; 2], p3: [f64; 2]) -> Orientation {
  let det = geometry_predicates::predicates::orient2d(p1, p2, p3);
  if det > 0.0 {
    Orientation::CounterClockWise
  } else if det < 0.0 {
    Orientation::ClockWise
  } else {
    Orientation::CoLinear
  }
}
