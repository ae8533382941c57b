use ordered_float::OrderedFloat;

use crate::data::Point;
use crate::scene::{Shape, TraceBuilder};
use crate::canvas::Color;
use crate::{Error, Num};

use super::{distinct_count, min_index_by, seed_scan, yx_key, Trace};

// https://en.wikipedia.org/wiki/Graham_scan
//
// Only the first phase exists: locating the start vertex. The angular sort
// of the remaining points around the seed and the stack-based scan that
// removes concavities are deliberately not implemented here.
// TODO: angular sort around the seed, then the concavity-removing stack scan.

/// Animated seed selection for Graham scan: the bottom-most, then leftmost,
/// point. Identical in shape to the gift-wrapping seed phase, ordering by
/// (y, x) instead of (x, y).
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct
/// points.
pub fn seed_trace(pts: &[Point<Num>]) -> Result<Trace, Error> {
  if distinct_count(pts) < 3 {
    return Err(Error::InsufficientVertices);
  }
  let mut builder = TraceBuilder::new();
  let markers: Vec<_> = pts
    .iter()
    .map(|pt| builder.push_static(Shape::marker(*pt, Color::Black)))
    .collect();
  let scan = seed_scan(&mut builder, pts, yx_key);
  builder.remove(vec![markers[scan.index]]);
  builder.next_stage();
  Ok(Trace {
    seed: pts[scan.index],
    objects: builder.finish(),
  })
}

/// The Graham scan start vertex: minimal y, ties broken by minimal x.
pub fn lowest_point(pts: &[Point<Num>]) -> Result<Point<Num>, Error> {
  min_index_by(pts, |p| (OrderedFloat(p.y), OrderedFloat(p.x)))
    .map(|index| pts[index])
    .ok_or(Error::InsufficientVertices)
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::scheduler::Scheduler;

  use claims::assert_ok;

  fn pts(raw: &[(f64, f64)]) -> Vec<Point<Num>> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
  }

  #[test]
  fn lowest_then_leftmost() {
    let input = pts(&[(5.0, 1.0), (1.0, 9.0), (3.0, 1.0), (7.0, 4.0)]);
    assert_eq!(lowest_point(&input), Ok(Point::new(3.0, 1.0)));
  }

  #[test]
  fn empty_input() {
    assert_eq!(lowest_point(&[]), Err(Error::InsufficientVertices));
  }

  #[test]
  fn seed_trace_survivor() {
    let input = pts(&[(5.0, 5.0), (2.0, 1.0), (4.0, 8.0)]);
    let trace = assert_ok!(seed_trace(&input));
    assert_eq!(trace.seed, Point::new(2.0, 1.0));

    let mut scheduler = Scheduler::new();
    scheduler.add(trace.objects);
    scheduler.start_animation();
    let mut guard = 0;
    while scheduler.is_running() {
      scheduler.step(&mut ());
      guard += 1;
      assert!(guard < 10_000);
    }
    // One blue survivor (the seed), black markers for the rest.
    let mut blue = 0;
    let mut black = 0;
    for object in scheduler.objects() {
      match object.as_static() {
        Some(Shape::Marker { color: Color::Blue, point }) => {
          blue += 1;
          assert_eq!(*point, Point::new(2.0, 1.0));
        }
        Some(Shape::Marker { color: Color::Black, .. }) => black += 1,
        _ => {}
      }
    }
    assert_eq!((blue, black), (1, 2));
  }

  #[test]
  fn rejects_degenerate_input() {
    let input = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    assert_eq!(seed_trace(&input).err(), Some(Error::InsufficientVertices));
  }
}
