use crate::canvas::Color;
use crate::data::{Point, Vector};
use crate::scene::{SceneId, Shape, TraceBuilder};
use crate::{Error, Num, Orientation};

use super::{
  min_index_by, seed_scan, validate, xy_key, Trace, FLASH_FRAMES,
};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok traces replay to the convex hull of the input.
//    Every input point appears as a static black marker.

/// Animated convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm, emitted as a staged animation script
/// instead of just the resulting polygon. Replayed through the scheduler,
/// the trace shows every point as a black marker and then walks the hull:
/// the running seed candidate and each round's best successor edge are held
/// in blue, every rejected comparison flashes red and vanishes, and
/// superseded highlights are removed the moment a better candidate appears.
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct
/// points, or consists entirely of collinear points.
///
/// # Properties
/// * The blue markers surviving a full replay are exactly the hull
///   vertices, in wrapping order starting at the seed.
/// * The blue edges surviving a full replay are the hull edges; the last
///   one closes the hull back to the seed.
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn trace(pts: &[Point<Num>]) -> Result<Trace, Error> {
  validate(pts)?;
  let mut builder = TraceBuilder::new();
  let markers: Vec<SceneId> = pts
    .iter()
    .map(|pt| builder.push_static(Shape::marker(*pt, Color::Black)))
    .collect();

  // Phase 1: animated seed selection, leftmost then lowest.
  let scan = seed_scan(&mut builder, pts, xy_key);
  let seed = scan.index;
  // Only the highlighted version of the seed stays visible.
  builder.remove(vec![markers[seed]]);
  builder.next_stage();

  // Phase 2: wrap. The arrival direction starts pointing straight down
  // into the seed, as if we came from a point directly above it.
  let mut current = seed;
  let mut arrival = Vector::new(0.0, -1.0);
  for _ in 0..pts.len() {
    let round = wrap_round(&mut builder, pts, current, &arrival)?;
    if pts[round.winner] == pts[seed] {
      return Ok(Trace {
        seed: pts[seed],
        objects: builder.finish(),
      });
    }
    builder.hold(FLASH_FRAMES, Shape::marker(pts[round.winner], Color::Blue));
    builder.remove(vec![markers[round.winner]]);
    builder.next_stage();
    current = round.winner;
    arrival = round.direction;
  }
  // A hull can have at most as many vertices as there are points; running
  // past that means a degenerate set slipped through validation.
  Err(Error::CollinearPoints)
}

struct WrapRound {
  winner: usize,
  direction: Vector<Num>,
}

/// One round of the sweep: animate the comparison against every candidate
/// (one stage each) and return the best successor of `current`.
fn wrap_round(
  builder: &mut TraceBuilder,
  pts: &[Point<Num>],
  current: usize,
  arrival: &Vector<Num>,
) -> Result<WrapRound, Error> {
  let mut best: Option<(usize, Vector<Num>, Num, SceneId)> = None;
  for (j, candidate) in pts.iter().enumerate() {
    // Duplicates of the current vertex have no direction; skip them.
    let direction = match pts[current].direction_to(candidate) {
      Some(direction) => direction,
      None => continue,
    };
    let left_turn = Orientation::of_vectors(arrival, &direction).is_ccw();
    let straightness = arrival.dot(&direction);
    let better = best
      .as_ref()
      .map_or(true, |(_, _, best_dot, _)| straightness > *best_dot);
    if left_turn && better {
      let edge = builder.hold(
        FLASH_FRAMES,
        Shape::edge(pts[current], *candidate, Color::Blue),
      );
      if let Some((_, _, _, superseded)) = best {
        builder.remove(vec![superseded]);
      }
      best = Some((j, direction, straightness, edge));
    } else {
      builder.flash(
        FLASH_FRAMES,
        Shape::edge(pts[current], *candidate, Color::Red),
      );
    }
    builder.next_stage();
  }
  match best {
    Some((winner, direction, _, _)) => Ok(WrapRound { winner, direction }),
    // No strict left turn exists; only collinear degeneracies get here.
    None => Err(Error::CollinearPoints),
  }
}

/// Convex hull of a set of points, without the animation.
///
/// Same successor rule as [trace]: among candidates making a strict left
/// turn from the arrival direction, pick the one whose normalized direction
/// is most aligned with it. Vertices are returned in wrapping order
/// starting at the seed (minimal x, then minimal y).
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct
/// points, or consists entirely of collinear points.
pub fn convex_hull(pts: &[Point<Num>]) -> Result<Vec<Point<Num>>, Error> {
  validate(pts)?;
  let seed = min_index_by(pts, xy_key).ok_or(Error::InsufficientVertices)?;
  let mut hull = vec![pts[seed]];
  let mut current = seed;
  let mut arrival = Vector::new(0.0, -1.0);
  for _ in 0..pts.len() {
    let (next, direction) =
      best_successor(pts, current, &arrival).ok_or(Error::CollinearPoints)?;
    if pts[next] == pts[seed] {
      return Ok(hull);
    }
    hull.push(pts[next]);
    current = next;
    arrival = direction;
  }
  Err(Error::CollinearPoints)
}

fn best_successor(
  pts: &[Point<Num>],
  current: usize,
  arrival: &Vector<Num>,
) -> Option<(usize, Vector<Num>)> {
  let mut best: Option<(usize, Vector<Num>, Num)> = None;
  for (j, candidate) in pts.iter().enumerate() {
    let direction = match pts[current].direction_to(candidate) {
      Some(direction) => direction,
      None => continue,
    };
    if !Orientation::of_vectors(arrival, &direction).is_ccw() {
      continue;
    }
    let straightness = arrival.dot(&direction);
    if best
      .as_ref()
      .map_or(true, |(_, _, best_dot)| straightness > *best_dot)
    {
      best = Some((j, direction, straightness));
    }
  }
  best.map(|(winner, direction, _)| (winner, direction))
}
