use ordered_float::OrderedFloat;

use crate::canvas::Color;
use crate::data::Point;
use crate::scene::{SceneId, SceneObject, Shape, TraceBuilder};
use crate::{Error, Num, Orientation};

pub mod gift_wrapping;
pub mod graham_scan;

/// Frames a highlight animates for before settling or vanishing.
pub const FLASH_FRAMES: u32 = 10;

/// Output of a trace generator: the animation script plus the seed vertex
/// it started from, so callers can report it.
#[derive(Debug)]
pub struct Trace {
  pub seed: Point<Num>,
  pub objects: Vec<SceneObject>,
}

pub(crate) struct SeedScan {
  pub index: usize,
  #[allow(dead_code)]
  pub highlight: SceneId,
}

/// Animated seed selection shared by both generators: scan the points in
/// input order, one stage per point, keeping the running minimum of `key`
/// highlighted in blue and flashing every loser red.
///
/// The caller is responsible for removing the seed's plain black marker
/// afterwards. `pts` must be non-empty.
pub(crate) fn seed_scan<K, O>(builder: &mut TraceBuilder, pts: &[Point<Num>], key: K) -> SeedScan
where
  K: Fn(&Point<Num>) -> O,
  O: PartialOrd,
{
  let mut best = 0;
  let mut highlight = builder.hold(FLASH_FRAMES, Shape::marker(pts[0], Color::Blue));
  builder.next_stage();
  for (i, pt) in pts.iter().enumerate().skip(1) {
    if key(pt) < key(&pts[best]) {
      let id = builder.hold(FLASH_FRAMES, Shape::marker(*pt, Color::Blue));
      builder.remove(vec![highlight]);
      highlight = id;
      best = i;
    } else {
      builder.flash(FLASH_FRAMES, Shape::marker(*pt, Color::Red));
    }
    builder.next_stage();
  }
  SeedScan {
    index: best,
    highlight,
  }
}

pub(crate) fn min_index_by<K, O>(pts: &[Point<Num>], key: K) -> Option<usize>
where
  K: Fn(&Point<Num>) -> O,
  O: Ord,
{
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| key(pt))
    .map(|(index, _)| index)
}

pub(crate) fn xy_key(pt: &Point<Num>) -> (OrderedFloat<Num>, OrderedFloat<Num>) {
  (OrderedFloat(pt.x), OrderedFloat(pt.y))
}

pub(crate) fn yx_key(pt: &Point<Num>) -> (OrderedFloat<Num>, OrderedFloat<Num>) {
  (OrderedFloat(pt.y), OrderedFloat(pt.x))
}

/// Reject input the wrapping sweep cannot handle: fewer than three distinct
/// points, or a point set lying entirely on one line.
pub(crate) fn validate(pts: &[Point<Num>]) -> Result<(), Error> {
  if distinct_count(pts) < 3 {
    return Err(Error::InsufficientVertices);
  }
  if all_collinear(pts) {
    return Err(Error::CollinearPoints);
  }
  Ok(())
}

pub(crate) fn distinct_count(pts: &[Point<Num>]) -> usize {
  let mut keys: Vec<_> = pts.iter().map(xy_key).collect();
  keys.sort_unstable();
  keys.dedup();
  keys.len()
}

fn all_collinear(pts: &[Point<Num>]) -> bool {
  let first = match pts.first() {
    Some(pt) => pt,
    None => return true,
  };
  let second = match pts.iter().find(|&pt| pt != first) {
    Some(pt) => pt,
    None => return true,
  };
  pts
    .iter()
    .all(|pt| Orientation::new(first, second, pt).is_colinear())
}
