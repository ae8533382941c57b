// Test-only helpers: a recording render surface, a recording status sink,
// and proptest strategies for point sets in the logical drawing area.
use crate::canvas::{Color, CoordinateMap, RenderSurface, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::data::Point;
use crate::{Num, Severity, StatusSink};

use proptest::collection::btree_set;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
  SetStrokeColor(Color),
  SetFillColor(Color),
  ClearRect { x: Num, y: Num, width: Num, height: Num },
  FillCircle { x: Num, y: Num, radius: Num },
  StrokeLine { x1: Num, y1: Num, x2: Num, y2: Num },
  StrokeRect { x: Num, y: Num, width: Num, height: Num },
}

/// Render surface that records every call instead of painting.
pub struct RecordingSurface {
  pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
  pub fn new() -> RecordingSurface {
    RecordingSurface { ops: Vec::new() }
  }
}

impl RenderSurface for RecordingSurface {
  fn set_stroke_color(&mut self, color: Color) {
    self.ops.push(DrawOp::SetStrokeColor(color));
  }
  fn set_fill_color(&mut self, color: Color) {
    self.ops.push(DrawOp::SetFillColor(color));
  }
  fn clear_rect(&mut self, x: Num, y: Num, width: Num, height: Num) {
    self.ops.push(DrawOp::ClearRect { x, y, width, height });
  }
  fn fill_circle(&mut self, x: Num, y: Num, radius: Num) {
    self.ops.push(DrawOp::FillCircle { x, y, radius });
  }
  fn stroke_line(&mut self, x1: Num, y1: Num, x2: Num, y2: Num) {
    self.ops.push(DrawOp::StrokeLine { x1, y1, x2, y2 });
  }
  fn stroke_rect(&mut self, x: Num, y: Num, width: Num, height: Num) {
    self.ops.push(DrawOp::StrokeRect { x, y, width, height });
  }
}

/// Coordinate map whose physical canvas equals the logical area, so mapped
/// positions stay easy to assert on (only the Y axis flips).
pub struct TestMap;

impl CoordinateMap for TestMap {
  fn physical_size(&self) -> (Num, Num) {
    (LOGICAL_WIDTH, LOGICAL_HEIGHT)
  }
  fn drawing_area_size(&self) -> (Num, Num) {
    (LOGICAL_WIDTH, LOGICAL_HEIGHT)
  }
  fn to_physical(&self, x: Num, y: Num) -> (Num, Num) {
    (x, LOGICAL_HEIGHT - y)
  }
}

/// Status sink that keeps every notification.
pub struct StatusLog {
  pub entries: Vec<(Severity, String)>,
}

impl StatusLog {
  pub fn new() -> StatusLog {
    StatusLog { entries: Vec::new() }
  }
}

impl StatusSink for StatusLog {
  fn notify(&mut self, severity: Severity, message: &str) {
    self.entries.push((severity, message.to_string()));
  }
}

pub fn logical_point() -> impl Strategy<Value = Point<Num>> {
  (0.0..LOGICAL_WIDTH, 0.0..LOGICAL_HEIGHT).prop_map(|(x, y)| Point::new(x, y))
}

const CIRCLE_SLOTS: u32 = 64;

fn slot_point(slot: u32) -> Point<Num> {
  let angle = std::f64::consts::TAU * f64::from(slot) / f64::from(CIRCLE_SLOTS);
  Point::new(300.0 + 150.0 * angle.cos(), 200.0 + 150.0 * angle.sin())
}

/// Points in convex position (distinct slots on a circle), shuffled into an
/// arbitrary input order. The convex hull of such a set is the whole set.
pub fn convex_points() -> impl Strategy<Value = Vec<Point<Num>>> {
  (btree_set(0..CIRCLE_SLOTS, 3..12), any::<u64>()).prop_map(|(slots, seed)| {
    let mut pts: Vec<Point<Num>> = slots.into_iter().map(slot_point).collect();
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    pts.shuffle(&mut rng);
    pts
  })
}

/// Counterclockwise hull order of a convex-position point set, rotated to
/// start at the seed vertex (minimal x, then minimal y).
pub fn ccw_hull_order(pts: &[Point<Num>]) -> Vec<Point<Num>> {
  use ordered_float::OrderedFloat;
  let cx = pts.iter().map(|p| p.x).sum::<Num>() / pts.len() as Num;
  let cy = pts.iter().map(|p| p.y).sum::<Num>() / pts.len() as Num;
  let mut ordered = pts.to_vec();
  ordered.sort_by_key(|p| OrderedFloat((p.y - cy).atan2(p.x - cx)));
  let seed = ordered
    .iter()
    .enumerate()
    .min_by_key(|(_, p)| (OrderedFloat(p.x), OrderedFloat(p.y)))
    .map(|(i, _)| i)
    .unwrap();
  ordered.rotate_left(seed);
  ordered
}
