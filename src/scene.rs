use crate::canvas::{Color, CoordinateMap, RenderSurface, MARKER_RADIUS};
use crate::data::Point;
use crate::Num;

/// Identity of a scheduler object, unique within one trace. Removal effects
/// target ids rather than structural equality, so two markers that happen to
/// share coordinates and color never get deleted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SceneId(pub u64);

/// Something that can be put on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
  Marker { point: Point<Num>, color: Color },
  Edge { from: Point<Num>, to: Point<Num>, color: Color },
}

impl Shape {
  pub fn marker(point: Point<Num>, color: Color) -> Shape {
    Shape::Marker { point, color }
  }

  pub fn edge(from: Point<Num>, to: Point<Num>, color: Color) -> Shape {
    Shape::Edge { from, to, color }
  }

  pub fn color(&self) -> Color {
    match self {
      Shape::Marker { color, .. } => *color,
      Shape::Edge { color, .. } => *color,
    }
  }

  pub fn draw(&self, surface: &mut dyn RenderSurface, map: &dyn CoordinateMap) {
    match self {
      Shape::Marker { point, color } => {
        let (px, py) = map.to_physical(point.x, point.y);
        surface.set_fill_color(*color);
        surface.fill_circle(px, py, MARKER_RADIUS);
      }
      Shape::Edge { from, to, color } => {
        let (x1, y1) = map.to_physical(from.x, from.y);
        let (x2, y2) = map.to_physical(to.x, to.y);
        surface.set_stroke_color(*color);
        surface.stroke_line(x1, y1, x2, y2);
      }
    }
  }
}

/// Frame-counted lifetime plus the animation stage the effect belongs to.
///
/// `progress` starts at -1; it only moves while the scheduler's stage cursor
/// equals `stage`, one frame per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
  pub stage: u32,
  pub duration: u32,
  progress: i32,
}

impl Timing {
  pub fn new(stage: u32, duration: u32) -> Timing {
    Timing {
      stage,
      duration,
      progress: -1,
    }
  }

  pub fn progress(&self) -> i32 {
    self.progress
  }

  pub fn has_started(&self) -> bool {
    self.progress >= 0
  }

  /// A zero-duration timing is done on its first eligible step.
  pub fn is_done(&self) -> bool {
    self.progress >= 0 && self.progress as u32 >= self.duration
  }

  pub(crate) fn advance(&mut self) {
    self.progress += 1;
  }
}

/// Pure mapping from elapsed frames to an optional drawable. Must stay
/// side-effect free and deterministic; the scheduler replays it both while
/// animating and to compute the frozen end state.
pub type FrameFn = Box<dyn Fn(u32) -> Option<Shape>>;

pub struct AnimatedEffect {
  pub id: SceneId,
  pub timing: Timing,
  pub frame_fn: FrameFn,
}

impl AnimatedEffect {
  pub fn new<F>(id: SceneId, timing: Timing, frame_fn: F) -> AnimatedEffect
  where
    F: Fn(u32) -> Option<Shape> + 'static,
  {
    AnimatedEffect {
      id,
      timing,
      frame_fn: Box::new(frame_fn),
    }
  }

  /// Drawable for the current frame; `None` before the effect starts or
  /// when the frame function yields nothing.
  pub fn representation(&self) -> Option<Shape> {
    if !self.timing.has_started() {
      return None;
    }
    (self.frame_fn)(self.timing.progress() as u32)
  }
}

impl std::fmt::Debug for AnimatedEffect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AnimatedEffect")
      .field("id", &self.id)
      .field("timing", &self.timing)
      .finish_non_exhaustive()
  }
}

/// Once its (typically zero-length) delay elapses, deletes every object
/// whose id is in `targets`, along with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalEffect {
  pub id: SceneId,
  pub timing: Timing,
  pub targets: Vec<SceneId>,
}

impl RemovalEffect {
  pub fn new(id: SceneId, timing: Timing, targets: Vec<SceneId>) -> RemovalEffect {
    RemovalEffect { id, timing, targets }
  }
}

/// Closed sum of everything the scheduler manages.
#[derive(Debug)]
pub enum SceneObject {
  Static { id: SceneId, shape: Shape },
  Animated(AnimatedEffect),
  Removal(RemovalEffect),
}

impl SceneObject {
  pub fn id(&self) -> SceneId {
    match self {
      SceneObject::Static { id, .. } => *id,
      SceneObject::Animated(fx) => fx.id,
      SceneObject::Removal(fx) => fx.id,
    }
  }

  /// Static drawable, if this object has settled into one.
  pub fn as_static(&self) -> Option<&Shape> {
    match self {
      SceneObject::Static { shape, .. } => Some(shape),
      _ => None,
    }
  }
}

/// Accumulates the animation script for one algorithm run: allocates ids,
/// tracks the stage cursor, and collects scene objects in insertion order
/// (which is also draw order).
pub struct TraceBuilder {
  objects: Vec<SceneObject>,
  next_id: u64,
  stage: u32,
}

impl TraceBuilder {
  pub fn new() -> TraceBuilder {
    TraceBuilder {
      objects: Vec::new(),
      next_id: 0,
      stage: 0,
    }
  }

  fn alloc(&mut self) -> SceneId {
    let id = SceneId(self.next_id);
    self.next_id += 1;
    id
  }

  pub fn stage(&self) -> u32 {
    self.stage
  }

  pub fn next_stage(&mut self) {
    self.stage += 1;
  }

  /// A permanent drawable, visible from the first frame.
  pub fn push_static(&mut self, shape: Shape) -> SceneId {
    let id = self.alloc();
    self.objects.push(SceneObject::Static { id, shape });
    id
  }

  /// Animate `shape` for `duration` frames at the current stage and keep it
  /// afterwards.
  pub fn hold(&mut self, duration: u32, shape: Shape) -> SceneId {
    let id = self.alloc();
    self.objects.push(SceneObject::Animated(AnimatedEffect::new(
      id,
      Timing::new(self.stage, duration),
      move |_| Some(shape),
    )));
    id
  }

  /// Animate `shape` for `duration` frames at the current stage, then let
  /// it vanish.
  pub fn flash(&mut self, duration: u32, shape: Shape) -> SceneId {
    let id = self.alloc();
    self.objects.push(SceneObject::Animated(AnimatedEffect::new(
      id,
      Timing::new(self.stage, duration),
      move |frame| if frame < duration { Some(shape) } else { None },
    )));
    id
  }

  /// Delete `targets` as soon as the current stage is reached.
  pub fn remove(&mut self, targets: Vec<SceneId>) -> SceneId {
    let id = self.alloc();
    self.objects.push(SceneObject::Removal(RemovalEffect::new(
      id,
      Timing::new(self.stage, 0),
      targets,
    )));
    id
  }

  pub fn finish(self) -> Vec<SceneObject> {
    self.objects
  }
}

impl Default for TraceBuilder {
  fn default() -> TraceBuilder {
    TraceBuilder::new()
  }
}
