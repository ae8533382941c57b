use crate::canvas::{Color, CoordinateMap, RenderSurface};
use crate::scene::{SceneId, SceneObject};
use crate::{Severity, StatusSink};

// Properties:
//    Objects tagged with a later stage never advance while an earlier
//    stage still has unfinished effects.
//    step/draw are safe no-ops when idle or empty.

/// Stage-synchronized animation scheduler.
///
/// Owns the ordered list of live objects (static drawables, animated
/// effects, removal effects), advances one stage cohort per frame, and
/// renders the current frame. List order is draw order; stage tags govern
/// execution order.
pub struct Scheduler {
  objects: Vec<SceneObject>,
  stage: u32,
  in_progress: bool,
}

impl Scheduler {
  pub fn new() -> Scheduler {
    Scheduler {
      objects: Vec::new(),
      stage: 0,
      in_progress: false,
    }
  }

  /// Discard all objects and reset the stage cursor. Interruption is abrupt
  /// and total; nothing of an in-progress trace is preserved.
  pub fn clear(&mut self) {
    self.objects.clear();
    self.stage = 0;
    self.in_progress = false;
  }

  /// Append objects in call order. Producers add a whole trace up front;
  /// nothing is added mid-animation.
  pub fn add<I>(&mut self, objects: I)
  where
    I: IntoIterator<Item = SceneObject>,
  {
    self.objects.extend(objects);
  }

  /// Arm the animation. Must be called after [add] has populated a trace;
  /// until then [step] is a no-op.
  pub fn start_animation(&mut self) {
    self.stage = 0;
    self.in_progress = true;
  }

  pub fn is_running(&self) -> bool {
    self.in_progress
  }

  pub fn stage(&self) -> u32 {
    self.stage
  }

  pub fn objects(&self) -> &[SceneObject] {
    &self.objects
  }

  /// Advance one frame.
  ///
  /// Every timed object tagged with the current stage cursor gains one frame
  /// of progress. Finished animated effects freeze into their last computed
  /// drawable (or disappear when that is `None`); finished removal effects
  /// contribute their targets to a one-shot deletion batch applied at the
  /// end of the pass. The cursor then moves to the minimum stage among the
  /// remaining timed objects. A tick that observes no timed object at all
  /// ends the run and reports completion to `status`.
  pub fn step(&mut self, status: &mut dyn StatusSink) {
    if !self.in_progress {
      return;
    }
    let mut saw_timed = false;
    let mut next_stage: Option<u32> = None;
    let mut doomed: Vec<SceneId> = Vec::new();
    let mut kept: Vec<SceneObject> = Vec::with_capacity(self.objects.len());

    for object in self.objects.drain(..) {
      match object {
        SceneObject::Static { .. } => kept.push(object),
        SceneObject::Animated(mut fx) => {
          saw_timed = true;
          if fx.timing.stage == self.stage {
            fx.timing.advance();
          }
          if fx.timing.is_done() {
            // Freeze into the last computed representation.
            if let Some(shape) = (fx.frame_fn)(fx.timing.progress() as u32) {
              kept.push(SceneObject::Static { id: fx.id, shape });
            }
          } else {
            next_stage = min_stage(next_stage, fx.timing.stage);
            kept.push(SceneObject::Animated(fx));
          }
        }
        SceneObject::Removal(mut fx) => {
          saw_timed = true;
          if fx.timing.stage == self.stage {
            fx.timing.advance();
          }
          if fx.timing.is_done() {
            doomed.extend(fx.targets);
          } else {
            next_stage = min_stage(next_stage, fx.timing.stage);
            kept.push(SceneObject::Removal(fx));
          }
        }
      }
    }

    if !doomed.is_empty() {
      kept.retain(|object| !doomed.contains(&object.id()));
    }
    self.objects = kept;

    if let Some(stage) = next_stage {
      self.stage = stage;
    }
    if !saw_timed {
      self.in_progress = false;
      status.notify(Severity::Success, "Animation finished");
    }
  }

  /// Render the current frame: wipe the surface, stroke the drawing-area
  /// border, then paint every object in list order. Removal effects and
  /// not-yet-started animations have no representation and are skipped.
  pub fn draw(&self, surface: &mut dyn RenderSurface, map: &dyn CoordinateMap) {
    let (physical_width, physical_height) = map.physical_size();
    let (area_width, area_height) = map.drawing_area_size();
    surface.clear_rect(0.0, 0.0, physical_width, physical_height);
    surface.set_stroke_color(Color::Black);
    surface.stroke_rect(
      (physical_width - area_width) / 2.0,
      (physical_height - area_height) / 2.0,
      area_width,
      area_height,
    );
    for object in &self.objects {
      match object {
        SceneObject::Static { shape, .. } => shape.draw(surface, map),
        SceneObject::Animated(fx) => {
          if let Some(shape) = fx.representation() {
            shape.draw(surface, map);
          }
        }
        SceneObject::Removal(_) => {}
      }
    }
  }
}

impl Default for Scheduler {
  fn default() -> Scheduler {
    Scheduler::new()
  }
}

fn min_stage(acc: Option<u32>, stage: u32) -> Option<u32> {
  Some(match acc {
    None => stage,
    Some(prev) => prev.min(stage),
  })
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::canvas::Color;
  use crate::data::Point;
  use crate::scene::{AnimatedEffect, RemovalEffect, Shape, Timing, TraceBuilder};
  use crate::testing::{DrawOp, RecordingSurface, StatusLog, TestMap};

  fn marker(x: f64, y: f64, color: Color) -> Shape {
    Shape::marker(Point::new(x, y), color)
  }

  fn hold(id: u64, stage: u32, duration: u32, shape: Shape) -> SceneObject {
    SceneObject::Animated(AnimatedEffect::new(
      SceneId(id),
      Timing::new(stage, duration),
      move |_| Some(shape),
    ))
  }

  fn progress_of(scheduler: &Scheduler, id: SceneId) -> Option<i32> {
    scheduler.objects().iter().find_map(|object| match object {
      SceneObject::Animated(fx) if fx.id == id => Some(fx.timing.progress()),
      _ => None,
    })
  }

  #[test]
  fn step_without_start_is_noop() {
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![hold(0, 0, 5, marker(1.0, 1.0, Color::Black))]);
    scheduler.step(&mut ());
    assert_eq!(progress_of(&scheduler, SceneId(0)), Some(-1));
  }

  #[test]
  fn stage_wavefront() {
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![
      hold(0, 0, 2, marker(0.0, 0.0, Color::Blue)),
      hold(1, 1, 1, marker(1.0, 0.0, Color::Blue)),
    ]);
    scheduler.start_animation();

    scheduler.step(&mut ());
    assert_eq!(progress_of(&scheduler, SceneId(0)), Some(0));
    // Later stage is inert while stage 0 runs.
    assert_eq!(progress_of(&scheduler, SceneId(1)), Some(-1));

    scheduler.step(&mut ());
    assert_eq!(progress_of(&scheduler, SceneId(0)), Some(1));
    assert_eq!(progress_of(&scheduler, SceneId(1)), Some(-1));

    // Stage 0 finishes this tick; cursor moves to 1.
    scheduler.step(&mut ());
    assert_eq!(progress_of(&scheduler, SceneId(0)), None);
    assert_eq!(scheduler.stage(), 1);

    scheduler.step(&mut ());
    assert_eq!(progress_of(&scheduler, SceneId(1)), Some(0));
  }

  #[test]
  fn cursor_skips_empty_stages() {
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![
      hold(0, 0, 0, marker(0.0, 0.0, Color::Blue)),
      hold(1, 7, 0, marker(1.0, 0.0, Color::Blue)),
    ]);
    scheduler.start_animation();
    scheduler.step(&mut ());
    assert_eq!(scheduler.stage(), 7);
  }

  #[test]
  fn zero_duration_animated_freezes_immediately() {
    let shape = marker(2.0, 3.0, Color::Blue);
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![hold(0, 0, 0, shape)]);
    scheduler.start_animation();
    scheduler.step(&mut ());
    assert_eq!(scheduler.objects()[0].as_static(), Some(&shape));
  }

  #[test]
  fn finished_flash_vanishes() {
    let shape = marker(2.0, 3.0, Color::Red);
    let mut b = TraceBuilder::new();
    b.flash(1, shape);
    let mut scheduler = Scheduler::new();
    scheduler.add(b.finish());
    scheduler.start_animation();
    scheduler.step(&mut ());
    scheduler.step(&mut ());
    assert!(scheduler.objects().is_empty());
  }

  #[test]
  fn removal_deletes_targets_and_itself() {
    let shape = marker(0.0, 0.0, Color::Black);
    let twin = marker(0.0, 0.0, Color::Black);
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![
      SceneObject::Static { id: SceneId(0), shape },
      SceneObject::Static { id: SceneId(1), shape: twin },
      SceneObject::Removal(RemovalEffect::new(
        SceneId(2),
        Timing::new(0, 0),
        vec![SceneId(0)],
      )),
    ]);
    scheduler.start_animation();
    scheduler.step(&mut ());
    // Identity-based removal: the coincident twin survives.
    assert_eq!(scheduler.objects().len(), 1);
    assert_eq!(scheduler.objects()[0].id(), SceneId(1));
  }

  #[test]
  fn removal_matching_nothing_is_noop() {
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![SceneObject::Removal(RemovalEffect::new(
      SceneId(0),
      Timing::new(0, 0),
      vec![SceneId(99)],
    ))]);
    scheduler.start_animation();
    scheduler.step(&mut ());
    assert!(scheduler.objects().is_empty());
  }

  #[test]
  fn completion_notifies_once() {
    let mut log = StatusLog::new();
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![hold(0, 0, 1, marker(0.0, 0.0, Color::Blue))]);
    scheduler.start_animation();
    for _ in 0..5 {
      scheduler.step(&mut log);
    }
    assert!(!scheduler.is_running());
    assert_eq!(log.entries.len(), 1);
    assert_eq!(log.entries[0].0, Severity::Success);
  }

  #[test]
  fn clear_is_idempotent() {
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![hold(0, 0, 1, marker(0.0, 0.0, Color::Blue))]);
    scheduler.start_animation();
    scheduler.clear();
    scheduler.clear();
    assert!(scheduler.objects().is_empty());
    assert!(!scheduler.is_running());
    // Stepping a cleared scheduler does nothing.
    let mut log = StatusLog::new();
    scheduler.step(&mut log);
    assert!(log.entries.is_empty());
  }

  #[test]
  fn draw_skips_non_renderable() {
    let shape = marker(300.0, 200.0, Color::Black);
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![
      SceneObject::Static { id: SceneId(0), shape },
      // Not started: no representation yet.
      hold(1, 3, 5, marker(0.0, 0.0, Color::Blue)),
      SceneObject::Removal(RemovalEffect::new(SceneId(2), Timing::new(0, 0), vec![])),
    ]);
    let mut surface = RecordingSurface::new();
    scheduler.draw(&mut surface, &TestMap);
    let circles = surface
      .ops
      .iter()
      .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
      .count();
    assert_eq!(circles, 1);
    // Clear and border come first.
    assert!(matches!(surface.ops[0], DrawOp::ClearRect { .. }));
    assert!(surface
      .ops
      .iter()
      .any(|op| matches!(op, DrawOp::StrokeRect { .. })));
  }

  #[test]
  fn draw_running_animation_uses_current_frame() {
    let shape = marker(10.0, 10.0, Color::Red);
    let mut scheduler = Scheduler::new();
    scheduler.add(vec![hold(0, 0, 5, shape)]);
    scheduler.start_animation();
    scheduler.step(&mut ());
    let mut surface = RecordingSurface::new();
    scheduler.draw(&mut surface, &TestMap);
    assert!(surface
      .ops
      .iter()
      .any(|op| matches!(op, DrawOp::FillCircle { .. })));
  }

  #[test]
  fn draw_empty_is_safe() {
    let scheduler = Scheduler::new();
    let mut surface = RecordingSurface::new();
    scheduler.draw(&mut surface, &TestMap);
    assert!(matches!(surface.ops[0], DrawOp::ClearRect { .. }));
  }
}
