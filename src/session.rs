use crate::algorithms::convex_hull::{gift_wrapping, graham_scan, Trace};
use crate::canvas::{Color, RenderSurface, Viewport};
use crate::data::Point;
use crate::input;
use crate::scene::{Shape, TraceBuilder};
use crate::scheduler::Scheduler;
use crate::{Error, Num, Severity, StatusSink};

/// Nominal period of the step-then-draw tick, in milliseconds. The host
/// owns the actual timer; roughly 60 frames per second.
pub const TICK_INTERVAL_MS: u64 = 17;

/// One visualization context: the scheduler, the viewport, the current
/// point set, and the status sink, owned together so multiple independent
/// visualizations can coexist and tests need no shared globals.
///
/// Re-entrant input (new points or a new run while an animation plays) is
/// an interruption: the in-progress trace is discarded abruptly, nothing
/// of it is preserved.
pub struct Session<S> {
  scheduler: Scheduler,
  viewport: Viewport,
  points: Vec<Point<Num>>,
  status: S,
}

impl<S: StatusSink> Session<S> {
  pub fn new(viewport: Viewport, status: S) -> Session<S> {
    Session {
      scheduler: Scheduler::new(),
      viewport,
      points: Vec::new(),
      status,
    }
  }

  pub fn points(&self) -> &[Point<Num>] {
    &self.points
  }

  pub fn scheduler(&self) -> &Scheduler {
    &self.scheduler
  }

  pub fn status(&self) -> &S {
    &self.status
  }

  pub fn resize(&mut self, physical_width: Num, physical_height: Num) {
    self.viewport.set_physical_size(physical_width, physical_height);
  }

  /// Replace the point set from `(x, y), (x, y), ...` text. Leaves the
  /// previous set untouched when parsing fails.
  pub fn load_points(&mut self, text: &str) -> Result<(), Error> {
    match input::parse_points(text) {
      Ok(points) => {
        self.set_points(points);
        Ok(())
      }
      Err(err) => {
        self.status.notify(Severity::Error, &err.to_string());
        Err(err)
      }
    }
  }

  pub fn set_points(&mut self, points: Vec<Point<Num>>) {
    self.interrupt();
    self.points = points;
    self.show_points();
    self
      .status
      .notify(Severity::Info, &format!("Parsed {} points", self.points.len()));
  }

  /// Seed and start the animated gift-wrapping run.
  pub fn run_gift_wrapping(&mut self) -> Result<(), Error> {
    self.run(gift_wrapping::trace)
  }

  /// Seed and start the (partial) Graham scan run: seed selection only.
  pub fn run_graham_scan(&mut self) -> Result<(), Error> {
    self.run(graham_scan::seed_trace)
  }

  fn run<F>(&mut self, generate: F) -> Result<(), Error>
  where
    F: Fn(&[Point<Num>]) -> Result<Trace, Error>,
  {
    self.interrupt();
    if self.points.len() < 3 {
      // Malformed input is caught here; the generators assume valid input.
      self.show_points();
      self.status.notify(Severity::Error, "Need at least three points");
      return Err(Error::InsufficientVertices);
    }
    match generate(&self.points) {
      Ok(trace) => {
        self.scheduler.clear();
        self.scheduler.add(trace.objects);
        self.scheduler.start_animation();
        self.status.notify(
          Severity::Info,
          &format!("Seed vertex at ({}, {})", trace.seed.x, trace.seed.y),
        );
        Ok(())
      }
      Err(err) => {
        self.show_points();
        self.status.notify(Severity::Error, &err.to_string());
        Err(err)
      }
    }
  }

  /// One frame: advance the animation, then render it.
  pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
    self.scheduler.step(&mut self.status);
    self.scheduler.draw(surface, &self.viewport);
  }

  fn interrupt(&mut self) {
    if self.scheduler.is_running() {
      self.status.notify(Severity::Info, "Animation interrupted");
    }
    self.scheduler.clear();
  }

  /// Show the bare point set, without any animation.
  fn show_points(&mut self) {
    let mut builder = TraceBuilder::new();
    for pt in &self.points {
      builder.push_static(Shape::marker(*pt, Color::Black));
    }
    self.scheduler.clear();
    self.scheduler.add(builder.finish());
  }
}
