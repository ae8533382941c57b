use crate::Num;

/// Width of the logical drawing area that all geometry is expressed in.
pub const LOGICAL_WIDTH: Num = 600.0;
/// Height of the logical drawing area.
pub const LOGICAL_HEIGHT: Num = 400.0;

/// Radius, in physical pixels, of a rendered point marker.
pub const MARKER_RADIUS: Num = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
  Black,
  Blue,
  Red,
}

impl Color {
  /// CSS color keyword, for canvas-backed render surfaces.
  pub fn as_css(self) -> &'static str {
    match self {
      Color::Black => "black",
      Color::Blue => "blue",
      Color::Red => "red",
    }
  }
}

/// Minimal set of drawing capabilities the scheduler needs. A web front end
/// backs this with a 2D canvas context; tests back it with a recorder.
pub trait RenderSurface {
  fn set_stroke_color(&mut self, color: Color);
  fn set_fill_color(&mut self, color: Color);
  fn clear_rect(&mut self, x: Num, y: Num, width: Num, height: Num);
  fn fill_circle(&mut self, x: Num, y: Num, radius: Num);
  fn stroke_line(&mut self, x1: Num, y1: Num, x2: Num, y2: Num);
  fn stroke_rect(&mut self, x: Num, y: Num, width: Num, height: Num);
}

/// Mapping from the logical coordinate space to physical pixel positions.
/// The core never touches pixels except through this and [RenderSurface].
pub trait CoordinateMap {
  fn physical_size(&self) -> (Num, Num);
  /// Largest sub-rectangle of the physical canvas with the logical aspect
  /// ratio, centered in both axes.
  fn drawing_area_size(&self) -> (Num, Num);
  /// Maps a logical position into the drawing area, flipping the Y axis so
  /// that logical Y grows upward.
  fn to_physical(&self, x: Num, y: Num) -> (Num, Num);
}

/// Stock letterboxing [CoordinateMap] over a resizable physical canvas.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
  logical_width: Num,
  logical_height: Num,
  physical_width: Num,
  physical_height: Num,
}

impl Viewport {
  pub fn new(physical_width: Num, physical_height: Num) -> Viewport {
    Viewport {
      logical_width: LOGICAL_WIDTH,
      logical_height: LOGICAL_HEIGHT,
      physical_width,
      physical_height,
    }
  }

  pub fn logical_size(&self) -> (Num, Num) {
    (self.logical_width, self.logical_height)
  }

  pub fn set_physical_size(&mut self, width: Num, height: Num) {
    self.physical_width = width;
    self.physical_height = height;
  }
}

impl CoordinateMap for Viewport {
  fn physical_size(&self) -> (Num, Num) {
    (self.physical_width, self.physical_height)
  }

  fn drawing_area_size(&self) -> (Num, Num) {
    let logical_aspect = self.logical_width / self.logical_height;
    let physical_aspect = self.physical_width / self.physical_height;
    if logical_aspect < physical_aspect {
      // Physical canvas is wider than the logical area; limited by height.
      (logical_aspect * self.physical_height, self.physical_height)
    } else {
      (self.physical_width, self.physical_width / logical_aspect)
    }
  }

  fn to_physical(&self, x: Num, y: Num) -> (Num, Num) {
    let (physical_width, physical_height) = self.physical_size();
    let (area_width, area_height) = self.drawing_area_size();
    let px = (x / self.logical_width) * area_width + (physical_width - area_width) / 2.0;
    let py = (y / self.logical_height) * area_height + (physical_height - area_height) / 2.0;
    (px, physical_height - py)
  }
}
