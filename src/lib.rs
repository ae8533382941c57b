#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod canvas;
pub mod data;
pub mod input;
mod orientation;
pub mod scene;
pub mod scheduler;
pub mod session;

pub use orientation::Orientation;

/// Scalar used throughout the animation layer. The geometric primitives in
/// [data] are generic; everything above them lives in the fixed logical
/// coordinate space and sticks to one float type.
pub type Num = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Every input point lies on a single line. Gift wrapping cannot pick a
  /// rotational order for such a set, so it is rejected up front.
  CollinearPoints,
  MalformedPointList,
  PointOutOfBounds,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::CollinearPoints => write!(f, "All points are collinear"),
      Error::MalformedPointList => write!(f, "Malformed point list"),
      Error::PointOutOfBounds => write!(f, "Point outside the logical drawing area"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Info,
  Success,
  Error,
}

/// One-shot notification channel towards whatever displays status text.
/// Content only; no format contract beyond plain text.
pub trait StatusSink {
  fn notify(&mut self, severity: Severity, message: &str);
}

/// Discards every notification.
impl StatusSink for () {
  fn notify(&mut self, _severity: Severity, _message: &str) {}
}

#[cfg(test)]
pub mod testing;
