use rand::Rng;

use crate::canvas::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::data::Point;
use crate::{Error, Num};

/// Parse a point list of the form `(x, y), (x, y), ...`.
///
/// Whitespace is free; the list may be empty. Coordinates must be finite
/// and inside the logical drawing area.
///
/// # Errors
/// [Error::MalformedPointList] for syntax errors and non-finite numbers,
/// [Error::PointOutOfBounds] when a point falls outside the logical area.
pub fn parse_points(text: &str) -> Result<Vec<Point<Num>>, Error> {
  let mut points = Vec::new();
  let mut rest = text.trim_start();
  while !rest.is_empty() {
    rest = rest.strip_prefix('(').ok_or(Error::MalformedPointList)?;
    let close = rest.find(')').ok_or(Error::MalformedPointList)?;
    points.push(parse_pair(&rest[..close])?);
    rest = rest[close + 1..].trim_start();
    match rest.strip_prefix(',') {
      Some(after) => rest = after.trim_start(),
      None if rest.is_empty() => break,
      None => return Err(Error::MalformedPointList),
    }
  }
  Ok(points)
}

fn parse_pair(inner: &str) -> Result<Point<Num>, Error> {
  let mut parts = inner.split(',');
  let x = parse_coordinate(parts.next())?;
  let y = parse_coordinate(parts.next())?;
  if parts.next().is_some() {
    return Err(Error::MalformedPointList);
  }
  let point = Point::new(x, y);
  if !(0.0..=LOGICAL_WIDTH).contains(&point.x) || !(0.0..=LOGICAL_HEIGHT).contains(&point.y) {
    return Err(Error::PointOutOfBounds);
  }
  Ok(point)
}

fn parse_coordinate(part: Option<&str>) -> Result<Num, Error> {
  let value: Num = part
    .ok_or(Error::MalformedPointList)?
    .trim()
    .parse()
    .map_err(|_| Error::MalformedPointList)?;
  if !value.is_finite() {
    return Err(Error::MalformedPointList);
  }
  Ok(value)
}

/// Uniformly random points in the central 80% of the logical drawing area,
/// so markers stay clear of the border.
pub fn random_points<R>(n: usize, rng: &mut R) -> Vec<Point<Num>>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| {
      Point::new(
        rng.gen_range(0.1 * LOGICAL_WIDTH..0.9 * LOGICAL_WIDTH),
        rng.gen_range(0.1 * LOGICAL_HEIGHT..0.9 * LOGICAL_HEIGHT),
      )
    })
    .collect()
}
