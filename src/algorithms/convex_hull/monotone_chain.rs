use crate::data::Point;
use crate::Orientation;

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Algorithms (Andrew's monotone chain)

/// $O(n \log n)$ Convex hull of a set of points.
///
/// Builds the lower and upper chains of the hull over the lexicographically
/// sorted point set and concatenates them.
///
/// # Properties
/// * The boundary is returned in counter-clockwise order, starting at the
///   lexicographically smallest point.
/// * No point from the input set lies outside the returned polygon.
/// * All returned vertices are from the input set; duplicates are dropped.
/// * Colinear boundary points are excluded: the hull has the minimal vertex
///   count.
///
/// # Edge cases
/// Inputs with fewer than three points are returned unchanged (they are
/// already "convex"). Inputs with fewer than three *distinct* points return
/// the distinct points, sorted. A fully colinear input degenerates to the
/// two extreme points.
///
/// # Examples
///
/// ```rust
/// # use planimetry::algorithms::convex_hull;
/// # use planimetry::data::Point;
/// let points = [
///   Point::new(0.0, 0.0),
///   Point::new(1.0, 0.0),
///   Point::new(1.0, 1.0),
///   Point::new(0.0, 1.0),
///   Point::new(0.5, 0.5), // interior
/// ];
/// assert_eq!(
///   convex_hull(&points),
///   vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///   ]
/// );
/// ```
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
  if points.len() < 3 {
    return points.to_vec();
  }

  let mut pts = points.to_vec();
  pts.sort_unstable();
  pts.dedup();
  if pts.len() < 3 {
    return pts;
  }

  let mut hull = chain(pts.iter().copied());
  let mut upper = chain(pts.iter().rev().copied());

  // Each chain ends with the point the other one starts with.
  hull.pop();
  upper.pop();
  hull.extend(upper);
  hull
}

// One monotone chain: pop while the last two stack points and the incoming
// point fail to make a strict left turn.
fn chain(points: impl Iterator<Item = Point>) -> Vec<Point> {
  let mut out: Vec<Point> = Vec::new();
  for p in points {
    while out.len() >= 2
      && out[out.len() - 2].orientation(&out[out.len() - 1], &p) != Orientation::CounterClockWise
    {
      out.pop();
    }
    out.push(p);
  }
  out
}
