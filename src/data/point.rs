use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Sub;

use super::Vector;
use crate::Orientation;

/// A point in the plane.
///
/// Coordinates are wrapped in [`OrderedFloat`] so that points can be stored
/// in hash-based containers and sorted lexicographically. Equality is exact:
/// two points are equal iff their coordinates compare equal, with no epsilon.
/// The derived `Ord` compares by x, then y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point {
  pub array: [OrderedFloat<f64>; 2],
}

impl Point {
  pub fn new(x: f64, y: f64) -> Point {
    Point {
      array: [OrderedFloat(x), OrderedFloat(y)],
    }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1].into_inner()
  }

  pub(crate) fn to_array(self) -> [f64; 2] {
    [self.x_coord(), self.y_coord()]
  }

  /// Euclidean distance to `rhs`.
  pub fn distance_to(&self, rhs: &Point) -> f64 {
    distance(self, rhs)
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `q` to `r`. See [`Orientation::new`].
  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

impl Sub for Point {
  type Output = Vector;
  fn sub(self, rhs: Point) -> Vector {
    Vector([
      self.x_coord() - rhs.x_coord(),
      self.y_coord() - rhs.y_coord(),
    ])
  }
}

// Random sampling. Coordinates are drawn uniformly from [0, 1).
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen())
  }
}

/// Euclidean distance between two points.
pub fn distance(p0: &Point, p1: &Point) -> f64 {
  (*p0 - *p1).magnitude()
}

/// Signed area of the parallelogram spanned by `v1 - v0` and `v2 - v0`.
///
/// Positive when the walk `v0 -> v1 -> v2` turns counter-clockwise in a
/// right-handed frame with y up, negative for clockwise, zero for colinear
/// triples (up to floating-point rounding; use
/// [`Orientation::new`] when the sign must be exact).
pub fn cross_product(v0: &Point, v1: &Point, v2: &Point) -> f64 {
  (v1.x_coord() - v0.x_coord()) * (v2.y_coord() - v0.y_coord())
    - (v1.y_coord() - v0.y_coord()) * (v2.x_coord() - v0.x_coord())
}
