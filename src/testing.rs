// Shared proptest strategies for points and point sets.
use proptest::collection::{hash_set, vec};
use proptest::prelude::*;

use crate::data::Point;

/// A point with finite coordinates in a bounded range.
pub fn any_point() -> impl Strategy<Value = Point> {
  (-1.0e3..1.0e3, -1.0e3..1.0e3).prop_map(|(x, y)| Point::new(x, y))
}

pub fn point_vec(max: usize) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), 0..max)
}

/// A point on a small integer lattice. Lattice inputs exercise the exact
/// tie cases (colinear triples, cocircular quadruples) that uniform random
/// floats almost never hit.
pub fn lattice_point() -> impl Strategy<Value = Point> {
  (0i32..16, 0i32..16).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

pub fn lattice_vec(max: usize) -> impl Strategy<Value = Vec<Point>> {
  vec(lattice_point(), 0..max)
}

/// Distinct lattice points (no duplicates).
pub fn distinct_lattice_vec(max: usize) -> impl Strategy<Value = Vec<Point>> {
  hash_set((0i32..16, 0i32..16), 0..max).prop_map(|set| {
    set
      .into_iter()
      .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
      .collect()
  })
}

/// Three pairwise distinct points.
pub fn three_distinct_points() -> impl Strategy<Value = (Point, Point, Point)> {
  (any_point(), any_point(), any_point())
    .prop_filter("points must be distinct", |(a, b, c)| {
      a != b && b != c && a != c
    })
}
