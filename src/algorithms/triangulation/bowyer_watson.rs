use std::collections::{HashMap, HashSet};

use crate::data::{Edge, Point, Triangle};
use crate::Error;

// https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm

/// $O(n^2)$ Delaunay triangulation of a point set.
///
/// Bowyer–Watson incremental insertion: the working set is seeded with an
/// oversized super-triangle; each point knocks out every triangle whose
/// circumcircle contains it and the resulting cavity is re-triangulated as a
/// fan around the point. Triangles touching the super-triangle are stripped
/// from the final result.
///
/// Points are processed in slice order, so results are reproducible for a
/// given input sequence. Duplicate points are dropped (first occurrence
/// wins).
///
/// Each insertion scans all current triangles, so the overall cost is
/// quadratic in the number of points. Fine for interactive point counts;
/// this is not an $O(n \log n)$ implementation.
///
/// # Errors
/// Returns [`Error::InsufficientPoints`] when the input holds fewer than
/// three distinct points. A fully colinear input is not an error: it yields
/// an empty triangulation, since no non-degenerate triangle exists.
///
/// # Examples
///
/// ```rust
/// # use planimetry::algorithms::triangulate;
/// # use planimetry::data::{Point, Triangle};
/// let points = [
///   Point::new(0.0, 0.0),
///   Point::new(1.0, 0.0),
///   Point::new(0.0, 1.0),
/// ];
/// let triangles = triangulate(&points).unwrap();
/// assert_eq!(triangles.len(), 1);
/// assert!(triangles.contains(&Triangle::new(points[0], points[1], points[2])));
/// ```
pub fn triangulate(points: &[Point]) -> Result<HashSet<Triangle>, Error> {
  let mut seen = HashSet::with_capacity(points.len());
  let unique: Vec<Point> = points.iter().copied().filter(|p| seen.insert(*p)).collect();
  if unique.len() < 3 {
    return Err(Error::InsufficientPoints);
  }

  let super_triangle = match Triangle::super_triangle(&unique) {
    Some(triangle) => triangle,
    None => return Err(Error::InsufficientPoints),
  };

  let mut triangles = HashSet::from([super_triangle]);
  for point in &unique {
    insert_point(&mut triangles, point);
  }

  Ok(
    triangles
      .into_iter()
      .filter(|triangle| !triangle.shares_vertex_with(&super_triangle))
      .collect(),
  )
}

/// A single Bowyer–Watson insertion step against a working set of triangles.
///
/// The Delaunay invariant holds on entry and on exit; it is violated only
/// transiently inside this function, between knocking out the bad triangles
/// and re-filling the cavity.
fn insert_point(triangles: &mut HashSet<Triangle>, point: &Point) {
  // Triangles invalidated by the new point, boundary-inclusive.
  let bad: Vec<Triangle> = triangles
    .iter()
    .filter(|triangle| triangle.in_circumcircle(point))
    .copied()
    .collect();

  // An edge interior to the cavity is walked by exactly two bad triangles;
  // a cavity-boundary edge by exactly one. Anything above two would be a
  // non-manifold cavity, which no valid triangulation can produce.
  let mut edge_counts: HashMap<Edge, usize> = HashMap::new();
  for triangle in &bad {
    for edge in triangle.edges() {
      *edge_counts.entry(edge).or_insert(0) += 1;
    }
  }

  for triangle in &bad {
    triangles.remove(triangle);
  }

  for (edge, count) in edge_counts {
    debug_assert!(count <= 2, "cavity edge walked by {} triangles", count);
    if count != 1 {
      continue;
    }
    let triangle = Triangle::new(*point, edge.src, edge.dst);
    // A point colinear with a boundary edge forms no triangle with it.
    if triangle.circumcircle().is_some() {
      triangles.insert(triangle);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err, assert_ok};
  use proptest::prelude::*;

  fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
  }

  #[test]
  fn single_triangle() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let triangles = assert_ok!(triangulate(&points));
    assert_eq!(triangles.len(), 1);
    assert!(triangles.contains(&Triangle::new(points[0], points[1], points[2])));
  }

  #[test]
  fn undersized_input_is_an_error() {
    assert_err!(triangulate(&[]));
    assert_err!(triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0)])));
    // Duplicates do not count towards the minimum.
    assert_err!(triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])));
  }

  #[test]
  fn colinear_input_yields_empty_triangulation() {
    // Axis-aligned: the super-triangle itself is degenerate.
    let horizontal = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert_eq!(assert_ok!(triangulate(&horizontal)).len(), 0);

    // Diagonal: the super-triangle is proper but every candidate triangle
    // shares one of its vertices.
    let diagonal = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(assert_ok!(triangulate(&diagonal)).len(), 0);
  }

  #[test]
  fn square_triangulates_into_two_triangles() {
    let points = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let triangles = assert_ok!(triangulate(&points));
    assert_eq!(triangles.len(), 2);
    for triangle in &triangles {
      for v in triangle.vertices() {
        assert!(points.contains(&v));
      }
    }
  }

  #[test]
  fn duplicate_points_are_ignored() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
    let triangles = assert_ok!(triangulate(&points));
    assert_eq!(triangles.len(), 1);
  }

  #[test]
  fn no_super_triangle_vertices_in_result() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (5.0, 3.0), (2.0, 2.0)]);
    let st = Triangle::super_triangle(&points).unwrap();
    let triangles = assert_ok!(triangulate(&points));
    assert!(!triangles.is_empty());
    for triangle in &triangles {
      assert!(!triangle.shares_vertex_with(&st));
    }
  }

  // A point is strictly inside a circumcircle when it beats the radius by
  // more than the circumcenter's own rounding slack.
  fn strictly_inside(triangle: &Triangle, p: &Point) -> bool {
    match triangle.circumcircle() {
      Some(circle) => {
        circle.center.distance_to(p) < circle.radius * (1.0 - 1e-9) - 1e-9
      }
      None => false,
    }
  }

  proptest! {
    #[test]
    fn delaunay_property(points in distinct_lattice_vec(24)) {
      if let Ok(triangles) = triangulate(&points) {
        for triangle in &triangles {
          let vs = triangle.vertices();
          for p in &points {
            if vs.contains(p) {
              continue;
            }
            prop_assert!(
              !strictly_inside(triangle, p),
              "{:?} strictly inside circumcircle of {:?}", p, triangle
            );
          }
        }
      }
    }

    #[test]
    fn every_point_becomes_a_vertex(points in distinct_lattice_vec(24)) {
      prop_assume!(points.len() >= 3);
      let triangles = match triangulate(&points) {
        Ok(ts) if !ts.is_empty() => ts,
        _ => return Ok(()), // colinear input
      };
      let vertices: HashSet<Point> = triangles
        .iter()
        .flat_map(|t| t.vertices())
        .collect();
      for p in &points {
        prop_assert!(vertices.contains(p));
      }
    }

    #[test]
    fn triangle_vertices_come_from_input(points in point_vec(24)) {
      if let Ok(triangles) = triangulate(&points) {
        for triangle in &triangles {
          for v in triangle.vertices() {
            prop_assert!(points.contains(&v));
          }
        }
      }
    }
  }
}
