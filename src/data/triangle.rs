use std::hash::{Hash, Hasher};

use super::{Circle, Edge, Point};

/// A triangle given by three vertices.
///
/// Equality and hashing are vertex-order independent: two triangles over the
/// same three points are equal no matter how the vertices are listed. Edge
/// extraction stays order-sensitive (`v0`–`v1`, `v1`–`v2`, `v2`–`v0`).
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
  pub v0: Point,
  pub v1: Point,
  pub v2: Point,
}

impl Triangle {
  pub fn new(v0: Point, v1: Point, v2: Point) -> Triangle {
    Triangle { v0, v1, v2 }
  }

  pub fn vertices(&self) -> [Point; 3] {
    [self.v0, self.v1, self.v2]
  }

  fn sorted_vertices(&self) -> [Point; 3] {
    let mut vs = self.vertices();
    vs.sort_unstable();
    vs
  }

  pub fn edges(&self) -> [Edge; 3] {
    [
      Edge::new(self.v0, self.v1),
      Edge::new(self.v1, self.v2),
      Edge::new(self.v2, self.v0),
    ]
  }

  /// The circumcircle, computed on demand. `None` when the vertices are
  /// colinear and the triangle is degenerate.
  pub fn circumcircle(&self) -> Option<Circle> {
    Circle::circumscribing(&self.v0, &self.v1, &self.v2)
  }

  /// Arithmetic centroid of the three vertices.
  pub fn centroid(&self) -> Point {
    Point::new(
      (self.v0.x_coord() + self.v1.x_coord() + self.v2.x_coord()) / 3.0,
      (self.v0.y_coord() + self.v1.y_coord() + self.v2.y_coord()) / 3.0,
    )
  }

  /// Boundary-inclusive circumcircle containment.
  ///
  /// A degenerate triangle has no circumcircle and contains nothing.
  pub fn in_circumcircle(&self, p: &Point) -> bool {
    self.circumcircle().map_or(false, |c| c.contains(p))
  }

  /// True iff the triangles have a vertex in common, by point equality.
  pub fn shares_vertex_with(&self, other: &Triangle) -> bool {
    let vs = other.vertices();
    self.vertices().iter().any(|v| vs.contains(v))
  }

  /// An oversized triangle strictly containing the bounding box of `points`,
  /// with a margin of the box's width/height on each side (tripled on two
  /// corners) so no input point lands on its boundary. Seeds Bowyer–Watson;
  /// `None` for an empty input.
  pub fn super_triangle(points: &[Point]) -> Option<Triangle> {
    let first = points.first()?;
    let mut min_x = first.x_coord();
    let mut min_y = first.y_coord();
    let mut max_x = min_x;
    let mut max_y = min_y;

    for p in points {
      min_x = min_x.min(p.x_coord());
      min_y = min_y.min(p.y_coord());
      max_x = max_x.max(p.x_coord());
      max_y = max_y.max(p.y_coord());
    }

    let dx = max_x - min_x;
    let dy = max_y - min_y;

    Some(Triangle::new(
      Point::new(min_x - dx, min_y - dy * 3.0),
      Point::new(min_x - dx, max_y + dy),
      Point::new(max_x + dx * 3.0, max_y + dy),
    ))
  }
}

impl PartialEq for Triangle {
  fn eq(&self, other: &Triangle) -> bool {
    self.sorted_vertices() == other.sorted_vertices()
  }
}

impl Eq for Triangle {}

impl Hash for Triangle {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.sorted_vertices().hash(state)
  }
}
