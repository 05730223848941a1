use super::point::{cross_product, Point};

/// A circle given by center and radius.
///
/// Circles are derived values (circumcircles, enclosing circles); they are
/// never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub radius: f64,
}

impl Circle {
  pub fn new(center: Point, radius: f64) -> Circle {
    Circle { center, radius }
  }

  /// The circle with the segment `a`–`b` as diameter.
  ///
  /// The radius is the larger of the two center-to-endpoint distances, so
  /// both endpoints are contained even when the midpoint rounds asymmetrically.
  pub fn from_diameter(a: &Point, b: &Point) -> Circle {
    let center = Point::new(
      (a.x_coord() + b.x_coord()) / 2.0,
      (a.y_coord() + b.y_coord()) / 2.0,
    );
    let radius = center.distance_to(a).max(center.distance_to(b));
    Circle { center, radius }
  }

  /// The unique circle through three non-colinear points.
  ///
  /// The circumcenter is solved from the perpendicular-bisector system after
  /// translating the points toward the origin for numerical stability.
  /// Returns `None` when the doubled signed-area determinant is zero, i.e.
  /// the points are colinear and no circumcircle exists.
  pub fn circumscribing(a: &Point, b: &Point, c: &Point) -> Option<Circle> {
    let ox = (a.x_coord().min(b.x_coord()).min(c.x_coord())
      + a.x_coord().max(b.x_coord()).max(c.x_coord()))
      / 2.0;
    let oy = (a.y_coord().min(b.y_coord()).min(c.y_coord())
      + a.y_coord().max(b.y_coord()).max(c.y_coord()))
      / 2.0;

    let ax = a.x_coord() - ox;
    let ay = a.y_coord() - oy;
    let bx = b.x_coord() - ox;
    let by = b.y_coord() - oy;
    let cx = c.x_coord() - ox;
    let cy = c.y_coord() - oy;

    let d = (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)) * 2.0;
    if d == 0.0 {
      return None;
    }

    let x = ox
      + ((ax * ax + ay * ay) * (by - cy)
        + (bx * bx + by * by) * (cy - ay)
        + (cx * cx + cy * cy) * (ay - by))
        / d;
    let y = oy
      + ((ax * ax + ay * ay) * (cx - bx)
        + (bx * bx + by * by) * (ax - cx)
        + (cx * cx + cy * cy) * (bx - ax))
        / d;

    let center = Point::new(x, y);
    let radius = center
      .distance_to(a)
      .max(center.distance_to(b))
      .max(center.distance_to(c));
    Some(Circle { center, radius })
  }

  /// Boundary-inclusive containment test.
  pub fn contains(&self, p: &Point) -> bool {
    self.center.distance_to(p) <= self.radius
  }

  /// Smallest circle enclosing `points`, or `None` for an empty input.
  ///
  /// Incremental construction: points are added one at a time; whenever a
  /// point falls outside the current circle, the circle is recomputed over
  /// the points seen so far with the offender pinned to its boundary. The
  /// anchor selection below is only valid for a point known to lie on the
  /// minimal circle of the set it scans, so every recomputation is confined
  /// to the already-processed prefix. O(n³) worst case; this is an auxiliary
  /// helper, not on the triangulation's hot path.
  pub fn enclosing(points: &[Point]) -> Option<Circle> {
    let mut circle: Option<Circle> = None;
    for (i, p) in points.iter().enumerate() {
      let covered = circle.map_or(false, |c| c.contains(p));
      if !covered {
        circle = Some(Self::enclosing_with(&points[..=i], p));
      }
    }
    circle
  }

  // Smallest circle enclosing `points` with `p` on its boundary.
  fn enclosing_with(points: &[Point], p: &Point) -> Circle {
    let mut circle = Circle::new(*p, 0.0);
    for (j, q) in points.iter().enumerate() {
      if circle.contains(q) {
        continue;
      }
      circle = if circle.radius == 0.0 {
        Circle::from_diameter(p, q)
      } else {
        Self::enclosing_with_anchors(&points[..=j], p, q)
      };
    }
    circle
  }

  // Smallest circle enclosing `points` with both `p` and `q` on its boundary.
  //
  // Candidate circumcircles are split by which side of the p–q line their
  // third point falls on; each side keeps the circumcircle whose center is
  // furthest along that side (the locally maximal circumradius). The smaller
  // of the two survivors wins; with no candidate at all, the p–q diameter
  // circle already encloses everything.
  fn enclosing_with_anchors(points: &[Point], p: &Point, q: &Point) -> Circle {
    let base = Circle::from_diameter(p, q);

    let mut left: Option<Circle> = None;
    let mut right: Option<Circle> = None;

    for r in points {
      if base.contains(r) {
        continue;
      }
      let candidate = match Circle::circumscribing(p, q, r) {
        Some(circle) => circle,
        None => continue,
      };
      let side = cross_product(p, q, r);
      if side > 0.0
        && left.map_or(true, |l| {
          cross_product(p, q, &candidate.center) > cross_product(p, q, &l.center)
        })
      {
        left = Some(candidate);
      } else if side < 0.0
        && right.map_or(true, |rc| {
          cross_product(p, q, &candidate.center) < cross_product(p, q, &rc.center)
        })
      {
        right = Some(candidate);
      }
    }

    match (left, right) {
      (None, None) => base,
      (Some(l), None) => l,
      (None, Some(r)) => r,
      (Some(l), Some(r)) => {
        if l.radius <= r.radius {
          l
        } else {
          r
        }
      }
    }
  }
}
