use super::Point;

/// A free 2D vector, typically the difference of two [`Point`]s.
///
/// Unlike `Point`, components are plain `f64`: vectors are transient values
/// and never live in hashed containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(pub [f64; 2]);

impl Vector {
  /// 2D cross product `self.x * rhs.y - self.y * rhs.x`.
  pub fn cross(&self, rhs: &Vector) -> f64 {
    self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.0[0] * self.0[0] + self.0[1] * self.0[1]
  }

  pub fn magnitude(&self) -> f64 {
    self.squared_magnitude().sqrt()
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.to_array())
  }
}
