use std::hash::{Hash, Hasher};

use super::Point;

/// An undirected edge between two points.
///
/// Equality and hashing ignore endpoint order: `Edge::new(a, b)` and
/// `Edge::new(b, a)` are the same edge. Used transiently during Bowyer–Watson
/// insertion to detect edges shared between adjacent cavity triangles.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
  pub src: Point,
  pub dst: Point,
}

impl Edge {
  pub fn new(src: Point, dst: Point) -> Edge {
    Edge { src, dst }
  }

  fn ordered(&self) -> (Point, Point) {
    if self.src <= self.dst {
      (self.src, self.dst)
    } else {
      (self.dst, self.src)
    }
  }
}

impl PartialEq for Edge {
  fn eq(&self, other: &Edge) -> bool {
    self.ordered() == other.ordered()
  }
}

impl Eq for Edge {}

impl Hash for Edge {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.ordered().hash(state)
  }
}
