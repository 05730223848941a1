//! 2D computational geometry over exact-equality floating-point points.
//!
//! The two engines live in [`algorithms`]: incremental Delaunay triangulation
//! ([`algorithms::triangulate`], Bowyer–Watson) and convex hull construction
//! ([`algorithms::convex_hull()`], Andrew's monotone chain). The value types
//! they operate on live in [`data`].
//!
//! All operations are pure functions over value types: no shared mutable
//! state, no I/O. Callers may invoke them concurrently on independent inputs
//! without synchronization.
#![deny(clippy::cast_lossless)]

pub mod algorithms;
pub mod data;
mod orientation;
mod utils;

pub use orientation::Orientation;
pub use utils::{clamp, lerp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three distinct points were supplied.
  InsufficientPoints,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
    }
  }
}

#[cfg(test)]
pub mod testing;
