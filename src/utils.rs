use num_traits::Float;

/// Linear interpolation between `a` and `b`. `t` outside `[0, 1]`
/// extrapolates.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
  a + (b - a) * t
}

/// Restrict `value` to the closed interval `[lo, hi]`.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
  if value < lo {
    lo
  } else if value > hi {
    hi
  } else {
    value
  }
}
