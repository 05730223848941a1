pub mod convex_hull;
pub mod triangulation;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;

#[doc(inline)]
pub use triangulation::bowyer_watson::triangulate;
