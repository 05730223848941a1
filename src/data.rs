mod circle;
mod edge;
pub(crate) mod point;
mod triangle;
mod vector;

pub use circle::Circle;
pub use edge::Edge;
pub use point::{cross_product, distance, Point};
pub use triangle::Triangle;
pub use vector::Vector;
