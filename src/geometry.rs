mod centroid;
mod rect;

pub use centroid::{centroids, distance, intersects};
pub use rect::Rect;
