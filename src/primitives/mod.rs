//! Vertex assembly and the simple shapes drawn by the demo scenes.

mod cuboid;
mod point;
mod rectangle;
mod triangle;
mod vertex;

pub use cuboid::{Cuboid, DrawMode};
pub use point::{PointCloud, PointCollector, DEFAULT_POINT_SIZE};
pub use rectangle::{Rectangle, MAX_PRECISION};
pub use triangle::{triangle_grid, Triangle};
pub use vertex::{Vertex, VertexBuffer, VertexLayout, Vertices};
