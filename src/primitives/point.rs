use super::vertex::{Vertex, VertexLayout, Vertices};
use crate::math::Vector3;
use crate::traits::{Drawable, Renderer};
use crate::types::CameraUniform;

pub const DEFAULT_POINT_SIZE: f32 = 10.0;

/// Points drawn with a per-vertex color and size.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    vertices: Vertices,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, position: Vector3, color: Vector3, size: f32) {
        self.vertices.add(Vertex {
            position,
            color,
            point_size: size,
            ..Vertex::default()
        });
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.get(VertexLayout::PositionColorSize)
    }
}

impl Drawable for PointCloud {
    fn draw(&self, renderer: &mut dyn Renderer, uniforms: &CameraUniform) {
        if self.is_empty() {
            return;
        }
        renderer.draw_points(&self.vertices(), uniforms);
    }

    fn update(&mut self, _dt: f64) {}

    fn log(&self) -> String {
        let mut log = format!("PointCloud: {} points\n", self.len());
        for vertex in self.vertices.iter() {
            log += &format!(
                " - Coordinate: {}, color: {}, size: {:.1}\n",
                vertex.position, vertex.color, vertex.point_size
            );
        }
        log
    }
}

/// Turns a press/release of the drawing button into a new point.
///
/// The point lands where the cursor was when the button was pressed, in NDC
/// coordinates on the z = 0 plane.
#[derive(Debug, Clone)]
pub struct PointCollector {
    cloud: PointCloud,
    pending: Option<(f64, f64)>,
    color: Vector3,
    size: f32,
}

impl PointCollector {
    pub fn new(color: Vector3, size: f32) -> Self {
        Self {
            cloud: PointCloud::new(),
            pending: None,
            color,
            size,
        }
    }

    pub fn press(&mut self, x: f64, y: f64) {
        self.pending = Some((x, y));
    }

    /// Returns true when a point was added
    pub fn release(&mut self) -> bool {
        match self.pending.take() {
            Some((x, y)) => {
                self.cloud.add_point(Vector3::new(x, y, 0.0), self.color, self.size);
                true
            }
            None => false,
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

impl Default for PointCollector {
    fn default() -> Self {
        Self::new(Vector3::new(1.0, 1.0, 1.0), DEFAULT_POINT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_without_press_adds_nothing() {
        let mut collector = PointCollector::default();
        assert!(!collector.release());
        assert!(collector.cloud().is_empty());
    }

    #[test]
    fn test_press_release_adds_white_point() {
        let mut collector = PointCollector::default();
        collector.press(0.5, -0.25);
        assert!(collector.release());
        assert!(!collector.release());

        assert_eq!(
            collector.cloud().vertices(),
            vec![0.5, -0.25, 0.0, 1.0, 1.0, 1.0, DEFAULT_POINT_SIZE]
        );
    }

    #[test]
    fn test_log_counts_points() {
        let mut cloud = PointCloud::new();
        cloud.add_point(Vector3::ZERO, Vector3::X, 3.0);
        assert!(cloud.log().starts_with("PointCloud: 1 points\n"));
    }
}
