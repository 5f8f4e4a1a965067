use super::vertex::VertexBuffer;
use crate::math::Vector3;
use crate::traits::{Drawable, Renderer};
use crate::types::CameraUniform;

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    points: [Vector3; 3],
    colors: [Vector3; 3],
    direction: Vector3,
    speed: f64,
}

impl Triangle {
    pub fn new(points: [Vector3; 3], colors: [Vector3; 3]) -> Self {
        Self {
            points,
            colors,
            direction: Vector3::ZERO,
            speed: 0.0,
        }
    }

    pub fn points(&self) -> &[Vector3; 3] {
        &self.points
    }

    pub fn colors(&self) -> &[Vector3; 3] {
        &self.colors
    }

    pub fn set_color(&mut self, color: Vector3) {
        self.colors = [color; 3];
    }

    pub fn set_direction(&mut self, direction: Vector3) {
        self.direction = direction;
    }

    /// Speed in units per millisecond
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn vertices(&self) -> VertexBuffer {
        let mut buffer = VertexBuffer::with_capacity(18);
        buffer.append_triangle(&self.points, &self.colors);
        buffer
    }
}

impl Drawable for Triangle {
    fn draw(&self, renderer: &mut dyn Renderer, uniforms: &CameraUniform) {
        renderer.draw_triangles(self.vertices().as_slice(), uniforms);
    }

    fn update(&mut self, dt: f64) {
        if let Ok(direction) = self.direction.normalize() {
            let motion = direction * (dt * self.speed);
            for point in &mut self.points {
                *point += motion;
            }
        }
    }

    fn log(&self) -> String {
        let mut log = String::from("Triangle:\n");
        let corners = self.points.iter().zip(&self.colors);
        for (name, (point, color)) in ["A", "B", "C"].iter().zip(corners) {
            log += &format!(" - {} : Coordinate: {}, color: {}\n", name, point, color);
        }
        log += &format!(
            " - Movement : Direction: {}, speed: {:.6}\n",
            self.direction, self.speed
        );
        log
    }
}

/// Flat grid of triangles in the z = 0 plane.
///
/// Every cell `(i, j)` for `i` in `0..=rows` and `j` in `0..=cols` has its top
/// right corner at `(j * length, i * length)` and is split along its diagonal
/// into a `front` colored and a `back` colored triangle.
pub fn triangle_grid(
    rows: usize,
    cols: usize,
    length: f64,
    front: Vector3,
    back: Vector3,
) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(2 * (rows + 1) * (cols + 1));
    for i in 0..=rows {
        for j in 0..=cols {
            let x = j as f64 * length;
            let y = i as f64 * length;
            let top = Vector3::new(x, y, 0.0);
            let far = Vector3::new(x - length, y - length, 0.0);

            triangles.push(Triangle::new(
                [top, Vector3::new(x, y - length, 0.0), far],
                [front; 3],
            ));
            triangles.push(Triangle::new(
                [top, far, Vector3::new(x - length, y, 0.0)],
                [back; 3],
            ));
        }
    }
    triangles
}
