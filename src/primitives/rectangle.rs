use super::vertex::{Vertex, VertexBuffer, Vertices};
use crate::math::{MathError, Vector3};
use crate::traits::{Drawable, Renderer};
use crate::types::CameraUniform;

const CORNER_NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// Upper bound for [`Rectangle::set_precision`]
pub const MAX_PRECISION: usize = 256;

/// Corner order of the two triangles `a b c` and `a c d`
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Quad `a b c d` that can drift along a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    points: [Vector3; 4],
    colors: [Vector3; 4],
    precision: usize,
    direction: Vector3,
    speed: f64,
}

impl Rectangle {
    pub fn new(points: [Vector3; 4], colors: [Vector3; 4]) -> Self {
        Self {
            points,
            colors,
            precision: 1,
            direction: Vector3::ZERO,
            speed: 0.0,
        }
    }

    pub fn points(&self) -> &[Vector3; 4] {
        &self.points
    }

    pub fn colors(&self) -> &[Vector3; 4] {
        &self.colors
    }

    pub fn set_color(&mut self, color: Vector3) {
        self.colors = [color; 4];
    }

    /// Recolor one corner; returns false when `index` is not a corner
    pub fn set_index_color(&mut self, index: usize, color: Vector3) -> bool {
        match self.colors.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    pub fn set_direction(&mut self, direction: Vector3) {
        self.direction = direction;
    }

    /// Speed in units per millisecond
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Split each edge into `precision` steps, clamped to `1..=MAX_PRECISION`
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.clamp(1, MAX_PRECISION);
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Unit normal of the plane `a b d`, following the right-hand rule
    pub fn normal(&self) -> Result<Vector3, MathError> {
        let [a, b, _, d] = self.points;
        (b - a).cross(d - a).normalize()
    }

    /// Subdivided cells as `(corner grid indices, corners)`, `precision^2`
    /// of them
    fn cells(&self) -> impl Iterator<Item = ([(usize, usize); 4], [Vector3; 4])> + '_ {
        let n = self.precision;
        let origin = self.points[0];
        let vertical = (self.points[1] - origin) * (1.0 / n as f64);
        let horizontal = (self.points[3] - origin) * (1.0 / n as f64);
        let corner = move |(v, h): (usize, usize)| origin + vertical * v as f64 + horizontal * h as f64;

        (0..n).flat_map(move |h| {
            (0..n).map(move |v| {
                let grid = [(v, h), (v, h + 1), (v + 1, h + 1), (v + 1, h)];
                (grid, grid.map(corner))
            })
        })
    }

    /// Append the triangulated cells as position/color vertices
    pub fn append_to(&self, buffer: &mut VertexBuffer) {
        for (_, cell) in self.cells() {
            buffer.append_square(&cell, &self.colors);
        }
    }

    /// Triangulated quad grid, `6 * precision^2` position/color vertices
    pub fn vertices(&self) -> VertexBuffer {
        let n = self.precision;
        let mut buffer = VertexBuffer::with_capacity(36 * n * n);
        self.append_to(&mut buffer);
        buffer
    }

    /// Triangulated quad grid carrying `normal` and texture coordinates
    /// spanning `[0, 1]` over the whole rectangle
    pub fn mesh(&self, normal: Vector3) -> Vertices {
        let n = self.precision as f64;
        self.cells()
            .flat_map(|(grid, cell)| {
                QUAD_TRIANGLES.map(|index| {
                    let (v, h) = grid[index];
                    Vertex {
                        position: cell[index],
                        normal,
                        tex_coords: [h as f64 / n, v as f64 / n],
                        color: self.colors[index],
                        ..Vertex::default()
                    }
                })
            })
            .collect()
    }
}

impl Drawable for Rectangle {
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
        let mut log = String::from("Rectangle:\n");
        for ((name, point), color) in CORNER_NAMES.iter().zip(&self.points).zip(&self.colors) {
            log += &format!(" - {} : Coordinate: {}, color: {}\n", name, point, color);
        }
        log += &format!(
            " - Movement : Direction: {}, speed: {:.6}\n",
            self.direction, self.speed
        );
        log
    }
}
