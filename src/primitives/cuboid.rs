use super::rectangle::Rectangle;
use super::vertex::{VertexBuffer, VertexLayout, Vertices};
use crate::math::Vector3;
use crate::traits::{Drawable, Renderer};
use crate::types::CameraUniform;

/// Vertex data a cuboid submits when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Position/color triangles
    #[default]
    Color,
    /// Position/normal triangles for lit shading
    Light,
    /// Position/normal/tex coord triangles
    Texture,
}

/// Box built from a bottom rectangle extruded along -Z.
///
/// Side 0 is the bottom, side 1 the top, sides 2..6 the walls starting at
/// edge `a b` of the bottom. Every side starts with the bottom's colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    sides: [Rectangle; 6],
    direction: Vector3,
    speed: f64,
    draw_mode: DrawMode,
}

impl Cuboid {
    pub fn new(bottom: &Rectangle, height: f64) -> Self {
        let lower = *bottom.points();
        let upper = lower.map(|point| point + Vector3::new(0.0, 0.0, -height));
        let colors = *bottom.colors();

        let wall = |i: usize| {
            let j = (i + 1) % 4;
            let mut side = Rectangle::new([lower[i], lower[j], upper[j], upper[i]], colors);
            side.set_precision(bottom.precision());
            side
        };
        let mut top = Rectangle::new(upper, colors);
        top.set_precision(bottom.precision());

        Self {
            sides: [bottom.clone(), top, wall(0), wall(1), wall(2), wall(3)],
            direction: Vector3::ZERO,
            speed: 0.0,
            draw_mode: DrawMode::Color,
        }
    }

    pub fn sides(&self) -> &[Rectangle; 6] {
        &self.sides
    }

    pub fn set_color(&mut self, color: Vector3) {
        for side in &mut self.sides {
            side.set_color(color);
        }
    }

    /// Recolor corner `index` of every side; false when it is not a corner
    pub fn set_index_color(&mut self, index: usize, color: Vector3) -> bool {
        self.sides
            .iter_mut()
            .fold(true, |ok, side| side.set_index_color(index, color) && ok)
    }

    /// Recolor one whole side; false when `side` is not below 6
    pub fn set_side_color(&mut self, side: usize, color: Vector3) -> bool {
        match self.sides.get_mut(side) {
            Some(rectangle) => {
                rectangle.set_color(color);
                true
            }
            None => false,
        }
    }

    pub fn set_direction(&mut self, direction: Vector3) {
        self.direction = direction;
        for side in &mut self.sides {
            side.set_direction(direction);
        }
    }

    /// Set one component (0 = x, 1 = y, 2 = z) of the direction
    pub fn set_index_direction(&mut self, index: usize, value: f64) -> bool {
        let Vector3 { x, y, z } = self.direction;
        let direction = match index {
            0 => Vector3::new(value, y, z),
            1 => Vector3::new(x, value, z),
            2 => Vector3::new(x, y, value),
            _ => return false,
        };
        self.set_direction(direction);
        true
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Speed in units per millisecond
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        for side in &mut self.sides {
            side.set_speed(speed);
        }
    }

    pub fn set_precision(&mut self, precision: usize) {
        for side in &mut self.sides {
            side.set_precision(precision);
        }
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// Outward unit normal of every side, zero for a collapsed side
    pub fn side_normals(&self) -> [Vector3; 6] {
        let center = self.sides[..2]
            .iter()
            .flat_map(|side| side.points().iter())
            .fold(Vector3::ZERO, |sum, point| sum + *point)
            * (1.0 / 8.0);

        std::array::from_fn(|i| {
            let side = &self.sides[i];
            let Ok(normal) = side.normal() else {
                return Vector3::ZERO;
            };
            let face = side.points().iter().fold(Vector3::ZERO, |sum, point| sum + *point) * 0.25;
            if normal.dot(face - center) < 0.0 {
                -normal
            } else {
                normal
            }
        })
    }

    /// All sides as position/color triangles
    pub fn vertices(&self) -> VertexBuffer {
        let mut buffer = VertexBuffer::new();
        for side in &self.sides {
            side.append_to(&mut buffer);
        }
        buffer
    }

    /// All sides with their outward normals and texture coordinates
    pub fn mesh(&self) -> Vertices {
        let mut mesh = Vertices::new();
        for (side, normal) in self.sides.iter().zip(self.side_normals()) {
            for vertex in side.mesh(normal).iter() {
                mesh.add(*vertex);
            }
        }
        mesh
    }
}

impl Drawable for Cuboid {
    fn draw(&self, renderer: &mut dyn Renderer, uniforms: &CameraUniform) {
        match self.draw_mode {
            DrawMode::Color => renderer.draw_triangles(self.vertices().as_slice(), uniforms),
            DrawMode::Light => {
                let layout = VertexLayout::PositionNormal;
                renderer.draw_mesh(self.mesh().buffer(layout).as_slice(), layout, uniforms);
            }
            DrawMode::Texture => {
                let layout = VertexLayout::PositionNormalTexCoord;
                renderer.draw_mesh(self.mesh().buffer(layout).as_slice(), layout, uniforms);
            }
        }
    }

    fn update(&mut self, dt: f64) {
        for side in &mut self.sides {
            side.update(dt);
        }
    }

    fn log(&self) -> String {
        let mut log = String::from("Cuboid:\n");
        log += &format!(
            " - Movement : Direction: {}, speed: {:.6}\n",
            self.direction, self.speed
        );
        log += &format!(" - DrawMode : {:?}\n", self.draw_mode);
        for side in &self.sides {
            log += &side.log();
        }
        log
    }
}
