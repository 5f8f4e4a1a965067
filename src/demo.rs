//! Scene builders and scripted input for running the playground without a
//! window.
//!
//! ```
//! use opengl_playground::app::Application;
//! use opengl_playground::config::Controls;
//! use opengl_playground::demo::*;
//!
//! let mut app = Application::new(Controls::default(), 800, 800);
//! add_mesh_deformer(&mut app);
//! let mut renderer = CountingRenderer::default();
//! app.draw(&mut renderer);
//! assert_eq!(renderer.triangle_calls, 2 * 11 * 11);
//! ```

use crate::app::{Application, POINT_BUTTON};
use crate::cli::Scenario;
use crate::config::{AppConfig, CameraKind};
use crate::core::{FrameInfo, InputEvent};
use crate::math::Vector3;
use crate::primitives::{triangle_grid, Cuboid, DrawMode, PointCollector, Rectangle, VertexLayout};
use crate::traits::{Button, Renderer};
use crate::types::CameraUniform;

// ============================================================================
// Scene Builders
// ============================================================================

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;
pub const GRID_LENGTH: f64 = 10.0;

/// Triangle grid slowly drifting along +Z
pub fn add_mesh_deformer(app: &mut Application) {
    let front = Vector3::new(0.0, 0.0, 1.0);
    let back = Vector3::new(0.0, 0.5, 1.0);
    for mut triangle in triangle_grid(GRID_ROWS, GRID_COLS, GRID_LENGTH, front, back) {
        triangle.set_direction(Vector3::Z);
        triangle.set_speed(0.001);
        app.add_item(Box::new(triangle));
    }
}

/// Floor and wall rectangles, the floor subdivided
pub fn add_shapes(app: &mut Application) {
    let mut floor = Rectangle::new(
        [
            Vector3::new(-5.0, 0.0, -5.0),
            Vector3::new(-5.0, 0.0, 5.0),
            Vector3::new(5.0, 0.0, 5.0),
            Vector3::new(5.0, 0.0, -5.0),
        ],
        [Vector3::new(0.3, 0.3, 0.3); 4],
    );
    floor.set_precision(4);
    app.add_item(Box::new(floor));

    let mut wall = Rectangle::new(
        [
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(-1.0, 2.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        ],
        [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 1.0, 0.0),
        ],
    );
    wall.set_direction(Vector3::Y);
    wall.set_speed(0.0005);
    app.add_item(Box::new(wall));

    let base = Rectangle::new(
        [
            Vector3::new(2.0, 0.0, 2.0),
            Vector3::new(3.0, 0.0, 2.0),
            Vector3::new(3.0, 1.0, 2.0),
            Vector3::new(2.0, 1.0, 2.0),
        ],
        [Vector3::new(0.8, 0.6, 0.2); 4],
    );
    let mut cube = Cuboid::new(&base, 1.0);
    cube.set_draw_mode(DrawMode::Light);
    app.add_item(Box::new(cube));
}

// ============================================================================
// Renderer
// ============================================================================

/// Renderer that only counts what it is asked to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountingRenderer {
    pub triangle_calls: usize,
    pub point_calls: usize,
    pub triangle_vertices: usize,
    pub mesh_calls: usize,
    pub mesh_vertices: usize,
    pub points: usize,
    pub last_uniforms: Option<CameraUniform>,
}

impl CountingRenderer {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Renderer for CountingRenderer {
    fn draw_triangles(&mut self, vertices: &[f32], uniforms: &CameraUniform) {
        self.triangle_calls += 1;
        self.triangle_vertices += vertices.len() / 6;
        self.last_uniforms = Some(*uniforms);
    }

    fn draw_points(&mut self, vertices: &[f32], uniforms: &CameraUniform) {
        self.point_calls += 1;
        self.points += vertices.len() / 7;
        self.last_uniforms = Some(*uniforms);
    }

    fn draw_mesh(&mut self, vertices: &[f32], layout: VertexLayout, uniforms: &CameraUniform) {
        self.mesh_calls += 1;
        self.mesh_vertices += vertices.len() / layout.stride();
        self.last_uniforms = Some(*uniforms);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

impl Scenario {
    /// Adjust a loaded config to what the scenario needs
    pub fn configure(self, config: &mut AppConfig) {
        if self == Scenario::Orbit && config.camera.kind != CameraKind::Target {
            config.camera.kind = CameraKind::Target;
            config.camera.position = Vector3::new(0.0, 3.0, 8.0);
            config.camera.target = Vector3::ZERO;
        }
    }

    /// Populate the application; the points scenario draws without a camera
    pub fn build(self, config: &AppConfig) -> anyhow::Result<Application> {
        let window = config.window;
        let mut app = Application::new(config.controls, window.width, window.height);
        match self {
            Scenario::Walk => {
                app.set_camera(config.build_camera()?);
                add_mesh_deformer(&mut app);
            }
            Scenario::Orbit => {
                app.set_camera(config.build_camera()?);
                add_shapes(&mut app);
            }
            Scenario::Points => app.enable_point_drawing(PointCollector::default()),
        }
        Ok(app)
    }

    /// Input events for one frame out of `total`
    pub fn input(self, frame: &FrameInfo, total: u64, window: (u32, u32)) -> Vec<InputEvent> {
        let (width, height) = (window.0 as f64, window.1 as f64);
        let half = total / 2;
        let press = |button, pressed| InputEvent::Button { button, pressed };

        match self {
            Scenario::Walk => match frame.number {
                0 => vec![
                    InputEvent::CursorMoved { x: width / 2.0, y: height / 2.0 },
                    press(Button::KeyW, true),
                ],
                n if n == half => vec![
                    press(Button::KeyW, false),
                    press(Button::KeyD, true),
                    // right edge band turns the camera
                    InputEvent::CursorMoved { x: width * 0.98, y: height / 2.0 },
                ],
                _ => Vec::new(),
            },
            Scenario::Orbit => match frame.number {
                0 => vec![
                    InputEvent::CursorMoved { x: width * 0.98, y: height * 0.02 },
                    press(Button::KeyS, true),
                ],
                n if n == half => vec![
                    press(Button::KeyS, false),
                    InputEvent::CursorMoved { x: width / 2.0, y: height / 2.0 },
                    press(Button::KeyA, true),
                ],
                _ => Vec::new(),
            },
            Scenario::Points => {
                let n = frame.number;
                match n % 10 {
                    0 => {
                        let t = n as f64 / total.max(1) as f64;
                        vec![
                            InputEvent::CursorMoved { x: width * t, y: height * (1.0 - t) },
                            press(POINT_BUTTON, true),
                        ]
                    }
                    1 => vec![press(POINT_BUTTON, false)],
                    _ => Vec::new(),
                }
            }
        }
    }
}

/// Drive `app` through `frames`, drawing every frame into `renderer`
pub fn run_scenario(
    app: &mut Application,
    scenario: Scenario,
    frames: impl Iterator<Item = FrameInfo>,
    total: u64,
    renderer: &mut dyn Renderer,
) -> u64 {
    let mut count = 0;
    for frame in frames {
        for event in scenario.input(&frame, total, app.window_size()) {
            app.handle_input(event);
        }
        app.update(frame.delta);
        app.draw(renderer);
        count += 1;
    }
    count
}
