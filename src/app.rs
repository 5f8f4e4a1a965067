//! Per-frame application state: camera, input, drawables.

use log::{debug, info, warn};

use crate::camera::Projection;
use crate::config::Controls;
use crate::core::{InputEvent, KeyState, Throttle};
use crate::math::{MathError, Matrix4};
use crate::primitives::PointCollector;
use crate::traits::{Button, Camera, Controller, Drawable, Renderer};
use crate::types::CameraUniform;

/// Button that dumps `Application::log` when pressed
pub const DEBUG_BUTTON: Button = Button::KeyH;
/// Button that places a point when point drawing is enabled
pub const POINT_BUTTON: Button = Button::MouseMiddle;

/// Window pixel coordinates (origin top-left, y down) to NDC (origin center,
/// y up). The window size must be non-zero.
pub fn mouse_coordinates(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let half_width = width / 2.0;
    let half_height = height / 2.0;
    ((x - half_width) / half_width, (half_height - y) / half_height)
}

/// -1, 0 or +1 depending on which edge band `value` falls in
fn edge_direction(value: f64, band: f64) -> f64 {
    let low = value > -1.0 && value < -1.0 + band;
    let high = value < 1.0 && value > 1.0 - band;
    match (low, high) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

pub struct Application {
    camera: Option<Box<dyn Camera>>,
    keys: KeyState,
    cursor: (f64, f64),
    window_size: (u32, u32),
    items: Vec<Box<dyn Drawable>>,
    controls: Controls,
    throttle: Throttle,
    points: Option<PointCollector>,
}

impl Application {
    pub fn new(controls: Controls, width: u32, height: u32) -> Self {
        Self {
            camera: None,
            keys: KeyState::new(),
            cursor: (width as f64 / 2.0, height as f64 / 2.0),
            window_size: (width, height),
            items: Vec::new(),
            controls,
            throttle: Throttle::new(controls.update_interval),
            points: None,
        }
    }

    pub fn set_camera(&mut self, camera: Box<dyn Camera>) {
        self.camera = Some(camera);
    }

    pub fn camera(&self) -> Option<&dyn Camera> {
        self.camera.as_deref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut (dyn Camera + 'static)> {
        self.camera.as_deref_mut()
    }

    pub fn add_item(&mut self, item: Box<dyn Drawable>) {
        self.items.push(item);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Collect points from presses of `POINT_BUTTON`
    pub fn enable_point_drawing(&mut self, collector: PointCollector) {
        self.points = Some(collector);
    }

    pub fn points(&self) -> Option<&PointCollector> {
        self.points.as_ref()
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Button { button, pressed } => self.set_key_state(button, pressed),
            InputEvent::CursorMoved { x, y } => self.set_cursor_position(x, y),
            InputEvent::Resized { width, height } => self.resize(width, height),
        }
    }

    pub fn set_key_state(&mut self, button: Button, pressed: bool) {
        if !self.keys.set(button, pressed) {
            return;
        }
        if button == DEBUG_BUTTON && pressed {
            info!("{}", self.log());
        }
        if button == POINT_BUTTON {
            let (x, y) = self.cursor_ndc();
            if let Some(points) = self.points.as_mut() {
                if pressed {
                    points.press(x, y);
                } else if points.release() {
                    debug!("point added at ({:.3}, {:.3})", x, y);
                }
            }
        }
    }

    pub fn key_state(&self, button: Button) -> bool {
        self.keys.is_down(button)
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Cursor position in window pixels
    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    pub fn cursor_ndc(&self) -> (f64, f64) {
        let (width, height) = self.window_size;
        if width == 0 || height == 0 {
            return (0.0, 0.0);
        }
        mouse_coordinates(self.cursor.0, self.cursor.1, width as f64, height as f64)
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Track the new window size and follow it with the projection aspect
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        if width == 0 || height == 0 {
            return;
        }
        if let Some(camera) = self.camera.as_mut() {
            let projection = Projection {
                aspect: width as f64 / height as f64,
                ..camera.projection()
            };
            if let Err(err) = camera.setup_projection(projection) {
                warn!("projection not updated after resize: {}", err);
            }
        }
    }

    /// Advance drawables by `dt` milliseconds and apply the camera controls
    pub fn update(&mut self, dt: f64) {
        for item in &mut self.items {
            item.update(dt);
        }

        let Some(elapsed) = self.throttle.tick(dt) else {
            return;
        };
        if let Err(err) = self.update_camera(elapsed) {
            warn!("camera update rejected: {}", err);
        }
    }

    fn update_camera(&mut self, elapsed: f64) -> Result<(), MathError> {
        let (x, y) = self.cursor_ndc();
        let Some(camera) = self.camera.as_mut() else {
            return Ok(());
        };
        let step = self.controls.move_speed * elapsed;

        let forward = self.keys.axis(Button::KeyW, Button::KeyS);
        if forward != 0.0 {
            camera.walk(forward * step)?;
        }
        let horizontal = self.keys.axis(Button::KeyD, Button::KeyA);
        if horizontal != 0.0 {
            camera.strafe(horizontal * step)?;
        }
        let vertical = self.keys.axis(Button::KeyE, Button::KeyQ);
        if vertical != 0.0 {
            camera.lift(vertical * step)?;
        }

        let band = self.controls.edge_band;
        let d_yaw = edge_direction(x, band) * self.controls.direction_speed;
        let d_pitch = edge_direction(y, band) * self.controls.direction_speed;
        if d_yaw != 0.0 || d_pitch != 0.0 {
            camera.update_direction(d_yaw, d_pitch)?;
        }
        Ok(())
    }

    /// Uniforms of the current camera, identity matrices without one
    pub fn uniforms(&self) -> CameraUniform {
        match &self.camera {
            Some(camera) => camera.uniform(&Matrix4::identity()),
            None => CameraUniform::identity(),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let uniforms = self.uniforms();
        for item in &self.items {
            item.draw(renderer, &uniforms);
        }
        if let Some(points) = &self.points {
            points.cloud().draw(renderer, &uniforms);
        }
    }

    pub fn log(&self) -> String {
        let mut log = String::from("Application:\n");
        if let Some(camera) = &self.camera {
            log += &format!(" - camera : {}\n", camera.log());
        }
        log += " - items :\n";
        for item in &self.items {
            log += &item.log();
        }
        if let Some(points) = &self.points {
            log += &points.cloud().log();
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_coordinates() {
        assert_eq!(mouse_coordinates(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
        assert_eq!(mouse_coordinates(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(mouse_coordinates(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(mouse_coordinates(600.0, 150.0, 800.0, 600.0), (0.5, 0.5));
    }

    #[test]
    fn test_edge_direction_bands() {
        assert_eq!(edge_direction(0.95, 0.1), 1.0);
        assert_eq!(edge_direction(-0.95, 0.1), -1.0);
        assert_eq!(edge_direction(0.5, 0.1), 0.0);
        // exactly on the border is outside the band
        assert_eq!(edge_direction(1.0, 0.1), 0.0);
        assert_eq!(edge_direction(0.9, 0.1), 0.0);
    }

    #[test]
    fn test_uniforms_without_camera_are_identity() {
        let app = Application::new(Controls::default(), 800, 800);
        assert_eq!(app.uniforms(), CameraUniform::identity());
    }

    #[test]
    fn test_key_state_tracks_presses() {
        let mut app = Application::new(Controls::default(), 800, 800);
        app.handle_input(InputEvent::Button { button: Button::KeyW, pressed: true });
        assert!(app.key_state(Button::KeyW));
        app.handle_input(InputEvent::Button { button: Button::KeyW, pressed: false });
        assert!(!app.key_state(Button::KeyW));
    }
}
