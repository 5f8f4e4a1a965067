use crate::primitives::VertexLayout;
use crate::types::CameraUniform;

/// Backend that turns assembled vertex data into draw calls.
pub trait Renderer {
    /// Draw interleaved position/color vertices as a triangle list
    fn draw_triangles(&mut self, vertices: &[f32], uniforms: &CameraUniform);

    /// Draw interleaved position/color/size vertices as points
    fn draw_points(&mut self, vertices: &[f32], uniforms: &CameraUniform);

    /// Draw a triangle list interleaved as `layout`, for lit or textured
    /// shading
    fn draw_mesh(&mut self, vertices: &[f32], layout: VertexLayout, uniforms: &CameraUniform);
}
