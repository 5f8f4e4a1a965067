use crate::math::Matrix4;

/// Model/view/projection block uploaded by a rendering backend.
///
/// Matrices are column-major f32, the layout shader uniforms expect.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

// Three mat4x4<f32> blocks
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 192);

impl CameraUniform {
    pub fn new(model: &Matrix4, view: &Matrix4, projection: &Matrix4) -> Self {
        Self {
            model: model.to_cols_array_2d_f32(),
            view: view.to_cols_array_2d_f32(),
            projection: projection.to_cols_array_2d_f32(),
        }
    }

    /// Uniforms used when no camera is attached.
    pub fn identity() -> Self {
        let identity = Matrix4::identity();
        Self::new(&identity, &identity, &identity)
    }

    pub fn with_model(&self, model: &Matrix4) -> Self {
        Self {
            model: model.to_cols_array_2d_f32(),
            ..*self
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::identity()
    }
}
