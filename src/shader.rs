//! Shader source loading and program assembly over a compiler backend.

use std::fmt;
use std::path::{Path, PathBuf};

/// Pass-through vertex shader with model/view/projection uniforms.
pub const VERTEX_SHADER_MVP: &str = r#"#version 410
layout(location = 0) in vec3 vVertex;
layout(location = 1) in vec3 vColor;
smooth out vec4 vSmoothColor;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(vVertex, 1);
    vSmoothColor = vec4(vColor, 1);
}
"#;

/// Vertex shader for position/color/size point vertices.
pub const VERTEX_SHADER_POINT: &str = r#"#version 410
layout(location = 0) in vec3 vVertex;
layout(location = 1) in vec3 vColor;
layout(location = 2) in float vSize;
smooth out vec4 vSmoothColor;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(vVertex, 1);
    gl_PointSize = vSize;
    vSmoothColor = vec4(vColor, 1);
}
"#;

pub const FRAGMENT_SHADER_BASIC: &str = r#"#version 410
smooth in vec4 vSmoothColor;
layout(location = 0) out vec4 vFragColor;
void main()
{
    vFragColor = vSmoothColor;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Geometry,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertex => "vertex",
            Self::Geometry => "geometry",
            Self::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

/// Errors produced while loading, compiling or linking shaders.
#[derive(Debug)]
pub enum ShaderError {
    /// Source file could not be read.
    FileNotFound { path: PathBuf, source: std::io::Error },
    /// Backend rejected a stage, with its info log.
    CompileError { stage: ShaderStage, log: String },
    /// Backend failed to link the program, with its info log.
    LinkError { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path, source } => {
                write!(f, "cannot read shader file {}: {source}", path.display())
            }
            Self::CompileError { stage, log } => {
                write!(f, "failed to compile {stage} shader: {log}")
            }
            Self::LinkError { log } => write!(f, "failed to link program: {log}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Backend that turns GLSL text into shader and program handles.
pub trait ShaderCompiler {
    fn compile(&mut self, stage: ShaderStage, source: &str) -> Result<u32, ShaderError>;

    fn link(&mut self, shaders: &[u32]) -> Result<u32, ShaderError>;

    /// Release a stage handle once it is linked or no longer needed
    fn delete_shader(&mut self, _shader: u32) {}
}

/// Read a shader source file.
pub fn load_shader_file(path: impl AsRef<Path>) -> Result<String, ShaderError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| ShaderError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub vertex: String,
    pub geometry: Option<String>,
    pub fragment: String,
}

impl ShaderSource {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            geometry: None,
            fragment: fragment.into(),
        }
    }

    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    pub fn from_files(
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        Ok(Self::new(load_shader_file(vertex)?, load_shader_file(fragment)?))
    }

    /// Model/view/projection shaders for position/color triangles
    pub fn model_view_projection() -> Self {
        Self::new(VERTEX_SHADER_MVP, FRAGMENT_SHADER_BASIC)
    }

    /// Shaders for position/color/size points
    pub fn points() -> Self {
        Self::new(VERTEX_SHADER_POINT, FRAGMENT_SHADER_BASIC)
    }

    fn stages(&self) -> impl Iterator<Item = (ShaderStage, &str)> {
        [
            Some((ShaderStage::Vertex, self.vertex.as_str())),
            self.geometry.as_deref().map(|source| (ShaderStage::Geometry, source)),
            Some((ShaderStage::Fragment, self.fragment.as_str())),
        ]
        .into_iter()
        .flatten()
    }
}

/// Linked program handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    id: u32,
}

impl Program {
    /// Compile every stage and link them; stage handles are released on
    /// success and on failure
    pub fn build(
        compiler: &mut dyn ShaderCompiler,
        source: &ShaderSource,
    ) -> Result<Self, ShaderError> {
        let mut shaders = Vec::with_capacity(3);
        let mut result = Ok(());
        for (stage, text) in source.stages() {
            match compiler.compile(stage, text) {
                Ok(shader) => shaders.push(shader),
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        let linked = result.and_then(|()| compiler.link(&shaders));

        for shader in shaders {
            compiler.delete_shader(shader);
        }
        Ok(Self { id: linked? })
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}
