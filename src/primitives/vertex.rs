use crate::math::Vector3;

/// Interleaving of the float attributes of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexLayout {
    /// position(3) color(3)
    PositionColor,
    /// position(3) normal(3)
    PositionNormal,
    /// position(3) normal(3) tex coords(2)
    PositionNormalTexCoord,
    /// position(3) color(3) point size(1)
    PositionColorSize,
}

impl VertexLayout {
    /// Number of floats per vertex
    pub const fn stride(self) -> usize {
        match self {
            Self::PositionColor | Self::PositionNormal => 6,
            Self::PositionNormalTexCoord => 8,
            Self::PositionColorSize => 7,
        }
    }
}

/// Growable interleaved `f32` vertex data, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(floats: usize) -> Self {
        Self {
            data: Vec::with_capacity(floats),
        }
    }

    /// Append one position/color vertex
    pub fn append_vectors(&mut self, position: Vector3, color: Vector3) {
        self.data.extend_from_slice(&position.to_f32_array());
        self.data.extend_from_slice(&color.to_f32_array());
    }

    pub fn append_triangle(&mut self, points: &[Vector3; 3], colors: &[Vector3; 3]) {
        for (point, color) in points.iter().zip(colors) {
            self.append_vectors(*point, *color);
        }
    }

    /// Append a quad `a b c d` as the triangles `a b c` and `a c d`
    pub fn append_square(&mut self, points: &[Vector3; 4], colors: &[Vector3; 4]) {
        for index in [0, 1, 2, 0, 2, 3] {
            self.append_vectors(points[index], colors[index]);
        }
    }

    /// Append one position/color/size vertex
    pub fn append_point(&mut self, position: Vector3, color: Vector3, size: f32) {
        self.append_vectors(position, color);
        self.data.push(size);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Number of floats stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of complete vertices when read with `layout`
    pub fn vertex_count(&self, layout: VertexLayout) -> usize {
        self.data.len() / layout.stride()
    }
}

/// Full vertex description; the layout picks which attributes are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub position: Vector3,
    pub normal: Vector3,
    pub tex_coords: [f64; 2],
    pub color: Vector3,
    pub point_size: f32,
}

impl Vertex {
    fn write(&self, layout: VertexLayout, out: &mut VertexBuffer) {
        match layout {
            VertexLayout::PositionColor => out.append_vectors(self.position, self.color),
            VertexLayout::PositionNormal => out.append_vectors(self.position, self.normal),
            VertexLayout::PositionNormalTexCoord => {
                out.append_vectors(self.position, self.normal);
                out.data.push(self.tex_coords[0] as f32);
                out.data.push(self.tex_coords[1] as f32);
            }
            VertexLayout::PositionColorSize => {
                out.append_point(self.position, self.color, self.point_size)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vertices(Vec<Vertex>);

impl Vertices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vertex: Vertex) {
        self.0.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.0.iter()
    }

    /// Interleave every vertex with the given layout
    pub fn buffer(&self, layout: VertexLayout) -> VertexBuffer {
        let mut out = VertexBuffer::with_capacity(self.0.len() * layout.stride());
        for vertex in &self.0 {
            vertex.write(layout, &mut out);
        }
        out
    }

    pub fn get(&self, layout: VertexLayout) -> Vec<f32> {
        self.buffer(layout).into_vec()
    }
}

impl FromIterator<Vertex> for Vertices {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
