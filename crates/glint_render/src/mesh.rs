//! Append-only vertex buffer
//!
//! Vertices accumulate on the CPU in triangle-list order and are uploaded
//! in one `buffer_data` call at flush. The buffer is cleared after every
//! flush; vertices never outlive the batch they were appended in.

use glint_core::Color;

/// Vertex layout for a batch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexFormat {
    /// position (x, y, z) + color (r, g, b, a)
    PositionColor,
    /// position (x, y, z) + color (r, g, b, a) + uv (u, v)
    PositionColorUv,
}

impl VertexFormat {
    /// Floats per vertex
    pub const fn stride(self) -> usize {
        match self {
            VertexFormat::PositionColor => 7,
            VertexFormat::PositionColorUv => 9,
        }
    }
}

/// An append-only CPU-side vertex buffer
#[derive(Clone, Debug)]
pub struct Mesh {
    format: VertexFormat,
    data: Vec<f32>,
}

impl Mesh {
    pub fn new(format: VertexFormat) -> Self {
        Self {
            format,
            data: Vec::new(),
        }
    }

    pub fn format(&self) -> VertexFormat {
        self.format
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.format.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw interleaved vertex data (also used by tests to inspect geometry)
    pub fn vertex_data(&self) -> &[f32] {
        &self.data
    }

    /// Iterate (x, y) positions of all appended vertices
    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.data
            .chunks_exact(self.format.stride())
            .map(|v| (v[0], v[1]))
    }

    /// Append one vertex without UV.
    ///
    /// Valid only for [`VertexFormat::PositionColor`] meshes; debug builds
    /// assert the format matches.
    pub fn vertex(&mut self, x: f32, y: f32, z: f32, color: Color) {
        debug_assert_eq!(self.format, VertexFormat::PositionColor);
        self.data
            .extend_from_slice(&[x, y, z, color.r, color.g, color.b, color.a]);
    }

    /// Append one vertex with UV
    pub fn vertex_uv(&mut self, x: f32, y: f32, z: f32, color: Color, u: f32, v: f32) {
        debug_assert_eq!(self.format, VertexFormat::PositionColorUv);
        self.data
            .extend_from_slice(&[x, y, z, color.r, color.g, color.b, color.a, u, v]);
    }

    /// Append a solid triangle (counter-clockwise winding)
    pub fn triangle(
        &mut self,
        a: (f32, f32),
        b: (f32, f32),
        c: (f32, f32),
        color: Color,
    ) {
        self.vertex(a.0, a.1, 0.0, color);
        self.vertex(b.0, b.1, 0.0, color);
        self.vertex(c.0, c.1, 0.0, color);
    }

    /// Append a solid axis-aligned quad as two triangles
    pub fn quad(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x1, y1) = (x + width, y + height);
        self.triangle((x, y), (x, y1), (x1, y1), color);
        self.triangle((x, y), (x1, y1), (x1, y), color);
    }

    /// Append a textured quad as two triangles
    #[allow(clippy::too_many_arguments)]
    pub fn quad_uv(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        u0: f32,
        v0: f32,
        u1: f32,
        v1: f32,
    ) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x1, y1) = (x + width, y + height);
        self.vertex_uv(x, y, 0.0, color, u0, v0);
        self.vertex_uv(x, y1, 0.0, color, u0, v1);
        self.vertex_uv(x1, y1, 0.0, color, u1, v1);
        self.vertex_uv(x, y, 0.0, color, u0, v0);
        self.vertex_uv(x1, y1, 0.0, color, u1, v1);
        self.vertex_uv(x1, y, 0.0, color, u1, v0);
    }

    /// Drop all vertices, keeping the allocation for the next batch
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_appends_six_vertices() {
        let mut mesh = Mesh::new(VertexFormat::PositionColor);
        mesh.quad(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn degenerate_quad_is_skipped() {
        let mut mesh = Mesh::new(VertexFormat::PositionColor);
        mesh.quad(0.0, 0.0, 0.0, 10.0, Color::WHITE);
        mesh.quad(0.0, 0.0, 10.0, -5.0, Color::WHITE);
        assert!(mesh.is_empty());
    }

    #[test]
    fn clear_keeps_format() {
        let mut mesh = Mesh::new(VertexFormat::PositionColorUv);
        mesh.quad_uv(0.0, 0.0, 4.0, 4.0, Color::WHITE, 0.0, 0.0, 1.0, 1.0);
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.format(), VertexFormat::PositionColorUv);
    }
}
