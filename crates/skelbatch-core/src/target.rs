//! The interface between the batcher and the renderer that rasterizes its
//! output.

use glam::Vec2;

use crate::{BlendMode, Color, TextureId};

/// Opaque handle to the drawable surface a batch is replayed onto.
///
/// Supplied by the scene node that owns the animated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTarget(pub u64);

/// A triangle list ready to be rasterized.
///
/// `vertices`, `colors` and `uvs` are parallel arrays of equal length. Every
/// entry of `indices` is smaller than `vertices.len()`.
#[derive(Debug, Clone, Copy)]
pub struct TriangleArray<'a> {
    pub triangle_count: usize,
    pub indices: &'a [u32],
    pub vertices: &'a [Vec2],
    pub colors: &'a [Color],
    pub uvs: &'a [Vec2],
    pub texture: TextureId,
}

impl<'a> TriangleArray<'a> {
    /// Number of vertices in the array.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw bytes of the index array, for direct upload to an index buffer.
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }

    /// Raw bytes of the position array.
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Raw bytes of the color array.
    pub fn color_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.colors)
    }

    /// Raw bytes of the texture coordinate array.
    pub fn uv_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.uvs)
    }
}

/// Immediate-mode 2D renderer the batcher replays its commands against.
pub trait TriangleRenderer {
    /// Draw an indexed, textured triangle list.
    fn draw_triangle_array(&mut self, target: RenderTarget, triangles: TriangleArray<'_>);

    /// Change the blend state used by subsequent draws on `target`.
    fn set_blend_mode(&mut self, target: RenderTarget, mode: BlendMode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_views() {
        let indices = [0u32, 1, 2];
        let vertices = [Vec2::ZERO, Vec2::X, Vec2::Y];
        let colors = [Color::WHITE; 3];
        let uvs = [Vec2::ZERO; 3];
        let array = TriangleArray {
            triangle_count: 1,
            indices: &indices,
            vertices: &vertices,
            colors: &colors,
            uvs: &uvs,
            texture: TextureId(0),
        };

        assert_eq!(array.vertex_count(), 3);
        assert_eq!(array.index_bytes().len(), 12);
        assert_eq!(array.vertex_bytes().len(), 24);
        assert_eq!(array.color_bytes().len(), 48);
        assert_eq!(array.uv_bytes().len(), 24);
    }
}
