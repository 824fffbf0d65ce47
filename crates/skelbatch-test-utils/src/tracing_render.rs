//! A renderer that only logs.

use skelbatch_core::{BlendMode, RenderTarget, TriangleArray, TriangleRenderer};

/// Renderer that reports every call through `tracing` instead of drawing.
///
/// Useful for demos and for watching batch behavior of a real animation
/// without a GPU.
#[derive(Debug, Default)]
pub struct TracingRenderer {
    draw_calls: usize,
    blend_changes: usize,
    triangles: usize,
}

impl TracingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn blend_changes(&self) -> usize {
        self.blend_changes
    }

    pub fn triangles(&self) -> usize {
        self.triangles
    }
}

impl TriangleRenderer for TracingRenderer {
    fn draw_triangle_array(&mut self, target: RenderTarget, triangles: TriangleArray<'_>) {
        tracing::info!(
            target_id = target.0,
            texture = %triangles.texture,
            triangles = triangles.triangle_count,
            vertices = triangles.vertex_count(),
            "draw_triangle_array"
        );
        self.draw_calls += 1;
        self.triangles += triangles.triangle_count;
    }

    fn set_blend_mode(&mut self, target: RenderTarget, mode: BlendMode) {
        tracing::info!(target_id = target.0, ?mode, "set_blend_mode");
        self.blend_changes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skelbatch_core::{Color, TextureId, Vec2};

    #[test]
    fn test_counts_calls() {
        let mut renderer = TracingRenderer::new();
        let vertices = [Vec2::ZERO; 3];
        let colors = [Color::WHITE; 3];
        renderer.draw_triangle_array(
            RenderTarget(0),
            TriangleArray {
                triangle_count: 1,
                indices: &[0, 1, 2],
                vertices: &vertices,
                colors: &colors,
                uvs: &vertices,
                texture: TextureId(1),
            },
        );
        renderer.set_blend_mode(RenderTarget(0), BlendMode::Screen);

        assert_eq!(renderer.draw_calls(), 1);
        assert_eq!(renderer.blend_changes(), 1);
        assert_eq!(renderer.triangles(), 1);
    }
}
