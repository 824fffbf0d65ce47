//! Mock implementation of [`TriangleRenderer`] for testing.
//!
//! Records every call without rasterizing anything.

use std::sync::Arc;

use parking_lot::Mutex;
use skelbatch_core::alloc::HashMap;
use skelbatch_core::{
    BlendMode, Color, RenderTarget, Texture, TextureHandle, TextureId, TriangleArray,
    TriangleRenderer, Vec2,
};

/// An owned copy of one `draw_triangle_array` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub target: RenderTarget,
    pub texture: TextureId,
    pub triangle_count: usize,
    pub indices: Vec<u32>,
    pub vertices: Vec<Vec2>,
    pub colors: Vec<Color>,
    pub uvs: Vec<Vec2>,
}

/// Records a renderer call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    DrawTriangles(RecordedDraw),
    SetBlendMode {
        target: RenderTarget,
        mode: BlendMode,
    },
}

/// Mock renderer that records calls.
///
/// Clones share the same call log, so a clone can be handed to the code under
/// test while the original is kept for assertions.
///
/// # Example
///
/// ```rust
/// use skelbatch_core::{BlendMode, RenderTarget, TriangleRenderer};
/// use skelbatch_test_utils::{MockTriangleRenderer, RenderCall};
///
/// let mock = MockTriangleRenderer::new();
/// let mut renderer = mock.clone();
/// renderer.set_blend_mode(RenderTarget(3), BlendMode::Multiply);
///
/// assert_eq!(
///     mock.calls(),
///     vec![RenderCall::SetBlendMode { target: RenderTarget(3), mode: BlendMode::Multiply }]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTriangleRenderer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl MockTriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// All recorded draws, in call order.
    pub fn draws(&self) -> Vec<RecordedDraw> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                RenderCall::DrawTriangles(draw) => Some(draw.clone()),
                RenderCall::SetBlendMode { .. } => None,
            })
            .collect()
    }

    pub fn count_draws(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::DrawTriangles(_)))
            .count()
    }

    pub fn count_blend_changes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::SetBlendMode { .. }))
            .count()
    }

    /// Number of draws issued per texture.
    pub fn texture_usage(&self) -> HashMap<TextureId, usize> {
        let mut usage = HashMap::new();
        for call in self.calls.lock().iter() {
            if let RenderCall::DrawTriangles(draw) = call {
                *usage.entry(draw.texture).or_insert(0) += 1;
            }
        }
        usage
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl TriangleRenderer for MockTriangleRenderer {
    fn draw_triangle_array(&mut self, target: RenderTarget, triangles: TriangleArray<'_>) {
        self.calls.lock().push(RenderCall::DrawTriangles(RecordedDraw {
            target,
            texture: triangles.texture,
            triangle_count: triangles.triangle_count,
            indices: triangles.indices.to_vec(),
            vertices: triangles.vertices.to_vec(),
            colors: triangles.colors.to_vec(),
            uvs: triangles.uvs.to_vec(),
        }));
    }

    fn set_blend_mode(&mut self, target: RenderTarget, mode: BlendMode) {
        self.calls
            .lock()
            .push(RenderCall::SetBlendMode { target, mode });
    }
}

/// Texture stand-in with a fixed id and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTexture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl Texture for MockTexture {
    fn id(&self) -> TextureId {
        self.id
    }

    fn size(&self) -> Option<(u32, u32)> {
        Some((self.width, self.height))
    }
}

/// Create a 256x256 mock texture handle with the given id.
pub fn mock_texture(id: u64) -> TextureHandle {
    TextureHandle::new(MockTexture {
        id: TextureId(id),
        width: 256,
        height: 256,
    })
}
