//! Replayable render commands and the fixed-capacity buffers batches are
//! built in.

use glam::Vec2;
use skelbatch_core::{BlendMode, Color, RenderTarget, TextureHandle, TriangleArray, TriangleRenderer};

/// Axis flips applied to submitted vertex positions.
///
/// Skeleton data is Y-up while render targets are Y-down, so the y axis is
/// negated unless `y` is set. Setting `y` suppresses that negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flip {
    pub x: bool,
    pub y: bool,
}

impl Flip {
    pub const NONE: Flip = Flip { x: false, y: false };
    pub const X: Flip = Flip { x: true, y: false };
    pub const Y: Flip = Flip { x: false, y: true };
    pub const BOTH: Flip = Flip { x: true, y: true };

    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    /// Map a skeleton-space position to render-target space.
    #[inline]
    pub fn apply(self, x: f32, y: f32) -> Vec2 {
        Vec2::new(if self.x { -x } else { x }, if self.y { y } else { -y })
    }
}

/// Fixed-capacity storage for one batch of triangles sharing a texture.
///
/// Arrays are allocated once at full capacity and reused for the lifetime of
/// the pool; only the fill counters change between uses.
pub struct BatchBuffer {
    /// Id of the pool that allocated this buffer, zero if none did.
    pool_id: u64,
    texture: Option<TextureHandle>,
    vertices: Box<[Vec2]>,
    colors: Box<[Color]>,
    uvs: Box<[Vec2]>,
    indices: Box<[u32]>,
    vertex_count: usize,
    index_count: usize,
}

impl BatchBuffer {
    /// Allocate a buffer holding `capacity` vertices and `capacity * 3` indices.
    pub fn new(capacity: usize) -> Self {
        Self::owned_by(capacity, 0)
    }

    pub(crate) fn owned_by(capacity: usize, pool_id: u64) -> Self {
        Self {
            pool_id,
            texture: None,
            vertices: vec![Vec2::ZERO; capacity].into_boxed_slice(),
            colors: vec![Color::WHITE; capacity].into_boxed_slice(),
            uvs: vec![Vec2::ZERO; capacity].into_boxed_slice(),
            indices: vec![0; capacity * 3].into_boxed_slice(),
            vertex_count: 0,
            index_count: 0,
        }
    }

    pub(crate) fn pool_id(&self) -> u64 {
        self.pool_id
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_capacity(&self) -> usize {
        self.indices.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn triangle_count(&self) -> usize {
        self.index_count / 3
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Whether the buffer holds anything drawable.
    ///
    /// Both vertices and indices are needed; a buffer missing either is
    /// treated as empty and never issued as a draw.
    pub fn has_geometry(&self) -> bool {
        self.vertex_count > 0 && self.index_count > 0
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices[..self.vertex_count]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors[..self.vertex_count]
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs[..self.vertex_count]
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices[..self.index_count]
    }

    /// Whether `vertices` more vertices and `indices` more indices can be
    /// appended.
    ///
    /// A buffer is never filled to its last slot: the check is strict.
    pub(crate) fn can_fit(&self, vertices: usize, indices: usize) -> bool {
        self.vertex_count + vertices < self.capacity()
            && self.index_count + indices < self.index_capacity()
    }

    pub(crate) fn set_texture(&mut self, texture: &TextureHandle) {
        self.texture = Some(texture.clone());
    }

    /// Reset the fill counters. The texture and storage are kept.
    pub(crate) fn clear(&mut self) {
        self.vertex_count = 0;
        self.index_count = 0;
    }

    /// Append a triangle list.
    ///
    /// `vertices` and `uvs` are flat `[x, y, x, y, ...]` arrays. Indices are
    /// rebased onto this buffer's vertex range. The caller must have checked
    /// [`can_fit`](Self::can_fit) and that `uvs` covers every vertex.
    pub(crate) fn append(
        &mut self,
        vertices: &[f32],
        uvs: &[f32],
        indices: &[u16],
        color: Color,
        flip: Flip,
    ) {
        let base = self.vertex_count as u32;
        let start = self.index_count;
        let end = start + indices.len();
        for (slot, &index) in self.indices[start..end].iter_mut().zip(indices) {
            *slot = u32::from(index) + base;
        }
        self.index_count = end;

        for (position, uv) in vertices.chunks_exact(2).zip(uvs.chunks_exact(2)) {
            let slot = self.vertex_count;
            self.vertices[slot] = flip.apply(position[0], position[1]);
            self.colors[slot] = color;
            self.uvs[slot] = Vec2::new(uv[0], uv[1]);
            self.vertex_count += 1;
        }
    }

    /// Borrow the filled part of the buffer as a drawable triangle array.
    ///
    /// Returns `None` until a texture has been assigned.
    pub fn triangles(&self) -> Option<TriangleArray<'_>> {
        let texture = self.texture.as_ref()?;
        Some(TriangleArray {
            triangle_count: self.triangle_count(),
            indices: self.indices(),
            vertices: self.vertices(),
            colors: self.colors(),
            uvs: self.uvs(),
            texture: texture.id(),
        })
    }
}

impl std::fmt::Debug for BatchBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchBuffer")
            .field("texture", &self.texture)
            .field("capacity", &self.capacity())
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.index_count)
            .finish()
    }
}

/// A unit of deferred rendering work.
#[derive(Debug)]
pub enum Command {
    /// Draw one batch of triangles with a single texture.
    DrawBatch(BatchBuffer),
    /// Switch the blend state for everything drawn after it.
    SetBlendMode(BlendMode),
}

impl Command {
    /// Issue this command to `renderer`.
    ///
    /// Returns `false` if nothing was issued, which happens for a draw batch
    /// that never had a texture assigned.
    pub fn replay<R: TriangleRenderer + ?Sized>(
        &self,
        target: RenderTarget,
        renderer: &mut R,
    ) -> bool {
        match self {
            Command::DrawBatch(buffer) => match buffer.triangles() {
                Some(triangles) => {
                    renderer.draw_triangle_array(target, triangles);
                    true
                }
                None => false,
            },
            Command::SetBlendMode(mode) => {
                renderer.set_blend_mode(target, *mode);
                true
            }
        }
    }
}
