//! Per-object draw call batching.
//!
//! A [`Batcher`] collects the triangle lists an animated skeleton emits each
//! frame, one per visible attachment, and merges consecutive lists that share
//! a texture into as few draws as possible. Blend mode changes are kept in
//! submission order between the geometry batches.
//!
//! The per-frame lifecycle is:
//!
//! 1. [`Batcher::add`] / [`Batcher::add_blend_mode`] for every attachment
//! 2. [`Batcher::flush`] to replay everything onto the render target
//! 3. [`Batcher::reset`] at the start of the next frame to hand the drawn
//!    buffers back to the pool

use skelbatch_core::profiling::{profile_function, profile_scope};
use skelbatch_core::{BlendMode, Color, RenderTarget, TextureHandle, TriangleRenderer};

use crate::command::{BatchBuffer, Command, Flip};
use crate::pool::BatchPool;

/// Statistics from the last [`Batcher::flush`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatcherStats {
    /// Number of `draw_triangle_array` calls issued.
    pub draw_calls: u32,
    /// Number of `set_blend_mode` calls issued.
    pub blend_changes: u32,
    /// Total triangles drawn.
    pub triangles: u32,
    /// Total vertices submitted.
    pub vertices: u32,
}

impl BatcherStats {
    fn record(&mut self, command: &Command) {
        match command {
            Command::DrawBatch(buffer) => {
                self.draw_calls += 1;
                self.triangles += buffer.triangle_count() as u32;
                self.vertices += buffer.vertex_count() as u32;
            }
            Command::SetBlendMode(_) => self.blend_changes += 1,
        }
    }
}

/// Batches the triangle submissions of one animated object.
///
/// Buffers are borrowed from a shared [`BatchPool`] and all of them, current,
/// pending and flushed, go back to it when the batcher is dropped.
pub struct Batcher {
    pool: BatchPool,
    target: RenderTarget,
    /// Buffer currently being filled.
    current: BatchBuffer,
    /// Commands waiting for the next flush, in submission order.
    pending: Vec<Command>,
    /// Commands replayed by the last flush, held until `reset`.
    flushed: Vec<Command>,
    stats: BatcherStats,
}

impl Batcher {
    /// Create a batcher drawing onto `target`, checking out its first buffer
    /// from `pool`.
    pub fn new(pool: BatchPool, target: RenderTarget) -> Self {
        let current = pool.take();
        Self {
            pool,
            target,
            current,
            pending: Vec::new(),
            flushed: Vec::new(),
            stats: BatcherStats::default(),
        }
    }

    /// Queue a triangle list.
    ///
    /// `vertices` and `uvs` are flat `[x, y, x, y, ...]` arrays of equal
    /// layout, `indices` index into this submission's own vertices. Every
    /// vertex receives `color`. Positions are y-negated unless `flip.y` is
    /// set, and x-negated when `flip.x` is set.
    ///
    /// A submission too large for any single buffer, or whose `uvs` do not
    /// cover its vertices, is dropped without notice.
    pub fn add(
        &mut self,
        texture: &TextureHandle,
        vertices: &[f32],
        uvs: &[f32],
        indices: &[u16],
        color: Color,
        flip: Flip,
    ) {
        profile_function!();
        let vertex_count = vertices.len() / 2;
        let index_count = indices.len();

        if vertex_count >= self.current.capacity() || index_count >= self.current.index_capacity()
        {
            tracing::trace!(vertex_count, index_count, "Dropping oversized submission");
            return;
        }
        if uvs.len() < vertex_count * 2 {
            tracing::trace!(
                vertex_count,
                uv_count = uvs.len() / 2,
                "Dropping submission with missing texture coordinates"
            );
            return;
        }

        if self.current.texture() != Some(texture)
            || !self.current.can_fit(vertex_count, index_count)
        {
            self.cut();
            self.current.set_texture(texture);
        }

        self.current.append(vertices, uvs, indices, color, flip);
    }

    /// Queue a blend mode change.
    ///
    /// Geometry added before this call is drawn with the previous blend mode,
    /// geometry added after it with `mode`.
    pub fn add_blend_mode(&mut self, mode: BlendMode) {
        self.cut();
        self.pending.push(Command::SetBlendMode(mode));
    }

    /// Replay every queued command onto the render target, in submission
    /// order.
    ///
    /// Replayed buffers stay checked out until [`reset`](Self::reset).
    pub fn flush<R: TriangleRenderer + ?Sized>(&mut self, renderer: &mut R) -> BatcherStats {
        profile_function!();
        self.cut();

        let mut stats = BatcherStats::default();
        {
            profile_scope!("replay");
            for command in self.pending.drain(..) {
                if command.replay(self.target, renderer) {
                    stats.record(&command);
                }
                self.flushed.push(command);
            }
        }

        tracing::trace!(
            target_id = self.target.0,
            draw_calls = stats.draw_calls,
            blend_changes = stats.blend_changes,
            triangles = stats.triangles,
            "Flushed batcher"
        );
        self.stats = stats;
        stats
    }

    /// Return the buffers drawn by the last flush to the pool.
    ///
    /// Call once per frame after [`flush`](Self::flush) and before the next
    /// frame's [`add`](Self::add) calls.
    pub fn reset(&mut self) {
        profile_function!();
        for command in self.flushed.drain(..) {
            self.pool.retrieve(command);
        }
    }

    /// Close the current buffer and start a fresh one.
    ///
    /// A buffer without drawable geometry is kept as the current buffer. Any
    /// lone vertices or indices it holds could never be referenced by a later
    /// submission, so they are discarded.
    fn cut(&mut self) {
        if !self.current.has_geometry() {
            self.current.clear();
            return;
        }
        let next = self.pool.take();
        let full = std::mem::replace(&mut self.current, next);
        self.pending.push(Command::DrawBatch(full));
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// Draw onto a different target from the next flush on.
    pub fn set_target(&mut self, target: RenderTarget) {
        self.target = target;
    }

    /// The buffer currently being filled.
    pub fn current(&self) -> &BatchBuffer {
        &self.current
    }

    /// Number of commands waiting for the next flush.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of commands waiting to be returned by [`reset`](Self::reset).
    pub fn flushed_len(&self) -> usize {
        self.flushed.len()
    }

    /// Statistics from the last flush.
    pub fn stats(&self) -> BatcherStats {
        self.stats
    }

    pub fn pool(&self) -> &BatchPool {
        &self.pool
    }
}

impl Drop for Batcher {
    fn drop(&mut self) {
        for command in self.pending.drain(..).chain(self.flushed.drain(..)) {
            self.pool.retrieve(command);
        }
        let current = std::mem::replace(&mut self.current, BatchBuffer::new(0));
        self.pool.recycle(current);
    }
}

impl std::fmt::Debug for Batcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batcher")
            .field("target", &self.target)
            .field("current", &self.current)
            .field("pending", &self.pending.len())
            .field("flushed", &self.flushed.len())
            .field("stats", &self.stats)
            .finish()
    }
}
