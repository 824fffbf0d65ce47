//! Free-list of reusable batch buffers.
//!
//! ```
//! use skelbatch_render::{BatchPool, Command};
//!
//! let pool = BatchPool::new();
//!
//! // First request grows the pool by one chunk
//! let buffer = pool.take();
//! assert_eq!(pool.allocated(), 64);
//! assert_eq!(pool.available(), 63);
//!
//! // Returned buffers are reused, never freed
//! pool.retrieve(Command::DrawBatch(buffer));
//! assert_eq!(pool.available(), 64);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use skelbatch_core::profiling::profile_function;

use crate::command::{BatchBuffer, Command};
use crate::config::BatchConfig;
use crate::error::ConfigError;

/// Source of pool ids. Zero is never handed out and marks unowned buffers.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

struct PoolState {
    free: VecDeque<BatchBuffer>,
    /// Buffers ever allocated by this pool, free or checked out.
    allocated: usize,
}

/// Shared pool of fixed-capacity [`BatchBuffer`]s.
///
/// Cloning yields another handle to the same pool, so every batcher of a scene
/// can draw from one free-list. Buffers are allocated `pool_chunk` at a time
/// when the list runs dry and are kept until the last handle is dropped.
#[derive(Clone)]
pub struct BatchPool {
    id: u64,
    config: BatchConfig,
    state: Arc<Mutex<PoolState>>,
}

impl BatchPool {
    /// Create an empty pool with the default [`BatchConfig`].
    pub fn new() -> Self {
        Self::from_valid_config(BatchConfig::default())
    }

    /// Create an empty pool with a custom buffer size and growth step.
    pub fn with_config(config: BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BatchConfig) -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            config,
            state: Arc::new(Mutex::new(PoolState {
                free: VecDeque::new(),
                allocated: 0,
            })),
        }
    }

    pub fn config(&self) -> BatchConfig {
        self.config
    }

    /// Check out a buffer, growing the pool by one chunk if none are free.
    ///
    /// The buffer is empty but may still carry the texture of its last use.
    pub fn take(&self) -> BatchBuffer {
        profile_function!();
        let mut state = self.state.lock();
        if state.free.is_empty() {
            let chunk = self.config.pool_chunk;
            let capacity = self.config.capacity;
            state
                .free
                .extend((0..chunk).map(|_| BatchBuffer::owned_by(capacity, self.id)));
            state.allocated += chunk;
            tracing::debug!(
                chunk,
                capacity = self.config.capacity,
                total = state.allocated,
                "Preallocated batch buffers"
            );
        }
        match state.free.pop_front() {
            Some(buffer) => buffer,
            None => unreachable!("pool grown by a non-empty chunk"),
        }
    }

    /// Return a command to the pool.
    ///
    /// Draw batches are emptied and recycled; every other command is dropped.
    pub fn retrieve(&self, command: Command) {
        match command {
            Command::DrawBatch(buffer) => self.recycle(buffer),
            Command::SetBlendMode(_) => {}
        }
    }

    /// Empty `buffer` and put it back on the free-list.
    ///
    /// Buffers this pool did not allocate are dropped instead.
    pub fn recycle(&self, mut buffer: BatchBuffer) {
        if buffer.pool_id() != self.id {
            tracing::trace!(
                owner = buffer.pool_id(),
                pool = self.id,
                "Dropping foreign batch buffer"
            );
            return;
        }
        buffer.clear();
        self.state.lock().free.push_back(buffer);
    }

    /// Number of buffers currently on the free-list.
    pub fn available(&self) -> usize {
        self.state.lock().free.len()
    }

    /// Number of buffers this pool has allocated in total.
    pub fn allocated(&self) -> usize {
        self.state.lock().allocated
    }

    /// Number of buffers currently checked out.
    pub fn in_use(&self) -> usize {
        let state = self.state.lock();
        state.allocated.saturating_sub(state.free.len())
    }
}

impl Default for BatchPool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatchPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BatchPool")
            .field("config", &self.config)
            .field("available", &state.free.len())
            .field("allocated", &state.allocated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skelbatch_core::BlendMode;

    fn small_pool() -> BatchPool {
        BatchPool::with_config(BatchConfig {
            capacity: 8,
            pool_chunk: 4,
        })
        .expect("valid config")
    }

    #[test]
    fn test_pool_starts_empty() {
        let pool = BatchPool::new();
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.allocated(), 0);
    }

    #[test]
    fn test_take_grows_by_chunk() {
        let pool = small_pool();
        let buffer = pool.take();

        assert_eq!(buffer.capacity(), 8);
        assert_eq!(pool.allocated(), 4);
        assert_eq!(pool.available(), 3);
        assert_eq!(pool.in_use(), 1);
    }

    #[test]
    fn test_take_grows_again_when_exhausted() {
        let pool = small_pool();
        let buffers: Vec<_> = (0..5).map(|_| pool.take()).collect();

        assert_eq!(buffers.len(), 5);
        assert_eq!(pool.allocated(), 8);
        assert_eq!(pool.available(), 3);
    }

    #[test]
    fn test_retrieve_recycles_draw_batches() {
        let pool = small_pool();
        let mut buffer = pool.take();
        buffer.append(
            &[0.0; 6],
            &[0.0; 6],
            &[0, 1, 2],
            skelbatch_core::Color::WHITE,
            crate::Flip::NONE,
        );

        pool.retrieve(Command::DrawBatch(buffer));
        assert_eq!(pool.available(), 4);
        assert_eq!(pool.allocated(), 4);

        // Every recycled buffer comes back empty
        for _ in 0..4 {
            let buffer = pool.take();
            assert_eq!(buffer.vertex_count(), 0);
            assert_eq!(buffer.index_count(), 0);
        }
    }

    #[test]
    fn test_take_is_fifo() {
        let pool = small_pool();
        let mut first = pool.take();
        first.set_texture(&skelbatch_core::TextureHandle::new(skelbatch_core::TextureId(1)));
        pool.recycle(first);

        // The recycled buffer goes to the back of the list
        for _ in 0..3 {
            assert!(pool.take().texture().is_none());
        }
        assert!(pool.take().texture().is_some());
    }

    #[test]
    fn test_retrieve_drops_blend_commands() {
        let pool = small_pool();
        pool.retrieve(Command::SetBlendMode(BlendMode::Additive));
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.allocated(), 0);
    }

    #[test]
    fn test_recycle_drops_foreign_buffers() {
        let pool = small_pool();
        pool.recycle(BatchBuffer::new(16));
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn test_recycle_drops_buffers_of_another_pool() {
        let pool = small_pool();
        let other = small_pool();

        // Same capacity, different owner
        pool.recycle(other.take());
        pool.recycle(BatchBuffer::new(8));

        assert_eq!(pool.available(), 0);
        assert_eq!(pool.allocated(), 0);
        assert_eq!(pool.in_use(), 0);
        assert_eq!(other.in_use(), 1);
    }

    #[test]
    fn test_clones_share_free_list() {
        let pool = small_pool();
        let other = pool.clone();
        let buffer = other.take();

        assert_eq!(pool.available(), 3);
        pool.recycle(buffer);
        assert_eq!(other.available(), 4);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let result = BatchPool::with_config(BatchConfig {
            capacity: 0,
            pool_chunk: 4,
        });
        assert_eq!(result.err(), Some(ConfigError::ZeroCapacity));
    }
}
