//! Draw call batching for skeletal mesh animation.
//!
//! Skeletal animation produces one small textured triangle list per visible
//! attachment every frame. Issuing each as its own draw is wasteful, so a
//! [`Batcher`] merges consecutive lists that share a texture into
//! fixed-capacity [`BatchBuffer`]s and replays them, together with any blend
//! mode changes, in submission order.
//!
//! Buffers come from a [`BatchPool`] shared by all batchers, so steady-state
//! frames allocate nothing.
//!
//! ```
//! use skelbatch_core::{BlendMode, Color, RenderTarget, TextureHandle, TextureId};
//! use skelbatch_render::{BatchPool, Batcher, Flip};
//! use skelbatch_test_utils::TracingRenderer;
//!
//! let pool = BatchPool::new();
//! let mut batcher = Batcher::new(pool.clone(), RenderTarget(1));
//! let mut renderer = TracingRenderer::new();
//! let atlas = TextureHandle::new(TextureId(7));
//!
//! let quad = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//! let indices = [0, 1, 2, 2, 3, 0];
//!
//! batcher.add(&atlas, &quad, &quad, &indices, Color::WHITE, Flip::NONE);
//! batcher.add(&atlas, &quad, &quad, &indices, Color::WHITE, Flip::NONE);
//! batcher.add_blend_mode(BlendMode::Additive);
//! batcher.add(&atlas, &quad, &quad, &indices, Color::WHITE, Flip::NONE);
//!
//! let stats = batcher.flush(&mut renderer);
//! assert_eq!(stats.draw_calls, 2);
//! assert_eq!(stats.blend_changes, 1);
//!
//! // Next frame
//! batcher.reset();
//! ```

pub mod batcher;
pub mod command;
pub mod config;
pub mod error;
pub mod pool;

pub use batcher::{Batcher, BatcherStats};
pub use command::{BatchBuffer, Command, Flip};
pub use config::{BATCH_CAPACITY, BatchConfig, INDEX_CAPACITY, POOL_CHUNK};
pub use error::ConfigError;
pub use pool::BatchPool;

pub use skelbatch_core;
