//! Test utilities for skelbatch.
//!
//! Renderers that stand in for the host engine's rasterizer:
//!
//! - [`TracingRenderer`] - logs every call through `tracing` and keeps counters
//! - `MockTriangleRenderer` - records every call for assertions (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use skelbatch_core::{BlendMode, RenderTarget, TriangleRenderer};
//! use skelbatch_test_utils::MockTriangleRenderer;
//!
//! let mut mock = MockTriangleRenderer::new();
//! mock.set_blend_mode(RenderTarget(1), BlendMode::Additive);
//!
//! assert_eq!(mock.count_blend_changes(), 1);
//! assert_eq!(mock.count_draws(), 0);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_render;
pub mod tracing_render;

#[cfg(feature = "mock")]
pub use mock_render::*;
pub use tracing_render::*;
