//! Skelbatch Core
//!
//! Foundation types shared by the skeletal mesh batcher and the renderers it
//! drives: colors, blend modes, texture handles, render targets and the
//! [`TriangleRenderer`] interface, plus the logging and profiling setup.

pub mod alloc;
pub mod blend;
pub mod color;
pub mod logging;
pub mod profiling;
pub mod target;
pub mod texture;

pub use blend::BlendMode;
pub use color::Color;
pub use target::{RenderTarget, TriangleArray, TriangleRenderer};
pub use texture::{Texture, TextureHandle, TextureId};

pub use glam::Vec2;
