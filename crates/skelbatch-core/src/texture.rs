//! Texture handles as seen by the batcher.
//!
//! The batcher never touches pixel data. It only needs to know whether two
//! submissions use the same texture and which renderer-native id to pass along
//! with a draw.

use std::fmt;
use std::sync::Arc;

/// Renderer-native texture id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tex#{}", self.0)
    }
}

/// A texture resource owned by the host engine.
pub trait Texture: Send + Sync {
    /// The id the renderer uses to bind this texture.
    fn id(&self) -> TextureId;

    /// Texture size in pixels, if known.
    fn size(&self) -> Option<(u32, u32)> {
        None
    }
}

/// Shared reference to a [`Texture`].
///
/// Cloning is cheap. Two handles compare equal when they name the same
/// [`TextureId`], whether or not they share an allocation.
#[derive(Clone)]
pub struct TextureHandle(Arc<dyn Texture>);

impl TextureHandle {
    pub fn new(texture: impl Texture + 'static) -> Self {
        Self(Arc::new(texture))
    }

    pub fn from_arc(texture: Arc<dyn Texture>) -> Self {
        Self(texture)
    }

    /// The renderer-native id of the underlying texture.
    pub fn id(&self) -> TextureId {
        self.0.id()
    }

    pub fn texture(&self) -> &dyn Texture {
        self.0.as_ref()
    }
}

impl PartialEq for TextureHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TextureHandle {}

impl fmt::Debug for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextureHandle").field(&self.id()).finish()
    }
}

impl Texture for TextureId {
    fn id(&self) -> TextureId {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SizedTexture(TextureId);

    impl Texture for SizedTexture {
        fn id(&self) -> TextureId {
            self.0
        }

        fn size(&self) -> Option<(u32, u32)> {
            Some((256, 128))
        }
    }

    #[test]
    fn test_equality_by_id() {
        let a = TextureHandle::new(TextureId(1));
        let b = TextureHandle::new(SizedTexture(TextureId(1)));
        let c = TextureHandle::new(TextureId(2));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_optional_equality() {
        let a = TextureHandle::new(TextureId(7));
        let unset: Option<TextureHandle> = None;

        assert_ne!(unset.as_ref(), Some(&a));
        assert_eq!(Some(a.clone()).as_ref(), Some(&a));
    }

    #[test]
    fn test_size() {
        let handle = TextureHandle::new(SizedTexture(TextureId(3)));
        assert_eq!(handle.texture().size(), Some((256, 128)));
        assert_eq!(TextureHandle::new(TextureId(3)).texture().size(), None);
    }
}
