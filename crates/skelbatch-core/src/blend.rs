//! Blend modes used by skeletal slots.

/// Blend mode a slot is drawn with.
///
/// Skeleton data stores these as small integers; [`BlendMode::from_index`] and
/// [`BlendMode::index`] convert to and from that representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BlendMode {
    /// Standard alpha blending.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb * (1 - src.a)`
    #[default]
    Normal = 0,

    /// Additive blending.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb`
    ///
    /// Use for: Glow effects, particles, light sources.
    Additive = 1,

    /// Multiplicative blending.
    ///
    /// Formula: `src.rgb * dst.rgb`
    Multiply = 2,

    /// Screen blending.
    ///
    /// Formula: `src.rgb + dst.rgb * (1 - src.rgb)`
    Screen = 3,
}

impl BlendMode {
    /// Look up a blend mode by its integer index.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(BlendMode::Normal),
            1 => Some(BlendMode::Additive),
            2 => Some(BlendMode::Multiply),
            3 => Some(BlendMode::Screen),
            _ => None,
        }
    }

    /// The integer index of this blend mode.
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Convert to wgpu BlendState.
    pub fn to_blend_state(self) -> wgpu::BlendState {
        match self {
            BlendMode::Normal => wgpu::BlendState::ALPHA_BLENDING,
            BlendMode::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
            BlendMode::Multiply => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::Dst,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
            },
            BlendMode::Screen => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::OneMinusSrc,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for mode in [
            BlendMode::Normal,
            BlendMode::Additive,
            BlendMode::Multiply,
            BlendMode::Screen,
        ] {
            assert_eq!(BlendMode::from_index(mode.index()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_index() {
        assert_eq!(BlendMode::from_index(4), None);
        assert_eq!(BlendMode::from_index(-1), None);
    }

    #[test]
    fn test_normal_is_alpha_blending() {
        assert_eq!(
            BlendMode::Normal.to_blend_state(),
            wgpu::BlendState::ALPHA_BLENDING
        );
    }

    #[test]
    fn test_additive_keeps_destination() {
        let state = BlendMode::Additive.to_blend_state();
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::One);
    }
}
