//! Error types for batcher setup.

use std::fmt;

/// Errors returned when a [`BatchConfig`](crate::BatchConfig) is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Buffers must hold at least one vertex.
    ZeroCapacity,

    /// The pool must grow by at least one buffer at a time.
    ZeroPoolChunk,

    /// Vertex positions must be addressable by a `u32` index.
    CapacityTooLarge {
        /// The requested capacity.
        capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "Batch capacity must be greater than zero"),
            ConfigError::ZeroPoolChunk => write!(f, "Pool chunk size must be greater than zero"),
            ConfigError::CapacityTooLarge { capacity } => {
                write!(f, "Batch capacity {} exceeds the u32 index range", capacity)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
