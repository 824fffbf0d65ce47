//! Batch sizing configuration.

use crate::error::ConfigError;

/// Maximum number of vertices a single batch buffer holds.
pub const BATCH_CAPACITY: usize = 1024;

/// Maximum number of indices a single batch buffer holds.
pub const INDEX_CAPACITY: usize = BATCH_CAPACITY * 3;

/// Number of buffers allocated at once when the pool runs dry.
pub const POOL_CHUNK: usize = 64;

/// Sizing of batch buffers and of pool growth.
///
/// Every buffer handed out by one pool has the same capacity. Submissions that
/// can never fit in a buffer of this size are dropped by the batcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Vertex capacity of each buffer. Index capacity is three times this.
    pub capacity: usize,
    /// Buffers allocated per pool growth step.
    pub pool_chunk: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            capacity: BATCH_CAPACITY,
            pool_chunk: POOL_CHUNK,
        }
    }
}

impl BatchConfig {
    /// Index capacity of each buffer.
    pub fn index_capacity(&self) -> usize {
        self.capacity * 3
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.pool_chunk == 0 {
            return Err(ConfigError::ZeroPoolChunk);
        }
        if self.capacity > u32::MAX as usize {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = BatchConfig::default();
        assert_eq!(config.capacity, 1024);
        assert_eq!(config.index_capacity(), 3072);
        assert_eq!(config.index_capacity(), INDEX_CAPACITY);
        assert_eq!(config.pool_chunk, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = BatchConfig {
            capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));

        let config = BatchConfig {
            pool_chunk: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPoolChunk));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_validate_rejects_oversized_capacity() {
        let capacity = u32::MAX as usize + 1;
        let config = BatchConfig {
            capacity,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::CapacityTooLarge { capacity })
        );

        let config = BatchConfig {
            capacity: u32::MAX as usize,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
