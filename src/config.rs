use std::time::Duration;

use crate::constants::{FAST_DROP_MS, NORMAL_DROP_MS};
use crate::error::ConfigError;

/// Timing and randomness options for a [`crate::game::Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub drop_interval: Duration,
    pub fast_drop_interval: Duration,
    /// Fixed RNG seed for a reproducible piece sequence.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drop_interval: Duration::from_millis(NORMAL_DROP_MS),
            fast_drop_interval: Duration::from_millis(FAST_DROP_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_millis(drop_ms: u64, fast_drop_ms: u64, seed: Option<u64>) -> Result<Self, ConfigError> {
        let config = Self {
            drop_interval: Duration::from_millis(drop_ms),
            fast_drop_interval: Duration::from_millis(fast_drop_ms),
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drop_interval.is_zero() {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.fast_drop_interval.is_zero() {
            return Err(ConfigError::ZeroFastDropInterval);
        }
        if self.fast_drop_interval > self.drop_interval {
            return Err(ConfigError::FastSlowerThanNormal {
                fast: self.fast_drop_interval,
                normal: self.drop_interval,
            });
        }
        Ok(())
    }
}
