use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("drop interval must be greater than zero")]
    ZeroDropInterval,
    #[error("fast drop interval must be greater than zero")]
    ZeroFastDropInterval,
    #[error("fast drop interval ({fast:?}) is longer than the normal drop interval ({normal:?})")]
    FastSlowerThanNormal { fast: Duration, normal: Duration },
}
