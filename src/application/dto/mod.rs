//! Data Transfer Objects

mod corruption_config;
mod recovery_config;
mod settings;

pub use corruption_config::{CorruptionConfig, DEFAULT_HEADER_SIZE};
pub use recovery_config::RecoveryConfig;
pub use settings::Settings;
