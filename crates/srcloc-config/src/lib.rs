mod classifier;
mod config;
mod error;
mod loader;

pub use classifier::Classifier;
pub use config::SourceConfig;
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
