//! Configuration loading and types for pagefold.
//!
//! This module handles both build inputs:
//! - Site settings from `pagefold.yaml` (`types`, `load`)
//! - The page manifest from `pages-config.json` (`manifest`)

mod load;
mod manifest;
mod types;

pub use load::CONFIG_FILE;
pub use manifest::{Layout, PageConfig, PageManifest};
pub use types::{MissingPolicy, Settings};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(std::path::PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),
}
