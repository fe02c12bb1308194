//! Where the pipeline reads fragments from and writes pages to.
//!
//! The builder only sees these traits, so rendering runs the same against
//! the filesystem or against in-memory fixtures.

use std::path::{Path, PathBuf};

use super::paths::{page_output_path, resolve_path};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Traits
// =============================================================================

/// Resolves layout, component and content paths to their text.
pub trait ContentSource {
    fn get(&self, path: &Path) -> Result<String, SourceError>;
}

/// Persists rendered pages under their page name.
pub trait PageSink {
    fn put(&mut self, page_name: &str, html: &str) -> std::io::Result<()>;
}

// =============================================================================
// Filesystem implementations
// =============================================================================

/// Reads fragments relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    base_path: PathBuf,
}

impl FsSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ContentSource for FsSource {
    fn get(&self, path: &Path) -> Result<String, SourceError> {
        let full_path = resolve_path(&self.base_path, path);
        std::fs::read_to_string(&full_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(full_path)
            } else {
                SourceError::Read {
                    path: full_path,
                    source,
                }
            }
        })
    }
}

/// Writes pages into an output directory, creating parent directories.
#[derive(Debug, Clone)]
pub struct FsSink {
    output_dir: PathBuf,
}

impl FsSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl PageSink for FsSink {
    fn put(&mut self, page_name: &str, html: &str) -> std::io::Result<()> {
        let output_path = page_output_path(page_name, &self.output_dir).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("page name {page_name} points outside the output directory"),
            )
        })?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&output_path, html)
    }
}

// =============================================================================
// In-memory implementations
// =============================================================================

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::{BTreeMap, HashMap};
    use std::path::{Path, PathBuf};

    use super::{ContentSource, PageSink, SourceError};

    /// Fragments held in memory, keyed by path.
    #[derive(Debug, Default)]
    pub struct MemorySource {
        files: HashMap<PathBuf, String>,
    }

    impl MemorySource {
        pub fn with(mut self, path: &str, text: &str) -> Self {
            self.files.insert(PathBuf::from(path), text.to_string());
            self
        }
    }

    impl ContentSource for MemorySource {
        fn get(&self, path: &Path) -> Result<String, SourceError> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| SourceError::NotFound(path.to_path_buf()))
        }
    }

    /// Collects written pages.
    #[derive(Debug, Default)]
    pub struct MemorySink {
        pub pages: BTreeMap<String, String>,
    }

    impl PageSink for MemorySink {
        fn put(&mut self, page_name: &str, html: &str) -> std::io::Result<()> {
            self.pages.insert(page_name.to_string(), html.to_string());
            Ok(())
        }
    }
}
