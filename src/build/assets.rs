//! Static asset copying.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Copies static assets into the output tree once pages are written.
pub trait AssetCopier {
    /// Copy assets, returning the number of files copied.
    fn copy_assets(&self) -> std::io::Result<usize>;
}

/// Mirrors a directory tree file-for-file, skipping excluded paths.
#[derive(Debug, Clone)]
pub struct DirMirror {
    source: PathBuf,
    destination: PathBuf,
    exclude: Vec<PathBuf>,
}

impl DirMirror {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            exclude: Vec::new(),
        }
    }

    /// Skip these paths (relative to the source root). Excluding a directory
    /// skips everything below it.
    pub fn with_exclude(mut self, exclude: Vec<PathBuf>) -> Self {
        self.exclude = exclude;
        self
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|skip| relative.starts_with(skip))
    }
}

impl AssetCopier for DirMirror {
    fn copy_assets(&self) -> std::io::Result<usize> {
        if !self.source.is_dir() {
            tracing::debug!(path = %self.source.display(), "no asset directory, skipping");
            return Ok(0);
        }

        let mut copied = 0;
        let walker = WalkDir::new(&self.source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.source)
                    .map(|relative| !self.is_excluded(relative))
                    .unwrap_or(true)
            });

        for entry in walker {
            let entry = entry?;
            let Ok(relative) = entry.path().strip_prefix(&self.source) else {
                continue;
            };
            let target = self.destination.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::copy(entry.path(), &target)?;
                copied += 1;
            }
        }

        Ok(copied)
    }
}
