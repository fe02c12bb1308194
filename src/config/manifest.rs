//! The page manifest: which pages exist and how each one is assembled.
//!
//! ```json
//! {
//!   "pages": {
//!     "about.html": {
//!       "title": "About",
//!       "description": "Who we are",
//!       "section": "about",
//!       "contentFile": "components/contents/about.html"
//!     },
//!     "eggs/foo/bar.html": {
//!       "title": "Bar",
//!       "description": "A nested egg",
//!       "section": "eggs",
//!       "contentFile": "components/contents/eggs/foo/bar.html",
//!       "layout": "egg",
//!       "subtitle": "Found under foo",
//!       "date": "2024-03-01"
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Logical page name (e.g. `eggs/foo/bar.html`) to page configuration.
///
/// Keys are kept sorted so builds iterate pages in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub pages: BTreeMap<String, PageConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub content_file: PathBuf,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Which layout template a page is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// The egg layout: breadcrumb trail plus subtitle and date
    Egg,
    /// The shared page layout; also used for unrecognised values
    #[default]
    #[serde(other)]
    Standard,
}

impl PageManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load the manifest from a file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the manifest, degrading to an empty manifest on any failure.
    ///
    /// A build with an empty manifest writes no pages.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{e}; building with an empty manifest");
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageConfig {
    /// Subtitle to substitute, if the page has a non-empty one.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }

    /// Date to substitute, if the page has a non-empty one.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|s| !s.is_empty())
    }
}
