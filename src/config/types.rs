//! Configuration type definitions.
//!
//! This module contains the data structures read from `pagefold.yaml`.
//! These types are pure data - no I/O or complex logic. Every field has a
//! default so a partial (or absent) settings file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Site settings for a build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub components: ComponentsConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

// =============================================================================
// Site configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to the page manifest (JSON)
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    /// Output root for rendered pages and copied assets
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("pages-config.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            output: default_output(),
        }
    }
}

// =============================================================================
// Shared components
// =============================================================================

/// Layout templates and the shared fragments inlined into every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default = "default_layout")]
    pub layout: PathBuf,
    #[serde(default = "default_egg_layout")]
    pub egg_layout: PathBuf,
    #[serde(default = "default_navbar")]
    pub navbar: PathBuf,
    #[serde(default = "default_footer")]
    pub footer: PathBuf,
}

fn default_layout() -> PathBuf {
    PathBuf::from("components/shared/page-layout.html")
}

fn default_egg_layout() -> PathBuf {
    PathBuf::from("components/shared/egg-layout.html")
}

fn default_navbar() -> PathBuf {
    PathBuf::from("components/shared/navbar.html")
}

fn default_footer() -> PathBuf {
    PathBuf::from("components/shared/footer.html")
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            egg_layout: default_egg_layout(),
            navbar: default_navbar(),
            footer: default_footer(),
        }
    }
}

// =============================================================================
// Static assets
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Asset source tree, mirrored to `<output>/assets`
    #[serde(default = "default_assets_path")]
    pub path: PathBuf,
    /// Paths relative to `path` that are not copied
    #[serde(default = "default_assets_exclude")]
    pub exclude: Vec<PathBuf>,
}

fn default_assets_path() -> PathBuf {
    PathBuf::from("assets")
}

fn default_assets_exclude() -> Vec<PathBuf> {
    // The component loader only exists to fetch navbar/footer at runtime.
    vec![PathBuf::from("js/components.js")]
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            path: default_assets_path(),
            exclude: default_assets_exclude(),
        }
    }
}

// =============================================================================
// Namespace index
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Pages under `<namespace>/` are listed on `<namespace>.html`
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    "eggs".to_string()
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

impl IndexConfig {
    /// Manifest key of the index page, e.g. `eggs.html`.
    pub fn page_name(&self) -> String {
        format!("{}.html", self.namespace)
    }
}

// =============================================================================
// Link rewriting
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Top-level pages whose `href="<name>.html"` links get a depth prefix
    #[serde(default = "default_root_pages")]
    pub root_pages: Vec<String>,
}

fn default_root_pages() -> Vec<String> {
    vec!["index".to_string(), "about".to_string(), "eggs".to_string()]
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            root_pages: default_root_pages(),
        }
    }
}

// =============================================================================
// Build behaviour
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub on_missing: MissingPolicy,
}

/// What the build does when a layout, component or content fragment
/// cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Substitute an empty string, log a warning and keep going
    #[default]
    Warn,
    /// Abort the build on the first unreadable fragment
    Fail,
}
