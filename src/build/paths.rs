//! Path and link utilities.
//!
//! This module handles:
//! - Page depth (how many directories deep a page's output file lives)
//! - Rewriting root-relative asset and navigation links for that depth
//! - Output file paths and settings-relative path resolution

use std::path::{Path, PathBuf};

use regex::{Captures, Regex};

/// Number of directory levels a page lives below the output root.
///
/// # Examples
/// ```ignore
/// page_depth("about.html") => 0
/// page_depth("eggs/a/b.html") => 2
/// ```
pub fn page_depth(page_name: &str) -> usize {
    page_name.matches('/').count()
}

/// `depth` parent-directory steps, e.g. `"../../"` for 2.
pub fn relative_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Rewrites root-relative links in rendered pages.
///
/// Only two link forms are touched, both matched syntactically:
/// `href="assets/...` / `src="assets/...`, and `href="<name>.html"` for the
/// configured set of top-level page names.
#[derive(Debug, Clone)]
pub struct PathRewriter {
    root_links: Option<Regex>,
}

impl PathRewriter {
    /// Create a rewriter for the given top-level page names (without `.html`).
    pub fn new<S: AsRef<str>>(root_pages: &[S]) -> Result<Self, regex::Error> {
        if root_pages.is_empty() {
            return Ok(Self { root_links: None });
        }

        let names = root_pages
            .iter()
            .map(|name| regex::escape(name.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let root_links = Regex::new(&format!(r#"href="({names})\.html""#))?;

        Ok(Self {
            root_links: Some(root_links),
        })
    }

    /// Prefix asset and top-level page links so they resolve from `page_name`.
    ///
    /// # Examples
    /// ```ignore
    /// rewrite(r#"src="assets/img.png""#, "eggs/a/b.html") => r#"src="../../assets/img.png""#
    /// rewrite(r#"href="about.html""#, "eggs/b.html") => r#"href="../about.html""#
    /// ```
    pub fn rewrite(&self, html: &str, page_name: &str) -> String {
        let prefix = relative_prefix(page_depth(page_name));
        if prefix.is_empty() {
            return html.to_string();
        }

        let html = html
            .replace(r#"href="assets/"#, &format!(r#"href="{prefix}assets/"#))
            .replace(r#"src="assets/"#, &format!(r#"src="{prefix}assets/"#));

        match &self.root_links {
            Some(root_links) => root_links
                .replace_all(&html, |caps: &Captures| {
                    format!(r#"href="{prefix}{}.html""#, &caps[1])
                })
                .into_owned(),
            None => html,
        }
    }
}

/// Convert a page name to its output file path.
///
/// Returns `None` for names with a `..` segment, which would land outside
/// the output directory.
///
/// # Examples
/// ```ignore
/// page_output_path("eggs/a/b.html", output_dir) => Some(output_dir/eggs/a/b.html)
/// page_output_path("../x.html", output_dir) => None
/// ```
pub fn page_output_path(page_name: &str, output_dir: &Path) -> Option<PathBuf> {
    page_name
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .try_fold(output_dir.to_path_buf(), |path, segment| {
            (segment != "..").then(|| path.join(segment))
        })
}

/// Resolve a settings path against the settings file's directory.
pub fn resolve_path(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
