use std::path::{Path, PathBuf};

use crate::config::{MissingPolicy, PageConfig, PageManifest, Settings};

use super::assets::AssetCopier;
use super::eggs::{EggTree, inject_list};
use super::paths::PathRewriter;
use super::render::{PageContext, Renderer};
use super::source::{ContentSource, PageSink, SourceError};
use super::template::{Placeholder, Slot, Template};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("missing fragment for {page}: {source}")]
    MissingFragment { page: String, source: SourceError },

    #[error("failed to write {page}: {source}")]
    Write {
        page: String,
        source: std::io::Error,
    },

    #[error("failed to copy assets: {0}")]
    Assets(std::io::Error),

    #[error("invalid root page name: {0}")]
    Links(#[from] regex::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildResult {
    /// Pages written
    pub pages: usize,
    /// Asset files copied
    pub assets: usize,
    /// Fragments that could not be read and were rendered empty
    pub missing: usize,
}

/// Regenerated content for the namespace index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexUpdate {
    /// The index page's content fragment
    pub content_file: PathBuf,
    pub content: String,
    pub status: IndexStatus,
}

/// How the index page's fragment was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    /// The listing was injected and differs from the fragment on disk
    Updated,
    /// The listing was injected but the fragment already held it
    Unchanged,
    /// The fragment could not be read; `content` holds no listing
    FragmentMissing,
    /// The fragment has no `<ul>` list; `content` is the fragment as read
    NoList,
}

/// Label used for shared fragments in missing-fragment reports.
const SHARED: &str = "shared components";

/// Runs the page pipeline over a manifest.
///
/// The builder reads through a [`ContentSource`], writes through a
/// [`PageSink`] and never touches the filesystem itself.
pub struct Builder {
    settings: Settings,
    manifest: PageManifest,
}

impl Builder {
    pub fn new(settings: Settings, manifest: PageManifest) -> Self {
        Self { settings, manifest }
    }

    /// Policy for unreadable fragments.
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.settings.build.on_missing = policy;
        self
    }

    pub fn build(
        &self,
        source: &dyn ContentSource,
        sink: &mut dyn PageSink,
        assets: &dyn AssetCopier,
    ) -> Result<BuildResult, BuildError> {
        // Build pipeline:
        // 1. Load layouts and shared components (once)
        // 2. Render each manifest page, generating the index listing for the
        //    namespace index page
        // 3. Hand each page to the sink
        // 4. Copy static assets
        tracing::info!(pages = self.manifest.len(), "building static pages");
        if self.manifest.is_empty() {
            tracing::warn!("manifest lists no pages; nothing to render");
        }

        let mut fetcher = Fetcher::new(source, self.settings.build.on_missing);
        let renderer = self.load_renderer(&mut fetcher)?;
        let index_page = self.settings.index.page_name();

        let mut result = BuildResult::default();
        for (page_name, config) in &self.manifest.pages {
            tracing::debug!(page = %page_name, "building");

            let content = if *page_name == index_page {
                self.index_content(&mut fetcher, page_name, config)?.0
            } else {
                fetcher.get(&config.content_file, page_name)?
            };

            let html = renderer.render_page(&PageContext {
                name: page_name,
                config,
                content: &content,
            });

            sink.put(page_name, &html).map_err(|source| BuildError::Write {
                page: page_name.clone(),
                source,
            })?;
            tracing::info!(page = %page_name, "built");
            result.pages += 1;
        }

        result.assets = assets.copy_assets().map_err(BuildError::Assets)?;
        tracing::info!(files = result.assets, "copied assets");

        result.missing = fetcher.missing;
        if result.missing > 0 {
            tracing::warn!(
                missing = result.missing,
                "build finished with missing fragments"
            );
        }

        Ok(result)
    }

    /// Generate the namespace index page's content: its own fragment with
    /// the list replaced by the nested listing of the namespace's pages.
    ///
    /// Returns `None` when the manifest has no index page. The update's
    /// status says whether the content is safe to write back.
    pub fn generate_index(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Option<IndexUpdate>, BuildError> {
        let index_page = self.settings.index.page_name();
        let Some(config) = self.manifest.pages.get(&index_page) else {
            return Ok(None);
        };

        let mut fetcher = Fetcher::new(source, self.settings.build.on_missing);
        let (content, status) = self.index_content(&mut fetcher, &index_page, config)?;
        Ok(Some(IndexUpdate {
            content_file: config.content_file.clone(),
            content,
            status,
        }))
    }

    fn index_content(
        &self,
        fetcher: &mut Fetcher,
        page_name: &str,
        config: &PageConfig,
    ) -> Result<(String, IndexStatus), BuildError> {
        let missing_before = fetcher.missing;
        let fragment = fetcher.get(&config.content_file, page_name)?;
        if fetcher.missing > missing_before {
            return Ok((fragment, IndexStatus::FragmentMissing));
        }

        let tree = EggTree::build(&self.manifest, &self.settings.index.namespace);
        if tree.is_empty() {
            tracing::debug!(namespace = %self.settings.index.namespace, "no pages to list");
        }

        match inject_list(&fragment, &tree.to_html()) {
            Some(content) if content == fragment => Ok((content, IndexStatus::Unchanged)),
            Some(content) => Ok((content, IndexStatus::Updated)),
            None => {
                tracing::warn!(
                    page = %page_name,
                    path = %config.content_file.display(),
                    "index fragment has no <ul> list; leaving it unchanged"
                );
                Ok((fragment, IndexStatus::NoList))
            }
        }
    }

    fn load_renderer(&self, fetcher: &mut Fetcher) -> Result<Renderer, BuildError> {
        let components = &self.settings.components;
        let standard = load_layout(fetcher, &components.layout)?;
        let egg = load_layout(fetcher, &components.egg_layout)?;
        let navbar = fetcher.get(&components.navbar, SHARED)?;
        let footer = fetcher.get(&components.footer, SHARED)?;
        let rewriter = PathRewriter::new(self.settings.links.root_pages.as_slice())?;

        Ok(Renderer::new(standard, egg, navbar, footer, rewriter))
    }
}

fn load_layout(fetcher: &mut Fetcher, path: &Path) -> Result<Template, BuildError> {
    let text = fetcher.get(path, SHARED)?;
    let template = Template::parse(&text);

    let has_content = template
        .slots()
        .any(|slot| *slot == Slot::Placeholder(Placeholder::Content));
    if !text.is_empty() && !has_content {
        tracing::warn!(
            path = %path.display(),
            token = Placeholder::Content.token(),
            "layout has no content placeholder; pages will render without content"
        );
    }

    Ok(template)
}

/// Reads fragments and applies the missing-fragment policy.
struct Fetcher<'a> {
    source: &'a dyn ContentSource,
    policy: MissingPolicy,
    missing: usize,
}

impl<'a> Fetcher<'a> {
    fn new(source: &'a dyn ContentSource, policy: MissingPolicy) -> Self {
        Self {
            source,
            policy,
            missing: 0,
        }
    }

    fn get(&mut self, path: &Path, page: &str) -> Result<String, BuildError> {
        match self.source.get(path) {
            Ok(text) => Ok(text),
            Err(source) => match self.policy {
                MissingPolicy::Warn => {
                    tracing::warn!(%page, "{source}; using empty content");
                    self.missing += 1;
                    Ok(String::new())
                }
                MissingPolicy::Fail => Err(BuildError::MissingFragment {
                    page: page.to_string(),
                    source,
                }),
            },
        }
    }
}
