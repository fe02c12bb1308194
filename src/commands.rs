pub mod build;
pub mod clean;
pub mod index;
pub mod init;
pub mod serve;

use std::path::{Path, PathBuf};

use crate::build::source::{FsSink, FsSource};
use crate::build::{BuildResult, Builder, DirMirror, base_path_from_config, resolve_path};
use crate::config::{PageManifest, Settings};

/// Settings and manifest for one site, with paths resolved against the
/// directory holding the settings file.
pub struct Project {
    pub settings: Settings,
    pub base_path: PathBuf,
}

impl Project {
    pub fn load(config_file: Option<&Path>) -> Result<Self, anyhow::Error> {
        let config_path = Settings::path_from_arg(config_file)?;
        let settings = Settings::load(&config_path)?;
        let base_path = base_path_from_config(&config_path);

        Ok(Self {
            settings,
            base_path,
        })
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_path(&self.base_path, path)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.settings.site.output)
    }

    pub fn manifest(&self) -> PageManifest {
        PageManifest::load_or_empty(&self.resolve(&self.settings.site.manifest))
    }

    pub fn builder(&self) -> Builder {
        Builder::new(self.settings.clone(), self.manifest())
    }

    pub fn source(&self) -> FsSource {
        FsSource::new(&self.base_path)
    }

    /// Build the whole site to the output directory.
    pub fn build(&self, builder: &Builder) -> Result<BuildResult, anyhow::Error> {
        let output_dir = self.output_dir();
        let mut sink = FsSink::new(&output_dir);
        let assets = DirMirror::new(
            self.resolve(&self.settings.assets.path),
            output_dir.join("assets"),
        )
        .with_exclude(self.settings.assets.exclude.clone());

        Ok(builder.build(&self.source(), &mut sink, &assets)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn site(root: &Path) {
        write(
            root,
            "components/shared/page-layout.html",
            "<title>{{PAGE_TITLE}}</title><div id=\"navbar\"></div>{{PAGE_CONTENT}}<script src=\"assets/js/components.js\"></script>",
        );
        write(
            root,
            "components/shared/egg-layout.html",
            "<nav class=\"breadcrumb\"></nav>{{PAGE_CONTENT}}<img src=\"assets/egg.png\">",
        );
        write(root, "components/shared/navbar.html", "<a href=\"index.html\">home</a>");
        write(root, "components/shared/footer.html", "");
        write(root, "contents/index.html", "<p>home</p>");
        write(root, "contents/eggs.html", "<ul></ul>");
        write(root, "contents/eggs/a/b.html", "<p>b</p>");
        write(root, "assets/egg.png", "png");
        write(root, "assets/js/components.js", "loader");
        write(
            root,
            "pages-config.json",
            r#"{
                "pages": {
                    "index.html": { "title": "Home", "contentFile": "contents/index.html" },
                    "eggs.html": { "title": "Eggs", "contentFile": "contents/eggs.html" },
                    "eggs/a/b.html": { "title": "B", "contentFile": "contents/eggs/a/b.html", "layout": "egg" }
                }
            }"#,
        );
    }

    fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
        walkdir::WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                (
                    entry.path().strip_prefix(root).unwrap().to_path_buf(),
                    std::fs::read(entry.path()).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_build_site_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());

        let project = Project::load(Some(dir.path().join("pagefold.yaml").as_path())).unwrap();
        let result = project.build(&project.builder()).unwrap();

        assert_eq!(result.pages, 3);
        assert_eq!(result.assets, 1);
        assert_eq!(result.missing, 0);

        let out = dir.path().join("dist");
        let b = std::fs::read_to_string(out.join("eggs/a/b.html")).unwrap();
        assert!(b.contains("<img src=\"../../assets/egg.png\">"));
        assert!(b.contains("<a href=\"../../eggs.html\">eggs</a>"));
        assert!(out.join("assets/egg.png").is_file());
        assert!(!out.join("assets/js/components.js").exists());

        let eggs = std::fs::read_to_string(out.join("eggs.html")).unwrap();
        assert!(eggs.contains("  a:\n  <ul>\n<li>\n  <a href=\"eggs/a/b.html\">b: B</a>"));
    }

    #[test]
    fn test_build_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());
        let project = Project::load(Some(dir.path().join("pagefold.yaml").as_path())).unwrap();

        project.build(&project.builder()).unwrap();
        let first = snapshot(&project.output_dir());
        project.build(&project.builder()).unwrap();
        let second = snapshot(&project.output_dir());

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_manifest_builds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::load(Some(dir.path().join("pagefold.yaml").as_path())).unwrap();

        let result = project.build(&project.builder()).unwrap();

        assert_eq!(result.pages, 0);
        assert_eq!(result.assets, 0);
    }
}
