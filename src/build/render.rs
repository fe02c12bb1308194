use std::borrow::Cow;

use crate::config::{Layout, PageConfig};

use super::breadcrumb;
use super::paths::PathRewriter;
use super::template::{COMPONENT_LOADER_REPLACEMENT, Placeholder, Slot, Template};

/// Everything needed to render one page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Manifest key, which is also the output path
    pub name: &'a str,
    pub config: &'a PageConfig,
    /// The page's content fragment (or the generated index content)
    pub content: &'a str,
}

/// The page renderer: both layouts plus the shared navbar and footer.
#[derive(Debug, Clone)]
pub struct Renderer {
    standard: Template,
    egg: Template,
    navbar: String,
    footer: String,
    rewriter: PathRewriter,
}

impl Renderer {
    pub fn new(
        standard: Template,
        egg: Template,
        navbar: String,
        footer: String,
        rewriter: PathRewriter,
    ) -> Self {
        Self {
            standard,
            egg,
            navbar,
            footer,
            rewriter,
        }
    }

    fn layout(&self, layout: Layout) -> &Template {
        match layout {
            Layout::Egg => &self.egg,
            Layout::Standard => &self.standard,
        }
    }

    /// Render a page and correct its links for the page's depth.
    pub fn render_page(&self, page: &PageContext) -> String {
        let config = page.config;
        let breadcrumb = match config.layout {
            Layout::Egg => Some(format!(
                r#"<nav class="breadcrumb">{}</nav>"#,
                breadcrumb::generate(page.name)
            )),
            Layout::Standard => None,
        };

        let html = self.layout(config.layout).render(|slot| match slot {
            Slot::Placeholder(placeholder) => match placeholder {
                Placeholder::Title => Some(Cow::Borrowed(config.title.as_str())),
                Placeholder::Description => Some(Cow::Borrowed(config.description.as_str())),
                Placeholder::Section => Some(Cow::Borrowed(config.section.as_str())),
                Placeholder::Content => Some(Cow::Borrowed(page.content)),
                Placeholder::Subtitle => config.subtitle().map(Cow::Borrowed),
                Placeholder::Date => config.date().map(Cow::Borrowed),
            },
            Slot::Navbar => Some(Cow::Borrowed(self.navbar.as_str())),
            Slot::Footer => Some(Cow::Borrowed(self.footer.as_str())),
            Slot::ComponentLoader => Some(Cow::Borrowed(COMPONENT_LOADER_REPLACEMENT)),
            Slot::Breadcrumb(_) => breadcrumb.as_deref().map(Cow::Borrowed),
        });

        self.rewriter.rewrite(&html, page.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STANDARD: &str = concat!(
        "<title>{{PAGE_TITLE}}</title>",
        "<meta name=\"description\" content=\"{{PAGE_DESCRIPTION}}\">",
        "<link href=\"assets/css/style.css\">",
        "<div id=\"navbar\"></div>",
        "<main data-section=\"{{PAGE_SECTION}}\"><h1>{{PAGE_TITLE}}</h1>{{PAGE_CONTENT}}</main>",
        "<div id=\"footer\"></div>",
        "<script src=\"assets/js/components.js\"></script>",
    );

    const EGG: &str = concat!(
        "<title>{{PAGE_TITLE}}</title>",
        "<nav class=\"breadcrumb\"><a href=\"eggs.html\">eggs</a></nav>",
        "<h1>{{PAGE_TITLE}}</h1><h2>{{PAGE_SUBTITLE}}</h2><time>{{PAGE_DATE}}</time>",
        "<img src=\"assets/images/egg.png\">",
        "{{PAGE_CONTENT}}",
    );

    fn renderer() -> Renderer {
        Renderer::new(
            Template::parse(STANDARD),
            Template::parse(EGG),
            r#"<nav><a href="index.html">Home</a></nav>"#.to_string(),
            "<footer>fin</footer>".to_string(),
            PathRewriter::new(&["index", "about", "eggs"]).unwrap(),
        )
    }

    fn config(layout: Layout) -> PageConfig {
        PageConfig {
            title: "Bar".to_string(),
            description: "A nested egg".to_string(),
            section: "eggs".to_string(),
            layout,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_standard_page() {
        let config = PageConfig {
            title: "About".to_string(),
            description: "Who we are".to_string(),
            section: "about".to_string(),
            ..Default::default()
        };
        let html = renderer().render_page(&PageContext {
            name: "about.html",
            config: &config,
            content: "<p>hello</p>",
        });

        assert_eq!(
            html,
            concat!(
                "<title>About</title>",
                "<meta name=\"description\" content=\"Who we are\">",
                "<link href=\"assets/css/style.css\">",
                "<nav><a href=\"index.html\">Home</a></nav>",
                "<main data-section=\"about\"><h1>About</h1><p>hello</p></main>",
                "<footer>fin</footer>",
                "<!-- Components loaded statically -->",
            )
        );
    }

    #[test]
    fn test_render_nested_standard_page_rewrites_links() {
        let config = config(Layout::Standard);
        let html = renderer().render_page(&PageContext {
            name: "guides/setup.html",
            config: &config,
            content: r#"<a href="about.html">about</a>"#,
        });

        assert!(html.contains(r#"<link href="../assets/css/style.css">"#));
        assert!(html.contains(r#"<nav><a href="../index.html">Home</a></nav>"#));
        assert!(html.contains(r#"<a href="../about.html">about</a>"#));
    }

    #[test]
    fn test_render_egg_page() {
        let config = PageConfig {
            subtitle: Some("Found under a".to_string()),
            date: Some("2024-03-01".to_string()),
            ..config(Layout::Egg)
        };
        let html = renderer().render_page(&PageContext {
            name: "eggs/a/b.html",
            config: &config,
            content: "<p>yolk</p>",
        });

        assert_eq!(
            html,
            concat!(
                "<title>Bar</title>",
                "<nav class=\"breadcrumb\"><a href=\"../../eggs.html\">eggs</a> > ",
                "<a href=\"../a.html\">a</a><span>b</span></nav>",
                "<h1>Bar</h1><h2>Found under a</h2><time>2024-03-01</time>",
                "<img src=\"../../assets/images/egg.png\">",
                "<p>yolk</p>",
            )
        );
    }

    #[test]
    fn test_render_egg_page_without_subtitle_keeps_tokens() {
        let config = config(Layout::Egg);
        let html = renderer().render_page(&PageContext {
            name: "eggs/foo.html",
            config: &config,
            content: "",
        });

        assert!(html.contains("<h2>{{PAGE_SUBTITLE}}</h2>"));
        assert!(html.contains("<time>{{PAGE_DATE}}</time>"));
        assert!(!html.contains("{{PAGE_TITLE}}"));
    }

    #[test]
    fn test_standard_layout_keeps_breadcrumb_block() {
        let renderer = Renderer::new(
            Template::parse("<nav class=\"breadcrumb\">static</nav>{{PAGE_CONTENT}}"),
            Template::parse(EGG),
            String::new(),
            String::new(),
            PathRewriter::new(&["index"]).unwrap(),
        );
        let config = config(Layout::Standard);
        let html = renderer.render_page(&PageContext {
            name: "eggs/foo.html",
            config: &config,
            content: "x",
        });

        assert_eq!(html, "<nav class=\"breadcrumb\">static</nav>x");
    }

    #[test]
    fn test_all_placeholders_filled_when_provided() {
        let config = PageConfig {
            subtitle: Some("s".to_string()),
            date: Some("d".to_string()),
            ..config(Layout::Egg)
        };
        let html = renderer().render_page(&PageContext {
            name: "eggs/foo.html",
            config: &config,
            content: "c",
        });

        for placeholder in [
            Placeholder::Title,
            Placeholder::Description,
            Placeholder::Section,
            Placeholder::Content,
            Placeholder::Subtitle,
            Placeholder::Date,
        ] {
            assert!(!html.contains(placeholder.token()), "{placeholder:?} left");
        }
    }

    #[test]
    fn test_content_tokens_are_not_substituted() {
        let config = PageConfig {
            subtitle: Some("sub".to_string()),
            ..config(Layout::Egg)
        };
        let html = renderer().render_page(&PageContext {
            name: "eggs/foo.html",
            config: &config,
            content: "<code>{{PAGE_SUBTITLE}}</code>",
        });

        assert!(html.contains("<code>{{PAGE_SUBTITLE}}</code>"));
        assert!(html.contains("<h2>sub</h2>"));
    }
}
