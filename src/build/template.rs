//! Layout templates parsed into literal text and named slots.
//!
//! A layout is scanned once for the tokens and markers it recognises:
//!
//! - `{{PAGE_TITLE}}`, `{{PAGE_DESCRIPTION}}`, `{{PAGE_SECTION}}`,
//!   `{{PAGE_CONTENT}}`, `{{PAGE_SUBTITLE}}`, `{{PAGE_DATE}}` - a slot at
//!   every occurrence
//! - the navbar and footer marker elements and the component-loader script
//!   tag - a slot at the first occurrence only
//! - `<nav class="breadcrumb">...</nav>` - a slot per block, matched
//!   non-greedily
//!
//! Filling a template writes literal text through and asks the caller for
//! each slot's value. Slots the caller leaves empty render their original
//! source text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Marker element replaced by the shared navbar fragment.
pub const NAVBAR_MARKER: &str = r#"<div id="navbar"></div>"#;

/// Marker element replaced by the shared footer fragment.
pub const FOOTER_MARKER: &str = r#"<div id="footer"></div>"#;

/// Script tag that loads components at runtime in unbuilt pages.
pub const COMPONENT_LOADER: &str = r#"<script src="assets/js/components.js"></script>"#;

/// What the component loader becomes once components are inlined.
pub const COMPONENT_LOADER_REPLACEMENT: &str = "<!-- Components loaded statically -->";

static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\{PAGE_(TITLE|DESCRIPTION|SECTION|CONTENT|SUBTITLE|DATE)\}\}|<div id="navbar"></div>|<div id="footer"></div>|<script src="assets/js/components\.js"></script>|(?s:<nav class="breadcrumb">.*?</nav>)"#,
    )
    .unwrap()
});

/// A `{{PAGE_*}}` placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Title,
    Description,
    Section,
    Content,
    Subtitle,
    Date,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "TITLE" => Some(Self::Title),
            "DESCRIPTION" => Some(Self::Description),
            "SECTION" => Some(Self::Section),
            "CONTENT" => Some(Self::Content),
            "SUBTITLE" => Some(Self::Subtitle),
            "DATE" => Some(Self::Date),
            _ => None,
        }
    }

    /// The token as written in a layout.
    pub fn token(self) -> &'static str {
        match self {
            Self::Title => "{{PAGE_TITLE}}",
            Self::Description => "{{PAGE_DESCRIPTION}}",
            Self::Section => "{{PAGE_SECTION}}",
            Self::Content => "{{PAGE_CONTENT}}",
            Self::Subtitle => "{{PAGE_SUBTITLE}}",
            Self::Date => "{{PAGE_DATE}}",
        }
    }
}

/// A named hole in a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Placeholder(Placeholder),
    Navbar,
    Footer,
    ComponentLoader,
    /// A breadcrumb container, holding its original markup
    Breadcrumb(String),
}

impl Slot {
    /// The layout text this slot was parsed from.
    pub fn source_text(&self) -> &str {
        match self {
            Slot::Placeholder(placeholder) => placeholder.token(),
            Slot::Navbar => NAVBAR_MARKER,
            Slot::Footer => FOOTER_MARKER,
            Slot::ComponentLoader => COMPONENT_LOADER,
            Slot::Breadcrumb(original) => original,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Slot(Slot),
}

/// A parsed layout template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse layout text into literal segments and slots.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;
        let mut seen_navbar = false;
        let mut seen_footer = false;
        let mut seen_loader = false;

        for found in SLOT_RE.captures_iter(source) {
            let Some(whole) = found.get(0) else {
                continue;
            };
            let text = whole.as_str();

            let slot = if let Some(name) = found.get(1) {
                Placeholder::from_name(name.as_str()).map(Slot::Placeholder)
            } else if text == NAVBAR_MARKER {
                (!std::mem::replace(&mut seen_navbar, true)).then_some(Slot::Navbar)
            } else if text == FOOTER_MARKER {
                (!std::mem::replace(&mut seen_footer, true)).then_some(Slot::Footer)
            } else if text == COMPONENT_LOADER {
                (!std::mem::replace(&mut seen_loader, true)).then_some(Slot::ComponentLoader)
            } else {
                Some(Slot::Breadcrumb(text.to_string()))
            };

            // Repeated single-use markers stay literal text.
            let Some(slot) = slot else {
                continue;
            };

            if whole.start() > last {
                segments.push(Segment::Text(source[last..whole.start()].to_string()));
            }
            segments.push(Segment::Slot(slot));
            last = whole.end();
        }

        if last < source.len() {
            segments.push(Segment::Text(source[last..].to_string()));
        }

        Self { segments }
    }

    /// Iterate over the slots in layout order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(slot),
            Segment::Text(_) => None,
        })
    }

    /// Render the template, asking `fill` for each slot's value.
    ///
    /// A slot for which `fill` returns `None` renders its source text.
    pub fn render<'a, F>(&self, mut fill: F) -> String
    where
        F: FnMut(&Slot) -> Option<Cow<'a, str>>,
    {
        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Slot(slot) => match fill(slot) {
                    Some(value) => html.push_str(&value),
                    None => html.push_str(slot.source_text()),
                },
            }
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_text() {
        let template = Template::parse("<p>no slots here</p>");
        assert_eq!(
            template.segments,
            vec![Segment::Text("<p>no slots here</p>".to_string())]
        );
    }

    #[test]
    fn test_parse_placeholders_and_markers() {
        let template = Template::parse(
            "<title>{{PAGE_TITLE}}</title><div id=\"navbar\"></div><h1>{{PAGE_TITLE}}</h1>{{PAGE_CONTENT}}<div id=\"footer\"></div>",
        );
        let slots: Vec<_> = template.slots().cloned().collect();
        assert_eq!(
            slots,
            vec![
                Slot::Placeholder(Placeholder::Title),
                Slot::Navbar,
                Slot::Placeholder(Placeholder::Title),
                Slot::Placeholder(Placeholder::Content),
                Slot::Footer,
            ]
        );
    }

    #[test]
    fn test_unknown_token_stays_literal() {
        let template = Template::parse("{{PAGE_AUTHOR}}");
        assert_eq!(template.slots().count(), 0);
        assert_eq!(template.render(|_| None), "{{PAGE_AUTHOR}}");
    }

    #[test]
    fn test_navbar_marker_only_first_occurrence() {
        let template = Template::parse(
            "<div id=\"navbar\"></div><main></main><div id=\"navbar\"></div>",
        );
        assert_eq!(template.slots().count(), 1);

        let html = template.render(|slot| match slot {
            Slot::Navbar => Some(Cow::Borrowed("<nav>menu</nav>")),
            _ => None,
        });
        assert_eq!(html, "<nav>menu</nav><main></main><div id=\"navbar\"></div>");
    }

    #[test]
    fn test_breadcrumb_matches_non_greedily() {
        let source = "<nav class=\"breadcrumb\"><a href=\"#\">x</a>\n</nav><p>mid</p><nav class=\"breadcrumb\">y</nav>";
        let template = Template::parse(source);
        let slots: Vec<_> = template.slots().cloned().collect();
        assert_eq!(
            slots,
            vec![
                Slot::Breadcrumb("<nav class=\"breadcrumb\"><a href=\"#\">x</a>\n</nav>".to_string()),
                Slot::Breadcrumb("<nav class=\"breadcrumb\">y</nav>".to_string()),
            ]
        );
        assert_eq!(template.render(|_| None), source);
    }

    #[test]
    fn test_render_fills_every_placeholder_occurrence() {
        let template = Template::parse("{{PAGE_TITLE}} | {{PAGE_TITLE}} | {{PAGE_DATE}}");
        let html = template.render(|slot| match slot {
            Slot::Placeholder(Placeholder::Title) => Some(Cow::Borrowed("Home")),
            _ => None,
        });
        assert_eq!(html, "Home | Home | {{PAGE_DATE}}");
    }

    #[test]
    fn test_filled_values_are_not_rescanned() {
        let template = Template::parse("{{PAGE_CONTENT}}|{{PAGE_SUBTITLE}}");
        let html = template.render(|slot| match slot {
            Slot::Placeholder(Placeholder::Content) => Some(Cow::Borrowed("{{PAGE_SUBTITLE}}")),
            Slot::Placeholder(Placeholder::Subtitle) => Some(Cow::Borrowed("sub")),
            _ => None,
        });
        assert_eq!(html, "{{PAGE_SUBTITLE}}|sub");
    }

    #[test]
    fn test_component_loader_slot() {
        let template = Template::parse(&format!("<body>{COMPONENT_LOADER}</body>"));
        assert_eq!(
            template.slots().collect::<Vec<_>>(),
            vec![&Slot::ComponentLoader]
        );
    }
}
