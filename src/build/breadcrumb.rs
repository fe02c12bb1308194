//! Breadcrumb trails for nested pages.

use crate::util::page_stem;

use super::paths::relative_prefix;

/// Build the inner markup of a page's breadcrumb trail.
///
/// Every ancestor directory links to its own index page, which sits next to
/// the directory (`eggs/a/` -> `eggs/a.html`). The current page comes last,
/// unlinked.
///
/// # Examples
/// ```ignore
/// generate("eggs/a/b.html")
///     => r#"<a href="../../eggs.html">eggs</a> > <a href="../a.html">a</a><span>b</span>"#
/// ```
pub fn generate(page_name: &str) -> String {
    let segments: Vec<&str> = page_name.split('/').collect();
    let (current, ancestors) = match segments.split_last() {
        Some((current, ancestors)) => (*current, ancestors),
        None => (page_name, &[][..]),
    };

    let mut trail = String::new();
    for (i, ancestor) in ancestors.iter().enumerate() {
        // Climb to the directory holding this ancestor's index page.
        let prefix = relative_prefix(ancestors.len() - i);
        trail.push_str(&format!(r#"<a href="{prefix}{ancestor}.html">{ancestor}</a>"#));
        if i + 1 < ancestors.len() {
            trail.push_str(" > ");
        }
    }

    trail.push_str(&format!("<span>{}</span>", page_stem(current)));
    trail
}
