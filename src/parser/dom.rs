//! Query helpers over a parsed `scraper` tree.
//!
//! Everything here is read-only. Where the upstream layouts call for
//! "replace this span with its text" or "remove this node, then read",
//! callers describe it with a [`Projection`] and get a plain-text view of
//! the subtree instead of mutating it.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use super::text;

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "br", "tr", "td", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// A tolerant parse of one upstream response body.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("Bad selector {:?}: {:?}", css, e);
            None
        }
    }
}

/// All descendants of `root` matching `css`, in document order.
pub fn select<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    let Some(sel) = selector(css) else {
        return Vec::new();
    };
    let found = root.select(&sel).collect();
    found
}

pub fn first<'a>(root: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    let found = root.select(&sel).next();
    found
}

/// 1-based positional pick among the matches of `css`.
pub fn nth<'a>(root: ElementRef<'a>, css: &str, position: usize) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    let found = root.select(&sel).nth(position.checked_sub(1)?);
    found
}

pub fn has(root: ElementRef<'_>, css: &str) -> bool {
    first(root, css).is_some()
}

/// Concatenated descendant text, unnormalized.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Normalized text of the first match, `None` when absent or empty.
pub fn text_of(root: ElementRef<'_>, css: &str) -> Option<String> {
    first(root, css)
        .map(|el| text::normalize(&text(el)))
        .and_then(text::non_empty)
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// How to flatten a subtree into plain text.
#[derive(Default)]
pub struct Projection<'s> {
    /// Elements read as their own text with no block separation (emphasis, search hits).
    pub inline: &'s str,
    /// Elements dropped from the reading entirely (citations, audio buttons).
    pub skip: &'s str,
}

struct Compiled {
    inline: Option<Selector>,
    skip: Option<Selector>,
}

impl Projection<'_> {
    fn compile(&self) -> Compiled {
        let opt = |css: &str| if css.is_empty() { None } else { selector(css) };
        Compiled {
            inline: opt(self.inline),
            skip: opt(self.skip),
        }
    }
}

/// Plain-text view of `el` under `projection`, normalized.
pub fn plain_text(el: ElementRef<'_>, projection: &Projection<'_>) -> String {
    let compiled = projection.compile();
    let mut out = String::new();
    for child in el.children() {
        if let Some(t) = child.value().as_text() {
            out.push_str(t);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            project_into(child_el, &compiled, &mut out);
        }
    }
    text::normalize(&out)
}

fn project_into(el: ElementRef<'_>, compiled: &Compiled, out: &mut String) {
    let matches = |sel: &Option<Selector>| sel.as_ref().is_some_and(|s| s.matches(&el));

    if matches(&compiled.skip) {
        return;
    }
    if matches(&compiled.inline) {
        out.extend(el.text());
        return;
    }

    let block = BLOCK_TAGS.contains(&el.value().name());
    if block {
        out.push(' ');
    }
    for child in el.children() {
        if let Some(t) = child.value().as_text() {
            out.push_str(t);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            project_into(child_el, compiled, out);
        }
    }
    if block {
        out.push(' ');
    }
}
