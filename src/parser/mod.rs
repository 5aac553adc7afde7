pub mod classify;
pub mod dom;
pub mod extract;
pub mod markers;
pub mod text;

use tracing::debug;

use crate::record::DictionaryRecord;
use classify::Source;
use dom::Page;

/// Two-step pipeline: markup → shape → record.
pub fn lookup(markup: &str, source: Source) -> DictionaryRecord {
    let page = Page::parse(markup);
    let shape = classify::classify(page.root(), source);
    debug!("Classified {} response as {:?}", source, shape);
    extract::extract_shape(page.root(), source, shape)
}

// ── Tests ──
