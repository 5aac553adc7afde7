use scraper::ElementRef;

use crate::parser::dom;
use crate::parser::markers::bing;
use crate::record::DictionaryRecord;

/// Machine translation fallback: only the translated sentence body is kept.
pub fn extract(root: ElementRef<'_>, record: &mut DictionaryRecord) {
    record.translation = dom::text_of(root, bing::TRANSLATION_BODY);
}
