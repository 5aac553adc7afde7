use scraper::ElementRef;

use crate::parser::dom;
use crate::parser::markers::youdao;
use crate::record::DictionaryRecord;

/// Typo page: the message is the whole record, whatever else the page holds.
pub fn extract(root: ElementRef<'_>, record: &mut DictionaryRecord) {
    record.list = dom::text_of(root, youdao::TYPO);
}
