use scraper::ElementRef;

use crate::parser::dom;
use crate::parser::markers::bing;
use crate::parser::text;
use crate::record::{DictionaryRecord, Suggestion, SuggestionGroup};

/// "Did you mean" page: one group per area that actually lists candidates.
pub fn extract(root: ElementRef<'_>, record: &mut DictionaryRecord) {
    record.title = dom::text_of(root, bing::SUGGESTION_TITLE);
    record.defs = dom::select(root, bing::SUGGESTION_AREA)
        .into_iter()
        .filter(|area| dom::has(*area, bing::SUGGESTION_LIST))
        .map(|area| SuggestionGroup {
            title: dom::text_of(area, bing::SUGGESTION_AREA_TITLE),
            meanings: meanings(area),
        })
        .collect();
}

fn meanings(area: ElementRef<'_>) -> Vec<Suggestion> {
    dom::select(area, bing::SUGGESTION_ITEM)
        .into_iter()
        .filter_map(|item| {
            let word = dom::text_of(item, bing::SUGGESTION_WORD)?;
            let def = text::clean(&dom::text(dom::first(item, bing::SUGGESTION_DEF)?));
            if def.is_empty() {
                return None;
            }
            Some(Suggestion { word, def })
        })
        .collect()
}
