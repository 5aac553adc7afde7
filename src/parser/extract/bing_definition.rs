use scraper::ElementRef;

use crate::parser::dom::{self, Projection};
use crate::parser::markers::bing;
use crate::parser::text;
use crate::record::{ConciseDef, DictionaryRecord, Sentence};

pub fn extract(root: ElementRef<'_>, record: &mut DictionaryRecord) {
    record.title = dom::text_of(root, bing::HEADWORD);
    record.phsym = phonetics(root);
    record.cdef = concise_defs(root);
    record.infs = inflections(root);
    record.sentences = sentences(root);
}

/// Phonetic symbols of every pronunciation item, concatenated as-is.
fn phonetics(root: ElementRef<'_>) -> Option<String> {
    let joined: String = dom::select(root, bing::PRON_ITEM)
        .into_iter()
        .filter_map(|item| dom::text_of(item, bing::PHONETIC))
        .collect();
    text::non_empty(joined)
}

fn concise_defs(root: ElementRef<'_>) -> Vec<ConciseDef> {
    dom::select(root, bing::DEF_BAR)
        .into_iter()
        // web-tagged bars are cross references, not senses
        .filter(|bar| !dom::has(*bar, bing::WORD_TAG))
        .filter_map(|bar| {
            let pos = text::clean(&dom::text(dom::first(bar, bing::DEF_POS)?));
            let def = text::clean(&dom::text(dom::first(bar, bing::DEF_TEXT)?));
            if pos.is_empty() || def.is_empty() {
                return None;
            }
            Some(ConciseDef { pos, def })
        })
        .collect()
}

fn inflections(root: ElementRef<'_>) -> Option<String> {
    let forms: Vec<String> = dom::select(root, bing::INFLECTION)
        .into_iter()
        .map(|a| text::clean(&dom::text(a)))
        .filter(|s| !s.is_empty())
        .collect();
    text::non_empty(forms.join(", "))
}

fn sentences(root: ElementRef<'_>) -> Vec<Sentence> {
    let projection = Projection {
        inline: bing::EMPHASIS,
        skip: "",
    };
    let read = |item: ElementRef<'_>, css: &str| {
        dom::first(item, css)
            .map(|el| dom::plain_text(el, &projection))
            .unwrap_or_default()
    };

    dom::select(root, bing::SENTENCE)
        .into_iter()
        .map(|item| Sentence {
            en: read(item, bing::SENTENCE_EN),
            cn: read(item, bing::SENTENCE_CN),
            source: read(item, bing::SENTENCE_SOURCE),
        })
        .filter(|s| !(s.en.is_empty() && s.cn.is_empty()))
        .take(bing::MAX_SENTENCES)
        .collect()
}
