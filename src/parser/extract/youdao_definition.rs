use scraper::ElementRef;

use crate::parser::dom::{self, Projection};
use crate::parser::markers::youdao;
use crate::parser::text;
use crate::record::DictionaryRecord;

pub fn extract(root: ElementRef<'_>, record: &mut DictionaryRecord) {
    record.title = dom::text_of(root, youdao::KEYWORD);
    record.stars = stars(root);
    record.rank = dom::text_of(root, youdao::RANK);
    record.pattern = dom::text_of(root, youdao::PATTERN);
    record.prons = text::non_empty(normalized_items(root, youdao::PRONOUNCE).join(" "));
    record.basic = normalized_items(root, youdao::BASIC);
    record.discrimination = dom::text_of(root, youdao::DISCRIMINATE);
    record.sentence = sentences(root);
    record.translation = dom::nth(root, youdao::FANYI_PARAGRAPH, youdao::FANYI_POSITION)
        .map(|p| text::normalize(&dom::text(p)))
        .and_then(text::non_empty);
}

/// Digits out of the rating element's class list, e.g. `star star4` → 4.
fn stars(root: ElementRef<'_>) -> u32 {
    dom::first(root, youdao::STAR)
        .and_then(|el| dom::attr(el, "class"))
        .and_then(text::first_number)
        .unwrap_or(0)
        .min(youdao::MAX_STARS)
}

fn normalized_items(root: ElementRef<'_>, css: &str) -> Vec<String> {
    dom::select(root, css)
        .into_iter()
        .map(|el| text::normalize(&dom::text(el)))
        .filter(|s| !s.is_empty())
        .collect()
}

/// One line per bilingual example, citation appended in parentheses.
fn sentences(root: ElementRef<'_>) -> Vec<String> {
    let projection = Projection {
        inline: youdao::EMPHASIS,
        skip: youdao::VIA,
    };
    dom::select(root, youdao::SENTENCE)
        .into_iter()
        .filter_map(|li| {
            let body = dom::plain_text(li, &projection);
            let via = dom::text_of(li, youdao::VIA);
            match (body.is_empty(), via) {
                (true, _) => None,
                (false, Some(via)) => Some(format!("{} ({})", body, via)),
                (false, None) => Some(body),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dom::Page;

    fn run(body: &str) -> DictionaryRecord {
        let page = Page::parse(&format!("<html><body>{}</body></html>", body));
        let mut record = DictionaryRecord::default();
        extract(page.root(), &mut record);
        record
    }

    #[test]
    fn star_rating_from_class() {
        assert_eq!(run(r#"<span class="star star4"></span>"#).stars, 4);
        assert_eq!(run(r#"<span class="star"></span>"#).stars, 0);
        assert_eq!(run("<p>no rating</p>").stars, 0);
    }

    #[test]
    fn star_rating_capped() {
        assert_eq!(run(r#"<span class="star star4000000000"></span>"#).stars, 5);
    }

    #[test]
    fn pronunciations_space_joined() {
        let body = r#"<span class="pronounce">英
            <span class="phonetic">[həˈləʊ]</span></span>
            <span class="pronounce"> </span>
            <span class="pronounce">美 <span class="phonetic">[həˈloʊ]</span></span>"#;
        assert_eq!(run(body).prons.as_deref(), Some("英 [həˈləʊ] 美 [həˈloʊ]"));
    }

    #[test]
    fn sentences_carry_citation() {
        let body = r#"<div id="bilingual"><ul class="ol">
            <li><p>Say <b>hello</b> to him.</p><p>向他问好。</p><p class="example-via"><a>《柯林斯英汉双解大词典》</a></p></li>
            <li><p>Plain line.</p></li>
            <li><p class="example-via"><a>orphan</a></p></li>
        </ul></div>"#;
        assert_eq!(
            run(body).sentence,
            vec![
                "Say hello to him. 向他问好。 (《柯林斯英汉双解大词典》)".to_string(),
                "Plain line.".to_string(),
            ]
        );
    }

    #[test]
    fn translation_is_second_paragraph() {
        let body = r#"<div id="fanyiToggle"><div class="trans-container">
            <p>good morning everyone</p><p> 大家早上好 </p><p>以上为机器翻译结果</p>
        </div></div>"#;
        let r = run(body);
        assert_eq!(r.translation.as_deref(), Some("大家早上好"));
        assert!(!r.is_hit());
    }

    #[test]
    fn empty_page_yields_default_record() {
        assert_eq!(run("<div>unrelated</div>"), DictionaryRecord::default());
    }

    #[test]
    fn whitespace_only_markers_yield_nothing() {
        let body = r#"<div id="phrsListTab">
            <h2><span class="keyword">  </span><span class="pronounce"> </span></h2>
            <div class="trans-container"><ul><li> </li><li>
            </li></ul>
            <p class="pattern">  </p><p class="rank"> </p><span class="star"></span></div>
        </div>
        <div id="discriminate">
        </div>
        <div id="bilingual"><ul class="ol"><li><p> </p><p class="example-via"><a> </a></p></li></ul></div>
        <div id="fanyiToggle"><div class="trans-container"><p>hello</p><p>  </p></div></div>"#;
        assert_eq!(run(body), DictionaryRecord::default());
    }
}
