//! Every selector the classifier and extractors rely on.
//!
//! These track the live upstream layouts; when a page redesign breaks a
//! field this is the only file that should need to change.

pub mod bing {
    pub const DEFINITION: &str = ".qdef";
    pub const HEADWORD: &str = ".qdef .hd_div";
    pub const PRON_ITEM: &str = ".hd_p1_1 > div";
    pub const PHONETIC: &str = ".b_primtxt";
    pub const DEF_BAR: &str = ".qdef > ul > li";
    pub const DEF_POS: &str = ".pos";
    pub const DEF_TEXT: &str = ".def";
    pub const WORD_TAG: &str = ".web";
    pub const INFLECTION: &str = ".hd_if a";
    pub const SENTENCE: &str = "#sentenceSeg .se_li";
    pub const SENTENCE_EN: &str = ".sen_en";
    pub const SENTENCE_CN: &str = ".sen_cn";
    pub const SENTENCE_SOURCE: &str = ".sen_ime";
    pub const EMPHASIS: &str = ".b_regtxt, strong, b";
    /// Hard cap on worked examples taken from one page.
    pub const MAX_SENTENCES: usize = 4;

    pub const TRANSLATION_HEAD: &str = ".smt_hw";
    pub const TRANSLATION_BODY: &str = ".p1-11";

    pub const SUGGESTION_TITLE: &str = ".client_do_you_mean_title_bar";
    pub const SUGGESTION_AREA: &str = ".client_do_you_mean_area";
    pub const SUGGESTION_AREA_TITLE: &str = ".client_do_you_mean_title";
    pub const SUGGESTION_LIST: &str = ".client_do_you_mean_list";
    pub const SUGGESTION_ITEM: &str = ".client_do_you_mean_list > div";
    pub const SUGGESTION_WORD: &str = ".client_do_you_mean_list_word";
    pub const SUGGESTION_DEF: &str = ".client_do_you_mean_list_def";

    pub const NO_RESULT: &str = ".no_results";
}

pub mod youdao {
    pub const TYPO: &str = ".error-typo";
    pub const KEYWORD: &str = ".keyword";
    pub const STAR: &str = ".star";
    /// Ratings run from 1 to 5 stars.
    pub const MAX_STARS: u32 = 5;
    pub const RANK: &str = ".rank";
    pub const PATTERN: &str = ".pattern";
    pub const PRONOUNCE: &str = ".pronounce";
    pub const BASIC: &str = "#phrsListTab .trans-container li";
    pub const DISCRIMINATE: &str = "#discriminate";
    pub const SENTENCE: &str = "#bilingual ul.ol > li";
    pub const VIA: &str = ".example-via";
    pub const EMPHASIS: &str = "b";
    pub const FANYI_PARAGRAPH: &str = "#fanyiToggle .trans-container p";
    /// The first paragraph echoes the query; the translation follows it.
    pub const FANYI_POSITION: usize = 2;
}

pub mod transport {
    /// Message slot on the upstream's own HTML error page.
    pub const ERROR_MESSAGE: &str = ".sc_error";
}
