use serde::Serialize;

/// One normalized lookup result. Optional fields are only ever `Some`
/// (or non-empty) when the upstream page actually carried that content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DictionaryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phsym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prons: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub stars: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cdef: Vec<ConciseDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub basic: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<Sentence>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sentence: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrimination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defs: Vec<SuggestionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConciseDef {
    pub pos: String,
    pub def: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    pub en: String,
    pub cn: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub meanings: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub def: String,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl DictionaryRecord {
    /// A record without a resolved headword is rendered as "No result".
    pub fn is_hit(&self) -> bool {
        self.title.is_some()
    }

    /// Whether anything at all is worth showing: a hit, a typo message,
    /// or a machine translation fallback.
    pub fn has_content(&self) -> bool {
        self.is_hit() || self.list.is_some() || self.translation.is_some() || !self.defs.is_empty()
    }
}
