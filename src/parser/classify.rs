use std::fmt;

use scraper::ElementRef;

use super::dom;
use super::markers::{bing, youdao};

/// Upstream dictionary service a page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Source {
    Bing,
    Youdao,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bing => f.write_str("bing"),
            Source::Youdao => f.write_str("youdao"),
        }
    }
}

/// Page layout a response was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTag {
    FullDefinition,
    MachineTranslation,
    Suggestions,
    Typo,
    NoMatch,
    Unknown,
}

/// Decide which layout `root` carries.
///
/// Bing markers are tested in a fixed order (definition, then machine
/// translation, then suggestions) and the first present one wins, even
/// when several coexist. That order mirrors how the live site nests its
/// blocks and should be re-checked whenever the layout changes.
///
/// Youdao only distinguishes its typo page; everything else goes to the
/// definition extractor, which leaves the record title-less when the
/// page had nothing to offer.
pub fn classify(root: ElementRef<'_>, source: Source) -> ShapeTag {
    match source {
        Source::Bing => {
            if dom::has(root, bing::DEFINITION) {
                ShapeTag::FullDefinition
            } else if dom::has(root, bing::TRANSLATION_HEAD) {
                ShapeTag::MachineTranslation
            } else if dom::has(root, bing::SUGGESTION_TITLE) {
                ShapeTag::Suggestions
            } else if dom::has(root, bing::NO_RESULT) {
                ShapeTag::NoMatch
            } else {
                ShapeTag::Unknown
            }
        }
        Source::Youdao => {
            if dom::has(root, youdao::TYPO) {
                ShapeTag::Typo
            } else {
                ShapeTag::FullDefinition
            }
        }
    }
}
