pub mod bing_definition;
pub mod bing_suggestions;
pub mod bing_translation;
pub mod youdao_definition;
pub mod youdao_typo;

use scraper::ElementRef;
use tracing::debug;

use super::classify::{ShapeTag, Source};
use crate::record::DictionaryRecord;

/// Run the one extractor that owns `(source, shape)`. Shapes with no
/// extractor leave the record empty, which renders as "No result".
pub fn extract_shape(root: ElementRef<'_>, source: Source, shape: ShapeTag) -> DictionaryRecord {
    let mut record = DictionaryRecord::default();
    match (source, shape) {
        (Source::Bing, ShapeTag::FullDefinition) => bing_definition::extract(root, &mut record),
        (Source::Bing, ShapeTag::MachineTranslation) => bing_translation::extract(root, &mut record),
        (Source::Bing, ShapeTag::Suggestions) => bing_suggestions::extract(root, &mut record),
        (Source::Youdao, ShapeTag::Typo) => youdao_typo::extract(root, &mut record),
        (Source::Youdao, ShapeTag::FullDefinition) => youdao_definition::extract(root, &mut record),
        (source, shape) => debug!("No extractor for {:?} on {}", shape, source),
    }
    record
}
