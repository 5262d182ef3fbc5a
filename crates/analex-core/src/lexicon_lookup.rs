// Plik dla struktury LexiconLookup

use std::sync::Arc;

use crate::analyzer_trait::Analyzer;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::lexicon_metadata::LexiconMetadata;
use crate::normalize::normalize;
use crate::raw_analysis::{AnalysisField, RawAnalysis};
use crate::segmenter::{segment, vocalize, EntryCategory, Segmentation};

/// Analizator oparty na leksykonie: dzieli słowo na klityki i szuka rdzenia
/// w leksykonie.
#[derive(Debug, Clone)]
pub struct LexiconLookup {
    lexicon: Arc<Lexicon>,
}

impl LexiconLookup {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        LexiconLookup { lexicon }
    }

    fn build_analysis(word: &str, seg: &Segmentation, entry: &RawAnalysis) -> RawAnalysis {
        let mut analysis = entry.clone();
        analysis.set_word(word);

        let stem_vocalized = match entry.get(AnalysisField::Vocalized) {
            "" => seg.stem.as_str(),
            v => v,
        };
        analysis.set(AnalysisField::Vocalized, vocalize(seg, stem_vocalized));
        analysis.set(AnalysisField::Procletic, seg.proclitic.text);
        analysis.set(AnalysisField::Encletic, seg.enclitic.text);
        analysis
    }
}

impl Analyzer for LexiconLookup {
    fn check_word(&self, word: &str) -> Result<Vec<RawAnalysis>> {
        let mut analyses = Vec::new();

        let normalized = normalize(word);
        if normalized.is_empty() {
            return Ok(analyses);
        }

        let segmentations = segment(&normalized);
        for seg in &segmentations {
            for entry in self.lexicon.get(&seg.stem) {
                let category = EntryCategory::from_type(entry.get(AnalysisField::Type));
                if category.accepts(seg) {
                    analyses.push(Self::build_analysis(word, seg, entry));
                }
            }
        }

        log::debug!(
            "check_word('{}'): {} segmentations, {} analyses",
            word,
            segmentations.len(),
            analyses.len()
        );
        Ok(analyses)
    }

    fn get_lexicon_metadata(&self) -> &LexiconMetadata {
        &self.lexicon.metadata
    }
}
