use crate::error::Result;
use crate::lexicon_metadata::LexiconMetadata;
use crate::raw_analysis::RawAnalysis;

/// Trait reprezentujący analizator morfologiczny, który dla danego słowa
/// zwraca kandydujące analizy (lemat, rdzeń, segmentację na klityki i afiksy).
pub trait Analyzer {
    /// Zwraca kandydujące analizy słowa.
    ///
    /// Kolejność wyników jest deterministyczna i ma znaczenie: orkiestrator
    /// zachowuje ją przy deduplikacji. Pusty wektor oznacza nieznane słowo.
    fn check_word(&self, word: &str) -> Result<Vec<RawAnalysis>>;

    /// Zwraca metadane leksykonu używanego przez ten analizator.
    fn get_lexicon_metadata(&self) -> &LexiconMetadata;
}
