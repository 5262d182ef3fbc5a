// Orkiestracja analizy jednego słowa: wywołanie analizatora, deduplikacja
// po parze (lemat, rdzeń) i obcięcie do MAX_ANALYSES wyników.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analyzer_trait::Analyzer;
use crate::error::Result;
use crate::raw_analysis::{AnalysisField, RawAnalysis};

/// Maksymalna liczba zwracanych analiz.
pub const MAX_ANALYSES: usize = 10;

/// Analiza w postaci wyjściowej. Kolejność pól wyznacza kolejność kluczy w JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub lemma: String,
    pub root: String,
    pub original: String,
    pub vocalized: String,
    pub procletic: String,
    pub prefix: String,
    pub stem: String,
    pub suffix: String,
    pub encletic: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub action: String,
}

impl From<&RawAnalysis> for AnalysisRecord {
    fn from(raw: &RawAnalysis) -> Self {
        let field = |f: AnalysisField| raw.get(f).to_string();
        AnalysisRecord {
            lemma: field(AnalysisField::Lemma),
            root: field(AnalysisField::Root),
            original: field(AnalysisField::Original),
            vocalized: field(AnalysisField::Vocalized),
            procletic: field(AnalysisField::Procletic),
            prefix: field(AnalysisField::Prefix),
            stem: field(AnalysisField::Stem),
            suffix: field(AnalysisField::Suffix),
            encletic: field(AnalysisField::Encletic),
            kind: field(AnalysisField::Type),
            action: field(AnalysisField::Action),
        }
    }
}

/// Klucz deduplikacji: `lemat|rdzeń`.
pub fn analysis_key(raw: &RawAnalysis) -> String {
    format!("{}|{}", raw.lemma(), raw.root())
}

/// Analizuje słowo i zwraca co najwyżej `MAX_ANALYSES` analiz o różnych
/// parach (lemat, rdzeń), w kolejności pierwszego wystąpienia u analizatora.
///
/// Błędy analizatora są przekazywane dalej bez zmian.
pub fn analyze<A: Analyzer + ?Sized>(analyzer: &A, word: &str) -> Result<Vec<AnalysisRecord>> {
    let raw = analyzer.check_word(word)?;
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let mut seen = HashSet::new();
    let mut analyses = Vec::new();
    for r in &raw {
        if analyses.len() == MAX_ANALYSES {
            break;
        }
        if !seen.insert(analysis_key(r)) {
            continue;
        }
        analyses.push(AnalysisRecord::from(r));
    }

    log::debug!(
        "analyze('{}'): {} raw analyses, {} kept",
        word,
        raw.len(),
        analyses.len()
    );
    Ok(analyses)
}
