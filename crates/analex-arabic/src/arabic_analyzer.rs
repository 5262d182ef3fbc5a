// Definicja struktury ArabicAnalyzer i jej implementacje

use std::path::Path;
use std::sync::Arc;

use analex_core::analyzer_trait::Analyzer;
use analex_core::error::{AnalysisError, Result};
use analex_core::lexicon::Lexicon;
use analex_core::lexicon_lookup::LexiconLookup;
use analex_core::lexicon_metadata::LexiconMetadata;
use analex_core::raw_analysis::RawAnalysis;

const EMBEDDED_ARABIC_LEX_BYTES: &[u8] =
    include_bytes!("../resources/analex/arabic/arabic.lex");
const EMBEDDED_ARABIC_INFO_BYTES: &[u8] =
    include_bytes!("../resources/analex/arabic/arabic.info");

/// Analizator morfologiczny dla języka arabskiego.
#[derive(Debug, Clone)]
pub struct ArabicAnalyzer {
    lexicon_lookup: LexiconLookup,
}

impl ArabicAnalyzer {
    /// Tworzy analizator na podstawie leksykonu wkompilowanego w bibliotekę.
    pub fn new() -> Result<Self> {
        if EMBEDDED_ARABIC_LEX_BYTES.is_empty() {
            return Err(AnalysisError::LexiconConfigurationError(
                "Osadzony plik .lex jest pusty.".to_string(),
            ));
        }
        if EMBEDDED_ARABIC_INFO_BYTES.is_empty() {
            return Err(AnalysisError::LexiconConfigurationError(
                "Osadzony plik .info jest pusty.".to_string(),
            ));
        }

        let lexicon = Lexicon::from_embedded(EMBEDDED_ARABIC_LEX_BYTES, EMBEDDED_ARABIC_INFO_BYTES)?;
        if lexicon.is_empty() {
            return Err(AnalysisError::LexiconConfigurationError(
                "Osadzony leksykon nie zawiera żadnych wpisów.".to_string(),
            ));
        }
        log::debug!(
            "Embedded Arabic lexicon loaded ({} bytes, {} surface forms)",
            EMBEDDED_ARABIC_LEX_BYTES.len(),
            lexicon.len()
        );
        Ok(ArabicAnalyzer {
            lexicon_lookup: LexiconLookup::new(Arc::new(lexicon)),
        })
    }

    /// Tworzy analizator z leksykonu na dysku; plik `.info` musi leżeć obok.
    pub fn from_path<P: AsRef<Path>>(lexicon_file_path: P) -> Result<Self> {
        let path_ref = lexicon_file_path.as_ref();

        if !path_ref.exists() {
            return Err(AnalysisError::Io(format!(
                "Plik leksykonu arabskiego nie został znaleziony: {}",
                path_ref.display()
            )));
        }

        let info_path = Lexicon::get_info_file_path(path_ref);
        if !info_path.exists() {
            return Err(AnalysisError::MetadataNotFound(
                info_path.to_string_lossy().into_owned(),
            ));
        }

        let lexicon = Lexicon::from_file(path_ref)?;
        log::debug!("Arabic lexicon loaded from {}", path_ref.display());
        Ok(ArabicAnalyzer {
            lexicon_lookup: LexiconLookup::new(Arc::new(lexicon)),
        })
    }
}

impl Analyzer for ArabicAnalyzer {
    fn check_word(&self, word: &str) -> Result<Vec<RawAnalysis>> {
        self.lexicon_lookup.check_word(word)
    }

    fn get_lexicon_metadata(&self) -> &LexiconMetadata {
        self.lexicon_lookup.get_lexicon_metadata()
    }
}
