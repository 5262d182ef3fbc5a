// Główny plik biblioteki analex-core
pub mod analyzer_trait;
pub mod error;
pub mod lexicon;
pub mod lexicon_lookup;
pub mod lexicon_metadata;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod raw_analysis;
pub mod segmenter;

pub use analyzer_trait::Analyzer;
pub use error::{AnalysisError, Result};
pub use orchestrator::{analyze, AnalysisRecord, MAX_ANALYSES};
pub use raw_analysis::{AnalysisField, RawAnalysis};
