// Główny plik dla crate analex-arabic

pub mod arabic_analyzer;
pub use arabic_analyzer::ArabicAnalyzer;
