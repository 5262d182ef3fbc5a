// Moduły dla poszczególnych komend
pub mod analyze_word;
