// Plik dla błędów specyficznych dla crate analex-core

use thiserror::Error;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Enum reprezentujący błędy, które mogą wystąpić podczas wczytywania leksykonu
/// i analizy morfologicznej słów.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Błąd wejścia/wyjścia, często związany z odczytem plików.
    #[error("Błąd I/O: {0}")]
    Io(String),

    /// Nie znaleziono pliku metadanych (`.info`).
    #[error("Nie znaleziono pliku metadanych: {0}")]
    MetadataNotFound(String),

    /// Nieprawidłowa wartość w pliku metadanych.
    #[error("Nieprawidłowa wartość w metadanych: {0}")]
    InvalidMetadataValue(String),

    /// Leksykon zadeklarował kodowanie inne niż UTF-8.
    #[error("Nieobsługiwane kodowanie leksykonu: {0}")]
    UnsupportedEncoding(String),

    /// Nazwa kolumny w `lexicon.columns` nie odpowiada żadnemu polu analizy.
    #[error("Nieznana kolumna leksykonu: {0}")]
    UnknownColumn(String),

    /// Wiersz leksykonu nie pasuje do zadeklarowanych kolumn.
    #[error("Nieprawidłowy wpis leksykonu w linii {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    /// Ogólny błąd konfiguracji leksykonu.
    #[error("Błąd konfiguracji leksykonu: {0}")]
    LexiconConfigurationError(String),

    /// Błąd serializacji wyników do JSON.
    #[error("Błąd serializacji: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Konwersja z std::io::Error, aby móc używać operatora `?` na operacjach I/O.
impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Io(err.to_string())
    }
}
