// Plik dla struktury RawAnalysis

use std::collections::HashMap;
use std::fmt;

/// Pola analizy morfologicznej zwracane przez analizator.
///
/// Nazwy kluczy `procletic` i `encletic` zachowują historyczną pisownię
/// używaną w formacie wyjściowym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisField {
    Lemma,
    Root,
    Original,
    Vocalized,
    Procletic,
    Prefix,
    Stem,
    Suffix,
    Encletic,
    Type,
    Action,
}

impl AnalysisField {
    /// Wszystkie pola w kolejności, w jakiej pojawiają się na wyjściu.
    pub const ALL: [AnalysisField; 11] = [
        AnalysisField::Lemma,
        AnalysisField::Root,
        AnalysisField::Original,
        AnalysisField::Vocalized,
        AnalysisField::Procletic,
        AnalysisField::Prefix,
        AnalysisField::Stem,
        AnalysisField::Suffix,
        AnalysisField::Encletic,
        AnalysisField::Type,
        AnalysisField::Action,
    ];

    pub fn key_name(&self) -> &'static str {
        match self {
            AnalysisField::Lemma => "lemma",
            AnalysisField::Root => "root",
            AnalysisField::Original => "original",
            AnalysisField::Vocalized => "vocalized",
            AnalysisField::Procletic => "procletic",
            AnalysisField::Prefix => "prefix",
            AnalysisField::Stem => "stem",
            AnalysisField::Suffix => "suffix",
            AnalysisField::Encletic => "encletic",
            AnalysisField::Type => "type",
            AnalysisField::Action => "action",
        }
    }

    pub fn from_key_name(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key_name() == key)
    }
}

/// Pojedyncza kandydująca analiza słowa zwrócona przez analizator.
///
/// Przechowuje analizowane słowo oraz mapę pól. Brakujące pole nie jest
/// błędem: `get` zwraca wtedy pusty napis, więc odczyt jest zawsze
/// bezpieczny, niezależnie od tego, co dostarczył analizator.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct RawAnalysis {
    /// Słowo, dla którego powstała analiza.
    word: String,
    fields: HashMap<AnalysisField, String>,
}

impl RawAnalysis {
    /// Tworzy analizę bez żadnych pól.
    pub fn new(word: impl Into<String>) -> Self {
        RawAnalysis {
            word: word.into(),
            fields: HashMap::new(),
        }
    }

    /// Wariant budujący dla `set`.
    pub fn with(mut self, field: AnalysisField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    /// Zwraca wartość pola albo pusty napis, jeśli pole nie zostało ustawione.
    pub fn get(&self, field: AnalysisField) -> &str {
        self.fields.get(&field).map_or("", |s| s.as_str())
    }

    /// Czy pole zostało jawnie ustawione (także na pusty napis).
    pub fn contains(&self, field: AnalysisField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn set(&mut self, field: AnalysisField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn lemma(&self) -> &str {
        self.get(AnalysisField::Lemma)
    }

    pub fn root(&self) -> &str {
        self.get(AnalysisField::Root)
    }
}

// Debug wypisuje pola w stałej kolejności, a nie w kolejności HashMapy.
impl fmt::Debug for RawAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RawAnalysis");
        s.field("word", &self.word);
        for field in AnalysisField::ALL {
            if let Some(value) = self.fields.get(&field) {
                s.field(field.key_name(), value);
            }
        }
        s.finish()
    }
}

/// Formatuje podobnie do `WordData[word, lemma, root, type]`.
impl fmt::Display for RawAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_null = |field: AnalysisField| self.fields.get(&field).map_or("null", |s| s.as_str());
        write!(
            f,
            "RawAnalysis[{}, {}, {}, {}]",
            self.word,
            or_null(AnalysisField::Lemma),
            or_null(AnalysisField::Root),
            or_null(AnalysisField::Type)
        )
    }
}
