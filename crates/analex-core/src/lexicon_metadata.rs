// Metadane leksykonu, wczytywane z pliku `.info` leżącego obok pliku `.lex`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::error::{AnalysisError, Result};
use crate::raw_analysis::AnalysisField;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LexiconAttribute {
    Separator,
    Encoding,
    Columns,
    Language,
    License,
    Author,
}

impl LexiconAttribute {
    pub fn key_name(&self) -> &'static str {
        match self {
            LexiconAttribute::Separator => "lexicon.separator",
            LexiconAttribute::Encoding => "lexicon.encoding",
            LexiconAttribute::Columns => "lexicon.columns",
            LexiconAttribute::Language => "lexicon.language",
            LexiconAttribute::License => "license",
            LexiconAttribute::Author => "author",
        }
    }

    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "lexicon.separator" => Some(LexiconAttribute::Separator),
            "lexicon.encoding" => Some(LexiconAttribute::Encoding),
            "lexicon.columns" => Some(LexiconAttribute::Columns),
            "lexicon.language" => Some(LexiconAttribute::Language),
            "license" => Some(LexiconAttribute::License),
            "author" => Some(LexiconAttribute::Author),
            _ => None,
        }
    }
}

/// Kolumna pliku leksykonu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconColumn {
    /// Forma powierzchniowa (bez diakrytyków), po której wyszukujemy wpis.
    Word,
    Field(AnalysisField),
}

impl LexiconColumn {
    fn parse(name: &str) -> Result<Self> {
        if name == "word" {
            return Ok(LexiconColumn::Word);
        }
        AnalysisField::from_key_name(name)
            .map(LexiconColumn::Field)
            .ok_or_else(|| AnalysisError::UnknownColumn(name.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct LexiconMetadata {
    attributes: HashMap<String, String>,
}

impl LexiconMetadata {
    pub const DEFAULT_SEPARATOR: char = '\t';
    pub const DEFAULT_ENCODING: &'static str = "UTF-8";
    pub const DEFAULT_COLUMNS: &'static str =
        "word,lemma,root,original,vocalized,prefix,stem,suffix,type,action";

    pub fn new() -> Self {
        LexiconMetadata::default()
    }

    pub fn from_lexicon_path<P: AsRef<Path>>(lexicon_path: P) -> Result<Self> {
        let info_path = lexicon_path.as_ref().with_extension("info");

        if !info_path.exists() {
            return Err(AnalysisError::MetadataNotFound(
                info_path.to_string_lossy().into_owned(),
            ));
        }
        Self::from_info_file(&info_path)
    }

    pub fn from_info_file<P: AsRef<Path>>(info_file_path: P) -> Result<Self> {
        let file = File::open(info_file_path.as_ref()).map_err(|e| {
            AnalysisError::Io(format!(
                "Failed to open metadata file '{}': {}",
                info_file_path.as_ref().display(),
                e
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut attributes = HashMap::new();
        for line_res in reader.lines() {
            let line = line_res.map_err(|e| AnalysisError::Io(format!("Error reading metadata line: {}", e)))?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if LexiconAttribute::from_key_name(key).is_none() {
                    log::debug!("Ignoring unknown lexicon attribute '{}'", key);
                }
                attributes.insert(key.to_string(), value.trim().to_string());
            }
        }
        Ok(LexiconMetadata { attributes })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(BufReader::new(Cursor::new(bytes)))
    }

    pub fn get_string(&self, attribute: LexiconAttribute) -> Option<&String> {
        self.attributes.get(attribute.key_name())
    }

    /// Separator kolumn. Tabulator zapisuje się jako `\t`, bo wartości są
    /// przycinane z białych znaków.
    pub fn get_separator(&self) -> Result<char> {
        let Some(raw) = self.get_string(LexiconAttribute::Separator) else {
            return Ok(Self::DEFAULT_SEPARATOR);
        };
        if raw == "\\t" {
            return Ok('\t');
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(AnalysisError::InvalidMetadataValue(format!(
                "Invalid separator value: '{}'. Expected a single character.",
                raw
            ))),
        }
    }

    pub fn get_encoding(&self) -> &str {
        self.get_string(LexiconAttribute::Encoding)
            .map_or(Self::DEFAULT_ENCODING, |s| s.as_str())
    }

    /// Leksykony są czytane jako `&str`, więc dopuszczamy wyłącznie UTF-8.
    pub fn ensure_utf8(&self) -> Result<()> {
        let encoding = self.get_encoding();
        match encoding.to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(()),
            _ => Err(AnalysisError::UnsupportedEncoding(encoding.to_string())),
        }
    }

    /// Kolejność kolumn w pliku leksykonu. Pierwsza musi być `word`.
    pub fn get_columns(&self) -> Result<Vec<LexiconColumn>> {
        let raw = self
            .get_string(LexiconAttribute::Columns)
            .map_or(Self::DEFAULT_COLUMNS, |s| s.as_str());

        let columns = raw
            .split(',')
            .map(|name| LexiconColumn::parse(name.trim()))
            .collect::<Result<Vec<_>>>()?;

        if columns.first() != Some(&LexiconColumn::Word) {
            return Err(AnalysisError::InvalidMetadataValue(format!(
                "First lexicon column must be 'word', got: '{}'",
                raw
            )));
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(AnalysisError::InvalidMetadataValue(format!(
                    "Duplicate lexicon column {:?} in '{}'",
                    column, raw
                )));
            }
        }
        Ok(columns)
    }

    pub fn get_language(&self) -> Option<&str> {
        self.get_string(LexiconAttribute::Language).map(|s| s.as_str())
    }

    #[cfg(test)]
    pub fn set_attribute(&mut self, key: String, value: String) {
        self.attributes.insert(key, value);
    }

    #[cfg(test)]
    pub fn set(&mut self, attribute: LexiconAttribute, value: String) {
        self.attributes.insert(attribute.key_name().to_string(), value);
    }
}
