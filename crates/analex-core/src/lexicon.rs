// Plik dla struktury Lexicon

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AnalysisError, Result};
use crate::lexicon_metadata::{LexiconColumn, LexiconMetadata};
use crate::normalize::strip_diacritics;
use crate::raw_analysis::RawAnalysis;

/// Leksykon morfologiczny: forma powierzchniowa rdzenia słowa (bez
/// diakrytyków) -> uporządkowana lista analiz zapisanych dla tej formy.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub entries: Arc<HashMap<String, Vec<RawAnalysis>>>,
    pub metadata: Arc<LexiconMetadata>,
}

impl Lexicon {
    pub fn from_file<P: AsRef<Path>>(lexicon_file_path: P) -> Result<Self> {
        let path_ref = lexicon_file_path.as_ref();

        let metadata = LexiconMetadata::from_lexicon_path(path_ref)?;

        let lexicon_file = File::open(path_ref).map_err(|e| {
            AnalysisError::Io(format!(
                "Failed to open lexicon file '{}': {}",
                path_ref.display(),
                e
            ))
        })?;

        Self::from_reader(BufReader::new(lexicon_file), metadata)
    }

    pub fn from_embedded(lexicon_bytes: &[u8], info_bytes: &[u8]) -> Result<Self> {
        let metadata = LexiconMetadata::from_bytes(info_bytes)?;
        Self::from_reader(BufReader::new(Cursor::new(lexicon_bytes)), metadata)
    }

    pub fn from_reader<R: BufRead>(reader: R, metadata: LexiconMetadata) -> Result<Self> {
        metadata.ensure_utf8()?;
        let separator = metadata.get_separator()?;
        let columns = metadata.get_columns()?;

        let mut entries: HashMap<String, Vec<RawAnalysis>> = HashMap::new();
        let mut count = 0usize;

        for (index, line_res) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line_res.map_err(|e| AnalysisError::Io(format!("Error reading lexicon line {}: {}", line_no, e)))?;

            // Separatorem bywa tabulator, więc nie przycinamy całej linii.
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let (key, analysis) = Self::parse_entry(&line, separator, &columns, line_no)?;
            entries.entry(key).or_default().push(analysis);
            count += 1;
        }

        log::debug!(
            "Loaded lexicon: {} analyses under {} surface forms",
            count,
            entries.len()
        );

        Ok(Lexicon {
            entries: Arc::new(entries),
            metadata: Arc::new(metadata),
        })
    }

    fn parse_entry(
        line: &str,
        separator: char,
        columns: &[LexiconColumn],
        line_no: usize,
    ) -> Result<(String, RawAnalysis)> {
        let cells: Vec<&str> = line.split(separator).collect();
        if cells.len() > columns.len() {
            return Err(AnalysisError::MalformedEntry {
                line: line_no,
                reason: format!("expected at most {} columns, found {}", columns.len(), cells.len()),
            });
        }

        let key = strip_diacritics(cells[0].trim());
        if key.is_empty() {
            return Err(AnalysisError::MalformedEntry {
                line: line_no,
                reason: "empty word column".to_string(),
            });
        }

        let mut analysis = RawAnalysis::new(key.clone());
        for (column, cell) in columns.iter().zip(cells.iter()).skip(1) {
            let cell = cell.trim();
            if let LexiconColumn::Field(field) = column {
                if !cell.is_empty() {
                    analysis.set(*field, cell);
                }
            }
        }
        Ok((key, analysis))
    }

    /// Analizy zapisane dla danej (znormalizowanej) formy.
    pub fn get(&self, surface: &str) -> &[RawAnalysis] {
        self.entries.get(surface).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_info_file_path<P: AsRef<Path>>(lexicon_file_path: P) -> PathBuf {
        lexicon_file_path.as_ref().with_extension("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw_analysis::AnalysisField;
    use assert_matches::assert_matches;
    use std::io::Write;

    const INFO: &str = "lexicon.separator = \\t\n\
                        lexicon.encoding = UTF-8\n\
                        lexicon.columns = word,lemma,root,vocalized,type";

    const LEX: &str = "# word\tlemma\troot\tvocalized\ttype\n\
                       قلم\tقَلَم\tقلم\tقَلَمٌ\tNoun:اسم\n\
                       \n\
                       علم\tعِلْم\tعلم\tعِلْمٌ\tNoun:اسم\n\
                       علم\tعَلِمَ\tعلم\tعَلِمَ\tVerb:فعل ماضي\n\
                       في\tفِي\n";

    fn write_lexicon(dir: &Path, stem: &str, lex: &str, info: Option<&str>) -> PathBuf {
        let lex_path = dir.join(format!("{}.lex", stem));
        let mut f = File::create(&lex_path).unwrap();
        f.write_all(lex.as_bytes()).unwrap();
        if let Some(info) = info {
            let mut f = File::create(Lexicon::get_info_file_path(&lex_path)).unwrap();
            f.write_all(info.as_bytes()).unwrap();
        }
        lex_path
    }

    #[test]
    fn test_lexicon_from_embedded() -> Result<()> {
        let lexicon = Lexicon::from_embedded(LEX.as_bytes(), INFO.as_bytes())?;

        assert_eq!(lexicon.len(), 3);
        let ilm = lexicon.get("علم");
        assert_eq!(ilm.len(), 2);
        assert_eq!(ilm[0].lemma(), "عِلْم");
        assert_eq!(ilm[1].get(AnalysisField::Type), "Verb:فعل ماضي");
        Ok(())
    }

    #[test]
    fn test_comment_only_lexicon_is_empty() -> Result<()> {
        let lexicon = Lexicon::from_embedded("# word\tlemma\n\n".as_bytes(), INFO.as_bytes())?;
        assert!(lexicon.is_empty());
        assert!(!Lexicon::from_embedded(LEX.as_bytes(), INFO.as_bytes())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_short_rows_leave_fields_absent() -> Result<()> {
        let lexicon = Lexicon::from_embedded(LEX.as_bytes(), INFO.as_bytes())?;
        let fi = &lexicon.get("في")[0];
        assert_eq!(fi.lemma(), "فِي");
        assert!(!fi.contains(AnalysisField::Root));
        assert_eq!(fi.root(), "");
        Ok(())
    }

    #[test]
    fn test_word_column_is_normalized() -> Result<()> {
        let lexicon = Lexicon::from_embedded("كِتَاب\tكِتَاب".as_bytes(), INFO.as_bytes())?;
        assert_eq!(lexicon.get("كتاب").len(), 1);
        assert!(lexicon.get("كِتَاب").is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_surface_form() -> Result<()> {
        let lexicon = Lexicon::from_embedded(LEX.as_bytes(), INFO.as_bytes())?;
        assert!(lexicon.get("بيت").is_empty());
        Ok(())
    }

    #[test]
    fn test_too_many_cells_is_malformed() {
        let lex = "قلم\tقَلَم\tقلم\tقَلَمٌ\tNoun:اسم\tnadmiar";
        let result = Lexicon::from_embedded(lex.as_bytes(), INFO.as_bytes());
        assert_matches!(result, Err(AnalysisError::MalformedEntry { line: 1, .. }));
    }

    #[test]
    fn test_empty_word_is_malformed() {
        let lex = "قلم\tقَلَم\n\tقَلَم";
        let result = Lexicon::from_embedded(lex.as_bytes(), INFO.as_bytes());
        assert_matches!(result, Err(AnalysisError::MalformedEntry { line: 2, .. }));
    }

    #[test]
    fn test_unsupported_encoding_rejected() {
        let info = "lexicon.encoding = ISO-8859-6";
        let result = Lexicon::from_embedded(LEX.as_bytes(), info.as_bytes());
        assert_matches!(result, Err(AnalysisError::UnsupportedEncoding(_)));
    }

    #[test]
    fn test_lexicon_from_file() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        let lex_path = write_lexicon(temp_dir.path(), "test", LEX, Some(INFO));

        let lexicon = Lexicon::from_file(&lex_path)?;
        assert_eq!(lexicon.get("قلم")[0].root(), "قلم");
        assert_eq!(lexicon.metadata.get_separator()?, '\t');
        Ok(())
    }

    #[test]
    fn test_lexicon_from_file_missing_info() {
        let temp_dir = tempfile::tempdir().unwrap();
        let lex_path = write_lexicon(temp_dir.path(), "test", LEX, None);

        let result = Lexicon::from_file(&lex_path);
        assert_matches!(result, Err(AnalysisError::MetadataNotFound(_)));
    }

    #[test]
    fn test_lexicon_from_file_missing_lexicon() {
        let temp_dir = tempfile::tempdir().unwrap();
        let lex_path = temp_dir.path().join("brak.lex");
        let mut f = File::create(Lexicon::get_info_file_path(&lex_path)).unwrap();
        f.write_all(INFO.as_bytes()).unwrap();

        let result = Lexicon::from_file(&lex_path);
        assert_matches!(result, Err(AnalysisError::Io(_)));
    }
}
