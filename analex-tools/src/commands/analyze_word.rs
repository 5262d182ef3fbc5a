// Komenda analyze-word: jedno słowo na wejściu, tablica JSON na wyjściu.

use std::io::Write;

use analex_core::analyzer_trait::Analyzer;
use analex_core::orchestrator::analyze;
use analex_core::output::{write_json, ErrorPayload};

/// Kod wyjścia dla poprawnego przebiegu.
pub const EXIT_OK: u8 = 0;
/// Kod wyjścia, gdy nie podano słowa.
pub const EXIT_NO_WORD: u8 = 1;

/// Wypisuje analizę słowa do `out` i zwraca kod wyjścia procesu.
///
/// Analizator tworzy się dopiero, gdy słowo jest znane, więc brak argumentu
/// nie wymaga wczytywania leksykonu. Błędy analizatora nie są obsługiwane
/// tutaj, tylko zwracane wyżej.
pub fn run<A, F, W>(word: Option<&str>, make_analyzer: F, out: &mut W) -> anyhow::Result<u8>
where
    A: Analyzer,
    F: FnOnce() -> analex_core::Result<A>,
    W: Write,
{
    let Some(word) = word.filter(|w| !w.is_empty()) else {
        log::debug!("No word argument given");
        write_json(&mut *out, &ErrorPayload::no_word_provided())?;
        writeln!(out)?;
        return Ok(EXIT_NO_WORD);
    };

    let analyzer = make_analyzer()?;
    let analyses = analyze(&analyzer, word)?;
    write_json(&mut *out, &analyses)?;
    writeln!(out)?;
    Ok(EXIT_OK)
}
