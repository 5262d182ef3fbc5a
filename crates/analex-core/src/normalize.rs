/// Znaki harakat (fatha, damma, kasra, tanwin, shadda, sukun) i alif chandżari.
fn is_diacritic(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

const TATWEEL: char = '\u{0640}';

/// Usuwa diakrytyki i tatwil, zostawiając sam szkielet spółgłoskowy.
pub fn strip_diacritics(text: &str) -> String {
    text.chars()
        .filter(|&ch| !is_diacritic(ch) && ch != TATWEEL)
        .collect()
}

/// Normalizacja słowa wejściowego przed wyszukiwaniem w leksykonie.
pub fn normalize(word: &str) -> String {
    strip_diacritics(word.trim())
}
