// Segmentacja słowa na proklityk + rdzeń + enklityk.
//
// Dla każdego słowa generujemy wszystkie dopuszczalne podziały (a nie jeden
// "najlepszy"); o tym, który podział ma sens, decyduje dopiero wpis w
// leksykonie i jego kategoria.

/// Rodzaj proklityku, od którego zależy, do jakich wyrazów może się przyłączyć.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcliticClass {
    None,
    /// و / ف
    Conjunction,
    /// ب / ك / ل, także poprzedzone spójnikiem
    Preposition,
    /// س, partykuła czasu przyszłego
    Future,
    /// rodzajnik ال z ewentualnym spójnikiem lub przyimkiem
    Definite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proclitic {
    pub text: &'static str,
    pub vocalized: &'static str,
    pub class: ProcliticClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enclitic {
    pub text: &'static str,
    pub vocalized: &'static str,
}

const fn proclitic(text: &'static str, vocalized: &'static str, class: ProcliticClass) -> Proclitic {
    Proclitic { text, vocalized, class }
}

const fn enclitic(text: &'static str, vocalized: &'static str) -> Enclitic {
    Enclitic { text, vocalized }
}

// Kolejność tabel wyznacza kolejność wyników.
pub const PROCLITICS: &[Proclitic] = &[
    proclitic("", "", ProcliticClass::None),
    proclitic("و", "وَ", ProcliticClass::Conjunction),
    proclitic("ف", "فَ", ProcliticClass::Conjunction),
    proclitic("ب", "بِ", ProcliticClass::Preposition),
    proclitic("ك", "كَ", ProcliticClass::Preposition),
    proclitic("ل", "لِ", ProcliticClass::Preposition),
    proclitic("وب", "وَبِ", ProcliticClass::Preposition),
    proclitic("فب", "فَبِ", ProcliticClass::Preposition),
    proclitic("ول", "وَلِ", ProcliticClass::Preposition),
    proclitic("س", "سَ", ProcliticClass::Future),
    proclitic("وس", "وَسَ", ProcliticClass::Future),
    proclitic("فس", "فَسَ", ProcliticClass::Future),
    proclitic("ال", "الْ", ProcliticClass::Definite),
    proclitic("وال", "وَالْ", ProcliticClass::Definite),
    proclitic("فال", "فَالْ", ProcliticClass::Definite),
    proclitic("بال", "بِالْ", ProcliticClass::Definite),
    proclitic("كال", "كَالْ", ProcliticClass::Definite),
    proclitic("لل", "لِلْ", ProcliticClass::Definite),
];

pub const ENCLITICS: &[Enclitic] = &[
    enclitic("", ""),
    enclitic("ه", "هُ"),
    enclitic("ها", "هَا"),
    enclitic("هما", "هُمَا"),
    enclitic("هم", "هُمْ"),
    enclitic("هن", "هُنَّ"),
    enclitic("ك", "كَ"),
    enclitic("كما", "كُمَا"),
    enclitic("كم", "كُمْ"),
    enclitic("كن", "كُنَّ"),
    enclitic("ني", "نِي"),
    enclitic("ي", "ي"),
    enclitic("نا", "نَا"),
];

/// Minimalna liczba liter rdzenia, gdy odcięto jakikolwiek klityk.
pub const MIN_STEM_CHARS: usize = 2;

const TA_MARBUTA: char = 'ة';
const TA: char = 'ت';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub proclitic: Proclitic,
    pub stem: String,
    pub enclitic: Enclitic,
}

impl Segmentation {
    pub fn is_bare(&self) -> bool {
        self.proclitic.text.is_empty() && self.enclitic.text.is_empty()
    }
}

/// Wylicza podziały znormalizowanego słowa. Pierwszy zawsze jest podział
/// bez klityków.
pub fn segment(word: &str) -> Vec<Segmentation> {
    let mut result = Vec::new();
    if word.is_empty() {
        return result;
    }

    for p in PROCLITICS {
        let Some(rest) = word.strip_prefix(p.text) else {
            continue;
        };
        for e in ENCLITICS {
            let Some(stem) = rest.strip_suffix(e.text) else {
                continue;
            };
            let seg = Segmentation {
                proclitic: *p,
                stem: stem.to_string(),
                enclitic: *e,
            };
            if !seg.is_bare() && stem.chars().count() < MIN_STEM_CHARS {
                continue;
            }
            result.push(seg);

            // Przed enklitykiem ة przechodzi w ت: كتابته = كتابة + ه
            if !e.text.is_empty() {
                if let Some(base) = stem.strip_suffix(TA) {
                    let mut restored = base.to_string();
                    restored.push(TA_MARBUTA);
                    result.push(Segmentation {
                        proclitic: *p,
                        stem: restored,
                        enclitic: *e,
                    });
                }
            }
        }
    }
    result
}

/// Kategoria wpisu leksykonu, odczytywana z pola `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryCategory {
    Noun,
    Verb,
    Stopword,
    Other,
}

impl EntryCategory {
    pub fn from_type(entry_type: &str) -> Self {
        if entry_type.starts_with("Noun") {
            EntryCategory::Noun
        } else if entry_type.starts_with("Verb") {
            EntryCategory::Verb
        } else if entry_type.eq_ignore_ascii_case("STOPWORD") {
            EntryCategory::Stopword
        } else {
            EntryCategory::Other
        }
    }

    /// Czy wyraz tej kategorii przyjmuje dane klityki.
    pub fn accepts(&self, seg: &Segmentation) -> bool {
        let has_enclitic = !seg.enclitic.text.is_empty();
        match (self, seg.proclitic.class) {
            (_, ProcliticClass::None) | (_, ProcliticClass::Conjunction) => {
                !has_enclitic || *self != EntryCategory::Other
            }
            (EntryCategory::Noun, ProcliticClass::Preposition) => true,
            // rodzajnik i zaimek dzierżawczy wykluczają się
            (EntryCategory::Noun, ProcliticClass::Definite) => !has_enclitic,
            (EntryCategory::Verb, ProcliticClass::Future) => true,
            _ => false,
        }
    }
}

fn is_tanwin(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{064D}')
}

/// Składa formę wokalizowaną: proklityk + rdzeń + enklityk.
///
/// Rodzajnik i enklityk usuwają tanwin z końca rdzenia, a enklityk dodatkowo
/// zamienia końcowe ة na ت.
pub fn vocalize(seg: &Segmentation, stem_vocalized: &str) -> String {
    let mut stem = stem_vocalized.to_string();
    let has_enclitic = !seg.enclitic.text.is_empty();

    if has_enclitic || seg.proclitic.class == ProcliticClass::Definite {
        while stem.ends_with(is_tanwin) {
            stem.pop();
        }
    }
    if has_enclitic && stem.ends_with(TA_MARBUTA) {
        stem.pop();
        stem.push(TA);
    }

    let mut out = String::with_capacity(
        seg.proclitic.vocalized.len() + stem.len() + seg.enclitic.vocalized.len(),
    );
    out.push_str(seg.proclitic.vocalized);
    out.push_str(&stem);
    out.push_str(seg.enclitic.vocalized);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems(word: &str) -> Vec<(String, &'static str, &'static str)> {
        segment(word)
            .into_iter()
            .map(|s| (s.stem, s.proclitic.text, s.enclitic.text))
            .collect()
    }

    #[test]
    fn test_bare_segmentation_comes_first() {
        let segs = segment("كتب");
        assert!(segs[0].is_bare());
        assert_eq!(segs[0].stem, "كتب");
    }

    #[test]
    fn test_empty_word_has_no_segmentations() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_single_letter_word_is_kept_bare() {
        let segs = segment("و");
        assert_eq!(segs.len(), 1);
        assert!(segs[0].is_bare());
    }

    #[test]
    fn test_conjunction_and_definite_article() {
        let found = stems("والكتاب");
        assert!(found.contains(&("الكتاب".to_string(), "و", "")));
        assert!(found.contains(&("كتاب".to_string(), "وال", "")));
    }

    #[test]
    fn test_stem_too_short_after_stripping() {
        // ب + ه zostawia jedną literę
        let found = stems("بته");
        assert!(!found.iter().any(|(stem, p, e)| stem == "ت" && *p == "ب" && *e == "ه"));
    }

    #[test]
    fn test_ta_marbuta_restored_before_enclitic() {
        let found = stems("كتابته");
        assert!(found.contains(&("كتابت".to_string(), "", "ه")));
        assert!(found.contains(&("كتابة".to_string(), "", "ه")));
    }

    #[test]
    fn test_entry_category_from_type() {
        assert_eq!(EntryCategory::from_type("Noun:اسم"), EntryCategory::Noun);
        assert_eq!(EntryCategory::from_type("Verb:فعل ماضي"), EntryCategory::Verb);
        assert_eq!(EntryCategory::from_type("STOPWORD"), EntryCategory::Stopword);
        assert_eq!(EntryCategory::from_type(""), EntryCategory::Other);
    }

    #[test]
    fn test_category_accepts() {
        let seg = |p: &str, e: &str| {
            segment(&format!("{}كتاب{}", p, e))
                .into_iter()
                .find(|s| s.stem == "كتاب" && s.proclitic.text == p && s.enclitic.text == e)
                .unwrap()
        };

        assert!(EntryCategory::Noun.accepts(&seg("ال", "")));
        assert!(!EntryCategory::Noun.accepts(&seg("ال", "ه")));
        assert!(EntryCategory::Noun.accepts(&seg("ب", "ه")));
        assert!(!EntryCategory::Verb.accepts(&seg("ال", "")));
        assert!(!EntryCategory::Verb.accepts(&seg("ب", "")));
        assert!(EntryCategory::Verb.accepts(&seg("س", "")));
        assert!(EntryCategory::Verb.accepts(&seg("و", "ه")));
        assert!(!EntryCategory::Noun.accepts(&seg("س", "")));
        assert!(EntryCategory::Stopword.accepts(&seg("و", "")));
        assert!(!EntryCategory::Stopword.accepts(&seg("ب", "")));
        assert!(!EntryCategory::Other.accepts(&seg("", "ه")));
    }

    #[test]
    fn test_vocalize() {
        let segs = segment("وكتابته");
        let seg = segs
            .iter()
            .find(|s| s.stem == "كتابة" && s.proclitic.text == "و" && s.enclitic.text == "ه")
            .unwrap();
        assert_eq!(vocalize(seg, "كِتَابَةٌ"), "وَكِتَابَتهُ");

        let segs = segment("الكتاب");
        let seg = segs.iter().find(|s| s.stem == "كتاب").unwrap();
        assert_eq!(vocalize(seg, "كِتَابٌ"), "الْكِتَاب");

        assert_eq!(vocalize(&segment("كتب")[0], "كَتَبَ"), "كَتَبَ");
    }
}
