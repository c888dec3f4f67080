//! Per-language pitch name rendering
//!
//! Spelling follows the LilyPond note-name conventions of each language.
//! The whole table is built once behind a `Lazy` and shared read-only.
//!
//! Lookup has NO fallback: an absent (language, pitch) entry renders as an
//! empty name, never an error, so an incomplete spelling table cannot abort
//! a translation. Several languages deliberately leave their microtonal
//! and triple-alteration slots empty.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::pitch::{AlterationKind, DiatonicPitch, QuarterTonesPitch};

/// The twelve supported spelling languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageKind {
    Nederlands,
    Catalan,
    Deutsch,
    English,
    Espanol,
    Francais,
    Italiano,
    Norsk,
    Portugues,
    Suomi,
    Svenska,
    Vlaams,
}

impl LanguageKind {
    pub const ALL: [LanguageKind; 12] = [
        LanguageKind::Nederlands,
        LanguageKind::Catalan,
        LanguageKind::Deutsch,
        LanguageKind::English,
        LanguageKind::Espanol,
        LanguageKind::Francais,
        LanguageKind::Italiano,
        LanguageKind::Norsk,
        LanguageKind::Portugues,
        LanguageKind::Suomi,
        LanguageKind::Svenska,
        LanguageKind::Vlaams,
    ];

    /// Lowercase key as used by caller-facing options ("nederlands", ...)
    pub fn key(self) -> &'static str {
        match self {
            LanguageKind::Nederlands => "nederlands",
            LanguageKind::Catalan => "catalan",
            LanguageKind::Deutsch => "deutsch",
            LanguageKind::English => "english",
            LanguageKind::Espanol => "espanol",
            LanguageKind::Francais => "francais",
            LanguageKind::Italiano => "italiano",
            LanguageKind::Norsk => "norsk",
            LanguageKind::Portugues => "portugues",
            LanguageKind::Suomi => "suomi",
            LanguageKind::Svenska => "svenska",
            LanguageKind::Vlaams => "vlaams",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.key() == key)
    }
}

impl fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One language's spelling scheme: base syllables in C-scale order, one
/// suffix per alteration level (None leaves the slot out of the table), and
/// irregular spellings patched in after suffixing.
struct SpellingScheme {
    language: LanguageKind,
    bases: [&'static str; 7],
    // TripleFlat .. TripleSharp, same order as AlterationKind::ALL
    suffixes: [Option<&'static str>; 11],
    overrides: &'static [(DiatonicPitch, AlterationKind, &'static str)],
}

const LETTERS: [&str; 7] = ["c", "d", "e", "f", "g", "a", "b"];
const SOLFEGE: [&str; 7] = ["do", "re", "mi", "fa", "sol", "la", "si"];

// Dutch contractions: the e/a flats swallow the leading vowel
const DUTCH_CONTRACTIONS: [(DiatonicPitch, AlterationKind, &'static str); 4] = [
    (DiatonicPitch::A, AlterationKind::Flat, "as"),
    (DiatonicPitch::A, AlterationKind::DoubleFlat, "ases"),
    (DiatonicPitch::E, AlterationKind::Flat, "es"),
    (DiatonicPitch::E, AlterationKind::DoubleFlat, "eses"),
];

const DEUTSCH_OVERRIDES: [(DiatonicPitch, AlterationKind, &'static str); 7] = [
    (DiatonicPitch::A, AlterationKind::Flat, "as"),
    (DiatonicPitch::A, AlterationKind::DoubleFlat, "asas"),
    (DiatonicPitch::E, AlterationKind::Flat, "es"),
    (DiatonicPitch::E, AlterationKind::DoubleFlat, "eses"),
    (DiatonicPitch::B, AlterationKind::Natural, "h"),
    (DiatonicPitch::B, AlterationKind::Flat, "b"),
    (DiatonicPitch::B, AlterationKind::DoubleFlat, "heses"),
];

const NORDIC_OVERRIDES: [(DiatonicPitch, AlterationKind, &'static str); 6] = [
    (DiatonicPitch::A, AlterationKind::Flat, "ass"),
    (DiatonicPitch::E, AlterationKind::Flat, "ess"),
    (DiatonicPitch::B, AlterationKind::Natural, "h"),
    (DiatonicPitch::B, AlterationKind::Flat, "b"),
    (DiatonicPitch::B, AlterationKind::Sharp, "hiss"),
    (DiatonicPitch::B, AlterationKind::DoubleSharp, "hississ"),
];

const SUOMI_OVERRIDES: [(DiatonicPitch, AlterationKind, &'static str); 5] = [
    (DiatonicPitch::A, AlterationKind::Flat, "as"),
    (DiatonicPitch::E, AlterationKind::Flat, "es"),
    (DiatonicPitch::B, AlterationKind::Natural, "h"),
    (DiatonicPitch::B, AlterationKind::Flat, "b"),
    (DiatonicPitch::B, AlterationKind::Sharp, "his"),
];

fn schemes() -> Vec<SpellingScheme> {
    vec![
        SpellingScheme {
            language: LanguageKind::Nederlands,
            bases: LETTERS,
            suffixes: [
                Some("eseses"),
                Some("eses"),
                Some("eseh"),
                Some("es"),
                Some("eh"),
                Some(""),
                Some("ih"),
                Some("is"),
                Some("isih"),
                Some("isis"),
                Some("isisis"),
            ],
            overrides: &DUTCH_CONTRACTIONS,
        },
        SpellingScheme {
            language: LanguageKind::Catalan,
            bases: SOLFEGE,
            suffixes: [
                None,
                Some("bb"),
                None,
                Some("b"),
                None,
                Some(""),
                None,
                Some("d"),
                None,
                Some("dd"),
                None,
            ],
            overrides: &[],
        },
        SpellingScheme {
            language: LanguageKind::Deutsch,
            bases: LETTERS,
            suffixes: [
                None,
                Some("eses"),
                Some("eseh"),
                Some("es"),
                Some("eh"),
                Some(""),
                Some("ih"),
                Some("is"),
                Some("isih"),
                Some("isis"),
                None,
            ],
            overrides: &DEUTSCH_OVERRIDES,
        },
        SpellingScheme {
            language: LanguageKind::English,
            bases: LETTERS,
            suffixes: [
                Some("fff"),
                Some("ff"),
                Some("tqf"),
                Some("f"),
                Some("qf"),
                Some(""),
                Some("qs"),
                Some("s"),
                Some("tqs"),
                Some("ss"),
                Some("sss"),
            ],
            overrides: &[],
        },
        SpellingScheme {
            language: LanguageKind::Espanol,
            bases: SOLFEGE,
            suffixes: [
                None,
                Some("bb"),
                Some("tcb"),
                Some("b"),
                Some("cb"),
                Some(""),
                Some("cs"),
                Some("s"),
                Some("tcs"),
                Some("ss"),
                None,
            ],
            overrides: &[],
        },
        SpellingScheme {
            language: LanguageKind::Francais,
            bases: SOLFEGE,
            suffixes: [
                None,
                Some("bb"),
                Some("bsb"),
                Some("b"),
                Some("sb"),
                Some(""),
                Some("sd"),
                Some("d"),
                Some("dsd"),
                Some("dd"),
                None,
            ],
            overrides: &[],
        },
        SpellingScheme {
            language: LanguageKind::Italiano,
            bases: SOLFEGE,
            suffixes: [
                None,
                Some("bb"),
                Some("bsb"),
                Some("b"),
                Some("sb"),
                Some(""),
                Some("sd"),
                Some("d"),
                Some("dsd"),
                Some("dd"),
                None,
            ],
            overrides: &[],
        },
        // The four Nordic-family tables keep their microtonal slots empty on
        // purpose; renderers fall back to the empty sentinel there.
        SpellingScheme {
            language: LanguageKind::Norsk,
            bases: LETTERS,
            suffixes: [
                None,
                Some("essess"),
                None,
                Some("ess"),
                None,
                Some(""),
                None,
                Some("iss"),
                None,
                Some("ississ"),
                None,
            ],
            overrides: &NORDIC_OVERRIDES,
        },
        SpellingScheme {
            language: LanguageKind::Portugues,
            bases: SOLFEGE,
            suffixes: [
                None,
                Some("bb"),
                None,
                Some("b"),
                None,
                Some(""),
                None,
                Some("s"),
                None,
                Some("ss"),
                None,
            ],
            overrides: &[],
        },
        SpellingScheme {
            language: LanguageKind::Suomi,
            bases: LETTERS,
            suffixes: [
                None,
                Some("eses"),
                None,
                Some("es"),
                None,
                Some(""),
                None,
                Some("is"),
                None,
                Some("isis"),
                None,
            ],
            overrides: &SUOMI_OVERRIDES,
        },
        SpellingScheme {
            language: LanguageKind::Svenska,
            bases: LETTERS,
            suffixes: [
                None,
                Some("essess"),
                None,
                Some("ess"),
                None,
                Some(""),
                None,
                Some("iss"),
                None,
                Some("ississ"),
                None,
            ],
            overrides: &NORDIC_OVERRIDES,
        },
        SpellingScheme {
            language: LanguageKind::Vlaams,
            bases: SOLFEGE,
            suffixes: [
                None,
                Some("bb"),
                None,
                Some("b"),
                None,
                Some(""),
                None,
                Some("k"),
                None,
                Some("kk"),
                None,
            ],
            overrides: &[],
        },
    ]
}

type NameKey = (LanguageKind, DiatonicPitch, AlterationKind);

/// The full spelling table, built once on first use
static PITCH_NAMES: Lazy<HashMap<NameKey, String>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for scheme in schemes() {
        for (degree, diatonic) in DiatonicPitch::SCALE.iter().enumerate() {
            for (slot, alteration) in AlterationKind::ALL.iter().enumerate() {
                if let Some(suffix) = scheme.suffixes[slot] {
                    table.insert(
                        (scheme.language, *diatonic, *alteration),
                        format!("{}{}", scheme.bases[degree], suffix),
                    );
                }
            }
        }
        for &(diatonic, alteration, name) in scheme.overrides {
            table.insert((scheme.language, diatonic, alteration), name.to_string());
        }
    }
    log::debug!("pitch name table built: {} entries", table.len());
    table
});

/// Render a pitch name in the given language.
///
/// Returns the empty string for the unpitched sentinel and for any entry the
/// language's table does not cover.
pub fn pitch_name(pitch: QuarterTonesPitch, language: LanguageKind) -> &'static str {
    let (diatonic, alteration) = match pitch {
        QuarterTonesPitch::NoPitch => return "",
        QuarterTonesPitch::Pitch {
            diatonic,
            alteration,
        } => (diatonic, alteration),
    };
    match PITCH_NAMES.get(&(language, diatonic, alteration)) {
        Some(name) => name.as_str(),
        None => {
            log::debug!("no {language} spelling for {diatonic}{alteration:?}");
            ""
        }
    }
}
