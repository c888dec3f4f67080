// Per-language pitch spelling and model serialization

use pretty_assertions::assert_eq;

use notation_core::{
    pitch_name, AlterationKind, DiatonicPitch, LanguageKind, Measure, MeasureElement, Note,
    QuarterTonesPitch, Rational, Score,
};

fn p(diatonic: DiatonicPitch, alteration: AlterationKind) -> QuarterTonesPitch {
    QuarterTonesPitch::new(diatonic, alteration)
}

#[test]
fn test_c_sharp_across_languages() {
    let c_sharp = p(DiatonicPitch::C, AlterationKind::Sharp);
    let expected = [
        (LanguageKind::Nederlands, "cis"),
        (LanguageKind::Catalan, "dod"),
        (LanguageKind::Deutsch, "cis"),
        (LanguageKind::English, "cs"),
        (LanguageKind::Espanol, "dos"),
        (LanguageKind::Francais, "dod"),
        (LanguageKind::Italiano, "dod"),
        (LanguageKind::Norsk, "ciss"),
        (LanguageKind::Portugues, "dos"),
        (LanguageKind::Suomi, "cis"),
        (LanguageKind::Svenska, "ciss"),
        (LanguageKind::Vlaams, "dok"),
    ];
    for (language, name) in expected {
        assert_eq!(pitch_name(c_sharp, language), name, "{language}");
    }
}

#[test]
fn test_lookup_miss_is_an_empty_name_not_an_error() {
    // Svenska has no three-quarter-sharp spelling on purpose
    let odd = p(DiatonicPitch::G, AlterationKind::SesquiSharp);
    assert_eq!(pitch_name(odd, LanguageKind::Svenska), "");
    // The same pitch is spelled fine where the table covers it
    assert_eq!(pitch_name(odd, LanguageKind::Nederlands), "gisih");
}

#[test]
fn test_language_keys_match_caller_facing_spellings() {
    assert_eq!(LanguageKind::from_key("nederlands"), Some(LanguageKind::Nederlands));
    assert_eq!(LanguageKind::from_key("deutsch"), Some(LanguageKind::Deutsch));
    assert_eq!(LanguageKind::from_key("english"), Some(LanguageKind::English));
    assert_eq!(LanguageKind::from_key(""), None);
}

#[test]
fn test_score_tree_serializes_and_round_trips() {
    let mut score = Score::new(1);
    let part_id = score.append_part("clarinet", 2);
    let mut measure = Measure::new(1, 3);
    measure.append_element(MeasureElement::Note(Note::new(
        p(DiatonicPitch::E, AlterationKind::SemiFlat),
        Rational::new(3, 8).unwrap(),
        4,
    )));
    score.part_mut(part_id).unwrap().append_measure(measure);

    let json = serde_json::to_string(&score).unwrap();
    let decoded: Score = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, score);
}
