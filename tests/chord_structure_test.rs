// Chord catalog: templates, realization, inversion bounds

use pretty_assertions::assert_eq;

use notation_core::{
    bass_pitch_for_inversion, build_chord_pitches, chord_intervals, DiatonicPitch, HarmonyKind,
    IntervalKind, ScoreError, SemiTonesAlteration, SemiTonesPitch,
};

fn p(diatonic: DiatonicPitch, alteration: SemiTonesAlteration) -> SemiTonesPitch {
    SemiTonesPitch::new(diatonic, alteration)
}

fn natural(diatonic: DiatonicPitch) -> SemiTonesPitch {
    SemiTonesPitch::natural(diatonic)
}

#[test]
fn test_major_triad_from_c_natural() {
    use DiatonicPitch::*;
    assert_eq!(
        build_chord_pitches(HarmonyKind::Major, natural(C), 1).unwrap(),
        vec![natural(C), natural(E), natural(G)]
    );
}

#[test]
fn test_every_template_starts_at_the_root() {
    for harmony in HarmonyKind::ALL {
        let template = chord_intervals(harmony);
        if let Some(first) = template.items().first() {
            assert_eq!(first.ordinal, 1, "{harmony:?}");
            assert_eq!(first.interval, IntervalKind::PerfectUnison, "{harmony:?}");
        }
    }
}

#[test]
fn test_template_ordinals_are_consecutive() {
    for harmony in HarmonyKind::ALL {
        for (index, item) in chord_intervals(harmony).items().iter().enumerate() {
            assert_eq!(item.ordinal, index + 1, "{harmony:?}");
        }
    }
}

#[test]
fn test_extended_chords_mark_the_upper_octave() {
    for harmony in [
        HarmonyKind::DominantNinth,
        HarmonyKind::DominantEleventh,
        HarmonyKind::DominantThirteenth,
    ] {
        for item in chord_intervals(harmony).items() {
            let expected = if item.interval.number() > 8 { 1 } else { 0 };
            assert_eq!(item.relative_octave, expected, "{harmony:?} {}", item.interval);
        }
    }
}

#[test]
fn test_minor_seventh_from_a() {
    use DiatonicPitch::*;
    assert_eq!(
        build_chord_pitches(HarmonyKind::MinorSeventh, natural(A), 1).unwrap(),
        vec![natural(A), natural(C), natural(E), natural(G)]
    );
}

#[test]
fn test_german_sixth_spelling_from_a_flat() {
    use DiatonicPitch::*;
    use SemiTonesAlteration::*;
    assert_eq!(
        build_chord_pitches(HarmonyKind::German, p(A, Flat), 1).unwrap(),
        vec![p(A, Flat), p(C, Natural), p(E, Flat), p(F, Sharp)]
    );
}

#[test]
fn test_inversion_lookup_and_bounds() {
    use DiatonicPitch::*;
    let root = natural(C);
    assert_eq!(
        bass_pitch_for_inversion(HarmonyKind::Major, 0, root, 1).unwrap(),
        natural(C)
    );
    assert_eq!(
        bass_pitch_for_inversion(HarmonyKind::Major, 1, root, 1).unwrap(),
        natural(E)
    );
    assert_eq!(
        bass_pitch_for_inversion(HarmonyKind::Major, 2, root, 1).unwrap(),
        natural(G)
    );
    assert_eq!(
        bass_pitch_for_inversion(HarmonyKind::Major, 3, root, 21),
        Err(ScoreError::InvalidInversion {
            harmony: HarmonyKind::Major,
            inversion: 3,
            tone_count: 3,
            input_line_number: 21
        })
    );
}

#[test]
fn test_realization_from_unsupported_root_fails() {
    let root = p(DiatonicPitch::C, SemiTonesAlteration::DoubleSharp);
    assert!(matches!(
        build_chord_pitches(HarmonyKind::Major, root, 1),
        Err(ScoreError::UnsupportedPitch { .. })
    ));
}
