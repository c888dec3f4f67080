// Interval table consistency: involution, semitone sums, transposition

use pretty_assertions::assert_eq;

use notation_core::{
    invert_interval, quarter_tone_distance, semitone_distance, transpose_by_interval,
    DiatonicPitch, IntervalKind, ScoreError, SemiTonesAlteration, SemiTonesPitch,
};

fn p(diatonic: DiatonicPitch, alteration: SemiTonesAlteration) -> SemiTonesPitch {
    SemiTonesPitch::new(diatonic, alteration)
}

#[test]
fn test_inversion_is_an_involution() {
    for interval in IntervalKind::ALL.iter().copied().filter(|i| i.is_simple()) {
        assert_eq!(
            invert_interval(invert_interval(interval)),
            interval,
            "{interval}"
        );
    }
}

#[test]
fn test_interval_plus_inversion_spans_the_octave() {
    for interval in IntervalKind::ALL.iter().copied().filter(|i| i.is_simple()) {
        assert_eq!(
            semitone_distance(interval) + semitone_distance(invert_interval(interval)),
            12,
            "{interval}"
        );
    }
}

#[test]
fn test_diminished_unison_edge_case() {
    assert_eq!(semitone_distance(IntervalKind::DiminishedUnison), -1);
    assert_eq!(
        invert_interval(IntervalKind::DiminishedUnison),
        IntervalKind::AugmentedOctave
    );
    assert_eq!(semitone_distance(IntervalKind::AugmentedOctave), 13);
}

#[test]
fn test_quarter_tone_distance_is_twice_semitones() {
    for interval in IntervalKind::ALL {
        assert_eq!(
            quarter_tone_distance(interval),
            2 * semitone_distance(interval)
        );
    }
}

#[test]
fn test_transposition_keeps_spelling() {
    use DiatonicPitch::*;
    use SemiTonesAlteration::*;

    let cases = [
        (p(C, Natural), IntervalKind::PerfectFifth, p(G, Natural)),
        (p(A, Flat), IntervalKind::MajorThird, p(C, Natural)),
        (p(F, Sharp), IntervalKind::MinorThird, p(A, Natural)),
        (p(B, Flat), IntervalKind::MajorSixth, p(G, Natural)),
        (p(G, Natural), IntervalKind::AugmentedFourth, p(C, Sharp)),
        (p(E, Natural), IntervalKind::DiminishedFifth, p(B, Flat)),
        (p(D, Natural), IntervalKind::MajorNinth, p(E, Natural)),
    ];
    for (root, interval, expected) in cases {
        assert_eq!(
            transpose_by_interval(root, interval, 1).unwrap(),
            expected,
            "{root} + {interval}"
        );
    }
}

#[test]
fn test_double_sharp_root_is_rejected_not_approximated() {
    let root = p(DiatonicPitch::D, SemiTonesAlteration::DoubleSharp);
    match transpose_by_interval(root, IntervalKind::PerfectFifth, 88) {
        Err(ScoreError::UnsupportedPitch {
            pitch,
            input_line_number,
        }) => {
            assert_eq!(pitch, root);
            assert_eq!(input_line_number, 88);
        }
        other => panic!("expected an unsupported-pitch error, got {other:?}"),
    }
}

#[test]
fn test_triple_flat_root_is_rejected() {
    let root = p(DiatonicPitch::E, SemiTonesAlteration::TripleFlat);
    assert!(transpose_by_interval(root, IntervalKind::MajorThird, 1).is_err());
}
