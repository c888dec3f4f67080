//! Interval arithmetic and transposition
//!
//! Forty-six named interval qualities from the diminished unison to the
//! augmented thirteenth, each with a canonical signed semitone distance and a
//! diatonic step count. The diminished unison is the one negative entry
//! (-1 semitones). Quarter-tone distance is exactly twice the semitone
//! distance; microtonality never becomes an interval granularity of its own.
//!
//! Transposition is a pure lookup in an immutable map built once over the
//! 21 supported root spellings (seven letters, each flat/natural/sharp).
//! Double- and triple-altered roots are unsupported and fail with a typed
//! error; no result is ever approximated.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;

use super::pitch::{DiatonicPitch, SemiTonesAlteration, SemiTonesPitch};

/// Quality component of an interval name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalQuality {
    Diminished,
    Minor,
    Major,
    Perfect,
    Augmented,
}

impl IntervalQuality {
    /// Quality of the inverted interval
    pub fn inverted(self) -> IntervalQuality {
        match self {
            IntervalQuality::Diminished => IntervalQuality::Augmented,
            IntervalQuality::Minor => IntervalQuality::Major,
            IntervalQuality::Major => IntervalQuality::Minor,
            IntervalQuality::Perfect => IntervalQuality::Perfect,
            IntervalQuality::Augmented => IntervalQuality::Diminished,
        }
    }

    fn symbol(self) -> char {
        match self {
            IntervalQuality::Diminished => 'd',
            IntervalQuality::Minor => 'm',
            IntervalQuality::Major => 'M',
            IntervalQuality::Perfect => 'P',
            IntervalQuality::Augmented => 'A',
        }
    }
}

/// The named interval qualities, diminished unison through augmented
/// thirteenth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalKind {
    DiminishedUnison,
    PerfectUnison,
    AugmentedUnison,
    DiminishedSecond,
    MinorSecond,
    MajorSecond,
    AugmentedSecond,
    DiminishedThird,
    MinorThird,
    MajorThird,
    AugmentedThird,
    DiminishedFourth,
    PerfectFourth,
    AugmentedFourth,
    DiminishedFifth,
    PerfectFifth,
    AugmentedFifth,
    DiminishedSixth,
    MinorSixth,
    MajorSixth,
    AugmentedSixth,
    DiminishedSeventh,
    MinorSeventh,
    MajorSeventh,
    AugmentedSeventh,
    DiminishedOctave,
    PerfectOctave,
    AugmentedOctave,
    DiminishedNinth,
    MinorNinth,
    MajorNinth,
    AugmentedNinth,
    DiminishedTenth,
    MinorTenth,
    MajorTenth,
    AugmentedTenth,
    DiminishedEleventh,
    PerfectEleventh,
    AugmentedEleventh,
    DiminishedTwelfth,
    PerfectTwelfth,
    AugmentedTwelfth,
    DiminishedThirteenth,
    MinorThirteenth,
    MajorThirteenth,
    AugmentedThirteenth,
}

impl IntervalKind {
    pub const ALL: [IntervalKind; 46] = [
        IntervalKind::DiminishedUnison,
        IntervalKind::PerfectUnison,
        IntervalKind::AugmentedUnison,
        IntervalKind::DiminishedSecond,
        IntervalKind::MinorSecond,
        IntervalKind::MajorSecond,
        IntervalKind::AugmentedSecond,
        IntervalKind::DiminishedThird,
        IntervalKind::MinorThird,
        IntervalKind::MajorThird,
        IntervalKind::AugmentedThird,
        IntervalKind::DiminishedFourth,
        IntervalKind::PerfectFourth,
        IntervalKind::AugmentedFourth,
        IntervalKind::DiminishedFifth,
        IntervalKind::PerfectFifth,
        IntervalKind::AugmentedFifth,
        IntervalKind::DiminishedSixth,
        IntervalKind::MinorSixth,
        IntervalKind::MajorSixth,
        IntervalKind::AugmentedSixth,
        IntervalKind::DiminishedSeventh,
        IntervalKind::MinorSeventh,
        IntervalKind::MajorSeventh,
        IntervalKind::AugmentedSeventh,
        IntervalKind::DiminishedOctave,
        IntervalKind::PerfectOctave,
        IntervalKind::AugmentedOctave,
        IntervalKind::DiminishedNinth,
        IntervalKind::MinorNinth,
        IntervalKind::MajorNinth,
        IntervalKind::AugmentedNinth,
        IntervalKind::DiminishedTenth,
        IntervalKind::MinorTenth,
        IntervalKind::MajorTenth,
        IntervalKind::AugmentedTenth,
        IntervalKind::DiminishedEleventh,
        IntervalKind::PerfectEleventh,
        IntervalKind::AugmentedEleventh,
        IntervalKind::DiminishedTwelfth,
        IntervalKind::PerfectTwelfth,
        IntervalKind::AugmentedTwelfth,
        IntervalKind::DiminishedThirteenth,
        IntervalKind::MinorThirteenth,
        IntervalKind::MajorThirteenth,
        IntervalKind::AugmentedThirteenth,
    ];

    /// (quality, interval number 1..=13, signed semitones)
    fn properties(self) -> (IntervalQuality, u8, i8) {
        use IntervalKind::*;
        use IntervalQuality::*;
        match self {
            DiminishedUnison => (Diminished, 1, -1),
            PerfectUnison => (Perfect, 1, 0),
            AugmentedUnison => (Augmented, 1, 1),
            DiminishedSecond => (Diminished, 2, 0),
            MinorSecond => (Minor, 2, 1),
            MajorSecond => (Major, 2, 2),
            AugmentedSecond => (Augmented, 2, 3),
            DiminishedThird => (Diminished, 3, 2),
            MinorThird => (Minor, 3, 3),
            MajorThird => (Major, 3, 4),
            AugmentedThird => (Augmented, 3, 5),
            DiminishedFourth => (Diminished, 4, 4),
            PerfectFourth => (Perfect, 4, 5),
            AugmentedFourth => (Augmented, 4, 6),
            DiminishedFifth => (Diminished, 5, 6),
            PerfectFifth => (Perfect, 5, 7),
            AugmentedFifth => (Augmented, 5, 8),
            DiminishedSixth => (Diminished, 6, 7),
            MinorSixth => (Minor, 6, 8),
            MajorSixth => (Major, 6, 9),
            AugmentedSixth => (Augmented, 6, 10),
            DiminishedSeventh => (Diminished, 7, 9),
            MinorSeventh => (Minor, 7, 10),
            MajorSeventh => (Major, 7, 11),
            AugmentedSeventh => (Augmented, 7, 12),
            DiminishedOctave => (Diminished, 8, 11),
            PerfectOctave => (Perfect, 8, 12),
            AugmentedOctave => (Augmented, 8, 13),
            DiminishedNinth => (Diminished, 9, 12),
            MinorNinth => (Minor, 9, 13),
            MajorNinth => (Major, 9, 14),
            AugmentedNinth => (Augmented, 9, 15),
            DiminishedTenth => (Diminished, 10, 14),
            MinorTenth => (Minor, 10, 15),
            MajorTenth => (Major, 10, 16),
            AugmentedTenth => (Augmented, 10, 17),
            DiminishedEleventh => (Diminished, 11, 16),
            PerfectEleventh => (Perfect, 11, 17),
            AugmentedEleventh => (Augmented, 11, 18),
            DiminishedTwelfth => (Diminished, 12, 18),
            PerfectTwelfth => (Perfect, 12, 19),
            AugmentedTwelfth => (Augmented, 12, 20),
            DiminishedThirteenth => (Diminished, 13, 19),
            MinorThirteenth => (Minor, 13, 20),
            MajorThirteenth => (Major, 13, 21),
            AugmentedThirteenth => (Augmented, 13, 22),
        }
    }

    pub fn quality(self) -> IntervalQuality {
        self.properties().0
    }

    /// Interval number: unison = 1, octave = 8, thirteenth = 13
    pub fn number(self) -> u8 {
        self.properties().1
    }

    /// Diatonic letter steps spanned (unison = 0, octave = 7)
    pub fn diatonic_steps(self) -> usize {
        (self.number() - 1) as usize
    }

    /// True for intervals within the octave
    pub fn is_simple(self) -> bool {
        self.number() <= 8
    }

    /// The named interval with this quality and number, when one exists
    pub fn from_quality_and_number(quality: IntervalQuality, number: u8) -> Option<IntervalKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.quality() == quality && i.number() == number)
    }

    /// The named interval spanning these diatonic steps and semitones
    pub fn from_steps_and_semitones(steps: usize, semitones: i8) -> Option<IntervalKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.diatonic_steps() == steps && i.semitone_distance() == semitones)
    }

    /// Canonical chromatic size, signed (diminished unison = -1)
    pub fn semitone_distance(self) -> i8 {
        self.properties().2
    }

    /// Chromatic size in quarter tones, exactly double the semitones
    pub fn quarter_tone_distance(self) -> i8 {
        self.semitone_distance() * 2
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality().symbol(), self.number())
    }
}

/// Invert an interval.
///
/// Over the simple range this is an involution: qualities swap
/// diminished/augmented and minor/major, numbers pair unison/octave, 2/7,
/// 3/6 and 4/5. A compound interval is first reduced by an octave, so its
/// inversion is the inversion of its simple form.
pub fn invert_interval(interval: IntervalKind) -> IntervalKind {
    let number = interval.number();
    let simple_number = if number > 8 { number - 7 } else { number };
    let inverted_number = 9 - simple_number;
    let inverted_quality = interval.quality().inverted();
    // Every (quality, 1..=8) pairing is tabulated, so this cannot miss
    IntervalKind::from_quality_and_number(inverted_quality, inverted_number)
        .unwrap_or(IntervalKind::PerfectUnison)
}

/// Sum of two intervals, when the result is a nameable quality
pub fn sum_of_intervals(a: IntervalKind, b: IntervalKind) -> Option<IntervalKind> {
    IntervalKind::from_steps_and_semitones(
        a.diatonic_steps() + b.diatonic_steps(),
        a.semitone_distance() + b.semitone_distance(),
    )
}

/// Difference of two intervals (a minus b), when nameable
pub fn difference_of_intervals(a: IntervalKind, b: IntervalKind) -> Option<IntervalKind> {
    let steps = a.diatonic_steps().checked_sub(b.diatonic_steps())?;
    IntervalKind::from_steps_and_semitones(steps, a.semitone_distance() - b.semitone_distance())
}

/// Canonical chromatic size of an interval
pub fn semitone_distance(interval: IntervalKind) -> i8 {
    interval.semitone_distance()
}

/// Chromatic size in quarter tones
pub fn quarter_tone_distance(interval: IntervalKind) -> i8 {
    interval.quarter_tone_distance()
}

fn is_supported_root(root: SemiTonesPitch) -> bool {
    matches!(
        root.alteration,
        SemiTonesAlteration::Flat | SemiTonesAlteration::Natural | SemiTonesAlteration::Sharp
    )
}

/// Spelled transposition result for one (root, interval) pair, or None when
/// the required alteration is not spellable
fn spelled_transposition(root: SemiTonesPitch, interval: IntervalKind) -> Option<SemiTonesPitch> {
    let (letter, octave_wraps) = root.diatonic.stepped(interval.diatonic_steps());
    let target_semitones = root.semitones_from_c() + interval.semitone_distance();
    let natural_semitones = letter.semitones_from_c() + 12 * octave_wraps;
    let alteration = SemiTonesAlteration::from_semitones(target_semitones - natural_semitones)?;
    Some(SemiTonesPitch::new(letter, alteration))
}

type TranspositionKey = (SemiTonesPitch, IntervalKind);

/// Transposition results for every supported root spelling, built once
static TRANSPOSITIONS: Lazy<HashMap<TranspositionKey, SemiTonesPitch>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for diatonic in DiatonicPitch::SCALE {
        for alteration in [
            SemiTonesAlteration::Flat,
            SemiTonesAlteration::Natural,
            SemiTonesAlteration::Sharp,
        ] {
            let root = SemiTonesPitch::new(diatonic, alteration);
            for interval in IntervalKind::ALL {
                if let Some(result) = spelled_transposition(root, interval) {
                    table.insert((root, interval), result);
                }
            }
        }
    }
    log::debug!("transposition table built: {} entries", table.len());
    table
});

/// Transpose a pitch up by an interval.
///
/// Only natural, flat and sharp root spellings are supported; any other root,
/// and any result whose spelling would need more than a triple alteration,
/// fails with `UnsupportedPitch` rather than approximating.
pub fn transpose_by_interval(
    pitch: SemiTonesPitch,
    interval: IntervalKind,
    input_line_number: u32,
) -> Result<SemiTonesPitch, ScoreError> {
    if !is_supported_root(pitch) {
        return Err(ScoreError::UnsupportedPitch {
            pitch,
            input_line_number,
        });
    }
    TRANSPOSITIONS
        .get(&(pitch, interval))
        .copied()
        .ok_or(ScoreError::UnsupportedPitch {
            pitch,
            input_line_number,
        })
}
