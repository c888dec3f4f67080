//! Pitch and alteration model
//!
//! Two parallel pitch spaces coexist. The quarter-tone space
//! (`QuarterTonesPitch`) carries the full eleven-level alteration ladder,
//! including the microtonal semi/sesqui steps, and is what spelling and
//! per-language name rendering work with. The semitone space
//! (`SemiTonesPitch`) drops the microtonal levels and is what interval and
//! harmony computation work with. Microtonality exists only at the pitch
//! level; intervals never gain a quarter-tone granularity of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven diatonic letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiatonicPitch {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl DiatonicPitch {
    /// All letters in C-scale order, the order interval arithmetic steps in
    pub const SCALE: [DiatonicPitch; 7] = [
        DiatonicPitch::C,
        DiatonicPitch::D,
        DiatonicPitch::E,
        DiatonicPitch::F,
        DiatonicPitch::G,
        DiatonicPitch::A,
        DiatonicPitch::B,
    ];

    /// Semitones above C of the natural letter
    pub fn semitones_from_c(self) -> i8 {
        match self {
            DiatonicPitch::C => 0,
            DiatonicPitch::D => 2,
            DiatonicPitch::E => 4,
            DiatonicPitch::F => 5,
            DiatonicPitch::G => 7,
            DiatonicPitch::A => 9,
            DiatonicPitch::B => 11,
        }
    }

    /// Position within the C scale (C=0 .. B=6)
    pub fn scale_degree(self) -> usize {
        match self {
            DiatonicPitch::C => 0,
            DiatonicPitch::D => 1,
            DiatonicPitch::E => 2,
            DiatonicPitch::F => 3,
            DiatonicPitch::G => 4,
            DiatonicPitch::A => 5,
            DiatonicPitch::B => 6,
        }
    }

    /// The letter `steps` diatonic steps above this one, with the number of
    /// octave wraps taken
    pub fn stepped(self, steps: usize) -> (DiatonicPitch, i8) {
        let degree = self.scale_degree() + steps;
        let letter = Self::SCALE[degree % 7];
        (letter, (degree / 7) as i8)
    }

    pub fn letter(self) -> char {
        match self {
            DiatonicPitch::A => 'A',
            DiatonicPitch::B => 'B',
            DiatonicPitch::C => 'C',
            DiatonicPitch::D => 'D',
            DiatonicPitch::E => 'E',
            DiatonicPitch::F => 'F',
            DiatonicPitch::G => 'G',
        }
    }
}

impl fmt::Display for DiatonicPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The eleven alteration levels of the quarter-tone space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlterationKind {
    TripleFlat,
    DoubleFlat,
    SesquiFlat,
    Flat,
    SemiFlat,
    Natural,
    SemiSharp,
    Sharp,
    SesquiSharp,
    DoubleSharp,
    TripleSharp,
}

impl AlterationKind {
    pub const ALL: [AlterationKind; 11] = [
        AlterationKind::TripleFlat,
        AlterationKind::DoubleFlat,
        AlterationKind::SesquiFlat,
        AlterationKind::Flat,
        AlterationKind::SemiFlat,
        AlterationKind::Natural,
        AlterationKind::SemiSharp,
        AlterationKind::Sharp,
        AlterationKind::SesquiSharp,
        AlterationKind::DoubleSharp,
        AlterationKind::TripleSharp,
    ];

    /// Signed offset in quarter tones (Flat = -2, SemiFlat = -1, ...)
    pub fn quarter_tones(self) -> i8 {
        match self {
            AlterationKind::TripleFlat => -6,
            AlterationKind::DoubleFlat => -4,
            AlterationKind::SesquiFlat => -3,
            AlterationKind::Flat => -2,
            AlterationKind::SemiFlat => -1,
            AlterationKind::Natural => 0,
            AlterationKind::SemiSharp => 1,
            AlterationKind::Sharp => 2,
            AlterationKind::SesquiSharp => 3,
            AlterationKind::DoubleSharp => 4,
            AlterationKind::TripleSharp => 6,
        }
    }

    /// True for the semi/sesqui steps that have no semitone image
    pub fn is_microtonal(self) -> bool {
        self.quarter_tones() % 2 != 0
    }
}

/// The seven non-microtonal alteration levels of the semitone space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SemiTonesAlteration {
    TripleFlat,
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
    TripleSharp,
}

impl SemiTonesAlteration {
    pub const ALL: [SemiTonesAlteration; 7] = [
        SemiTonesAlteration::TripleFlat,
        SemiTonesAlteration::DoubleFlat,
        SemiTonesAlteration::Flat,
        SemiTonesAlteration::Natural,
        SemiTonesAlteration::Sharp,
        SemiTonesAlteration::DoubleSharp,
        SemiTonesAlteration::TripleSharp,
    ];

    /// Signed offset in semitones
    pub fn semitones(self) -> i8 {
        match self {
            SemiTonesAlteration::TripleFlat => -3,
            SemiTonesAlteration::DoubleFlat => -2,
            SemiTonesAlteration::Flat => -1,
            SemiTonesAlteration::Natural => 0,
            SemiTonesAlteration::Sharp => 1,
            SemiTonesAlteration::DoubleSharp => 2,
            SemiTonesAlteration::TripleSharp => 3,
        }
    }

    /// The alteration for a signed semitone offset, when one exists
    pub fn from_semitones(semitones: i8) -> Option<Self> {
        match semitones {
            -3 => Some(SemiTonesAlteration::TripleFlat),
            -2 => Some(SemiTonesAlteration::DoubleFlat),
            -1 => Some(SemiTonesAlteration::Flat),
            0 => Some(SemiTonesAlteration::Natural),
            1 => Some(SemiTonesAlteration::Sharp),
            2 => Some(SemiTonesAlteration::DoubleSharp),
            3 => Some(SemiTonesAlteration::TripleSharp),
            _ => None,
        }
    }

    /// Embedding into the quarter-tone ladder
    pub fn widened(self) -> AlterationKind {
        match self {
            SemiTonesAlteration::TripleFlat => AlterationKind::TripleFlat,
            SemiTonesAlteration::DoubleFlat => AlterationKind::DoubleFlat,
            SemiTonesAlteration::Flat => AlterationKind::Flat,
            SemiTonesAlteration::Natural => AlterationKind::Natural,
            SemiTonesAlteration::Sharp => AlterationKind::Sharp,
            SemiTonesAlteration::DoubleSharp => AlterationKind::DoubleSharp,
            SemiTonesAlteration::TripleSharp => AlterationKind::TripleSharp,
        }
    }
}

/// Pitch identity in the quarter-tone (spelling) space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuarterTonesPitch {
    /// Unpitched sentinel (rests, unpitched percussion)
    NoPitch,
    Pitch {
        diatonic: DiatonicPitch,
        alteration: AlterationKind,
    },
}

impl QuarterTonesPitch {
    pub fn new(diatonic: DiatonicPitch, alteration: AlterationKind) -> Self {
        QuarterTonesPitch::Pitch {
            diatonic,
            alteration,
        }
    }

    /// Quarter tones above C natural, None for the unpitched sentinel
    pub fn quarter_tones_from_c(self) -> Option<i8> {
        match self {
            QuarterTonesPitch::NoPitch => None,
            QuarterTonesPitch::Pitch {
                diatonic,
                alteration,
            } => Some(diatonic.semitones_from_c() * 2 + alteration.quarter_tones()),
        }
    }

    /// Exact image in the semitone space; None for microtonal alterations and
    /// the unpitched sentinel
    pub fn to_semitones_pitch(self) -> Option<SemiTonesPitch> {
        match self {
            QuarterTonesPitch::NoPitch => None,
            QuarterTonesPitch::Pitch {
                diatonic,
                alteration,
            } => {
                if alteration.is_microtonal() {
                    return None;
                }
                SemiTonesAlteration::from_semitones(alteration.quarter_tones() / 2)
                    .map(|alteration| SemiTonesPitch::new(diatonic, alteration))
            }
        }
    }
}

/// Pitch identity in the semitone (harmony) space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemiTonesPitch {
    pub diatonic: DiatonicPitch,
    pub alteration: SemiTonesAlteration,
}

impl SemiTonesPitch {
    pub fn new(diatonic: DiatonicPitch, alteration: SemiTonesAlteration) -> Self {
        Self {
            diatonic,
            alteration,
        }
    }

    pub fn natural(diatonic: DiatonicPitch) -> Self {
        Self::new(diatonic, SemiTonesAlteration::Natural)
    }

    /// Semitones above C natural (may be negative, e.g. C triple-flat)
    pub fn semitones_from_c(self) -> i8 {
        self.diatonic.semitones_from_c() + self.alteration.semitones()
    }

    /// Embedding into the quarter-tone space (always exact)
    pub fn widened(self) -> QuarterTonesPitch {
        QuarterTonesPitch::new(self.diatonic, self.alteration.widened())
    }
}

impl fmt::Display for SemiTonesPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.alteration {
            SemiTonesAlteration::TripleFlat => "bbb",
            SemiTonesAlteration::DoubleFlat => "bb",
            SemiTonesAlteration::Flat => "b",
            SemiTonesAlteration::Natural => "",
            SemiTonesAlteration::Sharp => "#",
            SemiTonesAlteration::DoubleSharp => "##",
            SemiTonesAlteration::TripleSharp => "###",
        };
        write!(f, "{}{}", self.diatonic, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_stepping_wraps_with_octave() {
        assert_eq!(DiatonicPitch::C.stepped(0), (DiatonicPitch::C, 0));
        assert_eq!(DiatonicPitch::C.stepped(4), (DiatonicPitch::G, 0));
        assert_eq!(DiatonicPitch::B.stepped(1), (DiatonicPitch::C, 1));
        assert_eq!(DiatonicPitch::G.stepped(8), (DiatonicPitch::A, 1));
    }

    #[test]
    fn test_alteration_quarter_tones() {
        assert_eq!(AlterationKind::Flat.quarter_tones(), -2);
        assert_eq!(AlterationKind::SemiSharp.quarter_tones(), 1);
        assert_eq!(AlterationKind::TripleSharp.quarter_tones(), 6);
    }

    #[test]
    fn test_microtonal_levels() {
        let microtonal: Vec<_> = AlterationKind::ALL
            .iter()
            .filter(|a| a.is_microtonal())
            .collect();
        assert_eq!(
            microtonal,
            vec![
                &AlterationKind::SesquiFlat,
                &AlterationKind::SemiFlat,
                &AlterationKind::SemiSharp,
                &AlterationKind::SesquiSharp,
            ]
        );
    }

    #[test]
    fn test_quarter_tone_count_doubles_semitones() {
        for diatonic in DiatonicPitch::SCALE {
            for alteration in SemiTonesAlteration::ALL {
                let semi = SemiTonesPitch::new(diatonic, alteration);
                assert_eq!(
                    semi.widened().quarter_tones_from_c(),
                    Some(semi.semitones_from_c() * 2)
                );
            }
        }
    }

    #[test]
    fn test_microtonal_pitch_has_no_semitone_image() {
        let p = QuarterTonesPitch::new(DiatonicPitch::E, AlterationKind::SemiFlat);
        assert_eq!(p.to_semitones_pitch(), None);
        let q = QuarterTonesPitch::new(DiatonicPitch::E, AlterationKind::Flat);
        assert_eq!(
            q.to_semitones_pitch(),
            Some(SemiTonesPitch::new(
                DiatonicPitch::E,
                SemiTonesAlteration::Flat
            ))
        );
    }

    #[test]
    fn test_no_pitch_sentinel() {
        assert_eq!(QuarterTonesPitch::NoPitch.quarter_tones_from_c(), None);
        assert_eq!(QuarterTonesPitch::NoPitch.to_semitones_pitch(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SemiTonesPitch::new(DiatonicPitch::D, SemiTonesAlteration::DoubleSharp).to_string(),
            "D##"
        );
        assert_eq!(SemiTonesPitch::natural(DiatonicPitch::A).to_string(), "A");
    }
}
