//! Duration classes and the whole-notes codec
//!
//! The canonical duration classes sit on a strict power-of-two ladder from
//! the 1024th note up to the maxima. Any other duration value must be
//! decomposed into a base class plus dots, or a base class times an explicit
//! multiplier ratio (tuplet-scaled values unreachable via dots). Values are
//! never rounded.

use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;
use crate::rational::Rational;

/// Dots past this count stop being notation and start being a bug upstream
pub const MAX_DOTS_COUNT: u8 = 5;

/// The canonical duration classes, 1024th through maxima
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    Th1024,
    Th512,
    Th256,
    Th128,
    Th64,
    Th32,
    Sixteenth,
    Eighth,
    Quarter,
    Half,
    Whole,
    Breve,
    Long,
    Maxima,
}

impl DurationKind {
    /// Ladder from longest to shortest, the scan order of the codec
    pub const LADDER: [DurationKind; 14] = [
        DurationKind::Maxima,
        DurationKind::Long,
        DurationKind::Breve,
        DurationKind::Whole,
        DurationKind::Half,
        DurationKind::Quarter,
        DurationKind::Eighth,
        DurationKind::Sixteenth,
        DurationKind::Th32,
        DurationKind::Th64,
        DurationKind::Th128,
        DurationKind::Th256,
        DurationKind::Th512,
        DurationKind::Th1024,
    ];

    /// Canonical value of this class in whole notes
    pub fn whole_notes(self) -> Rational {
        let (numerator, denominator) = match self {
            DurationKind::Th1024 => (1, 1024),
            DurationKind::Th512 => (1, 512),
            DurationKind::Th256 => (1, 256),
            DurationKind::Th128 => (1, 128),
            DurationKind::Th64 => (1, 64),
            DurationKind::Th32 => (1, 32),
            DurationKind::Sixteenth => (1, 16),
            DurationKind::Eighth => (1, 8),
            DurationKind::Quarter => (1, 4),
            DurationKind::Half => (1, 2),
            DurationKind::Whole => (1, 1),
            DurationKind::Breve => (2, 1),
            DurationKind::Long => (4, 1),
            DurationKind::Maxima => (8, 1),
        };
        Rational::new_unchecked(numerator, denominator)
    }

    /// Conventional notation name, as used by engraving backends
    pub fn name(self) -> &'static str {
        match self {
            DurationKind::Th1024 => "1024th",
            DurationKind::Th512 => "512th",
            DurationKind::Th256 => "256th",
            DurationKind::Th128 => "128th",
            DurationKind::Th64 => "64th",
            DurationKind::Th32 => "32nd",
            DurationKind::Sixteenth => "16th",
            DurationKind::Eighth => "eighth",
            DurationKind::Quarter => "quarter",
            DurationKind::Half => "half",
            DurationKind::Whole => "whole",
            DurationKind::Breve => "breve",
            DurationKind::Long => "long",
            DurationKind::Maxima => "maxima",
        }
    }
}

/// A base duration class with a dot count, the common notated form
///
/// `whole_notes` keeps the historical compounding formula: every dot
/// multiplies the running value by 3/2, so two dots yield x2.25 rather than
/// the x1.75 of the halving rule. The codec below does NOT use this formula;
/// see `NotatedDuration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DottedDuration {
    pub kind: DurationKind,
    pub dots_count: u8,
}

impl DottedDuration {
    pub fn new(kind: DurationKind, dots_count: u8) -> Self {
        Self { kind, dots_count }
    }

    /// Value in whole notes under the compounding x3/2-per-dot formula
    pub fn whole_notes(&self) -> Rational {
        let mut value = self.kind.whole_notes();
        let three_halves = Rational::new_unchecked(3, 2);
        for _ in 0..self.dots_count {
            value = value * three_halves;
        }
        value
    }
}

/// Result of decomposing a whole-note value into notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotatedDuration {
    /// Base class extended by dots, each dot adding half the previous increment
    Dotted { kind: DurationKind, dots: u8 },
    /// Base class scaled by a reduced ratio (tuplet-style), unreachable via dots
    Multiplied {
        kind: DurationKind,
        multiplier: Rational,
    },
}

impl NotatedDuration {
    /// Exact whole-note value; the inverse of `whole_notes_to_notated`
    pub fn whole_notes(&self) -> Rational {
        match *self {
            NotatedDuration::Dotted { kind, dots } => {
                let base = kind.whole_notes();
                let one_half = Rational::new_unchecked(1, 2);
                let mut value = base;
                let mut increment = base;
                for _ in 0..dots {
                    increment = increment * one_half;
                    value = value + increment;
                }
                value
            }
            NotatedDuration::Multiplied { kind, multiplier } => kind.whole_notes() * multiplier,
        }
    }
}

/// Decompose a whole-note value into a base class plus dots or a multiplier
///
/// Scans the ladder longest-to-shortest for the largest canonical value not
/// exceeding the input. An exact match is returned dotless. A remainder
/// smaller than half the base cannot be reached by dots at all and becomes a
/// multiplier form. Otherwise dots accumulate, each consuming half the
/// previous increment, until the remainder is exactly consumed; past
/// `MAX_DOTS_COUNT` the value is not notatable and the call fails.
pub fn whole_notes_to_notated(
    value: Rational,
    input_line_number: u32,
) -> Result<NotatedDuration, ScoreError> {
    let not_notatable = || ScoreError::Notation {
        whole_notes: value,
        input_line_number,
    };

    if value.is_zero() || value.is_negative() {
        return Err(not_notatable());
    }

    // Largest canonical value <= input
    let mut base_kind = None;
    for kind in DurationKind::LADDER {
        if kind.whole_notes() <= value {
            base_kind = Some(kind);
            break;
        }
    }
    let kind = match base_kind {
        Some(kind) => kind,
        // Shorter than the shortest class: express over the 1024th
        None => {
            let th1024 = DurationKind::Th1024;
            return Ok(NotatedDuration::Multiplied {
                kind: th1024,
                multiplier: value * Rational::from_integer(1024),
            });
        }
    };

    let base = kind.whole_notes();
    let remainder = value - base;
    if remainder.is_zero() {
        return Ok(NotatedDuration::Dotted { kind, dots: 0 });
    }

    let one_half = Rational::new_unchecked(1, 2);
    if remainder < base * one_half {
        // Unreachable by dots: the first dot already adds half the base
        let multiplier = value * base.reciprocal()?;
        return Ok(NotatedDuration::Multiplied { kind, multiplier });
    }

    let mut dots = 0u8;
    let mut increment = base;
    let mut accumulated = base;
    while accumulated < value {
        dots += 1;
        if dots > MAX_DOTS_COUNT {
            return Err(not_notatable());
        }
        increment = increment * one_half;
        accumulated = accumulated + increment;
    }
    if accumulated == value {
        Ok(NotatedDuration::Dotted { kind, dots })
    } else {
        // Overshot between dot steps: not expressible as base + dots
        Err(not_notatable())
    }
}
