//! Error types for the notation translation core
//!
//! Every failure carries the offending value and the originating score input
//! line so diagnostics can point back into the source notation. Pitch-name
//! lookup misses are deliberately NOT represented here: an absent table entry
//! yields an empty name so an incomplete minority-language spelling table
//! never aborts a translation.

use thiserror::Error;

use crate::models::harmony::HarmonyKind;
use crate::models::pitch::SemiTonesPitch;
use crate::rational::Rational;

/// Top-level error type for the translation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Invalid construction of a core value (e.g. zero denominator)
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A duration not expressible within the bounded dot/multiplier search
    #[error("duration {whole_notes} whole notes is not notatable, line {input_line_number}")]
    Notation {
        whole_notes: Rational,
        input_line_number: u32,
    },

    /// Transposition requested from a root spelling outside the supported table
    #[error("cannot transpose from unsupported root {pitch}, line {input_line_number}")]
    UnsupportedPitch {
        pitch: SemiTonesPitch,
        input_line_number: u32,
    },

    /// Chord inversion index outside the chord's tone count
    #[error(
        "inversion {inversion} is out of range for {harmony:?} ({tone_count} tones), line {input_line_number}"
    )]
    InvalidInversion {
        harmony: HarmonyKind,
        inversion: usize,
        tone_count: usize,
        input_line_number: u32,
    },

    /// Browse recursion exceeded the defensive nesting bound
    #[error("score nesting deeper than {depth} levels, line {input_line_number}")]
    NestingTooDeep {
        depth: usize,
        input_line_number: u32,
    },
}

impl ScoreError {
    /// Shorthand for a configuration failure
    pub fn configuration(message: impl Into<String>) -> Self {
        ScoreError::Configuration {
            message: message.into(),
        }
    }
}
