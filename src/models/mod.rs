//! Music-theory data model
//!
//! Pitches and alterations in both the quarter-tone (spelling) space and the
//! semitone (harmony) space, per-language name rendering, interval arithmetic
//! with transposition, and the chord-interval catalog.

pub mod harmony;
pub mod intervals;
pub mod pitch;
pub mod pitch_names;

// Re-export commonly used types
pub use harmony::{ChordIntervals, ChordItem, HarmonyKind};
pub use intervals::IntervalKind;
pub use pitch::{
    AlterationKind, DiatonicPitch, QuarterTonesPitch, SemiTonesAlteration, SemiTonesPitch,
};
pub use pitch_names::LanguageKind;
