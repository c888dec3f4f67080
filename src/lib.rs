//! Notation translation core
//!
//! The score element tree with its visitor/browse traversal protocol, and
//! the music-theoretic engine every translation pass relies on: exact
//! rational duration arithmetic with its notation codec, the quarter-tone
//! and semitone pitch models with per-language spelling, interval arithmetic
//! with transposition, and the chord-interval catalog.
//!
//! Option parsing, stream I/O, output emission and pass orchestration are
//! external collaborators consuming these interfaces.

pub mod duration;
pub mod errors;
pub mod models;
pub mod rational;
pub mod tree;

// Re-export commonly used types
pub use duration::{whole_notes_to_notated, DottedDuration, DurationKind, NotatedDuration};
pub use errors::ScoreError;
pub use models::harmony::{
    bass_pitch_for_inversion, build_chord_pitches, chord_intervals, ChordIntervals, ChordItem,
    HarmonyKind,
};
pub use models::intervals::{
    difference_of_intervals, invert_interval, quarter_tone_distance, semitone_distance,
    sum_of_intervals, transpose_by_interval, IntervalKind, IntervalQuality,
};
pub use models::pitch::{
    AlterationKind, DiatonicPitch, QuarterTonesPitch, SemiTonesAlteration, SemiTonesPitch,
};
pub use models::pitch_names::{pitch_name, LanguageKind};
pub use rational::Rational;
pub use tree::{
    browse, Browse, Chord, Measure, MeasureElement, Note, Part, Score, ScoreVisitor, Tuplet,
    MAX_BROWSE_DEPTH,
};
