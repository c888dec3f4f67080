//! Harmony kinds and the chord-interval catalog
//!
//! Each harmony kind names an ordered chord-tone template: intervals from the
//! chord root, the root itself always first at the unison. The catalog is
//! built once behind a `Lazy`, never mutated afterwards, and shared read-only
//! across every translation pass. Realizing a template against a concrete
//! root composes the catalog with interval transposition.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;

use super::intervals::{transpose_by_interval, IntervalKind};
use super::pitch::SemiTonesPitch;

/// The named chord qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyKind {
    Major,
    Minor,
    Augmented,
    Diminished,
    DominantSeventh,
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    AugmentedSeventh,
    HalfDiminished,
    MinorMajorSeventh,
    MajorSixth,
    MinorSixth,
    DominantNinth,
    MajorNinth,
    MinorNinth,
    DominantEleventh,
    MajorEleventh,
    MinorEleventh,
    DominantThirteenth,
    MajorThirteenth,
    MinorThirteenth,
    SuspendedSecond,
    SuspendedFourth,
    Neapolitan,
    Italian,
    French,
    German,
    Tristan,
    Pedal,
    Power,
    Other,
    None,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 33] = [
        HarmonyKind::Major,
        HarmonyKind::Minor,
        HarmonyKind::Augmented,
        HarmonyKind::Diminished,
        HarmonyKind::DominantSeventh,
        HarmonyKind::MajorSeventh,
        HarmonyKind::MinorSeventh,
        HarmonyKind::DiminishedSeventh,
        HarmonyKind::AugmentedSeventh,
        HarmonyKind::HalfDiminished,
        HarmonyKind::MinorMajorSeventh,
        HarmonyKind::MajorSixth,
        HarmonyKind::MinorSixth,
        HarmonyKind::DominantNinth,
        HarmonyKind::MajorNinth,
        HarmonyKind::MinorNinth,
        HarmonyKind::DominantEleventh,
        HarmonyKind::MajorEleventh,
        HarmonyKind::MinorEleventh,
        HarmonyKind::DominantThirteenth,
        HarmonyKind::MajorThirteenth,
        HarmonyKind::MinorThirteenth,
        HarmonyKind::SuspendedSecond,
        HarmonyKind::SuspendedFourth,
        HarmonyKind::Neapolitan,
        HarmonyKind::Italian,
        HarmonyKind::French,
        HarmonyKind::German,
        HarmonyKind::Tristan,
        HarmonyKind::Pedal,
        HarmonyKind::Power,
        HarmonyKind::Other,
        HarmonyKind::None,
    ];

    /// Intervals from the root, template order
    fn template(self) -> &'static [IntervalKind] {
        use IntervalKind::*;
        match self {
            HarmonyKind::Major => &[PerfectUnison, MajorThird, PerfectFifth],
            HarmonyKind::Minor => &[PerfectUnison, MinorThird, PerfectFifth],
            HarmonyKind::Augmented => &[PerfectUnison, MajorThird, AugmentedFifth],
            HarmonyKind::Diminished => &[PerfectUnison, MinorThird, DiminishedFifth],
            HarmonyKind::DominantSeventh => {
                &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh]
            }
            HarmonyKind::MajorSeventh => &[PerfectUnison, MajorThird, PerfectFifth, MajorSeventh],
            HarmonyKind::MinorSeventh => &[PerfectUnison, MinorThird, PerfectFifth, MinorSeventh],
            HarmonyKind::DiminishedSeventh => {
                &[PerfectUnison, MinorThird, DiminishedFifth, DiminishedSeventh]
            }
            HarmonyKind::AugmentedSeventh => {
                &[PerfectUnison, MajorThird, AugmentedFifth, MinorSeventh]
            }
            HarmonyKind::HalfDiminished => {
                &[PerfectUnison, MinorThird, DiminishedFifth, MinorSeventh]
            }
            HarmonyKind::MinorMajorSeventh => {
                &[PerfectUnison, MinorThird, PerfectFifth, MajorSeventh]
            }
            HarmonyKind::MajorSixth => &[PerfectUnison, MajorThird, PerfectFifth, MajorSixth],
            HarmonyKind::MinorSixth => &[PerfectUnison, MinorThird, PerfectFifth, MajorSixth],
            HarmonyKind::DominantNinth => {
                &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh, MajorNinth]
            }
            HarmonyKind::MajorNinth => {
                &[PerfectUnison, MajorThird, PerfectFifth, MajorSeventh, MajorNinth]
            }
            HarmonyKind::MinorNinth => {
                &[PerfectUnison, MinorThird, PerfectFifth, MinorSeventh, MajorNinth]
            }
            HarmonyKind::DominantEleventh => &[
                PerfectUnison,
                MajorThird,
                PerfectFifth,
                MinorSeventh,
                MajorNinth,
                PerfectEleventh,
            ],
            HarmonyKind::MajorEleventh => &[
                PerfectUnison,
                MajorThird,
                PerfectFifth,
                MajorSeventh,
                MajorNinth,
                PerfectEleventh,
            ],
            HarmonyKind::MinorEleventh => &[
                PerfectUnison,
                MinorThird,
                PerfectFifth,
                MinorSeventh,
                MajorNinth,
                PerfectEleventh,
            ],
            HarmonyKind::DominantThirteenth => &[
                PerfectUnison,
                MajorThird,
                PerfectFifth,
                MinorSeventh,
                MajorNinth,
                PerfectEleventh,
                MajorThirteenth,
            ],
            HarmonyKind::MajorThirteenth => &[
                PerfectUnison,
                MajorThird,
                PerfectFifth,
                MajorSeventh,
                MajorNinth,
                PerfectEleventh,
                MajorThirteenth,
            ],
            HarmonyKind::MinorThirteenth => &[
                PerfectUnison,
                MinorThird,
                PerfectFifth,
                MinorSeventh,
                MajorNinth,
                PerfectEleventh,
                MajorThirteenth,
            ],
            HarmonyKind::SuspendedSecond => &[PerfectUnison, MajorSecond, PerfectFifth],
            HarmonyKind::SuspendedFourth => &[PerfectUnison, PerfectFourth, PerfectFifth],
            // Root is the written bass of the augmented-sixth family
            HarmonyKind::Neapolitan => &[PerfectUnison, MajorThird, PerfectFifth],
            HarmonyKind::Italian => &[PerfectUnison, MajorThird, AugmentedSixth],
            HarmonyKind::French => {
                &[PerfectUnison, MajorThird, AugmentedFourth, AugmentedSixth]
            }
            HarmonyKind::German => &[PerfectUnison, MajorThird, PerfectFifth, AugmentedSixth],
            HarmonyKind::Tristan => {
                &[PerfectUnison, AugmentedFourth, AugmentedSixth, AugmentedNinth]
            }
            HarmonyKind::Pedal => &[PerfectUnison],
            HarmonyKind::Power => &[PerfectUnison, PerfectFifth],
            HarmonyKind::Other => &[PerfectUnison],
            HarmonyKind::None => &[],
        }
    }
}

/// One chord-tone descriptor: position in the template, interval from the
/// root, and the octave the interval reaches into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordItem {
    /// 1-based position in the template; the root is always item 1
    pub ordinal: usize,
    pub interval: IntervalKind,
    /// 0 within the root octave, 1 for ninths and beyond
    pub relative_octave: i8,
}

/// The ordered chord-tone template of one harmony kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordIntervals {
    harmony: HarmonyKind,
    items: Vec<ChordItem>,
}

impl ChordIntervals {
    fn build(harmony: HarmonyKind) -> Self {
        let items = harmony
            .template()
            .iter()
            .enumerate()
            .map(|(index, &interval)| ChordItem {
                ordinal: index + 1,
                interval,
                relative_octave: if interval.number() > 8 { 1 } else { 0 },
            })
            .collect();
        Self { harmony, items }
    }

    pub fn harmony(&self) -> HarmonyKind {
        self.harmony
    }

    pub fn items(&self) -> &[ChordItem] {
        &self.items
    }

    pub fn tone_count(&self) -> usize {
        self.items.len()
    }
}

/// The catalog, one template per harmony kind, built on first use
static CHORD_CATALOG: Lazy<HashMap<HarmonyKind, ChordIntervals>> = Lazy::new(|| {
    let catalog: HashMap<_, _> = HarmonyKind::ALL
        .iter()
        .map(|&harmony| (harmony, ChordIntervals::build(harmony)))
        .collect();
    log::debug!("chord catalog built: {} templates", catalog.len());
    catalog
});

/// Shared read-only template for a harmony kind
pub fn chord_intervals(harmony: HarmonyKind) -> &'static ChordIntervals {
    // The catalog is total over HarmonyKind by construction
    CHORD_CATALOG
        .get(&harmony)
        .expect("chord catalog covers every harmony kind")
}

/// The chord tone sounding in the bass for inversion `n` (0 = root position),
/// realized from `root`.
///
/// Fails with `InvalidInversion` when `n` is outside the template's tone
/// count; inversions never clamp or wrap.
pub fn bass_pitch_for_inversion(
    harmony: HarmonyKind,
    inversion: usize,
    root: SemiTonesPitch,
    input_line_number: u32,
) -> Result<SemiTonesPitch, ScoreError> {
    let template = chord_intervals(harmony);
    let item = template
        .items()
        .get(inversion)
        .ok_or(ScoreError::InvalidInversion {
            harmony,
            inversion,
            tone_count: template.tone_count(),
            input_line_number,
        })?;
    transpose_by_interval(root, item.interval, input_line_number)
}

/// Realize every chord tone of `harmony` from `root`, in template order
pub fn build_chord_pitches(
    harmony: HarmonyKind,
    root: SemiTonesPitch,
    input_line_number: u32,
) -> Result<Vec<SemiTonesPitch>, ScoreError> {
    chord_intervals(harmony)
        .items()
        .iter()
        .map(|item| transpose_by_interval(root, item.interval, input_line_number))
        .collect()
}
