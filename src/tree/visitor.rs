//! Visitor and browse traversal protocol
//!
//! Double dispatch over a closed set of node kinds: every element implements
//! `Browse`, every pass implements `ScoreVisitor`. Visitor hooks default to
//! no-ops so a pass implements only the kinds it cares about, and elements
//! stay agnostic of which passes exist. One translation pass is one complete
//! `browse` walk from the root; traversal is synchronous, depth-first, and
//! aborts with a typed error past the defensive nesting bound.

use crate::errors::ScoreError;

use super::{Chord, Measure, Note, Part, Score, Tuplet};

/// Nesting levels past this bound abort the walk; realistic scores stay far
/// below it, pathological nested tuplets do not
pub const MAX_BROWSE_DEPTH: usize = 64;

/// A traversal pass over the score tree.
///
/// Paired start/end hooks per node kind; the end hook of an element fires
/// only after all of its owned children completed their own cycles.
#[allow(unused_variables)]
pub trait ScoreVisitor {
    fn visit_score_start(&mut self, score: &Score) {}
    fn visit_score_end(&mut self, score: &Score) {}

    fn visit_part_start(&mut self, part: &Part) {}
    fn visit_part_end(&mut self, part: &Part) {}

    fn visit_measure_start(&mut self, measure: &Measure) {}
    fn visit_measure_end(&mut self, measure: &Measure) {}

    fn visit_note_start(&mut self, note: &Note) {}
    fn visit_note_end(&mut self, note: &Note) {}

    fn visit_chord_start(&mut self, chord: &Chord) {}
    fn visit_chord_end(&mut self, chord: &Chord) {}

    fn visit_tuplet_start(&mut self, tuplet: &Tuplet) {}
    fn visit_tuplet_end(&mut self, tuplet: &Tuplet) {}
}

/// Implemented by every tree element
pub trait Browse {
    /// Dispatch to the visitor's entering hook for this kind
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor);

    /// Dispatch to the visitor's leaving hook, after children
    fn accept_out(&self, visitor: &mut dyn ScoreVisitor);

    /// Source line for traversal diagnostics
    fn input_line_number(&self) -> u32;

    /// Run the full accept/browse cycle on every owned child, in
    /// representation order. `depth` is the current nesting level.
    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError>;

    /// Walk all owned children of this element
    fn browse_data(&self, visitor: &mut dyn ScoreVisitor) -> Result<(), ScoreError> {
        self.browse_children(visitor, 0)
    }
}

/// One complete cycle for one element: enter, walk children, leave
pub(super) fn browse_cycle<E: Browse + ?Sized>(
    element: &E,
    visitor: &mut dyn ScoreVisitor,
    depth: usize,
) -> Result<(), ScoreError> {
    if depth >= MAX_BROWSE_DEPTH {
        return Err(ScoreError::NestingTooDeep {
            depth,
            input_line_number: element.input_line_number(),
        });
    }
    element.accept_in(visitor);
    element.browse_children(visitor, depth + 1)?;
    element.accept_out(visitor);
    Ok(())
}

/// Run one full pass over `element` and everything it owns
pub fn browse<E: Browse + ?Sized>(
    element: &E,
    visitor: &mut dyn ScoreVisitor,
) -> Result<(), ScoreError> {
    browse_cycle(element, visitor, 0)
}
