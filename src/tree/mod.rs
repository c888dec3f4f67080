//! Score element tree
//!
//! Strict parent-owns-child ownership: a score owns its parts, a part its
//! measures, a measure its notes, chords and tuplets, a chord its notes, a
//! tuplet its nested elements. Cross-references (a note's enclosing measure,
//! a part's id) are plain numbers, never walked by traversal and never part
//! of ownership. Every element carries the source line it came from.

pub mod visitor;

use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;
use crate::models::harmony::HarmonyKind;
use crate::models::pitch::QuarterTonesPitch;
use crate::rational::Rational;

pub use visitor::{browse, Browse, ScoreVisitor, MAX_BROWSE_DEPTH};

use visitor::browse_cycle;

/// Non-owning reference to a part within its score
pub type PartId = u32;

/// Non-owning reference to a measure within its part
pub type MeasureNumber = u32;

/// A single note: pitch plus an exact whole-note duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: QuarterTonesPitch,
    pub whole_notes: Rational,
    /// Enclosing measure, a lookup key only
    pub measure_number: Option<MeasureNumber>,
    pub input_line_number: u32,
}

impl Note {
    pub fn new(pitch: QuarterTonesPitch, whole_notes: Rational, input_line_number: u32) -> Self {
        Self {
            pitch,
            whole_notes,
            measure_number: None,
            input_line_number,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.pitch == QuarterTonesPitch::NoPitch
    }
}

impl Browse for Note {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_note_start(self);
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_note_end(self);
    }

    fn input_line_number(&self) -> u32 {
        self.input_line_number
    }

    fn browse_children(
        &self,
        _visitor: &mut dyn ScoreVisitor,
        _depth: usize,
    ) -> Result<(), ScoreError> {
        Ok(())
    }
}

/// Simultaneous notes under one duration, optionally tagged with the harmony
/// they realize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub notes: Vec<Note>,
    pub harmony: Option<HarmonyKind>,
    pub whole_notes: Rational,
    pub input_line_number: u32,
}

impl Chord {
    pub fn new(whole_notes: Rational, input_line_number: u32) -> Self {
        Self {
            notes: Vec::new(),
            harmony: None,
            whole_notes,
            input_line_number,
        }
    }

    pub fn append_note(&mut self, note: Note) {
        self.notes.push(note);
    }
}

impl Browse for Chord {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_chord_start(self);
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_chord_end(self);
    }

    fn input_line_number(&self) -> u32 {
        self.input_line_number
    }

    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError> {
        for note in &self.notes {
            browse_cycle(note, visitor, depth)?;
        }
        Ok(())
    }
}

/// A time-scaled group; tuplets nest, which is where the traversal depth
/// bound earns its keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuplet {
    /// Sounding-duration scale, e.g. 2/3 for a triplet
    pub factor: Rational,
    pub elements: Vec<MeasureElement>,
    pub input_line_number: u32,
}

impl Tuplet {
    pub fn new(factor: Rational, input_line_number: u32) -> Self {
        Self {
            factor,
            elements: Vec::new(),
            input_line_number,
        }
    }

    pub fn append_element(&mut self, element: MeasureElement) {
        self.elements.push(element);
    }
}

impl Browse for Tuplet {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_tuplet_start(self);
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_tuplet_end(self);
    }

    fn input_line_number(&self) -> u32 {
        self.input_line_number
    }

    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError> {
        for element in &self.elements {
            browse_cycle(element, visitor, depth)?;
        }
        Ok(())
    }
}

/// The closed set of measure-level children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeasureElement {
    Note(Note),
    Chord(Chord),
    Tuplet(Tuplet),
}

impl Browse for MeasureElement {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        match self {
            MeasureElement::Note(note) => note.accept_in(visitor),
            MeasureElement::Chord(chord) => chord.accept_in(visitor),
            MeasureElement::Tuplet(tuplet) => tuplet.accept_in(visitor),
        }
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        match self {
            MeasureElement::Note(note) => note.accept_out(visitor),
            MeasureElement::Chord(chord) => chord.accept_out(visitor),
            MeasureElement::Tuplet(tuplet) => tuplet.accept_out(visitor),
        }
    }

    fn input_line_number(&self) -> u32 {
        match self {
            MeasureElement::Note(note) => note.input_line_number,
            MeasureElement::Chord(chord) => chord.input_line_number,
            MeasureElement::Tuplet(tuplet) => tuplet.input_line_number,
        }
    }

    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError> {
        match self {
            MeasureElement::Note(note) => note.browse_children(visitor, depth),
            MeasureElement::Chord(chord) => chord.browse_children(visitor, depth),
            MeasureElement::Tuplet(tuplet) => tuplet.browse_children(visitor, depth),
        }
    }
}

/// One measure, owning its elements in score order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub number: MeasureNumber,
    pub elements: Vec<MeasureElement>,
    pub input_line_number: u32,
}

impl Measure {
    pub fn new(number: MeasureNumber, input_line_number: u32) -> Self {
        Self {
            number,
            elements: Vec::new(),
            input_line_number,
        }
    }

    /// Take ownership of an element, stamping note back-references
    pub fn append_element(&mut self, mut element: MeasureElement) {
        if let MeasureElement::Note(note) = &mut element {
            note.measure_number = Some(self.number);
        }
        self.elements.push(element);
    }

    /// Total sounding duration of the owned elements
    pub fn sounding_whole_notes(&self) -> Rational {
        fn element_duration(element: &MeasureElement) -> Rational {
            match element {
                MeasureElement::Note(note) => note.whole_notes,
                MeasureElement::Chord(chord) => chord.whole_notes,
                MeasureElement::Tuplet(tuplet) => tuplet
                    .elements
                    .iter()
                    .fold(Rational::zero(), |sum, nested| {
                        sum + element_duration(nested)
                    })
                    * tuplet.factor,
            }
        }
        self.elements
            .iter()
            .fold(Rational::zero(), |sum, element| {
                sum + element_duration(element)
            })
    }
}

impl Browse for Measure {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_measure_start(self);
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_measure_end(self);
    }

    fn input_line_number(&self) -> u32 {
        self.input_line_number
    }

    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError> {
        for element in &self.elements {
            browse_cycle(element, visitor, depth)?;
        }
        Ok(())
    }
}

/// One part, owning its measures in score order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub measures: Vec<Measure>,
    pub input_line_number: u32,
}

impl Part {
    pub fn new(id: PartId, name: impl Into<String>, input_line_number: u32) -> Self {
        Self {
            id,
            name: name.into(),
            measures: Vec::new(),
            input_line_number,
        }
    }

    pub fn append_measure(&mut self, measure: Measure) {
        self.measures.push(measure);
    }

    /// Non-owning lookup by measure number
    pub fn measure(&self, number: MeasureNumber) -> Option<&Measure> {
        self.measures.iter().find(|m| m.number == number)
    }
}

impl Browse for Part {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_part_start(self);
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_part_end(self);
    }

    fn input_line_number(&self) -> u32 {
        self.input_line_number
    }

    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError> {
        for measure in &self.measures {
            browse_cycle(measure, visitor, depth)?;
        }
        Ok(())
    }
}

/// The tree root, owning its parts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    pub parts: Vec<Part>,
    pub input_line_number: u32,
}

impl Score {
    pub fn new(input_line_number: u32) -> Self {
        Self {
            parts: Vec::new(),
            input_line_number,
        }
    }

    /// Take ownership of a new part, assigning its id
    pub fn append_part(&mut self, name: impl Into<String>, input_line_number: u32) -> PartId {
        let id = self.parts.len() as PartId;
        self.parts.push(Part::new(id, name, input_line_number));
        id
    }

    /// Non-owning lookup by part id
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.id == id)
    }
}

impl Browse for Score {
    fn accept_in(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_score_start(self);
    }

    fn accept_out(&self, visitor: &mut dyn ScoreVisitor) {
        visitor.visit_score_end(self);
    }

    fn input_line_number(&self) -> u32 {
        self.input_line_number
    }

    fn browse_children(
        &self,
        visitor: &mut dyn ScoreVisitor,
        depth: usize,
    ) -> Result<(), ScoreError> {
        for part in &self.parts {
            browse_cycle(part, visitor, depth)?;
        }
        Ok(())
    }
}
