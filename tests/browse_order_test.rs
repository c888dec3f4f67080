// Traversal protocol: visit order, paired enter/leave hooks, depth bound

use pretty_assertions::assert_eq;

use notation_core::{
    browse, AlterationKind, Browse, Chord, DiatonicPitch, Measure, MeasureElement, Note, Part,
    QuarterTonesPitch, Rational, Score, ScoreError, ScoreVisitor, Tuplet, MAX_BROWSE_DEPTH,
};

/// Records every hook invocation as a readable event string
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl ScoreVisitor for EventLog {
    fn visit_score_start(&mut self, _score: &Score) {
        self.events.push("score.in".to_string());
    }
    fn visit_score_end(&mut self, _score: &Score) {
        self.events.push("score.out".to_string());
    }
    fn visit_part_start(&mut self, part: &Part) {
        self.events.push(format!("part[{}].in", part.name));
    }
    fn visit_part_end(&mut self, part: &Part) {
        self.events.push(format!("part[{}].out", part.name));
    }
    fn visit_measure_start(&mut self, measure: &Measure) {
        self.events.push(format!("measure[{}].in", measure.number));
    }
    fn visit_measure_end(&mut self, measure: &Measure) {
        self.events.push(format!("measure[{}].out", measure.number));
    }
    fn visit_note_start(&mut self, note: &Note) {
        self.events.push(format!("note[{}].in", note.input_line_number));
    }
    fn visit_note_end(&mut self, note: &Note) {
        self.events.push(format!("note[{}].out", note.input_line_number));
    }
    fn visit_chord_start(&mut self, _chord: &Chord) {
        self.events.push("chord.in".to_string());
    }
    fn visit_chord_end(&mut self, _chord: &Chord) {
        self.events.push("chord.out".to_string());
    }
    fn visit_tuplet_start(&mut self, _tuplet: &Tuplet) {
        self.events.push("tuplet.in".to_string());
    }
    fn visit_tuplet_end(&mut self, _tuplet: &Tuplet) {
        self.events.push("tuplet.out".to_string());
    }
}

/// A pass that only cares about notes; every other hook is a default no-op
#[derive(Default)]
struct NoteCounter {
    count: usize,
}

impl ScoreVisitor for NoteCounter {
    fn visit_note_start(&mut self, _note: &Note) {
        self.count += 1;
    }
}

fn note(line: u32) -> Note {
    Note::new(
        QuarterTonesPitch::new(DiatonicPitch::C, AlterationKind::Natural),
        Rational::new(1, 4).unwrap(),
        line,
    )
}

fn one_measure_score() -> Score {
    let mut score = Score::new(1);
    let part_id = score.append_part("flute", 2);
    let mut measure = Measure::new(1, 3);
    measure.append_element(MeasureElement::Note(note(4)));
    measure.append_element(MeasureElement::Note(note(5)));
    measure.append_element(MeasureElement::Note(note(6)));
    score.part_mut(part_id).unwrap().append_measure(measure);
    score
}

#[test]
fn test_children_visit_in_order_with_paired_hooks() {
    let score = one_measure_score();
    let mut log = EventLog::default();
    browse(&score, &mut log).unwrap();
    assert_eq!(
        log.events,
        vec![
            "score.in",
            "part[flute].in",
            "measure[1].in",
            "note[4].in",
            "note[4].out",
            "note[5].in",
            "note[5].out",
            "note[6].in",
            "note[6].out",
            "measure[1].out",
            "part[flute].out",
            "score.out",
        ]
    );
}

#[test]
fn test_browse_data_walks_children_without_self_hooks() {
    let score = one_measure_score();
    let mut log = EventLog::default();
    score.browse_data(&mut log).unwrap();
    assert_eq!(log.events.first().map(String::as_str), Some("part[flute].in"));
    assert!(!log.events.iter().any(|e| e.starts_with("score")));
}

#[test]
fn test_uninterested_visitor_hooks_default_to_no_ops() {
    let score = one_measure_score();
    let mut counter = NoteCounter::default();
    browse(&score, &mut counter).unwrap();
    assert_eq!(counter.count, 3);
}

#[test]
fn test_chord_notes_browse_inside_the_chord() {
    let mut chord = Chord::new(Rational::new(1, 2).unwrap(), 7);
    chord.append_note(note(8));
    chord.append_note(note(9));
    let mut measure = Measure::new(1, 6);
    measure.append_element(MeasureElement::Chord(chord));

    let mut log = EventLog::default();
    browse(&measure, &mut log).unwrap();
    assert_eq!(
        log.events,
        vec![
            "measure[1].in",
            "chord.in",
            "note[8].in",
            "note[8].out",
            "note[9].in",
            "note[9].out",
            "chord.out",
            "measure[1].out",
        ]
    );
}

#[test]
fn test_pathological_tuplet_nesting_hits_the_depth_bound() {
    let factor = Rational::new(2, 3).unwrap();
    let mut innermost = Tuplet::new(factor, 500);
    innermost.append_element(MeasureElement::Note(note(501)));
    let mut element = MeasureElement::Tuplet(innermost);
    for line in 0..MAX_BROWSE_DEPTH as u32 {
        let mut outer = Tuplet::new(factor, line);
        outer.append_element(element);
        element = MeasureElement::Tuplet(outer);
    }

    let mut log = EventLog::default();
    let result = browse(&element, &mut log);
    assert!(matches!(result, Err(ScoreError::NestingTooDeep { .. })));
}

#[test]
fn test_realistic_nesting_stays_under_the_bound() {
    let factor = Rational::new(2, 3).unwrap();
    let mut inner = Tuplet::new(factor, 1);
    inner.append_element(MeasureElement::Note(note(2)));
    let mut outer = Tuplet::new(factor, 3);
    outer.append_element(MeasureElement::Tuplet(inner));
    let mut measure = Measure::new(1, 4);
    measure.append_element(MeasureElement::Tuplet(outer));
    let mut score = Score::new(5);
    let part_id = score.append_part("oboe", 6);
    score.part_mut(part_id).unwrap().append_measure(measure);

    let mut counter = NoteCounter::default();
    browse(&score, &mut counter).unwrap();
    assert_eq!(counter.count, 1);
}
