use crate::game::quiz::definition::{Label, Question, QuizOption};
use crate::game::quiz::phase::Phase;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Highlight {
    None,
    Correct,
    Incorrect,
}

/// How an option should be marked on screen. Only feedback phases reveal
/// anything: the correct option(s) and, after a wrong pick, the pick itself.
pub fn highlight(
    phase: Phase,
    question: &Question,
    option: &QuizOption,
    selected: Option<Label>,
) -> Highlight {
    if !phase.is_feedback() {
        return Highlight::None;
    }
    if question.is_correct_text(&option.text) {
        Highlight::Correct
    } else if selected == Some(option.label) {
        Highlight::Incorrect
    } else {
        Highlight::None
    }
}
