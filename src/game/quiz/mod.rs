use thiserror::Error;
use tracing::debug;

use self::definition::*;
use self::phase::*;
use self::scheduler::{Scheduler, TimerId};
use self::settings::*;

pub mod definition;
pub mod phase;
pub mod scheduler;
pub mod settings;


#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("option {label} is not available for question {question}")]
    UnknownLabel { label: Label, question: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectOutcome {
    Correct,
    Incorrect,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub label: Label,
    pub text: String,
    pub highlight: Highlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<OptionView>,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub index: usize,
    pub total: usize,
    pub question: Option<QuestionView>,
    pub phase: Phase,
    pub selected: Option<Label>,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    pub fn score(&self) -> Option<f64> {
        self.outcome.as_ref().map(|o| o.score)
    }
}

pub struct Quiz<S: Scheduler> {
    definition: QuizDefinition,
    settings: Settings,
    scheduler: S,
    current_index: usize,
    current_phase: Phase,
    selected: Option<Label>,
    outcome: Option<Outcome>,
    generation: u64,
}

impl<S: Scheduler> Quiz<S> {
    pub fn new(definition: QuizDefinition, settings: Settings, scheduler: S) -> Quiz<S> {
        let mut quiz = Quiz {
            definition,
            settings,
            scheduler,
            current_index: 0,
            current_phase: Phase::Answering,
            selected: None,
            outcome: None,
            generation: 0,
        };
        quiz.clear_answers();
        quiz.check_finished();
        quiz
    }

    pub fn is_over(&self) -> bool {
        self.current_phase == Phase::Finished
    }

    pub fn get_scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn set_current_phase(&mut self, phase: Phase) {
        debug!("Entering quiz phase: {:?}{}", phase, self.describe_position(phase));
        self.current_phase = phase;
    }

    fn describe_position(&self, phase: Phase) -> String {
        match phase {
            Phase::Finished => String::new(),
            Phase::Answering | Phase::CorrectFeedback | Phase::IncorrectFeedback => format!(
                " (question {} of {})",
                self.current_index + 1,
                self.definition.len()
            ),
        }
    }

    fn clear_answers(&mut self) {
        for question in self.definition.get_questions_mut().iter_mut() {
            question.clear_answer();
        }
    }

    fn current_question(&self) -> Option<&Question> {
        self.definition.get_questions().get(self.current_index)
    }

    pub fn select_option(&mut self, label: Label) -> Result<SelectOutcome, QuizError> {
        if self.current_phase != Phase::Answering {
            return Ok(SelectOutcome::Ignored);
        }
        let index = self.current_index;
        let question = match self.definition.get_questions_mut().get_mut(index) {
            Some(question) => question,
            None => return Ok(SelectOutcome::Ignored),
        };
        if question.is_answered() {
            return Ok(SelectOutcome::Ignored);
        }
        let text = question
            .option(label)
            .map(|o| o.text.clone())
            .ok_or(QuizError::UnknownLabel {
                label,
                question: index + 1,
            })?;

        let is_correct = question.is_correct_text(&text);
        question.user_answer = Some(text);
        self.selected = Some(label);

        let (outcome, phase) = if is_correct {
            (SelectOutcome::Correct, Phase::CorrectFeedback)
        } else {
            (SelectOutcome::Incorrect, Phase::IncorrectFeedback)
        };
        self.set_current_phase(phase);

        self.generation += 1;
        let timer = TimerId {
            generation: self.generation,
        };
        self.scheduler
            .schedule_once(self.settings.feedback_duration, timer);

        Ok(outcome)
    }

    pub fn on_timer(&mut self, timer: TimerId) {
        if timer.generation != self.generation {
            debug!("Ignoring stale timer {:?}", timer);
            return;
        }
        self.advance();
    }

    pub fn advance(&mut self) {
        if !self.current_phase.is_feedback() {
            return;
        }
        self.current_index += 1;
        self.selected = None;
        self.set_current_phase(Phase::Answering);
        self.check_finished();
    }

    pub fn restart(&mut self) {
        self.clear_answers();
        self.current_index = 0;
        self.selected = None;
        self.outcome = None;
        self.generation += 1;
        self.set_current_phase(Phase::Answering);
        self.check_finished();
    }

    fn check_finished(&mut self) {
        if self.current_phase != Phase::Answering
            || self.current_index < self.definition.len()
        {
            return;
        }
        let outcome = Outcome::compute(
            self.definition.get_questions(),
            self.settings.pass_threshold,
        );
        debug!(
            "Quiz finished: {}/{} correct, score {}",
            outcome.correct, outcome.total, outcome.score
        );
        self.outcome = Some(outcome);
        self.set_current_phase(Phase::Finished);
    }

    pub fn snapshot(&self) -> Snapshot {
        let question = self.current_question().map(|question| QuestionView {
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    label: option.label,
                    text: option.text.clone(),
                    highlight: highlight(self.current_phase, question, option, self.selected),
                })
                .collect(),
        });
        Snapshot {
            index: self.current_index,
            total: self.definition.len(),
            question,
            phase: self.current_phase,
            selected: self.selected,
            outcome: self.outcome.clone(),
        }
    }
}
