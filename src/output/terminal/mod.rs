use anyhow::Result;
use itertools::Itertools;
use std::io::Write;

use crate::game::quiz::phase::{Highlight, Outcome, Phase, Verdict};
use crate::game::quiz::{QuestionView, Snapshot};
use crate::output::QuizOutput;

#[cfg(test)]
mod tests;

const RULE: &str = "----------------------------------------";

pub struct TerminalOutput<W: Write> {
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn option_marker(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::None => " ",
        Highlight::Correct => "✔",
        Highlight::Incorrect => "✘",
    }
}

fn question_screen(snapshot: &Snapshot, question: &QuestionView) -> Vec<String> {
    let mut lines = vec![
        format!("Question {} / {}", snapshot.index + 1, snapshot.total),
        String::new(),
        question.prompt.clone(),
        String::new(),
    ];
    for option in &question.options {
        lines.push(format!(
            "{} {}. {}",
            option_marker(option.highlight),
            option.label,
            option.text
        ));
    }
    lines.push(String::new());
    match snapshot.phase {
        Phase::Answering => {
            let labels = question.options.iter().map(|o| o.label).join("/");
            lines.push(format!("Pick an answer ({}):", labels.to_lowercase()));
        }
        Phase::CorrectFeedback => lines.push("Correct!".to_owned()),
        Phase::IncorrectFeedback => {
            lines.push("Wrong! The correct answer is marked.".to_owned())
        }
        Phase::Finished => (),
    }
    lines
}

fn results_screen(outcome: &Outcome) -> Vec<String> {
    let headline = match outcome.verdict {
        Verdict::Praise => "Perfect!",
        Verdict::Encourage => "Keep going!",
    };
    let message = match outcome.verdict {
        Verdict::Praise => "You really know your stuff. Keep it up!",
        Verdict::Encourage => "Don't give up, a few more tries and you'll get there!",
    };
    vec![
        // Halves round up, away from zero.
        format!("{} Your score: {}", headline, outcome.score.round()),
        format!("{} of {} answers correct", outcome.correct, outcome.total),
        String::new(),
        message.to_owned(),
        String::new(),
        "Type `r` to restart the quiz.".to_owned(),
    ]
}

pub fn render(snapshot: &Snapshot) -> Vec<String> {
    match (&snapshot.question, &snapshot.outcome) {
        (_, Some(outcome)) if snapshot.phase == Phase::Finished => results_screen(outcome),
        (Some(question), _) => question_screen(snapshot, question),
        (None, _) => vec![],
    }
}

impl<W: Write> QuizOutput for TerminalOutput<W> {
    fn draw(&mut self, snapshot: &Snapshot) -> Result<()> {
        writeln!(self.writer, "{}", RULE)?;
        for line in render(snapshot) {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
