use super::*;
use crate::game::quiz::definition::{Label, Question, QuizDefinition};
use crate::game::quiz::scheduler::mock::MockScheduler;
use crate::game::quiz::settings::Settings;
use crate::game::quiz::Quiz;

fn quiz(num_questions: usize) -> Quiz<MockScheduler> {
    let questions = (1..=num_questions)
        .map(|i| {
            Question::new(
                i,
                format!("What is {} + {}?", i, i),
                vec![
                    format!("{}", 2 * i),
                    format!("{}", 2 * i + 1),
                    format!("{}", 2 * i + 2),
                    format!("{}", 2 * i + 3),
                ],
                format!("{}", 2 * i),
            )
            .unwrap()
        })
        .collect();
    let definition = QuizDefinition::from_questions(questions).unwrap();
    Quiz::new(definition, Settings::default(), MockScheduler::new())
}

#[test]
fn renders_question() {
    let lines = render(&quiz(2).snapshot());
    assert_eq!(lines[0], "Question 1 / 2");
    assert_eq!(lines[2], "What is 1 + 1?");
    assert_eq!(lines[4], "  A. 2");
    assert_eq!(lines[7], "  D. 5");
    assert_eq!(lines.last().unwrap(), "Pick an answer (a/b/c/d):");
}

#[test]
fn renders_incorrect_feedback() {
    let mut quiz = quiz(2);
    quiz.select_option(Label::B).unwrap();
    let lines = render(&quiz.snapshot());
    assert_eq!(lines[4], "✔ A. 2");
    assert_eq!(lines[5], "✘ B. 3");
    assert_eq!(lines[6], "  C. 4");
    assert_eq!(lines.last().unwrap(), "Wrong! The correct answer is marked.");
}

#[test]
fn renders_correct_feedback() {
    let mut quiz = quiz(2);
    quiz.select_option(Label::A).unwrap();
    let lines = render(&quiz.snapshot());
    assert_eq!(lines[4], "✔ A. 2");
    assert_eq!(lines.last().unwrap(), "Correct!");
}

#[test]
fn renders_encouragement() {
    let mut quiz = quiz(4);
    for label in &[Label::A, Label::A, Label::A, Label::C] {
        quiz.select_option(*label).unwrap();
        quiz.advance();
    }
    let lines = render(&quiz.snapshot());
    assert_eq!(lines[0], "Keep going! Your score: 75");
    assert_eq!(lines[1], "3 of 4 answers correct");
    assert_eq!(lines.last().unwrap(), "Type `r` to restart the quiz.");
}

#[test]
fn renders_praise() {
    let mut quiz = quiz(3);
    for _ in 0..3 {
        quiz.select_option(Label::A).unwrap();
        quiz.advance();
    }
    let lines = render(&quiz.snapshot());
    assert_eq!(lines[0], "Perfect! Your score: 100");
}

#[test]
fn rounds_score() {
    let mut quiz = quiz(3);
    for label in &[Label::A, Label::A, Label::B] {
        quiz.select_option(*label).unwrap();
        quiz.advance();
    }
    let lines = render(&quiz.snapshot());
    assert_eq!(lines[0], "Keep going! Your score: 67");
}

#[test]
fn writes_to_writer() {
    let mut output = TerminalOutput::new(Vec::new());
    output.draw(&quiz(1).snapshot()).unwrap();
    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.starts_with(RULE));
    assert!(text.contains("What is 1 + 1?\n"));
}

#[test]
fn rounds_half_scores_up() {
    let mut quiz = quiz(8);
    quiz.select_option(Label::A).unwrap();
    quiz.advance();
    for _ in 1..8 {
        quiz.select_option(Label::B).unwrap();
        quiz.advance();
    }
    let lines = render(&quiz.snapshot());
    assert_eq!(lines[0], "Keep going! Your score: 13");
    assert_eq!(lines[1], "1 of 8 answers correct");
}
