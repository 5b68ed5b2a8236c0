use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::DataError;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Label(usize);

impl Label {
    pub const A: Label = Label(0);
    pub const B: Label = Label(1);
    pub const C: Label = Label(2);
    pub const D: Label = Label(3);

    pub fn from_index(index: usize) -> Self {
        Label(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'A' + self.0 as u8) as char)
        } else {
            write!(f, "#{}", self.0 + 1)
        }
    }
}

impl FromStr for Label {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Label((c.to_ascii_uppercase() as u8 - b'A') as usize))
            }
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizOption {
    pub label: Label,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub question: String,
    #[serde(rename = "optionA")]
    pub option_a: String,
    #[serde(rename = "optionB")]
    pub option_b: String,
    #[serde(rename = "optionC")]
    pub option_c: String,
    #[serde(rename = "optionD")]
    pub option_d: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub correct_text: String,
    pub user_answer: Option<String>,
}

impl Question {
    /// Builds a question from its prompt, option texts in label order and
    /// the text of the correct option. `row` is only used in error reports.
    pub fn new(
        row: usize,
        prompt: String,
        options: Vec<String>,
        correct_text: String,
    ) -> Result<Self, DataError> {
        if prompt.trim().is_empty() {
            return Err(DataError::MissingField {
                row,
                field: "question".to_owned(),
            });
        }
        if options.len() < 2 {
            return Err(DataError::TooFewOptions { row });
        }
        for (index, text) in options.iter().enumerate() {
            if text.trim().is_empty() {
                return Err(DataError::MissingField {
                    row,
                    field: format!("option{}", Label(index)),
                });
            }
        }
        if correct_text.trim().is_empty() {
            return Err(DataError::MissingField {
                row,
                field: "answer".to_owned(),
            });
        }
        if !options.iter().any(|text| *text == correct_text) {
            return Err(DataError::UnknownAnswer {
                row,
                answer: correct_text,
            });
        }

        let options = options
            .into_iter()
            .enumerate()
            .map(|(index, text)| QuizOption {
                label: Label(index),
                text,
            })
            .collect();

        Ok(Question {
            prompt,
            options,
            correct_text,
            user_answer: None,
        })
    }

    pub fn from_raw(row: usize, raw_question: RawQuestion) -> Result<Self, DataError> {
        let options = vec![
            raw_question.option_a,
            raw_question.option_b,
            raw_question.option_c,
            raw_question.option_d,
        ];
        Question::new(row, raw_question.question, options, raw_question.answer)
    }

    pub fn option(&self, label: Label) -> Option<&QuizOption> {
        self.options.get(label.index())
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    pub fn is_correct_text(&self, text: &str) -> bool {
        self.correct_text == text
    }

    pub fn is_answered_correctly(&self) -> bool {
        match &self.user_answer {
            Some(answer) => self.is_correct_text(answer),
            None => false,
        }
    }

    pub fn clear_answer(&mut self) {
        self.user_answer = None;
    }
}
