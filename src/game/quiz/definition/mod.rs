use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub mod question;

pub use question::{Label, Question, QuizOption, RawQuestion};


#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not open quiz file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse quiz file: {0}")]
    Csv(#[from] csv::Error),
    #[error("quiz file has no questions")]
    Empty,
    #[error("question {row} has an empty `{field}` field")]
    MissingField { row: usize, field: String },
    #[error("answer `{answer}` of question {row} does not match any of its options")]
    UnknownAnswer { row: usize, answer: String },
    #[error("question {row} needs at least two options")]
    TooFewOptions { row: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, DataError> {
        let file = File::open(source)?;
        QuizDefinition::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition, DataError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut raw_questions = Vec::new();
        for question in csv_reader.deserialize() {
            let raw_question: RawQuestion = question?;
            raw_questions.push(raw_question);
        }
        QuizDefinition::from_raw_questions(raw_questions)
    }

    pub fn from_raw_questions(
        raw_questions: Vec<RawQuestion>,
    ) -> Result<QuizDefinition, DataError> {
        let questions = raw_questions
            .into_iter()
            .enumerate()
            .map(|(index, raw_question)| Question::from_raw(index + 1, raw_question))
            .collect::<Result<Vec<_>, _>>()?;
        QuizDefinition::from_questions(questions)
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<QuizDefinition, DataError> {
        if questions.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(QuizDefinition { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub(crate) fn get_questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }
}
