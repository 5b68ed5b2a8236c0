mod feedback;
mod results;

pub use self::feedback::*;
pub use self::results::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Answering,
    CorrectFeedback,
    IncorrectFeedback,
    Finished,
}

impl Phase {
    pub fn is_feedback(self) -> bool {
        match self {
            Phase::CorrectFeedback | Phase::IncorrectFeedback => true,
            Phase::Answering | Phase::Finished => false,
        }
    }
}
