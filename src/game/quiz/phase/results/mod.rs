use crate::game::quiz::definition::Question;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Praise,
    Encourage,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub correct: usize,
    pub total: usize,
    pub score: f64,
    pub verdict: Verdict,
}

impl Outcome {
    /// Scores a finished attempt. `questions` is never empty: an empty quiz
    /// is rejected when it is loaded.
    pub fn compute(questions: &[Question], pass_threshold: f64) -> Self {
        let total = questions.len();
        let correct = questions
            .iter()
            .filter(|q| q.is_answered_correctly())
            .count();
        let score = 100.0 * correct as f64 / total as f64;
        let verdict = if score >= pass_threshold {
            Verdict::Praise
        } else {
            Verdict::Encourage
        };
        Outcome {
            correct,
            total,
            score,
            verdict,
        }
    }
}
