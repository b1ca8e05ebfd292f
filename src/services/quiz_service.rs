//! Quiz scoring. Pure computation over a question list and the learner's
//! selections; rendering and persistence are the caller's problem.

use serde::Serialize;

use crate::models::domain::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub correct_count: usize,
    pub total: usize,
    pub per_question: Vec<bool>,
}

impl QuizScore {
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct_count * 100) as f64 / self.total as f64).round() as u32
    }
}

/// Count the positions where the selection equals the question's correct
/// answer index. Unanswered or out-of-range selections count as incorrect,
/// never as an error.
pub fn score(questions: &[QuizQuestion], answers: &[Option<usize>]) -> QuizScore {
    let per_question: Vec<bool> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| answers.get(i).copied().flatten() == Some(q.correct_answer))
        .collect();

    QuizScore {
        correct_count: per_question.iter().filter(|c| **c).count(),
        total: questions.len(),
        per_question,
    }
}

/// One learner's pass through a quiz: selections accumulate until every
/// question is answered, then the attempt can be submitted exactly once.
/// `reset` returns to the initial state for a fresh try.
#[derive(Clone, Debug)]
pub struct QuizAttempt {
    answers: Vec<Option<usize>>,
    submitted: bool,
}

impl QuizAttempt {
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![None; question_count],
            submitted: false,
        }
    }

    /// Record a selection. Ignored once the attempt has been submitted or
    /// when the question index is out of range.
    pub fn select(&mut self, question_index: usize, option_index: usize) {
        if self.submitted {
            return;
        }
        if let Some(slot) = self.answers.get_mut(question_index) {
            *slot = Some(option_index);
        }
    }

    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Score the attempt. Returns `None` until every question has a
    /// selection; the score is only ever computed over a complete answer
    /// vector.
    pub fn submit(&mut self, questions: &[QuizQuestion]) -> Option<QuizScore> {
        if !self.all_answered() {
            return None;
        }
        self.submitted = true;
        Some(score(questions, &self.answers))
    }

    pub fn reset(&mut self) {
        self.answers.fill(None);
        self.submitted = false;
    }
}
