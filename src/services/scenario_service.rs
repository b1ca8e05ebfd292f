//! Judging phishing-or-legitimate guesses against a scenario's ground
//! truth, and the first-answer-is-final bookkeeping for a simulation
//! session.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::domain::EmailScenario;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgement {
    pub correct: bool,
    pub ground_truth: bool,
    pub explanation: String,
    pub red_flags: Vec<String>,
}

/// Compare a guess to the stored ground truth. Pure and idempotent.
pub fn judge(ground_truth: bool, guess: bool, explanation: &str, red_flags: &[String]) -> Judgement {
    Judgement {
        correct: guess == ground_truth,
        ground_truth,
        explanation: explanation.to_string(),
        red_flags: red_flags.to_vec(),
    }
}

pub fn judge_email(scenario: &EmailScenario, guess: bool) -> Judgement {
    judge(
        scenario.is_phishing,
        guess,
        &scenario.explanation,
        &scenario.red_flags,
    )
}

/// Tracks one guess per scenario id within a browser session's worth of
/// simulation. The first recorded guess is final; a second guess for the
/// same id is refused.
#[derive(Debug, Default)]
pub struct SimulationSession {
    guesses: HashMap<u32, bool>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AlreadyAnswered;

impl SimulationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess for `scenario_id` and return its judgement, or
    /// `AlreadyAnswered` without touching the recorded outcome.
    pub fn record_guess(
        &mut self,
        scenario_id: u32,
        ground_truth: bool,
        guess: bool,
        explanation: &str,
        red_flags: &[String],
    ) -> Result<Judgement, AlreadyAnswered> {
        if self.guesses.contains_key(&scenario_id) {
            return Err(AlreadyAnswered);
        }
        self.guesses.insert(scenario_id, guess);
        Ok(judge(ground_truth, guess, explanation, red_flags))
    }

    pub fn guess_for(&self, scenario_id: u32) -> Option<bool> {
        self.guesses.get(&scenario_id).copied()
    }

    /// Forget everything, e.g. when a fresh batch of scenarios replaces the
    /// current set.
    pub fn reset(&mut self) {
        self.guesses.clear();
    }
}
