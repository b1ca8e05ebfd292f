use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ConversationTurn, QuizQuestion};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Entire transcript so far; the server holds no memory between calls.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Email,
    Url,
}

impl ContentKind {
    /// How the analyzed input is described to the model.
    pub fn description(self) -> &'static str {
        match self {
            ContentKind::Email => "email content",
            ContentKind::Url => "URL",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DetectionRequest {
    #[validate(length(min = 1, message = "Content and type are required"))]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn instructions(self) -> &'static str {
        match self {
            Difficulty::Easy => "Make the phishing indicators very obvious (e.g., poor grammar, obvious fake email addresses, suspicious links).",
            Difficulty::Medium => "Make the phishing indicators moderately subtle but still detectable with careful inspection.",
            Difficulty::Hard => "Make the phishing indicators quite subtle, mimicking sophisticated spear-phishing attempts.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateScenarioRequest {
    pub difficulty: Option<Difficulty>,
}

/// The scenario the learner just answered, echoed back for feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorScenario {
    pub from: String,
    pub subject: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub red_flags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    pub scenario: TutorScenario,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub user_answer: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub correct_answer: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub quiz: Vec<QuizQuestion>,
    /// One entry per question; `null` marks an unanswered question.
    pub answers: Vec<Option<usize>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordStrengthRequest {
    pub password: String,
}
