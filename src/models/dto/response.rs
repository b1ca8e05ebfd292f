use serde::Serialize;

use crate::models::domain::{
    DetectionResult, EmailScenario, LoginPageScenario, QuizQuestion, UrlScenario,
};

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub analysis: DetectionResult,
}

#[derive(Debug, Serialize)]
pub struct ScenarioResponse<T: Serialize> {
    pub scenario: T,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorResponse {
    pub feedback: String,
    pub is_correct: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationBatchResponse {
    pub url_scenarios: Vec<UrlScenario>,
    pub login_scenarios: Vec<LoginPageScenario>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub correct_count: usize,
    pub total: usize,
    pub percentage: u32,
    pub per_question: Vec<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioBankResponse {
    pub email_scenarios: Vec<EmailScenario>,
    pub url_scenarios: Vec<UrlScenario>,
    pub login_scenarios: Vec<LoginPageScenario>,
}
