//! The generative-content proxies. Every generator walks the same path:
//! build the prompt, invoke the model, extract the first JSON object from
//! the reply, strictly decode it, validate the endpoint's required fields,
//! and hand back a domain value. Each request fully succeeds or fully
//! fails; nothing is retried or cached.

use std::sync::Arc;

use futures::future::{try_join, try_join_all};
use serde::Deserialize;

use crate::{
    config::Config,
    constants::prompts,
    errors::{AppError, AppResult},
    models::{
        domain::{DetectionResult, EmailScenario, LoginPageScenario, QuizQuestion, UrlScenario},
        dto::request::{ContentKind, Difficulty, TutorRequest},
    },
    services::{
        extraction::extract_and_decode,
        model_service::{GenerativeModel, ModelContent},
    },
};

pub const QUIZ_LENGTH: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;
const BATCH_SIZE: usize = 3;

pub struct GeneratorService {
    model: Arc<dyn GenerativeModel>,
    tutor_model: String,
    generation_model: String,
    scenario_model: String,
}

/// Email scenario as the model emits it. Ground truth may arrive as the
/// legacy `type` string, an `isPhishing` boolean, or both; it is normalized
/// to one boolean here and nowhere else.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEmailScenario {
    #[serde(default)]
    from: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    body: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    is_phishing: Option<bool>,
    #[serde(default)]
    red_flags: Vec<String>,
    #[serde(default)]
    explanation: String,
}

impl RawEmailScenario {
    fn normalize(self) -> AppResult<EmailScenario> {
        let ground_truth = self
            .is_phishing
            .or_else(|| self.kind.as_deref().map(|k| k.eq_ignore_ascii_case("phishing")));

        match ground_truth {
            Some(is_phishing)
                if !self.from.is_empty() && !self.subject.is_empty() && !self.body.is_empty() =>
            {
                Ok(EmailScenario {
                    id: 0,
                    from: self.from,
                    subject: self.subject,
                    body: self.body,
                    is_phishing,
                    red_flags: self.red_flags,
                    explanation: self.explanation,
                })
            }
            _ => Err(AppError::MalformedResponse(
                "Incomplete scenario generated".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUrlScenario {
    #[serde(default)]
    url: String,
    #[serde(default)]
    display_text: String,
    is_phishing: Option<bool>,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLoginScenario {
    #[serde(default)]
    site_name: String,
    #[serde(default)]
    url: String,
    has_https: Option<bool>,
    has_suspicious_domain: Option<bool>,
    is_phishing: Option<bool>,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct RawQuizPayload {
    questions: Option<Vec<RawQuizQuestion>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuizQuestion {
    id: Option<u32>,
    #[serde(default)]
    question: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: Option<usize>,
    #[serde(default)]
    explanation: String,
}

fn validate_quiz(payload: RawQuizPayload) -> AppResult<Vec<QuizQuestion>> {
    let questions = payload.questions.unwrap_or_default();
    if questions.len() != QUIZ_LENGTH {
        return Err(AppError::MalformedResponse(
            "Invalid quiz data generated".to_string(),
        ));
    }

    questions
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let correct_answer = raw.correct_answer.filter(|a| *a < OPTIONS_PER_QUESTION);
            match correct_answer {
                Some(correct_answer)
                    if !raw.question.is_empty()
                        && raw.options.len() == OPTIONS_PER_QUESTION
                        && !raw.explanation.is_empty() =>
                {
                    Ok(QuizQuestion {
                        id: raw.id.unwrap_or(i as u32 + 1),
                        question: raw.question,
                        options: raw.options,
                        correct_answer,
                        explanation: raw.explanation,
                    })
                }
                _ => Err(AppError::MalformedResponse(
                    "Incomplete question data".to_string(),
                )),
            }
        })
        .collect()
}

impl GeneratorService {
    pub fn new(model: Arc<dyn GenerativeModel>, config: &Config) -> Self {
        Self {
            model,
            tutor_model: config.chat_model.clone(),
            generation_model: config.generation_model.clone(),
            scenario_model: config.scenario_model.clone(),
        }
    }

    async fn prompt(&self, model_name: &str, prompt: String) -> AppResult<String> {
        let contents = [ModelContent::user(prompt)];
        let text = self.model.generate(model_name, &contents).await?;
        Ok(text)
    }

    pub async fn generate_email_scenario(
        &self,
        difficulty: Difficulty,
    ) -> AppResult<EmailScenario> {
        let prompt = format!(
            "{}\n\nDifficulty level: {}\n{}\n\nRespond ONLY with valid JSON, no additional text.",
            prompts::EMAIL_SCENARIO_PROMPT,
            difficulty.as_str().to_uppercase(),
            difficulty.instructions(),
        );

        let text = self.prompt(&self.scenario_model, prompt).await;
        text.and_then(|t| extract_and_decode::<RawEmailScenario>(&t)?.normalize())
            .map_err(|e| e.with_generic_failure("Failed to generate scenario"))
    }

    pub async fn generate_url_scenario(&self) -> AppResult<UrlScenario> {
        let text = self
            .prompt(&self.generation_model, prompts::URL_SCENARIO_PROMPT.to_string())
            .await;

        text.and_then(|t| {
            let raw: RawUrlScenario = extract_and_decode(&t)?;
            match raw.is_phishing {
                Some(is_phishing)
                    if !raw.url.is_empty()
                        && !raw.display_text.is_empty()
                        && !raw.explanation.is_empty() =>
                {
                    Ok(UrlScenario {
                        id: 0,
                        url: raw.url,
                        display_text: raw.display_text,
                        is_phishing,
                        explanation: raw.explanation,
                    })
                }
                _ => Err(AppError::MalformedResponse(
                    "Incomplete scenario data".to_string(),
                )),
            }
        })
        .map_err(|e| e.with_generic_failure("Failed to generate URL scenario"))
    }

    pub async fn generate_login_scenario(&self) -> AppResult<LoginPageScenario> {
        let text = self
            .prompt(&self.generation_model, prompts::LOGIN_SCENARIO_PROMPT.to_string())
            .await;

        text.and_then(|t| {
            let raw: RawLoginScenario = extract_and_decode(&t)?;
            match (raw.has_https, raw.has_suspicious_domain, raw.is_phishing) {
                (Some(uses_https), Some(has_suspicious_domain), Some(is_phishing))
                    if !raw.site_name.is_empty()
                        && !raw.url.is_empty()
                        && !raw.explanation.is_empty() =>
                {
                    Ok(LoginPageScenario {
                        id: 0,
                        site_name: raw.site_name,
                        url: raw.url,
                        uses_https,
                        has_suspicious_domain,
                        is_phishing,
                        explanation: raw.explanation,
                    })
                }
                _ => Err(AppError::MalformedResponse(
                    "Incomplete scenario data".to_string(),
                )),
            }
        })
        .map_err(|e| e.with_generic_failure("Failed to generate login scenario"))
    }

    /// Generate three URL and three login-page scenarios concurrently.
    /// All-or-nothing: a single failed call discards the whole batch.
    pub async fn generate_simulation_batch(
        &self,
    ) -> AppResult<(Vec<UrlScenario>, Vec<LoginPageScenario>)> {
        let urls = try_join_all((0..BATCH_SIZE).map(|_| self.generate_url_scenario()));
        let logins = try_join_all((0..BATCH_SIZE).map(|_| self.generate_login_scenario()));

        let (mut urls, mut logins) = try_join(urls, logins).await?;
        for (i, scenario) in urls.iter_mut().enumerate() {
            scenario.id = i as u32 + 1;
        }
        for (i, scenario) in logins.iter_mut().enumerate() {
            scenario.id = i as u32 + 1;
        }
        Ok((urls, logins))
    }

    pub async fn generate_password_quiz(&self) -> AppResult<Vec<QuizQuestion>> {
        let text = self
            .prompt(&self.generation_model, prompts::PASSWORD_QUIZ_PROMPT.to_string())
            .await;

        text.and_then(|t| validate_quiz(extract_and_decode(&t)?))
            .map_err(|e| e.with_generic_failure("Failed to generate quiz"))
    }

    pub async fn generate_phishing_quiz(&self) -> AppResult<Vec<QuizQuestion>> {
        let text = self
            .prompt(&self.generation_model, prompts::PHISHING_QUIZ_PROMPT.to_string())
            .await;

        text.and_then(|t| validate_quiz(extract_and_decode(&t)?))
            .map_err(|e| e.with_generic_failure("Failed to generate quiz"))
    }

    pub async fn detect_phishing(
        &self,
        content: &str,
        kind: ContentKind,
    ) -> AppResult<DetectionResult> {
        let prompt = format!(
            "{}\n\nAnalyze this {}:\n\n{}",
            prompts::DETECTION_PROMPT,
            kind.description(),
            content,
        );

        let text = self.prompt(&self.generation_model, prompt).await;
        text.and_then(|t| {
            let analysis: DetectionResult = extract_and_decode(&t)?;
            if analysis.analysis.is_empty() || analysis.recommendation.is_empty() {
                return Err(AppError::MalformedResponse(
                    "Incomplete analysis data".to_string(),
                ));
            }
            Ok(analysis)
        })
        .map_err(|e| e.with_generic_failure("Failed to analyze content"))
    }

    /// Personalized feedback on an answered exercise. Correctness is a
    /// case-insensitive comparison decided here, not by the model.
    pub async fn tutor_feedback(&self, request: &TutorRequest) -> AppResult<(String, bool)> {
        let is_correct = request
            .user_answer
            .eq_ignore_ascii_case(&request.correct_answer);

        let scenario = &request.scenario;
        let red_flags_line = match &scenario.red_flags {
            Some(flags) if !flags.is_empty() => format!("- Red Flags: {}\n", flags.join(", ")),
            _ => String::new(),
        };
        let context_line = match &request.context {
            Some(context) if !context.is_empty() => format!("Additional Context: {context}\n\n"),
            _ => String::new(),
        };

        let prompt = format!(
            "{}\n\nScenario:\n- From: {}\n- Subject: {}\n- Type: {}\n{}\nUser's Answer: {}\nCorrect Answer: {}\nResult: {}\n\n{}Provide personalized feedback for this student. If they were correct, reinforce their good judgment and highlight what they did well. If incorrect, gently explain why and help them learn to spot similar threats.\n\nKeep your response to 2-4 sentences, friendly and encouraging.",
            prompts::TUTOR_PROMPT,
            scenario.from,
            scenario.subject,
            scenario.kind,
            red_flags_line,
            request.user_answer,
            request.correct_answer,
            if is_correct { "CORRECT" } else { "INCORRECT" },
            context_line,
        );

        let feedback = self
            .prompt(&self.tutor_model, prompt)
            .await
            .map_err(|e| e.with_generic_failure("Failed to get feedback"))?;
        Ok((feedback, is_correct))
    }
}
