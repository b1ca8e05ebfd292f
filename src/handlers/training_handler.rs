//! The static learning modules: compiled-in banks, server-side quiz
//! scoring, and the password-strength meter.

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::question::{PASSWORD_QUESTIONS, PHISHING_QUESTIONS},
        domain::scenario::{EMAIL_SCENARIOS, LOGIN_PAGE_SCENARIOS, URL_SCENARIOS},
        dto::{
            request::{PasswordStrengthRequest, ScoreRequest},
            response::{QuizResponse, ScenarioBankResponse, ScoreResponse},
        },
    },
    services::{quiz_service, strength_service},
};

#[get("/api/training/password-questions")]
pub async fn password_questions() -> HttpResponse {
    HttpResponse::Ok().json(QuizResponse {
        questions: PASSWORD_QUESTIONS.clone(),
    })
}

#[get("/api/training/phishing-questions")]
pub async fn phishing_questions() -> HttpResponse {
    HttpResponse::Ok().json(QuizResponse {
        questions: PHISHING_QUESTIONS.clone(),
    })
}

#[get("/api/training/scenarios")]
pub async fn scenario_banks() -> HttpResponse {
    HttpResponse::Ok().json(ScenarioBankResponse {
        email_scenarios: EMAIL_SCENARIOS.clone(),
        url_scenarios: URL_SCENARIOS.clone(),
        login_scenarios: LOGIN_PAGE_SCENARIOS.clone(),
    })
}

#[post("/api/training/score")]
pub async fn score_quiz(
    request: web::Json<ScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    if request.answers.len() != request.quiz.len() {
        return Err(AppError::InvalidInput(
            "Expected one answer per question".to_string(),
        ));
    }
    if request.answers.iter().any(Option::is_none) {
        return Err(AppError::InvalidInput(
            "Please answer all questions before submitting".to_string(),
        ));
    }

    let score = quiz_service::score(&request.quiz, &request.answers);
    Ok(HttpResponse::Ok().json(ScoreResponse {
        percentage: score.percentage(),
        correct_count: score.correct_count,
        total: score.total,
        per_question: score.per_question,
    }))
}

#[post("/api/password-strength")]
pub async fn password_strength(request: web::Json<PasswordStrengthRequest>) -> HttpResponse {
    HttpResponse::Ok().json(strength_service::evaluate(&request.password))
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "aiConfigured": state.config.gemini_api_key.is_some(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_password_questions_returns_bank() {
        let app = test::init_service(App::new().service(password_questions)).await;

        let req = test::TestRequest::get()
            .uri("/api/training/password-questions")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    }

    #[actix_web::test]
    async fn test_scenario_banks_cover_all_three_kinds() {
        let app = test::init_service(App::new().service(scenario_banks)).await;

        let req = test::TestRequest::get()
            .uri("/api/training/scenarios")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        assert_eq!(body["emailScenarios"].as_array().unwrap().len(), 3);
        assert_eq!(body["urlScenarios"].as_array().unwrap().len(), 3);
        assert_eq!(body["loginScenarios"].as_array().unwrap().len(), 3);
    }
}
