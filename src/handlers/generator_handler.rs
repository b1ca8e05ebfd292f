use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::GenerateScenarioRequest,
        response::{QuizResponse, ScenarioResponse, SimulationBatchResponse},
    },
};

/// The request body is optional here: the training page posts `{}` or
/// nothing at all and expects a medium-difficulty scenario.
#[post("/api/generate-scenario")]
pub async fn generate_scenario(
    state: web::Data<AppState>,
    request: Option<web::Json<GenerateScenarioRequest>>,
) -> Result<HttpResponse, AppError> {
    let difficulty = request
        .and_then(|r| r.into_inner().difficulty)
        .unwrap_or_default();

    let scenario = state
        .generator_service
        .generate_email_scenario(difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(ScenarioResponse { scenario }))
}

#[post("/api/generate-url-scenario")]
pub async fn generate_url_scenario(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scenario = state.generator_service.generate_url_scenario().await?;
    Ok(HttpResponse::Ok().json(ScenarioResponse { scenario }))
}

#[post("/api/generate-login-scenario")]
pub async fn generate_login_scenario(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scenario = state.generator_service.generate_login_scenario().await?;
    Ok(HttpResponse::Ok().json(ScenarioResponse { scenario }))
}

#[post("/api/generate-simulation-batch")]
pub async fn generate_simulation_batch(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (url_scenarios, login_scenarios) =
        state.generator_service.generate_simulation_batch().await?;
    Ok(HttpResponse::Ok().json(SimulationBatchResponse {
        url_scenarios,
        login_scenarios,
    }))
}

#[post("/api/generate-password-quiz")]
pub async fn generate_password_quiz(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let questions = state.generator_service.generate_password_quiz().await?;
    Ok(HttpResponse::Ok().json(QuizResponse { questions }))
}

#[post("/api/generate-phishing-quiz")]
pub async fn generate_phishing_quiz(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let questions = state.generator_service.generate_phishing_quiz().await?;
    Ok(HttpResponse::Ok().json(QuizResponse { questions }))
}
