use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::TutorRequest, response::TutorResponse},
};

#[post("/api/ai-tutor")]
pub async fn ai_tutor(
    state: web::Data<AppState>,
    request: web::Json<TutorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (feedback, is_correct) = state.generator_service.tutor_feedback(&request).await?;
    Ok(HttpResponse::Ok().json(TutorResponse {
        feedback,
        is_correct,
    }))
}
