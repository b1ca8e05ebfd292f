use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::DetectionRequest, response::DetectionResponse},
};

#[post("/api/detect-phishing")]
pub async fn detect_phishing(
    state: web::Data<AppState>,
    request: web::Json<DetectionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let analysis = state
        .generator_service
        .detect_phishing(&request.content, request.kind)
        .await?;
    Ok(HttpResponse::Ok().json(DetectionResponse { analysis }))
}
