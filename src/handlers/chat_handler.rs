use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ChatRequest, response::ChatResponse},
};

#[post("/api/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .chat_service
        .reply(&request.message, &request.history)
        .await?;
    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}
