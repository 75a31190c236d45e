use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatRequestDto, ChatResponseDto},
    },
    server::{error::AppError, service::chat::ChatService, state::AppState},
};

pub static CHAT_TAG: &str = "chat";

/// Forwards a question to the course Q&A service.
///
/// Requests are rate limited per client IP.
///
/// # Returns
/// - `200 OK` - Answer with its sources
/// - `400 Bad Request` - Blank question
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - The Q&A service failed
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Answer", body = ChatResponseDto),
        (status = 400, description = "Question is required", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Q&A service failed", body = ErrorDto)
    ),
)]
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let answer = ChatService::new(&state.http_client, &state.settings.chat_qa_url)
        .ask(&payload.question, payload.top_k)
        .await?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}
