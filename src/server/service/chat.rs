//! Question answering over course material, delegated to an external QA endpoint.

use serde::{Deserialize, Serialize};

use crate::{
    model::chat::ChatResponseDto,
    server::error::{internal::InternalError, AppError},
};

pub const DEFAULT_TOP_K: u32 = 5;

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    top_k: u32,
}

#[derive(Deserialize)]
struct AskResponse {
    #[serde(default)]
    answer: String,
    #[serde(default)]
    sources: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatAnswer {
    pub answer: String,
    pub sources: Vec<serde_json::Value>,
}

impl ChatAnswer {
    pub fn into_dto(self) -> ChatResponseDto {
        ChatResponseDto {
            answer: self.answer,
            sources: self.sources,
        }
    }
}

pub struct ChatService<'a> {
    http_client: &'a reqwest::Client,
    qa_url: &'a str,
}

impl<'a> ChatService<'a> {
    pub fn new(http_client: &'a reqwest::Client, qa_url: &'a str) -> Self {
        Self {
            http_client,
            qa_url,
        }
    }

    /// Forwards a question to `{qa_url}/ask`.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank question
    /// - `Err(AppError::InternalErr)` - The endpoint answered with a non-success status
    pub async fn ask(&self, question: &str, top_k: Option<u32>) -> Result<ChatAnswer, AppError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::BadRequest("Question is required".to_string()));
        }

        let response = self
            .http_client
            .post(format!("{}/ask", self.qa_url))
            .json(&AskRequest {
                question,
                top_k: top_k.filter(|k| *k > 0).unwrap_or(DEFAULT_TOP_K),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InternalError::QaResponse {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let answer: AskResponse = response.json().await?;

        Ok(ChatAnswer {
            answer: answer.answer,
            sources: answer.sources,
        })
    }
}
