use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestDto {
    #[serde(default)]
    pub question: String,
    pub top_k: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChatResponseDto {
    pub answer: String,
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    #[serde(default)]
    pub sources: Vec<serde_json::Value>,
}
