use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// Informational response for idempotent operations, e.g. `Already registered`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "valid": true }` style validation result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ValidDto {
    pub valid: bool,
}

/// Body carrying a list of integer ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct IdsDto {
    pub ids: Vec<i32>,
}

/// Vote body shared by deadlines and reviews: `agree` or `disagree`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VoteDto {
    pub vote_type: String,
}
