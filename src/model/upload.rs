use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UploadRequestDto {
    pub file_name: String,
    pub mime: String,
    /// Size in bytes.
    pub size: i64,
}

/// A signed upload slot in object storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignedUploadDto {
    pub bucket: String,
    pub path: String,
    pub token: String,
    pub signed_url: String,
    pub public_url: String,
}
