//! Object storage client.
//!
//! Talks to the storage REST API with the service key. The server never handles file
//! bodies itself: it issues signed upload slots and deletes objects that lost their owner.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::upload::{SignedUpload, UploadPurpose, UploadRequest},
    state::StorageSettings,
};

#[derive(Deserialize)]
struct SignUploadResponse {
    url: String,
}

#[derive(Serialize)]
struct RemoveObjectsRequest<'a> {
    prefixes: &'a [String],
}

pub struct StorageClient<'a> {
    http_client: &'a reqwest::Client,
    settings: &'a StorageSettings,
}

impl<'a> StorageClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, settings: &'a StorageSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    /// Public URL of an object in a public bucket.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.settings.base_url, bucket, path
        )
    }

    /// Requests a signed upload slot for `path` in `bucket`.
    ///
    /// # Returns
    /// - `Ok(SignedUpload)` - Token, signed URL and the object's eventual public URL
    /// - `Err(AppError::InternalErr)` - Storage refused to sign or answered without a token
    /// - `Err(AppError::ReqwestErr)` - Storage could not be reached
    pub async fn create_signed_upload(
        &self,
        bucket: &str,
        path: &str,
    ) -> Result<SignedUpload, AppError> {
        let endpoint = format!(
            "{}/storage/v1/object/upload/sign/{}/{}",
            self.settings.base_url, bucket, path
        );
        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.settings.service_key)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InternalError::StorageResponse {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let signed: SignUploadResponse = response.json().await?;
        let signed_url = format!("{}/storage/v1{}", self.settings.base_url, signed.url);
        let token = Url::parse(&signed_url)
            .ok()
            .and_then(|url| {
                url.query_pairs()
                    .find(|(key, _)| key == "token")
                    .map(|(_, value)| value.into_owned())
            })
            .ok_or_else(|| InternalError::StorageResponse {
                path: path.to_string(),
                status: status.as_u16(),
                body: "signed url without token".to_string(),
            })?;

        Ok(SignedUpload {
            bucket: bucket.to_string(),
            path: path.to_string(),
            token,
            public_url: self.public_url(bucket, path),
            signed_url,
        })
    }

    /// Deletes objects from a bucket.
    pub async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), AppError> {
        if paths.is_empty() {
            return Ok(());
        }

        let endpoint = format!("{}/storage/v1/object/{}", self.settings.base_url, bucket);
        let response = self
            .http_client
            .delete(&endpoint)
            .bearer_auth(&self.settings.service_key)
            .json(&RemoveObjectsRequest { prefixes: paths })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InternalError::StorageResponse {
                path: paths.join(","),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(())
    }

    /// Deletes objects, logging instead of failing. Used after the owning rows are gone.
    pub async fn remove_best_effort(&self, bucket: &str, paths: &[String]) {
        if let Err(err) = self.remove(bucket, paths).await {
            tracing::warn!("Failed to remove {} object(s) from {}: {}", paths.len(), bucket, err);
        }
    }
}

/// Issues signed upload slots after checking the request against its purpose.
pub struct UploadService<'a> {
    storage: StorageClient<'a>,
    settings: &'a StorageSettings,
}

impl<'a> UploadService<'a> {
    pub fn new(http_client: &'a reqwest::Client, settings: &'a StorageSettings) -> Self {
        Self {
            storage: StorageClient::new(http_client, settings),
            settings,
        }
    }

    pub async fn presign(
        &self,
        user_id: i32,
        request: UploadRequest,
    ) -> Result<SignedUpload, AppError> {
        let bucket = match request.purpose {
            UploadPurpose::Resource => &self.settings.bucket,
            UploadPurpose::EventImage => &self.settings.event_bucket,
        };
        let path = request.object_path(user_id, Utc::now().timestamp_millis());

        let upload = self.storage.create_signed_upload(bucket, &path).await?;
        tracing::debug!("Issued signed upload {}/{} for user {}", bucket, path, user_id);

        Ok(upload)
    }
}
