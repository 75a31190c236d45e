//! Signed upload slots and the rules uploads must satisfy before one is issued.

use crate::{
    model::upload::{SignedUploadDto, UploadRequestDto},
    server::{
        error::AppError,
        util::file::{extension_for_mime, sanitize_file_name},
    },
};

const MB: i64 = 1024 * 1024;

const RESOURCE_MIMES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "application/zip",
];

const EVENT_IMAGE_MIMES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// What an upload is for. Each purpose has its own mime allowlist, size cap and path layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadPurpose {
    Resource,
    EventImage,
}

impl UploadPurpose {
    pub fn allowed_mimes(&self) -> &'static [&'static str] {
        match self {
            UploadPurpose::Resource => RESOURCE_MIMES,
            UploadPurpose::EventImage => EVENT_IMAGE_MIMES,
        }
    }

    pub fn max_size(&self) -> i64 {
        match self {
            UploadPurpose::Resource => 10 * MB,
            UploadPurpose::EventImage => 5 * MB,
        }
    }
}

/// Upload request that passed the purpose's checks.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub purpose: UploadPurpose,
    pub file_name: String,
    pub mime: String,
    pub size: i64,
}

impl UploadRequest {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Mime type not allowed, or size not in `1..=max`
    pub fn from_dto(purpose: UploadPurpose, dto: UploadRequestDto) -> Result<Self, AppError> {
        let mime = dto.mime.trim().to_lowercase();
        if !purpose.allowed_mimes().contains(&mime.as_str()) {
            return Err(AppError::BadRequest("Unsupported file type".to_string()));
        }
        if dto.size <= 0 || dto.size > purpose.max_size() {
            return Err(AppError::BadRequest(format!(
                "File must be between 1 byte and {} MB",
                purpose.max_size() / MB
            )));
        }

        Ok(Self {
            purpose,
            file_name: dto.file_name,
            mime,
            size: dto.size,
        })
    }

    /// Object path for the upload.
    ///
    /// Resources are stored as `resources/{user}/{uuid}.{ext}`, event images as
    /// `events/{user}/{millis}-{sanitized name}`.
    pub fn object_path(&self, user_id: i32, now_millis: i64) -> String {
        match self.purpose {
            UploadPurpose::Resource => {
                let ext = self
                    .file_name
                    .rsplit_once('.')
                    .map(|(_, ext)| sanitize_file_name(ext).to_lowercase())
                    .filter(|ext| !ext.is_empty() && ext.len() <= 8)
                    .or_else(|| extension_for_mime(&self.mime).map(str::to_string));
                let id = uuid::Uuid::new_v4();
                match ext {
                    Some(ext) => format!("resources/{}/{}.{}", user_id, id, ext),
                    None => format!("resources/{}/{}", user_id, id),
                }
            }
            UploadPurpose::EventImage => format!(
                "events/{}/{}-{}",
                user_id,
                now_millis,
                sanitize_file_name(&self.file_name)
            ),
        }
    }
}

/// Pre-authorized slot the client uploads the file body to directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedUpload {
    pub bucket: String,
    pub path: String,
    pub token: String,
    pub signed_url: String,
    pub public_url: String,
}

impl SignedUpload {
    pub fn into_dto(self) -> SignedUploadDto {
        SignedUploadDto {
            bucket: self.bucket,
            path: self.path,
            token: self.token,
            signed_url: self.signed_url,
            public_url: self.public_url,
        }
    }
}
