use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_STORAGE_BUCKET: &str = "uploads";
const DEFAULT_STORAGE_EVENT_BUCKET: &str = "event-images";
const DEFAULT_CHAT_QA_URL: &str = "http://localhost:8000";
const DEFAULT_MEET_ROOM_PREFIX: &str = "BRACU-DIARY";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    pub storage_url: String,
    pub storage_service_key: String,
    pub storage_bucket: String,
    pub storage_event_bucket: String,

    pub chat_qa_url: String,
    pub meet_room_prefix: String,

    /// Lowercased emails granted catalog and club management.
    pub super_admin_emails: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            storage_url: required("STORAGE_URL")?,
            storage_service_key: required("STORAGE_SERVICE_KEY")?,
            storage_bucket: optional("STORAGE_BUCKET", DEFAULT_STORAGE_BUCKET),
            storage_event_bucket: optional("STORAGE_EVENT_BUCKET", DEFAULT_STORAGE_EVENT_BUCKET),
            chat_qa_url: optional("CHAT_QA_URL", DEFAULT_CHAT_QA_URL),
            meet_room_prefix: optional("MEET_ROOM_PREFIX", DEFAULT_MEET_ROOM_PREFIX),
            super_admin_emails: parse_email_list(
                &std::env::var("SUPER_ADMIN_EMAILS").unwrap_or_default(),
            ),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Splits a comma separated list of emails, trimming and lowercasing each entry.
pub fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}
