//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection and HTTP client share
//! their pools and the settings structs are small.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

/// OAuth2 client with the authorization and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Object storage endpoint and buckets used for signed uploads.
#[derive(Clone, Debug)]
pub struct StorageSettings {
    /// Base URL of the storage REST API, without a trailing slash.
    pub base_url: String,
    pub service_key: String,
    /// Bucket for course resources.
    pub bucket: String,
    /// Bucket for event banner images.
    pub event_bucket: String,
}

/// Settings for the features that reach outside the database.
#[derive(Clone, Debug)]
pub struct PortalSettings {
    /// Frontend origin, used for CORS and post-login redirects.
    pub app_url: String,
    pub userinfo_url: String,
    pub chat_qa_url: String,
    pub meet_room_prefix: String,
    pub super_admin_emails: Arc<Vec<String>>,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for the identity provider, storage API and QA endpoint.
    ///
    /// Built without redirect following to avoid being bounced to internal hosts.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    pub storage: StorageSettings,

    pub settings: PortalSettings,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            storage: StorageSettings {
                base_url: config.storage_url.trim_end_matches('/').to_string(),
                service_key: config.storage_service_key.clone(),
                bucket: config.storage_bucket.clone(),
                event_bucket: config.storage_event_bucket.clone(),
            },
            settings: PortalSettings {
                app_url: config.app_url.clone(),
                userinfo_url: config.oauth_userinfo_url.clone(),
                chat_qa_url: config.chat_qa_url.trim_end_matches('/').to_string(),
                meet_room_prefix: config.meet_room_prefix.clone(),
                super_admin_emails: Arc::new(config.super_admin_emails.clone()),
            },
        }
    }
}
