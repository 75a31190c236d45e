//! OAuth2 login against the configured identity provider.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serde::Deserialize;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Identity,
    state::OAuth2Client,
};

/// Claims read from the provider's userinfo endpoint.
#[derive(Deserialize)]
struct UserInfo {
    sub: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the provider authorize URL and the CSRF token to keep in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url()
    }

    /// Exchanges the authorization code and fetches the caller's identity.
    ///
    /// # Returns
    /// - `Ok(Identity)` - The provider identity
    /// - `Err(AuthError::TokenExchangeFailed)` - The provider rejected the code or the
    ///   userinfo request
    /// - `Err(AppError::ReqwestErr)` - The provider could not be reached
    pub async fn callback(&self, authorization_code: String) -> Result<Identity, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        self.fetch_identity(&token).await
    }

    async fn fetch_identity(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<Identity, AppError> {
        let response = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::TokenExchangeFailed(format!(
                "userinfo request returned {}",
                response.status()
            ))
            .into());
        }

        let info = response.json::<UserInfo>().await?;
        let email = info.email.unwrap_or_default().trim().to_lowercase();
        let name = info
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.clone());

        Ok(Identity {
            external_id: info.sub,
            name,
            email,
            picture: info.picture.filter(|url| !url.is_empty()),
        })
    }
}
