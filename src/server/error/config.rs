use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// See `.env.example` for the full list of variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable holding a URL could not be parsed.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },

    /// An environment variable could not be used as an HTTP header value.
    #[error("Invalid header value in {name}: {source}")]
    InvalidHeader {
        name: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },

    /// The rate limiter rejected its quota settings.
    #[error("Invalid rate limit for {0}")]
    InvalidRateLimit(String),
}
