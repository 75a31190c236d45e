//! View and download proxies for resource links.

use axum::body::Body;
use url::Url;

use crate::server::error::AppError;

const DEFAULT_DOWNLOAD_NAME: &str = "download";

/// Upstream file, ready to be streamed to the client as an attachment.
#[derive(Debug)]
pub struct ProxiedFile {
    pub file_name: String,
    pub content_type: String,
    /// Upstream `Content-Length`, when it sent one.
    pub content_length: Option<u64>,
    /// Chunks are forwarded as they arrive; nothing is buffered.
    pub body: Body,
}

impl ProxiedFile {
    /// `Content-Disposition` value with an RFC 5987 encoded file name.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename*=UTF-8''{}", encode_rfc5987(&self.file_name))
    }
}

pub struct ProxyService<'a> {
    http_client: &'a reqwest::Client,
}

impl<'a> ProxyService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Validates the link the client wants to open.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing, unparsable or non-HTTP URL
    pub fn view_target(&self, raw: Option<&str>) -> Result<Url, AppError> {
        parse_http_url(raw)
    }

    /// Opens a file for download. Only the status and headers are awaited here; the
    /// body is streamed through by the caller.
    ///
    /// # Arguments
    /// - `raw` - Upstream URL
    /// - `file_name` - Name to suggest to the browser; defaults to the URL's last segment
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing or invalid URL
    /// - `Err(AppError::BadGateway)` - Upstream unreachable or answered with an error
    pub async fn download(
        &self,
        raw: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<ProxiedFile, AppError> {
        let url = parse_http_url(raw)?;

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| AppError::BadGateway(format!("Upstream fetch failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BadGateway(format!(
                "Upstream responded with status {}",
                status.as_u16()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(ProxiedFile {
            file_name: download_name(&url, file_name),
            content_type,
            content_length: response.content_length(),
            body: Body::from_stream(response.bytes_stream()),
        })
    }
}

fn parse_http_url(raw: Option<&str>) -> Result<Url, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing url".to_string()))?;

    let url = Url::parse(raw).map_err(|_| AppError::BadRequest("Invalid url".to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::BadRequest("Invalid url".to_string()));
    }

    Ok(url)
}

/// Chosen name, else the last path segment of the URL, else `download`.
fn download_name(url: &Url, requested: Option<&str>) -> String {
    requested
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
}

/// Percent-encodes everything outside the RFC 5987 `attr-char` set.
fn encode_rfc5987(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}
