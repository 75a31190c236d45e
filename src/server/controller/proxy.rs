use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::proxy::ProxyService, state::AppState},
};

pub static PROXY_TAG: &str = "proxy";

const DOWNLOAD_CACHE_CONTROL: &str = "private, max-age=0, must-revalidate";

#[derive(Deserialize)]
pub struct ViewParams {
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct DownloadParams {
    pub url: Option<String>,
    pub filename: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/view",
    tag = PROXY_TAG,
    params(("url" = String, Query, description = "Link to open")),
    responses(
        (status = 307, description = "Redirect to the link"),
        (status = 400, description = "Missing or invalid URL", body = ErrorDto)
    ),
)]
pub async fn view(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let target = ProxyService::new(&state.http_client).view_target(params.url.as_deref())?;

    Ok(Redirect::temporary(target.as_str()))
}

/// Fetches a file and returns it as an attachment.
///
/// The browser is offered `filename` when given, otherwise the last segment of the URL.
///
/// # Returns
/// - `200 OK` - The upstream body with the upstream content type
/// - `400 Bad Request` - Missing or invalid URL
/// - `502 Bad Gateway` - Upstream unreachable or answered with an error status
#[utoipa::path(
    get,
    path = "/api/download",
    tag = PROXY_TAG,
    params(
        ("url" = String, Query, description = "File to download"),
        ("filename" = Option<String>, Query, description = "Suggested file name")
    ),
    responses(
        (status = 200, description = "File contents"),
        (status = 400, description = "Missing or invalid URL", body = ErrorDto),
        (status = 502, description = "Upstream fetch failed", body = ErrorDto)
    ),
)]
pub async fn download(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<impl IntoResponse, AppError> {
    let file = ProxyService::new(&state.http_client)
        .download(params.url.as_deref(), params.filename.as_deref())
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header_value(&file.content_type)?);
    headers.insert(
        header::CONTENT_DISPOSITION,
        header_value(&file.content_disposition())?,
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(DOWNLOAD_CACHE_CONTROL),
    );
    if let Some(length) = file.content_length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }

    Ok((StatusCode::OK, headers, file.body))
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::BadGateway("Upstream sent an invalid header".to_string()))
}
