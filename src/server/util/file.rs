//! Helpers for uploaded files and linked videos.

use url::Url;

use crate::server::model::resource::ResourceKind;

/// Extracts a YouTube video id from `youtu.be/ID`, `youtube.com/watch?v=ID`,
/// `youtube.com/shorts/ID` and `youtube.com/embed/ID` links.
pub fn extract_youtube_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());

    let id = if host == "youtu.be" {
        segments.next().map(str::to_string)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("shorts") | Some("embed") => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    id.filter(|id| {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

/// Short label describing a resource's content type.
pub fn file_type_label(kind: ResourceKind, mime: Option<&str>, url: &str) -> &'static str {
    if kind == ResourceKind::Youtube {
        return "VIDEO";
    }

    let mime = mime.unwrap_or_default().to_lowercase();
    let url = url.to_lowercase();

    if mime == "application/pdf" || url.ends_with(".pdf") {
        "PDF"
    } else if mime.contains("wordprocessingml")
        || mime == "application/msword"
        || url.ends_with(".docx")
        || url.ends_with(".doc")
    {
        "DOCX"
    } else if mime.starts_with("video/") {
        "VIDEO"
    } else if mime.starts_with("text/") || url.ends_with(".txt") {
        "TEXT"
    } else if mime.contains("zip") || url.ends_with(".zip") {
        "ZIP"
    } else if url.contains("drive.google.com") || url.contains("docs.google.com") {
        "DRIVE"
    } else {
        "LINK"
    }
}

/// Formats a byte count with binary units, e.g. `1.5 MB`.
pub fn format_bytes(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes.max(0));
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.1}", value);
    let formatted = formatted.trim_end_matches(".0");
    format!("{} {}", formatted, UNITS[unit])
}

/// File extension for an allowed upload mime type.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "application/pdf" => Some("pdf"),
        "application/msword" => Some("doc"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Some("docx"),
        "text/plain" => Some("txt"),
        "application/zip" | "application/x-zip-compressed" => Some("zip"),
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Replaces characters outside `[A-Za-z0-9._-]` with `_` so the name is safe in a
/// storage path.
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}
