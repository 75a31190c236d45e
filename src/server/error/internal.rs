use thiserror::Error;

/// Failures of collaborating services that indicate a misconfiguration or outage rather
/// than a bad request.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Object storage answered a signing or deletion call with a non-success status.
    #[error("Storage request to {path} failed with status {status}: {body}")]
    StorageResponse {
        path: String,
        status: u16,
        body: String,
    },

    /// The question-answering endpoint answered with a non-success status.
    #[error("QA endpoint returned status {status}: {body}")]
    QaResponse { status: u16, body: String },
}
