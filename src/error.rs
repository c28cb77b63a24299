//! Exporter error types.

/// Errors produced while talking to DeepDetect or serving metrics.
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    // Upstream errors
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(String),

    // Serving-side errors
    #[error("failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExporterError>;
