use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("no API key configured (use --api-key or set N2YO_API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream rejected request: HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("malformed pass response: {0}")]
    Format(#[from] serde_json::Error),
    #[error("pass entry has unusable rise time: {0}")]
    InvalidRiseTime(i64),
}
