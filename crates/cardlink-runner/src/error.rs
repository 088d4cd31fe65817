use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status} for card {id}")]
    Status {
        status: reqwest::StatusCode,
        id: String,
    },
}
