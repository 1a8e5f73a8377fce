use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("daily bonus already claimed")]
    AlreadyClaimed,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
