use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    HttpError(#[from] axum::http::Error),
    #[error(transparent)]
    BodyError(#[from] axum::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Session was not assigned an ID after saving")]
    MissingSessionId,
}
