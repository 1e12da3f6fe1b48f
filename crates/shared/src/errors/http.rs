use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl AppErrorHttp {
    pub fn status_and_message(self) -> (StatusCode, String) {
        match self.0 {
            ServiceError::Validation(errors) => {
                warn!("📝 Validation failed: {errors:?}");
                (StatusCode::BAD_REQUEST, errors.join("; "))
            }
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {msg}");
                (StatusCode::NOT_FOUND, msg)
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string())
                }
                RepositoryError::AlreadyExists(msg) => {
                    warn!("📦 Resource already exists: {msg}");
                    (StatusCode::BAD_REQUEST, msg)
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Custom repository error: {msg}");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServiceError::Custom(msg) => {
                error!("⚙️ Custom service error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        let body = Json(ErrorResponse::new(msg));

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}
