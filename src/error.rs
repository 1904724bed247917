use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const LIST_ERROR_MESSAGE: &str = "Error al obtener las joyas";
pub const FILTER_ERROR_MESSAGE: &str = "Error al filtrar las joyas";
pub const NOT_FOUND_MESSAGE: &str = "Ruta no encontrada";

#[derive(Error, Debug)]
pub enum AppError {
    /// A statement failed. `message` is what the client sees; `source` stays in the logs.
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ruta no encontrada")]
    NotFound,
}

impl AppError {
    pub fn listing(source: sqlx::Error) -> Self {
        AppError::Database {
            message: LIST_ERROR_MESSAGE,
            source,
        }
    }

    pub fn filtering(source: sqlx::Error) -> Self {
        AppError::Database {
            message: FILTER_ERROR_MESSAGE,
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Database { message, source } => {
                tracing::error!("{}: {}", message, source);
                message.to_string()
            }
            AppError::InvalidInput(msg) => msg,
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
