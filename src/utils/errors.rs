//! Sistema de manejo de errores
//!
//! Este módulo define los errores del servicio de vehículos
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Vehicle not found".to_string()),
            other => AppError::StoreUnavailable(other.to_string()),
        }
    }
}

impl AppError {
    /// Código estable que viaja en el cuerpo JSON
    pub fn code(&self) -> &'static str {
        match self {
            AppError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MalformedInput(_) => "MALFORMED_INPUT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedInput(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::StoreUnavailable(detail) => {
                error!("❌ Store no disponible: {}", detail);
                "The vehicle store is currently unavailable".to_string()
            }
            AppError::Internal(detail) => {
                error!("❌ Error interno: {}", detail);
                "An unexpected error occurred".to_string()
            }
            AppError::NotFound(msg) | AppError::MalformedInput(msg) => {
                warn!("⚠️ {}: {}", self.code(), msg);
                msg.clone()
            }
            AppError::Validation(e) => {
                warn!("⚠️ Error de validación: {}", e);
                e.to_string()
            }
        };

        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message,
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de entrada mal formada
pub fn malformed_input_error(field: &str, value: &str) -> AppError {
    AppError::MalformedInput(format!("Invalid {} '{}': expected an integer", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_pool_errors_map_to_store_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "STORE_UNAVAILABLE");
    }

    #[test]
    fn test_malformed_input_is_client_error() {
        let err = malformed_input_error("id", "abc");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("'abc'"));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = not_found_error("Vehicle", "999").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.error, "Not Found");
        assert!(body.message.contains("999"));
    }
}
