//! Error types for ContratoJusto API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use export_engine::ExportError;
use payment_gateway::PaymentError;
use serde_json::json;
use shared_types::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::UnknownPlan(id) => {
                (StatusCode::BAD_REQUEST, format!("Unknown plan: {}", id))
            }
            ApiError::Payment(e) => {
                tracing::warn!("Payment error: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            ApiError::Export(e) => {
                tracing::error!("Export error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Export failed".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ValidationError;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let response = ApiError::Validation(ValidationError::MissingField("city")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::UnknownPlan("enterprise".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_errors_map_to_bad_gateway() {
        let response = ApiError::Payment(PaymentError::Provider {
            status: 422,
            message: "The card_token field is invalid.".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_export_errors_map_to_internal_error() {
        let response =
            ApiError::Export(ExportError::Pdf("encode failure".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
