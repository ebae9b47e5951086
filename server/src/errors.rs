// storefront_app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use orderflow::WorkflowError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Concurrent-modification and stock conflicts: the request was legal
  /// when the caller composed it, but the world moved underneath it.
  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Payment Processing Error: {0}")]
  Payment(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Order Workflow Error: {source}")]
  Workflow {
    #[from] // Allows conversion from orderflow::WorkflowError
    source: WorkflowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      // We already have `From<sqlx::Error>`, but this handles if it was wrapped in anyhow
      if let Ok(sqlx_err) = err.downcast::<sqlx::Error>() {
        return AppError::Sqlx(sqlx_err);
      }
      return AppError::Internal("Database error".to_string());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::Payment(m) => HttpResponse::PaymentRequired().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Workflow { source } => match source {
        // A guard field is missing: the response names the exact
        // requirement so the operator knows what to supply.
        WorkflowError::MissingAdminNotes { .. } | WorkflowError::MissingTrackingNumber { .. } => {
          HttpResponse::UnprocessableEntity().json(json!({"error": source.to_string()}))
        }
        // The change is illegal from the order's current state.
        WorkflowError::TransitionNotAllowed { .. } | WorkflowError::PaymentStatusNotEligible { .. } => {
          HttpResponse::Conflict().json(json!({"error": source.to_string()}))
        }
        // A stored status failed to parse: data problem, not a caller problem.
        WorkflowError::UnrecognizedOrderStatus { .. }
        | WorkflowError::UnrecognizedPaymentStatus { .. }
        | WorkflowError::UnrecognizedOrderPriority { .. } => {
          HttpResponse::InternalServerError().json(json!({"error": "Stored order data is invalid", "detail": source.to_string()}))
        }
      },
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
