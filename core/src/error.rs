// orderflow/src/error.rs
use thiserror::Error;

use crate::core::status::{OrderStatus, PaymentStatus};

/// Failures returned by `apply_transition` and by the string-boundary
/// parsers. The query operations (`available_transitions`,
/// `can_transition_to`, `next_automatic_status`, `progress_percent`) are
/// total over the enum domain and never construct one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
  /// No row `(from, to)` exists in the transition table. Covers every
  /// attempt to move an order out of `delivered`.
  #[error("No transition from '{from}' to '{to}' is defined")]
  TransitionNotAllowed { from: OrderStatus, to: OrderStatus },

  /// The row exists but is gated to payment statuses the order is not in.
  #[error("Transition from '{from}' to '{to}' is not available while payment status is '{payment}'")]
  PaymentStatusNotEligible {
    from: OrderStatus,
    to: OrderStatus,
    payment: PaymentStatus,
  },

  /// The row requires an admin note and none (or only whitespace) was supplied.
  #[error("Transition from '{from}' to '{to}' requires an admin note")]
  MissingAdminNotes { from: OrderStatus, to: OrderStatus },

  /// The row requires a tracking number and none (or only whitespace) was supplied.
  #[error("Transition from '{from}' to '{to}' requires a tracking number")]
  MissingTrackingNumber { from: OrderStatus, to: OrderStatus },

  #[error("Unrecognized order status: '{value}'")]
  UnrecognizedOrderStatus { value: String },

  #[error("Unrecognized payment status: '{value}'")]
  UnrecognizedPaymentStatus { value: String },

  #[error("Unrecognized order priority: '{value}'")]
  UnrecognizedOrderPriority { value: String },
}

pub type WorkflowResult<T, E = WorkflowError> = std::result::Result<T, E>;
