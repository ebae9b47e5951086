// orderflow/src/transition/guard.rs

//! Typed guard enforcement for status changes.
//!
//! A `TransitionRequest` carries the target status together with whatever
//! the operator supplied; `enforce` checks it against the matched table row
//! and returns either an `AppliedTransition` (with trimmed, accepted
//! fields) or a `WorkflowError` naming the missing requirement. Callers
//! never re-implement the emptiness rules.

use serde::{Deserialize, Serialize};

use crate::core::status::OrderStatus;
use crate::error::{WorkflowError, WorkflowResult};
use crate::transition::config::StatusTransition;

/// A caller's request to move an order to `target`, with the guard fields
/// collected from the operator. Fields not demanded by the matched row are
/// passed through (trimmed) rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
  pub target: OrderStatus,
  pub admin_notes: Option<String>,
  pub tracking_number: Option<String>,
}

impl TransitionRequest {
  pub fn new(target: OrderStatus) -> Self {
    TransitionRequest {
      target,
      admin_notes: None,
      tracking_number: None,
    }
  }

  pub fn with_admin_notes(mut self, notes: impl Into<String>) -> Self {
    self.admin_notes = Some(notes.into());
    self
  }

  pub fn with_tracking_number(mut self, tracking: impl Into<String>) -> Self {
    self.tracking_number = Some(tracking.into());
    self
  }
}

/// A request that passed legality and guard checks: the matched table row
/// plus the accepted field values, ready for the persistence collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedTransition {
  pub transition: &'static StatusTransition,
  /// Trimmed admin note, when one was supplied.
  pub admin_notes: Option<String>,
  /// Trimmed tracking identifier, when one was supplied.
  pub tracking_number: Option<String>,
}

impl AppliedTransition {
  /// The status the order moves to when this result is persisted.
  pub fn target(&self) -> OrderStatus {
    self.transition.to
  }
}

/// Checks `request` against the row's guard requirements.
///
/// Whitespace-only input counts as absent: a guard demands a non-empty
/// value, and "   " is not one.
pub(crate) fn enforce(
  transition: &'static StatusTransition,
  request: &TransitionRequest,
) -> WorkflowResult<AppliedTransition> {
  let admin_notes = non_empty(request.admin_notes.as_deref());
  if transition.requires_admin_notes && admin_notes.is_none() {
    return Err(WorkflowError::MissingAdminNotes {
      from: transition.from,
      to: transition.to,
    });
  }

  let tracking_number = non_empty(request.tracking_number.as_deref());
  if transition.requires_tracking && tracking_number.is_none() {
    return Err(WorkflowError::MissingTrackingNumber {
      from: transition.from,
      to: transition.to,
    });
  }

  Ok(AppliedTransition {
    transition,
    admin_notes: admin_notes.map(str::to_string),
    tracking_number: tracking_number.map(str::to_string),
  })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}
