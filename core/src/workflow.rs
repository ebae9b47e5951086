// orderflow/src/workflow.rs

//! The workflow operations: pure queries over the transition table, plus
//! the single enforcement point `apply_transition`.
//!
//! Every query here is a total function over the enum domain: for any
//! combination of defined statuses it returns a value and never fails.
//! Only `apply_transition` returns `Err`, and only for a request that is
//! illegal or missing a required guard field.
//!
//! None of these functions read or write order state. If time passes
//! between a query and the persistence write, the caller must re-check at
//! the write (another actor may have moved the order in the interim; the
//! persistence layer owns that race, typically with a version check).

use tracing::{event, Level};

use crate::core::status::{OrderStatus, PaymentStatus};
use crate::error::{WorkflowError, WorkflowResult};
use crate::transition::config::{StatusTransition, ORDER_WORKFLOW_CONFIG};
use crate::transition::guard::{self, AppliedTransition, TransitionRequest};

/// Lists the transitions legal from `current`, in definition order.
///
/// A row is included when its `from` matches and either it has no payment
/// gate or the gate contains `payment`. Empty for `Delivered` (and for any
/// status the table defines no rows for).
pub fn available_transitions(current: OrderStatus, payment: PaymentStatus) -> Vec<&'static StatusTransition> {
  ORDER_WORKFLOW_CONFIG
    .iter()
    .filter(|t| t.from == current && t.allows_payment_status(payment))
    .collect()
}

/// True iff `target` is a legal next status for an order currently in
/// `current` with the given payment status.
///
/// This is the gate to consult before offering a change. It must be
/// consulted again immediately before the persistence write when any time
/// has passed since the first check.
pub fn can_transition_to(current: OrderStatus, target: OrderStatus, payment: PaymentStatus) -> bool {
  ORDER_WORKFLOW_CONFIG
    .iter()
    .any(|t| t.from == current && t.to == target && t.allows_payment_status(payment))
}

/// The `to` of the first available transition flagged automatable, if any.
///
/// Advisory only: a caller (a payment webhook, a scheduled job) decides
/// whether and when to act on it.
pub fn next_automatic_status(current: OrderStatus, payment: PaymentStatus) -> Option<OrderStatus> {
  ORDER_WORKFLOW_CONFIG
    .iter()
    .find(|t| t.from == current && t.automatable && t.allows_payment_status(payment))
    .map(|t| t.to)
}

/// Validates a status-change request in full: the transition must exist,
/// the payment gate (if any) must admit the order's payment status, and
/// every required guard field must be non-empty.
///
/// On success the caller receives the matched row and the accepted field
/// values to hand to its persistence layer. This function is the one place
/// the requirements are enforced; UI layers may pre-check for friendlier
/// forms, but a caller that skips straight to here is still rejected.
pub fn apply_transition(
  current: OrderStatus,
  payment: PaymentStatus,
  request: &TransitionRequest,
) -> WorkflowResult<AppliedTransition> {
  let Some(transition) = find_transition(current, request.target) else {
    event!(
      Level::DEBUG,
      from = %current,
      to = %request.target,
      "rejecting status change: no such transition"
    );
    return Err(WorkflowError::TransitionNotAllowed {
      from: current,
      to: request.target,
    });
  };

  if !transition.allows_payment_status(payment) {
    event!(
      Level::DEBUG,
      from = %current,
      to = %request.target,
      payment = %payment,
      "rejecting status change: payment status outside the transition's gate"
    );
    return Err(WorkflowError::PaymentStatusNotEligible {
      from: current,
      to: request.target,
      payment,
    });
  }

  let applied = guard::enforce(transition, request)?;
  event!(
    Level::DEBUG,
    from = %current,
    to = %applied.target(),
    label = transition.label,
    "status change accepted"
  );
  Ok(applied)
}

fn find_transition(from: OrderStatus, to: OrderStatus) -> Option<&'static StatusTransition> {
  ORDER_WORKFLOW_CONFIG.iter().find(|t| t.from == from && t.to == to)
}
