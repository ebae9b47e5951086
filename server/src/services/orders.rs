// storefront_app/src/services/orders.rs

//! Order status operations: the persistence-side enforcement of the
//! workflow.
//!
//! Every change goes through `orderflow::apply_transition` here, regardless
//! of what the submitting UI already checked, so a forgetful caller is
//! rejected with the same typed errors. The subsequent write is a CAS on
//! the order's version, so a decision made against a stale read loses
//! cleanly instead of overwriting a concurrent operator's change.

use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::Order;
use crate::store::{OrderStore, StatusUpdate};
use orderflow::{
  apply_transition, available_transitions, next_automatic_status, OrderStatus, PaymentStatus, StatusTransition,
  TransitionRequest,
};

/// Body of the back-office "change status" submission.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChangeRequest {
  pub status: OrderStatus,
  pub admin_notes: Option<String>,
  pub tracking_number: Option<String>,
  /// The order version the operator's screen was rendered from. When
  /// omitted, the version read in this call is used, which still protects
  /// against writers racing within the request window.
  pub expected_version: Option<i32>,
}

/// What a status selector needs to render itself for one order.
pub struct OrderActions {
  pub order: Order,
  pub transitions: Vec<&'static StatusTransition>,
  pub next_automatic: Option<OrderStatus>,
}

/// Outcome of acting on the automatable hint.
pub enum AdvanceOutcome {
  Advanced(Order),
  /// Nothing automatable from the order's current state.
  Nothing(Order),
}

async fn load_order(store: &dyn OrderStore, order_id: Uuid) -> AppResult<Order> {
  store
    .get_order(order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("order {}", order_id)))
}

#[instrument(skip(store))]
pub async fn available_actions(store: &dyn OrderStore, order_id: Uuid) -> AppResult<OrderActions> {
  let order = load_order(store, order_id).await?;
  let transitions = available_transitions(order.order_status, order.payment_status);
  let next_automatic = next_automatic_status(order.order_status, order.payment_status);
  Ok(OrderActions {
    order,
    transitions,
    next_automatic,
  })
}

#[instrument(skip(store, change), fields(order_id = %order_id, target = %change.status))]
pub async fn change_status(store: &dyn OrderStore, order_id: Uuid, change: StatusChangeRequest) -> AppResult<Order> {
  let order = load_order(store, order_id).await?;

  let request = TransitionRequest {
    target: change.status,
    admin_notes: change.admin_notes,
    tracking_number: change.tracking_number,
  };
  let applied = apply_transition(order.order_status, order.payment_status, &request)?;

  let expected_version = change.expected_version.unwrap_or(order.version);
  let updated = store
    .update_order_status(
      order_id,
      StatusUpdate {
        new_status: applied.target(),
        admin_notes: applied.admin_notes,
        tracking_number: applied.tracking_number,
        expected_version,
      },
    )
    .await?;

  info!(
    order_number = %updated.order_number,
    from = %order.order_status,
    to = %updated.order_status,
    "order status changed"
  );
  Ok(updated)
}

/// Acts once on the automatable hint for this order, if there is one.
/// Called by the payment webhook and suitable for a scheduled job.
#[instrument(skip(store), fields(order_id = %order_id))]
pub async fn advance(store: &dyn OrderStore, order_id: Uuid) -> AppResult<AdvanceOutcome> {
  let order = load_order(store, order_id).await?;

  let Some(next) = next_automatic_status(order.order_status, order.payment_status) else {
    return Ok(AdvanceOutcome::Nothing(order));
  };

  // Automatable rows carry no guard requirements today, but the request
  // still goes through the single enforcement point.
  let applied = apply_transition(order.order_status, order.payment_status, &TransitionRequest::new(next))?;
  let updated = store
    .update_order_status(
      order_id,
      StatusUpdate {
        new_status: applied.target(),
        admin_notes: applied.admin_notes,
        tracking_number: applied.tracking_number,
        expected_version: order.version,
      },
    )
    .await?;

  info!(order_number = %updated.order_number, to = %updated.order_status, "order auto-advanced");
  Ok(AdvanceOutcome::Advanced(updated))
}

/// Records a payment-gateway event against the order, then acts on the
/// automatable hint when money has landed (a freshly paid order moves
/// straight from `pending` to `confirmed` without an operator).
#[instrument(skip(store), fields(order_id = %order_id, payment = %payment_status))]
pub async fn record_payment_event(
  store: &dyn OrderStore,
  order_id: Uuid,
  payment_status: PaymentStatus,
) -> AppResult<Order> {
  let order = load_order(store, order_id).await?;
  let updated = store
    .update_payment_status(order_id, payment_status, order.version)
    .await?;

  if payment_status != PaymentStatus::Paid {
    return Ok(updated);
  }

  match advance(store, order_id).await {
    Ok(AdvanceOutcome::Advanced(advanced)) => Ok(advanced),
    Ok(AdvanceOutcome::Nothing(current)) => Ok(current),
    // The payment update itself succeeded; losing the advance race to a
    // concurrent operator is not a webhook failure.
    Err(err) => {
      warn!(error = %err, "auto-advance after payment did not apply");
      Ok(updated)
    }
  }
}
