// tests/order_workflow_service_tests.rs
mod common; // Reference the common module

use common::*;
use orderflow::{OrderStatus, PaymentStatus, WorkflowError};
use storefront_app::errors::AppError;
use storefront_app::services::checkout::place_order;
use storefront_app::store::OrderStore;
use storefront_app::services::orders::{advance, change_status, record_payment_event, AdvanceOutcome, StatusChangeRequest};

fn change(status: OrderStatus) -> StatusChangeRequest {
  StatusChangeRequest {
    status,
    admin_notes: None,
    tracking_number: None,
    expected_version: None,
  }
}

#[tokio::test]
async fn test_checkout_creates_pending_order_with_consistent_totals() {
  let (state, store) = test_state();

  let outcome = place_order(&state, checkout_request(vec![item(JACKET_ID, 2), item(TOTE_ID, 1)]))
    .await
    .expect("checkout must succeed");

  let order = outcome.order;
  assert_eq!(order.order_status, OrderStatus::Pending);
  assert_eq!(order.payment_status, PaymentStatus::Pending);
  assert_eq!(order.version, 0);
  assert!(order.order_number.starts_with("ORD-"));
  assert!(outcome.confirmation_email_sent);

  // 2 * 18900 + 4500 = 42300 subtotal, 10% tax, 500 shipping.
  assert_eq!(order.subtotal_cents, 42_300);
  assert_eq!(order.tax_cents, 4_230);
  assert_eq!(order.total_cents, 42_300 + 4_230 + 500);
  assert!(order.totals_are_consistent());

  // Stock was taken per line.
  let jacket = store.get_product(JACKET_ID).await.unwrap().unwrap();
  let tote = store.get_product(TOTE_ID).await.unwrap().unwrap();
  assert_eq!(jacket.stock_quantity, 23);
  assert_eq!(tote.stock_quantity, 119);
}

#[tokio::test]
async fn test_checkout_rejects_empty_cart() {
  let (state, _store) = test_state();
  let err = place_order(&state, checkout_request(vec![])).await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_checkout_insufficient_stock_aborts_and_restores_taken_lines() {
  let (state, store) = test_state();

  // The jacket line succeeds, the oversized tote line fails; the jacket
  // stock must be handed back.
  let err = place_order(&state, checkout_request(vec![item(JACKET_ID, 2), item(TOTE_ID, 500)]))
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Conflict(_)));

  let jacket = store.get_product(JACKET_ID).await.unwrap().unwrap();
  let tote = store.get_product(TOTE_ID).await.unwrap().unwrap();
  assert_eq!(jacket.stock_quantity, 25);
  assert_eq!(tote.stock_quantity, 120);
  assert!(store.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_change_status_applies_unguarded_confirm() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  let updated = change_status(store.as_ref(), order.id, change(OrderStatus::Confirmed))
    .await
    .expect("pending -> confirmed needs nothing");
  assert_eq!(updated.order_status, OrderStatus::Confirmed);
  assert_eq!(updated.version, 1);
  assert_eq!(updated.progress_percent(), 40);
}

#[tokio::test]
async fn test_change_status_rejects_cancel_without_notes() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  let err = change_status(store.as_ref(), order.id, change(OrderStatus::Cancelled))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    AppError::Workflow {
      source: WorkflowError::MissingAdminNotes { .. }
    }
  ));

  // Nothing was persisted.
  let stored = store.get_order(order.id).await.unwrap().unwrap();
  assert_eq!(stored.order_status, OrderStatus::Pending);
  assert_eq!(stored.version, 0);
}

#[tokio::test]
async fn test_change_status_rejects_stale_version() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  // First operator confirms against version 0.
  let first = StatusChangeRequest {
    expected_version: Some(0),
    ..change(OrderStatus::Confirmed)
  };
  change_status(store.as_ref(), order.id, first).await.unwrap();

  // Second operator cancels against the same stale read. The transition
  // itself is legal from confirmed, but the version check must refuse it.
  let second = StatusChangeRequest {
    admin_notes: Some("customer asked to cancel".to_string()),
    expected_version: Some(0),
    ..change(OrderStatus::Cancelled)
  };
  let err = change_status(store.as_ref(), order.id, second).await.unwrap_err();
  assert!(matches!(err, AppError::Conflict(_)));

  let stored = store.get_order(order.id).await.unwrap().unwrap();
  assert_eq!(stored.order_status, OrderStatus::Confirmed);
}

#[tokio::test]
async fn test_full_lifecycle_reaches_delivered_and_closes() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(JACKET_ID, 1)]))
    .await
    .unwrap()
    .order;

  change_status(store.as_ref(), order.id, change(OrderStatus::Confirmed))
    .await
    .unwrap();
  change_status(store.as_ref(), order.id, change(OrderStatus::Processing))
    .await
    .unwrap();

  let shipped = change_status(
    store.as_ref(),
    order.id,
    StatusChangeRequest {
      tracking_number: Some("TRK-440128".to_string()),
      ..change(OrderStatus::Shipped)
    },
  )
  .await
  .expect("tracking supplied");
  assert_eq!(shipped.tracking_number.as_deref(), Some("TRK-440128"));

  let delivered = change_status(store.as_ref(), order.id, change(OrderStatus::Delivered))
    .await
    .unwrap();
  assert_eq!(delivered.order_status, OrderStatus::Delivered);
  assert_eq!(delivered.progress_percent(), 100);
  assert!(delivered.actual_delivery_date.is_some());
  assert_eq!(delivered.version, 4);

  // Delivered orders accept no further changes.
  let err = change_status(
    store.as_ref(),
    delivered.id,
    StatusChangeRequest {
      admin_notes: Some("late cancel".to_string()),
      ..change(OrderStatus::Cancelled)
    },
  )
  .await
  .unwrap_err();
  assert!(matches!(
    err,
    AppError::Workflow {
      source: WorkflowError::TransitionNotAllowed { .. }
    }
  ));
}

#[tokio::test]
async fn test_advance_applies_automatable_transition_once() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  match advance(store.as_ref(), order.id).await.unwrap() {
    AdvanceOutcome::Advanced(advanced) => {
      assert_eq!(advanced.order_status, OrderStatus::Confirmed);
      assert_eq!(advanced.version, 1);
    }
    AdvanceOutcome::Nothing(_) => panic!("pending orders have an automatable next step"),
  }
}

#[tokio::test]
async fn test_advance_does_nothing_for_cancelled_orders() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  change_status(
    store.as_ref(),
    order.id,
    StatusChangeRequest {
      admin_notes: Some("oversold".to_string()),
      ..change(OrderStatus::Cancelled)
    },
  )
  .await
  .unwrap();

  // Restoring a cancelled order is always a human decision.
  match advance(store.as_ref(), order.id).await.unwrap() {
    AdvanceOutcome::Nothing(current) => assert_eq!(current.order_status, OrderStatus::Cancelled),
    AdvanceOutcome::Advanced(_) => panic!("cancelled orders must not auto-advance"),
  }
}

#[tokio::test]
async fn test_payment_success_confirms_pending_order() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  let updated = record_payment_event(store.as_ref(), order.id, PaymentStatus::Paid)
    .await
    .unwrap();
  assert_eq!(updated.payment_status, PaymentStatus::Paid);
  // Money landed, so the automatable pending -> confirmed step fired.
  assert_eq!(updated.order_status, OrderStatus::Confirmed);
  assert_eq!(updated.version, 2);
}

#[tokio::test]
async fn test_payment_failure_records_without_advancing() {
  let (state, store) = test_state();
  let order = place_order(&state, checkout_request(vec![item(TOTE_ID, 1)]))
    .await
    .unwrap()
    .order;

  let updated = record_payment_event(store.as_ref(), order.id, PaymentStatus::Failed)
    .await
    .unwrap();
  assert_eq!(updated.payment_status, PaymentStatus::Failed);
  assert_eq!(updated.order_status, OrderStatus::Pending);
}
