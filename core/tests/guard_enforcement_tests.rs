// tests/guard_enforcement_tests.rs
mod common; // Reference the common module

use common::*;
use orderflow::{apply_transition, OrderStatus, PaymentStatus, TransitionRequest, WorkflowError};

#[test]
fn test_unguarded_transition_succeeds_without_fields() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Confirmed);
  let applied = apply_transition(OrderStatus::Pending, PaymentStatus::Pending, &request)
    .expect("pending -> confirmed has no guard requirements");

  assert_eq!(applied.target(), OrderStatus::Confirmed);
  assert_eq!(applied.admin_notes, None);
  assert_eq!(applied.tracking_number, None);
  assert!(applied.transition.automatable);
}

#[test]
fn test_cancel_without_notes_is_rejected() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Cancelled);
  let err = apply_transition(OrderStatus::Pending, PaymentStatus::Pending, &request).unwrap_err();
  assert_eq!(
    err,
    WorkflowError::MissingAdminNotes {
      from: OrderStatus::Pending,
      to: OrderStatus::Cancelled,
    }
  );
}

#[test]
fn test_whitespace_only_notes_count_as_missing() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Cancelled).with_admin_notes("   \t ");
  let err = apply_transition(OrderStatus::Confirmed, PaymentStatus::Paid, &request).unwrap_err();
  assert_eq!(
    err,
    WorkflowError::MissingAdminNotes {
      from: OrderStatus::Confirmed,
      to: OrderStatus::Cancelled,
    }
  );
}

#[test]
fn test_cancel_with_notes_succeeds_and_trims() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Cancelled).with_admin_notes("  customer requested refund  ");
  let applied = apply_transition(OrderStatus::Processing, PaymentStatus::Paid, &request).expect("note supplied");
  assert_eq!(applied.target(), OrderStatus::Cancelled);
  assert_eq!(applied.admin_notes.as_deref(), Some("customer requested refund"));
}

#[test]
fn test_ship_without_tracking_is_rejected() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Shipped);
  let err = apply_transition(OrderStatus::Processing, PaymentStatus::Paid, &request).unwrap_err();
  assert_eq!(
    err,
    WorkflowError::MissingTrackingNumber {
      from: OrderStatus::Processing,
      to: OrderStatus::Shipped,
    }
  );
}

#[test]
fn test_ship_with_tracking_succeeds() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Shipped).with_tracking_number(" TRK-440128 ");
  let applied = apply_transition(OrderStatus::Processing, PaymentStatus::Paid, &request).expect("tracking supplied");
  assert_eq!(applied.target(), OrderStatus::Shipped);
  assert_eq!(applied.tracking_number.as_deref(), Some("TRK-440128"));
  assert!(applied.transition.requires_tracking);
}

#[test]
fn test_delivered_orders_reject_every_change() {
  setup_tracing();
  for target in OrderStatus::ALL {
    let request = TransitionRequest::new(target)
      .with_admin_notes("note")
      .with_tracking_number("TRK-1");
    let err = apply_transition(OrderStatus::Delivered, PaymentStatus::Paid, &request).unwrap_err();
    assert_eq!(
      err,
      WorkflowError::TransitionNotAllowed {
        from: OrderStatus::Delivered,
        to: target,
      }
    );
  }
}

#[test]
fn test_undefined_pair_is_not_allowed_even_with_fields() {
  setup_tracing();
  // Supplying every guard field does not make an undefined pair legal.
  let request = TransitionRequest::new(OrderStatus::Pending)
    .with_admin_notes("note")
    .with_tracking_number("TRK-1");
  let err = apply_transition(OrderStatus::Shipped, PaymentStatus::Paid, &request).unwrap_err();
  assert_eq!(
    err,
    WorkflowError::TransitionNotAllowed {
      from: OrderStatus::Shipped,
      to: OrderStatus::Pending,
    }
  );
}

#[test]
fn test_restore_from_cancelled_requires_notes() {
  setup_tracing();
  let bare = TransitionRequest::new(OrderStatus::Pending);
  let err = apply_transition(OrderStatus::Cancelled, PaymentStatus::Refunded, &bare).unwrap_err();
  assert_eq!(
    err,
    WorkflowError::MissingAdminNotes {
      from: OrderStatus::Cancelled,
      to: OrderStatus::Pending,
    }
  );

  let noted = bare.with_admin_notes("re-placed after payment retry");
  let applied = apply_transition(OrderStatus::Cancelled, PaymentStatus::Refunded, &noted).expect("note supplied");
  assert_eq!(applied.target(), OrderStatus::Pending);
}

#[test]
fn test_optional_fields_pass_through_when_not_required() {
  setup_tracing();
  // The confirm transition demands nothing, but an operator note supplied
  // anyway is kept (trimmed) for the persistence layer.
  let request = TransitionRequest::new(OrderStatus::Confirmed).with_admin_notes(" confirmed by phone ");
  let applied = apply_transition(OrderStatus::Pending, PaymentStatus::Pending, &request).expect("no requirements");
  assert_eq!(applied.admin_notes.as_deref(), Some("confirmed by phone"));

  // Whitespace-only optional input is dropped rather than stored.
  let request = TransitionRequest::new(OrderStatus::Confirmed).with_admin_notes("   ");
  let applied = apply_transition(OrderStatus::Pending, PaymentStatus::Pending, &request).expect("no requirements");
  assert_eq!(applied.admin_notes, None);
}

#[test]
fn test_applied_row_matches_the_config_table() {
  setup_tracing();
  let request = TransitionRequest::new(OrderStatus::Cancelled).with_admin_notes("oversold");
  let applied = apply_transition(OrderStatus::Pending, PaymentStatus::Pending, &request).unwrap();
  let config_row = row(OrderStatus::Pending, OrderStatus::Cancelled);
  assert!(std::ptr::eq(applied.transition, config_row));
}
