// orderflow/src/transition/config.rs

//! The immutable order-status transition table.
//!
//! One row per legal `(from, to)` pair, in definition order. Definition
//! order matters only for deterministic listing (a status selector shows
//! actions in a stable order, and the first automatable match wins); it has
//! no bearing on which transitions are legal. There is no runtime mutation
//! path, and none should be added.

use serde::Serialize;

use crate::core::status::{OrderStatus, PaymentStatus};

/// One legal status change and what it requires before it may be persisted.
#[derive(Debug, Clone, Serialize)]
pub struct StatusTransition {
  pub from: OrderStatus,
  pub to: OrderStatus,
  /// Short action name, shown on the back-office button.
  pub label: &'static str,
  /// Explanation shown to the operator confirming the change.
  pub description: &'static str,
  /// Blocked until a non-empty admin note is supplied.
  pub requires_admin_notes: bool,
  /// Blocked until a non-empty tracking identifier is supplied.
  pub requires_tracking: bool,
  /// Hint that this change could fire without human confirmation. Advisory
  /// only: nothing in this crate triggers it.
  pub automatable: bool,
  /// Payment statuses the transition is offered under. `None` means no gate.
  pub payment_statuses: Option<&'static [PaymentStatus]>,
}

impl StatusTransition {
  /// True when the row has no payment gate, or the gate includes `payment`.
  pub fn allows_payment_status(&self, payment: PaymentStatus) -> bool {
    match self.payment_statuses {
      None => true,
      Some(allowed) => allowed.contains(&payment),
    }
  }

  /// True when the row demands operator-supplied fields before persisting.
  pub fn has_guard_requirements(&self) -> bool {
    self.requires_admin_notes || self.requires_tracking
  }
}

/// The complete workflow configuration.
///
/// `Delivered` has no outgoing rows, so any attempt to change a delivered
/// order is rejected by lookup, never silently ignored. `Cancelled` is not
/// strictly terminal: the final row is an intentional restore path back to
/// `Pending`, guarded by an admin note.
pub static ORDER_WORKFLOW_CONFIG: [StatusTransition; 8] = [
  StatusTransition {
    from: OrderStatus::Pending,
    to: OrderStatus::Confirmed,
    label: "Confirm order",
    description: "Acknowledge the order and reserve it for fulfilment.",
    requires_admin_notes: false,
    requires_tracking: false,
    automatable: true,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Pending,
    to: OrderStatus::Cancelled,
    label: "Cancel order",
    description: "Cancel before confirmation. A note explaining the cancellation is required.",
    requires_admin_notes: true,
    requires_tracking: false,
    automatable: false,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Confirmed,
    to: OrderStatus::Processing,
    label: "Start processing",
    description: "Move the order into the packing queue.",
    requires_admin_notes: false,
    requires_tracking: false,
    automatable: true,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Confirmed,
    to: OrderStatus::Cancelled,
    label: "Cancel order",
    description: "Cancel a confirmed order. A note explaining the cancellation is required.",
    requires_admin_notes: true,
    requires_tracking: false,
    automatable: false,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Processing,
    to: OrderStatus::Shipped,
    label: "Mark as shipped",
    description: "Hand the parcel to the carrier. A tracking number is required.",
    requires_admin_notes: false,
    requires_tracking: true,
    automatable: true,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Processing,
    to: OrderStatus::Cancelled,
    label: "Cancel order",
    description: "Cancel during processing. A note explaining the cancellation is required.",
    requires_admin_notes: true,
    requires_tracking: false,
    automatable: false,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Shipped,
    to: OrderStatus::Delivered,
    label: "Mark as delivered",
    description: "Confirm the parcel reached the customer.",
    requires_admin_notes: false,
    requires_tracking: false,
    automatable: true,
    payment_statuses: None,
  },
  StatusTransition {
    from: OrderStatus::Cancelled,
    to: OrderStatus::Pending,
    label: "Restore order",
    description: "Return a cancelled order to the fulfilment queue. A note explaining the restore is required.",
    requires_admin_notes: true,
    requires_tracking: false,
    automatable: false,
    payment_statuses: None,
  },
];
